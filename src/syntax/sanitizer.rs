//! Comment stripping with string and escape awareness.
//!
//! `(* ... *)` spans are removed; everything else, newlines included, is
//! preserved byte-for-byte so line-oriented section splitting downstream
//! keeps working on the sanitized text.

/// Strip comment spans from `input`.
///
/// A single left-to-right scan over three pieces of state: inside-string,
/// escape-pending, inside-comment. Comments do not nest - the first `*)`
/// closes, regardless of any `(*` seen in between. A `(*` inside a string
/// literal does not open a comment, and a `"` inside a comment does not
/// open a string.
///
/// # Examples
///
/// ```rust
/// use mlspec::syntax::sanitize;
/// assert_eq!(sanitize("a (* gone *) b"), "a  b");
/// assert_eq!(sanitize("\"a(*b*)c\""), "\"a(*b*)c\"");
/// ```
pub fn sanitize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut prev = '\0';
    let mut escape_pending = false;
    let mut in_string = false;
    let mut in_comment = false;

    for ch in input.chars() {
        if in_comment {
            // String state is frozen inside a comment; only the closer
            // matters here.
            if ch == ')' && prev == '*' {
                in_comment = false;
            }
            prev = ch;
            continue;
        }

        if in_string {
            if escape_pending {
                escape_pending = false;
            } else if ch == '\\' {
                escape_pending = true;
            } else if ch == '"' {
                in_string = false;
            }
            result.push(ch);
            prev = ch;
            continue;
        }

        // Comment-open detection only runs outside strings.
        if ch == '*' && prev == '(' {
            // The opening '(' has already been emitted; retract it.
            result.pop();
            in_comment = true;
            prev = ch;
            continue;
        }

        if ch == '"' {
            in_string = true;
        }
        result.push(ch);
        prev = ch;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_comment_span() {
        assert_eq!(sanitize("before (* inside *) after"), "before  after");
    }

    #[test]
    fn preserves_newlines_around_comments() {
        let input = "line1\n(* gone *)\nline2\n";
        assert_eq!(sanitize(input), "line1\n\nline2\n");
    }

    #[test]
    fn comment_opener_inside_string_is_literal() {
        assert_eq!(sanitize("\"a(*b*)c\""), "\"a(*b*)c\"");
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        assert_eq!(sanitize(r#""a\"(*b*)""#), r#""a\"(*b*)""#);
    }

    #[test]
    fn comments_do_not_nest() {
        // The first *) closes; the trailing *) stays in the output.
        assert_eq!(sanitize("a (* x (* y *) b *)"), "a  b *)");
    }

    #[test]
    fn quote_inside_comment_does_not_open_string() {
        assert_eq!(sanitize("a (* \" *) b"), "a  b");
    }

    #[test]
    fn empty_comment_collapses() {
        assert_eq!(sanitize("a(**)b"), "ab");
    }
}
