//! The external synthesizer boundary.
//!
//! The front-end never synthesizes anything itself: it stages the full
//! specification text in a temporary file, hands the path to an external
//! executable, and maps the run onto exactly three outcomes. Synthesized
//! text is passed through verbatim, never interpreted.

use std::fmt;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::errors::{unspanned, ErrorReporting, SourceContext, SpecError};

/// Fixed placeholder for a run that exceeded its timeout.
pub const TIMED_OUT_PLACEHOLDER: &str = "(* Yet. *)";

/// Fixed placeholder for input the synthesizer itself rejected.
pub const REJECTED_PLACEHOLDER: &str = "(* Check your input format. *)";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Failures of the boundary itself, as opposed to outcomes of the run.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("failed to stage specification for synthesis: {0}")]
    Stage(#[source] std::io::Error),
    #[error("failed to launch synthesizer '{exe}': {source}")]
    Launch {
        exe: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to collect synthesizer output: {0}")]
    Collect(#[source] std::io::Error),
}

impl From<SynthError> for SpecError {
    fn from(error: SynthError) -> Self {
        SourceContext::fallback("synthesizer").io_error(&error.to_string(), unspanned())
    }
}

/// The three possible results of a synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthOutcome {
    /// The synthesizer produced program text.
    Synthesized(String),
    /// The run was killed after the timeout elapsed.
    TimedOut,
    /// The synthesizer exited unsuccessfully on the given input.
    Rejected,
}

impl SynthOutcome {
    pub fn as_text(&self) -> &str {
        match self {
            SynthOutcome::Synthesized(text) => text,
            SynthOutcome::TimedOut => TIMED_OUT_PLACEHOLDER,
            SynthOutcome::Rejected => REJECTED_PLACEHOLDER,
        }
    }
}

impl fmt::Display for SynthOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

/// Handle to the external synthesizer executable.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    exe: PathBuf,
    timeout: Duration,
}

impl Synthesizer {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self {
            exe: exe.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run the synthesizer over one specification.
    ///
    /// The specification is written to a transient file whose path becomes
    /// the executable's only argument. A run past the timeout is killed and
    /// reported as `TimedOut`; an unsuccessful exit is `Rejected`. On
    /// success the result is read from stderr - the synthesizer reports its
    /// program there, not on stdout.
    pub fn run(&self, spec_text: &str) -> Result<SynthOutcome, SynthError> {
        let mut staged = NamedTempFile::new().map_err(SynthError::Stage)?;
        staged
            .write_all(spec_text.as_bytes())
            .map_err(SynthError::Stage)?;
        staged.flush().map_err(SynthError::Stage)?;

        let mut child = Command::new(&self.exe)
            .arg(staged.path())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SynthError::Launch {
                exe: self.exe.display().to_string(),
                source,
            })?;

        let started = Instant::now();
        loop {
            match child.try_wait().map_err(SynthError::Collect)? {
                Some(status) => {
                    // Drained after exit; synthesized programs are small
                    // relative to the pipe buffer.
                    let text = read_stderr(&mut child)?;
                    return Ok(if status.success() {
                        SynthOutcome::Synthesized(text)
                    } else {
                        SynthOutcome::Rejected
                    });
                }
                None if started.elapsed() >= self.timeout => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(SynthOutcome::TimedOut);
                }
                None => std::thread::sleep(POLL_INTERVAL),
            }
        }
    }
}

fn read_stderr(child: &mut Child) -> Result<String, SynthError> {
    let mut text = String::new();
    if let Some(mut stderr) = child.stderr.take() {
        stderr
            .read_to_string(&mut text)
            .map_err(SynthError::Collect)?;
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_exact() {
        assert_eq!(SynthOutcome::TimedOut.as_text(), "(* Yet. *)");
        assert_eq!(
            SynthOutcome::Rejected.as_text(),
            "(* Check your input format. *)"
        );
    }

    #[test]
    fn launch_failure_is_an_error_not_an_outcome() {
        let synth = Synthesizer::new("/nonexistent/mlspec-synth-binary");
        assert!(matches!(
            synth.run("synth bool satisfying"),
            Err(SynthError::Launch { .. })
        ));
    }
}
