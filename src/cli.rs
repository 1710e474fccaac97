//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::Write;
use std::{path::PathBuf, process, time::Duration};

use clap::{Parser, Subcommand};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use walkdir::WalkDir;

use crate::{
    pipeline::SpecPipeline, spec::ParsedSpec, synth::Synthesizer, syntax::sanitizer, SpecError,
};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "mlspec",
    version,
    about = "A front-end for ML-style program-synthesis specifications."
)]
pub struct MlspecArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Parse a specification and print its structured form.
    Parse {
        /// The path to the specification file to parse.
        #[arg(required = true)]
        file: PathBuf,
        /// Emit the parsed specification as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print a specification with comment spans removed.
    Sanitize {
        /// The path to the specification file to sanitize.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// List every example with its canonical argument and result forms.
    Examples {
        /// The path to the specification file to read examples from.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Parse all .mls specifications under a directory and report failures.
    Check {
        /// The directory to scan for .mls files.
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Hand a specification to the external synthesizer and print the outcome.
    Synth {
        /// The path to the specification file to synthesize from.
        #[arg(required = true)]
        file: PathBuf,
        /// Path to the synthesizer executable.
        #[arg(long, default_value = "trio")]
        synthesizer: PathBuf,
        /// Seconds before a run is abandoned.
        #[arg(long, default_value_t = 120)]
        timeout: u64,
    },
}

// ============================================================================
// MAIN ENTRY POINT - Direct pipeline calls
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = MlspecArgs::parse();

    match args.command {
        ArgsCommand::Parse { file, json } => {
            let spec = parse_file_or_exit(&file);
            if json {
                match serde_json::to_string_pretty(&spec) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(error) => {
                        eprintln!("Failed to serialize specification: {}", error);
                        process::exit(1);
                    }
                }
            } else {
                print_spec(&spec);
            }
        }

        ArgsCommand::Sanitize { file } => {
            let source = read_file_or_exit(&file);
            print!("{}", sanitizer::sanitize(&source));
        }

        ArgsCommand::Examples { file } => {
            let spec = parse_file_or_exit(&file);
            if spec.examples.is_empty() {
                println!("(no examples)");
                return;
            }
            for example in &spec.examples {
                println!("{}", example);
            }
        }

        ArgsCommand::Check { path } => {
            run_check(path);
        }

        ArgsCommand::Synth {
            file,
            synthesizer,
            timeout,
        } => {
            let source = read_file_or_exit(&file);
            // Surface front-end diagnostics before the synthesizer gets a
            // chance to reject the same input with a bare placeholder.
            if let Err(error) = SpecPipeline::parse_source(&file.display().to_string(), &source) {
                print_error(error);
                process::exit(1);
            }
            let outcome = Synthesizer::new(synthesizer)
                .with_timeout(Duration::from_secs(timeout))
                .run(&source)
                .unwrap_or_else(|error| {
                    print_error(error.into());
                    process::exit(1);
                });
            println!("{}", outcome);
        }
    }
}

// ============================================================================
// FLAT, LINEAR CHECK RUNNER
// ============================================================================

fn run_check(root: PathBuf) {
    let mut files: Vec<PathBuf> = WalkDir::new(&root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "mls"))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    if files.is_empty() {
        println!("No .mls specifications found under {}", root.display());
        return;
    }

    let color_choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut passed = 0;
    let mut failed = 0;
    for file in &files {
        match SpecPipeline::parse_file(file) {
            Ok(spec) => {
                passed += 1;
                print_mark(&mut stdout, Color::Green, "✓");
                println!(" {} ({} examples)", file.display(), spec.examples.len());
            }
            Err(error) => {
                failed += 1;
                print_mark(&mut stdout, Color::Red, "✗");
                println!(" {}", file.display());

                // Let miette handle the rich error display.
                let report = miette::Report::new(error);
                eprintln!("{report:?}");
            }
        }
    }

    println!(
        "\n{} checked: {} passed, {} failed",
        files.len(),
        passed,
        failed
    );
    if failed > 0 {
        process::exit(1);
    }
}

fn print_mark(stream: &mut StandardStream, color: Color, mark: &str) {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    let _ = stream.set_color(&spec);
    let _ = write!(stream, "{}", mark);
    let _ = stream.reset();
    let _ = stream.flush();
}

// ============================================================================
// HELPER FUNCTIONS - Common patterns extracted
// ============================================================================

fn read_file_or_exit(path: &PathBuf) -> String {
    SpecPipeline::read_file(path).unwrap_or_else(|error| {
        print_error(error);
        process::exit(1);
    })
}

fn parse_file_or_exit(path: &PathBuf) -> ParsedSpec {
    SpecPipeline::parse_file(path).unwrap_or_else(|error| {
        print_error(error);
        process::exit(1);
    })
}

// ============================================================================
// OUTPUT FUNCTIONS - Simple, direct output
// ============================================================================

fn print_spec(spec: &ParsedSpec) {
    println!("Types:");
    if spec.types.is_empty() {
        println!("  (none)");
    }
    for decl in &spec.types {
        println!("  {} = {}", decl.name, decl.variants.join(" | "));
    }

    println!("Functions:");
    if spec.functions.is_empty() {
        println!("  (none)");
    }
    for func in &spec.functions {
        println!("  {} ({} lines)", func.name, func.code.lines().count());
    }

    println!("Signature:");
    match &spec.signature {
        Some(signature) => println!("  {}", signature),
        None => println!("  (none)"),
    }

    println!("Examples:");
    if spec.examples.is_empty() {
        println!("  (none)");
    }
    for example in &spec.examples {
        println!("  {}", example);
    }
}

fn print_error(error: SpecError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
