use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use env_logger::Env;
use log::{error, warn};
use strings_lint::report::SilentReporter;
use strings_lint::{Entries, FormatOutcome, Reporter, ValidationResult, check_file, format_file};
use strings_lint_cli::console::{ConsoleReporter, RULE, print_banner, print_heading};
use strings_lint_cli::error::CliError;

const LONG_ABOUT: &str = "Automates formatting a text file of \"key\" = \"value\"; lines into an \
Android strings.xml layout. Every line of the text file is checked for formatting errors and \
duplicate keys. If there are none, a strings.xml is generated in the destination directory, \
overwriting any existing one. Otherwise each error is reported with the line it is on.";

#[derive(Parser, Debug)]
#[command(name = "strings-lint", author, version, about, long_about = LONG_ABOUT)]
#[command(group(ArgGroup::new("mode").args(["check", "format"])))]
struct Args {
    /// Checks the text file for any formatting errors
    #[arg(short, long)]
    check: bool,

    /// Formats and writes strings.xml if no errors are found
    #[arg(short, long)]
    format: bool,

    /// Print the validation result as JSON instead of log lines
    #[arg(long)]
    json: bool,

    /// Text file name to be checked/formatted
    text_file_name: String,

    /// Directory of the text file
    source_path: PathBuf,

    /// Directory where strings.xml is written
    dest_path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, CliError> {
    if !args.json {
        print_banner();
    }

    let mut console = ConsoleReporter;
    let mut silent = SilentReporter;
    let reporter: &mut dyn Reporter = if args.json { &mut silent } else { &mut console };

    if args.check {
        if !args.json {
            print_heading("CHECKING TEXT FILE");
        }
        let result = check_file(&args.source_path, &args.text_file_name, reporter)?;
        let code = exit_code(&result);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Ok(code)
    } else if args.format {
        if !args.json {
            print_heading("ATTEMPTING TO CONSTRUCT XML");
        }
        let outcome = format_file(
            &args.source_path,
            &args.text_file_name,
            &args.dest_path,
            reporter,
        )?;
        let (result, code) = match outcome {
            FormatOutcome::Written { entries, .. } => {
                if !args.json {
                    println!();
                    println!("SUCCESSFULLY CREATED FILE");
                    println!("{}", RULE);
                }
                (ValidationResult::Clean { entries }, ExitCode::SUCCESS)
            }
            FormatOutcome::Rejected(report) => {
                error!("Please fix all errors before passing in this argument.");
                (ValidationResult::Invalid(report), ExitCode::from(1))
            }
            FormatOutcome::NothingToWrite => {
                error!("Please fix all errors before passing in this argument.");
                let result = ValidationResult::Clean {
                    entries: Entries::new(),
                };
                (result, ExitCode::from(1))
            }
        };
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Ok(code)
    } else {
        warn!("Passed argument is invalid.");
        Ok(ExitCode::SUCCESS)
    }
}

fn exit_code(result: &ValidationResult) -> ExitCode {
    if result.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
