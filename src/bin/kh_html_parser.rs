//! kh-html-parser CLI - extract the text of an HTML file into `<name>.txt`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use kh_html_parser::pipeline::{self, StdoutReporter};
use kh_html_parser::Options;

#[derive(Parser)]
#[command(name = "kh-html-parser")]
#[command(about = "Parse and extract Khmer text from an HTML file.", long_about = None)]
struct Cli {
    /// Path to the input HTML file.
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help goes to stdout and is not a failure
            if let Err(e) = err.print() {
                debug!("failed to print usage: {e}");
            }
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match pipeline::run_with(&cli.input_file, &Options::default(), &mut StdoutReporter) {
        Ok(report) => {
            debug!(
                "{} -> {}: {} bytes in, {} chars out",
                report.input.display(),
                report.output.display(),
                report.bytes_read,
                report.chars_written
            );
            ExitCode::SUCCESS
        }
        Err(err) if err.is_not_found() => {
            eprintln!("[ERROR] {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("[ERROR] An unexpected error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
