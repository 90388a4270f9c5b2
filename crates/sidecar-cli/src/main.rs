//! `sidecar` command-line tool.

use clap::Parser;

use sidecar_cli::cli::{Cli, Command};
use sidecar_cli::commands::{FileOutput, run_file, run_metadata, run_terms};
use sidecar_cli::config::load_settings;
use sidecar_cli::logging::{LogConfig, init_logging};
use sidecar_cli::summary::{print_metadata_summary, print_terms_summary};
use sidecar_ingest::DataFormat;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = LogConfig::from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let settings = load_settings(cli.config.as_deref())?;
    match &cli.command {
        Command::Csv(args) => {
            print_file_output(run_file(args, DataFormat::Csv, &settings)?);
            Ok(0)
        }
        Command::Json(args) => {
            print_file_output(run_file(args, DataFormat::Json, &settings)?);
            Ok(0)
        }
        Command::Metadata(args) => {
            let run = run_metadata(args, &settings)?;
            print_metadata_summary(&run);
            Ok(if run.has_failures() { 1 } else { 0 })
        }
        Command::Terms(args) => {
            let run = run_terms(args, &settings)?;
            print_terms_summary(&run);
            Ok(0)
        }
    }
}

fn print_file_output(output: FileOutput) {
    match output {
        FileOutput::Written(output) => println!("Metadata written to {}", output.path.display()),
        FileOutput::Rendered(text) => print!("{text}"),
    }
}
