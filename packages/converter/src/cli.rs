//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::derive_output_path;
use crate::error::{ConverterError, Result};
use crate::pipeline;
use crate::workbook::XlsxSource;
use crate::writer::CsvSink;

/// Filialen Converter - Convert a branch directory XLSX to the point-of-sale CSV schema.
#[derive(Parser)]
#[command(name = "filialen-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an XLSX branch directory to CSV.
    Convert {
        /// Path to the source workbook (e.g., Filialverzeichnis.xlsx)
        input: PathBuf,

        /// Output file (default: CSV-<input name>.csv next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => convert_command(&input, output.as_deref()),
    }
}

/// Execute the convert command.
fn convert_command(input: &Path, output: Option<&Path>) -> Result<()> {
    // Fail on a missing source before anything else happens
    if !input.exists() {
        return Err(ConverterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", input.display()),
        )));
    }

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| derive_output_path(input));

    println!(
        "{} {}",
        style("Converting").bold(),
        style(input.display()).cyan()
    );

    let mut source = XlsxSource::new(input);
    let mut sink = CsvSink::new(&output_path);
    let report = pipeline::run(&mut source, &mut sink)?;

    println!(
        "  Records: {} (+ header)",
        style(report.records_written.saturating_sub(1)).green()
    );
    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        sink.path().display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["filialen-converter", "convert", "Filialverzeichnis.xlsx"]);

        let Commands::Convert { input, output } = cli.command;
        assert_eq!(input, PathBuf::from("Filialverzeichnis.xlsx"));
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_convert_with_output() {
        let cli = Cli::parse_from([
            "filialen-converter",
            "convert",
            "Filialverzeichnis.xlsx",
            "--output",
            "branches.csv",
        ]);

        let Commands::Convert { input, output } = cli.command;
        assert_eq!(input, PathBuf::from("Filialverzeichnis.xlsx"));
        assert_eq!(output, Some(PathBuf::from("branches.csv")));
    }

    #[test]
    fn test_convert_command_missing_input() {
        let result = convert_command(Path::new("does-not-exist.xlsx"), None);
        assert!(result.is_err());
    }
}
