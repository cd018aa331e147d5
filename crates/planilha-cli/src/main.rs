mod commands;
mod output;
mod ui;

use clap::{Parser, Subcommand};
use planilha_core::error::ConversionError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "planilha",
    version,
    about = "Batch-convert tables in PDF documents into a single spreadsheet workbook"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert up to 10 PDFs into one workbook, one sheet per document
    Convert {
        /// PDF files to convert, processed in the given order (1-10)
        inputs: Vec<PathBuf>,

        /// Path of the output workbook
        #[arg(short, long, default_value = "resultado.xlsx")]
        output: PathBuf,

        /// Summary format: table (default) or json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
    /// Detect tables in one PDF and print them, without writing a workbook
    Inspect {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            inputs,
            output,
            format,
            quiet,
        } => commands::convert::run(inputs, &output, &format, quiet),
        Commands::Inspect { input_file, output } => commands::inspect::run(&input_file, &output),
    };

    if let Err(e) = result {
        match e {
            ConversionError::EmptySelection => ui::notify::print_warning(&e.to_string()),
            _ => ui::notify::print_error(&e.to_string()),
        }
        std::process::exit(1);
    }
}
