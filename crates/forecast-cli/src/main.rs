mod commands;
mod output;

use clap::{Parser, Subcommand};
use forecast_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "forecast",
    version,
    about = "Extract delivery forecast records from supplier PDF reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract records and export them as a CSV file
    Extract {
        /// PDF file, or a directory scanned for *.pdf
        input: PathBuf,

        /// Directory for the timestamped CSV export
        #[arg(short = 'o', long = "out-dir", default_value = "output")]
        out_dir: PathBuf,

        /// Stream CSV to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Parse a PDF and print its records (without exporting)
    Parse {
        /// PDF file, or a directory scanned for *.pdf
        input: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let extractor = PdftotextExtractor::new();

    let result = match cli.command {
        Commands::Extract {
            input,
            out_dir,
            stdout,
        } => commands::extract::run(input, out_dir, stdout, &extractor),
        Commands::Parse { input, output } => commands::parse::run(input, &output, &extractor),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
