mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hplc",
    version,
    about = "Extract peak areas and calibration curves from HPLC report PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which pattern set to parse reports with.
#[derive(clap::Args)]
struct PatternArgs {
    /// Predefined pattern set: en, es
    #[arg(short, long, default_value = hplc_core::patterns::builtin::DEFAULT_PRESET)]
    preset: String,

    /// Custom JSON pattern file (overrides --preset)
    #[arg(long = "patterns", value_name = "FILE")]
    patterns: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a report PDF into samples, standards and internal standards
    Parse {
        /// Path to the report PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        patterns: PatternArgs,
    },
    /// Export one result workbook per report PDF
    Export {
        /// Report PDFs
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Directory the workbooks are written to
        #[arg(short = 'd', long = "out-dir", value_name = "DIR")]
        out_dir: PathBuf,

        /// Number of files processed in parallel
        #[arg(short, long, default_value_t = 4)]
        jobs: usize,

        #[command(flatten)]
        patterns: PatternArgs,
    },
    /// Inspect and validate pattern sets
    Patterns {
        #[command(subcommand)]
        action: PatternsAction,
    },
}

#[derive(Subcommand)]
enum PatternsAction {
    /// List predefined pattern sets
    List,
    /// Print a predefined pattern set as JSON
    Show {
        /// Preset name (e.g., "en")
        preset: String,
    },
    /// Validate a custom pattern file
    Validate {
        /// Path to JSON pattern file
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            patterns,
        } => commands::parse::run(input_file, &output, out, &patterns.preset, patterns.patterns),
        Commands::Export {
            input_files,
            out_dir,
            jobs,
            patterns,
        } => commands::export::run(input_files, out_dir, jobs, &patterns.preset, patterns.patterns),
        Commands::Patterns { action } => match action {
            PatternsAction::List => commands::patterns::list(),
            PatternsAction::Show { preset } => commands::patterns::show(&preset),
            PatternsAction::Validate { file } => commands::patterns::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
