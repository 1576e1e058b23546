//! gradepoint CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use gradepoint_core::error::BatchError;
use gradepoint_report::batch::render_failure;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "gradepoint",
    version,
    about = "GPA and CGPA calculator on a 10-point scale"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a CSV of courses and print the CGPA listing
    Report {
        /// CSV with columns: Course Name, Subject Area (optional), Credits, Marks
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show per-semester GPA and overall CGPA for a transcript
    Transcript {
        /// Path to the transcript .toml file
        #[arg(long)]
        file: PathBuf,

        /// Output format: text, json, html
        #[arg(long)]
        format: Option<String>,

        /// Directory to write json/html output to
        #[arg(long)]
        output: Option<PathBuf>,

        /// List every course, not only the semester summary
        #[arg(long)]
        detailed: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a transcript file
    Validate {
        /// Path to the transcript .toml file
        #[arg(long)]
        file: PathBuf,
    },

    /// Convert marks to grade points
    Grade {
        /// Marks between 0 and 100
        #[arg(required = true, allow_negative_numbers = true)]
        marks: Vec<f64>,
    },

    /// Print the grade-point scale
    Scale,

    /// Create a starter config, course CSV, and transcript
    Init,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report { file, config } => commands::report::execute(file, config),
        Commands::Transcript {
            file,
            format,
            output,
            detailed,
            config,
        } => commands::transcript::execute(file, format, output, detailed, config),
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::Grade { marks } => commands::grade::execute(&marks),
        Commands::Scale => commands::scale::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        match e.downcast_ref::<BatchError>() {
            Some(batch) => eprint!("{}", render_failure(batch)),
            None => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}
