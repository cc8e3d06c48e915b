//! CLI definitions and entry point

use std::io;

use clap::Parser;

use classreg::output::OutputMode;
use classreg::registry::Registry;
use classreg::repl;

/// classreg - Interactive registry of classrooms, students, and assignments
#[derive(Parser, Debug, Clone, Copy)]
#[command(
    name = "classreg",
    version,
    about = "Interactive registry of classrooms, students, and assignments",
    long_about = "Track virtual classrooms from the command line.\n\n\
                  Commands are read one per line from standard input:\n\
                  add_classroom, add_student, schedule_assignment,\n\
                  submit_assignment, exit."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output one JSON record per command (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut registry = Registry::new();
    let stdin = io::stdin();
    repl::run(stdin.lock(), &mut registry, output_mode)
}
