use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use python_quiz::config::{Config, DEFAULT_DATABASE_PATH, DEFAULT_LOG_DIR};
use python_quiz::{Quiz, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// SQLite database holding the questions (created if missing)
    #[arg(short, long, default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,

    /// JSON file to seed an empty database from instead of the built-in questions
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Directory for the log file
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            database: args.database,
            questions: args.questions,
            log_dir: args.log_dir,
        }
    }
}

fn main() -> ExitCode {
    let config = Config::from(Args::parse());

    let _log_guard = match logging::init(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    let quiz = match Quiz::open(&config) {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            eprintln!("Failed to start quiz: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = quiz.run() {
        tracing::error!(error = %e, "quiz aborted");
        eprintln!("Error running quiz: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
