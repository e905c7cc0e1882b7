//! Interactive console session against the shared progress file.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use physics_tutor::config;
use physics_tutor::console::run_session;
use physics_tutor::content::load_bank;
use physics_tutor::store::JsonFileStore;

#[derive(Parser, Debug)]
#[command(name = "physics-tutor")]
#[command(about = "O-level physics exam practice that drills your weak topics")]
struct Args {
    /// Progress file (overrides config.toml and PROGRESS_FILE)
    #[arg(short, long)]
    progress: Option<PathBuf>,

    /// Question bank JSON file (overrides config.toml and QUESTION_BANK)
    #[arg(short, long)]
    questions: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "physics_tutor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let app_config = config::load_config();

    let bank_path = args
        .questions
        .or_else(|| config::question_bank_path(&app_config));
    let bank = match load_bank(bank_path.as_deref()) {
        Ok(bank) => bank,
        Err(e) => {
            tracing::error!("Failed to load question bank: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let progress_path = args
        .progress
        .unwrap_or_else(|| config::progress_path(&app_config));
    let store = JsonFileStore::new(progress_path);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match run_session(&bank, &store, &mut rand::rng(), &mut input, &mut out) {
        Ok(summary) => {
            tracing::debug!("Session finished with {}/{}", summary.score, summary.total);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
