mod cli;
mod tui;
mod ui;

use std::sync::Arc;

use clap::Parser;

use quizkit::app::{self, App};
use quizkit::config::Config;
use quizkit::error::AppError;
use quizkit::loader::{FsQuizLoader, FsTemplateLoader, LoadDispatcher};
use quizkit::session::Session;
use quizkit::timer::ThreadTicker;

use crate::cli::Cli;

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref())?.with_overrides(cli.overrides());
    log::info!(
        "config: timer {}, feedback {}",
        config.timer_enabled,
        config.feedback_on_each_question
    );

    if !cli.quizzes.is_dir() {
        return Err(AppError::Load(quizkit::LoadError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("quiz directory not found: {}", cli.quizzes.display()),
        ))));
    }

    let (ticker, timer_rx) = ThreadTicker::channel();
    let (loads, load_rx) = LoadDispatcher::channel(
        Arc::new(FsQuizLoader::new(&cli.quizzes)),
        Arc::new(FsTemplateLoader::new(&cli.templates)),
    );

    let session = Session::new(config, Box::new(ticker));
    let app = App::new(session, loads);
    let router = app::build_router();

    tui::run_tui(app, router, &cli.start, timer_rx, load_rx)
}
