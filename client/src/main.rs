//! Pong - two players, one keyboard
//!
//! Player 1 uses W/S, player 2 uses O/L, G serves and Escape quits. The
//! score is printed to the console after every point.

mod app;
mod camera;
mod error;
mod input;
mod mesh;
mod renderer;

use std::io::{self, Write};

use anyhow::{Context, Result};
use game_core::{Config, ScoreReporter};
use tracing::{debug, error, warn, Level};
use winit::event_loop::{ControlFlow, EventLoop};

use app::PongApp;
use error::ClientError;

fn main() {
    // Logs go to stderr; stdout carries the banner and score line
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut reporter = ScoreReporter::new(io::stdout());
    if let Err(e) = reporter.banner() {
        warn!("Failed to print banner: {}", e);
    }

    let seed: u64 = rand::random();
    debug!(seed, "Serve angle seed");

    let mut app = PongApp::new(Config::default(), seed, reporter);
    let outcome = run(&mut app);

    let mut reporter = app.into_reporter();
    finish_run(&mut reporter, outcome);
}

/// Open the window and drive the frame loop until quit
fn run(app: &mut PongApp) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(ClientError::from)
        .context("Failed to initialize video")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    event_loop.run_app(app).context("Event loop failed")?;

    if let Some(err) = app.take_init_error() {
        return Err(err).context("Failed to start Pong");
    }
    Ok(())
}

/// A failed startup is reported on stderr only; the process still exits 0
/// after ending the score line.
fn finish_run<W: Write>(reporter: &mut ScoreReporter<W>, outcome: Result<()>) {
    if let Err(err) = outcome {
        error!("{:#}", err);
    }
    if let Err(e) = reporter.finish() {
        warn!("Failed to end score line: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_failure_still_ends_score_line() {
        let mut reporter = ScoreReporter::new(Vec::new());
        let outcome: Result<()> = Err(ClientError::NoAdapter).context("Failed to start Pong");

        finish_run(&mut reporter, outcome);

        assert_eq!(reporter.into_inner(), b"\n");
    }

    #[test]
    fn test_clean_run_ends_score_line() {
        let mut reporter = ScoreReporter::new(Vec::new());
        reporter.report(&game_core::Score { left: 2, right: 1 }).unwrap();

        finish_run(&mut reporter, Ok(()));

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.ends_with("       2           1\n"));
    }
}
