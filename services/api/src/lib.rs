//! Command line surface for the career guidance service: an axum server,
//! exam catalog inspection, and a scripted demo walkthrough.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use aspirant_ai::error::AppError;

/// Parses the command line and dispatches to the selected entry point.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
