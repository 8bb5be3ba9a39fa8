use std::process::ExitCode;

use aspirant_ai_api::run;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = run().await {
        eprintln!("career guidance service failed: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
