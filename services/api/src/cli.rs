use crate::demo::{run_demo, run_exam_list, run_exam_show, DemoArgs, ExamShowArgs};
use crate::server;
use aspirant_ai::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Aspirant Guidance Service",
    about = "Run the defence and civil services career guidance service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the entrance exam catalog backing study plans
    Exam {
        #[command(subcommand)]
        command: ExamCommand,
    },
    /// Run an end-to-end CLI demo covering screening and study planning
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ExamCommand {
    /// List the exams a study plan can anchor to
    List,
    /// Show one exam's subjects and preparation notes
    Show(ExamShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Exam {
            command: ExamCommand::List,
        } => run_exam_list(),
        Command::Exam {
            command: ExamCommand::Show(args),
        } => run_exam_show(args),
        Command::Demo(args) => run_demo(args),
    }
}
