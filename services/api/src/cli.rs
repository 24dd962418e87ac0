use crate::demo::{run_demo, run_utilization_report, DemoArgs, UtilizationReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use workforce_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Workforce Insights",
    about = "Serve and render workforce utilization reports from the command line",
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
    /// Work with workforce utilization reports
    Utilization {
        #[command(subcommand)]
        command: UtilizationCommand,
    },
    /// Render the bundled sample dataset as a utilization report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum UtilizationCommand {
    /// Build the utilization report rows and print them
    Report(UtilizationReportArgs),
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
        Command::Utilization {
            command: UtilizationCommand::Report(args),
        } => run_utilization_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
