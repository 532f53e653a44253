use crate::demo::{run_demo, run_estimate, run_import, DemoArgs, EstimateArgs, ImportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use startup_valuation::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Startup Valuation Engine",
    about = "Score wizard answers and produce provisional startup valuations",
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
    /// Assess a single wizard submission stored as JSON
    Estimate(EstimateArgs),
    /// Assess every row of a wizard CSV export
    Import(ImportArgs),
    /// Walk through a sample submission from empty answers to a full profile
    Demo(DemoArgs),
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
        Command::Estimate(args) => run_estimate(args),
        Command::Import(args) => run_import(args),
        Command::Demo(args) => run_demo(args),
    }
}
