use crate::batch::{run_batch, BatchArgs};
use crate::demo::{run_demo, run_simulate, DemoArgs, SimulateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use retirement_engine::error::AppError;
use retirement_engine::simulation::DayCountPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "PMMG Retirement Simulator",
    about = "Evaluate retirement eligibility for PMMG civilian staff from the command line or over HTTP",
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
    /// Evaluate one servant and print the calculation report
    Simulate(SimulateArgs),
    /// Evaluate a JSON array of servants and write a CSV summary
    Batch(BatchArgs),
    /// Run the built-in sample servants through the engine
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
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

/// Engine settings shared by every subcommand.
#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct EngineArgs {
    /// Day-count convention (anniversary, anniversary-inclusive, calendar-inclusive, calendar-exclusive)
    #[arg(long, value_parser = crate::infra::parse_policy)]
    pub(crate) day_count_policy: Option<DayCountPolicy>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Simulate(args) => run_simulate(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
