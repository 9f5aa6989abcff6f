use crate::commands::{run_list, run_metrics, run_show, run_update, ListArgs, UpdateArgs};
use crate::server;
use admissions::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Admissions Dashboard Backend",
    about = "Serve or inspect the simulated admissions backend from the command line",
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
    /// Print the dashboard metrics for the generated fixture
    Metrics,
    /// Print one page of applications, optionally searched by name or id
    List(ListArgs),
    /// Print a single application by id
    Show {
        /// Application id, e.g. APP-2023-007
        id: String,
    },
    /// Apply a partial update to an application and print the merged record
    Update(UpdateArgs),
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
        Command::Metrics => run_metrics().await,
        Command::List(args) => run_list(args).await,
        Command::Show { id } => run_show(id).await,
        Command::Update(args) => run_update(args).await,
    }
}
