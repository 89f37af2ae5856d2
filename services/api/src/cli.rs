use crate::commands::{run_import, run_tariff, run_words, ImportArgs, TariffArgs, WordsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fait_terrain::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fait Terrain",
    about = "Compute tariffs and manage avis de paiement for Fait Terrain cases",
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
    /// Compute the redevance and amende owed for a case
    Tariff(TariffArgs),
    /// Spell an amount in French as printed on notices
    Words(WordsArgs),
    /// Issue notices for every case in an FT register CSV export
    Import(ImportArgs),
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
        Command::Tariff(args) => run_tariff(args),
        Command::Words(args) => run_words(args),
        Command::Import(args) => run_import(args),
    }
}
