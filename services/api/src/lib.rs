mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use fait_terrain::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
