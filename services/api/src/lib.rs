mod cli;
mod demo;
mod infra;
mod reports;
mod routes;
mod server;

use recruit_scoring::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
