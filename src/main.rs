use kenall::cli;
use kenall::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::Cli::run().await
}
