use anyhow::Result;
use wattsaver::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
