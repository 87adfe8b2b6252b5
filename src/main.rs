use anyhow::Result;
use meetning::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
