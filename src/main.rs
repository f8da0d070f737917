use anyhow::Result;
use proton_api_service::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
