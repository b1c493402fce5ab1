#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    validator_dashboard::start_server().await?;
    Ok(())
}
