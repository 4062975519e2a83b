use anyhow::{Context, Result};
use cli::AppConfig;
use research::RoomApiClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    cli::init_tracing();

    let mut config = AppConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        let limit = arg
            .parse::<usize>()
            .context(format!("Invalid room limit: {}", arg))?;
        config.research.limit = Some(limit);
    }

    let client = RoomApiClient::new(config.research.base_url.clone(), config.research.timeout())?;

    let results =
        research::research_missing_data(&client, &config.datasets.rooms, config.research.limit)
            .await?;

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
