use anyhow::Result;
use cli::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    cli::init_tracing();

    let config = AppConfig::default();

    let output = pipeline::download_results(
        &config.export.filename,
        &config.export.format.to_string(),
        &config.datasets,
        config.batch.batch_size,
    )
    .await?;

    println!("Saved {}", output.display());

    Ok(())
}
