use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    dayboard_core::init()?;

    // Load and validate configuration
    let (config, _validation) = dayboard_core::Config::load_validated()?;

    tracing::info!("Dayboard application started");

    // Compose the page and run it
    if let Err(e) = dayboard_ui::run(config).await {
        tracing::error!("Page failed: {}", e);
        eprintln!("{}", e.user_message());
        return Err(e.into());
    }

    Ok(())
}
