use clap::Parser;
use klagen_content::utils::{logger, validation::Validate};
use klagen_content::{
    build_sanity_config, fetch_about_page, fetch_homepage, CliConfig, Page, SanityClient, SanityEnv,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting klagen-content CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // The one place real environment variables are read; everything below
    // works from the explicit SanityEnv value.
    let env = SanityEnv {
        project_id: std::env::var("SANITY_PROJECT_ID").ok(),
        dataset: std::env::var("SANITY_DATASET").ok(),
        api_version: config
            .api_version
            .clone()
            .or_else(|| std::env::var("SANITY_API_VERSION").ok()),
        use_cdn: config.no_cdn.then_some(false),
    };

    let sanity_config = match build_sanity_config(&env) {
        Ok(sanity_config) => sanity_config,
        Err(e) => {
            tracing::error!("Cannot configure the Sanity client: {}", e);
            eprintln!("{}", e);
            eprintln!("Set SANITY_PROJECT_ID and SANITY_DATASET and try again.");
            std::process::exit(1);
        }
    };

    let client = SanityClient::new(sanity_config)?;

    let output = match config.page {
        Page::Homepage => serde_json::to_string_pretty(&fetch_homepage(&client).await?)?,
        Page::About => serde_json::to_string_pretty(&fetch_about_page(&client).await?)?,
    };

    println!("{}", output);
    Ok(())
}
