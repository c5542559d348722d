use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use zone_managed_headers::config::Config;
use zone_managed_headers::{ListManagedHeadersParams, ZoneApiTrait, ZoneClient};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_file("config.toml").or_else(|e| {
        println!("Config file not found. Creating example config.toml...");
        Config::save_example("config.toml")?;
        println!("Please edit config.toml with your settings and restart the application.");
        Err(e)
    })?;

    // Console pretty logger
    let console_layer = fmt::layer()
        .pretty()
        .with_filter(EnvFilter::new(&config.logging.console_level));

    tracing_subscriber::registry().with(console_layer).init();

    let client = ZoneClient::new(&config.api.base_url, &config.api.api_token);

    let headers = client
        .list_managed_headers(&config.zone.zone_id, ListManagedHeadersParams::default())
        .await?;

    info!(
        "zone {}: {} managed request headers, {} managed response headers",
        config.zone.zone_id,
        headers.managed_request_headers.len(),
        headers.managed_response_headers.len()
    );
    for header in headers
        .managed_request_headers
        .iter()
        .chain(headers.managed_response_headers.iter())
    {
        debug!(
            "{}: enabled={} has_conflict={:?}",
            header.id, header.enabled, header.has_conflict
        );
    }

    Ok(())
}
