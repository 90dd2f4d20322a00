//! WebServer entry point

use clap::Parser;
use std::net::SocketAddr;

use catalog::{CatalogConfig, CatalogError, CatalogLoader, DEFAULT_FEED_URL, RowPolicy};
use shared::{ComponentId, component_info, component_warn, logging};
use webserver::{PageConfig, WebServer, WebServerError, WebServerResult};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Browse a published CSV catalog by level, subject and title")]
struct Args {
    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Published CSV feed URL
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Reject the whole feed when any row is malformed
    #[arg(long)]
    strict: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Page heading and browser title
    #[arg(long, default_value = "Catalog")]
    page_title: String,

    /// Optional community link shown under the heading
    #[arg(long)]
    community_url: Option<String>,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ComponentId::WebServer, "catalog browser");

    let row_policy = if args.strict { RowPolicy::Strict } else { RowPolicy::Lenient };
    let config = CatalogConfig::new(args.feed_url).with_row_policy(row_policy);

    match config.validate() {
        Ok(()) => {}
        // Surfaced to the browser by the ingestion task instead of aborting startup
        Err(CatalogError::FeedNotConfigured) => {
            component_warn!(ComponentId::WebServer, "⚠️ Feed URL still holds the placeholder");
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(url) = &args.community_url {
        shared::validate_http_url(url).map_err(|e| WebServerError::config(e.to_string()))?;
    }

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid address: {e}")))?;

    component_info!(
        ComponentId::WebServer,
        row_policy = ?config.row_policy,
        "📋 Catalog feed: {}",
        config.feed_url
    );

    let page = PageConfig {
        title: args.page_title,
        community_url: args.community_url,
    };
    let webserver = WebServer::new(page);
    webserver.run(http_addr, CatalogLoader::from_config(&config)).await?;

    logging::log_success(ComponentId::WebServer, "WebServer stopped gracefully");
    Ok(())
}
