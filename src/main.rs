//! Contact CRM - Main entry point
//!
//! Opens the contact table, then serves it over the Model Context Protocol
//! on stdio until the client disconnects.

use anyhow::{anyhow, Result};
use contact_crm::repositories::JsonFileContactRepository;
use contact_crm::{Config, ContactMcpServer, ContactStore};
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config_result = Config::from_env();
    let log_level = config_result
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config_result {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact CRM with table file: {}",
        config.db_path.display()
    );

    // Open the store once for the life of the process
    let repo = JsonFileContactRepository::open(&config.db_path)?;
    let store = Arc::new(Mutex::new(ContactStore::new(Box::new(repo))));

    let server = ContactMcpServer::new(store.clone(), config.validate_on_add);
    info!(
        "Contact MCP server initialized (validate on add: {})",
        config.validate_on_add
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    let served = contact_crm::server::run_server(server).await;

    // Flush even if the server failed, then report the first error
    let flushed = store
        .lock()
        .map_err(|_| anyhow!("contact store lock poisoned"))
        .and_then(|mut s| s.flush().map_err(Into::into));

    served?;
    flushed?;

    info!("Contact CRM shutdown complete");
    Ok(())
}
