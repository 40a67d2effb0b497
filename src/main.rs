use anyhow::Context;
use rmcp::{ServiceExt, transport::stdio};
use scheme_finder::{Catalog, Config, DirectoryServer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    scheme_finder::tracing::init(config.log_format);

    tracing::info!("Starting scheme-finder MCP server");

    // Validate the catalog once; it is read-only from here on
    let catalog = Catalog::load(&config.catalog_path)
        .with_context(|| format!("Cannot start without a catalog ({})", config.catalog_path.display()))?;

    let server = DirectoryServer::new(Arc::new(catalog));
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
