pub mod config;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;
use revbot_api::{HttpBackend, MockBackend, ReviewBackend};
use tracing::info;

pub use config::{ServerCliFlags, ServerConfig};
pub use routes::{ProxyState, router};

/// Run the proxy until the task is cancelled or the listener fails.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let backend: Arc<dyn ReviewBackend> = if config.mock {
        info!("serving mock fixture responses; no backend will be contacted");
        Arc::new(MockBackend::default())
    } else {
        Arc::new(HttpBackend::new(&config.backend_url))
    };

    let state = Arc::new(ProxyState { backend });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!(
        listen = %config.listen,
        backend_url = %config.backend_url,
        mock = config.mock,
        "review proxy listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
