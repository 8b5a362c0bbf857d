use log::warn;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::{KenallError, Result};

/// Default `User-Agent` sent with every request.
pub fn default_user_agent() -> String {
    format!("kenall-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn builder() -> ClientBuilder {
    ClientBuilder::new()
        // Connection pool settings
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .use_rustls_tls()
}

/// Build a pooled HTTP client. Deadlines are set per request by the caller.
pub fn create_http_client() -> Result<Client> {
    builder().build().map_err(KenallError::Transport)
}

/// Shared HTTP client, initialized once so every `KenallClient` built without
/// its own transport reuses one connection pool.
static SHARED_HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    create_http_client().unwrap_or_else(|e| {
        warn!("Falling back to default HTTP client: {}", e);
        Client::new()
    })
});

/// Get the shared HTTP client
pub fn shared_http_client() -> Client {
    SHARED_HTTP_CLIENT.clone()
}
