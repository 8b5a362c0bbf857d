pub mod address;
pub mod business_day;
pub mod city;
pub mod config;
pub mod corporation;
pub mod holidays;
pub mod normalize;
pub mod version;
pub mod whoami;

use log::debug;
use std::time::Duration;

use crate::api::KenallClient;
use crate::config::Config;
use crate::error::Result;

/// Build a client from the stored configuration, letting command-line flags
/// override the endpoint and timeout.
pub fn create_client(endpoint: Option<&str>, timeout: Option<u64>) -> Result<KenallClient> {
    let config = Config::load()?;
    let mut client_config = config.client_config()?;

    if let Some(endpoint) = endpoint {
        client_config.endpoint = endpoint.to_string();
    }
    if let Some(timeout) = timeout {
        client_config.timeout = Some(Duration::from_secs(timeout));
    }

    debug!(
        "Using endpoint {} with timeout {:?}",
        client_config.endpoint, client_config.timeout
    );
    KenallClient::new(client_config)
}
