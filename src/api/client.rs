use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::http_client::{default_user_agent, shared_http_client};
use super::request::{self, ApiRequest};
use super::types::*;
use super::DEFAULT_ENDPOINT;
use crate::error::{KenallError, Result};

/// Operations offered by the kenall service
#[async_trait]
pub trait KenallApi: Send + Sync {
    /// Get the addresses registered under a 7-digit postal code
    async fn get_address(&self, postal_code: &str) -> Result<GetAddressResponse>;

    /// Get the cities of a 2-digit prefecture code
    async fn get_city(&self, prefecture_code: &str) -> Result<GetCityResponse>;

    /// Get the corporation registered under a 13-digit corporate number
    async fn get_corporation(&self, corporate_number: &str) -> Result<GetCorporationResponse>;

    /// Get the address the service sees this client connecting from
    async fn get_whoami(&self) -> Result<GetWhoamiResponse>;

    /// Get every known holiday
    async fn get_holidays(&self) -> Result<GetHolidaysResponse>;

    /// Get the holidays of one year
    async fn get_holidays_by_year(&self, year: i32) -> Result<GetHolidaysResponse>;

    /// Get the holidays between two dates, inclusive
    async fn get_holidays_by_period(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<GetHolidaysResponse>;

    /// Split a free-text address into its components
    async fn get_normalize_address(&self, address: &str) -> Result<GetNormalizeAddressResponse>;

    /// Check whether a date is a business day.
    ///
    /// 0001-01-01 counts as "no date" and fails with `InvalidArgument`, as do
    /// dates outside years 1 to 9999; no request is sent for them.
    async fn get_business_days(&self, date: NaiveDate) -> Result<GetBusinessDaysResponse>;
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Authorization token issued by the kenall service
    pub token: String,
    /// Base endpoint; every resource path is appended to it
    pub endpoint: String,
    /// Deadline for a whole request, body included
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
    /// Transport to use instead of the shared connection pool
    pub http_client: Option<Client>,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Some(Duration::from_secs(30)),
            user_agent: default_user_agent(),
            http_client: None,
        }
    }
}

/// Client for the kenall service.
///
/// Cheap to clone; clones share the connection pool. Token and endpoint are
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct KenallClient {
    http_client: Client,
    endpoint: Url,
    token: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl KenallClient {
    /// Create a client; fails with `InvalidArgument` on an empty token or an
    /// endpoint that is not an absolute URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(KenallError::invalid_argument("authorization token is empty"));
        }

        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            KenallError::invalid_argument(format!("invalid endpoint {:?}: {}", config.endpoint, e))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(KenallError::invalid_argument(format!(
                "invalid endpoint {:?}: not a base URL",
                config.endpoint
            )));
        }

        Ok(Self {
            http_client: config.http_client.unwrap_or_else(shared_http_client),
            endpoint,
            token: config.token,
            timeout: config.timeout,
            user_agent: config.user_agent,
        })
    }

    /// Create a client with the default settings.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(token))
    }

    /// A copy of this client whose requests give up after `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Send a request and decode a 200 body into `T`.
    async fn send_request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = request.url(&self.endpoint)?;
        let resource = request.resource;
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(request.method, url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(USER_AGENT, self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(classify_transport_error)?;
        let status = response.status();

        // Read the body to the end whatever the status so the connection
        // goes back to the pool.
        let body = response.bytes().await;
        debug!("{} responded with {}", resource.as_str(), status);

        if status != StatusCode::OK {
            if let Err(e) = &body {
                debug!("Discarding unreadable error body: {}", e);
            }
            return Err(KenallError::from_status(status.as_u16()));
        }

        let body = body.map_err(classify_transport_error)?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode {} response: {}", resource.as_str(), e);
            KenallError::Decode(e)
        })
    }
}

fn classify_transport_error(error: reqwest::Error) -> KenallError {
    if error.is_timeout() {
        KenallError::Timeout(error)
    } else {
        KenallError::Transport(error)
    }
}

#[async_trait]
impl KenallApi for KenallClient {
    async fn get_address(&self, postal_code: &str) -> Result<GetAddressResponse> {
        self.send_request(request::address(postal_code)?).await
    }

    async fn get_city(&self, prefecture_code: &str) -> Result<GetCityResponse> {
        self.send_request(request::city(prefecture_code)?).await
    }

    async fn get_corporation(&self, corporate_number: &str) -> Result<GetCorporationResponse> {
        self.send_request(request::corporation(corporate_number)?).await
    }

    async fn get_whoami(&self) -> Result<GetWhoamiResponse> {
        self.send_request(request::whoami()).await
    }

    async fn get_holidays(&self) -> Result<GetHolidaysResponse> {
        self.send_request(request::holidays()).await
    }

    async fn get_holidays_by_year(&self, year: i32) -> Result<GetHolidaysResponse> {
        self.send_request(request::holidays_by_year(year)).await
    }

    async fn get_holidays_by_period(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<GetHolidaysResponse> {
        self.send_request(request::holidays_by_period(from, to)).await
    }

    async fn get_normalize_address(&self, address: &str) -> Result<GetNormalizeAddressResponse> {
        self.send_request(request::normalize_address(address)?).await
    }

    async fn get_business_days(&self, date: NaiveDate) -> Result<GetBusinessDaysResponse> {
        let check: BusinessDayCheck = self.send_request(request::business_days(date)?).await?;

        Ok(GetBusinessDaysResponse {
            business_day: BusinessDay {
                date,
                legal_holiday: check.result,
            },
        })
    }
}
