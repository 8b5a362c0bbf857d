//! Request builders for every kenall endpoint.
//!
//! Builders validate their input and describe the request; they never touch
//! the network.

use chrono::{Datelike, NaiveDate};
use reqwest::Method;
use url::Url;

use super::deserializers::DATE_FORMAT;
use super::Resource;
use crate::error::{KenallError, Result};

const POSTAL_CODE_LEN: usize = 7;
const PREFECTURE_CODE_LEN: usize = 2;
const CORPORATE_NUMBER_LEN: usize = 13;

/// In-memory description of a kenall API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub resource: Resource,
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn get(resource: Resource, path: impl Into<String>) -> Self {
        Self {
            resource,
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Resolve against `endpoint`; the path is appended to the endpoint's own path.
    pub fn url(&self, endpoint: &Url) -> Result<Url> {
        let base = format!("{}{}", endpoint.as_str().trim_end_matches('/'), self.path);
        let parsed = if self.query.is_empty() {
            Url::parse(&base)
        } else {
            Url::parse_with_params(&base, &self.query)
        };

        parsed.map_err(|e| {
            KenallError::invalid_argument(format!("failed to build request url {}: {}", base, e))
        })
    }
}

fn check_digits(value: &str, len: usize, name: &str) -> Result<()> {
    if value.len() == len && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(KenallError::invalid_argument(format!(
            "{} must be {} ASCII digits, got {:?}",
            name, len, value
        )))
    }
}

/// 0001-01-01 is the unset date. Years outside 1..=9999 do not fit `YYYY`.
fn is_sendable_date(date: NaiveDate) -> bool {
    (1..=9999).contains(&date.year()) && !(date.year() == 1 && date.ordinal() == 1)
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `GET /postalcode/{postal_code}`
pub fn address(postal_code: &str) -> Result<ApiRequest> {
    check_digits(postal_code, POSTAL_CODE_LEN, "postal code")?;
    let resource = Resource::PostalCode;
    Ok(ApiRequest::get(
        resource,
        format!("{}/{}", resource.path(), postal_code),
    ))
}

/// `GET /cities/{prefecture_code}`
pub fn city(prefecture_code: &str) -> Result<ApiRequest> {
    check_digits(prefecture_code, PREFECTURE_CODE_LEN, "prefecture code")?;
    let resource = Resource::Cities;
    Ok(ApiRequest::get(
        resource,
        format!("{}/{}", resource.path(), prefecture_code),
    ))
}

/// `GET /houjinbangou/{corporate_number}`
pub fn corporation(corporate_number: &str) -> Result<ApiRequest> {
    check_digits(corporate_number, CORPORATE_NUMBER_LEN, "corporate number")?;
    let resource = Resource::Houjinbangou;
    Ok(ApiRequest::get(
        resource,
        format!("{}/{}", resource.path(), corporate_number),
    ))
}

/// `GET /whoami`
pub fn whoami() -> ApiRequest {
    ApiRequest::get(Resource::Whoami, Resource::Whoami.path())
}

/// `GET /holidays`
pub fn holidays() -> ApiRequest {
    ApiRequest::get(Resource::Holidays, Resource::Holidays.path())
}

/// `GET /holidays?year={year}`
pub fn holidays_by_year(year: i32) -> ApiRequest {
    holidays().with_param("year", year.to_string())
}

/// `GET /holidays?from={from}&to={to}`
pub fn holidays_by_period(from: NaiveDate, to: NaiveDate) -> ApiRequest {
    holidays()
        .with_param("from", format_date(from))
        .with_param("to", format_date(to))
}

/// `GET /postalcode/?t={text}`
pub fn normalize_address(text: &str) -> Result<ApiRequest> {
    let text = text.trim();
    if text.is_empty() {
        return Err(KenallError::invalid_argument("address to normalize is empty"));
    }

    let resource = Resource::PostalCode;
    Ok(ApiRequest::get(resource, format!("{}/", resource.path())).with_param("t", text))
}

/// `GET /businessdays/check?date={date}`
pub fn business_days(date: NaiveDate) -> Result<ApiRequest> {
    if !is_sendable_date(date) {
        return Err(KenallError::invalid_argument(format!(
            "business day check needs a date between 0001-01-02 and 9999-12-31, got {}",
            date
        )));
    }

    let resource = Resource::BusinessDays;
    Ok(
        ApiRequest::get(resource, format!("{}/check", resource.path()))
            .with_param("date", format_date(date)),
    )
}
