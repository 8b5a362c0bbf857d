pub mod formatter;

pub use formatter::Formatter;

use crate::api::types::{
    GetAddressResponse, GetBusinessDaysResponse, GetCityResponse, GetCorporationResponse,
    GetHolidaysResponse, GetNormalizeAddressResponse, GetWhoamiResponse,
};
use crate::cli::OutputFormat;
use crate::error::Result;

/// Format an address lookup based on the specified format
pub fn format_addresses(response: &GetAddressResponse, format: OutputFormat) -> Result<String> {
    Formatter::new(format).format_addresses(response)
}

/// Format a city listing based on the specified format
pub fn format_cities(response: &GetCityResponse, format: OutputFormat) -> Result<String> {
    Formatter::new(format).format_cities(response)
}

/// Format a corporation based on the specified format
pub fn format_corporation(
    response: &GetCorporationResponse,
    format: OutputFormat,
) -> Result<String> {
    Formatter::new(format).format_corporation(response)
}

/// Format whoami information based on the specified format
pub fn format_whoami(response: &GetWhoamiResponse, format: OutputFormat) -> Result<String> {
    Formatter::new(format).format_whoami(response)
}

/// Format a holiday listing based on the specified format
pub fn format_holidays(response: &GetHolidaysResponse, format: OutputFormat) -> Result<String> {
    Formatter::new(format).format_holidays(response)
}

/// Format a normalized address based on the specified format
pub fn format_query(
    response: &GetNormalizeAddressResponse,
    format: OutputFormat,
) -> Result<String> {
    Formatter::new(format).format_query(response)
}

/// Format a business day check based on the specified format
pub fn format_business_day(
    response: &GetBusinessDaysResponse,
    format: OutputFormat,
) -> Result<String> {
    Formatter::new(format).format_business_day(response)
}
