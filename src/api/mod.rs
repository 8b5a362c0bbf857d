pub mod client;
pub mod deserializers;
pub mod http_client;
pub mod request;
pub mod types;

pub use client::{ClientConfig, KenallApi, KenallClient};

/// Default endpoint of the kenall service.
pub const DEFAULT_ENDPOINT: &str = "https://api.kenall.jp/v1";

/// Resources served by the kenall API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Addresses by postal code, and address normalization
    PostalCode,
    /// Cities by prefecture code
    Cities,
    /// Corporations by corporate number (法人番号)
    Houjinbangou,
    /// Caller information
    Whoami,
    /// National holidays
    Holidays,
    /// Business day check
    BusinessDays,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostalCode => "postalcode",
            Self::Cities => "cities",
            Self::Houjinbangou => "houjinbangou",
            Self::Whoami => "whoami",
            Self::Holidays => "holidays",
            Self::BusinessDays => "businessdays",
        }
    }

    /// Path of the resource below the endpoint, without a trailing slash.
    pub fn path(&self) -> &'static str {
        match self {
            Self::PostalCode => "/postalcode",
            Self::Cities => "/cities",
            Self::Houjinbangou => "/houjinbangou",
            Self::Whoami => "/whoami",
            Self::Holidays => "/holidays",
            Self::BusinessDays => "/businessdays",
        }
    }

    /// Japanese name shown in CLI summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PostalCode => "郵便番号",
            Self::Cities => "市区町村",
            Self::Houjinbangou => "法人番号",
            Self::Whoami => "接続元情報",
            Self::Holidays => "祝日",
            Self::BusinessDays => "営業日",
        }
    }
}
