use thiserror::Error;

#[derive(Debug, Error)]
pub enum KenallError {
    #[error("kenall: invalid argument: {0}")]
    InvalidArgument(String),

    #[error("kenall: 401 unauthorized error")]
    Unauthorized,

    #[error("kenall: 402 payment required error")]
    PaymentRequired,

    #[error("kenall: 403 forbidden error")]
    Forbidden,

    #[error("kenall: 404 not found error")]
    NotFound,

    #[error("kenall: 405 method not allowed error")]
    MethodNotAllowed,

    #[error("kenall: 500 internal server error")]
    InternalServerError,

    #[error("kenall: not registered in the error handling, http status code = {0}")]
    UnregisteredStatus(u16),

    #[error("kenall: request timeout: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("kenall: failed to send request to the kenall service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("kenall: failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Identity of a [`KenallError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
    UnregisteredStatus,
    Timeout,
    Transport,
    Decode,
    Config,
    Io,
    Serialization,
    Csv,
}

impl KenallError {
    /// Map a non-200 HTTP status to its error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            500 => Self::InternalServerError,
            code => Self::UnregisteredStatus(code),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::PaymentRequired => ErrorKind::PaymentRequired,
            Self::Forbidden => ErrorKind::Forbidden,
            Self::NotFound => ErrorKind::NotFound,
            Self::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            Self::InternalServerError => ErrorKind::InternalServerError,
            Self::UnregisteredStatus(_) => ErrorKind::UnregisteredStatus,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Csv(_) => ErrorKind::Csv,
        }
    }

    /// True for the fixed, payload-free status errors that callers match on.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized
                | Self::PaymentRequired
                | Self::Forbidden
                | Self::NotFound
                | Self::MethodNotAllowed
                | Self::InternalServerError
        )
    }

    /// HTTP status code this error was derived from, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::PaymentRequired => Some(402),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::MethodNotAllowed => Some(405),
            Self::InternalServerError => Some(500),
            Self::UnregisteredStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Get user-friendly hint for the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Unauthorized => Some(
                "Check your token. Set it with 'kenall config set api.token YOUR_TOKEN' \
                 or the KENALL_AUTHORIZATION_TOKEN environment variable."
                    .to_string(),
            ),
            Self::PaymentRequired => {
                Some("The payment for your kenall account is overdue.".to_string())
            }
            Self::NotFound => Some("No resource matched the given code.".to_string()),
            Self::Timeout(_) => {
                Some("The request timed out. Try again or raise --timeout.".to_string())
            }
            Self::Transport(_) => {
                Some("Check your internet connection and the configured endpoint.".to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KenallError>;
