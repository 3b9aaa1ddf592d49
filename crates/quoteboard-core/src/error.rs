use thiserror::Error;

/// Validation errors for configuration and domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("endpoint cannot be empty")]
    EmptyEndpoint,
    #[error("endpoint must use http:// or https://: '{value}'")]
    InvalidEndpoint { value: String },

    #[error("timestamp must match YYYY-MM-DD HH:MM:SS: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Failure of a single retrieval attempt.
///
/// Every variant is folded into `LifecycleState::Error` as message text; the
/// variants exist so callers and logs can tell the failures apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("decode failure: {0}")]
    Decode(String),
    #[error("schema failure: {0}")]
    Schema(String),
    #[error("retrieval was already started for this controller")]
    AlreadyStarted,
}

impl FetchError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "fetch.network",
            Self::Decode(_) => "fetch.decode",
            Self::Schema(_) => "fetch.schema",
            Self::AlreadyStarted => "fetch.already_started",
        }
    }
}
