use thiserror::Error;

/// Errors raised by the calendar domain
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),

    #[error("failed to parse embedded JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
