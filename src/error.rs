use derive_more::Display;

use crate::config::Config;

/// Error kinds raised below the HTTP layer.
///
/// Handlers return these as-is; the mapping to status codes lives in
/// `api::response`.
#[derive(Debug, Display)]
pub enum AppError {
    /// Missing or malformed process configuration
    #[display(fmt = "{}", _0)]
    Config(String),

    /// Request rejected at the boundary (unknown action, bad body, bad status)
    #[display(fmt = "{}", _0)]
    Validation(String),

    #[display(fmt = "{}", _0)]
    NotFound(String),

    #[display(fmt = "{}", _0)]
    Storage(sqlx::Error),

    /// Storage failure with its detail withheld from the caller
    #[display(fmt = "Internal Server Error")]
    Internal,
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

/// Decides how much of a storage failure reaches the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorPolicy {
    pub redact_internal_errors: bool,
}

impl ErrorPolicy {
    pub fn storage(&self, operation: &'static str, err: sqlx::Error) -> AppError {
        tracing::error!(error = %err, operation, "Storage operation failed");
        if self.redact_internal_errors {
            AppError::Internal
        } else {
            AppError::Storage(err)
        }
    }
}

impl From<&Config> for ErrorPolicy {
    fn from(config: &Config) -> Self {
        Self {
            redact_internal_errors: config.redact_internal_errors,
        }
    }
}
