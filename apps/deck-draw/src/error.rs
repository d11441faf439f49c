use thiserror::Error;

/// Provider failure kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProviderErrorKind {
    /// Connection refused, DNS failure, reset mid-body and similar
    Network,
    /// The configured request timeout elapsed
    Timeout,
    /// The provider answered with a non-2xx status
    Status(u16),
    /// The body was not the JSON shape we expect
    Malformed,
    /// The provider answered `"success": false`
    Rejected,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{detail}")]
    Provider {
        kind: ProviderErrorKind,
        detail: String,
    },
    #[error("{detail}")]
    Precondition { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn provider(kind: ProviderErrorKind, detail: impl Into<String>) -> Self {
        Self::Provider {
            kind,
            detail: detail.into(),
        }
    }

    pub fn precondition(detail: impl Into<String>) -> Self {
        Self::Precondition {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Provider failure kind, if this is a provider error
    pub fn provider_kind(&self) -> Option<&ProviderErrorKind> {
        match self {
            AppError::Provider { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, AppError::Precondition { .. })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's Display omits the source chain (connection refused, ...).
        let mut detail = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }

        let kind = if err.is_timeout() {
            ProviderErrorKind::Timeout
        } else if let Some(status) = err.status() {
            ProviderErrorKind::Status(status.as_u16())
        } else if err.is_decode() {
            ProviderErrorKind::Malformed
        } else {
            ProviderErrorKind::Network
        };

        AppError::Provider { kind, detail }
    }
}
