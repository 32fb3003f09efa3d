use thiserror::Error;

/// Failure taxonomy for backend calls.
///
/// `Unauthorized` is special: the CLI treats it as a signal to clear the
/// stored session (the backend has rejected the token). `Forbidden` means
/// the token is fine but the role is not — rendered as a redirect-style
/// message, never as a raw HTTP error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication rejected: {detail}")]
    Unauthorized { detail: String },

    #[error("permission denied: {detail}")]
    Forbidden { detail: String },

    #[error("not found: {detail}")]
    NotFound { detail: String },

    #[error("backend error (HTTP {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend rejected the bearer token itself.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// True when the failure is a role/permission rejection.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}
