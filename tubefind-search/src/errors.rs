//! Error types for video search.

use thiserror::Error;

/// Fallback reason used when a provider fails without any message text.
const UNKNOWN_PROVIDER_FAILURE: &str = "unknown provider failure";

/// Errors that can occur during a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Query was empty or whitespace only. Raised before any provider call.
    #[error("Query cannot be empty.")]
    EmptyQuery,

    /// The external provider failed: bad credentials, quota, network or a
    /// malformed response.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// Underlying failure text, never empty
        reason: String,
    },
}

/// Discriminant of [`SearchError`] for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local validation failure
    EmptyQuery,
    /// Failure originating from the external provider
    ProviderError,
}

impl SearchError {
    /// Builds a provider error, substituting a generic reason for blank text.
    pub fn provider(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let reason = if reason.trim().is_empty() {
            UNKNOWN_PROVIDER_FAILURE.to_string()
        } else {
            reason
        };
        Self::ProviderError { reason }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::EmptyQuery => ErrorKind::EmptyQuery,
            SearchError::ProviderError { .. } => ErrorKind::ProviderError,
        }
    }

    /// Message suitable for showing next to the search form.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::EmptyQuery => self.to_string(),
            SearchError::ProviderError { reason } => format!("An error occurred: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_provider_reason_is_replaced() {
        let error = SearchError::provider("   ");
        assert_eq!(
            error,
            SearchError::ProviderError {
                reason: UNKNOWN_PROVIDER_FAILURE.to_string()
            }
        );
        assert_eq!(error.kind(), ErrorKind::ProviderError);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(SearchError::EmptyQuery.user_message(), "Query cannot be empty.");
        assert_eq!(
            SearchError::provider("quotaExceeded").user_message(),
            "An error occurred: quotaExceeded"
        );
        assert_eq!(
            SearchError::provider("quotaExceeded").to_string(),
            "Provider error: quotaExceeded"
        );
    }
}
