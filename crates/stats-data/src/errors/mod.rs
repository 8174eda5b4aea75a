//! Error types for the stats data crate.

use thiserror::Error;

/// Errors that can occur while talking to a stats provider.
///
/// Rate limiting and timeouts are reported as-is; nothing in this crate
/// retries a request.
#[derive(Error, Debug)]
pub enum StatsDataError {
    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider rejected the API key (HTTP 401).
    #[error("Unauthorized: {provider} - invalid or missing API key")]
    Unauthorized {
        /// The provider that rejected the credentials
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered, but the body could not be parsed.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that sent the response
        provider: String,
        /// Parse failure details
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
