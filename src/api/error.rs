use thiserror::Error;

/// Errors from the catalog API client.
///
/// Every endpoint propagates failure to the caller, including the
/// single-product fetch; no endpoint swallows errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("'{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
