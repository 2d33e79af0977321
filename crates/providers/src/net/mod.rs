pub(crate) mod http_request;

use crate::error::ProviderError;
use std::time::Duration;

/// Builds the shared client every provider issues its requests through.
///
/// The timeout applies per request; there is no retry layer on top.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ProviderError::from)
}
