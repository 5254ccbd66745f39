use reqwest::Client;
use std::time::Duration;

use crate::constants::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Build the HTTP client used for the title fetch
pub fn build_http_client() -> Result<Client, FetchError> {
    Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .no_proxy()
        .build()
        .map_err(FetchError::Client)
}
