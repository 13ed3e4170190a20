// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(&config.user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = config.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// GET `url` and return the body of a 200 response.
///
/// Any other status is handed to `on_status` to build the error; the response
/// is dropped unread in that case, which releases the connection.
pub async fn fetch_body(
    client: &Client,
    url: &str,
    on_status: impl FnOnce(StatusCode) -> AppError,
) -> Result<String> {
    log::debug!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::network(url, e))?;

    let status = response.status();
    if status != StatusCode::OK {
        log::debug!("GET {} -> {}", url, status);
        return Err(on_status(status));
    }

    response.text().await.map_err(|e| AppError::network(url, e))
}
