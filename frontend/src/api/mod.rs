//! HTTP adapters over the site's JSON API.
//!
//! Every call returns `Result<_, ApiError>`; failures are logged to the
//! browser console here, so components only decide how to show them.

pub mod admin;
pub mod cards;

use gloo_console::error;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use common::requests::error_message;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the server's error text when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body was not the expected JSON.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Passes 2xx responses through and turns anything else into `ApiError::Status`.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: error_message(status, &body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn logged<T>(what: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    match &result {
        Err(ApiError::Status { status, message }) => error!(format!("{} failed with {}: {}", what, status, message)),
        Err(err) => error!(format!("{} failed: {}", what, err)),
        Ok(_) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_show_the_server_text_verbatim() {
        let err = ApiError::Status { status: 404, message: error_message(404, r#"{"error": "Table thoughts not found"}"#) };
        assert_eq!(err.to_string(), "Table thoughts not found");
        assert_eq!(ApiError::Decode("missing `tables`".to_string()).to_string(), "Unexpected response: missing `tables`");
    }
}
