//! HTTP client utilities for testing.
//!
//! Thin wrappers over reqwest for talking to a running hawaii-climate server.
//! The JSON helpers also check the response really is JSON, since the root
//! route answers with HTML.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Versioned API prefix shared by every data route
pub const API_PREFIX: &str = "/api/v1.0";

pub fn create_test_client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to build test HTTP client")
}

pub fn build_url(addr: &SocketAddr, path: &str) -> Url {
    format!("http://{}{}", addr, path)
        .parse()
        .expect("Failed to parse URL")
}

/// Path of the temperature stats route for `start` and an optional `end`
pub fn stats_path(start: &str, end: Option<&str>) -> String {
    match end {
        Some(end) => format!("{}/{}/{}", API_PREFIX, start, end),
        None => format!("{}/{}", API_PREFIX, start),
    }
}

/// GET `path`, asking for JSON
pub async fn get(addr: &SocketAddr, path: &str) -> Result<Response, Box<dyn Error>> {
    let response = create_test_client()
        .get(build_url(addr, path))
        .header(ACCEPT, "application/json")
        .send()
        .await?;
    Ok(response)
}

/// Media type of a response without parameters such as `charset`
pub fn media_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.split(';').next().unwrap_or("").trim().to_string())
}

/// GET `path`, require 200 with an `application/json` body, and decode it
pub async fn get_json<T: DeserializeOwned>(
    addr: &SocketAddr,
    path: &str,
) -> Result<T, Box<dyn Error>> {
    let response = get(addr, path).await?;

    if response.status() != StatusCode::OK {
        return Err(format!(
            "{} answered {}, body: {:?}",
            path,
            response.status(),
            response.text().await
        )
        .into());
    }

    match media_type(&response).as_deref() {
        Some("application/json") => Ok(response.json::<T>().await?),
        other => Err(format!("{} answered with content type {:?}", path, other).into()),
    }
}

/// GET `path` and return the body of an HTML page
pub async fn get_html(addr: &SocketAddr, path: &str) -> Result<String, Box<dyn Error>> {
    let response = get(addr, path).await?;

    match media_type(&response).as_deref() {
        Some("text/html") if response.status() == StatusCode::OK => Ok(response.text().await?),
        other => Err(format!(
            "{} answered {} with content type {:?}",
            path,
            response.status(),
            other
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let addr: SocketAddr = ([127, 0, 0, 1], 5000).into();
        let url = build_url(&addr, "/api/v1.0/tobs");
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/v1.0/tobs");
    }

    #[test]
    fn test_stats_path() {
        assert_eq!(stats_path("2017-01-01", None), "/api/v1.0/2017-01-01");
        assert_eq!(
            stats_path("2017-01-01", Some("2017-06-01")),
            "/api/v1.0/2017-01-01/2017-06-01"
        );
    }
}
