//! A http client for the news aggregator api gateway
//!
//! Provides a thin client based on reqwest that runs a single GET
//! request against a gateway endpoint and returns the parsed JSON
//! body.
//!
//! # Usage
//!
//! ```rust,no_run
//! use nag::httpclient;
//! let client = httpclient::Client::new(httpclient::API_BASE).unwrap();
//! async {
//!   println!("{:?}", client.fetch("news", 5, false).await);
//! };
//! ```

pub mod data;

use reqwest::ClientBuilder;
use serde_json::Value;
use snafu::{ResultExt, Snafu};
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The fixed address of the api gateway.
pub const API_BASE: &str = "http://localhost:8083";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("An error was received from {}: {}", url, source))]
    Http { source: reqwest::Error, url: String },

    #[snafu(display("An error occurred creating the http client: {}", source))]
    ClientCreate { source: reqwest::Error },

    #[snafu(display("An error occured reading the response: {}", source))]
    DeserializeResp { source: reqwest::Error },

    #[snafu(display("An error occured reading the response: {}", source))]
    DeserializeJson { source: serde_json::Error },
}

/// The gateway http client.
///
/// Wraps a reqwest client configured with the request timeout the
/// gateway diagnostics expect.
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new<S: Into<String>>(base_url: S) -> Result<Client, Error> {
        let url = base_url.into();
        log::debug!("Create gateway client for: {}", url);
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context(ClientCreateSnafu)?;
        Ok(Client {
            client,
            base_url: url,
        })
    }

    /// Runs a GET request against the given endpoint and parses the
    /// body as JSON. A response with a non-2xx status is an error,
    /// its body is discarded. When `debug` is true, the response is first
    /// decoded into utf8 chars and logged at debug level. Otherwise
    /// bytes are directly decoded from JSON.
    pub async fn fetch(&self, endpoint: &str, limit: u32, debug: bool) -> Result<Value, Error> {
        let url = self.endpoint_url(endpoint, limit);
        if debug {
            let resp = self
                .client
                .get(&url)
                .send()
                .await
                .context(HttpSnafu { url: &url })?
                .error_for_status()
                .context(HttpSnafu { url: &url })?
                .text()
                .await
                .context(DeserializeRespSnafu)?;
            log::debug!("GET {} -> {}", url, resp);
            serde_json::from_str::<Value>(&resp).context(DeserializeJsonSnafu)
        } else {
            self.client
                .get(&url)
                .send()
                .await
                .context(HttpSnafu { url: &url })?
                .error_for_status()
                .context(HttpSnafu { url: &url })?
                .json::<Value>()
                .await
                .context(DeserializeRespSnafu)
        }
    }

    /// The full request url for an endpoint. The limit parameter is
    /// only sent when querying the news endpoint.
    fn endpoint_url(&self, endpoint: &str, limit: u32) -> String {
        if endpoint == "news" {
            format!("{}/{}?limit={}", self.base_url, endpoint, limit)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}
