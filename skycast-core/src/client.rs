use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{config::Config, model::Envelope};

/// Errors surfaced by the transport layer.
///
/// An envelope carrying `success: false` is not an error here; presenting it
/// is the view's job.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, timeout).
    #[error("Failed to reach the weather API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status whose body was not a valid envelope.
    #[error("Weather API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not decode as the expected envelope shape.
    #[error("Failed to decode weather API response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A parsed location query: either a free-text city name or a "lat,lon" pair.
///
/// A query containing a comma is split on it; the first segment becomes `lat`,
/// the second `lon`. The segments are kept as strings and forwarded as-is, so
/// malformed coordinates are rejected by the remote API rather than here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    City(String),
    Coords { lat: String, lon: String },
}

impl LocationQuery {
    pub fn parse(raw: &str) -> Self {
        if raw.contains(',') {
            let mut parts = raw.split(',');
            let lat = parts.next().unwrap_or("").to_string();
            let lon = parts.next().unwrap_or("").to_string();
            Self::Coords { lat, lon }
        } else {
            Self::City(raw.to_string())
        }
    }

    fn query_params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::City(name) => vec![("city", name.as_str())],
            Self::Coords { lat, lon } => vec![("lat", lat.as_str()), ("lon", lon.as_str())],
        }
    }
}

/// Abstraction over the weather source, so the view can be driven by a stub
/// in tests.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, query: &LocationQuery) -> Result<Envelope, FetchError>;
}

/// HTTP client for the weather API. Issues a single GET per fetch, no retries.
#[derive(Debug, Clone)]
pub struct HttpWeatherClient {
    http: Client,
    base_url: String,
}

impl HttpWeatherClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url(),
        })
    }
}

#[async_trait]
impl WeatherSource for HttpWeatherClient {
    async fn fetch(&self, query: &LocationQuery) -> Result<Envelope, FetchError> {
        let url = format!("{}/weather", self.base_url);

        debug!(url = %url, ?query, "requesting weather");

        let res = self
            .http
            .get(&url)
            .query(&query.query_params())
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "weather request failed to send"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .inspect_err(|e| warn!(error = %e, "failed to read weather response body"))?;

        if !status.is_success() {
            // The API reports lookup failures as a regular envelope with a
            // non-2xx status; only an unparsable body is a transport error.
            if let Ok(envelope) = serde_json::from_str::<Envelope>(&body) {
                return Ok(envelope);
            }

            warn!(%status, "weather request rejected");
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "weather response did not match the envelope shape");
            FetchError::Decode(e)
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary; byte 200 may fall inside a
        // multi-byte character.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
