//! Client for the n8n market insight webhook.
//!
//! Posts `{"brand", "goal"}` to a configured webhook with one static auth
//! header and hands back the response as a single JSON object.
//!
//! # Example
//!
//! ```rust,ignore
//! use webhook_client::{WebhookClient, WebhookSettings};
//!
//! let client = WebhookClient::new(WebhookSettings::new(url, api_key))?;
//! let payload = client.invoke("Madison", "Find hiring signals").await?;
//! ```
//!
//! No retries: every failure surfaces to the caller as a [`WebhookError`].

pub mod error;
pub mod types;

pub use error::{Result, WebhookError};
pub use types::{
    InsightRequest, WebhookSettings, DEFAULT_HEADER_NAME, HEADER_NAME_KEY, HEADER_VALUE_KEY,
    WEBHOOK_URL_KEY,
};

use std::time::{Duration, Instant};

use n8n_payload::{normalize_response, JsonObject};
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use tracing::{info, warn};

/// Workflows can run for a while; the request is abandoned after this.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// n8n webhook client.
#[derive(Clone)]
pub struct WebhookClient {
    http_client: Client,
    settings: WebhookSettings,
}

impl WebhookClient {
    /// Create a client with the fixed request timeout.
    pub fn new(settings: WebhookSettings) -> Result<Self> {
        let http_client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http_client,
            settings,
        })
    }

    pub fn settings(&self) -> &WebhookSettings {
        &self.settings
    }

    /// Run the workflow for `brand` and `goal`.
    ///
    /// Inputs and settings are checked before anything is sent. A non-2xx
    /// status is reported before the body is parsed.
    pub async fn invoke(&self, brand: &str, goal: &str) -> Result<JsonObject> {
        let request = InsightRequest {
            brand: required_field("brand", brand)?,
            goal: required_field("goal", goal)?,
        };
        let (url, header_name, header_value) = self.auth()?;

        info!(%url, brand = request.brand, "Calling insight webhook");
        let start = Instant::now();

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(header_name, header_value)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Webhook request failed");
                WebhookError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, "Webhook returned an error status");
            return Err(WebhookError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let raw: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Webhook response is not JSON");
            WebhookError::Decode { body: body.clone() }
        })?;

        info!(
            duration_ms = start.elapsed().as_millis(),
            "Webhook responded"
        );

        Ok(normalize_response(raw))
    }

    fn auth(&self) -> Result<(&str, HeaderName, HeaderValue)> {
        let url = self.settings.url.as_deref().ok_or_else(|| missing(WEBHOOK_URL_KEY))?;
        let value = self
            .settings
            .header_value
            .as_deref()
            .ok_or_else(|| missing(HEADER_VALUE_KEY))?;

        let header_name = HeaderName::from_bytes(self.settings.header_name.as_bytes())
            .map_err(|_| {
                WebhookError::Config(format!(
                    "{HEADER_NAME_KEY} ({:?}) is not a valid header name",
                    self.settings.header_name
                ))
            })?;
        let mut header_value = HeaderValue::from_str(value).map_err(|_| {
            WebhookError::Config(format!("{HEADER_VALUE_KEY} is not a valid header value"))
        })?;
        header_value.set_sensitive(true);

        Ok((url, header_name, header_value))
    }
}

fn required_field<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    match value.trim() {
        "" => Err(WebhookError::Input { field }),
        trimmed => Ok(trimmed),
    }
}

fn missing(key: &str) -> WebhookError {
    WebhookError::Config(format!(
        "{key} is not set. Add it to the environment or the secrets file and restart."
    ))
}
