use serde::Serialize;

/// Setting holding the webhook URL.
pub const WEBHOOK_URL_KEY: &str = "N8N_WEBHOOK_URL";

/// Setting holding the auth header name.
pub const HEADER_NAME_KEY: &str = "N8N_HEADER_NAME";

/// Setting holding the auth header value.
pub const HEADER_VALUE_KEY: &str = "N8N_HEADER_VALUE";

/// Header name used when none is configured.
pub const DEFAULT_HEADER_NAME: &str = "X-API-KEY";

/// Webhook connection settings.
///
/// URL and header value stay optional so a server can start without them;
/// [`crate::WebhookClient::invoke`] reports what is missing.
#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub url: Option<String>,
    pub header_name: String,
    pub header_value: Option<String>,
}

impl WebhookSettings {
    pub fn new(url: impl Into<String>, header_value: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            header_name: DEFAULT_HEADER_NAME.to_string(),
            header_value: Some(header_value.into()),
        }
    }

    /// Settings with nothing configured.
    pub fn unconfigured() -> Self {
        Self {
            url: None,
            header_name: DEFAULT_HEADER_NAME.to_string(),
            header_value: None,
        }
    }

    pub fn with_header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = name.into();
        self
    }

    /// Both required settings are present.
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.header_value.is_some()
    }
}

/// Body posted to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct InsightRequest<'a> {
    pub brand: &'a str,
    pub goal: &'a str,
}
