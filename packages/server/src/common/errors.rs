use axum::http::StatusCode;
use n8n_payload::PayloadError;
use thiserror::Error;
use webhook_client::WebhookError;

/// Everything that can stop a run before output is shown.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl RunError {
    /// Status code for the error page.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Payload(_) => StatusCode::BAD_REQUEST,
            Self::Webhook(e) if e.is_input() => StatusCode::BAD_REQUEST,
            Self::Webhook(e) if e.is_config() => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Webhook(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short heading for the error page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Payload(_) => "Invalid input",
            Self::Webhook(WebhookError::Input { .. }) => "Missing input",
            Self::Webhook(WebhookError::Config(_)) => "Server is not configured",
            Self::Webhook(WebhookError::Transport(_)) => "Could not reach the workflow",
            Self::Webhook(WebhookError::Http { .. }) => "Workflow returned an error",
            Self::Webhook(WebhookError::Decode { .. }) => "Workflow returned an unreadable response",
        }
    }

    /// What the user can do about it, when there is something.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Webhook(WebhookError::Config(_)) => Some(
                "Set the missing value as an environment variable or in the secrets file, then restart the server.",
            ),
            Self::Webhook(WebhookError::Transport(_)) => {
                Some("Check that the n8n instance is running and the webhook URL is correct.")
            }
            Self::Payload(PayloadError::WorkflowDefinition) => {
                Some("Export the output file written by your final node (for example madison_job_dataai.json).")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_by_kind() {
        let input: RunError = WebhookError::Input { field: "brand" }.into();
        let config: RunError = WebhookError::Config("N8N_WEBHOOK_URL is not set".into()).into();
        let http: RunError = WebhookError::Http {
            status: 503,
            body: "down".into(),
        }
        .into();
        let payload: RunError = PayloadError::Empty.into();

        assert_eq!(input.status(), StatusCode::BAD_REQUEST);
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(http.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(payload.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_message_is_passed_through() {
        let err: RunError = WebhookError::Http {
            status: 404,
            body: "webhook not registered".into(),
        }
        .into();

        assert_eq!(err.to_string(), "Webhook returned HTTP 404: webhook not registered");
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_config_error_has_hint() {
        let err: RunError = WebhookError::Config("N8N_HEADER_VALUE is not set".into()).into();
        assert!(err.hint().unwrap().contains("secrets file"));
    }
}
