//! Router harness for route tests.
//!
//! Requests go straight into the axum router with `oneshot`; no socket is
//! bound. Live runs point the webhook at a mockito server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use insight_core::server::build_app;
use insight_core::Config;
use tower::ServiceExt;
use webhook_client::WebhookSettings;

pub const BOUNDARY: &str = "insight-test-boundary";

/// Config with no webhook settings.
pub fn unconfigured() -> Config {
    Config {
        port: 0,
        webhook: WebhookSettings::unconfigured(),
    }
}

/// Config pointing the webhook at `url`.
pub fn configured(url: &str) -> Config {
    Config {
        port: 0,
        webhook: WebhookSettings::new(url, "test-key"),
    }
}

pub fn router(config: Config) -> Router {
    build_app(config).expect("router should build")
}

/// Send `request` and return the status and body text.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Form-encoded POST. Values must already be URL-safe.
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// One part of a multipart body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

/// Multipart POST built from `parts`.
pub fn post_multipart(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/json\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("valid request")
}
