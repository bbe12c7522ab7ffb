mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::Value;

#[tokio::test]
async fn health_reports_webhook_configuration() {
    let (status, body) = send(router(unconfigured()), get("/health")).await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["webhook_configured"], false);

    let (_, body) = send(router(configured("http://localhost/hook")), get("/health")).await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["webhook_configured"], true);
}
