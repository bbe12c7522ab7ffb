use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

use crate::runs::run_live;
use crate::server::app::AppState;
use crate::views::{about_panel, error_notice, insight_output, live_form, notice, page, NoticeKind};

const HEADING: &str = "Market and workforce insights from your n8n workflow";

#[derive(Debug, Default, Deserialize)]
pub struct RunForm {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub goal: String,
}

fn live_page(form: &RunForm, output: &str) -> String {
    let body = format!(
        "{}<h2>Inputs</h2>{}{}",
        about_panel(),
        live_form(&form.brand, &form.goal),
        output
    );
    page(HEADING, &body)
}

/// Live form
pub async fn live_form_handler(Extension(state): Extension<AppState>) -> Html<String> {
    let output = if state.config.webhook.is_configured() {
        String::new()
    } else {
        notice(
            NoticeKind::Warning,
            "The workflow webhook is not configured on this server yet. Live runs will fail until it is.",
        )
    };
    Html(live_page(&RunForm::default(), &output))
}

/// Run the workflow and render what came back
pub async fn run_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<RunForm>,
) -> (StatusCode, Html<String>) {
    match run_live(&state.webhook, &form.brand, &form.goal).await {
        Ok(run) => (
            StatusCode::OK,
            Html(live_page(&form, &insight_output(&run.report, &run.payload))),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Live run failed");
            (e.status(), Html(live_page(&form, &error_notice(&e))))
        }
    }
}
