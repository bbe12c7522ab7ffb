use n8n_payload::{ExtractionResult, InsightReport, JsonObject};
use serde_json::Value;

use super::{escape, notice, render_markdown, NoticeKind};

/// One-row table of metadata, one column per key.
pub fn metadata_table(metadata: &JsonObject) -> String {
    let headers: String = metadata
        .keys()
        .map(|k| format!("<th>{}</th>", escape(k)))
        .collect();
    let cells: String = metadata
        .values()
        .map(|v| format!("<td>{}</td>", escape(&display_value(v))))
        .collect();
    format!("<table><tr>{headers}</tr><tr>{cells}</tr></table>")
}

/// Horizontal bar chart of numeric metadata, scaled to the largest magnitude.
pub fn numeric_chart(entries: &[(String, f64)]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let max = entries
        .iter()
        .map(|(_, v)| v.abs())
        .fold(0.0_f64, f64::max);

    let rows: String = entries
        .iter()
        .map(|(metric, value)| {
            let width = if max > 0.0 { value.abs() / max * 100.0 } else { 0.0 };
            format!(
                r#"<tr><th>{}</th><td>{}</td><td style="width:60%"><div class="bar" style="width:{:.1}%"></div></td></tr>"#,
                escape(metric),
                value,
                width
            )
        })
        .collect();

    format!(r#"<table class="chart"><tr><th>metric</th><th>value</th><th></th></tr>{rows}</table>"#)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn metadata_section(metadata: &JsonObject, numeric: &[(String, f64)], missing: &str) -> String {
    if metadata.is_empty() {
        return format!("<p>{}</p>", escape(missing));
    }
    format!("{}{}", metadata_table(metadata), numeric_chart(numeric))
}

fn report_section(report_text: &str) -> String {
    if report_text.is_empty() {
        notice(
            NoticeKind::Warning,
            "Could not detect the AI report text.\n\nThis usually means the JSON structure is different than expected.",
        )
    } else {
        format!(r#"<div class="report">{}</div>"#, render_markdown(report_text))
    }
}

/// Pretty-printed JSON in a collapsible block.
pub fn raw_json(payload: &JsonObject) -> String {
    let pretty = serde_json::to_string_pretty(payload).unwrap_or_default();
    format!(
        "<details><summary>Raw JSON (debug)</summary><pre>{}</pre></details>",
        escape(&pretty)
    )
}

fn item_html(item: &Value) -> String {
    match item {
        Value::Object(fields) => {
            let rows: String = fields
                .iter()
                .map(|(k, v)| {
                    format!(
                        "<tr><th>{}</th><td>{}</td></tr>",
                        escape(k),
                        escape(&display_value(v))
                    )
                })
                .collect();
            format!("<table>{rows}</table>")
        }
        other => format!("<pre>{}</pre>", escape(&display_value(other))),
    }
}

/// Output of an uploaded workflow run.
pub fn extraction_output(result: &ExtractionResult, debug_payload: Option<&JsonObject>) -> String {
    let mut html = String::new();

    if let Some(payload) = debug_payload {
        html.push_str(&raw_json(payload));
    }

    html.push_str(r#"<h2>Outputs</h2><div class="columns"><div>"#);
    html.push_str("<h3>Run Metadata</h3>");
    html.push_str(&metadata_section(
        &result.metadata,
        &result.numeric_metadata(),
        "No metadata found in this output (okay).",
    ));

    html.push_str("<h3>Prompt</h3>");
    if result.prompt.is_empty() {
        html.push_str("<p>Prompt not found in this output (depends on what n8n saved).</p>");
    } else {
        html.push_str(&format!("<pre><code>{}</code></pre>", escape(&result.prompt_preview())));
    }

    html.push_str("</div><div><h3>Executive Insight Report</h3>");
    html.push_str(&report_section(&result.report_text));
    html.push_str("</div></div>");

    html
}

/// Output of a live webhook run.
pub fn insight_output(report: &InsightReport, payload: &JsonObject) -> String {
    let mut html = String::new();

    if !report.tool_name.is_empty() {
        html.push_str(&format!("<h2>{}</h2>", escape(&report.tool_name)));
    }
    if !report.one_liner.is_empty() {
        html.push_str(&format!(r#"<p class="caption">{}</p>"#, escape(&report.one_liner)));
    }

    html.push_str("<h3>Report</h3>");
    html.push_str(&report_section(&report.report_text));

    html.push_str("<h3>Top Insights</h3>");
    let insights = report.visible_insights();
    if insights.is_empty() {
        html.push_str("<p>No insights returned.</p>");
    } else {
        let bullets: String = insights
            .iter()
            .map(|line| format!("<li>{}</li>", escape(line)))
            .collect();
        html.push_str(&format!("<ul>{bullets}</ul>"));
    }

    html.push_str("<h3>Metadata</h3>");
    html.push_str(&metadata_section(
        &report.metadata,
        &report.numeric_metadata(),
        "No metadata returned.",
    ));

    html.push_str("<h3>Supporting Items</h3>");
    let items = report.visible_items();
    if items.is_empty() {
        html.push_str("<p>No items returned.</p>");
    } else {
        for item in items {
            html.push_str(&item_html(item));
        }
        if report.items.len() > items.len() {
            html.push_str(&format!(
                "<p class=\"caption\">Showing {} of {} items.</p>",
                items.len(),
                report.items.len()
            ));
        }
    }

    html.push_str(&raw_json(payload));
    html
}
