//! Server-rendered HTML.
//!
//! Every string that came from a user or from the webhook goes through
//! [`escape`] (or the markdown renderer, which escapes raw HTML and blanks
//! script link targets) before it reaches a page.

pub mod forms;
pub mod markdown;
pub mod report;

pub use forms::*;
pub use markdown::render_markdown;
pub use report::*;

use crate::common::RunError;

pub const APP_TITLE: &str = "Madison Market Insight Engine";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 1.5rem; color: #1f2933; }
nav a { margin-right: 1rem; }
.caption { color: #616e7c; }
.columns { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; white-space: pre-wrap; }
.notice.info { background: #e6f0ff; }
.notice.warning { background: #fff4e0; }
.notice.error { background: #ffe8e8; }
.notice.success { background: #e3f9e5; }
table { border-collapse: collapse; margin: 0.5rem 0; }
td, th { border: 1px solid #cbd2d9; padding: 0.25rem 0.5rem; text-align: left; vertical-align: top; }
.bar { background: #3e7bfa; height: 0.9rem; }
pre { background: #f5f7fa; padding: 0.75rem; overflow-x: auto; white-space: pre-wrap; }
label { display: block; margin-top: 0.75rem; font-weight: 600; }
input[type=text], textarea { width: 100%; box-sizing: border-box; }
"#;

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in the shared page layout.
pub fn page(heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Run workflow</a><a href="/inspect">Inspect output file</a></nav>
<h1>{title}</h1>
<p class="caption">{heading}</p>
{body}
</body>
</html>"#,
        title = APP_TITLE,
        heading = escape(heading),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
    Success,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// A highlighted message box.
pub fn notice(kind: NoticeKind, message: &str) -> String {
    format!(
        r#"<div class="notice {}">{}</div>"#,
        kind.class(),
        escape(message)
    )
}

/// Error box shown in place of output when a run fails.
pub fn error_notice(err: &RunError) -> String {
    let mut message = format!("{}\n\n{}", err.title(), err);
    if let Some(hint) = err.hint() {
        message.push_str("\n\n");
        message.push_str(hint);
    }
    notice(NoticeKind::Error, &message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use webhook_client::WebhookError;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_page_escapes_heading() {
        let html = page("<script>", "<p>body</p>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(APP_TITLE));
    }

    #[test]
    fn test_error_notice_includes_hint() {
        let err: RunError = WebhookError::Config("N8N_WEBHOOK_URL is not set".into()).into();
        let html = error_notice(&err);

        assert!(html.contains(r#"class="notice error""#));
        assert!(html.contains("Server is not configured"));
        assert!(html.contains("N8N_WEBHOOK_URL"));
        assert!(html.contains("secrets file"));
    }
}
