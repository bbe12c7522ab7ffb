use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Schemes a rendered link or image may point at. Relative targets are always kept.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// True for relative targets and targets with an allowed scheme.
///
/// Browsers ignore whitespace and control characters inside a scheme, so
/// those are stripped before looking for one.
fn is_safe_destination(dest: &str) -> bool {
    let cleaned: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match cleaned.find(&[':', '/', '?', '#'][..]) {
        Some(end) if cleaned[end..].starts_with(':') => {
            ALLOWED_SCHEMES.iter().any(|scheme| *scheme == &cleaned[..end])
        }
        _ => true,
    }
}

fn safe_tag(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link(kind, dest, title) if !is_safe_destination(&dest) => {
            tracing::debug!(dest = %dest, "Dropped unsafe link target");
            Tag::Link(kind, CowStr::Borrowed(""), title)
        }
        Tag::Image(kind, dest, title) if !is_safe_destination(&dest) => {
            tracing::debug!(dest = %dest, "Dropped unsafe image source");
            Tag::Image(kind, CowStr::Borrowed(""), title)
        }
        other => other,
    }
}

/// Render report markdown to HTML.
///
/// Raw HTML blocks in the source are shown as text, not injected. Link and
/// image targets outside http, https and mailto are blanked.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(tag) => Event::Start(safe_tag(tag)),
        Event::End(tag) => Event::End(safe_tag(tag)),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
