//! Sanitized markdown rendering for assistant answers.
//!
//! Raw HTML is dropped and link/image targets are limited to `http`,
//! `https`, `mailto`, and relative URLs. Anything else is rewritten to `#`.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render `markdown` to HTML with raw HTML and unsafe link targets removed.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: safe_url(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: safe_url(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) { url } else { CowStr::Borrowed("#") }
}

/// Whether `url` is relative or uses an allowed scheme.
pub fn is_safe_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside the scheme.
    let compact: String = url.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();
    let Some(colon) = compact.find(':') else {
        return true;
    };
    // A ':' after the first '/', '?' or '#' belongs to the path or query.
    if compact.find(['/', '?', '#']).is_some_and(|boundary| boundary < colon) {
        return true;
    }
    let scheme = compact[..colon].to_ascii_lowercase();
    SAFE_SCHEMES.contains(&scheme.as_str())
}
