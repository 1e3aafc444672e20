//! Build-time configuration for backend and diagram-editor endpoints.
//!
//! Both values are baked into the WASM bundle from the environment of the
//! build (`ARCHAIVE_API_BASE`, `ARCHAIVE_EDITOR_URL`) so every request in the
//! app derives from one place instead of per-view URL literals.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when `ARCHAIVE_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Embeddable diagram editor used when `ARCHAIVE_EDITOR_URL` is not set.
pub const DEFAULT_EDITOR_URL: &str = "https://embed.diagrams.net/?embed=1&proto=json&spin=1&saveAndExit=1";

/// Base URL of the backend REST service, without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("ARCHAIVE_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

/// URL loaded into the diagram editor frame.
pub fn editor_url() -> &'static str {
    option_env!("ARCHAIVE_EDITOR_URL").unwrap_or(DEFAULT_EDITOR_URL)
}

/// Origin (`scheme://host[:port]`) that editor frame messages must come from.
pub fn editor_origin() -> &'static str {
    origin_of(editor_url())
}

/// Strip trailing slashes so endpoint paths can be appended verbatim.
pub fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim();
    let stripped = trimmed.trim_end_matches('/');
    if stripped.is_empty() { trimmed } else { stripped }
}

/// Return the `scheme://authority` prefix of `url`, or `url` itself when it
/// has no scheme.
pub fn origin_of(url: &str) -> &str {
    let Some(scheme_end) = url.find("://") else {
        return url;
    };
    let rest = &url[scheme_end + 3..];
    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    &url[..scheme_end + 3 + authority_len]
}
