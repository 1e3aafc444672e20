//! Timestamp display helpers.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Render a backend timestamp in the browser's locale.
///
/// Unparseable or missing values fall back to the raw text or a dash.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "—".to_owned();
    };
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    fallback_timestamp(raw)
}

/// Host-side rendering: `2025-09-14T10:22:03.123Z` → `2025-09-14 10:22:03`.
fn fallback_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let time = time.trim_end_matches('Z');
    let time = time.split_once('.').map_or(time, |(whole, _)| whole);
    format!("{date} {time}")
}
