//! Blocking browser dialogs (`alert`, `confirm`, `prompt`).
//!
//! Outside the browser these degrade to the answer that issues no request:
//! `confirm` is `false` and `prompt` is `None`.

/// Show a blocking message.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Ask the user to confirm; `true` only on explicit OK.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Ask for a line of text; `None` if cancelled.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.prompt_with_message(message).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        None
    }
}

/// Open `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                leptos::logging::warn!("window.open failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
