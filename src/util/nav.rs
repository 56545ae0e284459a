//! Browser navigation and location helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single-spa host patches `history.pushState` and reroutes on it, so the
//! drawer navigates by pushing history entries rather than owning a router.
//! Non-browser builds no-op.

/// Navigate the host application to `url`.
///
/// Falls back to a full page load if the history API rejects the push.
pub fn navigate_to_url(url: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pushed = window
            .history()
            .and_then(|h| h.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)));
        if let Err(e) = pushed {
            log::warn!("pushState to {url} failed, reloading: {e:?}");
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Current `location.pathname`, or an empty string outside the browser.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Viewport width in CSS pixels, or `None` outside the browser.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
