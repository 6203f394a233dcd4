//! Host environment accessors with non-browser fallbacks.
//!
//! Browser builds read the real page; host builds (tests) get inert values so
//! the state machine and config logic run without a DOM.

/// Origin of the embedding page, e.g. `https://example.test`.
///
/// Empty on the host, which resolves the default API base URL to a relative
/// path.
#[must_use]
pub fn page_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        #[allow(clippy::cast_precision_loss)]
        let ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64);
        ms
    }
}
