//! Browser-side file download through a transient anchor element.
//!
//! The signed URL is parsed by the browser first; a URL it refuses surfaces as
//! [`UiFault::MalformedUrl`] so the fault barrier can suppress it. The anchor
//! is appended to `<body>`, clicked, and removed in the same call.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use super::fault::UiFault;

/// Suggested file name for a storage key: its last non-empty path segment.
pub fn filename_from_key(key: &str) -> Option<&str> {
    key.rsplit(['/', '\\']).find(|s| !s.trim().is_empty())
}

#[cfg(feature = "hydrate")]
fn js_fault(err: &wasm_bindgen::JsValue) -> UiFault {
    use wasm_bindgen::JsCast;

    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    UiFault::from_js_message(message)
}

/// Navigate the browser to `url` as a download named `filename`.
///
/// # Errors
///
/// Returns [`UiFault::MalformedUrl`] when the browser cannot parse `url`, or
/// [`UiFault::Render`] when the document is unavailable.
pub fn trigger_download(url: &str, filename: Option<&str>) -> Result<(), UiFault> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or_else(|| UiFault::Render("window unavailable".to_owned()))?;
        // Relative URLs such as `/v1/files/download?...` resolve against the page.
        let base = window.location().href().map_err(|e| js_fault(&e))?;
        web_sys::Url::new_with_base(url, &base).map_err(|e| js_fault(&e))?;

        let document = window
            .document()
            .ok_or_else(|| UiFault::Render("document unavailable".to_owned()))?;
        let body = document
            .body()
            .ok_or_else(|| UiFault::Render("document body unavailable".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(|e| js_fault(&e))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| UiFault::Render("anchor element unavailable".to_owned()))?;

        anchor.set_href(url);
        anchor.set_download(filename.unwrap_or_default());
        anchor.set_rel("noopener");
        body.append_child(&anchor).map_err(|e| js_fault(&e))?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, filename);
        Err(UiFault::Render("downloads require a browser".to_owned()))
    }
}
