//! Export helpers for generated articles: clipboard copy and text-file
//! download. Requires a browser environment; native builds no-op.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// File name for a downloaded article, defaulting when untitled.
#[must_use]
pub fn file_download_name(title: &str) -> String {
    let title = title.trim();
    let title = if title.is_empty() { "article" } else { title };
    format!("{title}.txt")
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
    }
}

/// Download `contents` as a text file named after the article title.
pub fn download_text_file(title: &str, contents: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(contents));
        let Ok(blob) = web_sys::Blob::new_with_str_sequence(&parts) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(&file_download_name(title));
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (title, contents);
    }
}
