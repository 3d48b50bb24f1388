//! Browser helpers

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available, cannot open {}", url);
        return;
    };

    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(opened)) => {
            opened.focus().ok();
        }
        Ok(None) => log::warn!("Popup blocked for {}", url),
        Err(e) => log::error!("Failed to open {}: {:?}", url, e),
    }
}
