// Accessibility helpers

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "arcade-status";

/// Focus ring and screen-reader utility CSS, injected once by the app shell.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #818cf8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce `msg` through the live region, if it is mounted.
pub fn set_status(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_css_covers_focus_and_sr_only() {
        let css = visible_focus_css();
        assert!(css.contains(":focus-visible"));
        assert!(css.contains(".sr-only"));
    }

    #[test]
    fn set_status_is_a_no_op_off_browser() {
        set_status("12 results");
    }
}
