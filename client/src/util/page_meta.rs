//! Read host-provided settings from the SSR document.
//!
//! The host renders its client-facing settings into the HTML shell (`lang`
//! on `<html>`, `<meta>` tags in `<head>`). These helpers read them back after
//! hydration. SSR paths no-op and return `None`.

/// `<meta name=...>` carrying the comment query mode.
pub const COMMENT_QUERY_MODE_META: &str = "comment-query-mode";

/// Content of `<meta name="{name}">`, if present.
pub fn read_meta(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{name}\"]");
        document
            .query_selector(&selector)
            .ok()
            .flatten()?
            .get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// The `lang` attribute of the `<html>` element.
pub fn read_document_lang() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?
            .document()?
            .document_element()?
            .get_attribute("lang")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
