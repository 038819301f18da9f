use crate::dom;
use crate::selectors::{IMAGES, LINKS_WITH_HREF};
use folio_core::hygiene::{external_rel, is_external_href, lazy_loading_hint};
use web_sys as web;

/// External links get `rel="noopener noreferrer"` (merged with any existing
/// tokens); images get a lazy-loading hint. Returns how many elements changed.
pub fn annotate_document(document: &web::Document) -> usize {
    let mut touched = 0;
    for link in dom::query_all(document, LINKS_WITH_HREF) {
        let external = link
            .get_attribute("href")
            .is_some_and(|href| is_external_href(&href));
        if !external {
            continue;
        }
        let rel = external_rel(link.get_attribute("rel").as_deref());
        if link.get_attribute("rel").as_deref() != Some(rel.as_str()) {
            _ = link.set_attribute("rel", &rel);
            touched += 1;
        }
    }
    for img in dom::query_all(document, IMAGES) {
        if let Some(hint) = lazy_loading_hint(img.get_attribute("loading").as_deref()) {
            _ = img.set_attribute("loading", hint);
            touched += 1;
        }
    }
    touched
}
