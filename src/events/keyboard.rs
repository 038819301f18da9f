use crate::dom;
use crate::runtime::{self, Shared};
use folio_core::nav::SectionStep;
use folio_core::{Disposition, UiEvent};
use web_sys as web;

/// Ctrl/Cmd + ArrowUp/ArrowDown steps between sections.
pub fn wire_section_keys(shared: &Shared, document: &web::Document) {
    let s = shared.clone();
    dom::on(document, "keydown", move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if SectionStep::from_key(&key).is_none() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let viewport_tops = s.borrow().page.section_viewport_tops();
        let event = UiEvent::KeyDown {
            key,
            modifier: ev.meta_key() || ev.ctrl_key(),
            viewport_tops,
            viewport_height: dom::viewport_height(&window),
        };
        if runtime::dispatch(&s, event) == Disposition::PreventDefault {
            ev.prevent_default();
        }
    });
}
