use crate::dom;
use crate::runtime::{self, Shared};
use folio_core::{Disposition, UiEvent};
use web_sys as web;

/// Hamburger toggle, link-click close, and smooth same-page anchors.
pub fn wire_menu(shared: &Shared, document: &web::Document) {
    let rt = shared.borrow();

    if let Some(hamburger) = rt.page.hamburger.as_ref() {
        let s = shared.clone();
        dom::on(hamburger, "click", move |_: web::MouseEvent| {
            runtime::dispatch(&s, UiEvent::MenuToggle);
        });
    }

    for link in &rt.page.nav_links {
        let s = shared.clone();
        dom::on(link, "click", move |_: web::MouseEvent| {
            runtime::dispatch(&s, UiEvent::NavLinkClick);
        });
    }

    for anchor in &rt.page.anchors {
        let s = shared.clone();
        let doc = document.clone();
        let anchor_el = anchor.clone();
        dom::on(anchor, "click", move |ev: web::MouseEvent| {
            // "#" alone and malformed ids are not valid selectors; both resolve to no target.
            let target_top = anchor_el
                .get_attribute("href")
                .and_then(|href| dom::doc_query_one(&doc, &href))
                .map(|el| el.offset_top() as f64);
            if runtime::dispatch(&s, UiEvent::AnchorClick { target_top })
                == Disposition::PreventDefault
            {
                ev.prevent_default();
            }
        });
    }
}

pub fn wire_scroll(shared: &Shared, window: &web::Window) {
    let s = shared.clone();
    let w = window.clone();
    dom::on(window, "scroll", move |_: web::Event| {
        let layout = s.borrow().page.layout(&w);
        runtime::dispatch(&s, UiEvent::Scroll(layout));
    });
}

/// Window `load` (active link, hero fade, typing, load timing) and
/// `beforeprint`.
pub fn wire_lifecycle(shared: &Shared, window: &web::Window) {
    let s = shared.clone();
    let w = window.clone();
    dom::on(window, "load", move |_: web::Event| {
        let layout = s.borrow().page.layout(&w);
        runtime::dispatch(&s, UiEvent::Loaded(layout));
        if let Some(perf) = w.performance() {
            log::info!("⚡ Page loaded in {:.0}ms", perf.now());
        }
    });

    let s = shared.clone();
    dom::on(window, "beforeprint", move |_: web::Event| {
        runtime::dispatch(&s, UiEvent::BeforePrint);
    });
}
