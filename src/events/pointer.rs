use crate::dom;
use crate::runtime::{self, Shared};
use crate::selectors::{BACK_TO_TOP_CLASS, BACK_TO_TOP_HTML, BACK_TO_TOP_STYLE};
use folio_core::effects::Rect;
use folio_core::UiEvent;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_card_tilt(shared: &Shared) {
    let rt = shared.borrow();
    for (card, el) in rt.page.cards.iter().enumerate() {
        let s = shared.clone();
        let card_el = el.clone();
        dom::on(el, "mousemove", move |ev: web::MouseEvent| {
            let r = card_el.get_bounding_client_rect();
            let rect = Rect::new(r.left(), r.top(), r.width(), r.height());
            let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
            runtime::dispatch(&s, UiEvent::CardPointerMove { card, client, rect });
        });

        let s = shared.clone();
        dom::on(el, "mouseleave", move |_: web::MouseEvent| {
            runtime::dispatch(&s, UiEvent::CardPointerLeave { card });
        });
    }
}

/// Inject the back-to-top button and wire click and hover.
pub fn wire_back_to_top(shared: &Shared, document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let button = document
        .create_element("button")
        .map_err(|e| anyhow::anyhow!("create button: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    button.set_inner_html(BACK_TO_TOP_HTML);
    button.set_class_name(BACK_TO_TOP_CLASS);
    _ = button.set_attribute("aria-label", "Back to top");
    button.style().set_css_text(BACK_TO_TOP_STYLE);
    body.append_child(&button)
        .map_err(|e| anyhow::anyhow!("append button: {:?}", e))?;

    let s = shared.clone();
    dom::on(&button, "click", move |_: web::MouseEvent| {
        runtime::dispatch(&s, UiEvent::BackToTopClick);
    });
    let s = shared.clone();
    dom::on(&button, "mouseenter", move |_: web::MouseEvent| {
        runtime::dispatch(&s, UiEvent::BackToTopHover(true));
    });
    let s = shared.clone();
    dom::on(&button, "mouseleave", move |_: web::MouseEvent| {
        runtime::dispatch(&s, UiEvent::BackToTopHover(false));
    });

    shared.borrow_mut().page.back_to_top = Some(button);
    Ok(())
}
