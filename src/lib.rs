#![cfg(target_arch = "wasm32")]
use folio_core::{ControllerConfig, UiController, UiEvent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod annotate;
mod dom;
mod events;
mod page;
mod runtime;
mod selectors;

use page::PageElements;
use runtime::Runtime;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    for line in selectors::BANNER {
        log::info!("{line}");
    }

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await;

    let wiring_started = Instant::now();
    let page = PageElements::discover(&document);
    let year = js_sys::Date::new_0().get_full_year() as i32;
    let snapshot = page.snapshot(Some(year));
    let config = ControllerConfig::default();
    log::debug!("[init] {:?}", config);
    let shared = Rc::new(RefCell::new(Runtime::new(
        UiController::new(config, snapshot),
        page,
    )));

    if let Err(e) = events::wire_back_to_top(&shared, &document) {
        log::warn!("[init] back-to-top control skipped: {e:?}");
    }
    events::wire_menu(&shared, &document);
    events::wire_scroll(&shared, &window);
    events::wire_lifecycle(&shared, &window);
    events::wire_card_tilt(&shared);
    events::wire_section_keys(&shared, &document);

    runtime::start(&shared);

    // Without an observer the fallback timer still reveals everything.
    if let Err(e) = events::observe_reveals(&shared) {
        log::warn!("[init] reveal observer unavailable: {e:?}");
    }
    if let Err(e) = events::observe_stats(&shared) {
        log::warn!("[init] stats observer unavailable: {e:?}");
    }

    // The module can finish loading after `load` has already fired.
    if document.ready_state() == "complete" {
        let layout = shared.borrow().page.layout(&window);
        runtime::dispatch(&shared, UiEvent::Loaded(layout));
    }

    let annotated = annotate::annotate_document(&document);
    log::info!(
        "✨ Portfolio initialized in {:?} ({} elements annotated)",
        wiring_started.elapsed(),
        annotated
    );
    Ok(())
}
