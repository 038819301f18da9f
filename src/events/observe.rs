use crate::runtime::{self, Shared};
use folio_core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, STATS_THRESHOLD};
use folio_core::UiEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntryCallback = Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

fn entries(array: &js_sys::Array) -> impl Iterator<Item = web::IntersectionObserverEntry> + '_ {
    array
        .iter()
        .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
}

fn observer(
    callback: EntryCallback,
    threshold: f64,
    root_margin: Option<&str>,
) -> anyhow::Result<web::IntersectionObserver> {
    let closure = Closure::wrap(callback);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let obs = web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    closure.forget();
    Ok(obs)
}

/// Watch every animatable element. Entries are mapped back to their index by
/// node identity, so the page markup is left untouched.
pub fn observe_reveals(shared: &Shared) -> anyhow::Result<()> {
    let s = shared.clone();
    let obs = observer(
        Box::new(move |array, _obs| {
            for entry in entries(&array) {
                let target = entry.target();
                let index = s.borrow().page.animatable_index(target.as_ref());
                if let Some(index) = index {
                    runtime::dispatch(
                        &s,
                        UiEvent::RevealIntersection {
                            index,
                            intersecting: entry.is_intersecting(),
                        },
                    );
                }
            }
        }),
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
    )?;

    let mut rt = shared.borrow_mut();
    for el in &rt.page.animatables {
        obs.observe(el);
    }
    rt.reveal_observer = Some(obs);
    Ok(())
}

pub fn observe_stats(shared: &Shared) -> anyhow::Result<()> {
    let Some(section) = shared.borrow().page.stats_section.clone() else {
        log::debug!("[stats] no stats section; counters stay static");
        return Ok(());
    };
    let s = shared.clone();
    let obs = observer(
        Box::new(move |array, _obs| {
            for entry in entries(&array) {
                runtime::dispatch(
                    &s,
                    UiEvent::StatsIntersection {
                        intersecting: entry.is_intersecting(),
                    },
                );
            }
        }),
        STATS_THRESHOLD,
        None,
    )?;
    obs.observe(&section);
    Ok(())
}
