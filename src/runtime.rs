use crate::page::PageElements;
use folio_core::{Disposition, Millis, Patch, Target, UiController, UiEvent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Shared = Rc<RefCell<Runtime>>;

pub struct Runtime {
    pub controller: UiController,
    pub page: PageElements,
    pub reveal_observer: Option<web::IntersectionObserver>,
    origin: Instant,
    armed: Option<Millis>,
}

impl Runtime {
    pub fn new(controller: UiController, page: PageElements) -> Self {
        Self {
            controller,
            page,
            reveal_observer: None,
            origin: Instant::now(),
            armed: None,
        }
    }

    /// Milliseconds since the controller was created.
    pub fn now(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

pub fn start(shared: &Shared) {
    let mut patches = Vec::new();
    {
        let mut rt = shared.borrow_mut();
        let now = rt.now();
        rt.controller.start(now, &mut patches);
    }
    apply(&shared.borrow(), &patches);
    rearm(shared);
}

/// Feed one event to the controller and apply what it emits.
pub fn dispatch(shared: &Shared, event: UiEvent) -> Disposition {
    let mut patches = Vec::new();
    let disposition = {
        let mut rt = shared.borrow_mut();
        let now = rt.now();
        rt.controller.handle(event, now, &mut patches)
    };
    apply(&shared.borrow(), &patches);
    rearm(shared);
    disposition
}

/// Arm one real timeout for the controller's next deadline, unless an
/// earlier one is already pending.
fn rearm(shared: &Shared) {
    let (deadline, now) = {
        let rt = shared.borrow();
        let Some(deadline) = rt.controller.next_deadline() else {
            return;
        };
        if matches!(rt.armed, Some(armed) if armed <= deadline) {
            return;
        }
        (deadline, rt.now())
    };
    let Some(window) = web::window() else {
        return;
    };
    shared.borrow_mut().armed = Some(deadline);
    let shared_tick = shared.clone();
    let fire = Closure::once(move || {
        {
            let mut rt = shared_tick.borrow_mut();
            if rt.armed == Some(deadline) {
                rt.armed = None;
            }
        }
        dispatch(&shared_tick, UiEvent::Tick);
    });
    let delay = deadline.saturating_sub(now).min(i32::MAX as Millis) as i32;
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(fire.as_ref().unchecked_ref(), delay)
        .is_err()
    {
        log::warn!("[timers] setTimeout failed; deadline {deadline} dropped");
        shared.borrow_mut().armed = None;
    }
    fire.forget();
}

pub fn apply(rt: &Runtime, patches: &[Patch]) {
    for patch in patches {
        match patch {
            Patch::AddClass(target, class) => {
                if let Some(el) = rt.page.resolve(*target) {
                    _ = el.class_list().add_1(class);
                }
            }
            Patch::RemoveClass(target, class) => {
                if let Some(el) = rt.page.resolve(*target) {
                    _ = el.class_list().remove_1(class);
                }
            }
            Patch::SetStyle(target, prop, value) => {
                if let Some(el) = rt.page.resolve(*target) {
                    _ = el.style().set_property(prop.css_name(), value);
                }
            }
            Patch::SetText(target, text) => {
                if let Some(el) = rt.page.resolve(*target) {
                    el.set_text_content(Some(text.as_str()));
                }
            }
            Patch::ScrollTo { top } => scroll_window_to(*top),
            Patch::ScrollIntoView(target) => {
                if let Some(el) = rt.page.resolve(*target) {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    el.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }
            Patch::Unobserve(target @ Target::Animatable(_)) => {
                if let (Some(observer), Some(el)) =
                    (rt.reveal_observer.as_ref(), rt.page.resolve(*target))
                {
                    observer.unobserve(el);
                }
            }
            Patch::Unobserve(_) => {}
        }
    }
}

fn scroll_window_to(top: f64) {
    if let Some(window) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}
