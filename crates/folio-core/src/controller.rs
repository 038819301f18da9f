use crate::config::ControllerConfig;
use crate::counter::{CounterStep, StatsAnimation};
use crate::effects::{
    back_to_top_hover_patches, back_to_top_patches, neutral_tilt_transform, parallax_for_scroll,
    skill_tag_delay, tilt_for_pointer, GradientHue, Rect,
};
use crate::constants::{TIMELINE_EVEN_DELAY, TIMELINE_ODD_DELAY};
use crate::hygiene::footer_text;
use crate::nav::{
    anchor_scroll_top, keyboard_step_target, navbar_patches, NavigationState, SectionDescriptor,
    SectionStep,
};
use crate::patch::{Disposition, Patch, StyleProp, Target};
use crate::reveal::RevealRegistry;
use crate::schedule::{Millis, Scheduler, TimerId, TimerKind};
use crate::typing::{Typewriter, TypingState};
use glam::DVec2;

pub const LOADED_CLASS: &str = "loaded";

/// What the host found on the page at startup.
#[derive(Clone, Debug, Default)]
pub struct PageSnapshot {
    pub animatable_count: usize,
    pub stat_texts: Vec<String>,
    pub skill_tag_count: usize,
    pub timeline_count: usize,
    /// `None` when the page has no hero subtitle.
    pub subtitle_text: Option<String>,
    pub has_gradient_text: bool,
    pub current_year: Option<i32>,
}

/// Scroll position and section layout, measured fresh for every event.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    pub scroll_offset: f64,
    pub sections: Vec<SectionDescriptor>,
    pub hero_height: Option<f64>,
}

#[derive(Clone, Debug)]
pub enum UiEvent {
    /// Nothing happened except time passing.
    Tick,
    Loaded(Layout),
    Scroll(Layout),
    MenuToggle,
    NavLinkClick,
    /// Same-page anchor activated; `None` when the id does not resolve.
    AnchorClick { target_top: Option<f64> },
    CardPointerMove { card: usize, client: DVec2, rect: Rect },
    CardPointerLeave { card: usize },
    RevealIntersection { index: usize, intersecting: bool },
    StatsIntersection { intersecting: bool },
    KeyDown {
        key: String,
        modifier: bool,
        viewport_tops: Vec<f64>,
        viewport_height: f64,
    },
    BeforePrint,
    BackToTopClick,
    BackToTopHover(bool),
}

/// Per-page controller. Owns every piece of UI state and the virtual timer
/// queue; the host feeds it events and applies the patches it emits.
pub struct UiController {
    config: ControllerConfig,
    snapshot: PageSnapshot,
    nav: NavigationState,
    reveal: RevealRegistry,
    stats: StatsAnimation,
    typewriter: Option<Typewriter>,
    gradient: Option<GradientHue>,
    scheduler: Scheduler,
    typing_timer: Option<TimerId>,
    started: bool,
    loaded: bool,
}

impl UiController {
    pub fn new(config: ControllerConfig, snapshot: PageSnapshot) -> Self {
        let reveal = RevealRegistry::new(snapshot.animatable_count);
        let stats = StatsAnimation::new(snapshot.stat_texts.clone());
        let typewriter = snapshot.subtitle_text.as_deref().map(Typewriter::new);
        let gradient = snapshot.has_gradient_text.then(GradientHue::default);
        Self {
            config,
            snapshot,
            nav: NavigationState::default(),
            reveal,
            stats,
            typewriter,
            gradient,
            scheduler: Scheduler::new(),
            typing_timer: None,
            started: false,
            loaded: false,
        }
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn reveal(&self) -> &RevealRegistry {
        &self.reveal
    }

    pub fn stats(&self) -> &StatsAnimation {
        &self.stats
    }

    pub fn typing_state(&self) -> Option<&TypingState> {
        self.typewriter.as_ref().map(Typewriter::state)
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.scheduler.next_deadline()
    }

    /// Initial annotations and timers. Runs once; later calls do nothing.
    pub fn start(&mut self, now: Millis, out: &mut Vec<Patch>) {
        if self.started {
            return;
        }
        self.started = true;

        self.reveal
            .hide_pending(self.config.reveal_initial_offset_px, out);
        if self.reveal.pending_count() > 0 {
            self.scheduler
                .schedule_once(now, self.config.reveal_fallback_ms, TimerKind::RevealFallback);
        }

        for i in 0..self.snapshot.skill_tag_count {
            out.push(Patch::style(
                Target::SkillTag(i),
                StyleProp::AnimationDelay,
                skill_tag_delay(i, self.config.skill_tag_stagger_ms),
            ));
        }
        for i in 0..self.snapshot.timeline_count {
            let delay = if i % 2 == 0 {
                TIMELINE_EVEN_DELAY
            } else {
                TIMELINE_ODD_DELAY
            };
            out.push(Patch::style(Target::TimelineContent(i), StyleProp::AnimationDelay, delay));
        }

        if self.typewriter.is_some() {
            out.push(Patch::SetText(Target::HeroSubtitle, String::new()));
        }
        if let Some(year) = self.snapshot.current_year {
            out.push(Patch::SetText(
                Target::FooterYear,
                footer_text(year, &self.config.footer_owner),
            ));
        }
        if self.gradient.is_some() {
            self.scheduler
                .schedule_every(now, self.config.gradient_interval_ms, TimerKind::GradientShift);
        }
        log::debug!(
            "[controller] started: {} animatable, {} stats, {} timers",
            self.snapshot.animatable_count,
            self.snapshot.stat_texts.len(),
            self.scheduler.len()
        );
    }

    /// Fire every timer due at `now`, then apply `event`.
    pub fn handle(&mut self, event: UiEvent, now: Millis, out: &mut Vec<Patch>) -> Disposition {
        self.run_timers(now, out);
        match event {
            UiEvent::Tick => {}
            UiEvent::Loaded(layout) => self.on_loaded(&layout, now, out),
            UiEvent::Scroll(layout) => self.on_scroll(&layout, out),
            UiEvent::MenuToggle => self.nav.toggle_menu(out),
            UiEvent::NavLinkClick => self.nav.close_menu(out),
            UiEvent::AnchorClick { target_top } => {
                if let Some(top) = target_top {
                    out.push(Patch::ScrollTo {
                        top: anchor_scroll_top(top, self.config.anchor_scroll_offset_px),
                    });
                }
                return Disposition::PreventDefault;
            }
            UiEvent::CardPointerMove { card, client, rect } => {
                let tilt = tilt_for_pointer(client, &rect, self.config.tilt_divisor);
                let transform =
                    tilt.transform(self.config.tilt_perspective_px, self.config.tilt_lift_px);
                out.push(Patch::style(Target::Card(card), StyleProp::Transform, transform));
            }
            UiEvent::CardPointerLeave { card } => {
                out.push(Patch::style(
                    Target::Card(card),
                    StyleProp::Transform,
                    neutral_tilt_transform(self.config.tilt_perspective_px),
                ));
            }
            UiEvent::RevealIntersection {
                index,
                intersecting,
            } => {
                self.reveal.on_intersect(index, intersecting, out);
            }
            UiEvent::StatsIntersection { intersecting } => {
                if intersecting {
                    self.start_stats(now);
                }
            }
            UiEvent::KeyDown {
                key,
                modifier,
                viewport_tops,
                viewport_height,
            } => {
                let Some(step) = SectionStep::from_key(&key) else {
                    return Disposition::Default;
                };
                let next = keyboard_step_target(&viewport_tops, viewport_height, step);
                if let (Some(next), true) = (next, modifier) {
                    out.push(Patch::ScrollIntoView(Target::Section(next)));
                    return Disposition::PreventDefault;
                }
            }
            UiEvent::BeforePrint => self.reveal.prepare_print(out),
            UiEvent::BackToTopClick => out.push(Patch::ScrollTo { top: 0.0 }),
            UiEvent::BackToTopHover(hovered) => {
                back_to_top_hover_patches(hovered, self.config.back_to_top_lift_px, out)
            }
        }
        Disposition::Default
    }

    fn on_loaded(&mut self, layout: &Layout, now: Millis, out: &mut Vec<Patch>) {
        self.nav.update_active_section(
            layout.scroll_offset,
            &layout.sections,
            self.config.section_activation_offset_px,
            out,
        );
        if self.loaded {
            return;
        }
        self.loaded = true;
        out.push(Patch::AddClass(Target::Body, LOADED_CLASS));
        self.scheduler
            .schedule_once(now, self.config.hero_fade_in_delay_ms, TimerKind::HeroFadeIn);
        if self.typewriter.is_some() {
            self.scheduler
                .schedule_once(now, self.config.typing_start_delay_ms, TimerKind::StartTyping);
        }
    }

    fn on_scroll(&mut self, layout: &Layout, out: &mut Vec<Patch>) {
        let offset = layout.scroll_offset;
        let view = self
            .nav
            .observe_scroll(offset, self.config.navbar_hide_threshold_px);
        navbar_patches(view, out);
        self.nav.update_active_section(
            offset,
            &layout.sections,
            self.config.section_activation_offset_px,
            out,
        );
        back_to_top_patches(offset, self.config.back_to_top_threshold_px, out);
        if let Some(parallax) = layout.hero_height.and_then(|h| {
            parallax_for_scroll(
                offset,
                h,
                self.config.parallax_speed,
                self.config.parallax_image_factor,
            )
        }) {
            parallax.patches(out);
        }
    }

    fn start_stats(&mut self, now: Millis) {
        for i in self.stats.start(self.config.counter_steps) {
            self.scheduler
                .schedule_every(now, self.config.counter_interval_ms, TimerKind::CounterStep(i));
        }
    }

    fn run_timers(&mut self, now: Millis, out: &mut Vec<Patch>) {
        while let Some((id, kind)) = self.scheduler.pop_due(now) {
            self.fire(id, kind, now, out);
        }
    }

    fn fire(&mut self, id: TimerId, kind: TimerKind, now: Millis, out: &mut Vec<Patch>) {
        match kind {
            TimerKind::RevealFallback => {
                let forced = self.reveal.force_reveal_all(out);
                if forced > 0 {
                    log::debug!("[reveal] fallback revealed {forced} elements");
                }
            }
            TimerKind::HeroFadeIn => {
                out.push(Patch::style(Target::Hero, StyleProp::Opacity, "1"));
            }
            TimerKind::StartTyping => {
                self.typing_timer = Some(self.scheduler.schedule_every(
                    now,
                    self.config.typing_char_interval_ms,
                    TimerKind::TypeNextChar,
                ));
                self.type_next_char(out);
            }
            TimerKind::TypeNextChar => self.type_next_char(out),
            TimerKind::CounterStep(i) => match self.stats.step(i) {
                Some((text, CounterStep::Running)) => {
                    out.push(Patch::SetText(Target::Stat(i), text));
                }
                Some((text, CounterStep::Finished)) => {
                    out.push(Patch::SetText(Target::Stat(i), text));
                    self.scheduler.cancel(id);
                }
                None => {
                    self.scheduler.cancel(id);
                }
            },
            TimerKind::GradientShift => {
                if let Some(background) = self.gradient.as_mut().and_then(GradientHue::step) {
                    out.push(Patch::style(
                        Target::GradientText,
                        StyleProp::BackgroundImage,
                        background,
                    ));
                }
            }
        }
    }

    fn type_next_char(&mut self, out: &mut Vec<Patch>) {
        let Some(typewriter) = self.typewriter.as_mut() else {
            return;
        };
        if let Some(prefix) = typewriter.advance() {
            out.push(Patch::SetText(Target::HeroSubtitle, prefix));
        }
        if *typewriter.state() == TypingState::Done {
            if let Some(id) = self.typing_timer.take() {
                self.scheduler.cancel(id);
            }
        }
    }
}
