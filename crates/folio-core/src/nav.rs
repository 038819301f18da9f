use crate::patch::{translate_y, Patch, StyleProp, Target};

pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

/// Inline styles for the three hamburger bars, top to bottom.
pub const BARS_OPEN: [(StyleProp, &str); 3] = [
    (StyleProp::Transform, "rotate(45deg) translate(5px, 5px)"),
    (StyleProp::Opacity, "0"),
    (StyleProp::Transform, "rotate(-45deg) translate(7px, -6px)"),
];
pub const BARS_CLOSED: [(StyleProp, &str); 3] = [
    (StyleProp::Transform, "none"),
    (StyleProp::Opacity, "1"),
    (StyleProp::Transform, "none"),
];

/// Live layout of one `section[id]`, measured on every scroll tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDescriptor {
    pub id: String,
    pub top_offset: f64,
    pub height: f64,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top_offset,
            height,
        }
    }

    /// Half-open activation range `[top - offset, top - offset + height)`.
    #[inline]
    pub fn contains(&self, scroll_offset: f64, activation_offset: f64) -> bool {
        let start = self.top_offset - activation_offset;
        scroll_offset >= start && scroll_offset < start + self.height
    }
}

/// What the navbar should look like after a scroll sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarView {
    /// At or above the top of the page.
    Top,
    Hidden,
    Scrolled,
}

#[derive(Clone, Debug, Default)]
pub struct NavigationState {
    pub is_menu_open: bool,
    pub last_scroll_offset: f64,
    pub active_section_id: Option<String>,
}

impl NavigationState {
    pub fn toggle_menu(&mut self, out: &mut Vec<Patch>) {
        self.is_menu_open = !self.is_menu_open;
        if self.is_menu_open {
            out.push(Patch::AddClass(Target::NavMenu, ACTIVE_CLASS));
        } else {
            out.push(Patch::RemoveClass(Target::NavMenu, ACTIVE_CLASS));
        }
        push_bars(self.is_menu_open, out);
    }

    /// Any navigation link activation closes the menu.
    pub fn close_menu(&mut self, out: &mut Vec<Patch>) {
        self.is_menu_open = false;
        out.push(Patch::RemoveClass(Target::NavMenu, ACTIVE_CLASS));
        push_bars(false, out);
    }

    /// Direction detector for the navbar. The previous sample is replaced on
    /// every call; there is no hysteresis band around the threshold.
    pub fn observe_scroll(&mut self, offset: f64, hide_threshold: f64) -> NavbarView {
        let previous = self.last_scroll_offset;
        self.last_scroll_offset = offset;
        if offset <= 0.0 {
            NavbarView::Top
        } else if offset > previous && offset > hide_threshold {
            NavbarView::Hidden
        } else {
            NavbarView::Scrolled
        }
    }

    /// Recompute the active section and emit link classes for all sections.
    pub fn update_active_section(
        &mut self,
        scroll_offset: f64,
        sections: &[SectionDescriptor],
        activation_offset: f64,
        out: &mut Vec<Patch>,
    ) {
        let active = active_section_index(scroll_offset, sections, activation_offset);
        for i in 0..sections.len() {
            if Some(i) == active {
                out.push(Patch::AddClass(Target::NavLink(i), ACTIVE_CLASS));
            } else {
                out.push(Patch::RemoveClass(Target::NavLink(i), ACTIVE_CLASS));
            }
        }
        self.active_section_id = active.map(|i| sections[i].id.clone());
    }
}

pub fn navbar_patches(view: NavbarView, out: &mut Vec<Patch>) {
    match view {
        NavbarView::Top => {
            out.push(Patch::RemoveClass(Target::Navbar, SCROLLED_CLASS));
            out.push(Patch::style(Target::Navbar, StyleProp::Transform, translate_y(0.0)));
        }
        NavbarView::Hidden => {
            out.push(Patch::style(Target::Navbar, StyleProp::Transform, "translateY(-100%)"));
        }
        NavbarView::Scrolled => {
            out.push(Patch::style(Target::Navbar, StyleProp::Transform, translate_y(0.0)));
            out.push(Patch::AddClass(Target::Navbar, SCROLLED_CLASS));
        }
    }
}

fn push_bars(open: bool, out: &mut Vec<Patch>) {
    let bars = if open { &BARS_OPEN } else { &BARS_CLOSED };
    for (i, (prop, value)) in bars.iter().enumerate() {
        out.push(Patch::style(Target::HamburgerBar(i), *prop, *value));
    }
}

/// Index of the section whose activation range holds `scroll_offset`.
///
/// When ranges overlap the topmost section wins; equal tops fall back to
/// document order.
pub fn active_section_index(
    scroll_offset: f64,
    sections: &[SectionDescriptor],
    activation_offset: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, s) in sections.iter().enumerate() {
        if !s.contains(scroll_offset, activation_offset) {
            continue;
        }
        match best {
            Some((_, top)) if s.top_offset >= top => {}
            _ => best = Some((i, s.top_offset)),
        }
    }
    best.map(|(i, _)| i)
}

/// Absolute scroll target for an in-page anchor, leaving room for the navbar.
#[inline]
pub fn anchor_scroll_top(target_top: f64, clearance: f64) -> f64 {
    target_top - clearance
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionStep {
    Next,
    Previous,
}

impl SectionStep {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Pick the section to jump to from viewport-relative section tops.
///
/// The current section is the first whose top lies in the upper half of the
/// viewport; without one there is nowhere to step from.
pub fn keyboard_step_target(
    viewport_tops: &[f64],
    viewport_height: f64,
    step: SectionStep,
) -> Option<usize> {
    let current = viewport_tops
        .iter()
        .position(|&top| top >= 0.0 && top < viewport_height / 2.0)?;
    let last = viewport_tops.len() - 1;
    Some(match step {
        SectionStep::Next => (current + 1).min(last),
        SectionStep::Previous => current.saturating_sub(1),
    })
}
