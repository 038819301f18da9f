//! DOM mutations produced by the controller.
//!
//! The controller never holds element handles. It addresses elements through
//! [`Target`] and the host resolves each target to an element, or skips the
//! patch when the page does not have one.

/// Element addressed by a patch. Indexed variants follow document order of
/// the collection discovered at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Body,
    Navbar,
    NavMenu,
    HamburgerBar(usize),
    /// Navigation link pointing at section `i`.
    NavLink(usize),
    Section(usize),
    Animatable(usize),
    Stat(usize),
    Card(usize),
    SkillTag(usize),
    TimelineContent(usize),
    BackToTop,
    Hero,
    HeroText,
    HeroImage,
    HeroSubtitle,
    GradientText,
    FooterYear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleProp {
    Transform,
    Opacity,
    Visibility,
    AnimationDelay,
    BackgroundImage,
    BoxShadow,
}

impl StyleProp {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Opacity => "opacity",
            Self::Visibility => "visibility",
            Self::AnimationDelay => "animation-delay",
            Self::BackgroundImage => "background-image",
            Self::BoxShadow => "box-shadow",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Patch {
    AddClass(Target, &'static str),
    RemoveClass(Target, &'static str),
    SetStyle(Target, StyleProp, String),
    SetText(Target, String),
    /// Smooth window scroll to an absolute document offset.
    ScrollTo { top: f64 },
    ScrollIntoView(Target),
    /// Stop watching the target for viewport intersection.
    Unobserve(Target),
}

impl Patch {
    pub fn style(target: Target, prop: StyleProp, value: impl Into<String>) -> Self {
        Self::SetStyle(target, prop, value.into())
    }
}

/// Whether the host should suppress the browser default for the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Default,
    PreventDefault,
}

/// Format a number the way CSS values are usually written by hand: integral
/// values without a fraction, negative zero as `0`.
pub fn css_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", css_number(px))
}
