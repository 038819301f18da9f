//! Decorative effects: card tilt, hero parallax, back-to-top visibility and
//! the gradient hue drift.

use crate::constants::GRADIENT_STEP_EVERY;
use crate::patch::{css_number, translate_y, Patch, StyleProp, Target};
use glam::DVec2;

/// Card rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn half_size(&self) -> DVec2 {
        DVec2::new(self.width, self.height) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    /// The card is also lifted by `lift_px` while tilted.
    pub fn transform(&self, perspective_px: f64, lift_px: f64) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            css_number(perspective_px),
            css_number(self.rotate_x_deg),
            css_number(self.rotate_y_deg),
            css_number(-lift_px),
        )
    }
}

/// Rotation for a pointer at `client` over a card at `rect`. Pointer below
/// centre tips the card back; pointer right of centre turns it right.
pub fn tilt_for_pointer(client: DVec2, rect: &Rect, divisor: f64) -> Tilt {
    let local = client - DVec2::new(rect.left, rect.top);
    let center = rect.half_size();
    Tilt {
        rotate_x_deg: (local.y - center.y) / divisor,
        rotate_y_deg: (center.x - local.x) / divisor,
    }
}

pub fn neutral_tilt_transform(perspective_px: f64) -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0)",
        css_number(perspective_px)
    )
}

/// Hero layers while the page is scrolled within the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub text_shift_px: f64,
    pub text_opacity: f64,
    pub image_shift_px: f64,
}

pub fn parallax_for_scroll(
    scroll_offset: f64,
    hero_height: f64,
    speed: f64,
    image_factor: f64,
) -> Option<Parallax> {
    if hero_height <= 0.0 || scroll_offset >= hero_height {
        return None;
    }
    Some(Parallax {
        text_shift_px: scroll_offset * speed,
        text_opacity: 1.0 - scroll_offset / hero_height,
        image_shift_px: scroll_offset * speed * image_factor,
    })
}

impl Parallax {
    pub fn patches(&self, out: &mut Vec<Patch>) {
        out.push(Patch::style(
            Target::HeroText,
            StyleProp::Transform,
            translate_y(self.text_shift_px),
        ));
        out.push(Patch::style(
            Target::HeroText,
            StyleProp::Opacity,
            css_number(self.text_opacity),
        ));
        out.push(Patch::style(
            Target::HeroImage,
            StyleProp::Transform,
            translate_y(self.image_shift_px),
        ));
    }
}

pub fn back_to_top_patches(scroll_offset: f64, threshold: f64, out: &mut Vec<Patch>) {
    let (opacity, visibility) = if scroll_offset > threshold {
        ("1", "visible")
    } else {
        ("0", "hidden")
    };
    out.push(Patch::style(Target::BackToTop, StyleProp::Opacity, opacity));
    out.push(Patch::style(Target::BackToTop, StyleProp::Visibility, visibility));
}

pub fn back_to_top_hover_patches(hovered: bool, lift_px: f64, out: &mut Vec<Patch>) {
    let (lift, shadow) = if hovered {
        (-lift_px, "0 6px 20px rgba(0, 0, 0, 0.25)")
    } else {
        (0.0, "0 4px 12px rgba(0, 0, 0, 0.15)")
    };
    out.push(Patch::style(Target::BackToTop, StyleProp::Transform, translate_y(lift)));
    out.push(Patch::style(Target::BackToTop, StyleProp::BoxShadow, shadow));
}

/// Slow hue drift for the gradient headline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientHue {
    pub hue: u32,
}

impl GradientHue {
    /// Advance one step; every tenth step yields a new background.
    pub fn step(&mut self) -> Option<String> {
        self.hue = (self.hue + 1) % 360;
        if self.hue % GRADIENT_STEP_EVERY != 0 {
            return None;
        }
        let shift = self.hue / GRADIENT_STEP_EVERY;
        Some(format!(
            "linear-gradient(135deg, hsl({}, 70%, 65%) 0%, hsl({}, 60%, 60%) 100%)",
            240 + shift,
            270 + shift
        ))
    }
}

pub fn skill_tag_delay(index: usize, stagger_ms: u64) -> String {
    format!("{}ms", index as u64 * stagger_ms)
}
