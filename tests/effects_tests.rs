// Host-side tests for tilt, parallax, back-to-top and gradient effects.

use folio_core::effects::*;
use folio_core::patch::css_number;
use folio_core::{Patch, StyleProp, Target};
use glam::DVec2;

#[test]
fn tilt_is_neutral_at_card_center() {
    let rect = Rect::new(100.0, 50.0, 300.0, 200.0);
    let tilt = tilt_for_pointer(DVec2::new(250.0, 150.0), &rect, 20.0);
    assert_eq!(tilt.rotate_x_deg, 0.0);
    assert_eq!(tilt.rotate_y_deg, 0.0);
    assert_eq!(
        tilt.transform(1000.0, 10.0),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-10px)"
    );
}

#[test]
fn tilt_scales_with_offset_from_center() {
    let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
    // Bottom-right corner: 100px right and below centre.
    let tilt = tilt_for_pointer(DVec2::new(200.0, 200.0), &rect, 20.0);
    assert_eq!(tilt.rotate_x_deg, 5.0);
    assert_eq!(tilt.rotate_y_deg, -5.0);
    assert_eq!(
        tilt.transform(1000.0, 10.0),
        "perspective(1000px) rotateX(5deg) rotateY(-5deg) translateY(-10px)"
    );
}

#[test]
fn tilt_uses_given_perspective_and_lift() {
    let tilt = Tilt {
        rotate_x_deg: 2.5,
        rotate_y_deg: -1.0,
    };
    assert_eq!(
        tilt.transform(800.0, 4.0),
        "perspective(800px) rotateX(2.5deg) rotateY(-1deg) translateY(-4px)"
    );
    assert_eq!(
        tilt.transform(800.0, 0.0),
        "perspective(800px) rotateX(2.5deg) rotateY(-1deg) translateY(0px)"
    );
}

#[test]
fn neutral_transform_on_leave() {
    assert_eq!(
        neutral_tilt_transform(1000.0),
        "perspective(1000px) rotateX(0) rotateY(0)"
    );
    assert_eq!(neutral_tilt_transform(600.0), "perspective(600px) rotateX(0) rotateY(0)");
}

#[test]
fn parallax_within_hero() {
    let p = parallax_for_scroll(200.0, 800.0, 0.5, 0.8).unwrap();
    assert_eq!(p.text_shift_px, 100.0);
    assert_eq!(p.text_opacity, 0.75);
    assert!((p.image_shift_px - 80.0).abs() < 1e-9);

    let mut out = Vec::new();
    p.patches(&mut out);
    assert!(out.contains(&Patch::style(
        Target::HeroText,
        StyleProp::Transform,
        "translateY(100px)"
    )));
    assert!(out.contains(&Patch::style(Target::HeroText, StyleProp::Opacity, "0.75")));
}

#[test]
fn parallax_stops_past_hero() {
    assert!(parallax_for_scroll(800.0, 800.0, 0.5, 0.8).is_none());
    assert!(parallax_for_scroll(1200.0, 800.0, 0.5, 0.8).is_none());
    assert!(parallax_for_scroll(10.0, 0.0, 0.5, 0.8).is_none());
}

#[test]
fn parallax_at_top_is_identity() {
    let p = parallax_for_scroll(0.0, 800.0, 0.5, 0.8).unwrap();
    assert_eq!(p.text_shift_px, 0.0);
    assert_eq!(p.text_opacity, 1.0);
}

#[test]
fn back_to_top_visibility_gate() {
    let mut out = Vec::new();
    back_to_top_patches(500.0, 500.0, &mut out);
    assert!(out.contains(&Patch::style(Target::BackToTop, StyleProp::Visibility, "hidden")));

    out.clear();
    back_to_top_patches(501.0, 500.0, &mut out);
    assert!(out.contains(&Patch::style(Target::BackToTop, StyleProp::Opacity, "1")));
    assert!(out.contains(&Patch::style(Target::BackToTop, StyleProp::Visibility, "visible")));
}

#[test]
fn back_to_top_hover_lifts_and_restores() {
    let mut out = Vec::new();
    back_to_top_hover_patches(true, 5.0, &mut out);
    assert!(out.contains(&Patch::style(
        Target::BackToTop,
        StyleProp::Transform,
        "translateY(-5px)"
    )));
    out.clear();
    back_to_top_hover_patches(false, 5.0, &mut out);
    assert!(out.contains(&Patch::style(
        Target::BackToTop,
        StyleProp::Transform,
        "translateY(0px)"
    )));
    assert!(out.contains(&Patch::style(
        Target::BackToTop,
        StyleProp::BoxShadow,
        "0 4px 12px rgba(0, 0, 0, 0.15)"
    )));
}

#[test]
fn gradient_repaints_every_tenth_step() {
    let mut hue = GradientHue::default();
    let painted: Vec<(u32, String)> = (0..30)
        .filter_map(|_| hue.step().map(|bg| (hue.hue, bg)))
        .collect();
    assert_eq!(painted.len(), 3);
    assert_eq!(painted[0].0, 10);
    assert_eq!(
        painted[0].1,
        "linear-gradient(135deg, hsl(241, 70%, 65%) 0%, hsl(271, 60%, 60%) 100%)"
    );
}

#[test]
fn gradient_hue_wraps() {
    let mut hue = GradientHue { hue: 359 };
    let bg = hue.step();
    assert_eq!(hue.hue, 0);
    assert_eq!(
        bg.as_deref(),
        Some("linear-gradient(135deg, hsl(240, 70%, 65%) 0%, hsl(270, 60%, 60%) 100%)")
    );
}

#[test]
fn skill_tags_are_staggered() {
    assert_eq!(skill_tag_delay(0, 50), "0ms");
    assert_eq!(skill_tag_delay(3, 50), "150ms");
}

#[test]
fn css_numbers_drop_integral_fractions() {
    assert_eq!(css_number(-0.0), "0");
    assert_eq!(css_number(12.0), "12");
    assert_eq!(css_number(-2.5), "-2.5");
}
