// Host-side tests for navigation state: menu toggle, navbar direction
// detection, active-section tracking and keyboard stepping.

use folio_core::nav::*;
use folio_core::{Patch, StyleProp, Target};

fn sections() -> Vec<SectionDescriptor> {
    vec![
        SectionDescriptor::new("home", 0.0, 600.0),
        SectionDescriptor::new("about", 600.0, 800.0),
        SectionDescriptor::new("projects", 1400.0, 1000.0),
    ]
}

fn active_links(patches: &[Patch]) -> Vec<usize> {
    patches
        .iter()
        .filter_map(|p| match p {
            Patch::AddClass(Target::NavLink(i), ACTIVE_CLASS) => Some(*i),
            _ => None,
        })
        .collect()
}

#[test]
fn menu_toggle_flips_state_and_bars() {
    let mut nav = NavigationState::default();
    let mut out = Vec::new();
    nav.toggle_menu(&mut out);
    assert!(nav.is_menu_open);
    assert!(out.contains(&Patch::AddClass(Target::NavMenu, ACTIVE_CLASS)));
    assert!(out.contains(&Patch::style(
        Target::HamburgerBar(0),
        StyleProp::Transform,
        "rotate(45deg) translate(5px, 5px)"
    )));
    assert!(out.contains(&Patch::style(Target::HamburgerBar(1), StyleProp::Opacity, "0")));

    out.clear();
    nav.toggle_menu(&mut out);
    assert!(!nav.is_menu_open);
    assert!(out.contains(&Patch::RemoveClass(Target::NavMenu, ACTIVE_CLASS)));
    assert!(out.contains(&Patch::style(Target::HamburgerBar(2), StyleProp::Transform, "none")));
}

#[test]
fn closing_an_already_closed_menu_is_harmless() {
    let mut nav = NavigationState::default();
    let mut out = Vec::new();
    nav.close_menu(&mut out);
    nav.close_menu(&mut out);
    assert!(!nav.is_menu_open);
    assert!(out.contains(&Patch::style(Target::HamburgerBar(1), StyleProp::Opacity, "1")));
}

#[test]
fn navbar_is_top_for_non_positive_offsets() {
    let mut nav = NavigationState::default();
    for offset in [500.0, 0.0, 300.0, -20.0, 900.0, 0.0] {
        let view = nav.observe_scroll(offset, 100.0);
        if offset <= 0.0 {
            assert_eq!(view, NavbarView::Top, "offset {offset}");
        }
        assert_eq!(nav.last_scroll_offset, offset);
    }
}

#[test]
fn navbar_hides_when_scrolling_down_past_threshold() {
    let mut nav = NavigationState::default();
    assert_eq!(nav.observe_scroll(50.0, 100.0), NavbarView::Scrolled);
    assert_eq!(nav.observe_scroll(90.0, 100.0), NavbarView::Scrolled);
    assert_eq!(nav.observe_scroll(150.0, 100.0), NavbarView::Hidden);
    assert_eq!(nav.observe_scroll(400.0, 100.0), NavbarView::Hidden);
    // Scrolling up shows it again.
    assert_eq!(nav.observe_scroll(380.0, 100.0), NavbarView::Scrolled);
    // Same offset twice counts as not scrolling down.
    assert_eq!(nav.observe_scroll(380.0, 100.0), NavbarView::Scrolled);
}

#[test]
fn navbar_top_patches_clear_scrolled_and_show() {
    let mut out = Vec::new();
    navbar_patches(NavbarView::Top, &mut out);
    assert!(out.contains(&Patch::RemoveClass(Target::Navbar, SCROLLED_CLASS)));
    assert!(out.contains(&Patch::style(Target::Navbar, StyleProp::Transform, "translateY(0px)")));
    assert!(!out.iter().any(|p| matches!(p, Patch::AddClass(Target::Navbar, _))));
}

#[test]
fn active_section_uses_half_open_ranges() {
    let s = sections();
    // about spans [500, 1300)
    assert_eq!(active_section_index(499.0, &s, 100.0), Some(0));
    assert_eq!(active_section_index(500.0, &s, 100.0), Some(1));
    assert_eq!(active_section_index(1299.0, &s, 100.0), Some(1));
    assert_eq!(active_section_index(1300.0, &s, 100.0), Some(2));
    assert_eq!(active_section_index(5000.0, &s, 100.0), None);
    assert_eq!(active_section_index(-200.0, &s, 100.0), None);
}

#[test]
fn at_most_one_link_active_for_any_scroll_sequence() {
    let s = sections();
    let mut nav = NavigationState::default();
    let mut offset = -150.0;
    while offset < 3000.0 {
        let mut out = Vec::new();
        nav.update_active_section(offset, &s, 100.0, &mut out);
        let active = active_links(&out);
        assert!(active.len() <= 1, "offset {offset}: {active:?}");
        assert_eq!(out.len(), s.len());
        offset += 37.0;
    }
}

#[test]
fn overlapping_sections_prefer_the_topmost() {
    let s = vec![
        SectionDescriptor::new("late", 500.0, 1000.0),
        SectionDescriptor::new("early", 200.0, 1000.0),
    ];
    assert_eq!(active_section_index(600.0, &s, 100.0), Some(1));

    let same_top = vec![
        SectionDescriptor::new("a", 200.0, 500.0),
        SectionDescriptor::new("b", 200.0, 500.0),
    ];
    assert_eq!(active_section_index(300.0, &same_top, 100.0), Some(0));
}

#[test]
fn active_section_id_tracks_the_winner() {
    let mut nav = NavigationState::default();
    let mut out = Vec::new();
    nav.update_active_section(700.0, &sections(), 100.0, &mut out);
    assert_eq!(nav.active_section_id.as_deref(), Some("about"));
    nav.update_active_section(9000.0, &sections(), 100.0, &mut out);
    assert_eq!(nav.active_section_id, None);
}

#[test]
fn anchor_scroll_leaves_navbar_clearance() {
    assert_eq!(anchor_scroll_top(1400.0, 80.0), 1320.0);
}

#[test]
fn keyboard_step_from_current_section() {
    let tops = [-900.0, 120.0, 800.0, 1600.0];
    assert_eq!(keyboard_step_target(&tops, 700.0, SectionStep::Next), Some(2));
    assert_eq!(keyboard_step_target(&tops, 700.0, SectionStep::Previous), Some(0));
}

#[test]
fn keyboard_step_clamps_to_ends() {
    assert_eq!(keyboard_step_target(&[10.0, 900.0], 700.0, SectionStep::Previous), Some(0));
    assert_eq!(keyboard_step_target(&[-900.0, 10.0], 700.0, SectionStep::Next), Some(1));
}

#[test]
fn keyboard_step_needs_a_current_section() {
    // Nothing in the upper half of the viewport.
    assert_eq!(keyboard_step_target(&[-50.0, 400.0], 700.0, SectionStep::Next), None);
    assert_eq!(keyboard_step_target(&[], 700.0, SectionStep::Next), None);
}

#[test]
fn section_step_from_key() {
    assert_eq!(SectionStep::from_key("ArrowDown"), Some(SectionStep::Next));
    assert_eq!(SectionStep::from_key("ArrowUp"), Some(SectionStep::Previous));
    assert_eq!(SectionStep::from_key("ArrowLeft"), None);
}
