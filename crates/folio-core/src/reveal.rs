//! One-shot reveal of animatable elements.
//!
//! Elements start hidden and move to revealed exactly once, either when they
//! first intersect the viewport or when the fallback deadline passes.

use crate::patch::{translate_y, Patch, StyleProp, Target};
use fnv::FnvHashSet;

pub const REVEALED_CLASS: &str = "fade-in";

#[derive(Debug, Default)]
pub struct RevealRegistry {
    pending: FnvHashSet<usize>,
    revealed: Vec<usize>,
}

impl RevealRegistry {
    pub fn new(count: usize) -> Self {
        Self {
            pending: (0..count).collect(),
            revealed: Vec::with_capacity(count),
        }
    }

    /// Hidden start state for every element still pending.
    pub fn hide_pending(&self, initial_offset_px: f64, out: &mut Vec<Patch>) {
        let mut pending: Vec<usize> = self.pending.iter().copied().collect();
        pending.sort_unstable();
        for i in pending {
            out.push(Patch::style(Target::Animatable(i), StyleProp::Opacity, "0"));
            out.push(Patch::style(
                Target::Animatable(i),
                StyleProp::Transform,
                translate_y(initial_offset_px),
            ));
        }
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Indices in the order they were revealed.
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    /// Intersection callback. Returns `true` only on the first reveal.
    pub fn on_intersect(&mut self, index: usize, intersecting: bool, out: &mut Vec<Patch>) -> bool {
        if !intersecting || !self.pending.remove(&index) {
            return false;
        }
        self.reveal(index, out);
        true
    }

    /// Reveal everything still pending, lowest index first.
    pub fn force_reveal_all(&mut self, out: &mut Vec<Patch>) -> usize {
        let mut rest: Vec<usize> = self.pending.drain().collect();
        rest.sort_unstable();
        for &i in &rest {
            self.reveal(i, out);
        }
        rest.len()
    }

    fn reveal(&mut self, index: usize, out: &mut Vec<Patch>) {
        let target = Target::Animatable(index);
        out.push(Patch::AddClass(target, REVEALED_CLASS));
        out.push(Patch::style(target, StyleProp::Opacity, "1"));
        out.push(Patch::style(target, StyleProp::Transform, "none"));
        out.push(Patch::Unobserve(target));
        self.revealed.push(index);
    }

    /// Print layout: every element must be visible, revealed or not.
    pub fn prepare_print(&mut self, out: &mut Vec<Patch>) {
        let earlier = self.revealed.len();
        self.force_reveal_all(out);
        for &i in &self.revealed[..earlier] {
            out.push(Patch::style(Target::Animatable(i), StyleProp::Opacity, "1"));
            out.push(Patch::style(Target::Animatable(i), StyleProp::Transform, "none"));
        }
    }
}
