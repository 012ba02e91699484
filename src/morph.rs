//! Shared-element morph between a list card and the overlay.
//!
//! The moving element (service title, hero image) is measured in its resting
//! slot (`first`) and again after it has been moved into the overlay
//! (`last`). The inverse transform that makes it *look* like it is still at
//! `first` is then animated to identity. Closing plays the same transform in
//! reverse, after which the element goes back to its resting parent with no
//! transform left on it.

use crate::config::RevealParams;
use crate::reveal::{Phase, RevealController, RevealStyle, RevealView};
use crate::tween::{Ease, Tween};
use glam::Vec2;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

/// Translate-then-scale transform with a top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipTransform {
    pub translate: Vec2,
    pub scale: Vec2,
}

impl FlipTransform {
    pub const IDENTITY: FlipTransform = FlipTransform {
        translate: Vec2::ZERO,
        scale: Vec2::ONE,
    };

    /// Transform that draws an element laid out at `last` on top of `first`.
    /// Empty boxes (element not rendered) yield the identity.
    pub fn invert(first: Rect, last: Rect) -> Self {
        if first.is_empty() || last.is_empty() {
            return Self::IDENTITY;
        }
        Self {
            translate: first.origin - last.origin,
            scale: first.size / last.size,
        }
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            translate: self.translate.lerp(other.translate, t),
            scale: self.scale.lerp(other.scale, t),
        }
    }

    /// Box this transform draws `rect` into.
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect {
            origin: rect.origin + self.translate,
            size: rect.size * self.scale,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4}, {:.4})",
            self.translate.x, self.translate.y, self.scale.x, self.scale.y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphDirection {
    /// Resting slot → overlay.
    Expand,
    /// Overlay → resting slot.
    Collapse,
}

/// One element's morph in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Morph {
    pub direction: MorphDirection,
    pub inverse: FlipTransform,
    pub tween: Tween,
}

impl Morph {
    pub fn new(direction: MorphDirection, first: Rect, last: Rect, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            direction,
            inverse: FlipTransform::invert(first, last),
            tween: Tween::new(0.0, 1.0, now_ms, duration_ms, Ease::Power2InOut),
        }
    }

    /// Transform to draw at `now_ms`, relative to the overlay layout.
    pub fn at(&self, now_ms: f64) -> FlipTransform {
        let t = self.tween.sample(now_ms) as f32;
        match self.direction {
            MorphDirection::Expand => self.inverse.lerp(FlipTransform::IDENTITY, t),
            MorphDirection::Collapse => FlipTransform::IDENTITY.lerp(self.inverse, t),
        }
    }

    #[inline]
    pub fn is_done(&self, now_ms: f64) -> bool {
        self.tween.is_done(now_ms)
    }
}

/// Elements that travel between a card and the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SharedPart {
    Title,
    Image,
}

pub const SHARED_PARTS: [SharedPart; 2] = [SharedPart::Title, SharedPart::Image];

/// DOM side of the overlay morph.
pub trait MorphView<Id>: RevealView<Id> {
    /// Layout box of a part wherever it currently sits; `None` if missing.
    fn measure(&self, id: &Id, part: SharedPart) -> Option<Rect>;
    /// Move a part into the overlay (`true`) or back to its card (`false`).
    fn reparent(&mut self, id: &Id, part: SharedPart, into_overlay: bool);
    /// Draw a part with a transform, or clear it with `None`.
    fn set_transform(&mut self, id: &Id, part: SharedPart, transform: Option<FlipTransform>);
}

struct ActiveMorph<Id> {
    id: Id,
    parts: Vec<(SharedPart, Morph)>,
}

/// Overlay variant of the reveal: same at-most-one-open state machine, plus
/// the shared-element morph of each card's title and image.
pub struct OverlayController<Id> {
    reveal: RevealController<Id>,
    morph_ms: f64,
    morphs: Vec<ActiveMorph<Id>>,
}

impl<Id: Clone + Eq + Hash> OverlayController<Id> {
    pub fn new(params: RevealParams, morph_ms: f64, ids: impl IntoIterator<Item = Id>) -> Self {
        Self {
            reveal: RevealController::new(params, RevealStyle::Overlay, ids),
            morph_ms,
            morphs: Vec::new(),
        }
    }

    #[inline]
    pub fn open_id(&self) -> Option<&Id> {
        self.reveal.open_id()
    }

    #[inline]
    pub fn phase(&self, id: &Id) -> Option<Phase> {
        self.reveal.phase(id)
    }

    #[inline]
    pub fn is_morphing(&self) -> bool {
        !self.morphs.is_empty()
    }

    pub fn toggle(&mut self, id: &Id, view: &mut impl MorphView<Id>, now_ms: f64) -> bool {
        let previous = self.reveal.open_id().cloned();
        if !self.reveal.toggle(id, view, now_ms) {
            return false;
        }
        if let Some(prev) = previous {
            self.collapse(&prev, view, now_ms);
        }
        if self.reveal.open_id() == Some(id) {
            self.expand(id, view, now_ms);
        }
        true
    }

    pub fn close(&mut self, view: &mut impl MorphView<Id>, now_ms: f64) -> bool {
        match self.reveal.open_id().cloned() {
            Some(id) => self.toggle(&id, view, now_ms),
            None => false,
        }
    }

    pub fn step(&mut self, view: &mut impl MorphView<Id>, now_ms: f64) {
        self.reveal.step(view, now_ms);
        self.morphs.retain(|active| {
            let mut done = true;
            for (part, morph) in &active.parts {
                if morph.is_done(now_ms) {
                    if morph.direction == MorphDirection::Collapse {
                        view.reparent(&active.id, *part, false);
                    }
                    view.set_transform(&active.id, *part, None);
                } else {
                    view.set_transform(&active.id, *part, Some(morph.at(now_ms)));
                    done = false;
                }
            }
            !done
        });
    }

    /// Cancel everything and put every moved part back where it started.
    pub fn teardown(&mut self, view: &mut impl MorphView<Id>, now_ms: f64) {
        self.reveal.teardown(now_ms);
        for active in self.morphs.drain(..) {
            for (part, _) in active.parts {
                view.reparent(&active.id, part, false);
                view.set_transform(&active.id, part, None);
            }
        }
        if let Some(id) = self.reveal.open_id().cloned() {
            for part in SHARED_PARTS {
                view.reparent(&id, part, false);
                view.set_transform(&id, part, None);
            }
        }
    }

    fn cancel_morph(&mut self, id: &Id) {
        self.morphs.retain(|m| &m.id != id);
    }

    fn expand(&mut self, id: &Id, view: &mut impl MorphView<Id>, now_ms: f64) {
        self.cancel_morph(id);
        let mut parts = Vec::with_capacity(SHARED_PARTS.len());
        for part in SHARED_PARTS {
            // clear any half-finished transform so we measure true layout
            view.set_transform(id, part, None);
            let Some(first) = view.measure(id, part) else {
                continue;
            };
            view.reparent(id, part, true);
            let Some(last) = view.measure(id, part) else {
                continue;
            };
            let morph = Morph::new(MorphDirection::Expand, first, last, now_ms, self.morph_ms);
            view.set_transform(id, part, Some(morph.at(now_ms)));
            parts.push((part, morph));
        }
        if !parts.is_empty() {
            self.morphs.push(ActiveMorph {
                id: id.clone(),
                parts,
            });
        }
    }

    fn collapse(&mut self, id: &Id, view: &mut impl MorphView<Id>, now_ms: f64) {
        self.cancel_morph(id);
        let mut parts = Vec::with_capacity(SHARED_PARTS.len());
        for part in SHARED_PARTS {
            view.set_transform(id, part, None);
            let Some(last) = view.measure(id, part) else {
                continue;
            };
            // measure the resting slot, then keep drawing from the overlay
            view.reparent(id, part, false);
            let first = view.measure(id, part);
            view.reparent(id, part, true);
            let Some(first) = first else {
                view.reparent(id, part, false);
                continue;
            };
            let morph = Morph::new(MorphDirection::Collapse, first, last, now_ms, self.morph_ms);
            parts.push((part, morph));
        }
        if !parts.is_empty() {
            self.morphs.push(ActiveMorph {
                id: id.clone(),
                parts,
            });
        }
    }
}
