//! Staged reveal controller for accordion rows and overlay panels.
//!
//! Every region is in exactly one [`Phase`]. At most one region is ever in
//! `Opening` or `Open`: opening a region first moves the previously open one
//! to `Closing` within the same call. A toggle that lands while a region is
//! still animating cancels that region's tweens and restarts from the pose it
//! had reached, so rapid re-toggling never leaves two regions open.

use crate::config::RevealParams;
use crate::tween::{Ease, Tween, TweenHandle, TweenSet};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    #[inline]
    pub fn is_open_or_opening(self) -> bool {
        matches!(self, Phase::Opening | Phase::Open)
    }
}

/// Animated property of a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealProp {
    /// Rotation of the toggle indicator, in degrees.
    Indicator,
    /// Max-height of the collapsible content, in px.
    Content,
    /// Opacity of an overlay panel.
    Opacity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    Accordion,
    Overlay,
}

impl RevealStyle {
    fn props(self) -> &'static [RevealProp] {
        match self {
            RevealStyle::Accordion => &[RevealProp::Indicator, RevealProp::Content],
            RevealStyle::Overlay => &[RevealProp::Opacity],
        }
    }
}

/// Rendering side of a reveal: looks regions up and applies property values.
pub trait RevealView<Id> {
    /// Whether the region's interactive elements are present.
    fn contains(&self, id: &Id) -> bool;
    /// Natural height of the region's content, before capping.
    fn content_height(&self, id: &Id) -> f64;
    fn apply(&mut self, id: &Id, prop: RevealProp, value: f64);
    /// Mirror the open state into ARIA attributes.
    fn set_expanded(&mut self, id: &Id, expanded: bool);
}

pub struct RevealController<Id> {
    params: RevealParams,
    style: RevealStyle,
    phases: FnvHashMap<Id, Phase>,
    open: Option<Id>,
    tweens: TweenSet<(Id, RevealProp)>,
    in_flight: FnvHashMap<Id, SmallVec<[TweenHandle; 2]>>,
    values: FnvHashMap<(Id, RevealProp), f64>,
}

impl<Id: Clone + Eq + Hash> RevealController<Id> {
    pub fn new(params: RevealParams, style: RevealStyle, ids: impl IntoIterator<Item = Id>) -> Self {
        let phases = ids.into_iter().map(|id| (id, Phase::Closed)).collect();
        Self {
            params,
            style,
            phases,
            open: None,
            tweens: TweenSet::default(),
            in_flight: FnvHashMap::default(),
            values: FnvHashMap::default(),
        }
    }

    #[inline]
    pub fn open_id(&self) -> Option<&Id> {
        self.open.as_ref()
    }

    pub fn phase(&self, id: &Id) -> Option<Phase> {
        self.phases.get(id).copied()
    }

    /// Regions currently `Opening` or `Open`.
    pub fn open_count(&self) -> usize {
        self.phases
            .values()
            .filter(|p| p.is_open_or_opening())
            .count()
    }

    #[inline]
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Last value applied for a property, if any.
    pub fn value(&self, id: &Id, prop: RevealProp) -> Option<f64> {
        self.values.get(&(id.clone(), prop)).copied()
    }

    /// Put `id` in the open pose without animating (initial render).
    pub fn open_immediately(&mut self, id: &Id, view: &mut impl RevealView<Id>) -> bool {
        if !self.phases.contains_key(id) || !view.contains(id) {
            return false;
        }
        if let Some(prev) = self.open.take() {
            self.settle(&prev, false, view);
        }
        self.settle(id, true, view);
        self.open = Some(id.clone());
        true
    }

    /// Open `id` if closed, close it if open. Opening closes any other open
    /// region first. Returns `false` (and changes nothing) when the region is
    /// unknown or its elements are missing.
    pub fn toggle(&mut self, id: &Id, view: &mut impl RevealView<Id>, now_ms: f64) -> bool {
        if !self.phases.contains_key(id) || !view.contains(id) {
            return false;
        }
        if self.open.as_ref() == Some(id) {
            self.open = None;
            self.start(id, false, 0.0, view, now_ms);
            return true;
        }
        let open_delay = match self.open.take() {
            Some(prev) => {
                self.start(&prev, false, self.params.close_delay_ms, view, now_ms);
                self.params.open_delay_ms
            }
            None => 0.0,
        };
        self.start(id, true, open_delay, view, now_ms);
        self.open = Some(id.clone());
        true
    }

    /// Close whatever is open (close button, Escape). Same as toggling the
    /// open id.
    pub fn close(&mut self, view: &mut impl RevealView<Id>, now_ms: f64) -> bool {
        match self.open.clone() {
            Some(id) => self.toggle(&id, view, now_ms),
            None => false,
        }
    }

    /// Advance running tweens, apply their values and finish phases whose
    /// tweens have all completed.
    pub fn step(&mut self, view: &mut impl RevealView<Id>, now_ms: f64) {
        for s in self.tweens.step(now_ms) {
            let (id, prop) = s.prop;
            view.apply(&id, prop, s.value);
            self.values.insert((id, prop), s.value);
        }
        let tweens = &self.tweens;
        let finished: SmallVec<[Id; 2]> = self
            .in_flight
            .iter()
            .filter(|(_, handles)| handles.iter().all(|h| !tweens.is_running(h)))
            .map(|(id, _)| id.clone())
            .collect();
        for id in finished {
            self.in_flight.remove(&id);
            if let Some(phase) = self.phases.get_mut(&id) {
                *phase = match *phase {
                    Phase::Opening => Phase::Open,
                    Phase::Closing => Phase::Closed,
                    other => other,
                };
            }
        }
    }

    /// Cancel every running tween. Returns how many were cancelled.
    pub fn teardown(&mut self, now_ms: f64) -> usize {
        let mut cancelled = 0;
        for (_, handles) in self.in_flight.drain() {
            for h in handles {
                if self.tweens.cancel(h, now_ms).is_some() {
                    cancelled += 1;
                }
            }
        }
        self.tweens.clear();
        cancelled
    }

    fn target(&self, id: &Id, prop: RevealProp, open: bool, view: &impl RevealView<Id>) -> f64 {
        match (prop, open) {
            (RevealProp::Indicator, true) => self.params.open_rotation_deg,
            (RevealProp::Content, true) => view.content_height(id).min(self.params.max_height_px),
            (RevealProp::Opacity, true) => 1.0,
            (_, false) => 0.0,
        }
    }

    fn cancel_in_flight(&mut self, id: &Id, now_ms: f64) {
        if let Some(handles) = self.in_flight.remove(id) {
            for (h, &prop) in handles.into_iter().zip(self.style.props()) {
                if let Some(v) = self.tweens.cancel(h, now_ms) {
                    self.values.insert((id.clone(), prop), v);
                }
            }
        }
    }

    fn start(
        &mut self,
        id: &Id,
        open: bool,
        delay_ms: f64,
        view: &mut impl RevealView<Id>,
        now_ms: f64,
    ) {
        self.cancel_in_flight(id, now_ms);
        let mut handles = SmallVec::new();
        for &prop in self.style.props() {
            let from = self.value(id, prop).unwrap_or(0.0);
            let to = self.target(id, prop, open, &*view);
            let tween = Tween::new(from, to, now_ms, self.params.duration_ms, Ease::Power2InOut)
                .with_delay(delay_ms);
            handles.push(self.tweens.start((id.clone(), prop), tween));
        }
        self.in_flight.insert(id.clone(), handles);
        self.phases
            .insert(id.clone(), if open { Phase::Opening } else { Phase::Closing });
        view.set_expanded(id, open);
    }

    fn settle(&mut self, id: &Id, open: bool, view: &mut impl RevealView<Id>) {
        self.cancel_in_flight(id, 0.0);
        for &prop in self.style.props() {
            let v = self.target(id, prop, open, &*view);
            view.apply(id, prop, v);
            self.values.insert((id.clone(), prop), v);
        }
        self.phases
            .insert(id.clone(), if open { Phase::Open } else { Phase::Closed });
        view.set_expanded(id, open);
    }
}
