// Host-side tests for the staged reveal controller and the overlay morph.

use glam::Vec2;
use site_web::config::RevealParams;
use site_web::morph::{FlipTransform, MorphView, OverlayController, Rect, SharedPart, SHARED_PARTS};
use site_web::reveal::{Phase, RevealController, RevealProp, RevealStyle, RevealView};
use std::collections::{HashMap, HashSet};

const IDS: [&str; 3] = ["seo", "systems", "design"];

#[derive(Default)]
struct MockView {
    missing: HashSet<&'static str>,
    heights: HashMap<&'static str, f64>,
    applied: HashMap<(&'static str, RevealProp), f64>,
    expanded: HashMap<&'static str, bool>,
}

impl RevealView<&'static str> for MockView {
    fn contains(&self, id: &&'static str) -> bool {
        !self.missing.contains(id)
    }

    fn content_height(&self, id: &&'static str) -> f64 {
        self.heights.get(id).copied().unwrap_or(300.0)
    }

    fn apply(&mut self, id: &&'static str, prop: RevealProp, value: f64) {
        self.applied.insert((*id, prop), value);
    }

    fn set_expanded(&mut self, id: &&'static str, expanded: bool) {
        self.expanded.insert(*id, expanded);
    }
}

fn accordion() -> RevealController<&'static str> {
    RevealController::new(RevealParams::default(), RevealStyle::Accordion, IDS)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn assert_consistent(c: &RevealController<&'static str>, view: &MockView) {
    let open: Vec<_> = IDS
        .iter()
        .filter(|id| c.phase(id).is_some_and(Phase::is_open_or_opening))
        .collect();
    assert!(open.len() <= 1, "more than one region open: {open:?}");
    assert_eq!(open.len(), c.open_count());
    assert_eq!(open.first().copied(), c.open_id());
    for id in IDS {
        if let Some(&expanded) = view.expanded.get(id) {
            assert_eq!(expanded, c.phase(&id).is_some_and(Phase::is_open_or_opening));
        }
    }
}

#[test]
fn opening_one_region_closes_the_other() {
    let mut view = MockView::default();
    let mut c = accordion();
    assert!(c.toggle(&"seo", &mut view, 0.0));
    c.step(&mut view, 1000.0);
    assert_eq!(c.phase(&"seo"), Some(Phase::Open));

    assert!(c.toggle(&"systems", &mut view, 2000.0));
    assert_eq!(c.phase(&"seo"), Some(Phase::Closing));
    assert_eq!(c.phase(&"systems"), Some(Phase::Opening));
    assert_consistent(&c, &view);

    c.step(&mut view, 3000.0);
    assert_eq!(c.phase(&"seo"), Some(Phase::Closed));
    assert_eq!(c.phase(&"systems"), Some(Phase::Open));
    assert!(approx(view.applied[&("seo", RevealProp::Indicator)], 0.0));
    assert!(approx(view.applied[&("seo", RevealProp::Content)], 0.0));
    assert!(approx(view.applied[&("systems", RevealProp::Indicator)], 90.0));
    assert!(approx(view.applied[&("systems", RevealProp::Content)], 300.0));
    assert_eq!(c.active_tweens(), 0);
}

#[test]
fn new_region_opens_after_the_stagger() {
    let params = RevealParams::default();
    let mut view = MockView::default();
    let mut c = accordion();
    c.open_immediately(&"seo", &mut view);
    c.toggle(&"design", &mut view, 0.0);
    c.step(&mut view, params.open_delay_ms / 2.0);
    assert!(approx(view.applied[&("design", RevealProp::Content)], 0.0));
    assert!(view.applied[&("seo", RevealProp::Content)] < 300.0);
}

#[test]
fn content_height_is_capped() {
    let mut view = MockView::default();
    view.heights.insert("design", 1200.0);
    let mut c = accordion();
    c.toggle(&"design", &mut view, 0.0);
    c.step(&mut view, 1000.0);
    assert!(approx(view.applied[&("design", RevealProp::Content)], 500.0));
}

#[test]
fn rapid_toggles_never_open_two_regions() {
    let mut view = MockView::default();
    let mut c = accordion();
    let mut seed: u32 = 0x9e37_79b9;
    let mut now = 0.0;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let id = IDS[(seed >> 16) as usize % IDS.len()];
        now += ((seed >> 8) % 90) as f64;
        c.toggle(&id, &mut view, now);
        assert_consistent(&c, &view);
        c.step(&mut view, now);
        assert_consistent(&c, &view);
    }
    c.step(&mut view, now + 10_000.0);
    for id in IDS {
        let phase = c.phase(&id).unwrap();
        assert!(matches!(phase, Phase::Open | Phase::Closed));
        let expected = if phase == Phase::Open { 90.0 } else { 0.0 };
        assert!(approx(view.applied[&(id, RevealProp::Indicator)], expected));
    }
    assert_consistent(&c, &view);
}

#[test]
fn reversal_mid_animation_starts_from_reached_pose() {
    let mut view = MockView::default();
    let mut c = accordion();
    c.toggle(&"seo", &mut view, 0.0);
    c.step(&mut view, 300.0);
    let reached = view.applied[&("seo", RevealProp::Indicator)];
    assert!(reached > 0.0 && reached < 90.0);

    c.toggle(&"seo", &mut view, 300.0);
    assert_eq!(c.phase(&"seo"), Some(Phase::Closing));
    c.step(&mut view, 300.0);
    assert!(approx(view.applied[&("seo", RevealProp::Indicator)], reached));
    c.step(&mut view, 2000.0);
    assert_eq!(c.phase(&"seo"), Some(Phase::Closed));
    assert!(approx(view.applied[&("seo", RevealProp::Indicator)], 0.0));
}

#[test]
fn missing_or_unknown_region_is_a_no_op() {
    let mut view = MockView::default();
    view.missing.insert("systems");
    let mut c = accordion();
    c.open_immediately(&"seo", &mut view);

    assert!(!c.toggle(&"systems", &mut view, 0.0));
    assert!(!c.toggle(&"pricing", &mut view, 0.0));
    assert_eq!(c.open_id(), Some(&"seo"));
    assert_eq!(c.phase(&"seo"), Some(Phase::Open));
    assert_eq!(c.active_tweens(), 0);
}

#[test]
fn close_matches_toggling_the_open_region() {
    let mut a_view = MockView::default();
    let mut b_view = MockView::default();
    let mut a = accordion();
    let mut b = accordion();
    a.open_immediately(&"design", &mut a_view);
    b.open_immediately(&"design", &mut b_view);

    assert!(a.close(&mut a_view, 0.0));
    assert!(b.toggle(&"design", &mut b_view, 0.0));
    a.step(&mut a_view, 1000.0);
    b.step(&mut b_view, 1000.0);
    assert_eq!(a.phase(&"design"), b.phase(&"design"));
    assert_eq!(a_view.applied, b_view.applied);
    assert!(!a.close(&mut a_view, 2000.0));
}

#[test]
fn open_immediately_sets_pose_and_aria() {
    let mut view = MockView::default();
    let mut c = accordion();
    assert!(c.open_immediately(&"seo", &mut view));
    assert_eq!(c.phase(&"seo"), Some(Phase::Open));
    assert!(view.expanded[&"seo"]);
    assert!(approx(view.applied[&("seo", RevealProp::Indicator)], 90.0));
    assert_eq!(c.active_tweens(), 0);
}

#[test]
fn teardown_cancels_running_tweens() {
    let mut view = MockView::default();
    let mut c = accordion();
    c.open_immediately(&"seo", &mut view);
    c.toggle(&"systems", &mut view, 0.0);
    assert_eq!(c.active_tweens(), 4);
    assert_eq!(c.teardown(100.0), 4);
    assert_eq!(c.active_tweens(), 0);
    assert_eq!(c.teardown(100.0), 0);
}

/// Morph view: every shared part is either in its card slot or the overlay.
#[derive(Default)]
struct MockMorphView {
    reveal: MockView,
    in_overlay: HashSet<(&'static str, SharedPart)>,
    transforms: HashMap<(&'static str, SharedPart), FlipTransform>,
}

fn card_rect(part: SharedPart) -> Rect {
    match part {
        SharedPart::Title => Rect::new(40.0, 600.0, 200.0, 24.0),
        SharedPart::Image => Rect::new(40.0, 640.0, 160.0, 90.0),
    }
}

fn overlay_rect(part: SharedPart) -> Rect {
    match part {
        SharedPart::Title => Rect::new(100.0, 80.0, 400.0, 48.0),
        SharedPart::Image => Rect::new(100.0, 160.0, 640.0, 360.0),
    }
}

impl RevealView<&'static str> for MockMorphView {
    fn contains(&self, id: &&'static str) -> bool {
        self.reveal.contains(id)
    }
    fn content_height(&self, id: &&'static str) -> f64 {
        self.reveal.content_height(id)
    }
    fn apply(&mut self, id: &&'static str, prop: RevealProp, value: f64) {
        self.reveal.apply(id, prop, value)
    }
    fn set_expanded(&mut self, id: &&'static str, expanded: bool) {
        self.reveal.set_expanded(id, expanded)
    }
}

impl MorphView<&'static str> for MockMorphView {
    fn measure(&self, id: &&'static str, part: SharedPart) -> Option<Rect> {
        Some(if self.in_overlay.contains(&(*id, part)) {
            overlay_rect(part)
        } else {
            card_rect(part)
        })
    }

    fn reparent(&mut self, id: &&'static str, part: SharedPart, into_overlay: bool) {
        if into_overlay {
            self.in_overlay.insert((*id, part));
        } else {
            self.in_overlay.remove(&(*id, part));
        }
    }

    fn set_transform(&mut self, id: &&'static str, part: SharedPart, transform: Option<FlipTransform>) {
        match transform {
            Some(t) => self.transforms.insert((*id, part), t),
            None => self.transforms.remove(&(*id, part)),
        };
    }
}

const MORPH_MS: f64 = 550.0;

fn overlay() -> OverlayController<&'static str> {
    OverlayController::new(RevealParams::default(), MORPH_MS, IDS)
}

#[test]
fn expand_starts_drawn_over_the_card_and_ends_in_the_overlay() {
    let mut view = MockMorphView::default();
    let mut c = overlay();
    assert!(c.toggle(&"seo", &mut view, 0.0));
    assert!(c.is_morphing());

    for part in SHARED_PARTS {
        assert!(view.in_overlay.contains(&("seo", part)));
        let t = view.transforms[&("seo", part)];
        let drawn = t.apply(overlay_rect(part));
        assert!(drawn.origin.abs_diff_eq(card_rect(part).origin, 1e-3));
        assert!(drawn.size.abs_diff_eq(card_rect(part).size, 1e-3));
    }

    c.step(&mut view, MORPH_MS + 1.0);
    assert!(!c.is_morphing());
    assert!(view.transforms.is_empty());
    assert!(view.in_overlay.contains(&("seo", SharedPart::Title)));
    assert!(view.reveal.expanded[&"seo"]);
}

#[test]
fn collapse_returns_parts_to_their_card() {
    let mut view = MockMorphView::default();
    let mut c = overlay();
    c.toggle(&"design", &mut view, 0.0);
    c.step(&mut view, 1000.0);

    assert!(c.close(&mut view, 2000.0));
    assert_eq!(c.phase(&"design"), Some(Phase::Closing));
    // still drawn from the overlay while the morph runs
    assert!(view.in_overlay.contains(&("design", SharedPart::Image)));
    c.step(&mut view, 2000.0 + MORPH_MS / 2.0);
    let halfway = view.transforms[&("design", SharedPart::Image)];
    assert!(halfway.translate.length() > 0.0);

    c.step(&mut view, 4000.0);
    assert_eq!(c.phase(&"design"), Some(Phase::Closed));
    assert!(view.in_overlay.is_empty());
    assert!(view.transforms.is_empty());
    assert!(!view.reveal.expanded[&"design"]);
}

#[test]
fn overlay_teardown_restores_every_part() {
    let mut view = MockMorphView::default();
    let mut c = overlay();
    c.toggle(&"systems", &mut view, 0.0);
    c.step(&mut view, 100.0);
    c.teardown(&mut view, 120.0);
    assert!(!c.is_morphing());
    assert!(view.in_overlay.is_empty());
    assert!(view.transforms.is_empty());
}

#[test]
fn overlay_ignores_missing_cards() {
    let mut view = MockMorphView::default();
    view.reveal.missing.insert("seo");
    let mut c = overlay();
    assert!(!c.toggle(&"seo", &mut view, 0.0));
    assert!(view.in_overlay.is_empty());
    assert_eq!(c.open_id(), None);
}

#[test]
fn flip_invert_round_trips_through_apply() {
    let first = Rect::new(10.0, 20.0, 100.0, 50.0);
    let last = Rect::new(200.0, 40.0, 400.0, 100.0);
    let t = FlipTransform::invert(first, last);
    let drawn = t.apply(last);
    assert!(drawn.origin.abs_diff_eq(Vec2::new(10.0, 20.0), 1e-4));
    assert!(drawn.size.abs_diff_eq(Vec2::new(100.0, 50.0), 1e-4));
}
