// Host-side tests for the pointer sampler and particle emitter.

use glam::Vec2;
use site_web::config::{ParticleParams, PointerParams};
use site_web::particles::{base_size_for, Particle, ParticleEmitter, ParticleSurface};
use site_web::pointer::{HotRegion, PointerState};
use std::collections::HashMap;

/// Stands in for the SVG mask: tracks live handles and their radii.
#[derive(Default)]
struct CountingSurface {
    next: usize,
    radii: HashMap<usize, f32>,
    destroyed: usize,
}

impl ParticleSurface for CountingSurface {
    type Handle = usize;

    fn create(&mut self, _position: Vec2) -> usize {
        let id = self.next;
        self.next += 1;
        self.radii.insert(id, 0.0);
        id
    }

    fn set_radius(&mut self, handle: &usize, radius: f32) {
        self.radii.insert(*handle, radius);
    }

    fn destroy(&mut self, handle: usize) {
        assert!(self.radii.remove(&handle).is_some(), "double destroy");
        self.destroyed += 1;
    }
}

fn moving_pointer(jitter: f32) -> PointerState {
    PointerState {
        raw: Vec2::new(100.0, 100.0),
        smooth: Vec2::new(100.0 - jitter, 100.0),
        jitter,
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn pointer_tick_damps_and_reports_distance() {
    let mut p = PointerState::default();
    p.set_raw(10.0, 0.0);
    let jitter = p.tick(&PointerParams::default());
    assert!(approx(p.smooth.x, 1.0));
    assert!(approx(jitter, 9.0));
    assert!(approx(jitter, p.raw.distance(p.smooth)));
}

#[test]
fn jitter_never_negative_and_decays_when_still() {
    let params = PointerParams::default();
    let mut p = PointerState::default();
    p.set_raw(-40.0, 30.0);
    let mut prev = f32::MAX;
    for _ in 0..100 {
        let j = p.tick(&params);
        assert!(j >= 0.0);
        assert!(j <= prev);
        prev = j;
    }
    assert!(prev < 0.01);
}

#[test]
fn hot_region_starts_outside() {
    let mut hot = HotRegion::default();
    assert!(!hot.is_inside());
    hot.enter();
    assert!(hot.is_inside());
    hot.leave();
    assert!(!hot.is_inside());
}

#[test]
fn size_grows_to_base_then_shrinks_to_zero() {
    let params = ParticleParams::default();
    let p = Particle {
        position: Vec2::ZERO,
        base_size: 30.0,
        created_at_ms: 0.0,
    };
    assert_eq!(p.size_at(0.0, &params), 0.0);
    assert!(approx(p.size_at(25.0, &params), 15.0));
    assert!(approx(p.size_at(50.0, &params), 30.0));
    assert!(approx(p.size_at(2525.0, &params), 15.0));
    assert!(approx(p.size_at(5000.0, &params), 0.0));
    assert_eq!(p.size_at(9000.0, &params), 0.0);
}

#[test]
fn base_size_is_clamped() {
    let params = ParticleParams::default();
    assert!(approx(base_size_for(10.0, &params), 15.0));
    assert_eq!(base_size_for(500.0, &params), 150.0);
}

#[test]
fn emission_needs_motion_hot_region_and_surface() {
    let mut surface = CountingSurface::default();
    let mut emitter: ParticleEmitter<CountingSurface> = ParticleEmitter::new(ParticleParams::default());

    assert!(!emitter.maybe_emit(&moving_pointer(0.05), true, Some(&mut surface), 0.0));
    assert!(!emitter.maybe_emit(&moving_pointer(5.0), false, Some(&mut surface), 0.0));
    assert!(!emitter.maybe_emit(&moving_pointer(5.0), true, None, 0.0));
    assert!(emitter.is_empty());

    assert!(emitter.maybe_emit(&moving_pointer(5.0), true, Some(&mut surface), 0.0));
    assert_eq!(emitter.len(), 1);
    assert_eq!(surface.radii.len(), 1);
    let p = emitter.particles().next().copied().unwrap();
    assert_eq!(p.position, Vec2::new(95.0, 100.0));
    assert!(approx(p.base_size, 7.5));
}

#[test]
fn expired_particles_are_evicted_exactly_once() {
    let params = ParticleParams::default();
    let mut surface = CountingSurface::default();
    let mut emitter = ParticleEmitter::new(params);
    emitter.maybe_emit(&moving_pointer(5.0), true, Some(&mut surface), 0.0);
    emitter.maybe_emit(&moving_pointer(5.0), true, Some(&mut surface), 1000.0);

    assert_eq!(emitter.update(&mut surface, 5000.0), 0, "age == lifespan is still alive");
    assert_eq!(emitter.update(&mut surface, 5001.0), 1);
    assert_eq!(emitter.len(), 1);
    assert_eq!(emitter.update(&mut surface, 5002.0), 0);
    assert_eq!(emitter.update(&mut surface, 6001.0), 1);
    assert!(emitter.is_empty());
    assert!(surface.radii.is_empty());
    assert_eq!(surface.destroyed, 2);
}

#[test]
fn update_writes_current_radius() {
    let mut surface = CountingSurface::default();
    let mut emitter = ParticleEmitter::new(ParticleParams::default());
    emitter.maybe_emit(&moving_pointer(20.0), true, Some(&mut surface), 0.0);
    emitter.update(&mut surface, 50.0);
    assert!(approx(surface.radii[&0], 30.0));
}

#[test]
fn surface_element_count_matches_live_particles() {
    let mut surface = CountingSurface::default();
    let mut emitter = ParticleEmitter::new(ParticleParams::quick_bloom());
    let mut now = 0.0;
    for _ in 0..400 {
        now += 16.0;
        emitter.frame(&moving_pointer(3.0), true, Some(&mut surface), now);
        assert_eq!(surface.radii.len(), emitter.len());
    }
    // nothing older than the lifespan survives
    assert!(emitter.particles().all(|p| p.age_ms(now) <= 3000.0));
}

#[test]
fn frame_without_surface_is_a_no_op() {
    let mut emitter: ParticleEmitter<CountingSurface> = ParticleEmitter::new(ParticleParams::default());
    emitter.frame(&moving_pointer(10.0), true, None, 0.0);
    assert!(emitter.is_empty());
}

#[test]
fn clear_removes_everything_and_is_idempotent() {
    let mut surface = CountingSurface::default();
    let mut emitter = ParticleEmitter::new(ParticleParams::long_trail());
    for i in 0..5 {
        emitter.maybe_emit(&moving_pointer(4.0), true, Some(&mut surface), i as f64);
    }
    emitter.clear(&mut surface);
    emitter.clear(&mut surface);
    assert!(emitter.is_empty());
    assert!(surface.radii.is_empty());
    assert_eq!(surface.destroyed, 5);
}
