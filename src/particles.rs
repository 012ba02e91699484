//! Cursor particles for the hero mask.
//!
//! Each frame the emitter may spawn one particle at the smoothed pointer
//! position, then walks the live set from newest to oldest, resizing each
//! particle by its age and evicting the ones past their lifespan. Visual
//! elements are owned by a [`ParticleSurface`]; the emitter only asks it to
//! create, resize and destroy them.

use crate::config::ParticleParams;
use crate::pointer::PointerState;
use glam::Vec2;

/// Rendering side of the particle system (SVG circles on the web, a counter
/// in tests).
pub trait ParticleSurface {
    type Handle;

    fn create(&mut self, position: Vec2) -> Self::Handle;
    fn set_radius(&mut self, handle: &Self::Handle, radius: f32);
    fn destroy(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub base_size: f32,
    pub created_at_ms: f64,
}

impl Particle {
    #[inline]
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.created_at_ms
    }

    #[inline]
    pub fn is_expired(&self, now_ms: f64, params: &ParticleParams) -> bool {
        self.age_ms(now_ms) > params.lifespan_ms
    }

    /// Rendered radius at `now_ms`: grows linearly to `base_size` over the
    /// peak fraction of the lifespan, then shrinks linearly back to zero.
    pub fn size_at(&self, now_ms: f64, params: &ParticleParams) -> f32 {
        let progress = self.age_ms(now_ms) / params.lifespan_ms;
        let peak = params.peak_fraction;
        let scale = if progress < peak {
            progress / peak
        } else {
            1.0 - (progress - peak) / (1.0 - peak)
        };
        (self.base_size as f64 * scale).max(0.0) as f32
    }
}

/// Base radius for a particle spawned at the given jitter.
#[inline]
pub fn base_size_for(jitter: f32, params: &ParticleParams) -> f32 {
    (jitter * params.size_gain).min(params.max_size_px)
}

pub struct ParticleEmitter<S: ParticleSurface> {
    params: ParticleParams,
    live: Vec<(Particle, S::Handle)>,
}

impl<S: ParticleSurface> ParticleEmitter<S> {
    pub fn new(params: ParticleParams) -> Self {
        Self {
            params,
            live: Vec::new(),
        }
    }

    #[inline]
    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.live.iter().map(|(p, _)| p)
    }

    /// Spawn one particle if the pointer moved enough inside the hot region.
    ///
    /// `surface` is `None` when the hero mask is not in the DOM; emission is
    /// skipped for that frame.
    pub fn maybe_emit(
        &mut self,
        pointer: &PointerState,
        in_hot_region: bool,
        surface: Option<&mut S>,
        now_ms: f64,
    ) -> bool {
        if pointer.jitter <= self.params.min_jitter_px || !in_hot_region {
            return false;
        }
        let Some(surface) = surface else {
            return false;
        };
        let particle = Particle {
            position: pointer.smooth,
            base_size: base_size_for(pointer.jitter, &self.params),
            created_at_ms: now_ms,
        };
        let handle = surface.create(particle.position);
        self.live.push((particle, handle));
        true
    }

    /// Resize live particles and evict expired ones, newest first. Returns
    /// the number evicted this frame.
    pub fn update(&mut self, surface: &mut S, now_ms: f64) -> usize {
        let mut evicted = 0;
        for i in (0..self.live.len()).rev() {
            if self.live[i].0.is_expired(now_ms, &self.params) {
                let (_, handle) = self.live.remove(i);
                surface.destroy(handle);
                evicted += 1;
            } else {
                let (particle, handle) = &self.live[i];
                surface.set_radius(handle, particle.size_at(now_ms, &self.params));
            }
        }
        evicted
    }

    /// One animation frame: emit, then age.
    pub fn frame(
        &mut self,
        pointer: &PointerState,
        in_hot_region: bool,
        surface: Option<&mut S>,
        now_ms: f64,
    ) {
        let Some(surface) = surface else {
            return;
        };
        self.maybe_emit(pointer, in_hot_region, Some(&mut *surface), now_ms);
        self.update(surface, now_ms);
    }

    /// Destroy every live particle. Safe to call repeatedly.
    pub fn clear(&mut self, surface: &mut S) {
        for (_, handle) in self.live.drain(..) {
            surface.destroy(handle);
        }
    }
}
