use crate::config::PointerParams;
use glam::Vec2;

/// Raw and damped pointer position.
///
/// `raw` is written by move/touch events; `smooth` and `jitter` are derived
/// once per animation frame in [`PointerState::tick`]. Jitter is the distance
/// between the two and stands in for pointer speed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub raw: Vec2,
    pub smooth: Vec2,
    pub jitter: f32,
}

impl PointerState {
    #[inline]
    pub fn set_raw(&mut self, x: f32, y: f32) {
        self.raw = Vec2::new(x, y);
    }

    pub fn tick(&mut self, params: &PointerParams) -> f32 {
        self.smooth += (self.raw - self.smooth) * params.damping;
        self.jitter = self.raw.distance(self.smooth);
        self.jitter
    }
}

/// Whether the pointer is over the hot region that emits particles.
///
/// Entering (mouse) or touching down sets it, leaving or lifting the finger
/// clears it. Starts cleared so nothing spawns before the first enter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HotRegion {
    inside: bool,
}

impl HotRegion {
    #[inline]
    pub fn enter(&mut self) {
        self.inside = true;
    }

    #[inline]
    pub fn leave(&mut self) {
        self.inside = false;
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}
