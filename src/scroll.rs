//! Lerp scroll driver.
//!
//! The page keeps its native scrollbar, but the visible content is a
//! translated wrapper whose offset chases `window.scrollY` with a per-frame
//! easing factor. This module holds only the numeric state; the frame loop
//! and DOM writes live in `web::smooth_scroll`.

use crate::config::ScrollParams;

#[derive(Clone, Debug)]
pub struct ScrollState {
    pub target: f64,
    pub current: f64,
    params: ScrollParams,
}

impl ScrollState {
    pub fn new(params: ScrollParams) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            params,
        }
    }

    /// Start both values at `offset` so the first frame does not animate in
    /// from the top of the page.
    pub fn snap_to(&mut self, offset: f64) {
        self.target = offset;
        self.current = offset;
    }

    #[inline]
    pub fn set_target(&mut self, offset: f64) {
        self.target = offset;
    }

    /// Advance one frame and return the offset to render.
    pub fn tick(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.params.ease;
        if (self.target - self.current).abs() < self.params.snap_epsilon_px {
            self.current = self.target;
        }
        self.current
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// CSS transform for the content wrapper at the current offset.
    pub fn transform_css(&self) -> String {
        format!("translate3d(0, {:.3}px, 0)", -self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_moves_by_ease_fraction() {
        let mut s = ScrollState::new(ScrollParams::default());
        s.set_target(1000.0);
        let c = s.tick();
        assert!((c - 80.0).abs() < 1e-9);
    }

    #[test]
    fn transform_negates_offset() {
        let mut s = ScrollState::new(ScrollParams::default());
        s.snap_to(12.5);
        assert_eq!(s.transform_css(), "translate3d(0, -12.500px, 0)");
    }
}
