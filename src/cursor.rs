use crate::config::CursorParams;
use crate::tween::{Ease, Tween};
use glam::Vec2;

/// A point that eases toward the latest pointer position; each move event
/// restarts the tween from wherever the point currently is.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    x: Tween,
    y: Tween,
    lag_ms: f64,
}

impl Follower {
    pub fn new(lag_ms: f64) -> Self {
        Self {
            x: Tween::new(0.0, 0.0, 0.0, lag_ms, Ease::Power3Out),
            y: Tween::new(0.0, 0.0, 0.0, lag_ms, Ease::Power3Out),
            lag_ms,
        }
    }

    pub fn chase(&mut self, target: Vec2, now_ms: f64) {
        self.x.retarget(now_ms, target.x as f64, self.lag_ms);
        self.y.retarget(now_ms, target.y as f64, self.lag_ms);
    }

    pub fn position(&self, now_ms: f64) -> Vec2 {
        Vec2::new(self.x.sample(now_ms) as f32, self.y.sample(now_ms) as f32)
    }
}

/// Two-ring custom cursor: a lagging outer ring that grows over interactive
/// elements and a tighter inner dot.
#[derive(Clone, Copy, Debug)]
pub struct CursorState {
    pub outer: Follower,
    pub inner: Follower,
    size: Tween,
    params: CursorParams,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub outer: Vec2,
    pub inner: Vec2,
    pub outer_size_px: f64,
}

impl CursorState {
    pub fn new(params: CursorParams) -> Self {
        Self {
            outer: Follower::new(params.outer_lag_ms),
            inner: Follower::new(params.inner_lag_ms),
            size: Tween::new(
                params.idle_size_px,
                params.idle_size_px,
                0.0,
                params.size_lag_ms,
                Ease::Power1Out,
            ),
            params,
        }
    }

    pub fn on_move(&mut self, at: Vec2, now_ms: f64) {
        self.outer.chase(at, now_ms);
        self.inner.chase(at, now_ms);
    }

    /// Pointer entered (`true`) or left (`false`) a link, button or input.
    pub fn on_hover_interactive(&mut self, hovering: bool, now_ms: f64) {
        let target = if hovering {
            self.params.hover_size_px
        } else {
            self.params.idle_size_px
        };
        self.size.retarget(now_ms, target, self.params.size_lag_ms);
    }

    pub fn frame(&self, now_ms: f64) -> CursorFrame {
        CursorFrame {
            outer: self.outer.position(now_ms),
            inner: self.inner.position(now_ms),
            outer_size_px: self.size.sample(now_ms),
        }
    }
}
