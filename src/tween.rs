//! Eased scalar tweens with owned handles.
//!
//! A [`TweenSet`] holds every running tween of one effect. Starting a tween
//! hands back a [`TweenHandle`] that is not `Clone`: whoever holds it is the
//! only one able to cancel it, and dropping the whole set on teardown leaves
//! nothing scheduled.

use fnv::FnvHashMap;

/// Easing curves matching the timing of the original page's animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1In,
    Power1Out,
    Power2InOut,
    Power3Out,
    /// Jump to the end value at the end of the tween.
    Step,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1In => t * t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Step => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            delay_ms: 0.0,
            duration_ms: duration_ms.max(1.0),
            ease,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    #[inline]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.delay_ms + self.duration_ms
    }

    #[inline]
    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms - self.delay_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        let eased = self.ease.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Restart toward `to` from wherever the tween is at `now_ms`.
    pub fn retarget(&mut self, now_ms: f64, to: f64, duration_ms: f64) {
        let from = self.sample(now_ms);
        *self = Tween::new(from, to, now_ms, duration_ms, self.ease);
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TweenHandle(u32);

impl TweenHandle {
    #[inline]
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// A running tween and the property it drives.
#[derive(Clone, Debug, PartialEq)]
pub struct Running<P> {
    pub prop: P,
    pub tween: Tween,
}

/// Sampled value for one tween on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<P> {
    pub id: u32,
    pub prop: P,
    pub value: f64,
    pub done: bool,
}

pub struct TweenSet<P> {
    next_id: u32,
    running: FnvHashMap<u32, Running<P>>,
}

impl<P> Default for TweenSet<P> {
    fn default() -> Self {
        Self {
            next_id: 0,
            running: FnvHashMap::default(),
        }
    }
}

impl<P: Clone> TweenSet<P> {
    pub fn start(&mut self, prop: P, tween: Tween) -> TweenHandle {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.running.insert(id, Running { prop, tween });
        TweenHandle(id)
    }

    /// Stop a tween where it is. Returns the value it had reached, or `None`
    /// if it had already finished and been retired.
    pub fn cancel(&mut self, handle: TweenHandle, now_ms: f64) -> Option<f64> {
        self.running.remove(&handle.0).map(|r| r.tween.sample(now_ms))
    }

    #[inline]
    pub fn is_running(&self, handle: &TweenHandle) -> bool {
        self.running.contains_key(&handle.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.running.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// Sample every running tween and retire the finished ones. The final
    /// sample of a finished tween is still reported so the last value lands.
    pub fn step(&mut self, now_ms: f64) -> Vec<Sample<P>> {
        let mut out: Vec<Sample<P>> = self
            .running
            .iter()
            .map(|(&id, r)| Sample {
                id,
                prop: r.prop.clone(),
                value: r.tween.sample(now_ms),
                done: r.tween.is_done(now_ms),
            })
            .collect();
        out.sort_by_key(|s| s.id);
        self.running.retain(|_, r| !r.tween.is_done(now_ms));
        out
    }

    pub fn clear(&mut self) {
        self.running.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_endpoints() {
        for ease in [
            Ease::Linear,
            Ease::Power1In,
            Ease::Power1Out,
            Ease::Power2InOut,
            Ease::Power3Out,
        ] {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
        assert_eq!(Ease::Step.apply(0.99), 0.0);
    }

    #[test]
    fn delay_holds_start_value() {
        let t = Tween::new(0.0, 90.0, 1000.0, 600.0, Ease::Linear).with_delay(200.0);
        assert_eq!(t.sample(1100.0), 0.0);
        assert!((t.sample(1500.0) - 45.0).abs() < 1e-9);
        assert!(t.is_done(1800.0));
    }

    #[test]
    fn step_retires_finished_tweens_after_reporting_them() {
        let mut set = TweenSet::default();
        let h = set.start("a", Tween::new(0.0, 1.0, 0.0, 100.0, Ease::Linear));
        let samples = set.step(150.0);
        assert_eq!(samples.len(), 1);
        assert!(samples[0].done);
        assert_eq!(samples[0].value, 1.0);
        assert!(!set.is_running(&h));
        assert_eq!(set.cancel(h, 200.0), None);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut t = Tween::new(0.0, 100.0, 0.0, 100.0, Ease::Linear);
        t.retarget(50.0, 0.0, 100.0);
        assert!((t.from - 50.0).abs() < 1e-9);
        assert_eq!(t.to, 0.0);
    }
}
