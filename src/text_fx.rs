//! Looping text effects in the hero and section titles.
//!
//! All of these are pure functions of the time elapsed since the effect was
//! mounted, so a single frame loop can drive every instance without keeping
//! per-effect timers.

use crate::constants::*;
use crate::tween::Ease;

/// Hero tagline: hold, fade out, swap to the next option, fade in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaglineCycle {
    pub count: usize,
    pub hold_ms: f64,
    pub fade_ms: f64,
}

impl TaglineCycle {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            hold_ms: TAGLINE_HOLD_MS,
            fade_ms: TAGLINE_FADE_MS,
        }
    }

    #[inline]
    fn step_ms(&self) -> f64 {
        self.hold_ms + 2.0 * self.fade_ms
    }

    /// `(option index, opacity)` at `elapsed_ms`.
    pub fn sample(&self, elapsed_ms: f64) -> (usize, f64) {
        if self.count < 2 {
            return (0, 1.0);
        }
        let elapsed = elapsed_ms.max(0.0);
        let step = (elapsed / self.step_ms()).floor() as usize;
        let within = elapsed % self.step_ms();
        let current = step % self.count;
        if within < self.hold_ms {
            (current, 1.0)
        } else if within < self.hold_ms + self.fade_ms {
            let p = (within - self.hold_ms) / self.fade_ms;
            (current, 1.0 - Ease::Power1In.apply(p))
        } else {
            let p = (within - self.hold_ms - self.fade_ms) / self.fade_ms;
            ((current + 1) % self.count, Ease::Power1Out.apply(p))
        }
    }
}

/// Replace `from` by `to` left to right: at progress `p` the first
/// `round(p * n)` characters come from `to`, the rest from `from`.
pub fn scramble_text(from: &str, to: &str, p: f64) -> String {
    let from: Vec<char> = from.chars().collect();
    let to: Vec<char> = to.chars().collect();
    let n = from.len().max(to.len());
    let cut = ((p.clamp(0.0, 1.0) * n as f64).round() as usize).min(n);
    to.iter()
        .take(cut)
        .chain(from.iter().skip(cut))
        .collect()
}

/// Word that periodically scrambles into glyphs and back.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleLoop {
    pub word: String,
    pub glyphs: &'static str,
    pub start_delay_ms: f64,
    pub morph_ms: f64,
    pub gap_ms: f64,
    pub repeat_delay_ms: f64,
}

impl ScrambleLoop {
    /// Section-title variant; `stagger` offsets the start so titles do not
    /// glitch in unison.
    pub fn title(word: &str, stagger: usize) -> Self {
        Self {
            word: word.to_string(),
            glyphs: SCRAMBLE_GLYPHS,
            start_delay_ms: 500.0 * (stagger + 1) as f64,
            morph_ms: 1000.0,
            gap_ms: 200.0,
            repeat_delay_ms: 5000.0,
        }
    }

    /// The "coded" word in the hero subheading.
    pub fn coded(word: &str) -> Self {
        Self {
            word: word.to_string(),
            glyphs: CODED_GLYPHS,
            start_delay_ms: 1000.0,
            morph_ms: 500.0,
            gap_ms: 100.0,
            repeat_delay_ms: 4000.0,
        }
    }

    #[inline]
    pub fn period_ms(&self) -> f64 {
        2.0 * self.morph_ms + self.gap_ms + self.repeat_delay_ms
    }

    pub fn sample(&self, elapsed_ms: f64) -> String {
        if elapsed_ms < self.start_delay_ms {
            return self.word.clone();
        }
        let local = (elapsed_ms - self.start_delay_ms) % self.period_ms();
        let out_end = self.morph_ms;
        let back_start = out_end + self.gap_ms;
        let back_end = back_start + self.morph_ms;
        if local < out_end {
            scramble_text(&self.word, self.glyphs, local / self.morph_ms)
        } else if local < back_start {
            self.glyphs.to_string()
        } else if local < back_end {
            scramble_text(self.glyphs, &self.word, (local - back_start) / self.morph_ms)
        } else {
            self.word.clone()
        }
    }
}

/// Colours the coded word steps through, ping-ponging every `COLOR_STEP_MS`.
pub const CODED_COLORS: [&str; 3] = ["var(--color-primary)", "var(--color-secondary)", "#4a90e2"];

pub fn coded_color(elapsed_ms: f64) -> &'static str {
    const ORDER: [usize; 4] = [0, 1, 2, 1];
    let step = (elapsed_ms.max(0.0) / COLOR_STEP_MS).floor() as usize;
    CODED_COLORS[ORDER[step % ORDER.len()]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scramble_endpoints() {
        assert_eq!(scramble_text("coded", "#?@!&", 0.0), "coded");
        assert_eq!(scramble_text("coded", "#?@!&", 1.0), "#?@!&");
        assert_eq!(scramble_text("coded", "#?@!&", 0.4), "#?ded");
    }

    #[test]
    fn scramble_handles_length_change() {
        assert_eq!(scramble_text("!#$&*?%", "About", 1.0), "About");
        assert_eq!(scramble_text("About", "!#$&*?%", 1.0), "!#$&*?%");
    }
}
