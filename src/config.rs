//! Tunable parameters for every effect on the page.
//!
//! Earlier revisions of the site shipped as separate page copies that differed
//! only in a handful of constants (particle lifespan, growth peak, mobile
//! gating). Those live here as one set of parameter structs with defaults,
//! which can be overridden at start-up from `data-*` attributes on `#root`.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollParams {
    pub ease: f64,
    pub snap_epsilon_px: f64,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            ease: SCROLL_EASE,
            snap_epsilon_px: SCROLL_SNAP_EPSILON_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerParams {
    pub damping: f32,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            damping: POINTER_DAMPING,
        }
    }
}

/// Particle emission and lifetime.
///
/// - `min_jitter_px`: pointer jitter must exceed this for a particle to spawn
/// - `size_gain` / `max_size_px`: base radius is `min(jitter * gain, max)`
/// - `lifespan_ms`: age at which a particle is evicted
/// - `peak_fraction`: share of the lifespan spent growing to full size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub min_jitter_px: f32,
    pub size_gain: f32,
    pub max_size_px: f32,
    pub lifespan_ms: f64,
    pub peak_fraction: f64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            min_jitter_px: PARTICLE_MIN_JITTER_PX,
            size_gain: PARTICLE_SIZE_GAIN,
            max_size_px: PARTICLE_MAX_SIZE_PX,
            lifespan_ms: PARTICLE_LIFESPAN_MS,
            peak_fraction: PARTICLE_PEAK_FRACTION,
        }
    }
}

impl ParticleParams {
    /// Long, slowly fading trail.
    pub fn long_trail() -> Self {
        Self {
            lifespan_ms: 18_000.0,
            ..Self::default()
        }
    }

    /// Short-lived particles with a visible growth phase.
    pub fn quick_bloom() -> Self {
        Self {
            lifespan_ms: 3_000.0,
            peak_fraction: 0.10,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.lifespan_ms > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "particleLifespan",
                value: self.lifespan_ms,
            });
        }
        if !(self.peak_fraction > 0.0 && self.peak_fraction < 1.0) {
            return Err(ConfigError::OutOfRange {
                key: "particlePeak",
                value: self.peak_fraction,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderParams {
    pub reveal_zone_px: f64,
}

impl Default for HeaderParams {
    fn default() -> Self {
        Self {
            reveal_zone_px: HEADER_REVEAL_ZONE_PX,
        }
    }
}

/// Timing and pose of staged reveals (accordion rows, overlay panels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealParams {
    pub duration_ms: f64,
    pub close_delay_ms: f64,
    pub open_delay_ms: f64,
    pub open_rotation_deg: f64,
    pub max_height_px: f64,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            duration_ms: REVEAL_DURATION_MS,
            close_delay_ms: REVEAL_CLOSE_OVERLAP_MS,
            open_delay_ms: REVEAL_OPEN_DELAY_MS,
            open_rotation_deg: ACCORDION_OPEN_ROTATION_DEG,
            max_height_px: ACCORDION_MAX_HEIGHT_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckParams {
    pub autoplay_ms: f64,
    pub visible_behind: usize,
}

impl Default for DeckParams {
    fn default() -> Self {
        Self {
            autoplay_ms: DECK_AUTOPLAY_MS,
            visible_behind: DECK_VISIBLE_BEHIND,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorParams {
    pub outer_lag_ms: f64,
    pub inner_lag_ms: f64,
    pub size_lag_ms: f64,
    pub idle_size_px: f64,
    pub hover_size_px: f64,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            outer_lag_ms: CURSOR_OUTER_LAG_MS,
            inner_lag_ms: CURSOR_INNER_LAG_MS,
            size_lag_ms: CURSOR_SIZE_MS,
            idle_size_px: CURSOR_SIZE_IDLE_PX,
            hover_size_px: CURSOR_SIZE_HOVER_PX,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteConfig {
    pub scroll: ScrollParams,
    pub pointer: PointerParams,
    pub particles: ParticleParams,
    pub header: HeaderParams,
    pub reveal: RevealParams,
    pub deck: DeckParams,
    pub cursor: CursorParams,
    pub mobile_breakpoint_px: Option<f64>,
}

impl SiteConfig {
    /// Narrow viewports get native scrolling, a pinned header and no cursor.
    pub fn is_narrow(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint_px.unwrap_or(MOBILE_BREAKPOINT_PX)
    }

    /// Apply one `data-*` override. Returns `Ok(false)` for keys this config
    /// does not know so callers can ignore unrelated dataset entries.
    pub fn apply_override(&mut self, key: &str, raw: &str) -> Result<bool, ConfigError> {
        if key == "particlePreset" {
            self.particles = match raw.trim() {
                "default" => ParticleParams::default(),
                "long-trail" => ParticleParams::long_trail(),
                "quick-bloom" => ParticleParams::quick_bloom(),
                other => {
                    return Err(ConfigError::UnknownPreset(other.to_string()));
                }
            };
            return Ok(true);
        }
        let Some(name) = OVERRIDE_KEYS.iter().copied().find(|k| *k == key) else {
            return Ok(false);
        };
        let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
            key: key.to_string(),
            raw: raw.to_string(),
        })?;
        let in_range = value.is_finite()
            && match name {
                "scrollEase" => value > 0.0 && value <= 1.0,
                "particleLifespan" | "revealDuration" | "deckAutoplay" => value > 0.0,
                "particlePeak" => value > 0.0 && value < 1.0,
                "headerRevealZone" | "mobileBreakpoint" => value >= 0.0,
                _ => false,
            };
        if !in_range {
            return Err(ConfigError::OutOfRange { key: name, value });
        }
        // nothing is written until the value has passed its range check
        match name {
            "scrollEase" => self.scroll.ease = value,
            "particleLifespan" => self.particles.lifespan_ms = value,
            "particlePeak" => self.particles.peak_fraction = value,
            "headerRevealZone" => self.header.reveal_zone_px = value,
            "revealDuration" => self.reveal.duration_ms = value,
            "deckAutoplay" => self.deck.autoplay_ms = value,
            "mobileBreakpoint" => self.mobile_breakpoint_px = Some(value),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Dataset keys [`SiteConfig::apply_override`] understands.
pub const OVERRIDE_KEYS: [&str; 8] = [
    "particlePreset",
    "scrollEase",
    "particleLifespan",
    "particlePeak",
    "headerRevealZone",
    "revealDuration",
    "deckAutoplay",
    "mobileBreakpoint",
];

/// `particleLifespan` -> `data-particle-lifespan`.
pub fn data_attribute_name(key: &str) -> String {
    let mut name = String::from("data-");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}
