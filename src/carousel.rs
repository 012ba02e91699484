use crate::config::DeckParams;
use crate::constants::*;

/// Visual pose of one testimonial card in the stacked deck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub translate_y_px: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub interactive: bool,
}

impl CardPose {
    pub fn transform_css(&self) -> String {
        format!(
            "translateY({}px) scale({}) rotate({}deg)",
            self.translate_y_px, self.scale, self.rotate_deg
        )
    }
}

/// Testimonial deck: the front card plus a couple stacked behind it,
/// advancing on a timer that pauses while hovered.
#[derive(Clone, Debug)]
pub struct Deck {
    params: DeckParams,
    len: usize,
    index: usize,
    hovered: bool,
    last_advance_ms: f64,
}

impl Deck {
    pub fn new(params: DeckParams, len: usize, now_ms: f64) -> Self {
        Self {
            params,
            len,
            index: 0,
            hovered: false,
            last_advance_ms: now_ms,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self, now_ms: f64) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.last_advance_ms = now_ms;
    }

    pub fn prev(&mut self, now_ms: f64) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.last_advance_ms = now_ms;
    }

    /// Pausing and resuming both restart the interval, so a card never
    /// flips right after the pointer leaves.
    pub fn set_hovered(&mut self, hovered: bool, now_ms: f64) {
        self.hovered = hovered;
        self.last_advance_ms = now_ms;
    }

    /// Advance if the autoplay interval elapsed. Returns whether it did.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.hovered || self.len < 2 {
            return false;
        }
        if now_ms - self.last_advance_ms >= self.params.autoplay_ms {
            self.next(now_ms);
            return true;
        }
        false
    }

    /// Position of card `i` relative to the front card.
    #[inline]
    pub fn offset_of(&self, i: usize) -> usize {
        (i + self.len - self.index) % self.len
    }

    pub fn pose(&self, i: usize) -> CardPose {
        let offset = self.offset_of(i);
        let z_index = (self.len - offset) as i32;
        if offset == 0 {
            return CardPose {
                translate_y_px: 0.0,
                scale: 1.0,
                rotate_deg: 0.0,
                opacity: 1.0,
                z_index,
                interactive: true,
            };
        }
        if offset <= self.params.visible_behind {
            return CardPose {
                translate_y_px: offset as f64 * DECK_STACK_STEP_PX,
                scale: 1.0 - offset as f64 * DECK_STACK_SCALE_STEP,
                rotate_deg: (i as f64 - self.index as f64) * DECK_ROTATION_STEP_DEG,
                opacity: 1.0,
                z_index,
                interactive: false,
            };
        }
        CardPose {
            translate_y_px: DECK_HIDDEN_OFFSET_PX,
            scale: DECK_HIDDEN_SCALE,
            rotate_deg: 0.0,
            opacity: 0.0,
            z_index,
            interactive: false,
        }
    }
}
