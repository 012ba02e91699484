use crate::config::HeaderParams;
use crate::constants::HEADER_FALLBACK_HEIGHT_PX;

/// Hide-on-scroll-down header.
///
/// Visible while scrolling up or while near the top of the page; hidden
/// otherwise. Narrow viewports never hide the header.
#[derive(Clone, Debug)]
pub struct HeaderVisibility {
    params: HeaderParams,
    last_scroll_y: f64,
    visible: bool,
    pinned: bool,
}

impl HeaderVisibility {
    pub fn new(params: HeaderParams, narrow: bool) -> Self {
        Self {
            params,
            last_scroll_y: 0.0,
            visible: true,
            pinned: narrow,
        }
    }

    /// Feed one scroll offset and return the new visibility.
    pub fn observe(&mut self, scroll_y: f64) -> bool {
        if self.pinned {
            self.visible = true;
            return true;
        }
        let scrolling_up = scroll_y < self.last_scroll_y;
        self.visible = scrolling_up || scroll_y < self.params.reveal_zone_px;
        self.last_scroll_y = scroll_y;
        self.visible
    }

    /// Switch between desktop and narrow layouts (viewport resize).
    pub fn set_narrow(&mut self, narrow: bool) {
        self.pinned = narrow;
        if narrow {
            self.visible = true;
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

/// Scroll offset that brings a section's top just below the header.
#[inline]
pub fn anchor_offset(element_top: f64, page_y: f64, header_height: Option<f64>) -> f64 {
    element_top + page_y - header_height.unwrap_or(HEADER_FALLBACK_HEIGHT_PX)
}
