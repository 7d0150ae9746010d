//! Horizontal scrolling of a strip wider than its viewport.

use super::TabStrip;

/// Scroll geometry of the strip, in pixels.
///
/// The offset is kept within `[0, content - viewport]` whatever the host
/// reports, so a strip that shrinks after tabs close snaps back into range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overflow {
    viewport: f64,
    content: f64,
    offset: f64,
}

impl Overflow {
    /// Current scroll offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    /// Returns `true` if the tabs do not fit and the scroll buttons show.
    pub fn has_overflow(&self) -> bool {
        self.content > self.viewport
    }

    /// Enables the left scroll button.
    pub fn can_scroll_left(&self) -> bool {
        self.offset > 0.0
    }

    /// Enables the right scroll button.
    pub fn can_scroll_right(&self) -> bool {
        self.offset < self.max_offset()
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            0.0
        };
    }
}

impl TabStrip {
    /// Scroll geometry.
    pub fn overflow(&self) -> &Overflow {
        &self.overflow
    }

    /// Records the measured viewport and content widths.
    pub fn set_metrics(&mut self, viewport: f64, content: f64) {
        self.overflow.viewport = sanitize(viewport);
        self.overflow.content = sanitize(content);
        let offset = self.overflow.offset;
        self.overflow.set_offset(offset);
    }

    /// Left scroll button. Returns `true` if the offset moved.
    pub fn scroll_left(&mut self) -> bool {
        self.scroll_by(-self.config.scroll_step)
    }

    /// Right scroll button. Returns `true` if the offset moved.
    pub fn scroll_right(&mut self) -> bool {
        self.scroll_by(self.config.scroll_step)
    }

    /// Scrolls just enough to show the span `[start, start + width)`.
    ///
    /// A span wider than the viewport is aligned to its start, so the
    /// tab's title stays in view.
    pub fn ensure_visible(&mut self, start: f64, width: f64) {
        let Overflow {
            viewport, offset, ..
        } = self.overflow;
        let width = width.max(0.0);
        let end = start + width;
        if start < offset || width >= viewport {
            self.overflow.set_offset(start);
        } else if end > offset + viewport {
            self.overflow.set_offset(end - viewport);
        }
    }

    fn scroll_by(&mut self, delta: f64) -> bool {
        let before = self.overflow.offset;
        self.overflow.set_offset(before + delta);
        self.overflow.offset != before
    }
}

fn sanitize(px: f64) -> f64 {
    if px.is_finite() {
        px.max(0.0)
    } else {
        0.0
    }
}
