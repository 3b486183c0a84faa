#![forbid(unsafe_code)]

//! Scroll-driven cosmetics: reading progress, back-to-top, hero parallax.

/// Offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Hero translation per unit of scroll.
pub const PARALLAX_RATE: f64 = -0.5;

/// Scroll geometry sampled by the host on every scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset (`window.pageYOffset`).
    pub offset: f64,
    /// Full document height (`documentElement.scrollHeight`).
    pub scroll_height: f64,
    /// Viewport height (`window.innerHeight`).
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Create metrics from raw host values.
    #[must_use]
    pub const fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            scroll_height,
            viewport_height,
        }
    }

    /// Distance the document can scroll.
    #[must_use]
    pub fn scrollable(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }

    /// Fraction of the document scrolled past.
    ///
    /// A page shorter than its viewport cannot scroll and reports `0.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let scrollable = self.scrollable();
        if scrollable > 0.0 && self.offset.is_finite() {
            self.offset / scrollable
        } else {
            0.0
        }
    }
}

/// Tunables for [`ScrollEffects`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Offset past which back-to-top becomes visible (strictly greater).
    pub back_to_top_threshold: f64,
    /// Multiplier applied to the offset for the hero translation.
    pub parallax_rate: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            parallax_rate: PARALLAX_RATE,
        }
    }
}

/// Visual state derived from one scroll sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    /// Horizontal scale of the progress bar.
    pub progress: f64,
    /// Whether the back-to-top button is visible.
    pub back_to_top_visible: bool,
    /// Hero `translateY` in pixels.
    pub hero_offset: f64,
}

/// Derives [`ScrollFrame`]s and remembers the last one so unchanged visual
/// state is not re-applied.
#[derive(Debug, Clone, Default)]
pub struct ScrollEffects {
    config: ScrollConfig,
    last: Option<ScrollFrame>,
}

impl ScrollEffects {
    /// Create with the given tunables.
    #[must_use]
    pub const fn new(config: ScrollConfig) -> Self {
        Self { config, last: None }
    }

    /// Compute the frame for `metrics` without recording it.
    #[must_use]
    pub fn frame(&self, metrics: &ScrollMetrics) -> ScrollFrame {
        ScrollFrame {
            progress: metrics.progress(),
            back_to_top_visible: metrics.offset > self.config.back_to_top_threshold,
            hero_offset: metrics.offset * self.config.parallax_rate,
        }
    }

    /// Compute and record the frame for `metrics`.
    ///
    /// Also returns the previous frame so callers can skip unchanged fields.
    pub fn update(&mut self, metrics: &ScrollMetrics) -> (ScrollFrame, Option<ScrollFrame>) {
        let next = self.frame(metrics);
        let prev = self.last.replace(next);
        (next, prev)
    }

    /// Last recorded frame.
    #[must_use]
    pub const fn last(&self) -> Option<ScrollFrame> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_offset_over_scrollable() {
        let m = ScrollMetrics::new(250.0, 1_200.0, 700.0);
        assert_eq!(m.progress(), 0.5);
    }

    #[test]
    fn unscrollable_page_has_zero_progress() {
        assert_eq!(ScrollMetrics::new(0.0, 500.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(0.0, 800.0, 800.0).progress(), 0.0);
    }

    #[test]
    fn back_to_top_is_strictly_past_threshold() {
        let fx = ScrollEffects::default();
        assert!(!fx.frame(&ScrollMetrics::new(300.0, 2_000.0, 800.0)).back_to_top_visible);
        assert!(fx.frame(&ScrollMetrics::new(300.5, 2_000.0, 800.0)).back_to_top_visible);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        let fx = ScrollEffects::default();
        let frame = fx.frame(&ScrollMetrics::new(120.0, 2_000.0, 800.0));
        assert_eq!(frame.hero_offset, -60.0);
    }

    #[test]
    fn update_returns_previous_frame() {
        let mut fx = ScrollEffects::default();
        let (first, prev) = fx.update(&ScrollMetrics::new(10.0, 1_000.0, 500.0));
        assert!(prev.is_none());
        let (_, prev) = fx.update(&ScrollMetrics::new(400.0, 1_000.0, 500.0));
        assert_eq!(prev, Some(first));
    }
}
