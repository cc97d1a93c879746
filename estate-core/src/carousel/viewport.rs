//! Viewport classification: window width to visible slide count.

use crate::config::CarouselConfig;

/// Responsive class of the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewportClass {
    #[default]
    Narrow,
    Wide,
}

impl ViewportClass {
    /// Widths at or above the configured breakpoint are `Wide`. Non-finite
    /// widths classify as `Narrow`.
    pub fn classify(width: f32, config: &CarouselConfig) -> Self {
        if width.is_finite() && width >= config.wide_breakpoint_px {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }
}

/// Number of slides shown at once. Never less than 1, so index math can
/// always divide by it.
pub fn visible_count(
    class: ViewportClass,
    slide_count: usize,
    config: &CarouselConfig,
) -> usize {
    let count = match class {
        ViewportClass::Narrow => config.narrow_visible,
        ViewportClass::Wide => config.wide_max_visible.min(slide_count),
    };
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let config = CarouselConfig::default();
        assert_eq!(
            ViewportClass::classify(1023.9, &config),
            ViewportClass::Narrow
        );
        assert_eq!(ViewportClass::classify(1024.0, &config), ViewportClass::Wide);
        assert_eq!(
            ViewportClass::classify(f32::NAN, &config),
            ViewportClass::Narrow
        );
    }

    #[test]
    fn wide_count_is_capped_by_slides_and_floored_at_one() {
        let config = CarouselConfig::default();
        assert_eq!(visible_count(ViewportClass::Wide, 8, &config), 4);
        assert_eq!(visible_count(ViewportClass::Wide, 2, &config), 2);
        assert_eq!(visible_count(ViewportClass::Wide, 0, &config), 1);
        assert_eq!(visible_count(ViewportClass::Narrow, 8, &config), 1);
        assert_eq!(visible_count(ViewportClass::Narrow, 0, &config), 1);
    }
}
