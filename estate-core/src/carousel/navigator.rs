//! Wrap-around index stepping over `[0, max_index]`.

/// Largest settled index: `N - visible`, floored at 0 when the window is at
/// least as wide as the slide set.
#[inline]
pub fn max_index(slide_count: usize, visible: usize) -> usize {
    slide_count.saturating_sub(visible)
}

#[inline]
pub fn clamp_index(index: usize, slide_count: usize, visible: usize) -> usize {
    index.min(max_index(slide_count, visible))
}

/// Step right, wrapping to 0 at the end boundary.
pub fn next_index(current: usize, slide_count: usize, visible: usize) -> usize {
    if current >= max_index(slide_count, visible) {
        0
    } else {
        current + 1
    }
}

/// Step left, wrapping to the end boundary at 0.
pub fn prev_index(current: usize, slide_count: usize, visible: usize) -> usize {
    if current == 0 {
        max_index(slide_count, visible)
    } else {
        (current - 1).min(max_index(slide_count, visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(next_index(4, 8, 4), 0);
        assert_eq!(next_index(3, 8, 4), 4);
        assert_eq!(prev_index(0, 8, 4), 4);
        assert_eq!(prev_index(4, 8, 4), 3);
    }

    #[test]
    fn single_position_is_a_no_op() {
        assert_eq!(max_index(4, 4), 0);
        assert_eq!(next_index(0, 4, 4), 0);
        assert_eq!(prev_index(0, 4, 4), 0);
        assert_eq!(max_index(2, 4), 0);
        assert_eq!(max_index(0, 1), 0);
    }

    #[test]
    fn clamp_pulls_overflowing_index_back() {
        assert_eq!(clamp_index(3, 4, 4), 0);
        assert_eq!(clamp_index(3, 8, 4), 3);
        assert_eq!(clamp_index(7, 8, 4), 4);
    }
}
