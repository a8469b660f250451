//! Scroll-driven navbar styling state.

/// Default offset (px) past which the page counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// `true` once the page is scrolled strictly past `threshold`.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_exclusive() {
        assert!(!is_scrolled(0.0, SCROLL_THRESHOLD_PX));
        assert!(!is_scrolled(20.0, SCROLL_THRESHOLD_PX));
        assert!(is_scrolled(21.0, SCROLL_THRESHOLD_PX));
        assert!(is_scrolled(20.5, SCROLL_THRESHOLD_PX));
    }

    #[test]
    fn no_hysteresis() {
        let offsets = [0.0, 40.0, 19.0, 21.0, 20.0];
        let states: Vec<bool> = offsets
            .iter()
            .map(|o| is_scrolled(*o, SCROLL_THRESHOLD_PX))
            .collect();
        assert_eq!(states, vec![false, true, false, true, false]);
    }
}
