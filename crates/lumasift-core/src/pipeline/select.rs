//! Threshold selection.

use crate::config::SelectionConfig;

/// Base decision is `brightness >= threshold`; `invert` negates it.
pub fn select(brightness: f64, threshold: f64, invert: bool) -> bool {
    (brightness >= threshold) != invert
}

/// Applies a fixed threshold and invert flag.
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    threshold: f64,
    invert: bool,
}

impl Selector {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            threshold: config.threshold,
            invert: config.invert,
        }
    }

    pub fn is_selected(&self, brightness: f64) -> bool {
        select(brightness, self.threshold, self.invert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        assert!(select(100.0, 100.0, false));
        assert!(!select(100.0, 100.0, true));
    }

    #[test]
    fn test_above_and_below() {
        assert!(select(200.0, 100.0, false));
        assert!(!select(50.0, 100.0, false));
        assert!(!select(200.0, 100.0, true));
        assert!(select(50.0, 100.0, true));
    }

    #[test]
    fn test_out_of_range_thresholds() {
        // Below range: everything passes; above range: nothing does
        assert!(select(0.0, -1.0, false));
        assert!(!select(255.0, 256.0, false));
        assert!(select(255.0, 256.0, true));
    }

    #[test]
    fn test_selector_uses_config() {
        let selector = Selector::new(&SelectionConfig {
            threshold: 80.0,
            invert: true,
        });
        assert!(selector.is_selected(79.9));
        assert!(!selector.is_selected(80.0));
    }
}
