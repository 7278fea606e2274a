//! Utility functions for UI components

use repclub_common::catalog::{REP_ACTIVE_SEGMENT, REP_PROGRESS_SEGMENTS};

/// Header cart counter, e.g. `(2)`
pub fn format_cart_count(count: usize) -> String {
    format!("({})", count)
}

/// Lit/unlit state for each segment of the rep panel's progress indicator
pub fn rep_segment_states() -> Vec<bool> {
    (0..REP_PROGRESS_SEGMENTS)
        .map(|i| i == REP_ACTIVE_SEGMENT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cart_count() {
        assert_eq!(format_cart_count(0), "(0)");
        assert_eq!(format_cart_count(12), "(12)");
    }

    #[test]
    fn test_rep_segments_first_active() {
        assert_eq!(rep_segment_states(), vec![true, false, false, false]);
    }
}
