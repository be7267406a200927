use super::model::{SegmentPair, Window};

// ---------------------------------------------------------------------------
// Window filtering
// ---------------------------------------------------------------------------

/// Keep the pairs that fall inside `window`, preserving their order.
pub fn apply_window(pairs: Vec<SegmentPair>, window: Window) -> Vec<SegmentPair> {
    match window {
        Window::Unbounded => pairs,
        bounded => pairs.into_iter().filter(|p| bounded.contains(p)).collect(),
    }
}

/// Sum of segment durations (livetime).
pub fn total_duration(pairs: &[SegmentPair]) -> f64 {
    pairs.iter().map(SegmentPair::duration).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_rows() -> Vec<SegmentPair> {
        vec![
            SegmentPair::new(100.0, 200.0),
            SegmentPair::new(1_387_468_819.0, 1_387_612_817.0),
            SegmentPair::new(1_387_468_818.0, 1_387_612_818.0),
            SegmentPair::new(9_999_999_999.0, 9_999_999_999.0),
        ]
    }

    #[test]
    fn default_window_keeps_only_strictly_inside_rows() {
        let kept = apply_window(scenario_rows(), Window::DEC23_ANALYSIS);
        assert_eq!(kept, vec![SegmentPair::new(1_387_468_819.0, 1_387_612_817.0)]);
    }

    #[test]
    fn unbounded_is_identity() {
        assert_eq!(apply_window(scenario_rows(), Window::Unbounded), scenario_rows());
    }

    #[test]
    fn filtering_preserves_order() {
        let rows = vec![
            SegmentPair::new(5.0, 6.0),
            SegmentPair::new(0.0, 1.0),
            SegmentPair::new(2.0, 3.0),
        ];
        let kept = apply_window(rows, Window::Bounded { min: 1.0, max: 10.0 });
        assert_eq!(kept, vec![SegmentPair::new(5.0, 6.0), SegmentPair::new(2.0, 3.0)]);
    }

    #[test]
    fn livetime_sums_durations() {
        let pairs = [SegmentPair::new(0.0, 10.0), SegmentPair::new(20.0, 25.0)];
        assert_eq!(total_duration(&pairs), 15.0);
        assert_eq!(total_duration(&[]), 0.0);
    }
}
