/// Offset (px) past which a container counts as scrolled.
pub const SCROLL_THRESHOLD: f64 = 5.0;

/// Follows a container's vertical offset and reports only when
/// `offset_y > SCROLL_THRESHOLD` flips.
#[derive(Debug, Clone, Default)]
pub struct ScrollPosition {
    offset_y: f64,
    past_threshold: bool,
}

impl ScrollPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Record a new offset. Returns `Some(past)` when the derived flag changed.
    pub fn update(&mut self, offset_y: f64) -> Option<bool> {
        self.offset_y = offset_y;
        let past = offset_y > SCROLL_THRESHOLD;
        if past == self.past_threshold {
            return None;
        }
        self.past_threshold = past;
        Some(past)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports(offsets: &[f64]) -> Vec<bool> {
        let mut pos = ScrollPosition::new();
        offsets.iter().filter_map(|&y| pos.update(y)).collect()
    }

    #[test]
    fn test_no_report_without_crossing() {
        assert!(reports(&[]).is_empty());
        assert!(reports(&[0.0, 1.0, 5.0, 3.0, 0.0]).is_empty());
    }

    #[test]
    fn test_reports_each_crossing_once() {
        assert_eq!(reports(&[6.0]), vec![true]);
        assert_eq!(
            reports(&[2.0, 6.0, 40.0, 400.0, 5.0, 4.0, 0.0, 5.5]),
            vec![true, false, true]
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut pos = ScrollPosition::new();
        assert_eq!(pos.update(5.0), None);
        assert!(!pos.past_threshold());
        assert_eq!(pos.update(5.01), Some(true));
        assert!(pos.past_threshold());
        assert_eq!(pos.offset_y(), 5.01);
    }
}
