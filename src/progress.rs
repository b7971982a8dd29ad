/// Top-of-page navigation progress, in the spirit of nprogress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteProgress {
    active: bool,
    value: f64,
}

const START_VALUE: f64 = 0.1;
const START_BUMP: f64 = 0.3;
const CEILING: f64 = 0.994;

impl RouteProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Navigation started. Restarts if one was already running.
    pub fn start(&mut self) {
        self.active = true;
        self.value = START_VALUE;
        self.inc(START_BUMP);
    }

    pub fn inc(&mut self, amount: f64) {
        if !self.active {
            return;
        }
        self.value = (self.value + amount).clamp(0.0, CEILING);
    }

    /// Small step that shrinks as the bar fills up.
    pub fn trickle(&mut self) {
        let amount = match self.value {
            v if v < 0.2 => 0.1,
            v if v < 0.5 => 0.04,
            v if v < 0.8 => 0.02,
            v if v < 0.99 => 0.005,
            _ => 0.0,
        };
        self.inc(amount);
    }

    /// Navigation completed or failed.
    pub fn done(&mut self) {
        if !self.active {
            return;
        }
        self.value = 1.0;
        self.active = false;
    }

    /// Width for the bar, as a CSS percentage.
    pub fn width(&self) -> String {
        format!("{:.1}%", self.value * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_jumps_ahead() {
        let mut p = RouteProgress::new();
        assert!(!p.is_active());
        p.start();
        assert!(p.is_active());
        assert!((p.value() - 0.4).abs() < 1e-9);
        assert_eq!(p.width(), "40.0%");
    }

    #[test]
    fn test_inc_never_reaches_full() {
        let mut p = RouteProgress::new();
        p.start();
        p.inc(5.0);
        assert_eq!(p.value(), CEILING);
        for _ in 0..100 {
            p.trickle();
        }
        assert!(p.value() < 1.0);
    }

    #[test]
    fn test_trickle_slows_down() {
        let mut p = RouteProgress::new();
        p.start();
        let before = p.value();
        p.trickle();
        let first = p.value() - before;
        p.inc(0.4);
        let before = p.value();
        p.trickle();
        assert!(p.value() - before < first);
    }

    #[test]
    fn test_done_completes_and_idles() {
        let mut p = RouteProgress::new();
        p.start();
        p.done();
        assert!(!p.is_active());
        assert_eq!(p.value(), 1.0);

        // idle bar ignores increments and a second done
        p.inc(0.2);
        p.trickle();
        p.done();
        assert_eq!(p.value(), 1.0);
    }

    #[test]
    fn test_restart_resets_value() {
        let mut p = RouteProgress::new();
        p.start();
        p.inc(0.5);
        p.start();
        assert!((p.value() - 0.4).abs() < 1e-9);
    }
}
