//! Clock edge detection.
//!
//! Samples arrive as logical levels: `true` means the clock input is
//! asserted. The raw clock line is active-low with a pull-up, so an
//! inactive → asserted change here is a falling edge on the wire.

/// Emits at most one event per falling edge of the clock line.
///
/// # Example
///
/// ```rust
/// use signal_fsm::driver::FallingEdgeDetector;
///
/// let mut clock = FallingEdgeDetector::new();
/// let fired: Vec<bool> = [false, true, true, false, true]
///     .into_iter()
///     .map(|level| clock.sample(level))
///     .collect();
///
/// assert_eq!(fired, vec![false, true, false, false, true]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FallingEdgeDetector {
    previous: Option<bool>,
}

impl FallingEdgeDetector {
    /// Detector with no known previous level.
    ///
    /// The first sample only seeds the detector and never fires, so a
    /// clock that is already asserted at power-up does not advance the
    /// controller.
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Detector seeded with a known previous level.
    pub fn primed(level: bool) -> Self {
        Self {
            previous: Some(level),
        }
    }

    /// Feed one sample; returns `true` on a falling edge.
    pub fn sample(&mut self, level: bool) -> bool {
        let edge = self.previous == Some(false) && level;
        self.previous = Some(level);
        edge
    }

    /// Last level seen, if any.
    pub fn previous(&self) -> Option<bool> {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_edges(detector: &mut FallingEdgeDetector, samples: &[bool]) -> usize {
        samples.iter().filter(|level| detector.sample(**level)).count()
    }

    #[test]
    fn first_sample_never_fires() {
        let mut detector = FallingEdgeDetector::new();
        assert!(!detector.sample(true));
        assert_eq!(detector.previous(), Some(true));
    }

    #[test]
    fn asserted_at_power_up_needs_a_release_first() {
        let mut detector = FallingEdgeDetector::new();
        assert_eq!(count_edges(&mut detector, &[true, true, true]), 0);
        assert_eq!(count_edges(&mut detector, &[false, true]), 1);
    }

    #[test]
    fn primed_detector_fires_on_first_sample() {
        let mut detector = FallingEdgeDetector::primed(false);
        assert!(detector.sample(true));
    }

    #[test]
    fn held_levels_do_not_refire() {
        let mut detector = FallingEdgeDetector::primed(false);
        assert_eq!(count_edges(&mut detector, &[false, false, false]), 0);
        assert_eq!(count_edges(&mut detector, &[true, true, true]), 1);
    }

    #[test]
    fn release_is_not_an_edge() {
        let mut detector = FallingEdgeDetector::primed(true);
        assert!(!detector.sample(false));
    }

    #[test]
    fn each_press_fires_once() {
        let mut detector = FallingEdgeDetector::new();
        let samples = [false, true, false, true, true, false, false, true, false];
        assert_eq!(count_edges(&mut detector, &samples), 3);
    }
}
