//! Guard predicates over input snapshots.
//!
//! Guards are pure boolean functions of the sensor snapshot taken for a
//! control cycle. A conditional transition rule is an ordered list of
//! guards, each paired with the state it leads to.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over an input snapshot.
///
/// Guards are cheap to clone: the predicate is shared, so the same guard
/// can appear in several rules.
///
/// # Example
///
/// ```rust
/// use signal_fsm::core::Guard;
///
/// struct Sensors {
///     waiting: bool,
/// }
///
/// let car_waiting = Guard::named("waiting", |s: &Sensors| s.waiting);
///
/// assert!(car_waiting.check(&Sensors { waiting: true }));
/// assert!(!car_waiting.check(&Sensors { waiting: false }));
/// assert_eq!(car_waiting.label(), "waiting");
/// ```
pub struct Guard<I> {
    label: &'static str,
    predicate: Arc<dyn Fn(&I) -> bool + Send + Sync>,
}

impl<I> Guard<I> {
    /// Create an unlabelled guard from a pure predicate.
    ///
    /// The predicate must be deterministic and free of side effects: the
    /// engine may evaluate it any number of times for the same snapshot.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        Self::named("guard", predicate)
    }

    /// Create a guard with a label used in log output.
    pub fn named<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        Guard {
            label,
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against a snapshot.
    pub fn check(&self, input: &I) -> bool {
        (self.predicate)(input)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<I> Clone for Guard<I> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<I> fmt::Debug for Guard<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inputs {
        left: bool,
        right: bool,
    }

    #[test]
    fn guard_reads_snapshot_fields() {
        let guard = Guard::new(|i: &Inputs| i.left);

        assert!(guard.check(&Inputs {
            left: true,
            right: false
        }));
        assert!(!guard.check(&Inputs {
            left: false,
            right: true
        }));
    }

    #[test]
    fn guard_can_combine_fields() {
        let guard = Guard::new(|i: &Inputs| i.left || i.right);

        assert!(guard.check(&Inputs {
            left: false,
            right: true
        }));
        assert!(!guard.check(&Inputs {
            left: false,
            right: false
        }));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|i: &Inputs| i.left && !i.right);
        let inputs = Inputs {
            left: true,
            right: false,
        };

        assert_eq!(guard.check(&inputs), guard.check(&inputs));
    }

    #[test]
    fn unnamed_guard_has_default_label() {
        let guard = Guard::new(|_: &Inputs| true);
        assert_eq!(guard.label(), "guard");
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::named("right", |i: &Inputs| i.right);
        let cloned = guard.clone();
        let inputs = Inputs {
            left: false,
            right: true,
        };

        assert_eq!(cloned.label(), "right");
        assert_eq!(guard.check(&inputs), cloned.check(&inputs));
    }
}
