//! Output vectors: the lamp configuration for one state.
//!
//! Output records are named-field structs. The positional order only
//! matters at the actuator boundary, where `bits()` fixes it once.

use std::fmt::Debug;

/// A fixed-width set of lamp states.
///
/// `bits()` must always return exactly `WIDTH` values, and position `i`
/// must always refer to the same physical lamp.
///
/// # Example
///
/// ```rust
/// use signal_fsm::core::OutputVector;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Pedestrian {
///     walk: bool,
///     dont_walk: bool,
/// }
///
/// impl OutputVector for Pedestrian {
///     const WIDTH: usize = 2;
///
///     fn bits(&self) -> Vec<bool> {
///         vec![self.walk, self.dont_walk]
///     }
/// }
///
/// let lamps = Pedestrian { walk: false, dont_walk: true };
/// assert_eq!(lamps.bits(), vec![false, true]);
/// assert_eq!(lamps.lit_count(), 1);
/// ```
pub trait OutputVector: Clone + Debug + PartialEq + Send + Sync {
    /// Number of physical lamps.
    const WIDTH: usize;

    /// Lamp states in actuator index order.
    fn bits(&self) -> Vec<bool>;

    fn lit_count(&self) -> usize {
        self.bits().into_iter().filter(|on| *on).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Pair {
        first: bool,
        second: bool,
    }

    impl OutputVector for Pair {
        const WIDTH: usize = 2;

        fn bits(&self) -> Vec<bool> {
            vec![self.first, self.second]
        }
    }

    #[test]
    fn bits_follow_field_order() {
        let pair = Pair {
            first: true,
            second: false,
        };
        assert_eq!(pair.bits(), vec![true, false]);
        assert_eq!(pair.bits().len(), Pair::WIDTH);
    }

    #[test]
    fn lit_count_counts_lamps_on() {
        let dark = Pair {
            first: false,
            second: false,
        };
        let both = Pair {
            first: true,
            second: true,
        };
        assert_eq!(dark.lit_count(), 0);
        assert_eq!(both.lit_count(), 2);
    }
}
