//! Per-state transition rules.
//!
//! A rule has one of two shapes:
//!
//! - **Unconditional**: exactly one target, taken on every cycle regardless
//!   of input. Used for dwell states such as a yellow phase.
//! - **Conditional**: an ordered list of guarded branches. The first branch
//!   whose guard holds wins; when none holds the rule yields `None` and the
//!   engine stays where it is.

use super::guard::Guard;
use super::state::State;
use log::trace;

/// One guarded branch of a conditional rule.
#[derive(Debug)]
pub struct Branch<S: State, I> {
    pub guard: Guard<I>,
    pub target: S,
}

impl<S: State, I> Clone for Branch<S, I> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            target: self.target,
        }
    }
}

/// Transition rule for a single state.
///
/// # Example
///
/// ```rust
/// use signal_fsm::core::{Branch, Guard, TransitionRule};
/// use signal_fsm::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// struct Sensors {
///     car: bool,
///     emergency: bool,
/// }
///
/// let rule = TransitionRule::Conditional(vec![
///     Branch { guard: Guard::new(|s: &Sensors| s.emergency), target: Light::Red },
///     Branch { guard: Guard::new(|s: &Sensors| s.car), target: Light::Green },
/// ]);
///
/// // Both guards hold: the earlier branch wins.
/// assert_eq!(rule.evaluate(&Sensors { car: true, emergency: true }), Some(Light::Red));
/// assert_eq!(rule.evaluate(&Sensors { car: true, emergency: false }), Some(Light::Green));
/// assert_eq!(rule.evaluate(&Sensors { car: false, emergency: false }), None);
///
/// let dwell: TransitionRule<Light, Sensors> = TransitionRule::Unconditional(Light::Red);
/// assert_eq!(dwell.evaluate(&Sensors { car: true, emergency: false }), Some(Light::Red));
/// ```
#[derive(Debug)]
pub enum TransitionRule<S: State, I> {
    /// Always move to the given state.
    Unconditional(S),

    /// Move to the target of the first branch whose guard holds.
    Conditional(Vec<Branch<S, I>>),
}

impl<S: State, I> Clone for TransitionRule<S, I> {
    fn clone(&self) -> Self {
        match self {
            Self::Unconditional(target) => Self::Unconditional(*target),
            Self::Conditional(branches) => Self::Conditional(branches.clone()),
        }
    }
}

impl<S: State, I> TransitionRule<S, I> {
    /// Evaluate the rule against a snapshot (pure).
    ///
    /// Branches are checked strictly in declaration order and evaluation
    /// stops at the first guard that holds.
    pub fn evaluate(&self, input: &I) -> Option<S> {
        match self {
            Self::Unconditional(target) => Some(*target),
            Self::Conditional(branches) => {
                let hit = branches.iter().find(|b| b.guard.check(input))?;
                trace!("guard '{}' selected {}", hit.guard.label(), hit.target.name());
                Some(hit.target)
            }
        }
    }

    /// Every state this rule can produce, in priority order.
    pub fn targets(&self) -> Vec<S> {
        match self {
            Self::Unconditional(target) => vec![*target],
            Self::Conditional(branches) => branches.iter().map(|b| b.target).collect(),
        }
    }

    pub fn is_unconditional(&self) -> bool {
        matches!(self, Self::Unconditional(_))
    }
}
