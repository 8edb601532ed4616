//! Builder API for ergonomic engine construction.
//!
//! This module provides fluent builders, a state enumeration macro and
//! table validation, so that configuration mistakes surface when the
//! engine is built rather than in the middle of a control cycle.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;
pub mod validate;

pub use error::{BuildError, ConfigViolation};
pub use machine::EngineBuilder;
pub use rule::RuleBuilder;

use crate::core::{Branch, Guard, State, TransitionRule};

/// Create a dwell rule that always moves to `to`.
///
/// # Example
///
/// ```
/// use signal_fsm::builder::unconditional;
/// use signal_fsm::state_enum;
///
/// state_enum! {
///     enum Light {
///         Yellow,
///         Red,
///     }
/// }
///
/// let rule = unconditional::<Light, ()>(Light::Red);
/// assert_eq!(rule.evaluate(&()), Some(Light::Red));
/// ```
pub fn unconditional<S: State, I>(to: S) -> TransitionRule<S, I> {
    TransitionRule::Unconditional(to)
}

/// Create a single-branch rule: move to `to` when `guard` holds, else hold.
///
/// # Example
///
/// ```
/// use signal_fsm::builder::guarded;
/// use signal_fsm::state_enum;
///
/// state_enum! {
///     enum Light {
///         Green,
///         Yellow,
///     }
/// }
///
/// let rule = guarded(Light::Yellow, |car_waiting: &bool| *car_waiting);
/// assert_eq!(rule.evaluate(&true), Some(Light::Yellow));
/// assert_eq!(rule.evaluate(&false), None);
/// ```
pub fn guarded<S, I, F>(to: S, guard: F) -> TransitionRule<S, I>
where
    S: State,
    F: Fn(&I) -> bool + Send + Sync + 'static,
{
    TransitionRule::Conditional(vec![Branch {
        guard: Guard::new(guard),
        target: to,
    }])
}
