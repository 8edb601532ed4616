//! Core State trait for controller states.
//!
//! Every controller state must implement this trait, which provides
//! pure methods for naming a state and enumerating the full state set.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for controller states.
///
/// States are closed, finite enumerations. Because the set of states is
/// known up front, configuration tables can be checked for totality before
/// the engine ever runs.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: states are used as table keys
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in reports and configuration files
///
/// # Example
///
/// ```rust
/// use signal_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Red,
///     Yellow,
///     Green,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Yellow => "Yellow",
///             Self::Green => "Green",
///         }
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Red, Self::Yellow, Self::Green]
///     }
/// }
///
/// assert_eq!(Lamp::all().len(), 3);
/// assert_eq!(Lamp::Yellow.name(), "Yellow");
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Every state in the enumeration, in declaration order.
    fn all() -> &'static [Self];

    /// Look a state up by its name.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.name() == name)
    }
}
