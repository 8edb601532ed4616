//! Macros for ergonomic state enumeration.

/// Generate a state enum and its `State` trait implementation.
///
/// The generated enum derives everything `State` requires, and `all()`
/// lists the variants in declaration order.
///
/// # Example
///
/// ```
/// use signal_fsm::core::State;
/// use signal_fsm::state_enum;
///
/// state_enum! {
///     pub enum Crossing {
///         Vehicles,
///         Clearing,
///         Pedestrians,
///     }
/// }
///
/// assert_eq!(Crossing::all().len(), 3);
/// assert_eq!(Crossing::Clearing.name(), "Clearing");
/// assert_eq!(Crossing::from_name("Pedestrians"), Some(Crossing::Pedestrians));
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
