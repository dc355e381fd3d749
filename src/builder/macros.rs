//! Macros for ergonomic state machine construction.

/// Generate a [`StateId`](crate::core::StateId) implementation for a simple
/// enum.
///
/// The enum gets the derives a registry key needs (`Clone`, `Copy`,
/// `PartialEq`, `Eq`, `Hash`, `Debug`) and a `name()` that returns the
/// variant's identifier.
///
/// # Example
///
/// ```
/// use escapement::core::StateId;
/// use escapement::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
