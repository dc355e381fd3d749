//! Core identifier trait for machine states.
//!
//! Every state a machine knows is registered under an identifier implementing
//! this trait. Identifiers are plain values; the behavior attached to a state
//! lives in its hooks, not in the identifier itself.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// Identifiers are the keys of the machine's registry and the values returned
/// by current-state queries. A simple field-less enum is the usual choice;
/// the [`state_enum!`](crate::state_enum) macro derives everything below for
/// one.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into the registry and the current-state
///   slot
/// - `Eq` + `Hash`: identifiers are registry keys
/// - `Debug`: identifiers appear in diagnostics
/// - `Send` + `Sync`: machines holding identifiers can cross thread
///   boundaries
///
/// # Example
///
/// ```rust
/// use escapement::core::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl StateId for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// ```
pub trait StateId: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the identifier's name for display and error messages.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}
