//! State trait for workflow statuses.
//!
//! Statuses are plain values; the trait only exposes pure inspection
//! methods used for display and terminal-state checks.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for workflow statuses.
///
/// # Required Traits
///
/// - `Copy` + `Eq`: statuses are compared in transition lookups
/// - `Debug`: statuses appear in error diagnostics
/// - `Serialize` + `Deserialize`: hosts persist the current status
///
/// # Example
///
/// ```rust
/// use wishlist::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum TicketState {
///     Open,
///     Closed,
/// }
///
/// impl State for TicketState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert!(TicketState::Closed.is_final());
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a terminal state.
    ///
    /// No transition leaves a terminal state. Default implementation
    /// returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
