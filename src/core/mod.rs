//! Core vocabulary shared by the engine and the builders.
//!
//! This module contains the building blocks a machine is declared from:
//! - State identifiers via the `StateId` trait
//! - Guard predicates for transition control
//! - Lifecycle hook bundles for enter/update/leave callbacks
//!
//! Nothing in this module drives a machine; the stepping protocol lives in
//! [`crate::engine`].

mod guard;
mod hook;
mod id;

pub use guard::Guard;
pub use hook::{Hook, StateHooks};
pub use id::StateId;
