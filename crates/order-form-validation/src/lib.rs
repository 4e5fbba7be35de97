//! Order Form Validation Core
//!
//! Pure Rust rule primitives compatible with both std and no_std environments.
//! The order form schema composes these into its per-field rules.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod collection;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use string::*;
