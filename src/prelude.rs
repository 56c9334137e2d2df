//! Prelude module for iso_week_anchor crate.
//!
//! Re-exports the derive_more macros used across the crate.

pub use derive_more::Display;
