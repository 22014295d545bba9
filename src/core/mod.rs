//! Core state and tunables.

pub mod constants;
pub mod profile;

pub use profile::{EconomyError, Profile};
