//! Measura Core - Fundamental types
//!
//! This crate provides the types shared by every Measura crate:
//! - `ConfigError`: declaration faults detected while building conversions
//! - `MeasuraError`: structured errors surfaced to clients
//! - `EPSILON`: smallest accepted magnitude for an affine factor

mod error;

pub use error::{ConfigError, MeasuraError, codes};

/// Affine factors with a magnitude below this are rejected at construction
pub const EPSILON: f64 = 1e-10;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConfigError, MeasuraError, EPSILON};
    pub use crate::error::codes;
}
