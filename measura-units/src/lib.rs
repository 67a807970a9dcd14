//! Measura Units - Conversion registry and dispatch
//!
//! Converts a magnitude between two units of the same physical quantity.
//!
//! Categories:
//! - Weight (g, lb, p)
//! - Distance (m, ml, v)
//! - Temperature (c, f, k)
//!
//! Every quantity has one primary unit. Only primary/minor transforms are
//! declared; minor/minor conversions are routed through the primary.

mod transform;
mod catalog;
mod table;
mod registry;
mod expand;
mod dispatch;

pub use transform::{Affine, Orientation, Transform};
pub use catalog::{Unit, Quantity, QuantityInfo, UnitInfo, catalog};
pub use table::{Declaration, CONVERSIONS, declaration};
pub use registry::Registry;
pub use expand::{ConversionEntry, Rule, expand_group, expand_all};
pub use dispatch::Dispatcher;

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}
