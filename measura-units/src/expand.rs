//! Conversion expander
//!
//! Turns the N declared primary/minor transforms of a group into every
//! directional conversion the group supports: primary to minor, minor to
//! primary, and minor to minor through the primary.

use std::sync::Arc;

use measura_core::ConfigError;
use tracing::debug;

use crate::{Quantity, Registry, Transform, Unit};

/// How an entry computes its result
#[derive(Debug, Clone)]
pub enum Rule {
    /// Primary value to minor value
    ToMinor(Arc<Transform>),
    /// Minor value to primary value
    ToPrimary(Arc<Transform>),
    /// Minor to minor: `target.forward(source.backward(value))`
    Between {
        source: Arc<Transform>,
        target: Arc<Transform>,
    },
}

impl Rule {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rule::ToMinor(t) => t.forward(value),
            Rule::ToPrimary(t) => t.backward(value),
            Rule::Between { source, target } => target.forward(source.backward(value)),
        }
    }
}

/// A resolved, directional conversion
#[derive(Debug, Clone)]
pub struct ConversionEntry {
    from: Unit,
    to: Unit,
    rule: Rule,
}

impl ConversionEntry {
    pub fn from(&self) -> Unit {
        self.from
    }

    pub fn to(&self) -> Unit {
        self.to
    }

    pub fn from_signature(&self) -> &'static str {
        self.from.signature()
    }

    pub fn to_signature(&self) -> &'static str {
        self.to.signature()
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Whether this entry handles the given signature pair
    pub fn matches(&self, from: &str, to: &str) -> bool {
        self.from_signature() == from && self.to_signature() == to
    }

    pub fn convert(&self, value: f64) -> f64 {
        self.rule.apply(value)
    }
}

/// Expand one quantity group
pub fn expand_group(
    registry: &Registry,
    quantity: Quantity,
) -> Result<Vec<ConversionEntry>, ConfigError> {
    let primary = quantity.primary();
    let minors = quantity.minors();

    let transforms = minors
        .iter()
        .map(|&minor| registry.transform(primary, minor).map(|t| (minor, t)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut entries = Vec::with_capacity(minors.len() * (minors.len() + 1));

    for (minor, t) in &transforms {
        entries.push(ConversionEntry {
            from: primary,
            to: *minor,
            rule: Rule::ToMinor(Arc::clone(t)),
        });
    }

    for (minor, t) in &transforms {
        entries.push(ConversionEntry {
            from: *minor,
            to: primary,
            rule: Rule::ToPrimary(Arc::clone(t)),
        });
    }

    for (target_unit, target) in &transforms {
        for (source_unit, source) in &transforms {
            if source_unit == target_unit {
                continue;
            }
            entries.push(ConversionEntry {
                from: *source_unit,
                to: *target_unit,
                rule: Rule::Between {
                    source: Arc::clone(source),
                    target: Arc::clone(target),
                },
            });
        }
    }

    debug!(quantity = %quantity, entries = entries.len(), "expanded conversions");
    Ok(entries)
}

/// Expand several groups, concatenated in the given order
pub fn expand_all(
    registry: &Registry,
    quantities: &[Quantity],
) -> Result<Vec<ConversionEntry>, ConfigError> {
    let mut entries = Vec::new();
    for &quantity in quantities {
        entries.extend(expand_group(registry, quantity)?);
    }
    Ok(entries)
}
