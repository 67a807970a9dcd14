//! Dispatcher: resolves (from, to) signature pairs to conversions
//!
//! Entries are built once, eagerly, when the dispatcher is constructed and
//! are read-only afterwards, so a `Dispatcher` can be shared across threads.

use measura_core::ConfigError;
use tracing::{info, trace};

use crate::{expand_all, ConversionEntry, Quantity, Registry, Unit};

pub struct Dispatcher {
    registry: Registry,
    entries: Vec<ConversionEntry>,
}

impl Dispatcher {
    /// Build every conversion entry from the given registry
    pub fn new(registry: Registry) -> Result<Self, ConfigError> {
        let entries = expand_all(&registry, &Quantity::ALL)?;
        info!(
            entries = entries.len(),
            transforms = registry.materialized(),
            "conversion dispatcher ready"
        );
        Ok(Dispatcher { registry, entries })
    }

    /// Dispatcher over the built-in catalog and conversion table
    pub fn with_catalog() -> Result<Self, ConfigError> {
        Self::new(Registry::new())
    }

    /// Convert `value` from one unit signature to another.
    ///
    /// Returns `None` when no conversion exists: unknown signatures or units
    /// from different quantities.
    pub fn process(&self, from: &str, to: &str, value: f64) -> Option<f64> {
        if from == to {
            return Unit::from_signature(from).map(|_| value);
        }

        match self.find(from, to) {
            Some(entry) => {
                let result = entry.convert(value);
                trace!(from, to, value, result, "converted");
                Some(result)
            }
            None => {
                trace!(from, to, "no conversion");
                None
            }
        }
    }

    /// First entry matching the signature pair
    pub fn find(&self, from: &str, to: &str) -> Option<&ConversionEntry> {
        self.entries.iter().find(|e| e.matches(from, to))
    }

    pub fn supports(&self, from: &str, to: &str) -> bool {
        if from == to {
            return Unit::from_signature(from).is_some();
        }
        self.find(from, to).is_some()
    }

    pub fn entries(&self) -> &[ConversionEntry] {
        &self.entries
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
