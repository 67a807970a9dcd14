//! Transform registry
//!
//! Owns one lazily-built `Transform` per declared (primary, minor) pair. Each
//! slot is initialized exactly once, even under concurrent first access, and
//! read without locking afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use measura_core::ConfigError;
use tracing::debug;

use crate::{Declaration, Transform, Unit, CONVERSIONS};

struct Slot {
    declaration: Declaration,
    transform: OnceLock<Result<Arc<Transform>, ConfigError>>,
}

/// Cache of transforms keyed by (primary, minor)
pub struct Registry {
    slots: HashMap<(Unit, Unit), Slot>,
}

impl Registry {
    /// Registry over the built-in conversion table
    pub fn new() -> Self {
        Self::with_declarations(CONVERSIONS)
    }

    pub fn with_declarations(declarations: impl IntoIterator<Item = Declaration>) -> Self {
        let slots = declarations
            .into_iter()
            .map(|declaration| {
                let key = (declaration.primary, declaration.minor);
                (key, Slot { declaration, transform: OnceLock::new() })
            })
            .collect();
        Registry { slots }
    }

    /// Get the transform for a pair, constructing it on first use
    pub fn transform(&self, primary: Unit, minor: Unit) -> Result<Arc<Transform>, ConfigError> {
        let slot = self.slots.get(&(primary, minor)).ok_or(ConfigError::UndeclaredPair {
            primary: primary.signature(),
            minor: minor.signature(),
        })?;

        slot.transform
            .get_or_init(|| {
                debug!(primary = %primary, minor = %minor, "materializing transform");
                slot.declaration.build().map(Arc::new)
            })
            .clone()
    }

    /// Number of declared pairs
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of pairs whose transform has been constructed
    pub fn materialized(&self) -> usize {
        self.slots.values().filter(|s| s.transform.get().is_some()).count()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;

    #[test]
    fn test_lazy_construction() {
        let registry = Registry::new();
        assert_eq!(registry.len(), 6);
        assert!(!registry.is_empty());
        assert_eq!(registry.materialized(), 0);

        registry.transform(Unit::Gram, Unit::Pound).unwrap();
        assert_eq!(registry.materialized(), 1);

        registry.transform(Unit::Gram, Unit::Pound).unwrap();
        assert_eq!(registry.materialized(), 1);
    }

    #[test]
    fn test_same_instance_reused() {
        let registry = Registry::new();
        let a = registry.transform(Unit::Celsius, Unit::Kelvin).unwrap();
        let b = registry.transform(Unit::Celsius, Unit::Kelvin).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_undeclared_pair() {
        let registry = Registry::new();
        let err = registry.transform(Unit::Pound, Unit::Gram).unwrap_err();
        assert_eq!(err, ConfigError::UndeclaredPair { primary: "lb", minor: "g" });
    }

    #[test]
    fn test_bad_factor_surfaces_on_access() {
        let bad = Declaration {
            primary: Unit::Gram,
            minor: Unit::Pound,
            factor: 0.0,
            offset: 0.0,
            orientation: Orientation::MinorToPrimary,
        };
        let registry = Registry::with_declarations([bad]);
        assert!(matches!(
            registry.transform(Unit::Gram, Unit::Pound),
            Err(ConfigError::FactorTooSmall { .. })
        ));
    }

    #[test]
    fn test_concurrent_first_access() {
        let registry = Registry::new();
        let transforms: Vec<Arc<Transform>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| registry.transform(Unit::Meter, Unit::Verst).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(registry.materialized(), 1);
        for t in &transforms[1..] {
            assert!(Arc::ptr_eq(&transforms[0], t));
        }
    }
}
