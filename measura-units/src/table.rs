//! Declared primary/minor conversions
//!
//! Only primary/minor pairs are declared. Everything else is derived by the
//! expander.

use measura_core::ConfigError;
use crate::{Orientation, Transform, Unit};

/// Affine parameters for one (primary, minor) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declaration {
    pub primary: Unit,
    pub minor: Unit,
    pub factor: f64,
    pub offset: f64,
    pub orientation: Orientation,
}

impl Declaration {
    /// Proportional pair: `factor` primary units make one minor unit
    pub const fn scale(primary: Unit, minor: Unit, factor: f64) -> Self {
        Declaration {
            primary,
            minor,
            factor,
            offset: 0.0,
            orientation: Orientation::MinorToPrimary,
        }
    }

    /// Pair whose natural formula computes the minor value from the primary one
    pub const fn from_primary(primary: Unit, minor: Unit, factor: f64, offset: f64) -> Self {
        Declaration {
            primary,
            minor,
            factor,
            offset,
            orientation: Orientation::PrimaryToMinor,
        }
    }

    pub fn build(&self) -> Result<Transform, ConfigError> {
        Transform::new(self.factor, self.offset, self.orientation)
    }
}

/// The fixed conversion table
pub static CONVERSIONS: [Declaration; 6] = [
    // Weight
    Declaration::scale(Unit::Gram, Unit::Pound, 453.592),
    Declaration::scale(Unit::Gram, Unit::Pood, 16_380.7),
    // Distance
    Declaration::scale(Unit::Meter, Unit::Mile, 1_609.34),
    Declaration::scale(Unit::Meter, Unit::Verst, 1_066.8),
    // Temperature
    Declaration::from_primary(Unit::Celsius, Unit::Fahrenheit, 9.0 / 5.0, 32.0),
    Declaration::from_primary(Unit::Celsius, Unit::Kelvin, 1.0, 273.15),
];

/// Find the declaration for a (primary, minor) pair
pub fn declaration(primary: Unit, minor: Unit) -> Option<&'static Declaration> {
    CONVERSIONS
        .iter()
        .find(|d| d.primary == primary && d.minor == minor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    #[test]
    fn test_every_minor_declared() {
        for q in Quantity::ALL {
            for &minor in q.minors() {
                assert!(
                    declaration(q.primary(), minor).is_some(),
                    "missing {} -> {}",
                    q.primary(),
                    minor
                );
            }
        }
        let minors: usize = Quantity::ALL.iter().map(|q| q.minors().len()).sum();
        assert_eq!(CONVERSIONS.len(), minors);
    }

    #[test]
    fn test_declarations_stay_in_group() {
        for d in &CONVERSIONS {
            assert!(d.primary.is_primary());
            assert_eq!(d.primary.quantity(), d.minor.quantity());
        }
    }

    #[test]
    fn test_declarations_build() {
        for d in &CONVERSIONS {
            assert!(d.build().is_ok(), "{} -> {}", d.primary, d.minor);
        }
    }

    #[test]
    fn test_temperature_pairs_point_from_primary() {
        let f = declaration(Unit::Celsius, Unit::Fahrenheit).unwrap();
        assert_eq!(f.orientation, Orientation::PrimaryToMinor);
        assert_eq!(f.factor, 1.8);

        let k = declaration(Unit::Celsius, Unit::Kelvin).unwrap();
        assert_eq!(k.orientation, Orientation::PrimaryToMinor);

        let lb = declaration(Unit::Gram, Unit::Pound).unwrap();
        assert_eq!(lb.orientation, Orientation::MinorToPrimary);
    }

    #[test]
    fn test_undeclared_pair() {
        assert!(declaration(Unit::Pound, Unit::Gram).is_none());
        assert!(declaration(Unit::Gram, Unit::Mile).is_none());
    }
}
