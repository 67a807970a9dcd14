//! Unit catalog: every unit and the quantity group it belongs to

use std::fmt;
use serde::Serialize;

/// A unit of measurement. Signatures are exact, case-sensitive tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    // Weight
    Gram,
    Pound,
    Pood,
    // Distance
    Meter,
    Mile,
    Verst,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    /// All units in declaration order
    pub const ALL: [Unit; 9] = [
        Unit::Gram,
        Unit::Pound,
        Unit::Pood,
        Unit::Meter,
        Unit::Mile,
        Unit::Verst,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
    ];

    pub const fn signature(self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Pound => "lb",
            Unit::Pood => "p",
            Unit::Meter => "m",
            Unit::Mile => "ml",
            Unit::Verst => "v",
            Unit::Celsius => "c",
            Unit::Fahrenheit => "f",
            Unit::Kelvin => "k",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Unit::Gram => "gram",
            Unit::Pound => "pound",
            Unit::Pood => "pood",
            Unit::Meter => "meter",
            Unit::Mile => "mile",
            Unit::Verst => "verst",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
        }
    }

    pub const fn quantity(self) -> Quantity {
        match self {
            Unit::Gram | Unit::Pound | Unit::Pood => Quantity::Weight,
            Unit::Meter | Unit::Mile | Unit::Verst => Quantity::Distance,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Quantity::Temperature,
        }
    }

    pub fn is_primary(self) -> bool {
        self.quantity().primary() == self
    }

    /// Look up a unit by its exact signature
    pub fn from_signature(signature: &str) -> Option<Unit> {
        Self::ALL.into_iter().find(|u| u.signature() == signature)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature())
    }
}

/// A physical quantity grouping one primary unit with its minors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Weight,
    Distance,
    Temperature,
}

impl Quantity {
    /// All quantities in declaration order
    pub const ALL: [Quantity; 3] = [Quantity::Weight, Quantity::Distance, Quantity::Temperature];

    pub const fn name(self) -> &'static str {
        match self {
            Quantity::Weight => "weight",
            Quantity::Distance => "distance",
            Quantity::Temperature => "temperature",
        }
    }

    pub const fn primary(self) -> Unit {
        match self {
            Quantity::Weight => Unit::Gram,
            Quantity::Distance => Unit::Meter,
            Quantity::Temperature => Unit::Celsius,
        }
    }

    pub const fn minors(self) -> &'static [Unit] {
        match self {
            Quantity::Weight => &[Unit::Pound, Unit::Pood],
            Quantity::Distance => &[Unit::Mile, Unit::Verst],
            Quantity::Temperature => &[Unit::Fahrenheit, Unit::Kelvin],
        }
    }

    /// Primary first, then minors
    pub fn units(self) -> impl Iterator<Item = Unit> {
        std::iter::once(self.primary()).chain(self.minors().iter().copied())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Serializable description of one unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitInfo {
    pub signature: &'static str,
    pub name: &'static str,
}

impl From<Unit> for UnitInfo {
    fn from(unit: Unit) -> Self {
        UnitInfo {
            signature: unit.signature(),
            name: unit.name(),
        }
    }
}

/// Serializable description of one quantity group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityInfo {
    pub quantity: Quantity,
    pub primary: UnitInfo,
    pub minors: Vec<UnitInfo>,
}

/// Describe the whole catalog, in declaration order
pub fn catalog() -> Vec<QuantityInfo> {
    Quantity::ALL
        .into_iter()
        .map(|q| QuantityInfo {
            quantity: q,
            primary: q.primary().into(),
            minors: q.minors().iter().map(|&u| u.into()).collect(),
        })
        .collect()
}
