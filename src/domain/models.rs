use std::collections::HashSet;

use super::errors::{DomainError, DomainResult};

/// Name of the base unit every factor is expressed against.
pub const BASE_UNIT: &str = "Meters";

/// A selectable unit and its scale factor relative to meters.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitEntry {
    pub name: String,
    pub factor: f64,
}

impl UnitEntry {
    pub fn new(name: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            factor,
        }
    }
}

/// Ordered list of units offered by the selectors.
///
/// The order is display order only. Lookups are by exact name. A table
/// always holds at least one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    entries: Vec<UnitEntry>,
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self {
            entries: vec![
                UnitEntry::new("Centimeters", 0.01),
                UnitEntry::new(BASE_UNIT, 1.0),
                UnitEntry::new("Feet", 0.3048),
                UnitEntry::new("Millimeters", 0.001),
            ],
        }
    }
}

impl ConversionTable {
    /// Builds a table from arbitrary entries, checking that every name is
    /// present and unique and every factor is positive and finite.
    pub fn from_entries(entries: Vec<UnitEntry>) -> DomainResult<Self> {
        if entries.is_empty() {
            return Err(DomainError::EmptyTable);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(DomainError::EmptyUnitName);
            }
            if !entry.factor.is_finite() || entry.factor <= 0.0 {
                return Err(DomainError::InvalidFactor {
                    unit: entry.name.clone(),
                    factor: entry.factor,
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(DomainError::DuplicateUnit(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn list_units(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn unit_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&UnitEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn entry(&self, name: &str) -> DomainResult<&UnitEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| DomainError::UnknownUnit(name.to_string()))
    }

    pub fn factor_of(&self, name: &str) -> DomainResult<f64> {
        self.entry(name).map(|e| e.factor)
    }

    /// Unit both selectors start on: the base unit when the table has it,
    /// otherwise the first entry.
    pub fn initial_unit(&self) -> &UnitEntry {
        match self.entry(BASE_UNIT) {
            Ok(entry) => entry,
            // Both constructors reject empty tables
            Err(_) => &self.entries[0],
        }
    }
}
