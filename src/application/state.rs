//! Converter session state.
//!
//! Holds the raw input text, the two selected units and the derived output
//! string, and keeps the output in step with every change.

use crate::domain::{convert, ConversionTable, DomainResult, UnitEntry};
use serde::Serialize;
use tracing::{debug, warn};

/// Input events a front end forwards to the converter.
#[derive(Debug, Clone, PartialEq)]
pub enum ConverterEvent {
    /// The value text was edited
    TextChanged(String),
    /// A unit was picked in the "from" selector
    InputUnitSelected(String),
    /// A unit was picked in the "to" selector
    OutputUnitSelected(String),
}

/// Snapshot of everything a front end needs to draw the converter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterView {
    pub input_text: String,
    pub input_unit: String,
    pub output_unit: String,
    pub output_value: String,
    pub units: Vec<String>,
}

/// State of one converter session.
///
/// Every mutating method recomputes `output_value` before returning, so the
/// output always matches the current text and units.
///
/// # Examples
///
/// ```
/// use unit_converter::application::ConverterState;
///
/// let mut state = ConverterState::default();
/// state.set_input_unit("Centimeters").unwrap();
/// state.set_input_text("100");
/// assert_eq!(state.output_value(), "1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ConverterState {
    table: ConversionTable,
    input_text: String,
    input_unit: UnitEntry,
    output_unit: UnitEntry,
    output_value: String,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::with_table(ConversionTable::default())
    }
}

impl ConverterState {
    /// Starts a session over a custom table, with both selectors on the
    /// table's initial unit.
    pub fn with_table(table: ConversionTable) -> Self {
        let initial = table.initial_unit().clone();
        Self {
            table,
            input_text: String::new(),
            input_unit: initial.clone(),
            output_unit: initial,
            output_value: String::new(),
        }
    }

    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    pub fn units(&self) -> &[UnitEntry] {
        self.table.list_units()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn input_unit(&self) -> &UnitEntry {
        &self.input_unit
    }

    pub fn output_unit(&self) -> &UnitEntry {
        &self.output_unit
    }

    pub fn output_value(&self) -> &str {
        &self.output_value
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.recompute();
    }

    /// Selects the unit the input text is expressed in.
    ///
    /// An unknown name leaves the state untouched.
    pub fn set_input_unit(&mut self, name: &str) -> DomainResult<()> {
        self.input_unit = self.resolve(name)?;
        self.recompute();
        Ok(())
    }

    /// Selects the unit the result is expressed in.
    ///
    /// An unknown name leaves the state untouched.
    pub fn set_output_unit(&mut self, name: &str) -> DomainResult<()> {
        self.output_unit = self.resolve(name)?;
        self.recompute();
        Ok(())
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.input_unit, &mut self.output_unit);
        self.recompute();
    }

    pub fn apply(&mut self, event: ConverterEvent) -> DomainResult<()> {
        match event {
            ConverterEvent::TextChanged(text) => {
                self.set_input_text(text);
                Ok(())
            }
            ConverterEvent::InputUnitSelected(name) => self.set_input_unit(&name),
            ConverterEvent::OutputUnitSelected(name) => self.set_output_unit(&name),
        }
    }

    pub fn view(&self) -> ConverterView {
        ConverterView {
            input_text: self.input_text.clone(),
            input_unit: self.input_unit.name.clone(),
            output_unit: self.output_unit.name.clone(),
            output_value: self.output_value.clone(),
            units: self.table.unit_names(),
        }
    }

    fn resolve(&self, name: &str) -> DomainResult<UnitEntry> {
        self.table.entry(name).cloned().inspect_err(|err| {
            warn!(unit = name, error = %err, "rejected unit selection");
        })
    }

    fn recompute(&mut self) {
        self.output_value = convert(
            &self.input_text,
            self.input_unit.factor,
            self.output_unit.factor,
        );
        debug!(
            input = %self.input_text,
            from = %self.input_unit.name,
            to = %self.output_unit.name,
            output = %self.output_value,
            "recomputed conversion"
        );
    }
}
