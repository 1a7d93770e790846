//! Conversion arithmetic shared by the session state and any front end.

use super::errors::DomainResult;
use super::models::ConversionTable;

/// Parses user-entered text into a quantity.
///
/// Anything that is not a finite number (empty text, words, `NaN`, `inf`)
/// reads as zero. Surrounding whitespace is ignored.
pub fn parse_quantity(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Rounds to two decimal places, half away from zero.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Formats a quantity for display.
///
/// Whole numbers keep a single trailing `.0`, other values use the shortest
/// representation that reads back to the same number.
pub fn format_quantity(value: f64) -> String {
    // Adding zero turns -0.0 into 0.0
    let value = value + 0.0;
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Converts `input_text`, expressed in a unit with `input_factor`, into the
/// unit with `output_factor` and returns the display string.
pub fn convert(input_text: &str, input_factor: f64, output_factor: f64) -> String {
    let quantity = parse_quantity(input_text);
    let base_quantity = quantity * input_factor;
    let raw_result = base_quantity / output_factor;
    format_quantity(round_to_hundredths(raw_result))
}

/// Same as [`convert`] but resolves both units by name through `table`.
pub fn convert_units(
    table: &ConversionTable,
    input_text: &str,
    input_unit: &str,
    output_unit: &str,
) -> DomainResult<String> {
    let input_factor = table.factor_of(input_unit)?;
    let output_factor = table.factor_of(output_unit)?;
    Ok(convert(input_text, input_factor, output_factor))
}
