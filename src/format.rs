//!
//! Display formatting of cell values.
//!
//! Missing or odd data never fails, it is shown with the
//! [UNKNOWN] placeholder.
//!
use crate::model::{ColumnDef, ColumnType};
use crate::value::CellValue;

/// Checkbox true.
pub const CHECKED: &str = "✅";
/// Checkbox false.
pub const UNCHECKED: &str = "❌";
/// Placeholder for anything that can't be shown.
pub const UNKNOWN: &str = "❓";

/// Display text for a value in the given column.
///
/// * Checkbox: true/false map to [CHECKED]/[UNCHECKED], everything
///   else is [UNKNOWN].
/// * Select: the label of the matching option. A value without option
///   is shown as is with an extra [UNKNOWN] mark.
/// * Text, Digit: the string form of the value or [UNKNOWN].
pub fn view_value(value: &CellValue, column: &ColumnDef) -> String {
    match column.column_type {
        ColumnType::Checkbox => check_glyph(value).to_string(),
        ColumnType::Select => match column.option_for(value) {
            Some(option) if !option.label.is_empty() => option.label.clone(),
            _ => {
                let mut s = value.as_string().unwrap_or_default();
                s.push(' ');
                s.push_str(UNKNOWN);
                s
            }
        },
        ColumnType::Text | ColumnType::Digit => match value.as_string() {
            Some(s) if !s.is_empty() => s,
            _ => UNKNOWN.to_string(),
        },
    }
}

/// Glyph for a checkbox value.
pub fn check_glyph(value: &CellValue) -> &'static str {
    match value {
        CellValue::Bool(true) => CHECKED,
        CellValue::Bool(false) => UNCHECKED,
        _ => UNKNOWN,
    }
}
