//!
//! Edit groups backing the table rows.
//!
//! There is one [RowForm] per row of the grid. Each form has one
//! [FormField] per column, keyed by the column key. Edits go to the
//! form fields first and are copied back to the grid on commit.
//!
use crate::grid::ViewGrid;
use crate::model::TableModel;
use crate::validate::{validate_all, FieldError, Validator};
use crate::value::CellValue;

/// One editable field.
#[derive(Debug, Clone)]
pub struct FormField {
    key: String,
    value: CellValue,
    validators: Vec<Validator>,
    errors: Vec<FieldError>,
    dirty: bool,
}

/// Editable fields for one row.
#[derive(Debug, Default, Clone)]
pub struct RowForm {
    fields: Vec<FormField>,
}

impl FormField {
    /// New field. Runs the validators once.
    pub fn new(key: impl Into<String>, value: CellValue, validators: Vec<Validator>) -> Self {
        let errors = validate_all(&validators, &value);
        Self {
            key: key.into(),
            value,
            validators,
            errors,
            dirty: false,
        }
    }

    /// Column key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current value.
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Set the value and validate.
    ///
    /// Returns true if the value changed.
    pub fn set_value(&mut self, value: CellValue) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.dirty = true;
        self.errors = validate_all(&self.validators, &self.value);
        true
    }

    /// Validation failures for the current value.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// No validation failures.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Value has been changed since construction.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl RowForm {
    /// Form for one grid row.
    ///
    /// Falsy values are not taken over, the fields start with Null
    /// instead. A cell holding `0`, `false` or `""` loses its value
    /// here.
    pub fn from_row(model: &TableModel, row: &[CellValue]) -> Self {
        let fields = model
            .columns()
            .iter()
            .enumerate()
            .map(|(col, column)| {
                let value = row
                    .get(col)
                    .map(CellValue::truthy_or_null)
                    .unwrap_or_default();
                FormField::new(column.key.as_str(), value, column.validators.clone())
            })
            .collect();
        Self { fields }
    }

    /// Field count.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// No fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields in column order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Field by column index.
    pub fn field(&self, col: usize) -> Option<&FormField> {
        self.fields.get(col)
    }

    /// Field by column key.
    pub fn field_by_key(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|v| v.key == key)
    }

    /// Set a field value.
    ///
    /// Returns true if the value changed.
    pub fn set_value(&mut self, col: usize, value: CellValue) -> bool {
        match self.fields.get_mut(col) {
            Some(field) => field.set_value(value),
            None => false,
        }
    }

    /// Values in column order.
    pub fn values(&self) -> Vec<CellValue> {
        self.fields.iter().map(|v| v.value.clone()).collect()
    }

    /// All fields are valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|v| v.is_valid())
    }

    /// All validation failures with their column key.
    pub fn errors(&self) -> Vec<(&str, &FieldError)> {
        self.fields
            .iter()
            .flat_map(|f| f.errors.iter().map(move |e| (f.key.as_str(), e)))
            .collect()
    }
}

/// Build the forms for every row of the grid.
pub fn build_forms(model: &TableModel, grid: &ViewGrid) -> Vec<RowForm> {
    grid.iter().map(|row| RowForm::from_row(model, row)).collect()
}
