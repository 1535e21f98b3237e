//!
//! Column schema for the table.
//!
//! ```rust
//! use rat_schema_table::{ColumnDef, ColumnType, TableModel, Validator};
//!
//! let model = TableModel::new(vec![
//!     ColumnDef::new("size", "Size", ColumnType::Digit)
//!         .validator(Validator::Required)
//!         .validator(Validator::Min(0.0)),
//!     ColumnDef::new("kind", "Kind", ColumnType::Select)
//!         .option("Cat", "cat")
//!         .option("Mouse", "mouse"),
//!     ColumnDef::new("name", "Name", ColumnType::Text),
//!     ColumnDef::new("ok", "Ok?", ColumnType::Checkbox),
//! ])
//! .expect("unique keys");
//! assert_eq!(model.len(), 4);
//! ```
//!
use crate::error::ModelError;
use crate::validate::Validator;
use crate::value::CellValue;

/// Kind of data in a column.
///
/// Selects the display formatting and the editor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnType {
    Checkbox,
    #[default]
    Text,
    Select,
    Digit,
}

/// One choice for a select column.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Definition of one column.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDef {
    /// Unique key. Form fields are keyed with it.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Value type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub column_type: ColumnType,
    /// Validation rules for the form field.
    #[cfg_attr(feature = "serde", serde(default))]
    pub validators: Vec<Validator>,
    /// Choices. Only used for [ColumnType::Select].
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Vec<SelectOption>,
}

/// Ordered list of column definitions.
///
/// The order defines the column order and the index into
/// each data row.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<ColumnDef>", into = "Vec<ColumnDef>")
)]
pub struct TableModel {
    columns: Vec<ColumnDef>,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl ColumnDef {
    /// New column.
    pub fn new(key: impl Into<String>, label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            column_type,
            validators: Default::default(),
            options: Default::default(),
        }
    }

    /// Add a validation rule.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Set all validation rules.
    pub fn validators(mut self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.validators = validators.into_iter().collect();
        self
    }

    /// Add a choice.
    pub fn option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(label, value));
        self
    }

    /// Set all choices.
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Find the option for the given value.
    ///
    /// Option values are strings, only a text value can match.
    pub fn option_for(&self, value: &CellValue) -> Option<&SelectOption> {
        match value {
            CellValue::Text(v) => self.options.iter().find(|o| o.value == *v),
            _ => None,
        }
    }
}

impl TableModel {
    /// Create the model. Column keys must be unique.
    pub fn new(columns: Vec<ColumnDef>) -> Result<Self, ModelError> {
        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|v| v.key == column.key) {
                return Err(ModelError::DuplicateKey(column.key.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Column count.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// No columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Column by index.
    pub fn column(&self, col: usize) -> Option<&ColumnDef> {
        self.columns.get(col)
    }

    /// Index of the column with the given key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|v| v.key == key)
    }
}

impl TryFrom<Vec<ColumnDef>> for TableModel {
    type Error = ModelError;

    fn try_from(value: Vec<ColumnDef>) -> Result<Self, Self::Error> {
        TableModel::new(value)
    }
}

impl From<TableModel> for Vec<ColumnDef> {
    fn from(value: TableModel) -> Self {
        value.columns
    }
}
