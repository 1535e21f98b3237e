//!
//! Cell values.
//!

use std::fmt::{Display, Formatter};

/// Value of a single table cell.
///
/// There is no check against the declared column type.
/// A select column can hold a value that is not in its option list,
/// a checkbox column can hold a number.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CellValue {
    /// No value. Missing and unset cells end up here too.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Is this Null.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Truthiness of the value.
    ///
    /// Null, false, 0, NaN and the empty string are falsy,
    /// everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(v) => *v,
            CellValue::Number(v) => !(*v == 0.0 || v.is_nan()),
            CellValue::Text(v) => !v.is_empty(),
        }
    }

    /// Returns the value if it is truthy, Null otherwise.
    pub fn truthy_or_null(&self) -> CellValue {
        if self.is_truthy() {
            self.clone()
        } else {
            CellValue::Null
        }
    }

    /// String form of the value. Null has none.
    ///
    /// Numbers without a fractional part are written without one,
    /// `12.0` becomes `"12"`. Very large and very small numbers use
    /// the exponent form, `1e21` becomes `"1e+21"`, `1e-7` stays `"1e-7"`.
    pub fn as_string(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(v) => Some(v.to_string()),
            CellValue::Number(v) => Some(number_string(*v)),
            CellValue::Text(v) => Some(v.clone()),
        }
    }

    /// Boolean value, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Text value, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

fn number_string(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v.is_infinite() {
        if v > 0.0 {
            "Infinity".into()
        } else {
            "-Infinity".into()
        }
    } else if v == 0.0 {
        // -0 too
        "0".into()
    } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
        // exponent form, with an explicit sign for positive exponents
        let s = format!("{:e}", v);
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        }
    } else {
        v.to_string()
    }
}

impl Display for CellValue {
    /// Writes the string form, nothing for Null.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.as_string() {
            Some(s) => write!(f, "{}", s),
            None => Ok(()),
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}
