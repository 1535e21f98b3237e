//!
//! Validation rules for form fields.
//!
//! Each rule is a pure function of the field value. A failing rule
//! produces a [FieldError], a passing rule produces nothing.
//!
//! Empty values pass every rule except [Validator::Required].
//!
use crate::value::CellValue;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Predicate for [Validator::Custom]. Returns an error message if
/// the value is not acceptable.
pub type ValidatorFn = Arc<dyn Fn(&CellValue) -> Option<String> + Send + Sync>;

/// Validation rule.
#[derive(Clone)]
#[allow(variant_size_differences)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Validator {
    /// Value must not be Null or the empty string.
    Required,
    /// Numeric value must be >= min.
    Min(f64),
    /// Numeric value must be <= max.
    Max(f64),
    /// Text must have at least this many chars.
    MinLength(usize),
    /// Text must have at most this many chars.
    MaxLength(usize),
    /// Named custom predicate.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(
        #[cfg_attr(feature = "serde", serde(skip_deserializing))] &'static str,
        ValidatorFn,
    ),
}

/// Failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required,
    Min { min: f64, actual: f64 },
    Max { max: f64, actual: f64 },
    MinLength { min: usize, actual: usize },
    MaxLength { max: usize, actual: usize },
    Custom { name: &'static str, message: String },
}

impl Debug for Validator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Validator::Required => write!(f, "Required"),
            Validator::Min(v) => f.debug_tuple("Min").field(v).finish(),
            Validator::Max(v) => f.debug_tuple("Max").field(v).finish(),
            Validator::MinLength(v) => f.debug_tuple("MinLength").field(v).finish(),
            Validator::MaxLength(v) => f.debug_tuple("MaxLength").field(v).finish(),
            Validator::Custom(name, _) => f
                .debug_tuple("Custom")
                .field(name)
                .field(&"..dyn..")
                .finish(),
        }
    }
}

impl Validator {
    /// Custom validation.
    pub fn custom(
        name: &'static str,
        f: impl Fn(&CellValue) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Validator::Custom(name, Arc::new(f))
    }

    /// Run the rule.
    pub fn validate(&self, value: &CellValue) -> Option<FieldError> {
        match self {
            Validator::Required => {
                if is_empty(value) {
                    Some(FieldError::Required)
                } else {
                    None
                }
            }
            Validator::Min(min) => match numeric(value) {
                Some(actual) if actual < *min => Some(FieldError::Min { min: *min, actual }),
                _ => None,
            },
            Validator::Max(max) => match numeric(value) {
                Some(actual) if actual > *max => Some(FieldError::Max { max: *max, actual }),
                _ => None,
            },
            Validator::MinLength(min) => match text_len(value) {
                Some(actual) if actual < *min => Some(FieldError::MinLength { min: *min, actual }),
                _ => None,
            },
            Validator::MaxLength(max) => match text_len(value) {
                Some(actual) if actual > *max => Some(FieldError::MaxLength { max: *max, actual }),
                _ => None,
            },
            Validator::Custom(name, f) => f(value).map(|message| FieldError::Custom {
                name: *name,
                message,
            }),
        }
    }
}

/// Run all rules, collect the failures.
pub fn validate_all(validators: &[Validator], value: &CellValue) -> Vec<FieldError> {
    validators
        .iter()
        .filter_map(|v| v.validate(value))
        .collect()
}

fn is_empty(value: &CellValue) -> bool {
    match value {
        CellValue::Null => true,
        CellValue::Text(v) => v.is_empty(),
        _ => false,
    }
}

fn numeric(value: &CellValue) -> Option<f64> {
    let v = match value {
        CellValue::Number(v) => *v,
        CellValue::Text(v) => v.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if v.is_nan() {
        None
    } else {
        Some(v)
    }
}

// Empty text passes the length rules.
fn text_len(value: &CellValue) -> Option<usize> {
    match value {
        CellValue::Text(v) if !v.is_empty() => Some(v.chars().count()),
        _ => None,
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required => write!(f, "value required"),
            FieldError::Min { min, actual } => write!(f, "{} is less than {}", actual, min),
            FieldError::Max { max, actual } => write!(f, "{} is greater than {}", actual, max),
            FieldError::MinLength { min, actual } => {
                write!(f, "{} chars, at least {} needed", actual, min)
            }
            FieldError::MaxLength { max, actual } => {
                write!(f, "{} chars, at most {} allowed", actual, max)
            }
            FieldError::Custom { name, message } => write!(f, "{}: {}", name, message),
        }
    }
}

impl Error for FieldError {}
