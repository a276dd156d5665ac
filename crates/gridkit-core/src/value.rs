//! Cell value types

use std::fmt;

/// Maximum number of decimal places shown for a float.
///
/// Digits past this are rounded away, so magnitudes below `0.000005` show as
/// zero (`1e-7` renders as `"0.00000"`). Files keep full precision.
pub const MAX_DISPLAY_DECIMALS: usize = 5;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (renders as the empty string)
    #[default]
    Empty,

    /// Integer value, rendered without a decimal point
    Int(i64),

    /// Floating point value, rendered with its natural precision
    Float(f64),

    /// Anything that is not numeric
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Coerce raw user input the way an edit does.
    ///
    /// Input that parses as a float (surrounding whitespace allowed) becomes
    /// [`CellValue::Float`], the empty string becomes [`CellValue::Empty`],
    /// everything else is kept verbatim as text. This never fails.
    pub fn coerce(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(n) => CellValue::Float(n),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }

    /// Detect the narrowest type for a loaded field.
    ///
    /// Unlike [`CellValue::coerce`], integers stay integers.
    pub fn detect(field: &str) -> Self {
        if field.is_empty() {
            return CellValue::Empty;
        }
        let trimmed = field.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return CellValue::Int(n);
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Float(n);
        }
        CellValue::Text(field.to_string())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell holds a number
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
        }
    }
}

/// Format a float with its natural precision, capped at
/// [`MAX_DISPLAY_DECIMALS`] places.
///
/// `3.0` has no fractional digits and renders as `"3"`; `3.14159265`
/// renders as `"3.14159"`. A missing number renders as `"nan"`.
pub fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    let natural = n.to_string();
    let decimals = match natural.split_once('.') {
        Some((_, frac)) => frac.len().min(MAX_DISPLAY_DECIMALS),
        None => 0,
    };
    format!("{:.*}", decimals, n)
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => f.write_str(&format_float(*n)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}
