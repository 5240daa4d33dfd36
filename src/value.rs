//! Raw record values.
//!
//! The [`RawValue`] enum represents every shape a record cell can take before
//! formatting, including the absent marker.

use std::fmt;

use crate::error::{Error, IdentifierErrorKind, Result};

/// Largest integer an `f64` represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Raw record value.
///
/// Packed 64-bit identifiers whose magnitude may exceed 2^53 must travel as
/// [`RawValue::Text`] holding decimal digits; an `f64` cannot carry them
/// without losing the low bits.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawValue {
    /// Absent value. Renders as `N/A` in almost every handler.
    #[default]
    Null,

    /// Boolean flag.
    Bool(bool),

    /// Double-precision number.
    Number(f64),

    /// Text, including decimal-digit encodings of large identifiers.
    Text(String),

    /// Ordered sequence of numbers (coordinates, integer lists).
    List(Vec<f64>),
}

impl RawValue {
    /// Check if this is the absent marker.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Try to get as f64.
    ///
    /// Returns `Some` only for [`RawValue::Number`]; text is not coerced.
    ///
    /// # Examples
    ///
    /// ```
    /// use netrec_fmt::RawValue;
    ///
    /// assert_eq!(RawValue::Number(2.5).as_f64(), Some(2.5));
    /// assert_eq!(RawValue::from("2.5").as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a list of numbers.
    pub fn as_list(&self) -> Option<&[f64]> {
        match self {
            RawValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce to a number for arithmetic handlers.
    ///
    /// Text is parsed after trimming, booleans map to 1 and 0. Everything that
    /// has no numeric reading becomes NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use netrec_fmt::RawValue;
    ///
    /// assert_eq!(RawValue::from(" 0.25 ").to_number(), 0.25);
    /// assert_eq!(RawValue::Bool(true).to_number(), 1.0);
    /// assert!(RawValue::from("abc").to_number().is_nan());
    /// assert!(RawValue::Null.to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            RawValue::Number(v) => *v,
            RawValue::Bool(b) => f64::from(u8::from(*b)),
            RawValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            RawValue::Null | RawValue::List(_) => f64::NAN,
        }
    }

    /// Truthiness used by the boolean handler.
    ///
    /// Numbers are true unless zero or NaN, text unless empty, lists always.
    pub fn is_truthy(&self) -> bool {
        match self {
            RawValue::Null => false,
            RawValue::Bool(b) => *b,
            RawValue::Number(v) => *v != 0.0 && !v.is_nan(),
            RawValue::Text(s) => !s.is_empty(),
            RawValue::List(_) => true,
        }
    }

    /// Read the value as a packed unsigned 64-bit identifier.
    ///
    /// Digit strings are parsed with full 64-bit precision. Numbers are only
    /// accepted when they are exact non-negative integers no larger than
    /// [`MAX_SAFE_INTEGER`]; beyond that the `f64` has already lost bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use netrec_fmt::RawValue;
    ///
    /// let id = RawValue::from("18446744073709551615").parse_identifier().unwrap();
    /// assert_eq!(id, u64::MAX);
    ///
    /// assert_eq!(RawValue::Number(4096.0).parse_identifier().unwrap(), 4096);
    /// assert!(RawValue::Number(1.5).parse_identifier().is_err());
    /// assert!(RawValue::from("18446744073709551616").parse_identifier().is_err());
    /// ```
    pub fn parse_identifier(&self) -> Result<u64> {
        match self {
            RawValue::Text(s) => {
                let digits = s.trim();
                if digits.is_empty() {
                    return Err(Error::identifier(s.as_str(), IdentifierErrorKind::Empty));
                }
                if !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::identifier(
                        s.as_str(),
                        IdentifierErrorKind::InvalidDigit,
                    ));
                }
                digits
                    .parse::<u64>()
                    .map_err(|_| Error::identifier(s.as_str(), IdentifierErrorKind::Overflow))
            }
            RawValue::Number(v) => {
                if v.is_finite() && *v >= 0.0 && v.fract() == 0.0 && *v <= MAX_SAFE_INTEGER as f64
                {
                    Ok(*v as u64)
                } else {
                    Err(Error::identifier(
                        self.to_string(),
                        IdentifierErrorKind::NotInteger,
                    ))
                }
            }
            RawValue::Null => Err(Error::identifier("", IdentifierErrorKind::Empty)),
            RawValue::Bool(_) | RawValue::List(_) => Err(Error::identifier(
                self.to_string(),
                IdentifierErrorKind::WrongType,
            )),
        }
    }
}

/// Write a number the way the general handler displays it.
///
/// Shortest round-trip digits, no negative zero, spelled-out infinities.
///
/// Never switches to exponent notation: `1e21` prints all 22 digits and
/// `1e-7` prints as `0.0000001`, where a JavaScript rendering would give
/// `1e+21` and `1e-7`.
pub(crate) fn write_number(f: &mut impl fmt::Write, v: f64) -> fmt::Result {
    if v.is_infinite() {
        f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else if v == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{}", v)
    }
}

/// Render a number the way the general handler displays it.
pub(crate) fn number_to_string(v: f64) -> String {
    let mut out = String::new();
    let _ = write_number(&mut out, v);
    out
}

/// General passthrough rendering.
///
/// `Null` displays as `N/A`, lists as comma-joined numbers.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => f.write_str("N/A"),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Number(v) => write_number(f, *v),
            RawValue::Text(s) => f.write_str(s),
            RawValue::List(items) => {
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_number(f, *v)?;
                }
                Ok(())
            }
        }
    }
}

/// Convenience conversions for creating [`RawValue`] from common Rust types.
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
///
/// let v: RawValue = 42.5.into();
/// assert_eq!(v.as_f64(), Some(42.5));
///
/// // Small u64 values stay numeric, large ones keep every digit as text
/// let v: RawValue = 4096u64.into();
/// assert_eq!(v, RawValue::Number(4096.0));
/// let v: RawValue = u64::MAX.into();
/// assert_eq!(v.as_str(), Some("18446744073709551615"));
///
/// let v: RawValue = vec![1.1, 2.2].into();
/// assert_eq!(v.as_list(), Some(&[1.1, 2.2][..]));
///
/// let v: RawValue = None::<f64>.into();
/// assert!(v.is_null());
/// ```
impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Number(f64::from(v))
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        if v.unsigned_abs() <= MAX_SAFE_INTEGER {
            RawValue::Number(v as f64)
        } else {
            RawValue::Text(v.to_string())
        }
    }
}

impl From<u64> for RawValue {
    fn from(v: u64) -> Self {
        if v <= MAX_SAFE_INTEGER {
            RawValue::Number(v as f64)
        } else {
            RawValue::Text(v.to_string())
        }
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<Vec<f64>> for RawValue {
    fn from(items: Vec<f64>) -> Self {
        RawValue::List(items)
    }
}

impl From<&[f64]> for RawValue {
    fn from(items: &[f64]) -> Self {
        RawValue::List(items.to_vec())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(RawValue::Null, Into::into)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_untagged_json_literals() {
        let parse = |s: &str| serde_json::from_str::<RawValue>(s).unwrap();
        assert_eq!(parse("null"), RawValue::Null);
        assert_eq!(parse("true"), RawValue::Bool(true));
        assert_eq!(parse("1.5"), RawValue::Number(1.5));
        assert_eq!(parse("12"), RawValue::Number(12.0));
        assert_eq!(parse("\"310\""), RawValue::Text("310".into()));
        assert_eq!(parse("[1.1, 2]"), RawValue::List(vec![1.1, 2.0]));
    }

    #[test]
    fn test_roundtrip() {
        let v = RawValue::Text("53941132997642".into());
        let json = serde_json::to_string(&v).unwrap();
        let back: RawValue = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
