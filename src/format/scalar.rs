//! General passthrough, boolean and enum rendering.

use crate::enumeration::EnumDefinition;
use crate::value::RawValue;

/// Display for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Identity passthrough; `Null` renders [`NOT_AVAILABLE`].
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::scalar::general;
///
/// assert_eq!(general(&RawValue::from("eNB-17")), "eNB-17");
/// assert_eq!(general(&RawValue::Number(12.5)), "12.5");
/// assert_eq!(general(&RawValue::Null), "N/A");
/// ```
pub fn general(value: &RawValue) -> String {
    value.to_string()
}

/// `True` or `False` by truthiness; `Null` renders [`NOT_AVAILABLE`].
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::scalar::boolean;
///
/// assert_eq!(boolean(&RawValue::Bool(true)), "True");
/// assert_eq!(boolean(&RawValue::Number(0.0)), "False");
/// assert_eq!(boolean(&RawValue::Null), "N/A");
/// ```
pub fn boolean(value: &RawValue) -> String {
    match value {
        RawValue::Null => NOT_AVAILABLE.to_string(),
        v if v.is_truthy() => "True".to_string(),
        _ => "False".to_string(),
    }
}

/// Name from the enum definition, else the general rendering.
pub fn enumeration(value: &RawValue, definition: Option<&EnumDefinition>) -> String {
    definition
        .and_then(|def| def.lookup(value))
        .map_or_else(|| general(value), str::to_string)
}
