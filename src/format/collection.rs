//! List-valued fields.

use crate::format::numeric::{decimal_places, to_fixed};
use crate::format::scalar::{NOT_AVAILABLE, general};
use crate::value::{RawValue, number_to_string};

/// Format each coordinate, reverse the order, join with `,`.
///
/// Producers store coordinate pairs latitude first; the display wants
/// longitude first. With a non-empty pattern every element gets its decimal
/// places, otherwise the general rendering. An empty list renders
/// [`NOT_AVAILABLE`]; a non-list value falls back to the general rendering.
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::collection::coordinate;
///
/// assert_eq!(coordinate(&RawValue::from(vec![1.1, 2.2]), ""), "2.2,1.1");
/// assert_eq!(coordinate(&RawValue::from(vec![51.50735, -0.12776]), "0.000"), "-0.128,51.507");
/// assert_eq!(coordinate(&RawValue::List(vec![]), ""), "N/A");
/// ```
pub fn coordinate(value: &RawValue, spec: &str) -> String {
    let Some(items) = value.as_list() else {
        return general(value);
    };
    if items.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    let places = (!spec.is_empty()).then(|| decimal_places(spec, '.'));
    items
        .iter()
        .rev()
        .map(|v| match places {
            Some(places) => to_fixed(*v, places),
            None => number_to_string(*v),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Join the list with `,`, in order, without per-element formatting.
///
/// `Null` renders [`NOT_AVAILABLE`]; an empty list renders an empty string.
pub fn integer_list(value: &RawValue) -> String {
    general(value)
}
