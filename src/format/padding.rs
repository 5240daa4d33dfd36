//! Zero-padding and digit grouping for integer-like identifiers.
//!
//! # Examples
//!
//! ```
//! use netrec_fmt::RawValue;
//! use netrec_fmt::format::padding;
//!
//! assert_eq!(padding::zero_pad(&RawValue::from("42"), "00000"), "00042");
//! assert_eq!(
//!     padding::imei(&RawValue::from("123456789012345"), "2-4-6-1"),
//!     "12-3456-789012-3"
//! );
//! ```

use smallvec::SmallVec;

use crate::value::RawValue;

/// IMEI group patterns rarely have more than a handful of groups.
type Groups = SmallVec<[usize; 8]>;

/// Left-pad the general rendering with `'0'` to the pattern's length.
///
/// An empty pattern passes the value through. Nothing is validated: a value
/// already at or beyond the width is returned unchanged.
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::padding::zero_pad;
///
/// assert_eq!(zero_pad(&RawValue::Number(7.0), "000"), "007");
/// assert_eq!(zero_pad(&RawValue::from("12345"), "000"), "12345");
/// assert_eq!(zero_pad(&RawValue::from("7"), ""), "7");
/// assert_eq!(zero_pad(&RawValue::Null, "000"), "N/A");
/// ```
pub fn zero_pad(value: &RawValue, spec: &str) -> String {
    let text = value.to_string();
    if value.is_null() || spec.is_empty() {
        return text;
    }

    let width = spec.chars().count();
    let len = text.chars().count();
    if len >= width {
        return text;
    }

    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n('0', width - len));
    out.push_str(&text);
    out
}

/// Split a digit string into dash-joined groups.
///
/// The pattern lists group lengths separated by `-`. A group written as a
/// number (`"2-4-6-1"`) gives its length directly; a group written with
/// placeholder characters (`"00-0000-000000-0"`, `#` or `X` also accepted)
/// gives its length by character count.
///
/// When the value is shorter than the pattern, later groups come out empty
/// or truncated. Characters beyond the last group are dropped.
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::padding::imei;
///
/// assert_eq!(imei(&RawValue::from("490154203237518"), "00-000000-000000-0"), "49-015420-323751-8");
/// assert_eq!(imei(&RawValue::from("1234"), "2-4-6-1"), "12-34--");
/// ```
pub fn imei(value: &RawValue, spec: &str) -> String {
    let text = value.to_string();
    if value.is_null() || spec.is_empty() {
        return text;
    }

    let groups: Groups = spec.split('-').map(group_len).collect();
    let chars: Vec<char> = text.chars().collect();

    let mut out = String::with_capacity(chars.len() + groups.len());
    let mut offset = 0usize;
    for (i, len) in groups.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        let start = offset.min(chars.len());
        let end = offset.saturating_add(*len).min(chars.len());
        out.extend(&chars[start..end]);
        offset = offset.saturating_add(*len);
    }
    out
}

/// Length of one dash-delimited group in an IMEI pattern.
fn group_len(group: &str) -> usize {
    if group
        .bytes()
        .all(|b| matches!(b, b'0' | b'#' | b'X' | b'x'))
    {
        return group.chars().count();
    }
    group
        .parse::<usize>()
        .unwrap_or_else(|_| group.chars().count())
}
