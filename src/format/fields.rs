//! Well-known field type names.
//!
//! Field types are open-ended strings; these are the ones the builtin
//! registry and the fixed overrides know about. Pass them to
//! [`format_value`](crate::format_value) or
//! [`select_handler`](crate::select_handler).
//!
//! # Example
//!
//! ```
//! use netrec_fmt::format::fields;
//! use netrec_fmt::{RawValue, format_value};
//!
//! let v = RawValue::from(vec![45.5, -73.6]);
//! assert_eq!(format_value(fields::END_LATITUDE, &v, "", None), "-73.6,45.5");
//! ```

// Registry keys

/// Coordinate pair, rendered longitude first.
pub const COORDINATE: &str = "Coordinate";

/// Enum-coded value, rendered through an enum definition.
pub const ENUM: &str = "EnumData";

/// Signed integer, zero-padded to the pattern width.
pub const INTEGER: &str = "IntegerData";

/// Unsigned integer, zero-padded to the pattern width.
pub const UNSIGNED_INTEGER: &str = "UnsignedIntegerData";

/// IMEI digit string, grouped by the pattern.
pub const IMEI: &str = "ImeiData";

/// Ratio rendered as a percentage.
pub const PERCENT: &str = "PercentData";

/// Epoch milliseconds rendered as date and time.
pub const MILLISECOND_TIME_DATE: &str = "MillisecondTimeDateData";

/// Millisecond duration.
pub const MILLISECOND_DURATION: &str = "MillisecondDurationData";

/// Boolean flag.
pub const BOOL: &str = "BoolData";

/// Floating-point value with pattern decimals.
pub const FLOAT: &str = "FloatData";

/// Packed GUMMEI.
pub const GUMMEI: &str = "GummeiData";

/// Packed PLMN/ECI network element.
pub const NETWORK_ELEMENT: &str = "NEData";

/// Distance with pattern decimals.
pub const DISTANCE: &str = "DistanceData";

/// Packed eNodeB/sector identifier.
pub const LTE_ENB_ID: &str = "LteEnbIdData";

/// List of integers.
pub const INTEGER_LIST: &str = "IntegerListData";

// Fixed overrides

/// End-of-session latitude column (coordinate pair).
pub const END_LATITUDE: &str = "EndLatitudeData";

/// End-of-session longitude column (coordinate pair).
pub const END_LONGITUDE: &str = "EndLongitudeData";

/// Terminating-side network element.
pub const PRIMARY_TERMINATING_NE: &str = "PrimaryTerminatingNEData";

/// Originating-side network element.
pub const PRIMARY_ORIGINATING_NE: &str = "PrimaryOriginatingNEData";

/// LTE network element.
pub const LTE_NE: &str = "LteNEData";

/// eNodeB at session start.
pub const LTE_START_ENB_ID: &str = "LteStartEnbIdData";

/// eNodeB at session end.
pub const LTE_END_ENB_ID: &str = "LteEndEnbIdData";
