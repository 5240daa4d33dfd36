//! # netrec-fmt
//!
//! Display formatting for typed network telemetry record values.
//!
//! Record columns carry a semantic field type (`"GummeiData"`,
//! `"PercentData"`, `"MillisecondTimeDateData"`, ...) and an optional format
//! pattern. This crate turns a raw cell value into the string shown for it.
//!
//! ## Features
//!
//! - Field type dispatch with fixed overrides, a registry, and a passthrough fallback
//! - Fixed-point decimals, percentages, zero padding and IMEI grouping
//! - Bit-field decoders for packed LTE identifiers (PLMN/ECI, GUMMEI, eNodeB/sector)
//! - Epoch-millisecond dates and millisecond durations
//! - Caller-registered handlers and config-driven aliases
//!
//! Formatting is total: every call returns a string, whatever the input.
//! Unparseable input degrades to `"NaN"`, `"Invalid Date"`, or the value's
//! plain rendering; a null value renders `"N/A"`.
//!
//! ## Quick Start
//!
//! ```rust
//! use netrec_fmt::{RawValue, format_value};
//!
//! assert_eq!(format_value("PercentData", &RawValue::Number(0.256), "0.0", None), "25.6%");
//! assert_eq!(format_value("GummeiData", &RawValue::from("53941132997642"), "", None), "310.26.4660.010");
//! assert_eq!(format_value("LteEndEnbIdData", &RawValue::Number(74565.0), "", None), "291.69");
//! assert_eq!(format_value("CellNameData", &RawValue::from("MTL-3"), "", None), "MTL-3");
//! ```
//!
//! ## Custom Formatters
//!
//! ```rust
//! use chrono::FixedOffset;
//! use netrec_fmt::{Builtin, Formatter, RawValue};
//!
//! let formatter = Formatter::builder()
//!     .utc_offset(FixedOffset::west_opt(5 * 3600).unwrap())
//!     .register("SessionLengthData", Builtin::MillisecondDuration)
//!     .build();
//!
//! assert_eq!(formatter.format("SessionLengthData", &RawValue::Number(3_725_000.0), "", None), "1:02:05");
//! ```

pub mod dispatch;
pub mod enumeration;
pub mod error;
pub mod format;
pub mod formatter;
pub mod handler;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

use std::sync::OnceLock;

// Re-exports for convenience
pub use dispatch::Registry;
pub use enumeration::{EnumDefinition, EnumEntry};
pub use error::{Error, IdentifierErrorKind, Result};
pub use formatter::{FieldSpec, FormatOptions, Formatter, FormatterBuilder, FormatterConfig};
pub use handler::{Builtin, FormatContext, FormatHandler, Handler};
pub use value::RawValue;

/// The shared formatter behind [`format_value`] and [`select_handler`].
///
/// Builtin registry, dates in UTC. Built on first use.
pub fn default_formatter() -> &'static Formatter {
    static DEFAULT: OnceLock<Formatter> = OnceLock::new();
    DEFAULT.get_or_init(Formatter::default)
}

/// Handler the default formatter uses for `field_type`.
///
/// Overrides first, then the builtin registry, then [`Builtin::General`].
///
/// ```rust
/// use netrec_fmt::{Builtin, select_handler};
///
/// assert_eq!(select_handler("EndLatitudeData").as_builtin(), Some(Builtin::Coordinate));
/// assert_eq!(select_handler("DistanceData").as_builtin(), Some(Builtin::Distance));
/// assert_eq!(select_handler("Whatever").as_builtin(), Some(Builtin::General));
/// ```
pub fn select_handler(field_type: &str) -> Handler {
    default_formatter().handler(field_type)
}

/// Format one raw value with the default formatter.
///
/// `spec` is the column's format pattern (empty for none); `enum_def` is the
/// column's enum definition, consulted only by enum-typed fields.
pub fn format_value(
    field_type: &str,
    value: &RawValue,
    spec: &str,
    enum_def: Option<&EnumDefinition>,
) -> String {
    default_formatter().format(field_type, value, spec, enum_def)
}
