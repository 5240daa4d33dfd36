//! Formatting functions for raw record values.
//!
//! Each submodule holds the pure functions behind one family of handlers.
//! They can be called directly; the [`dispatch`](crate::dispatch) layer picks
//! the right one for a field type.
//!
//! ## Numeric
//!
//! [`numeric`] renders fixed-point decimals from patterns such as `"0.00"`.
//!
//! ```
//! use netrec_fmt::RawValue;
//! use netrec_fmt::format::numeric;
//!
//! assert_eq!(numeric::fixed_decimal(&RawValue::Number(3.14159), "0.00", '.'), "3.14");
//! ```
//!
//! ## Bit fields
//!
//! [`bitfield`] decodes packed 64-bit LTE identifiers carried as digit strings.
//!
//! ```
//! use netrec_fmt::RawValue;
//! use netrec_fmt::format::bitfield;
//!
//! assert_eq!(bitfield::gummei(&RawValue::from("53941132997642")), "310.26.4660.010");
//! ```
//!
//! ## Temporal
//!
//! [`temporal`] renders epoch-millisecond dates and millisecond durations.
//!
//! ```
//! use netrec_fmt::RawValue;
//! use netrec_fmt::format::temporal;
//!
//! assert_eq!(temporal::duration(&RawValue::Number(65000.0)), "01:05");
//! ```

pub mod bitfield;
pub mod collection;
pub mod fields;
pub mod numeric;
pub mod padding;
pub mod scalar;
pub mod temporal;
