//! Format handlers.
//!
//! A handler turns a [`RawValue`] plus its [`FormatContext`] into a display
//! string. The crate ships a closed set of [`Builtin`] handlers; callers add
//! their own by implementing [`FormatHandler`] (closures qualify) and wrapping
//! it in [`Handler::custom`].
//!
//! Every handler is total: it never panics and always returns a string.
//! `Null` renders `N/A` for every builtin.

mod context;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::format::scalar::NOT_AVAILABLE;
use crate::format::{bitfield, collection, fields, numeric, padding, scalar, temporal};
use crate::value::RawValue;

pub use context::FormatContext;

/// Trait for caller-supplied handlers.
///
/// Implementations must be pure and total: no panics, no I/O, the same output
/// for the same input. They are shared across threads.
///
/// Any `Fn(&RawValue, &FormatContext<'_>) -> String + Send + Sync` closure
/// implements this trait.
pub trait FormatHandler: Send + Sync {
    /// Render one value.
    fn format(&self, value: &RawValue, ctx: &FormatContext<'_>) -> String;
}

impl<F> FormatHandler for F
where
    F: Fn(&RawValue, &FormatContext<'_>) -> String + Send + Sync,
{
    fn format(&self, value: &RawValue, ctx: &FormatContext<'_>) -> String {
        self(value, ctx)
    }
}

/// The builtin handler set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Reversed, comma-joined coordinate list.
    Coordinate,
    /// Enum definition lookup.
    Enum,
    /// Zero-padded signed integer.
    Integer,
    /// Zero-padded unsigned integer.
    UnsignedInteger,
    /// Dash-grouped IMEI digits.
    Imei,
    /// Ratio as a percentage.
    Percent,
    /// Epoch milliseconds as date and time.
    MillisecondTimeDate,
    /// Millisecond duration.
    MillisecondDuration,
    /// `True` / `False`.
    Bool,
    /// Fixed-point float.
    Float,
    /// Packed GUMMEI.
    Gummei,
    /// Packed PLMN/ECI network element.
    NetworkElement,
    /// Fixed-point distance.
    Distance,
    /// Packed eNodeB/sector.
    LteEnbId,
    /// Comma-joined integer list.
    IntegerList,
    /// Identity passthrough.
    General,
}

impl Builtin {
    /// Every builtin handler, in registry order.
    pub const ALL: [Builtin; 16] = [
        Builtin::Coordinate,
        Builtin::Enum,
        Builtin::Integer,
        Builtin::UnsignedInteger,
        Builtin::Imei,
        Builtin::Percent,
        Builtin::MillisecondTimeDate,
        Builtin::MillisecondDuration,
        Builtin::Bool,
        Builtin::Float,
        Builtin::Gummei,
        Builtin::NetworkElement,
        Builtin::Distance,
        Builtin::LteEnbId,
        Builtin::IntegerList,
        Builtin::General,
    ];

    /// Registry key this handler is registered under.
    ///
    /// [`Builtin::General`] is the fallback and has no field type of its own;
    /// its name is `"General"`.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Coordinate => fields::COORDINATE,
            Builtin::Enum => fields::ENUM,
            Builtin::Integer => fields::INTEGER,
            Builtin::UnsignedInteger => fields::UNSIGNED_INTEGER,
            Builtin::Imei => fields::IMEI,
            Builtin::Percent => fields::PERCENT,
            Builtin::MillisecondTimeDate => fields::MILLISECOND_TIME_DATE,
            Builtin::MillisecondDuration => fields::MILLISECOND_DURATION,
            Builtin::Bool => fields::BOOL,
            Builtin::Float => fields::FLOAT,
            Builtin::Gummei => fields::GUMMEI,
            Builtin::NetworkElement => fields::NETWORK_ELEMENT,
            Builtin::Distance => fields::DISTANCE,
            Builtin::LteEnbId => fields::LTE_ENB_ID,
            Builtin::IntegerList => fields::INTEGER_LIST,
            Builtin::General => "General",
        }
    }

    /// Render one value.
    pub fn format(self, value: &RawValue, ctx: &FormatContext<'_>) -> String {
        if value.is_null() {
            return NOT_AVAILABLE.to_string();
        }

        match self {
            Builtin::Coordinate => collection::coordinate(value, ctx.spec),
            Builtin::Enum => scalar::enumeration(value, ctx.enum_def),
            Builtin::Integer | Builtin::UnsignedInteger => padding::zero_pad(value, ctx.spec),
            Builtin::Imei => padding::imei(value, ctx.spec),
            Builtin::Percent => numeric::percent(value, ctx.spec),
            Builtin::MillisecondTimeDate => temporal::date_time(value, ctx.options.utc_offset),
            Builtin::MillisecondDuration => temporal::duration(value),
            Builtin::Bool => scalar::boolean(value),
            Builtin::Float | Builtin::Distance => {
                if ctx.spec.is_empty() {
                    scalar::general(value)
                } else {
                    numeric::fixed_decimal(value, ctx.spec, '.')
                }
            }
            Builtin::Gummei => bitfield::gummei(value),
            Builtin::NetworkElement => bitfield::network_element(value),
            Builtin::LteEnbId => bitfield::lte_enb_id(value),
            Builtin::IntegerList => collection::integer_list(value),
            Builtin::General => scalar::general(value),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a builtin by its registry key (`"FloatData"`, `"Coordinate"`, ...).
///
/// `"General"` and `"general"` both name the passthrough.
///
/// # Examples
///
/// ```
/// use netrec_fmt::Builtin;
///
/// assert_eq!("GummeiData".parse::<Builtin>().unwrap(), Builtin::Gummei);
/// assert!("NoSuchData".parse::<Builtin>().is_err());
/// ```
impl FromStr for Builtin {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        if s == "general" {
            return Ok(Builtin::General);
        }
        Builtin::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| Error::UnknownHandler(s.into()).boxed())
    }
}

/// A resolved handler: builtin or caller-supplied.
#[derive(Clone)]
pub enum Handler {
    Builtin(Builtin),
    Custom(Arc<dyn FormatHandler>),
}

impl Handler {
    /// Wrap a caller-supplied handler.
    pub fn custom(handler: impl FormatHandler + 'static) -> Self {
        Handler::Custom(Arc::new(handler))
    }

    /// Render one value.
    pub fn format(&self, value: &RawValue, ctx: &FormatContext<'_>) -> String {
        match self {
            Handler::Builtin(b) => b.format(value, ctx),
            Handler::Custom(h) => h.format(value, ctx),
        }
    }

    /// The builtin behind this handler, if any.
    pub fn as_builtin(&self) -> Option<Builtin> {
        match self {
            Handler::Builtin(b) => Some(*b),
            Handler::Custom(_) => None,
        }
    }
}

impl From<Builtin> for Handler {
    fn from(b: Builtin) -> Self {
        Handler::Builtin(b)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Builtin(b) => f.debug_tuple("Builtin").field(b).finish(),
            Handler::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::EnumDefinition;
    use crate::formatter::FormatOptions;

    fn run(builtin: Builtin, value: RawValue, spec: &str) -> String {
        let options = FormatOptions::default();
        builtin.format(&value, &FormatContext::new("Test", spec, &options))
    }

    #[test]
    fn test_every_builtin_maps_null_to_na() {
        for b in Builtin::ALL {
            assert_eq!(run(b, RawValue::Null, "0.00"), "N/A", "{} null policy", b);
        }
    }

    #[test]
    fn test_every_builtin_name_parses_back() {
        for b in Builtin::ALL {
            assert_eq!(b.name().parse::<Builtin>().unwrap(), b);
        }
        assert_eq!("general".parse::<Builtin>().unwrap(), Builtin::General);
    }

    #[test]
    fn test_unknown_name_is_error() {
        let err = "Bogus".parse::<Builtin>().unwrap_err();
        assert!(matches!(*err, Error::UnknownHandler(ref name) if &**name == "Bogus"));
    }

    #[test]
    fn test_float_and_distance_need_a_pattern() {
        assert_eq!(run(Builtin::Float, RawValue::Number(1.23456), ""), "1.23456");
        assert_eq!(run(Builtin::Float, RawValue::Number(1.23456), "0.0"), "1.2");
        assert_eq!(run(Builtin::Distance, RawValue::Number(9.87), "0"), "10");
        assert_eq!(run(Builtin::Distance, RawValue::from("far"), "0.0"), "NaN");
    }

    #[test]
    fn test_enum_uses_context_definition() {
        let def: EnumDefinition = [("2", "Detach")].into_iter().collect();
        let options = FormatOptions::default();
        let ctx = FormatContext::new(fields::ENUM, "", &options).with_enum(Some(&def));
        assert_eq!(Builtin::Enum.format(&RawValue::Number(2.0), &ctx), "Detach");
        assert_eq!(Builtin::Enum.format(&RawValue::Number(3.0), &ctx), "3");
    }

    #[test]
    fn test_integer_handlers_pad() {
        assert_eq!(run(Builtin::Integer, RawValue::from("42"), "0000"), "0042");
        assert_eq!(
            run(Builtin::UnsignedInteger, RawValue::Number(7.0), "00"),
            "07"
        );
        assert_eq!(run(Builtin::Integer, RawValue::from("42"), ""), "42");
    }

    #[test]
    fn test_custom_closure_handler() {
        let handler = Handler::custom(|v: &RawValue, _: &FormatContext<'_>| format!("<{}>", v));
        let options = FormatOptions::default();
        let ctx = FormatContext::new("X", "", &options);
        assert_eq!(handler.format(&RawValue::Number(1.0), &ctx), "<1>");
        assert_eq!(handler.as_builtin(), None);
        assert_eq!(format!("{:?}", handler), "Custom(..)");
    }
}
