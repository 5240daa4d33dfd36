//! The formatter: a registry plus formatter-wide options.
//!
//! Most callers use [`crate::format_value`], which goes through a shared
//! default [`Formatter`]. Build your own with [`Formatter::builder`] to change
//! the time zone for dates or to register extra field types.

mod builder;
mod config;

use chrono::{FixedOffset, Offset, Utc};

use crate::dispatch::Registry;
use crate::enumeration::EnumDefinition;
use crate::handler::{FormatContext, Handler};
use crate::value::RawValue;

pub use builder::FormatterBuilder;
pub use config::FormatterConfig;

/// Options shared by every handler of a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Offset in which epoch-millisecond dates are rendered. Defaults to UTC.
    pub utc_offset: FixedOffset,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }
}

/// Column description: field type plus its pattern or enum definition.
///
/// The shape a rendering layer keeps per column.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    /// Semantic field type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub field_type: String,
    /// Format pattern.
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: String,
    /// Enum definition for enum-typed fields.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "enum", skip_serializing_if = "Option::is_none")
    )]
    pub enum_def: Option<EnumDefinition>,
}

impl FieldSpec {
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_enum(mut self, enum_def: EnumDefinition) -> Self {
        self.enum_def = Some(enum_def);
        self
    }
}

/// Field-type dispatch and formatting.
///
/// Immutable after construction; share it freely across threads.
///
/// # Example
///
/// ```
/// use chrono::FixedOffset;
/// use netrec_fmt::{Builtin, Formatter, RawValue};
///
/// let formatter = Formatter::builder()
///     .utc_offset(FixedOffset::east_opt(3600).unwrap())
///     .register("HandoverDelayData", Builtin::MillisecondDuration)
///     .build();
///
/// assert_eq!(formatter.format("HandoverDelayData", &RawValue::Number(1250.0), "", None), "00:01.250");
/// assert_eq!(
///     formatter.format("MillisecondTimeDateData", &RawValue::Number(0.0), "", None),
///     "01/01/70, 01:00:00 AM"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    registry: Registry,
    options: FormatOptions,
}

impl Formatter {
    /// Builder starting from the builtin registry.
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::new()
    }

    pub(crate) fn from_parts(registry: Registry, options: FormatOptions) -> Self {
        Self { registry, options }
    }

    /// Resolve the handler for a field type.
    pub fn handler(&self, field_type: &str) -> Handler {
        self.registry.resolve(field_type)
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Format one value.
    pub fn format(
        &self,
        field_type: &str,
        value: &RawValue,
        spec: &str,
        enum_def: Option<&EnumDefinition>,
    ) -> String {
        let ctx = FormatContext::new(field_type, spec, &self.options).with_enum(enum_def);
        self.handler(field_type).format(value, &ctx)
    }

    /// Format one value described by a column spec.
    pub fn format_field(&self, field: &FieldSpec, value: &RawValue) -> String {
        self.format(
            &field.field_type,
            value,
            &field.format,
            field.enum_def.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fields;

    #[test]
    fn test_default_formats_like_builtin_registry() {
        let f = Formatter::default();
        assert_eq!(
            f.format(fields::PERCENT, &RawValue::Number(0.256), "0.0", None),
            "25.6%"
        );
        assert_eq!(f.format("Unknown", &RawValue::from("x"), "0.0", None), "x");
    }

    #[test]
    fn test_format_field_uses_column_spec() {
        let f = Formatter::default();
        let column = FieldSpec::new(fields::ENUM)
            .with_enum([("1", "Attach")].into_iter().collect());
        assert_eq!(f.format_field(&column, &RawValue::Number(1.0)), "Attach");

        let column = FieldSpec::new(fields::FLOAT).with_format("0.000");
        assert_eq!(f.format_field(&column, &RawValue::Number(2.0)), "2.000");
    }

    #[test]
    fn test_formatter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Formatter>();
        assert_send_sync::<Handler>();
    }
}
