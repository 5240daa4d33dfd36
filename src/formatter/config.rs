//! Serializable formatter configuration.
//!
//! A [`FormatterConfig`] is the file form of a [`FormatterBuilder`]: an offset
//! plus field-type aliases onto builtin handlers. Custom handlers are code and
//! cannot be expressed here.
//!
//! ```json
//! {
//!   "utc_offset_minutes": -300,
//!   "aliases": { "RsrpData": "FloatData", "HandoverDelayData": "MillisecondDurationData" }
//! }
//! ```

use std::collections::BTreeMap;

use crate::error::Result;

use super::{Formatter, FormatterBuilder};

/// Formatter settings loadable from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FormatterConfig {
    /// Offset east of UTC for date rendering, in minutes.
    pub utc_offset_minutes: i32,
    /// Field type to builtin handler name.
    pub aliases: BTreeMap<String, String>,
}

impl FormatterConfig {
    /// Builder seeded with the builtin registry and this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] for an out-of-range offset and
    /// [`crate::Error::UnknownHandler`] for an alias naming no builtin.
    pub fn into_builder(self) -> Result<FormatterBuilder> {
        let mut builder = FormatterBuilder::new().utc_offset_minutes(self.utc_offset_minutes)?;
        for (field_type, handler_name) in self.aliases {
            builder = builder.alias(field_type, &handler_name)?;
        }
        Ok(builder)
    }

    /// Build the configured formatter.
    pub fn build(self) -> Result<Formatter> {
        let count = self.aliases.len();
        let formatter = self.into_builder()?.build();
        tracing::debug!(target: "netrec_fmt::config", { aliases = count, utc_offset = %formatter.options().utc_offset }, "formatter configured");
        Ok(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::value::RawValue;

    #[test]
    fn test_default_config_is_default_formatter() {
        let formatter = FormatterConfig::default().build().unwrap();
        assert_eq!(formatter.options(), &crate::FormatOptions::default());
        assert_eq!(
            formatter.registry().len(),
            crate::Registry::builtin().len()
        );
    }

    #[test]
    fn test_aliases_are_applied() {
        let config = FormatterConfig {
            utc_offset_minutes: 0,
            aliases: [("HandoverDelayData".to_string(), "MillisecondDurationData".to_string())]
                .into_iter()
                .collect(),
        };
        let formatter = config.build().unwrap();
        assert_eq!(
            formatter.format("HandoverDelayData", &RawValue::Number(61000.0), "", None),
            "01:01"
        );
    }

    #[test]
    fn test_bad_alias_fails() {
        let config = FormatterConfig {
            utc_offset_minutes: 0,
            aliases: [("X".to_string(), "Nope".to_string())].into_iter().collect(),
        };
        let err = config.build().unwrap_err();
        assert!(matches!(*err, Error::UnknownHandler(_)));
    }

    #[test]
    fn test_bad_offset_fails() {
        let config = FormatterConfig {
            utc_offset_minutes: 3000,
            ..Default::default()
        };
        assert!(matches!(*config.build().unwrap_err(), Error::Config(_)));
    }
}
