//! Formatter builder.
//!
//! This module provides the [`FormatterBuilder`] type, the single entry point
//! for constructing a [`Formatter`] with extra field types or a non-UTC
//! offset.

use chrono::FixedOffset;

use crate::dispatch::{Registry, override_for};
use crate::error::{Error, Result};
use crate::handler::{Builtin, FormatContext, Handler};
use crate::value::RawValue;

use super::{FormatOptions, Formatter};

/// Longest offset accepted from a config file, in minutes (UTC+/-23:59).
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Builder for [`Formatter`].
///
/// Starts from the builtin registry. Registrations replace earlier entries
/// for the same field type.
///
/// # Example
///
/// ```rust
/// use netrec_fmt::{FormatContext, FormatterBuilder, RawValue};
///
/// # fn main() -> netrec_fmt::Result<()> {
/// let formatter = FormatterBuilder::new()
///     .utc_offset_minutes(-300)?
///     .alias("CellLatitudeData", "FloatData")?
///     .register_fn("CellNameData", |v: &RawValue, _: &FormatContext<'_>| {
///         v.to_string().to_uppercase()
///     })
///     .build();
///
/// assert_eq!(formatter.format("CellLatitudeData", &RawValue::Number(45.51), "0.0", None), "45.5");
/// assert_eq!(formatter.format("CellNameData", &RawValue::from("mtl-3"), "", None), "MTL-3");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FormatterBuilder {
    registry: Registry,
    options: FormatOptions,
}

impl FormatterBuilder {
    /// Builder holding the builtin registry and UTC dates.
    pub fn new() -> Self {
        Self {
            registry: Registry::builtin(),
            options: FormatOptions::default(),
        }
    }

    /// Builder with no registry entries.
    ///
    /// Only the fixed overrides resolve to anything but General.
    pub fn empty() -> Self {
        Self {
            registry: Registry::empty(),
            options: FormatOptions::default(),
        }
    }

    /// Set the offset dates are rendered in (default: UTC).
    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.options.utc_offset = offset;
        self
    }

    /// Set the date offset in minutes east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the offset is a day or more.
    pub fn utc_offset_minutes(self, minutes: i32) -> Result<Self> {
        let offset = (-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES)
            .contains(&minutes)
            .then(|| FixedOffset::east_opt(minutes * 60))
            .flatten()
            .ok_or_else(|| {
                Error::Config(format!("utc offset out of range: {} minutes", minutes).into())
                    .boxed()
            })?;
        Ok(self.utc_offset(offset))
    }

    /// Register a handler under `field_type`.
    ///
    /// Registering under one of the fixed override keys is accepted but never
    /// consulted.
    pub fn register(mut self, field_type: impl Into<String>, handler: impl Into<Handler>) -> Self {
        let field_type = field_type.into();
        if override_for(&field_type).is_some() {
            tracing::debug!(target: "netrec_fmt::config", { field_type = %field_type }, "registration shadowed by fixed override");
        }
        self.registry.insert(field_type, handler);
        self
    }

    /// Register a closure under `field_type`.
    pub fn register_fn<F>(self, field_type: impl Into<String>, f: F) -> Self
    where
        F: Fn(&RawValue, &FormatContext<'_>) -> String + Send + Sync + 'static,
    {
        self.register(field_type, Handler::custom(f))
    }

    /// Route `field_type` to the builtin registered as `handler_name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHandler`] when `handler_name` names no builtin.
    pub fn alias(self, field_type: impl Into<String>, handler_name: &str) -> Result<Self> {
        let field_type = field_type.into();
        match handler_name.parse::<Builtin>() {
            Ok(builtin) => Ok(self.register(field_type, builtin)),
            Err(e) => {
                tracing::debug!(target: "netrec_fmt::config", { field_type = %field_type, error = %e }, "alias rejected");
                Err(e)
            }
        }
    }

    /// Finish the formatter.
    pub fn build(self) -> Formatter {
        Formatter::from_parts(self.registry, self.options)
    }
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Builtin> for FormatterBuilder {
    /// Builder whose registry maps only this builtin's own name.
    fn from(builtin: Builtin) -> Self {
        Self::empty().register(builtin.name(), builtin)
    }
}
