//! Per-call context for format handlers.
//!
//! This module provides [`FormatContext`], which carries everything about a
//! cell besides its raw value.

use crate::enumeration::EnumDefinition;
use crate::formatter::FormatOptions;

/// Context passed to format handlers.
///
/// Built fresh for each formatted cell; borrows from the caller.
///
/// # Example
///
/// ```rust
/// use netrec_fmt::handler::FormatContext;
/// use netrec_fmt::{FormatOptions, Handler, RawValue};
///
/// let upper = Handler::custom(|value: &RawValue, ctx: &FormatContext<'_>| {
///     format!("{}:{}", ctx.field_type, value.to_string().to_uppercase())
/// });
///
/// let options = FormatOptions::default();
/// let ctx = FormatContext::new("CellName", "", &options);
/// assert_eq!(upper.format(&RawValue::from("abc"), &ctx), "CellName:ABC");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    /// Semantic field type of the cell.
    pub field_type: &'a str,
    /// Format pattern, empty when the column has none.
    pub spec: &'a str,
    /// Enum definition for enum-typed columns.
    pub enum_def: Option<&'a EnumDefinition>,
    /// Formatter-wide options.
    pub options: &'a FormatOptions,
}

impl<'a> FormatContext<'a> {
    /// Context without an enum definition.
    pub fn new(field_type: &'a str, spec: &'a str, options: &'a FormatOptions) -> Self {
        Self {
            field_type,
            spec,
            enum_def: None,
            options,
        }
    }

    /// Attach an enum definition.
    pub fn with_enum(mut self, enum_def: Option<&'a EnumDefinition>) -> Self {
        self.enum_def = enum_def;
        self
    }
}
