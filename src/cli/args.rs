//! Command-line argument structures for the `recfmt` tool.
//!
//! This module provides reusable clap argument structures plus the loaders
//! that turn file and command-line input into formatter types.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::enumeration::EnumDefinition;
use crate::error::{Error, Result};
use crate::formatter::{Formatter, FormatterConfig};
use crate::value::{MAX_SAFE_INTEGER, RawValue};

/// Formatter configuration arguments.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// JSON formatter config (utc_offset_minutes, aliases).
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Date offset in minutes east of UTC; overrides the config file.
    #[arg(long = "utc-offset", value_name = "MINUTES", allow_hyphen_values = true, global = true)]
    pub utc_offset: Option<i32>,
}

impl ConfigArgs {
    /// Load the config file, if any, and apply command-line overrides.
    pub fn formatter_config(&self) -> Result<FormatterConfig> {
        let mut config = match &self.config {
            Some(path) => read_json(path)?,
            None => FormatterConfig::default(),
        };
        if let Some(minutes) = self.utc_offset {
            config.utc_offset_minutes = minutes;
        }
        Ok(config)
    }

    /// Build the formatter described by these arguments.
    pub fn formatter(&self) -> Result<Formatter> {
        self.formatter_config()?.build()
    }
}

/// Logging arguments.
#[derive(Debug, Parser)]
pub struct LogArgs {
    /// Show the handler chosen for each value on stderr.
    #[arg(long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug logging (netrec_fmt=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Enable trace logging (netrec_fmt=trace).
    #[arg(short = 'D', long = "trace", global = true)]
    pub trace: bool,
}

impl LogArgs {
    /// Initialize tracing based on debug/trace flags.
    ///
    /// Note: --verbose is handled by the binary and does not touch the filter.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.trace {
            "netrec_fmt=trace"
        } else if self.debug {
            "netrec_fmt=debug"
        } else {
            "netrec_fmt=warn"
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Parse a command-line value.
///
/// JSON literals (`null`, `true`, `12.5`, `[1, 2]`, `"text"`) map to the
/// matching [`RawValue`]; anything else, including digit strings with leading
/// zeros, is taken as plain text. Integers above 2^53 stay digit strings.
pub fn parse_value(s: &str) -> RawValue {
    if is_wide_integer(s) {
        return RawValue::from(s);
    }
    serde_json::from_str(s).unwrap_or_else(|_| RawValue::from(s))
}

/// All digits, and too large for an `f64` to hold exactly.
fn is_wide_integer(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && !matches!(s.parse::<u64>(), Ok(n) if n <= MAX_SAFE_INTEGER)
}

/// Load an enum definition from a JSON file of the form
/// `{"1": {"name": "Attach"}}`.
pub fn load_enum(path: &Path) -> Result<EnumDefinition> {
    read_json(path)
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Input(format!("{}: {}", path.display(), e).into()).boxed())?;
    serde_json::from_str(&text)
        .map_err(|e| Error::Input(format!("{}: {}", path.display(), e).into()).boxed())
}
