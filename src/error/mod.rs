//! Error types for netrec-fmt.
//!
//! Formatting itself is total: handlers never return errors and degrade to a
//! fallback string instead. The types here cover the fallible edges of the
//! crate:
//!
//! - [`Error`] - The main error type (identifier parsing, configuration, CLI input)
//! - [`IdentifierErrorKind`] - Why a packed 64-bit identifier could not be read
//!
//! # Error Handling
//!
//! Errors are boxed for efficiency: `Result<T> = Result<T, Box<Error>>`.
//!
//! ```rust
//! use netrec_fmt::{Error, IdentifierErrorKind, RawValue};
//!
//! let err = RawValue::from("12x4").parse_identifier().unwrap_err();
//! match &*err {
//!     Error::InvalidIdentifier { kind, .. } => {
//!         assert_eq!(*kind, IdentifierErrorKind::InvalidDigit);
//!     }
//!     other => panic!("unexpected error: {}", other),
//! }
//! ```

// Pattern for degrading a detailed error inside a handler:
//
// tracing::debug!(
//     target: "netrec_fmt::format",
//     { field_type = ctx.field_type, error = %e },
//     "identifier unreadable, falling back to general"
// );
// return general(value);

/// Result type alias using the library's boxed Error type.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Reason a raw value could not be read as a packed 64-bit identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierErrorKind {
    /// The value is null or an empty string.
    Empty,
    /// The text contains a character other than an ASCII decimal digit.
    InvalidDigit,
    /// The decimal text does not fit in 64 bits.
    Overflow,
    /// The number is negative, fractional, non-finite, or above 2^53.
    NotInteger,
    /// The value is a list or boolean.
    WrongType,
}

impl std::fmt::Display for IdentifierErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty value"),
            Self::InvalidDigit => write!(f, "invalid decimal digit"),
            Self::Overflow => write!(f, "value exceeds 64 bits"),
            Self::NotInteger => write!(f, "not an exact non-negative integer"),
            Self::WrongType => write!(f, "not a number or digit string"),
        }
    }
}

/// The main error type for all netrec-fmt operations.
///
/// # Example
///
/// ```
/// use netrec_fmt::Error;
///
/// fn is_user_input_error(error: &Error) -> bool {
///     matches!(error, Error::Input(_) | Error::UnknownHandler(_))
/// }
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A packed identifier could not be read as an unsigned 64-bit integer.
    #[error("invalid identifier '{input}': {kind}")]
    InvalidIdentifier {
        input: Box<str>,
        kind: IdentifierErrorKind,
    },

    /// A handler name did not match any builtin handler.
    #[error("unknown handler: {0}")]
    UnknownHandler(Box<str>),

    /// Invalid formatter configuration.
    #[error("configuration error: {0}")]
    Config(Box<str>),

    /// Unreadable command-line input (value, case file, enum file).
    #[error("input error: {0}")]
    Input(Box<str>),
}

impl Error {
    /// Box this error (convenience for constructing boxed errors).
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub(crate) fn identifier(input: impl Into<Box<str>>, kind: IdentifierErrorKind) -> Box<Self> {
        Error::InvalidIdentifier {
            input: input.into(),
            kind,
        }
        .boxed()
    }
}
