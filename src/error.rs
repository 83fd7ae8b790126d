//! Error types for parsing, building and serializing definition trees.
//!
//! ## Error Categories
//!
//! - **Validation**: empty names, names containing whitespace, and names
//!   the text form cannot carry
//! - **Duplicate names**: a record, section or field declared twice where
//!   uniqueness is required
//! - **Format**: a field line the parser cannot make sense of
//! - **I/O**: reading or writing failures in the reader/writer entry points
//!
//! Errors raised while parsing are wrapped in [`Error::Line`], which carries
//! the 1-based line number and the raw text of the offending line.
//!
//! ## Examples
//!
//! ```rust
//! use actdef::parse;
//!
//! let err = parse("user.get\nuser.get").unwrap_err();
//! assert!(err.is_duplicate());
//! assert_eq!(err.line(), Some(2));
//! ```

use std::fmt;
use thiserror::Error;

/// What kind of name a validation or duplicate error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    Entity,
    Property,
    Action,
    Record,
    Section,
    Field,
}

impl NameKind {
    /// Lower-case name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NameKind::Entity => "entity",
            NameKind::Property => "property",
            NameKind::Action => "action",
            NameKind::Record => "record",
            NameKind::Section => "section",
            NameKind::Field => "field",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents all errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A name is empty or contains whitespace.
    #[error("Invalid {kind} name {name:?}: {reason}")]
    Validation {
        kind: NameKind,
        name: String,
        reason: &'static str,
    },

    /// A name is already taken within its container.
    #[error("Duplicate {kind} name {name:?}")]
    DuplicateName { kind: NameKind, name: String },

    /// Malformed field line.
    #[error("Format error: {msg}")]
    Format { msg: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Any of the above, located at a line of parser input.
    #[error("Line {line}: {source}\n  | {content}")]
    Line {
        line: usize,
        content: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Creates a validation error for `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actdef::{Error, NameKind};
    ///
    /// let err = Error::validation(NameKind::Field, "a b", "contains whitespace");
    /// assert!(err.to_string().contains("field"));
    /// ```
    pub fn validation(kind: NameKind, name: &str, reason: &'static str) -> Self {
        Error::Validation {
            kind,
            name: name.to_string(),
            reason,
        }
    }

    /// Creates a duplicate-name error for a record, section or field.
    ///
    /// ```rust
    /// use actdef::{Error, NameKind};
    ///
    /// let err = Error::duplicate(NameKind::Field, "id");
    /// assert!(err.is_duplicate());
    /// assert_eq!(err.to_string(), "Duplicate field name \"id\"");
    /// ```
    pub fn duplicate(kind: NameKind, name: &str) -> Self {
        Error::DuplicateName {
            kind,
            name: name.to_string(),
        }
    }

    /// Creates a format error for text the parser cannot read.
    ///
    /// ```rust
    /// use actdef::Error;
    ///
    /// let err = Error::format("field line has no name");
    /// assert!(err.is_format());
    /// assert_eq!(err.line(), None);
    /// ```
    pub fn format<T: fmt::Display>(msg: T) -> Self {
        Error::Format {
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Attaches a line location to this error. An error that is already
    /// located keeps its first location.
    #[must_use]
    pub fn at_line(self, line: usize, content: &str) -> Self {
        match self {
            located @ Error::Line { .. } => located,
            other => Error::Line {
                line,
                content: content.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the innermost error, looking through any line location.
    #[must_use]
    pub fn root(&self) -> &Error {
        match self {
            Error::Line { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the 1-based input line this error was raised on, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Line { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True if the root error is [`Error::Validation`].
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.root(), Error::Validation { .. })
    }

    /// True if the root error is [`Error::DuplicateName`].
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self.root(), Error::DuplicateName { .. })
    }

    /// True if the root error is [`Error::Format`].
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self.root(), Error::Format { .. })
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `name` is non-empty and free of whitespace.
pub(crate) fn validate_name(kind: NameKind, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::validation(kind, name, "name is empty"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::validation(kind, name, "name contains whitespace"));
    }
    Ok(())
}

/// Characters allowed in field and section names.
pub(crate) fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.')
}

/// Checks a field or section name. Beyond [`validate_name`], only letters,
/// digits, `_`, `-` and `.` are accepted, which is exactly what a field or
/// section line reads back as a name.
pub(crate) fn validate_identifier(kind: NameKind, name: &str) -> Result<()> {
    validate_name(kind, name)?;
    if !name.chars().all(is_identifier_char) {
        return Err(Error::validation(
            kind,
            name,
            "name may only contain letters, digits, '_', '-' and '.'",
        ));
    }
    Ok(())
}
