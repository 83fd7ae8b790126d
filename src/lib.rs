//! # actdef
//!
//! Parser and serializer for a small, line-oriented text format describing
//! *records* (named actions or entities) built from *fields* grouped into
//! *sections*.
//!
//! ## What does it look like?
//!
//! ```text
//! user.profile.update    // Updates a profile
//!     username    maxLength="32"
//!     password?
//!     @audit
//!     [reason="manual"] // Why the change was made
//! ```
//!
//! - A record line names `entity.property.action`; the action's prefix decides
//!   its [`Verb`] (`update` is [`Verb::Set`])
//! - Field lines are indented; `?` or `[name="default"]` marks them optional
//! - `name` and `name="value"` tokens after a field are its attributes
//! - `@name` opens a section; fields before any `@` line live in `main`
//! - `// text` is a description
//!
//! See the [`format`] module for the full grammar.
//!
//! ## Quick Start
//!
//! ```rust
//! use actdef::{parse, Verb};
//!
//! let text = "\
//! user.profile.update    // Updates a profile
//!     username    maxLength=\"32\"
//!     password?
//! ";
//!
//! let tree = parse(text).unwrap();
//! let record = tree.get_record("user.profile.update").unwrap();
//! assert_eq!(record.verb(), Some(Verb::Set));
//! assert_eq!(record.main_section().len(), 2);
//!
//! // Serialize back to text
//! let again = tree.serialize();
//! assert_eq!(actdef::parse(&again).unwrap(), tree);
//! ```
//!
//! ### Building a tree in code
//!
//! ```rust
//! use actdef::{Field, Tree};
//!
//! let mut tree = Tree::new();
//! let record = tree.add_record("order", None, Some("create"), None).unwrap();
//! record.add_field(Field::required("sku").unwrap()).unwrap();
//! record
//!     .add_field(Field::optional("qty", Some("1")).unwrap().with_attribute("min", 1))
//!     .unwrap();
//!
//! assert_eq!(
//!     tree.serialize(),
//!     "order.create\n    sku\n    [qty=\"1\"] min=\"1\"\n"
//! );
//! ```
//!
//! ## Errors
//!
//! Construction and parsing fail fast with an [`Error`]: invalid names,
//! duplicate records/sections/fields, and malformed field lines. Parse errors
//! carry the offending line. Serialization never fails.
//!
//! ## Logging
//!
//! The parser emits [`tracing`] events (`debug` per parse, `trace` per line).
//! Install any subscriber to see them.

pub mod error;
mod escape;
pub mod field;
pub mod format;
pub mod map;
pub mod options;
pub mod parser;
pub mod plain;
pub mod record;
pub mod section;
pub mod ser;
pub mod tree;
pub mod verb;

pub use error::{Error, NameKind, Result};
pub use field::{AttributeValue, Field};
pub use map::NamedMap;
pub use options::SerializeOptions;
pub use parser::{parse, parse_field, Parser};
pub use plain::{PlainField, PlainRecord, PlainSection, PlainTree};
pub use record::Record;
pub use section::{Section, MAIN_SECTION};
pub use ser::Serializer;
pub use tree::Tree;
pub use verb::{classify_verb, Verb};

use std::io;

/// Parse definition text into a [`Tree`]. Same as [`parse`].
///
/// # Errors
///
/// Returns the first invalid, duplicate or malformed declaration, located
/// at its line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Tree> {
    parse(s)
}

/// Parse definition text from UTF-8 bytes.
///
/// # Examples
///
/// ```rust
/// let tree = actdef::from_slice(b"ping\n    host").unwrap();
/// assert!(tree.has_record("ping"));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or do not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Tree> {
    let s = std::str::from_utf8(v).map_err(|e| Error::format(e.to_string()))?;
    parse(s)
}

/// Parse definition text from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let tree = actdef::from_reader(Cursor::new("ping\n")).unwrap();
/// assert_eq!(tree.len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Tree>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}

/// Serialize a tree with the default layout.
#[must_use]
pub fn to_string(tree: &Tree) -> String {
    tree.serialize()
}

/// Serialize a tree with custom indentation and comment padding.
#[must_use]
pub fn to_string_with_options(tree: &Tree, options: SerializeOptions) -> String {
    tree.serialize_with_options(&options)
}

/// Serialize a tree into a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn to_writer<W>(writer: W, tree: &Tree) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, tree, SerializeOptions::default())
}

/// Serialize a tree into a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn to_writer_with_options<W>(mut writer: W, tree: &Tree, options: SerializeOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(tree, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
