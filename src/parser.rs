//! Line-oriented parsing of definition text into a [`Tree`].
//!
//! ## Overview
//!
//! Input is consumed one line at a time, in a single pass:
//!
//! - **Blank lines** and lines starting with `//` are skipped
//! - **Record lines** start at column 0: `entity.property.action // description`
//! - **Section lines** start with `@` (after optional indentation)
//! - **Field lines** are everything else and belong to the open record
//!
//! Section and field lines that appear before any record are ignored.
//!
//! ## Field lines
//!
//! ```text
//! username maxLength="32"            required field with an attribute
//! nickname? // shown publicly         optional field, no default
//! [port="8080"] min=1 max='65535'     optional field with a default
//! ```
//!
//! ## Errors
//!
//! The first failure aborts the parse and is returned wrapped in
//! [`Error::Line`], naming the line number and its content.
//!
//! ```rust
//! use actdef::parse;
//!
//! let err = parse("user.get\n    [id=\"1\"").unwrap_err();
//! assert!(err.is_format());
//! assert_eq!(err.line(), Some(2));
//! ```

use crate::error::{is_identifier_char, Error, Result};
use crate::escape::{unescape_description, unescape_value};
use crate::field::{AttributeValue, Field};
use crate::record::Record;
use crate::section::MAIN_SECTION;
use crate::tree::Tree;
use std::str::FromStr;
use tracing::{debug, trace};

/// Parses definition text into a tree.
///
/// # Errors
///
/// Fails on duplicate record, section or field names, invalid names,
/// malformed field lines and unterminated brackets or quotes.
pub fn parse(text: &str) -> Result<Tree> {
    Parser::new(text).parse()
}

impl FromStr for Tree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Record,
    Section,
    Field,
}

fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with("//") {
        LineKind::Comment
    } else if trimmed.starts_with('@') {
        LineKind::Section
    } else if line.starts_with(char::is_whitespace) {
        LineKind::Field
    } else {
        LineKind::Record
    }
}

/// Splits `text` at the first `//` into the part before it and a decoded,
/// trimmed description. An empty description counts as absent.
fn split_description(text: &str) -> (&str, Option<String>) {
    match text.find("//") {
        Some(index) => (&text[..index], description(&text[index + 2..])),
        None => (text, None),
    }
}

fn description(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(unescape_description(raw))
    }
}

/// Parser state across lines.
pub struct Parser<'a> {
    input: &'a str,
    tree: Tree,
    current_record: Option<String>,
    current_section: String,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input`. Nothing is read until [`Parser::parse`].
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            tree: Tree::new(),
            current_record: None,
            current_section: MAIN_SECTION.to_string(),
        }
    }

    /// Consumes every line and returns the finished tree.
    pub fn parse(mut self) -> Result<Tree> {
        let input = self.input;
        for (index, line) in input.lines().enumerate() {
            let number = index + 1;
            if let Err(error) = self.parse_line(number, line) {
                debug!(line = number, %error, "parse failed");
                return Err(error.at_line(number, line));
            }
        }
        debug!(
            "Parsed {} record{}",
            self.tree.len(),
            if self.tree.len() == 1 { "" } else { "s" }
        );
        Ok(self.tree)
    }

    fn parse_line(&mut self, number: usize, line: &str) -> Result<()> {
        let kind = classify(line);
        trace!(line = number, ?kind, "classified");
        match kind {
            LineKind::Blank | LineKind::Comment => Ok(()),
            LineKind::Record => self.parse_record_line(line),
            LineKind::Section => self.parse_section_line(line),
            LineKind::Field => self.parse_field_line(line),
        }
    }

    fn current_record_mut(&mut self) -> Option<&mut Record> {
        let name = self.current_record.as_deref()?;
        self.tree.get_record_mut(name)
    }

    fn parse_record_line(&mut self, line: &str) -> Result<()> {
        let (head, description) = split_description(line);
        let path = head.split_whitespace().next().unwrap_or_default();

        let mut record = Record::from_path(path)?;
        record.set_description(description.as_deref());
        let full_name = record.full_name();
        self.tree.insert_record(record)?;

        self.current_record = Some(full_name);
        self.current_section = MAIN_SECTION.to_string();
        Ok(())
    }

    fn parse_section_line(&mut self, line: &str) -> Result<()> {
        let rest = line.trim_start().trim_start_matches('@');
        let end = rest.find(|ch: char| !is_identifier_char(ch)).unwrap_or(rest.len());
        let name = &rest[..end];

        let Some(record) = self.current_record_mut() else {
            trace!(section = name, "section outside of a record ignored");
            return Ok(());
        };
        record.add_section(name)?;
        self.current_section = name.to_string();
        Ok(())
    }

    fn parse_field_line(&mut self, line: &str) -> Result<()> {
        if self.current_record.is_none() {
            trace!("field outside of a record ignored");
            return Ok(());
        }
        let field = parse_field(line.trim())?;
        let section = self.current_section.clone();
        match self.current_record_mut() {
            Some(record) => record.add_field_to(&section, field).map(|_| ()),
            None => Ok(()),
        }
    }
}

/// Parses a single field line (without indentation).
///
/// ```rust
/// use actdef::parse_field;
///
/// let field = parse_field(r#"[port="8080"] min="1" max="65535" // Port number"#).unwrap();
/// assert_eq!(field.name(), "port");
/// assert_eq!(field.default_value(), Some("8080"));
/// assert_eq!(field.get_attribute("max"), Some("65535"));
/// assert_eq!(field.description(), Some("Port number"));
/// ```
///
/// # Errors
///
/// Returns a format error when no field name can be extracted, when a
/// bracketed field is not closed, or when a quoted value is unterminated.
pub fn parse_field(line: &str) -> Result<Field> {
    let mut scanner = Scanner::new(line);

    let mut field = if scanner.peek_char() == Some('[') {
        scanner.next_char();
        scanner.skip_whitespace();
        let (name, default) = scanner.read_token(true)?;
        scanner.skip_whitespace();
        if scanner.next_char() != Some(']') {
            return Err(Error::format("unterminated bracket: expected ']'"));
        }
        Field::optional(name, default.as_deref())?
    } else {
        let name = scanner.read_while(is_identifier_char);
        if name.is_empty() {
            return Err(Error::format("field line has no name"));
        }
        if scanner.peek_char() == Some('?') {
            scanner.next_char();
            Field::optional(name, None)?
        } else {
            Field::required(name)?
        }
    };

    let (attributes, description) = scanner.read_tail()?;
    for (name, value) in attributes {
        field.set_attribute(name, AttributeValue(value));
    }
    field.set_description(description.as_deref());
    Ok(field)
}

type Attribute = (String, Option<String>);

/// Character cursor over a single field line.
struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn read_while<F: Fn(char) -> bool>(&mut self, accept: F) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if !accept(ch) {
                break;
            }
            self.next_char();
        }
        &self.input[start..self.position]
    }

    /// Reads `name` or `name=value`. Inside brackets, bare names and values
    /// stop at `]`.
    fn read_token(&mut self, in_bracket: bool) -> Result<Attribute> {
        let name = self.read_while(|ch| !ch.is_whitespace() && ch != '=' && !(in_bracket && ch == ']'));
        if name.is_empty() {
            return Err(Error::format(format!(
                "expected a name, found {:?}",
                self.rest()
            )));
        }

        if self.peek_char() != Some('=') {
            return Ok((name.to_string(), None));
        }
        self.next_char();

        let value = match self.peek_char() {
            Some(quote @ ('"' | '\'')) => self.read_quoted(quote)?,
            _ => self
                .read_while(|ch| !ch.is_whitespace() && !(in_bracket && ch == ']'))
                .to_string(),
        };
        Ok((name.to_string(), Some(value)))
    }

    fn read_quoted(&mut self, quote: char) -> Result<String> {
        self.next_char(); // consume opening quote
        let start = self.position;
        while let Some(ch) = self.next_char() {
            if ch == '\\' {
                self.next_char();
            } else if ch == quote {
                let raw = &self.input[start..self.position - quote.len_utf8()];
                return Ok(unescape_value(raw));
            }
        }
        Err(Error::format(format!("unterminated {quote} quoted value")))
    }

    /// Reads attribute tokens up to the end of the line or a `//` comment.
    fn read_tail(&mut self) -> Result<(Vec<Attribute>, Option<String>)> {
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() {
                return Ok((attributes, None));
            }
            if let Some(comment) = self.rest().strip_prefix("//") {
                return Ok((attributes, description(comment)));
            }
            attributes.push(self.read_token(false)?);
        }
    }
}
