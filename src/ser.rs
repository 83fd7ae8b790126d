//! Text serialization.
//!
//! The [`Serializer`] writes fields, sections, records and whole trees into
//! a single output buffer. The `serialize` methods on the model types are thin
//! wrappers around it.
//!
//! ## Layout
//!
//! - A record starts with its full name, followed by `// description` when it
//!   has one.
//! - Section headers (`@name`) and field lines are indented by
//!   [`SerializeOptions::indent`] spaces. The main section has no header.
//! - Records are separated by a blank line.
//!
//! ```rust
//! use actdef::{Serializer, SerializeOptions, Tree, Field};
//!
//! let mut tree = Tree::new();
//! tree.add_record("ping", None, None, None).unwrap()
//!     .add_field(Field::required("host").unwrap()).unwrap();
//!
//! let mut serializer = Serializer::new(SerializeOptions::default());
//! serializer.write_tree(&tree);
//! assert_eq!(serializer.into_inner(), "ping\n    host\n");
//! ```

use crate::escape::{escape_description, escape_value};
use crate::{Field, Record, Section, SerializeOptions, Tree};

/// Writes definition trees into text.
pub struct Serializer {
    output: String,
    options: SerializeOptions,
}

impl Serializer {
    /// Creates a serializer with an empty output buffer.
    ///
    /// An indent of 0 is written as 1, since an unindented field line would
    /// read back as a record.
    pub fn new(options: SerializeOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Consumes the serializer and returns everything written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        for _ in 0..self.options.indent.max(1) {
            self.output.push(' ');
        }
    }

    fn write_quoted(&mut self, value: &str) {
        self.output.push('"');
        self.output.push_str(&escape_value(value));
        self.output.push('"');
    }

    /// Writes one field line, without indentation or newline.
    pub fn write_field(&mut self, field: &Field) {
        let start = self.output.len();

        match (field.is_optional(), field.default_value()) {
            (true, Some(default)) => {
                self.output.push('[');
                self.output.push_str(field.name());
                self.output.push('=');
                self.write_quoted(default);
                self.output.push(']');
            }
            (true, None) => {
                self.output.push_str(field.name());
                self.output.push('?');
            }
            (false, _) => self.output.push_str(field.name()),
        }

        for (name, value) in field.attributes() {
            self.output.push(' ');
            self.output.push_str(name);
            if let Some(value) = value {
                self.output.push('=');
                self.write_quoted(value);
            }
        }

        if let Some(description) = field.description() {
            self.output.push_str(" // ");
            self.output.push_str(&escape_description(description));
        }

        let kept = self.output[start..].trim_end().len();
        self.output.truncate(start + kept);
    }

    /// Writes a section: its `@name` header (skipped for `main`) followed by
    /// one indented line per field.
    pub fn write_section(&mut self, section: &Section) {
        if !section.is_main() {
            self.write_indent();
            self.output.push('@');
            self.output.push_str(section.name());
            self.output.push('\n');
        }
        for field in section.list_fields() {
            self.write_indent();
            self.write_field(field);
            self.output.push('\n');
        }
    }

    /// Writes the record's header line and then each of its sections.
    pub fn write_record(&mut self, record: &Record) {
        self.output.push_str(&record.full_name());
        if let Some(description) = record.description() {
            for _ in 0..self.options.comment_padding {
                self.output.push(' ');
            }
            self.output.push_str("// ");
            self.output.push_str(&escape_description(description));
            let kept = self.output.trim_end().len();
            self.output.truncate(kept);
        }
        self.output.push('\n');

        for section in record.list_sections() {
            self.write_section(section);
        }
    }

    /// Writes every record, separated by blank lines.
    pub fn write_tree(&mut self, tree: &Tree) {
        for (index, record) in tree.list_records().enumerate() {
            if index > 0 {
                self.output.push('\n');
            }
            self.write_record(record);
        }
    }
}
