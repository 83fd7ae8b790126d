//! Sections: named groups of fields inside a record.
//!
//! Every record owns a section called [`MAIN_SECTION`]. It is the default
//! target for field operations and is written without an `@` header.

use crate::error::{validate_identifier, NameKind, Result};
use crate::field::Field;
use crate::map::NamedMap;

/// Name of the implicit section every record carries.
pub const MAIN_SECTION: &str = "main";

/// An insertion-ordered collection of uniquely named fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    name: String,
    fields: NamedMap<Field>,
}

impl Section {
    /// Creates an empty section.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is empty or holds anything other
    /// than letters, digits, `_`, `-` and `.`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(NameKind::Section, &name)?;
        Ok(Section {
            name,
            fields: NamedMap::new(),
        })
    }

    pub(crate) fn main() -> Self {
        Section {
            name: MAIN_SECTION.to_string(),
            fields: NamedMap::new(),
        }
    }

    /// The section's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the implicit `main` section.
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.name == MAIN_SECTION
    }

    /// Adds a field, failing if one with the same name already exists.
    ///
    /// ```rust
    /// use actdef::{Field, Section};
    ///
    /// let mut section = Section::new("auth").unwrap();
    /// section.add_field(Field::required("token").unwrap()).unwrap();
    /// let err = section.add_field(Field::required("token").unwrap()).unwrap_err();
    /// assert!(err.is_duplicate());
    /// ```
    pub fn add_field(&mut self, field: Field) -> Result<&mut Field> {
        let name = field.name().to_string();
        self.fields.insert_new(name, field, NameKind::Field)
    }

    /// Inserts a field, replacing any existing field of the same name.
    pub fn set_field(&mut self, field: Field) -> Option<Field> {
        let name = field.name().to_string();
        self.fields.insert(name, field)
    }

    /// Looks a field up by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains(name)
    }

    /// Removes a field, keeping the order of the others.
    pub fn delete_field(&mut self, name: &str) -> Option<Field> {
        self.fields.remove(name)
    }

    /// Iterates fields in insertion order.
    pub fn list_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.values()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the section with `indent` spaces before every line.
    ///
    /// The main section emits only its field lines; other sections start
    /// with an `@name` header. Every line ends with a newline.
    #[must_use]
    pub fn serialize(&self, indent: usize) -> String {
        let options = crate::SerializeOptions::new().with_indent(indent);
        let mut serializer = crate::ser::Serializer::new(options);
        serializer.write_section(self);
        serializer.into_inner()
    }
}
