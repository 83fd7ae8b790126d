//! Records: named actions or entities made of sections.
//!
//! A record is declared by a dot-separated path. The first segment is the
//! entity, the last (when there are at least two) is the action, and
//! everything in between is the property path.
//!
//! ```rust
//! use actdef::{Record, Verb};
//!
//! let record = Record::new("user", Some("profile"), Some("update")).unwrap();
//! assert_eq!(record.full_name(), "user.profile.update");
//! assert_eq!(record.verb(), Some(Verb::Set));
//! assert!(record.has_section("main"));
//! ```

use crate::error::{validate_name, Error, NameKind, Result};
use crate::field::Field;
use crate::map::NamedMap;
use crate::section::{Section, MAIN_SECTION};
use crate::verb::{classify_verb, Verb};

/// A named record: entity, optional property path and action, plus its
/// sections. The verb is derived from the action name.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    entity_name: String,
    property_name: Option<String>,
    action_name: Option<String>,
    sections: NamedMap<Section>,
    description: Option<String>,
}

impl Record {
    /// Creates a record holding only an empty main section.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any name is empty, contains whitespace
    /// or `//`, if the entity or action contains a dot, if the property path
    /// has an empty dot segment, or if a property path is given without an
    /// action.
    ///
    /// ```rust
    /// use actdef::Record;
    ///
    /// assert!(Record::new("user", Some("profile"), None).unwrap_err().is_validation());
    /// assert!(Record::new("user.profile", None, None).unwrap_err().is_validation());
    /// ```
    pub fn new(entity_name: &str, property_name: Option<&str>, action_name: Option<&str>) -> Result<Self> {
        validate_segment(NameKind::Entity, entity_name)?;
        if entity_name.starts_with('@') {
            return Err(Error::validation(
                NameKind::Entity,
                entity_name,
                "name starts with '@'",
            ));
        }
        if let Some(property) = property_name {
            validate_path_part(NameKind::Property, property)?;
            if property.split('.').any(str::is_empty) {
                return Err(Error::validation(
                    NameKind::Property,
                    property,
                    "empty path segment",
                ));
            }
            if action_name.is_none() {
                return Err(Error::validation(
                    NameKind::Property,
                    property,
                    "property path without an action",
                ));
            }
        }
        if let Some(action) = action_name {
            validate_segment(NameKind::Action, action)?;
        }

        let mut sections = NamedMap::new();
        sections.insert(MAIN_SECTION, Section::main());

        Ok(Record {
            entity_name: entity_name.to_string(),
            property_name: property_name.map(str::to_string),
            action_name: action_name.map(str::to_string),
            sections,
            description: None,
        })
    }

    /// Creates a record from its dotted full name.
    ///
    /// ```rust
    /// use actdef::Record;
    ///
    /// let record = Record::from_path("shop.cart.item.add").unwrap();
    /// assert_eq!(record.entity_name(), "shop");
    /// assert_eq!(record.property_name(), Some("cart.item"));
    /// assert_eq!(record.action_name(), Some("add"));
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('.').collect();
        match segments.as_slice() {
            [entity] => Self::new(entity, None, None),
            [entity, action] => Self::new(entity, None, Some(*action)),
            [entity, middle @ .., action] => {
                let property = middle.join(".");
                Self::new(entity, Some(property.as_str()), Some(*action))
            }
            [] => Err(Error::validation(NameKind::Entity, path, "name is empty")),
        }
    }

    /// Builder form of [`Record::set_description`].
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.set_description(Some(description));
        self
    }

    /// The first segment of the full name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Segments between the entity and the action, joined with dots.
    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        self.property_name.as_deref()
    }

    /// The last segment, when the full name has more than one.
    #[must_use]
    pub fn action_name(&self) -> Option<&str> {
        self.action_name.as_deref()
    }

    /// The verb derived from the action name.
    #[must_use]
    pub fn verb(&self) -> Option<Verb> {
        classify_verb(self.action_name())
    }

    /// The record's key within its tree: entity, property and action joined
    /// with dots.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut name = self.entity_name.clone();
        for part in [&self.property_name, &self.action_name].into_iter().flatten() {
            name.push('.');
            name.push_str(part);
        }
        name
    }

    /// The `//` comment on the record line, decoded.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets or clears the description.
    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }

    /// Declares a new, empty section.
    ///
    /// # Errors
    ///
    /// Fails if the name is invalid or the record already has a section of
    /// that name (including `main`).
    pub fn add_section(&mut self, name: &str) -> Result<&mut Section> {
        let section = Section::new(name)?;
        self.sections.insert_new(name, section, NameKind::Section)
    }

    /// Inserts a section, replacing any section of the same name.
    pub fn set_section(&mut self, section: Section) -> Option<Section> {
        let name = section.name().to_string();
        self.sections.insert(name, section)
    }

    /// Looks a section up by name.
    #[must_use]
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn get_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains(name)
    }

    /// Removes a named section. The main section cannot be removed; asking
    /// for it returns `None` and leaves the record unchanged.
    pub fn delete_section(&mut self, name: &str) -> Option<Section> {
        if name == MAIN_SECTION {
            return None;
        }
        self.sections.remove(name)
    }

    /// Iterates sections in declaration order, starting with `main`.
    pub fn list_sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.values()
    }

    /// The always-present main section.
    #[must_use]
    pub fn main_section(&self) -> &Section {
        self.sections
            .get(MAIN_SECTION)
            .unwrap_or_else(|| unreachable!("record without a main section"))
    }

    /// Adds a field to the main section.
    pub fn add_field(&mut self, field: Field) -> Result<&mut Field> {
        self.add_field_to(MAIN_SECTION, field)
    }

    /// Adds a field to the named section, declaring the section first if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Fails if the section name is invalid or the section already holds a
    /// field of that name.
    pub fn add_field_to(&mut self, section: &str, field: Field) -> Result<&mut Field> {
        self.section_or_insert(section)?.add_field(field)
    }

    /// Sets a field in the main section, replacing any existing one.
    pub fn set_field(&mut self, field: Field) -> Option<Field> {
        self.sections
            .get_mut(MAIN_SECTION)
            .and_then(|section| section.set_field(field))
    }

    /// Sets a field in the named section, declaring the section if needed.
    pub fn set_field_in(&mut self, section: &str, field: Field) -> Result<Option<Field>> {
        Ok(self.section_or_insert(section)?.set_field(field))
    }

    /// Looks a field up in the named section.
    #[must_use]
    pub fn get_field(&self, section: &str, name: &str) -> Option<&Field> {
        self.sections.get(section)?.get_field(name)
    }

    fn section_or_insert(&mut self, name: &str) -> Result<&mut Section> {
        self.sections.get_or_insert_with(name, || Section::new(name))
    }

    /// Renders the header line followed by every section, with defaults.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.serialize_with_options(&crate::SerializeOptions::default())
    }

    /// Like [`Record::serialize`] with custom layout options.
    #[must_use]
    pub fn serialize_with_options(&self, options: &crate::SerializeOptions) -> String {
        let mut serializer = crate::ser::Serializer::new(options.clone());
        serializer.write_record(self);
        serializer.into_inner()
    }
}

/// Checks one part of a full name. A `//` would start a comment on the
/// record line.
fn validate_path_part(kind: NameKind, name: &str) -> Result<()> {
    validate_name(kind, name)?;
    if name.contains("//") {
        return Err(Error::validation(kind, name, "name contains '//'"));
    }
    Ok(())
}

/// Checks a single dot segment: the entity or the action.
fn validate_segment(kind: NameKind, name: &str) -> Result<()> {
    validate_path_part(kind, name)?;
    if name.contains('.') {
        return Err(Error::validation(kind, name, "name contains a dot"));
    }
    Ok(())
}
