//! Fields: the leaves of a definition tree.
//!
//! A [`Field`] has a name, an optional marker with an optional default value,
//! an ordered set of attributes and a description.
//!
//! ```rust
//! use actdef::Field;
//!
//! let mut port = Field::optional("port", Some("8080")).unwrap();
//! port.set_attribute("min", 1);
//! port.set_attribute("max", 65535);
//! port.set_description(Some("Port number"));
//!
//! assert_eq!(
//!     port.serialize(),
//!     r#"[port="8080"] min="1" max="65535" // Port number"#
//! );
//! ```

use crate::error::{validate_identifier, NameKind, Result};
use crate::map::NamedMap;

/// A value that can be stored as a field attribute.
///
/// `None` marks a flag attribute, serialized as the bare attribute name.
/// Numbers are stored in their string form.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AttributeValue(pub Option<String>);

impl AttributeValue {
    /// A flag attribute with no value.
    #[must_use]
    pub const fn flag() -> Self {
        AttributeValue(None)
    }

    /// The stored value, `None` for a flag.
    #[must_use]
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue(Some(value.to_string()))
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue(Some(value))
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue(Some(value.clone()))
    }
}

impl From<Option<&str>> for AttributeValue {
    fn from(value: Option<&str>) -> Self {
        AttributeValue(value.map(str::to_string))
    }
}

impl From<Option<String>> for AttributeValue {
    fn from(value: Option<String>) -> Self {
        AttributeValue(value)
    }
}

macro_rules! attribute_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    AttributeValue(Some(value.to_string()))
                }
            }
        )*
    };
}

attribute_value_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// A named, attributed field owned by a [`crate::Section`].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    name: String,
    is_optional: bool,
    default_value: Option<String>,
    attributes: NamedMap<Option<String>>,
    description: Option<String>,
}

impl Field {
    /// Creates a required field.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is empty or holds anything other
    /// than letters, digits, `_`, `-` and `.`.
    pub fn required(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(NameKind::Field, &name)?;
        Ok(Field {
            name,
            is_optional: false,
            default_value: None,
            attributes: NamedMap::new(),
            description: None,
        })
    }

    /// Creates an optional field with an optional default value.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is empty or holds anything other
    /// than letters, digits, `_`, `-` and `.`.
    pub fn optional(name: impl Into<String>, default_value: Option<&str>) -> Result<Self> {
        let mut field = Self::required(name)?;
        field.is_optional = true;
        field.default_value = default_value.map(str::to_string);
        Ok(field)
    }

    /// Builder form of [`Field::set_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`Field::set_description`].
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.set_description(Some(description));
        self
    }

    /// The field's name, fixed at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for `name?` and `[name="default"]` fields.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Marks the field optional or required. Making a field required drops
    /// its default value.
    pub fn set_optional(&mut self, optional: bool) {
        self.is_optional = optional;
        if !optional {
            self.default_value = None;
        }
    }

    /// The default value. Only optional fields carry one.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Sets the default value. Setting a default marks the field optional.
    pub fn set_default_value(&mut self, value: Option<&str>) {
        if value.is_some() {
            self.is_optional = true;
        }
        self.default_value = value.map(str::to_string);
    }

    /// The `//` comment, decoded.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets or clears the description.
    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }

    /// Inserts or overwrites an attribute.
    ///
    /// ```rust
    /// use actdef::Field;
    ///
    /// let mut field = Field::required("name").unwrap();
    /// field.set_attribute("maxLength", 32);
    /// field.set_attribute("pattern", "[a-z]+");
    /// assert_eq!(field.get_attribute("maxLength"), Some("32"));
    /// ```
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(name, value.into().into_inner());
    }

    /// Inserts or overwrites a flag attribute, one without a value.
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.attributes.insert(name, None);
    }

    /// Returns the attribute's value.
    ///
    /// Flag attributes and attributes with an empty value both return `None`,
    /// as do absent ones; use [`Field::has_attribute`] to tell them apart.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.is_empty())
    }

    /// True if the attribute is present, flag or not.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Removes an attribute, returning whether it was present.
    pub fn delete_attribute(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    /// Iterates attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Number of attributes, flags included.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Renders this field as a single line without indentation.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut serializer = crate::ser::Serializer::new(crate::SerializeOptions::default());
        serializer.write_field(self);
        serializer.into_inner()
    }
}
