//! Plain, serde-friendly mirror of a [`Tree`].
//!
//! [`PlainTree`] and its children hold exactly what the model exposes,
//! including the derived `fullName` and `verb`, so a tree can be handed to any
//! serde format (JSON for a web page, for instance) and read back.
//!
//! ```rust
//! use actdef::parse;
//!
//! let tree = parse("order.create // New order\n    [qty=\"1\"] min=1").unwrap();
//! let plain = tree.to_plain_object();
//!
//! let record = &plain.records["order.create"];
//! assert_eq!(record.full_name, "order.create");
//! assert_eq!(record.sections["main"].fields["qty"].default_value.as_deref(), Some("1"));
//! ```

use crate::error::{Error, Result};
use crate::field::{AttributeValue, Field};
use crate::record::Record;
use crate::section::{Section, MAIN_SECTION};
use crate::tree::Tree;
use crate::verb::Verb;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Plain form of a [`Tree`]: records keyed by full name.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PlainTree {
    pub records: IndexMap<String, PlainRecord>,
}

/// Plain form of a [`Record`]. `full_name` and `verb` are derived and
/// ignored when rebuilding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainRecord {
    #[serde(default)]
    pub full_name: String,
    pub entity_name: String,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub action_name: Option<String>,
    #[serde(default)]
    pub verb: Option<Verb>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sections: IndexMap<String, PlainSection>,
}

/// Plain form of a [`Section`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlainSection {
    pub name: String,
    #[serde(default)]
    pub fields: IndexMap<String, PlainField>,
}

/// Plain form of a [`Field`]. A `None` attribute value is a flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainField {
    pub name: String,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub attributes: IndexMap<String, Option<String>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<&Field> for PlainField {
    fn from(field: &Field) -> Self {
        PlainField {
            name: field.name().to_string(),
            is_optional: field.is_optional(),
            default_value: field.default_value().map(str::to_string),
            attributes: field
                .attributes()
                .map(|(name, value)| (name.to_string(), value.map(str::to_string)))
                .collect(),
            description: field.description().map(str::to_string),
        }
    }
}

impl From<&Section> for PlainSection {
    fn from(section: &Section) -> Self {
        PlainSection {
            name: section.name().to_string(),
            fields: section
                .list_fields()
                .map(|field| (field.name().to_string(), PlainField::from(field)))
                .collect(),
        }
    }
}

impl From<&Record> for PlainRecord {
    fn from(record: &Record) -> Self {
        PlainRecord {
            full_name: record.full_name(),
            entity_name: record.entity_name().to_string(),
            property_name: record.property_name().map(str::to_string),
            action_name: record.action_name().map(str::to_string),
            verb: record.verb(),
            description: record.description().map(str::to_string),
            sections: record
                .list_sections()
                .map(|section| (section.name().to_string(), PlainSection::from(section)))
                .collect(),
        }
    }
}

impl TryFrom<PlainField> for Field {
    type Error = Error;

    fn try_from(plain: PlainField) -> Result<Self> {
        let mut field = if plain.is_optional {
            Field::optional(plain.name, plain.default_value.as_deref())?
        } else {
            Field::required(plain.name)?
        };
        for (name, value) in plain.attributes {
            field.set_attribute(name, AttributeValue(value));
        }
        field.set_description(plain.description.as_deref());
        Ok(field)
    }
}

impl TryFrom<PlainRecord> for Record {
    type Error = Error;

    /// Rebuilds a record. `full_name` and `verb` are ignored and derived
    /// again from the name parts.
    fn try_from(plain: PlainRecord) -> Result<Self> {
        let mut record = Record::new(
            &plain.entity_name,
            plain.property_name.as_deref(),
            plain.action_name.as_deref(),
        )?;
        record.set_description(plain.description.as_deref());

        for (_, section) in plain.sections {
            if section.name != MAIN_SECTION {
                record.add_section(&section.name)?;
            }
            for (_, field) in section.fields {
                record.add_field_to(&section.name, Field::try_from(field)?)?;
            }
        }
        Ok(record)
    }
}

impl Tree {
    /// Builds the plain mirror of this tree.
    #[must_use]
    pub fn to_plain_object(&self) -> PlainTree {
        PlainTree {
            records: self
                .list_records()
                .map(|record| (record.full_name(), PlainRecord::from(record)))
                .collect(),
        }
    }

    /// Rebuilds a tree from its plain mirror, re-checking every name and
    /// rejecting duplicates.
    pub fn from_plain_object(plain: PlainTree) -> Result<Tree> {
        let mut tree = Tree::new();
        for (_, record) in plain.records {
            tree.insert_record(Record::try_from(record)?)?;
        }
        Ok(tree)
    }
}

impl TryFrom<PlainTree> for Tree {
    type Error = Error;

    fn try_from(plain: PlainTree) -> Result<Self> {
        Tree::from_plain_object(plain)
    }
}

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_plain_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let plain = PlainTree::deserialize(deserializer)?;
        Tree::from_plain_object(plain).map_err(serde::de::Error::custom)
    }
}
