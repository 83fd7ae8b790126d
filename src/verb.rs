//! Verb classification for record action names.
//!
//! A record's [`Verb`] is never stored independently: it is derived from the
//! action name every time it is asked for.
//!
//! ```rust
//! use actdef::{classify_verb, Verb};
//!
//! assert_eq!(classify_verb(Some("getUser")), Some(Verb::Get));
//! assert_eq!(classify_verb(Some("listAll")), Some(Verb::List));
//! assert_eq!(classify_verb(Some("frobnicate")), Some(Verb::Check));
//! assert_eq!(classify_verb(None), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The canonical operation category of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Set,
    Add,
    Delete,
    List,
    Check,
}

impl Verb {
    /// Upper-case name, as used in the plain object form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Set => "SET",
            Verb::Add => "ADD",
            Verb::Delete => "DELETE",
            Verb::List => "LIST",
            Verb::Check => "CHECK",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "SET" => Ok(Verb::Set),
            "ADD" => Ok(Verb::Add),
            "DELETE" => Ok(Verb::Delete),
            "LIST" => Ok(Verb::List),
            "CHECK" => Ok(Verb::Check),
            _ => Err(crate::Error::format(format!("unknown verb {s:?}"))),
        }
    }
}

// Consulted after the primary rules, before falling back to CHECK.
const SYNONYMS: &[(&str, Verb)] = &[
    ("update", Verb::Set),
    ("modify", Verb::Set),
    ("change", Verb::Set),
    ("edit", Verb::Set),
    ("put", Verb::Set),
    ("enable", Verb::Set),
    ("disable", Verb::Set),
    ("create", Verb::Add),
    ("insert", Verb::Add),
    ("new", Verb::Add),
    ("register", Verb::Add),
    ("append", Verb::Add),
    ("remove", Verb::Delete),
    ("del", Verb::Delete),
    ("drop", Verb::Delete),
    ("clear", Verb::Delete),
    ("fetch", Verb::Get),
    ("read", Verb::Get),
    ("find", Verb::Get),
    ("load", Verb::Get),
    ("show", Verb::Get),
    ("is", Verb::Check),
    ("has", Verb::Check),
    ("validate", Verb::Check),
    ("verify", Verb::Check),
];

/// Derives the verb category from a free-form action name.
///
/// Rules are checked in order and the first match wins: empty or missing
/// names have no verb; the prefixes `get`, `set`, `add` and `delete` map to
/// their verbs; any name containing `list` (in any case) is [`Verb::List`];
/// the prefix `check` is [`Verb::Check`]. Common synonyms such as `update` or
/// `create` are tried next. Anything else is classified as [`Verb::Check`].
#[must_use]
pub fn classify_verb(action_name: Option<&str>) -> Option<Verb> {
    let name = match action_name {
        Some(name) if !name.is_empty() => name,
        _ => return None,
    };

    let verb = if name.starts_with("get") {
        Verb::Get
    } else if name.starts_with("set") {
        Verb::Set
    } else if name.starts_with("add") {
        Verb::Add
    } else if name.starts_with("delete") {
        Verb::Delete
    } else if name.to_lowercase().contains("list") {
        Verb::List
    } else if name.starts_with("check") {
        Verb::Check
    } else {
        SYNONYMS
            .iter()
            .find(|(prefix, _)| name.starts_with(prefix))
            .map_or(Verb::Check, |(_, verb)| *verb)
    };

    Some(verb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_rules() {
        assert_eq!(classify_verb(Some("getUser")), Some(Verb::Get));
        assert_eq!(classify_verb(Some("setName")), Some(Verb::Set));
        assert_eq!(classify_verb(Some("addItem")), Some(Verb::Add));
        assert_eq!(classify_verb(Some("deleteAll")), Some(Verb::Delete));
        assert_eq!(classify_verb(Some("listAll")), Some(Verb::List));
        assert_eq!(classify_verb(Some("checkHealth")), Some(Verb::Check));
    }

    #[test]
    fn test_rule_order() {
        // Prefix rules win over the substring rule.
        assert_eq!(classify_verb(Some("getList")), Some(Verb::Get));
        assert_eq!(classify_verb(Some("addToList")), Some(Verb::Add));
        // Substring match is case-insensitive and beats synonyms.
        assert_eq!(classify_verb(Some("userLIST")), Some(Verb::List));
        assert_eq!(classify_verb(Some("updateList")), Some(Verb::List));
        assert_eq!(classify_verb(Some("checklist")), Some(Verb::List));
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(classify_verb(None), None);
        assert_eq!(classify_verb(Some("")), None);
    }

    #[test]
    fn test_fallback_and_synonyms() {
        assert_eq!(classify_verb(Some("frobnicate")), Some(Verb::Check));
        assert_eq!(classify_verb(Some("update")), Some(Verb::Set));
        assert_eq!(classify_verb(Some("create")), Some(Verb::Add));
        assert_eq!(classify_verb(Some("remove")), Some(Verb::Delete));
        assert_eq!(classify_verb(Some("fetch")), Some(Verb::Get));
        // Prefixes are case-sensitive.
        assert_eq!(classify_verb(Some("GetUser")), Some(Verb::Check));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Verb::Delete.to_string(), "DELETE");
        assert_eq!("list".parse::<Verb>().unwrap(), Verb::List);
        assert!("nope".parse::<Verb>().is_err());
    }
}
