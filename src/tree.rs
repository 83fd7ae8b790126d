//! The root aggregate: records keyed by full name.

use crate::error::{NameKind, Result};
use crate::map::NamedMap;
use crate::options::SerializeOptions;
use crate::record::Record;

/// An insertion-ordered collection of records, keyed by full name.
///
/// # Examples
///
/// ```rust
/// use actdef::{Field, Tree};
///
/// let mut tree = Tree::new();
/// let record = tree
///     .add_record("user", Some("profile"), Some("update"), Some("Updates a profile"))
///     .unwrap();
/// record.add_field(Field::required("username").unwrap()).unwrap();
///
/// assert!(tree.has_record("user.profile.update"));
/// assert!(tree.add_record("user", Some("profile"), Some("update"), None).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Tree {
    records: NamedMap<Record>,
}

impl Tree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Tree {
            records: NamedMap::new(),
        }
    }

    /// Constructs a record and inserts it under its full name.
    ///
    /// # Errors
    ///
    /// Fails with a validation error for bad names, or with a duplicate
    /// error if a record with the same full name already exists. The tree is
    /// unchanged on failure.
    pub fn add_record(
        &mut self,
        entity_name: &str,
        property_name: Option<&str>,
        action_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<&mut Record> {
        let mut record = Record::new(entity_name, property_name, action_name)?;
        record.set_description(description);
        self.insert_record(record)
    }

    /// Inserts an already-built record, failing on a duplicate full name.
    pub fn insert_record(&mut self, record: Record) -> Result<&mut Record> {
        self.records
            .insert_new(record.full_name(), record, NameKind::Record)
    }

    /// Inserts a record, replacing any record with the same full name.
    pub fn set_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.full_name(), record)
    }

    /// Looks a record up by its full name, e.g. `user.profile.update`.
    #[must_use]
    pub fn get_record(&self, full_name: &str) -> Option<&Record> {
        self.records.get(full_name)
    }

    pub fn get_record_mut(&mut self, full_name: &str) -> Option<&mut Record> {
        self.records.get_mut(full_name)
    }

    /// True if a record with this full name exists.
    #[must_use]
    pub fn has_record(&self, full_name: &str) -> bool {
        self.records.contains(full_name)
    }

    /// Removes a record, keeping the order of the others.
    pub fn delete_record(&mut self, full_name: &str) -> Option<Record> {
        self.records.remove(full_name)
    }

    /// Iterates records in insertion order.
    pub fn list_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Iterates records mutably in insertion order. Full names cannot change
    /// through a `&mut Record`, so the keys stay valid.
    ///
    /// ```rust
    /// use actdef::parse;
    ///
    /// let mut tree = parse("a.get\nb.get\n").unwrap();
    /// for record in tree.list_records_mut() {
    ///     record.set_description(Some("reviewed"));
    /// }
    /// assert!(tree.list_records().all(|r| r.description() == Some("reviewed")));
    /// ```
    pub fn list_records_mut(&mut self) -> impl Iterator<Item = &mut Record> + '_ {
        self.records.values_mut()
    }

    /// Full names of all records, in insertion order.
    pub fn list_record_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders every record, separated by blank lines.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.serialize_with_options(&SerializeOptions::default())
    }

    /// Like [`Tree::serialize`] with custom layout options.
    #[must_use]
    pub fn serialize_with_options(&self, options: &SerializeOptions) -> String {
        let mut serializer = crate::ser::Serializer::new(options.clone());
        serializer.write_tree(self);
        serializer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn test_add_record_and_lookup() {
        let mut tree = Tree::new();
        tree.add_record("user", Some("profile"), Some("update"), None)
            .unwrap();
        tree.add_record("order", None, Some("create"), Some("New order"))
            .unwrap();
        tree.add_record("ping", None, None, None).unwrap();

        let names: Vec<_> = tree.list_record_names().collect();
        assert_eq!(names, vec!["user.profile.update", "order.create", "ping"]);
        assert_eq!(
            tree.get_record("order.create").and_then(Record::description),
            Some("New order")
        );
    }

    #[test]
    fn test_duplicate_record_leaves_tree_unchanged() {
        let mut tree = Tree::new();
        tree.add_record("ping", None, None, Some("first")).unwrap();
        let err = tree.add_record("ping", None, None, Some("second")).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.get_record("ping").and_then(Record::description),
            Some("first")
        );
    }

    #[test]
    fn test_same_full_name_from_different_splits() {
        let mut tree = Tree::new();
        tree.add_record("a", Some("b"), Some("c"), None).unwrap();
        // "a.b.c" again, split differently.
        let record = Record::from_path("a.b.c").unwrap();
        assert!(tree.insert_record(record).unwrap_err().is_duplicate());
    }

    #[test]
    fn test_set_and_delete() {
        let mut tree = Tree::new();
        tree.add_record("ping", None, None, None).unwrap();
        let replacement = Record::new("ping", None, None).unwrap().with_description("new");
        assert!(tree.set_record(replacement).is_some());
        assert_eq!(
            tree.get_record("ping").and_then(Record::description),
            Some("new")
        );
        assert!(tree.delete_record("ping").is_some());
        assert!(!tree.has_record("ping"));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_serialize_separates_records_with_blank_line() {
        let mut tree = Tree::new();
        tree.add_record("ping", None, None, None).unwrap();
        tree.add_record("user", None, Some("get"), Some("Fetch"))
            .unwrap()
            .add_field(Field::required("id").unwrap())
            .unwrap();
        assert_eq!(tree.serialize(), "ping\n\nuser.get    // Fetch\n    id\n");
    }

    #[test]
    fn test_serialize_empty_tree() {
        assert_eq!(Tree::new().serialize(), "");
    }
}
