//! Configuration options for serializing definition trees.
//!
//! ## Examples
//!
//! ```rust
//! use actdef::{parse, to_string_with_options, SerializeOptions};
//!
//! let tree = parse("user.get // Fetch a user\n    id").unwrap();
//!
//! let options = SerializeOptions::new().with_indent(2).with_comment_padding(1);
//! let text = to_string_with_options(&tree, options);
//! assert_eq!(text, "user.get // Fetch a user\n  id\n");
//! ```

/// Formatting knobs for [`crate::Tree::serialize_with_options`].
///
/// The defaults reproduce the conventional layout: 4-space indentation for
/// sections and fields and 4 spaces between a record name and its comment.
///
/// # Examples
///
/// ```rust
/// use actdef::SerializeOptions;
///
/// let options = SerializeOptions::default();
/// assert_eq!(options.indent, 4);
/// assert_eq!(options.comment_padding, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    pub indent: usize,
    pub comment_padding: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            indent: 4,
            comment_padding: 4,
        }
    }
}

impl SerializeOptions {
    /// Same as [`SerializeOptions::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces before section headers and field lines.
    ///
    /// The value is clamped to at least 1: an unindented field line would
    /// read back as a record.
    ///
    /// ```rust
    /// use actdef::SerializeOptions;
    ///
    /// assert_eq!(SerializeOptions::new().with_indent(0).indent, 1);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Sets the number of spaces between a record's full name and its
    /// `// description`.
    #[must_use]
    pub fn with_comment_padding(mut self, padding: usize) -> Self {
        self.comment_padding = padding;
        self
    }
}
