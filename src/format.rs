//! Definition Format Reference
//!
//! This module documents the text format read by [`crate::parse`] and
//! written by [`crate::Tree::serialize`]. It contains no code.
//!
//! # Overview
//!
//! A document is a sequence of records. Each record is one unindented line
//! followed by indented section headers and field lines. Blank lines and
//! lines starting with `//` carry no meaning.
//!
//! ```text
//! tree        := (blank | comment | record)*
//! record      := full-name [comment] NEWLINE (blank | section | field)*
//! full-name   := entity ("." segment)*
//! section-hdr := "@" section-name NEWLINE
//! field-line  := optional-field | plain-field
//! optional-field := "[" attr-token "]" tail
//! plain-field := field-name ["?"] tail
//! tail        := (ws attr-token)* [ws "//" comment]
//! attr-token  := name ["=" (dquoted | squoted | bareword)]
//! comment     := rest-of-line-trimmed
//! ```
//!
//! # Records
//!
//! | Declaration | Entity | Property | Action | Verb |
//! |-------------|--------|----------|--------|------|
//! | `ping` | `ping` | - | - | - |
//! | `order.create` | `order` | - | `create` | `ADD` |
//! | `user.profile.update` | `user` | `profile` | `update` | `SET` |
//! | `shop.cart.item.listAll` | `shop` | `cart.item` | `listAll` | `LIST` |
//!
//! **Rules**:
//! - Only the first whitespace-separated token names the record
//! - Everything after the first `//` is the description
//! - Every dot segment must be non-empty
//! - A full name may be declared only once per document
//!
//! # Verbs
//!
//! Checked in order, first match wins:
//!
//! 1. prefix `get` → `GET`
//! 2. prefix `set` → `SET`
//! 3. prefix `add` → `ADD`
//! 4. prefix `delete` → `DELETE`
//! 5. contains `list`, any case → `LIST`
//! 6. prefix `check` → `CHECK`
//! 7. synonyms: `update`, `modify`, `change`, `edit`, `put`, `enable`,
//!    `disable` → `SET`; `create`, `insert`, `new`, `register`, `append` →
//!    `ADD`; `remove`, `del`, `drop`, `clear` → `DELETE`; `fetch`, `read`,
//!    `find`, `load`, `show` → `GET`; `is`, `has`, `validate`, `verify` →
//!    `CHECK`
//! 8. anything else → `CHECK`
//!
//! # Sections
//!
//! `@name` opens a new section in the current record; the name is the run of
//! letters, digits, `_`, `-` and `.` after the `@`. A section may be opened only
//! once, and `main` always exists already, so `@main` is an error.
//!
//! # Fields
//!
//! ```text
//! username maxLength="32" trim        required, two attributes (one a flag)
//! password? // never logged           optional, no default
//! [port="8080"] min=1 max='65535'     optional, default "8080"
//! ```
//!
//! Field names are runs of letters, digits, `_`, `-` and `.`; building a
//! field or section with any other character is a validation error, so every
//! name written out reads back unchanged. Attribute values can
//! be double-quoted, single-quoted or bare. A bare value inside `[...]` ends
//! at `]`.
//!
//! # Escaping
//!
//! Values written inside quotes use backslash escapes:
//!
//! ```text
//! \\  - backslash
//! \"  - double quote
//! \'  - single quote
//! \n  - newline
//! ```
//!
//! Descriptions use:
//!
//! ```text
//! &amp;   - ampersand
//! &quot;  - double quote
//! \\      - backslash
//! \n      - newline
//! ```
//!
//! Both are decoded on read. Quoted values survive a round trip exactly.
//! Descriptions are trimmed on read, and an empty or all-whitespace
//! description reads back as no description, so only descriptions without
//! leading or trailing whitespace come back unchanged. Bare values are read
//! literally.
//!
//! # Output Layout
//!
//! The serializer writes records separated by blank lines, indents section
//! headers and fields by 4 spaces, puts 4 spaces before a record's `//`, and
//! always quotes attribute values. See [`crate::SerializeOptions`].
