//! Output path routing.
//!
//! Every rendered document lands at a path derived from the record's kind
//! and identifiers:
//!
//! ```text
//! <output>/<prayers>/<id>/<lang>.md
//! <output>/<psalter>/<id>/<lang>.md
//! <output>/<bible>/<testament>/<book>/<prefix>-<NN>/<lang>.md
//! ```
//!
//! Identifiers come straight from input data, so each one is checked to be a
//! single path segment before it is joined onto the output root.

use crate::config::Config;
use crate::types::{ContentRecord, Language, PSALM_KIND};
use std::path::{Path, PathBuf};

/// Top-level folder an item is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Prayers,
    Psalter,
}

impl Section {
    pub fn folder(self, config: &Config) -> &str {
        match self {
            Section::Prayers => &config.folders.prayers,
            Section::Psalter => &config.folders.psalter,
        }
    }
}

/// Decide whether an item belongs to the prayers or the psalter.
///
/// The kind tag is compared exactly; categories are lower-cased first.
pub fn classify_item(record: &ContentRecord, config: &Config) -> Section {
    let psalter_label = config.naming.psalter_category.as_str();
    let tagged_psalter = record
        .categories()
        .iter()
        .any(|c| c.to_lowercase() == psalter_label);

    if record.kind() == PSALM_KIND || tagged_psalter {
        Section::Psalter
    } else {
        Section::Prayers
    }
}

/// `<output>/<section>/<id>`
pub fn item_dir(config: &Config, section: Section, slug: &str) -> PathBuf {
    config.output_dir.join(section.folder(config)).join(slug)
}

/// `<output>/<bible>/<testament>/<book>`
pub fn book_dir(config: &Config, testament: &str, book_slug: &str) -> PathBuf {
    config
        .output_dir
        .join(&config.folders.bible)
        .join(testament)
        .join(book_slug)
}

/// Chapter folder name: the number zero-padded to at least two digits.
///
/// - `3` → `chapter-03`
/// - `12` → `chapter-12`
/// - `100` → `chapter-100`
pub fn chapter_segment(prefix: &str, number: u32) -> String {
    format!("{prefix}-{number:02}")
}

/// `<dir>/<lang>.md`
pub fn document_path(dir: &Path, lang: Language) -> PathBuf {
    dir.join(format!("{}.md", lang.code()))
}

/// Whether a value can be used as exactly one path component.
///
/// Rejects empty strings, `.` and `..`, and anything containing a path
/// separator or NUL.
pub fn is_safe_segment(value: &str) -> bool {
    !value.trim().is_empty()
        && value != "."
        && value != ".."
        && !value.contains(['/', '\\', '\0'])
}
