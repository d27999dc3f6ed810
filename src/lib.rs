//! # Scriptorium
//!
//! Converts prayers, psalms and whole Bible books supplied as JSON into a
//! tree of Markdown files with a metadata header. One file is written per
//! language variant per content unit; the folder comes from the record's
//! kind and identifiers.
//!
//! # Pipeline
//!
//! ```text
//! 1. Ingest   data_input/*.json  →  Vec<Record>       (parse + classify)
//! 2. Plan     Record             →  Vec<Document>     (routing + headers)
//! 3. Write    Document           →  <output>/…/xx.md  (overwrite)
//! ```
//!
//! Planning is pure, so `scriptorium check` can list every file a conversion
//! would write without touching the output tree.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `scriptorium.toml` loading, validation, and merging over defaults |
//! | [`types`] | Input record types and the item/book classification |
//! | [`ingest`] | Input folder enumeration and per-file JSON parsing |
//! | [`route`] | Psalter/prayers routing and output path construction |
//! | [`frontmatter`] | Metadata headers and document rendering |
//! | [`writer`] | Writes rendered documents, creating folders as needed |
//! | [`convert`] | Batch driver: planning, writing, per-file failure handling |
//! | [`output`] | CLI output formatting |
//!
//! # Output Layout
//!
//! ```text
//! <output>/
//! ├── молитвы/<id>/ru.md, uk.md
//! ├── псалтирь/<id>/ru.md, uk.md
//! └── библия/<testament>/<book>/chapter-01/ru.md, uk.md
//! ```
//!
//! Folder names, the psalter category label and the chapter prefix are all
//! configurable through [`config::Config`].

pub mod config;
pub mod convert;
pub mod frontmatter;
pub mod ingest;
pub mod output;
pub mod route;
pub mod types;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_helpers;
