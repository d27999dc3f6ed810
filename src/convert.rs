//! Record conversion: the batch driver.
//!
//! Walks the input folder, turns every record into the documents it produces,
//! and writes them. Planning (record → documents) is pure, which lets the
//! `check` command show exactly what `convert` would write without touching
//! the output tree.
//!
//! ## Failure policy
//!
//! - A file that cannot be read or parsed is reported and skipped.
//! - A record missing a required identifier, or whose identifier is not a
//!   safe single path segment, is skipped with a warning. The rest of the
//!   file still converts.
//! - A write failure stops the current file (its remaining documents are not
//!   written) and is reported as that file's failure. The batch continues.
//!
//! ## Progress
//!
//! Callers may pass a [`Sender`] to receive [`ConvertEvent`]s as work
//! happens; the CLI prints them from a separate thread.

use crate::config::{Config, ConfigError};
use crate::frontmatter::{Document, Metadata};
use crate::ingest::{self, IngestError};
use crate::route::{self, Section};
use crate::types::{BibleBook, ContentRecord, Record};
use crate::writer::{self, WriteError};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Why a record (or a chapter of a book) produced no output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Skip {
    #[error("record has no id")]
    MissingId,
    #[error("record id {0:?} is not a valid folder name")]
    UnsafeId(String),
    #[error("bible book has no book_slug")]
    MissingBookSlug,
    #[error("book_slug {0:?} is not a valid folder name")]
    UnsafeBookSlug(String),
    #[error("testament_slug {0:?} is not a valid folder name")]
    UnsafeTestament(String),
    #[error("chapter number 0 in book {0:?}")]
    ZeroChapter(String),
}

/// Documents one input file will produce, plus what it had to skip.
#[derive(Debug, Default)]
pub struct Plan {
    pub documents: Vec<Document>,
    pub skipped: Vec<Skip>,
}

/// Progress events emitted by [`run`].
#[derive(Debug, Clone)]
pub enum ConvertEvent {
    FileStarted { path: PathBuf },
    DocumentWritten { path: PathBuf },
    RecordSkipped { file: PathBuf, reason: Skip },
    FileFailed { path: PathBuf, error: String },
}

/// Totals for a completed run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub files: usize,
    pub failed_files: usize,
    pub documents: usize,
    pub skipped_records: usize,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        self.failed_files > 0
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The input folder did not exist and has been created.
    InputCreated(PathBuf),
    /// The input folder holds no `*.json` files.
    InputEmpty(PathBuf),
    Completed(Summary),
}

/// Per-file result of a dry run.
#[derive(Debug)]
pub struct FileCheck {
    pub path: PathBuf,
    pub plan: Result<Plan, IngestError>,
}

// ============================================================================
// Planning
// ============================================================================

/// Header and documents for a single prayer or psalm.
pub fn plan_item(record: &ContentRecord, config: &Config) -> Result<Vec<Document>, Skip> {
    let slug = record.id.as_deref().ok_or(Skip::MissingId)?;
    if !route::is_safe_segment(slug) {
        return Err(Skip::UnsafeId(slug.to_string()));
    }

    let section: Section = route::classify_item(record, config);
    let base = route::item_dir(config, section, slug);

    let meta = Metadata::new()
        .optional_value("title", record.title.as_ref())
        .optional_value("original_title", record.original_title.as_ref())
        .text("slug", slug)
        .list("categories", record.categories());

    Ok(record
        .texts
        .variants()
        .map(|(lang, body)| Document {
            path: route::document_path(&base, lang),
            meta: meta.clone(),
            body: body.to_string(),
        })
        .collect())
}

/// Documents for every chapter of a book, in input order.
///
/// A chapter numbered 0 is skipped; the others still convert.
pub fn plan_book(book: &BibleBook, config: &Config) -> Result<Plan, Skip> {
    let book_slug = book.book_slug.as_deref().ok_or(Skip::MissingBookSlug)?;
    if !route::is_safe_segment(book_slug) {
        return Err(Skip::UnsafeBookSlug(book_slug.to_string()));
    }
    let testament = book
        .testament_slug
        .as_deref()
        .unwrap_or(&config.naming.default_testament);
    if !route::is_safe_segment(testament) {
        return Err(Skip::UnsafeTestament(testament.to_string()));
    }

    let base = route::book_dir(config, testament, book_slug);
    let mut plan = Plan::default();

    for chapter in &book.chapters {
        if chapter.number == 0 {
            plan.skipped.push(Skip::ZeroChapter(book_slug.to_string()));
            continue;
        }
        let chapter_dir = base.join(route::chapter_segment(
            &config.naming.chapter_prefix,
            chapter.number,
        ));
        let meta = Metadata::new()
            .optional_value("book", book.book_title.as_ref())
            .number("chapter", chapter.number)
            .list("categories", book.categories());

        for (lang, body) in chapter.texts.variants() {
            plan.documents.push(Document {
                path: route::document_path(&chapter_dir, lang),
                meta: meta.clone(),
                body: body.to_string(),
            });
        }
    }
    Ok(plan)
}

/// Plan every record of one file.
pub fn plan_records(records: &[Record], config: &Config) -> Plan {
    let mut plan = Plan::default();
    for record in records {
        match record {
            Record::Item(item) => match plan_item(item, config) {
                Ok(docs) => plan.documents.extend(docs),
                Err(skip) => plan.skipped.push(skip),
            },
            Record::Book(book) => match plan_book(book, config) {
                Ok(book_plan) => {
                    plan.documents.extend(book_plan.documents);
                    plan.skipped.extend(book_plan.skipped);
                }
                Err(skip) => plan.skipped.push(skip),
            },
        }
    }
    plan
}

/// Read, parse, and plan one input file.
pub fn plan_file(path: &Path, config: &Config) -> Result<Plan, IngestError> {
    let records = ingest::load_file(path)?;
    Ok(plan_records(&records, config))
}

// ============================================================================
// Running
// ============================================================================

fn emit(events: &Option<Sender<ConvertEvent>>, event: ConvertEvent) {
    if let Some(tx) = events {
        tx.send(event).ok();
    }
}

/// Write a plan's documents in order, stopping at the first failure.
fn write_plan(
    plan: &Plan,
    events: &Option<Sender<ConvertEvent>>,
) -> Result<usize, (usize, WriteError)> {
    for (written, doc) in plan.documents.iter().enumerate() {
        writer::write_document(doc).map_err(|e| (written, e))?;
        emit(
            events,
            ConvertEvent::DocumentWritten {
                path: doc.path.clone(),
            },
        );
    }
    Ok(plan.documents.len())
}

/// Convert every input file under `config.input_dir` into `config.output_dir`.
pub fn run(
    config: &Config,
    events: Option<Sender<ConvertEvent>>,
) -> Result<Outcome, ConvertError> {
    config.validate()?;

    if !config.input_dir.exists() {
        fs::create_dir_all(&config.input_dir)?;
        tracing::debug!(dir = %config.input_dir.display(), "input folder was missing, created it");
        return Ok(Outcome::InputCreated(config.input_dir.clone()));
    }

    let files = ingest::json_files(&config.input_dir)?;
    if files.is_empty() {
        return Ok(Outcome::InputEmpty(config.input_dir.clone()));
    }

    let mut summary = Summary::default();
    for path in files {
        summary.files += 1;
        emit(&events, ConvertEvent::FileStarted { path: path.clone() });

        let plan = match plan_file(&path, config) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::debug!(file = %path.display(), error = %e, "cannot read input file");
                summary.failed_files += 1;
                emit(
                    &events,
                    ConvertEvent::FileFailed {
                        path,
                        error: e.to_string(),
                    },
                );
                continue;
            }
        };

        for reason in &plan.skipped {
            tracing::debug!(file = %path.display(), %reason, "skipping record");
            summary.skipped_records += 1;
            emit(
                &events,
                ConvertEvent::RecordSkipped {
                    file: path.clone(),
                    reason: reason.clone(),
                },
            );
        }

        match write_plan(&plan, &events) {
            Ok(written) => summary.documents += written,
            Err((written, e)) => {
                tracing::debug!(file = %path.display(), error = %e, "write failed");
                summary.documents += written;
                summary.failed_files += 1;
                emit(
                    &events,
                    ConvertEvent::FileFailed {
                        path,
                        error: e.to_string(),
                    },
                );
            }
        }
    }

    Ok(Outcome::Completed(summary))
}

/// Plan every input file without writing anything.
///
/// Unlike [`run`], a missing input folder is not created.
pub fn check(config: &Config) -> Result<Vec<FileCheck>, ConvertError> {
    config.validate()?;
    if !config.input_dir.exists() {
        return Ok(Vec::new());
    }
    Ok(ingest::json_files(&config.input_dir)?
        .into_iter()
        .map(|path| {
            let plan = plan_file(&path, config);
            FileCheck { path, plan }
        })
        .collect())
}
