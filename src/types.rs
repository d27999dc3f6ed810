//! Input record types.
//!
//! These mirror the JSON shapes accepted in the input folder. Every field the
//! converter can do without is optional with a declared default, so sparse
//! records deserialize cleanly and the decision about what is *required* is
//! made once, in [`crate::convert`].

use serde::Deserialize;
use serde_json::Value;

/// Kind tag that marks a single-object file as a whole Bible book.
pub const BIBLE_BOOK_KIND: &str = "bible_book";

/// Kind tag that routes an item to the psalter regardless of its categories.
pub const PSALM_KIND: &str = "psalm";

/// Kind assumed when a record has no `type`, or `"type": null`.
pub const DEFAULT_KIND: &str = "prayer";

/// A body-text language. The converter recognizes exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    Uk,
}

impl Language {
    /// All languages in output order.
    pub const ALL: [Language; 2] = [Language::Ru, Language::Uk];

    /// Code used as the output file stem (`ru.md`, `uk.md`).
    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Uk => "uk",
        }
    }
}

/// Language-tagged body texts shared by items and chapters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Texts {
    #[serde(default)]
    pub content_ru: Option<String>,
    #[serde(default)]
    pub content_uk: Option<String>,
}

impl Texts {
    pub fn get(&self, lang: Language) -> Option<&str> {
        match lang {
            Language::Ru => self.content_ru.as_deref(),
            Language::Uk => self.content_uk.as_deref(),
        }
    }

    /// Present variants, in [`Language::ALL`] order.
    pub fn variants(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL
            .into_iter()
            .filter_map(|lang| self.get(lang).map(|text| (lang, text)))
    }
}

/// A single prayer or psalm.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentRecord {
    /// Slug; becomes the record's folder name.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    /// Header values are taken as any JSON scalar; `null` reads as absent.
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub original_title: Option<Value>,
    #[serde(default)]
    categories: Option<Vec<String>>,
    #[serde(flatten)]
    pub texts: Texts,
}

impl ContentRecord {
    /// Kind tag, [`DEFAULT_KIND`] when absent.
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_KIND)
    }

    /// Category labels; an absent or `null` list reads as empty.
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }
}

/// A whole scripture book with its chapters in canonical order.
#[derive(Debug, Clone, Deserialize)]
pub struct BibleBook {
    #[serde(default)]
    pub testament_slug: Option<String>,
    #[serde(default)]
    pub book_slug: Option<String>,
    #[serde(default)]
    pub book_title: Option<Value>,
    #[serde(default)]
    categories: Option<Vec<String>>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl BibleBook {
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub number: u32,
    #[serde(flatten)]
    pub texts: Texts,
}

/// One classified input record.
#[derive(Debug, Clone)]
pub enum Record {
    Item(ContentRecord),
    Book(BibleBook),
}

impl Record {
    /// Classify a single top-level JSON object by its `type` tag.
    pub fn from_object(value: Value) -> serde_json::Result<Record> {
        let is_book = value.get("type").and_then(Value::as_str) == Some(BIBLE_BOOK_KIND);
        if is_book {
            serde_json::from_value(value).map(Record::Book)
        } else {
            serde_json::from_value(value).map(Record::Item)
        }
    }
}
