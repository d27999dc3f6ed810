//! Metadata headers and document rendering.
//!
//! A rendered document is a `---` fenced header followed by a blank line and
//! the body, verbatim:
//!
//! ```text
//! ---
//! title: "Утренняя молитва"
//! slug: "utrennyaya"
//! categories: ["Утро", "Ежедневные"]
//! ---
//!
//! Текст...
//! ```
//!
//! Header values are formatted by type: strings are wrapped in double quotes
//! as-is, lists become a bracketed sequence of JSON string literals (non-ASCII
//! text stays readable), numbers are bare. Keys whose value is absent are left
//! out entirely.

use std::path::PathBuf;

/// A single header value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Text(String),
    Number(u32),
    /// Any other scalar (number, bool), emitted bare.
    Scalar(String),
    List(Vec<String>),
}

impl MetaValue {
    fn render(&self) -> String {
        match self {
            MetaValue::Text(s) => format!("\"{s}\""),
            MetaValue::Number(n) => n.to_string(),
            MetaValue::Scalar(s) => s.clone(),
            MetaValue::List(items) => {
                let quoted: Vec<String> = items
                    .iter()
                    .map(|item| {
                        serde_json::to_string(item).unwrap_or_else(|_| format!("\"{item}\""))
                    })
                    .collect();
                format!("[{}]", quoted.join(", "))
            }
        }
    }
}

/// Ordered header. Insertion order is output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(String, MetaValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.push((key.to_string(), MetaValue::Text(value.into())));
        self
    }

    /// Add an entry from a loosely-typed JSON value.
    ///
    /// Strings are quoted, other values are written bare as JSON, and an
    /// absent or `null` value adds nothing.
    pub fn optional_value(mut self, key: &str, value: Option<&serde_json::Value>) -> Self {
        let meta = match value {
            None | Some(serde_json::Value::Null) => return self,
            Some(serde_json::Value::String(s)) => MetaValue::Text(s.clone()),
            Some(other) => MetaValue::Scalar(other.to_string()),
        };
        self.entries.push((key.to_string(), meta));
        self
    }

    pub fn number(mut self, key: &str, value: u32) -> Self {
        self.entries.push((key.to_string(), MetaValue::Number(value)));
        self
    }

    pub fn list(mut self, key: &str, values: &[String]) -> Self {
        self.entries
            .push((key.to_string(), MetaValue::List(values.to_vec())));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Header lines between the fences, one per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}: {}", value.render()))
            .collect()
    }
}

/// A document ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: PathBuf,
    pub meta: Metadata,
    pub body: String,
}

impl Document {
    /// Full file contents: fenced header, blank line, body.
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        for line in self.meta.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("---\n\n");
        out.push_str(&self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_values_are_quoted_verbatim() {
        let meta = Metadata::new().text("title", "Отче наш");
        assert_eq!(meta.lines(), vec!["title: \"Отче наш\""]);
    }

    #[test]
    fn numbers_are_bare() {
        let meta = Metadata::new().number("chapter", 7);
        assert_eq!(meta.lines(), vec!["chapter: 7"]);
    }

    #[test]
    fn json_values_by_type() {
        let meta = Metadata::new()
            .optional_value("title", Some(&json!("Отче наш")))
            .optional_value("number", Some(&json!(5)))
            .optional_value("flag", Some(&json!(true)))
            .optional_value("missing", Some(&json!(null)))
            .optional_value("absent", None);
        assert_eq!(
            meta.lines(),
            vec!["title: \"Отче наш\"", "number: 5", "flag: true"]
        );
    }

    #[test]
    fn lists_keep_cyrillic_unescaped() {
        let meta = Metadata::new().list("categories", &["Утро".into(), "Псалтирь".into()]);
        assert_eq!(meta.lines(), vec![r#"categories: ["Утро", "Псалтирь"]"#]);
    }

    #[test]
    fn list_items_use_json_escaping() {
        let meta = Metadata::new().list("categories", &["say \"amen\"".into()]);
        assert_eq!(meta.lines(), vec![r#"categories: ["say \"amen\""]"#]);
    }

    #[test]
    fn empty_list_renders_brackets() {
        let meta = Metadata::new().list("categories", &[]);
        assert_eq!(meta.lines(), vec!["categories: []"]);
    }

    #[test]
    fn absent_optional_value_is_omitted() {
        let meta = Metadata::new()
            .text("title", "A")
            .optional_value("original_title", None)
            .text("slug", "a");
        assert_eq!(meta.keys().collect::<Vec<_>>(), vec!["title", "slug"]);
        assert!(meta.get("original_title").is_none());
    }

    #[test]
    fn render_document_layout() {
        let doc = Document {
            path: PathBuf::from("x/ru.md"),
            meta: Metadata::new()
                .text("title", "Утренняя молитва")
                .text("slug", "utrennyaya")
                .list("categories", &["Утро".into()]),
            body: "Текст...".into(),
        };
        assert_eq!(
            doc.render(),
            "---\ntitle: \"Утренняя молитва\"\nslug: \"utrennyaya\"\ncategories: [\"Утро\"]\n---\n\nТекст..."
        );
    }

    #[test]
    fn body_is_not_altered() {
        let body = "Line one\n\n  indented *markdown* \"quoted\"\n";
        let doc = Document {
            path: PathBuf::from("x/uk.md"),
            meta: Metadata::new(),
            body: body.into(),
        };
        assert!(doc.render().ends_with(body));
        assert!(doc.render().starts_with("---\n---\n\n"));
    }
}
