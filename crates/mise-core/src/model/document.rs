//! Workbench document envelope.
//!
//! A `WorkbenchDoc` is what the editor persists: the canonical recipe, the raw
//! draft text it came from, import provenance and revision metadata. The core
//! never holds on to a document; callers thread it through explicit calls and
//! must bump `meta.revision` and refresh `meta.updated_at` on every edit.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::errors::MiseResult;
use crate::model::recipe::Recipe;
use crate::model::validate::validate_document;
use crate::pipeline::compile::{compile_lite_recipe, CompileInput};
use crate::stacks::sanitize_stacks;

/// Timestamp used when the system clock cannot be formatted.
pub const EPOCH_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

/// Current UTC time as an RFC 3339 string (sortable, serializable).
pub fn now() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| EPOCH_TIMESTAMP.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchDoc {
    pub recipe: Recipe,
    pub draft: Draft,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
    pub meta: DocMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftMode {
    #[default]
    Raw,
    Structured,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub mode: DraftMode,
    pub raw_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_import: Option<LastImport>,
}

/// Where an imported recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportSource {
    /// Local heuristic parser.
    Freeform,
    /// External AI conversion.
    Ai,
    Manual,
}

impl ImportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freeform => "freeform",
            Self::Ai => "ai",
            Self::Manual => "manual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastImport {
    pub source: ImportSource,
    pub confidence: f64,
    pub mode: String,
    pub at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Extensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prose: Option<Prose>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProseFormat {
    #[default]
    Plain,
    Markdown,
}

/// Free prose kept next to the recipe (e.g. a blog-style intro).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prose {
    pub text: String,
    pub format: ProseFormat,
    pub captured_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMeta {
    pub revision: u64,
    pub updated_at: String,
}

impl WorkbenchDoc {
    /// Empty document stamped with the current time.
    pub fn create_empty() -> Self {
        Self::create_empty_at(now())
    }

    /// Empty document stamped with a caller-provided timestamp.
    pub fn create_empty_at(updated_at: impl Into<String>) -> Self {
        Self {
            recipe: compile_lite_recipe(CompileInput::default()),
            draft: Draft::default(),
            extensions: None,
            meta: DocMeta {
                revision: 0,
                updated_at: updated_at.into(),
            },
        }
    }

    /// Decode a stored document, migrating legacy stack keys and dropping
    /// unrecognized ones before validating it.
    pub fn from_json_slice(bytes: &[u8]) -> MiseResult<Self> {
        let mut doc: WorkbenchDoc = serde_json::from_slice(bytes)?;

        let (stacks, report) = sanitize_stacks(&doc.recipe.stacks);
        if !report.is_empty() {
            tracing::debug!(
                migrated = report.migrated.len(),
                dropped = report.dropped.len(),
                "sanitized stack keys on load"
            );
            doc.recipe.stacks = stacks.into_owned();
        }

        validate_document(&doc)?;
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MiseError;
    use serde_json::json;

    #[test]
    fn empty_doc_shape() {
        let doc = WorkbenchDoc::create_empty_at("2024-01-01T00:00:00Z");
        let v = serde_json::to_value(&doc).unwrap();

        assert_eq!(v["draft"], json!({"mode": "raw", "rawText": ""}));
        assert_eq!(v["meta"], json!({"revision": 0, "updatedAt": "2024-01-01T00:00:00Z"}));
        assert_eq!(v["recipe"]["name"], "Untitled Recipe");
        assert!(v.get("extensions").is_none());
    }

    #[test]
    fn now_is_rfc3339() {
        let ts = now();
        OffsetDateTime::parse(&ts, &Rfc3339).unwrap();
        assert!(ts.as_str() > EPOCH_TIMESTAMP);
    }

    #[test]
    fn load_migrates_legacy_stacks() {
        let mut v = serde_json::to_value(WorkbenchDoc::create_empty_at(EPOCH_TIMESTAMP)).unwrap();
        v["recipe"]["stacks"] = json!({"timed@1": 1, "garnish@1": 1});
        let bytes = serde_json::to_vec(&v).unwrap();

        let doc = WorkbenchDoc::from_json_slice(&bytes).unwrap();
        assert_eq!(doc.recipe.stacks.len(), 1);
        assert_eq!(doc.recipe.stacks.get("timed"), Some(&1));
    }

    #[test]
    fn load_drops_unknown_stacks() {
        let mut v = serde_json::to_value(WorkbenchDoc::create_empty_at(EPOCH_TIMESTAMP)).unwrap();
        v["recipe"]["stacks"] = json!({"prep": 1, "garnish": 1});
        let bytes = serde_json::to_vec(&v).unwrap();

        let doc = WorkbenchDoc::from_json_slice(&bytes).unwrap();
        assert_eq!(serde_json::to_value(&doc.recipe.stacks).unwrap(), json!({"prep": 1}));
    }

    #[test]
    fn load_rejects_malformed_blob() {
        let err = WorkbenchDoc::from_json_slice(br#"{"recipe": 3}"#).unwrap_err();
        assert!(matches!(err, MiseError::Serialization(_)));
    }

    #[test]
    fn prose_extension_roundtrips_with_camel_case() {
        let mut doc = WorkbenchDoc::create_empty_at(EPOCH_TIMESTAMP);
        doc.extensions = Some(Extensions {
            prose: Some(Prose {
                text: "Grandma's favorite.".to_string(),
                format: ProseFormat::Markdown,
                captured_at: EPOCH_TIMESTAMP.to_string(),
            }),
        });
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["extensions"]["prose"]["format"], "markdown");
        assert_eq!(v["extensions"]["prose"]["capturedAt"], EPOCH_TIMESTAMP);

        let back: WorkbenchDoc = serde_json::from_value(v).unwrap();
        assert_eq!(back, doc);
    }
}
