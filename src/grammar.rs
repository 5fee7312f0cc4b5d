//! TextMate grammar documents
//!
//! Loads third-party grammar definitions (tmLanguage JSON) and passes them
//! through to the host unmodified. Only the document shape is checked here;
//! running the grammar is the job of the host's highlighting engine.
//!
//! Grammars the deck ships with are embedded at compile time and resolve
//! under a reserved name without touching the filesystem.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SetupError;

// Embed packaged grammar JSON at compile time
pub const CLIPS_GRAMMAR_JSON: &str = include_str!("../grammars/clips.tmLanguage.json");

/// A packaged grammar entry
pub struct PackagedGrammar {
    /// Reserved name usable in place of a file path (e.g. "clips")
    pub id: &'static str,
    /// Embedded tmLanguage JSON
    pub json: &'static str,
}

/// Registry of grammars compiled into the crate
pub const PACKAGED_GRAMMARS: &[PackagedGrammar] = &[PackagedGrammar {
    id: "clips",
    json: CLIPS_GRAMMAR_JSON,
}];

/// A TextMate-style grammar document
///
/// The shape check covers only what this crate needs to address the
/// grammar: a non-empty `scopeName`, plus the optional `name` and
/// `fileTypes`. Every other field (`patterns`, `repository`, injections,
/// anything an extension author added) is carried verbatim in `rest` so the
/// host receives the document exactly as it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    /// Root scope, e.g. "source.clips"
    #[serde(rename = "scopeName")]
    pub scope_name: String,

    /// Human-readable grammar name, doubling as the language identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File extensions claimed by this grammar
    #[serde(rename = "fileTypes", default, skip_serializing_if = "Option::is_none")]
    pub file_types: Option<Vec<String>>,

    /// All remaining fields, untouched
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Grammar {
    /// Parse a grammar from tmLanguage JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        let grammar: Grammar =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {}", e))?;
        if grammar.scope_name.is_empty() {
            return Err("grammar has an empty scopeName".to_string());
        }
        Ok(grammar)
    }

    /// Load a grammar document from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SetupError> {
        if !path.exists() {
            return Err(SetupError::GrammarNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|source| SetupError::GrammarRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|reason| SetupError::GrammarParse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Load a packaged grammar by reserved name
    pub fn packaged(id: &str) -> Result<Self, String> {
        let entry = PACKAGED_GRAMMARS
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| format!("Unknown packaged grammar: {}", id))?;
        Self::from_json(entry.json)
    }

    /// Identifier the host registers this grammar under
    ///
    /// The explicit `name` field wins; otherwise the last dotted segment of
    /// the scope name (so "source.clips" registers as "clips").
    pub fn language_id(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => self
                .scope_name
                .rsplit('.')
                .next()
                .unwrap_or(&self.scope_name),
        }
    }
}
