//! Setup options for the configuration provider
//!
//! The provider's injected inputs: theme pairing, built-in language list,
//! and custom grammar references. Read from `highlight.yaml` at the project
//! root when present; the defaults reproduce the stock deck setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::languages::DEFAULT_LANGUAGES;
use crate::paths;
use crate::theme::ThemePair;

/// Inputs to the highlighting configuration provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupOptions {
    /// Theme identifiers for the two display modes
    #[serde(default)]
    pub themes: ThemePair,

    /// Built-in grammar identifiers to preload, in registration order
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Custom grammar references, appended after the built-ins
    ///
    /// Each entry is a path to a tmLanguage JSON document, or the bare name
    /// of a grammar under the project `grammars/` directory or packaged
    /// with the crate.
    #[serde(default = "default_grammars", rename = "grammars")]
    pub grammar_paths: Vec<PathBuf>,
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

fn default_grammars() -> Vec<PathBuf> {
    vec![PathBuf::from("clips")]
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            themes: ThemePair::default(),
            languages: default_languages(),
            grammar_paths: default_grammars(),
        }
    }
}

impl SetupOptions {
    /// Load options from `<root>/highlight.yaml`, or defaults when absent
    ///
    /// A present but malformed file is an error: a deck author who wrote an
    /// options file gets told about typos instead of silently receiving the
    /// stock setup.
    pub fn load(root: &Path) -> Result<Self, SetupError> {
        let path = paths::options_file(root);
        if !path.exists() {
            tracing::debug!("No options file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| SetupError::InvalidOptions {
                reason: format!("failed to read {}: {}", path.display(), e),
            })?;
        let options: SetupOptions =
            serde_yaml::from_str(&content).map_err(|e| SetupError::InvalidOptions {
                reason: format!("failed to parse {}: {}", path.display(), e),
            })?;
        options.validate()?;

        tracing::info!("Loaded setup options from {}", path.display());
        Ok(options)
    }

    /// Shape check on identifiers; registry membership stays unchecked
    pub fn validate(&self) -> Result<(), SetupError> {
        self.themes
            .validate()
            .map_err(|reason| SetupError::InvalidOptions { reason })?;

        for id in &self.languages {
            if id.is_empty() {
                return Err(SetupError::InvalidOptions {
                    reason: "empty language identifier".to_string(),
                });
            }
        }
        for reference in &self.grammar_paths {
            if reference.as_os_str().is_empty() {
                return Err(SetupError::InvalidOptions {
                    reason: "empty grammar reference".to_string(),
                });
            }
        }
        Ok(())
    }
}
