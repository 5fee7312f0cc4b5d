//! The highlighting configuration provider
//!
//! Invoked once by the host at build or dev-serve start. Builds the value
//! the host feeds to its highlighting engine: theme pairing, language
//! preload list, transformer pipeline. Loading the custom grammar documents
//! is the only side effect; a failed load propagates immediately and no
//! configuration is returned.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::config::SetupOptions;
use crate::error::SetupError;
use crate::grammar::{Grammar, PACKAGED_GRAMMARS};
use crate::languages::LanguageSpec;
use crate::paths;
use crate::theme::ThemePair;
use crate::transformers::{Transformer, TransformerList};

/// The configuration value handed to the host
///
/// Immutable once returned. Serializes to the shape the host's setup
/// extension point expects: `themes` as a two-key map, `languages` as a
/// heterogeneous array. Transformers are in-process capabilities and stay
/// out of the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightConfig {
    pub themes: ThemePair,
    pub languages: Vec<LanguageSpec>,
    #[serde(skip)]
    pub transformers: TransformerList,
}

/// Highlighting configuration provider
///
/// Construct with [`SetupOptions`] (or [`HighlightSetup::from_project`] to
/// read them from `highlight.yaml`), then call [`HighlightSetup::provide`].
pub struct HighlightSetup {
    options: SetupOptions,
    project_root: PathBuf,
    transformers: TransformerList,
}

impl HighlightSetup {
    pub fn new(options: SetupOptions) -> Self {
        Self {
            options,
            project_root: PathBuf::from("."),
            transformers: TransformerList::new(),
        }
    }

    /// Read options from `<root>/highlight.yaml` (defaults when absent)
    pub fn from_project(root: impl Into<PathBuf>) -> Result<Self, SetupError> {
        let root = root.into();
        let options = SetupOptions::load(&root)?;
        Ok(Self::new(options).with_project_root(root))
    }

    /// Directory grammar references resolve against (defaults to ".")
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Append a transformer to the pipeline handed to the host
    pub fn with_transformer(mut self, transformer: Arc<dyn Transformer>) -> Self {
        self.transformers.push(transformer);
        self
    }

    /// Build the configuration
    ///
    /// Built-in identifiers are emitted in declared order, then each custom
    /// grammar document is loaded (one blocking read per reference) and
    /// appended. Errors are not recoverable here: no retries, no dropping
    /// the failed grammar and continuing.
    pub fn provide(&self) -> Result<HighlightConfig, SetupError> {
        self.options.validate()?;

        let mut languages =
            Vec::with_capacity(self.options.languages.len() + self.options.grammar_paths.len());
        for id in &self.options.languages {
            languages.push(LanguageSpec::Builtin(id.clone()));
        }
        for reference in &self.options.grammar_paths {
            let grammar = self.load_grammar(reference)?;
            tracing::info!(
                "Loaded grammar {} ({})",
                grammar.language_id(),
                grammar.scope_name
            );
            languages.push(LanguageSpec::Custom(grammar));
        }

        tracing::info!(
            "Highlighting configuration ready: themes {}/{}, {} languages, {} transformers",
            self.options.themes.dark,
            self.options.themes.light,
            languages.len(),
            self.transformers.len()
        );

        Ok(HighlightConfig {
            themes: self.options.themes.clone(),
            languages,
            transformers: self.transformers.clone(),
        })
    }

    /// Resolve one grammar reference with priority: packaged name →
    /// project layout
    fn load_grammar(&self, reference: &Path) -> Result<Grammar, SetupError> {
        if let Some(name) = paths::bare_name(reference) {
            if PACKAGED_GRAMMARS.iter().any(|g| g.id == name) {
                tracing::debug!("Using packaged grammar: {}", name);
                return Grammar::packaged(name).map_err(|reason| SetupError::GrammarParse {
                    path: reference.to_path_buf(),
                    reason,
                });
            }
        }

        let path = paths::resolve_grammar(&self.project_root, reference);
        tracing::debug!("Reading grammar from {}", path.display());
        Grammar::from_file(&path)
    }
}

/// Build the stock configuration: min-dark/min-light themes, the default
/// preload list, the packaged CLIPS grammar, no transformers
pub fn provide_default() -> Result<HighlightConfig, SetupError> {
    HighlightSetup::new(SetupOptions::default()).provide()
}
