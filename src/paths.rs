//! Project-relative resource paths
//!
//! The deck's resources all resolve against the project root rather than
//! any machine-specific location. This module is the single source of truth
//! for where the options file and grammar documents live.
//!
//! Layout:
//! - `<root>/highlight.yaml` — setup options
//! - `<root>/grammars/<name>.tmLanguage.json` — custom grammar documents

use std::path::{Component, Path, PathBuf};

/// Options file name at the project root
pub const OPTIONS_FILE: &str = "highlight.yaml";

/// Directory holding custom grammar documents
pub const GRAMMARS_DIR: &str = "grammars";

/// Suffix appended when a grammar is referenced by bare name
pub const GRAMMAR_SUFFIX: &str = "tmLanguage.json";

/// `<root>/highlight.yaml`
pub fn options_file(root: &Path) -> PathBuf {
    root.join(OPTIONS_FILE)
}

/// `<root>/grammars/`
pub fn grammars_dir(root: &Path) -> PathBuf {
    root.join(GRAMMARS_DIR)
}

/// A reference consisting of a single path component with no extension
/// (e.g. "clips", as opposed to "grammars/clips.tmLanguage.json")
pub fn bare_name(reference: &Path) -> Option<&str> {
    let mut components = reference.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => {
            let name = name.to_str()?;
            if name.contains('.') {
                None
            } else {
                Some(name)
            }
        }
        _ => None,
    }
}

/// Resolve a grammar reference against the project layout
///
/// Absolute paths are taken as-is; relative paths resolve against the
/// project root; bare names are looked up under `<root>/grammars/` with the
/// `.tmLanguage.json` suffix appended.
pub fn resolve_grammar(root: &Path, reference: &Path) -> PathBuf {
    if reference.is_absolute() {
        return reference.to_path_buf();
    }
    if let Some(name) = bare_name(reference) {
        return grammars_dir(root).join(format!("{}.{}", name, GRAMMAR_SUFFIX));
    }
    root.join(reference)
}
