//! Code-block highlighting setup for slide decks
//!
//! Produces the configuration a presentation framework hands to its
//! syntax-highlighting engine at build or dev-serve time:
//! - A theme pairing for dark and light display modes
//! - The ordered grammar preload list: built-in identifiers plus custom
//!   TextMate grammar documents loaded from JSON
//! - The transformer pipeline applied to highlighted output (empty unless
//!   the deck registers some)
//!
//! The host's renderer, highlighting engine, and build tooling stay black
//! boxes; this crate only constructs the value they consume.

pub mod config;
pub mod error;
pub mod grammar;
pub mod languages;
pub mod paths;
pub mod setup;
pub mod theme;
pub mod transformers;

// Re-export commonly used types
pub use config::SetupOptions;
pub use error::SetupError;
pub use grammar::Grammar;
pub use languages::LanguageSpec;
pub use setup::{provide_default, HighlightConfig, HighlightSetup};
pub use theme::ThemePair;
pub use transformers::{Transformer, TransformerList};
