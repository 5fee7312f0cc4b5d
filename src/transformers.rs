//! Transformer extension point
//!
//! Transformers are host-applied post-processing steps over highlighted
//! output. The configuration carries them in order; this crate registers
//! none by default and never runs them itself.

use std::fmt;
use std::sync::Arc;

/// A post-processing step the host applies to highlighted output
pub trait Transformer: Send + Sync {
    /// Stable name, used for logging and structural comparison
    fn name(&self) -> &str;

    /// Rewrite one block of highlighted output
    fn apply(&self, html: &str) -> String;
}

/// Ordered transformer sequence carried by the configuration
#[derive(Clone, Default)]
pub struct TransformerList(Vec<Arc<dyn Transformer>>);

impl TransformerList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transformer: Arc<dyn Transformer>) {
        self.0.push(transformer);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Transformer>> {
        self.0.iter()
    }

    /// Transformer names in application order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|t| t.name()).collect()
    }
}

impl fmt::Debug for TransformerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// Transformers are opaque capabilities; two lists are structurally equal
// when they name the same transformers in the same order.
impl PartialEq for TransformerList {
    fn eq(&self, other: &Self) -> bool {
        self.names() == other.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Uppercase;

    impl Transformer for Uppercase {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn apply(&self, html: &str) -> String {
            html.to_uppercase()
        }
    }

    #[test]
    fn test_empty_by_default() {
        let list = TransformerList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_names_preserve_order() {
        struct Named(&'static str);
        impl Transformer for Named {
            fn name(&self) -> &str {
                self.0
            }
            fn apply(&self, html: &str) -> String {
                html.to_string()
            }
        }

        let mut list = TransformerList::new();
        list.push(Arc::new(Named("first")));
        list.push(Arc::new(Named("second")));
        assert_eq!(list.names(), vec!["first", "second"]);
    }

    #[test]
    fn test_structural_equality_by_name() {
        let mut a = TransformerList::new();
        a.push(Arc::new(Uppercase));
        let mut b = TransformerList::new();
        b.push(Arc::new(Uppercase));
        assert_eq!(a, b);
        assert_ne!(a, TransformerList::new());
    }
}
