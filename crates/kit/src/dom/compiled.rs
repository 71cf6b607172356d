// ABOUTME: Selector compilation for the node helpers and a per-Rewriter table of compiled rules.
// ABOUTME: Direct helper calls compile on demand; a Rewriter compiles its rule set once up front.

use std::collections::HashMap;

use dom_query::Matcher;

use crate::error::KitError;

/// Compiles a CSS selector, reporting an invalid one as an error.
pub fn compile(css: &str) -> Result<Matcher, KitError> {
    Matcher::new(css).map_err(|_| KitError::invalid_selector(css))
}

/// Selectors compiled once for the lifetime of their owner.
///
/// Invalid selectors are remembered as such, so looking one up reports the
/// error without parsing it again. The table never grows after construction.
#[derive(Clone, Default)]
pub struct CompiledSelectors {
    by_css: HashMap<String, Option<Matcher>>,
}

impl CompiledSelectors {
    /// Compiles every distinct selector in `selectors`.
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_css = HashMap::new();
        for css in selectors {
            let css = css.as_ref();
            if !by_css.contains_key(css) {
                by_css.insert(css.to_string(), Matcher::new(css).ok());
            }
        }
        Self { by_css }
    }

    /// Looks up a selector compiled at construction time.
    ///
    /// Selectors that were never registered are reported as invalid.
    pub fn get(&self, css: &str) -> Result<&Matcher, KitError> {
        self.by_css
            .get(css)
            .and_then(Option::as_ref)
            .ok_or_else(|| KitError::invalid_selector(css))
    }

    /// Number of distinct selectors held, valid or not.
    pub fn len(&self) -> usize {
        self.by_css.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_css.is_empty()
    }
}

impl std::fmt::Debug for CompiledSelectors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.by_css.keys().collect();
        keys.sort();
        f.debug_struct("CompiledSelectors")
            .field("selectors", &keys)
            .finish()
    }
}
