//! Lazily parsed CSS selectors for the hardcoded page queries.

use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector parsed on first use and shared afterwards.
#[derive(Debug)]
pub(super) struct StaticSelector {
    cell: OnceLock<Selector>,
    query: &'static str,
}

impl StaticSelector {
    pub(super) const fn new(query: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            query,
        }
    }
}

impl std::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        // Queries are compile-time literals covered by the module tests.
        self.cell.get_or_init(|| match Selector::parse(self.query) {
            Ok(selector) => selector,
            Err(e) => panic!("invalid static selector {}: {:?}", self.query, e),
        })
    }
}
