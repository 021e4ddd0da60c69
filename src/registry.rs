//! Locale registry: culture-keyed strategy lookup with parent fallback.
//!
//! Every localizable concern (number-to-words converters, collection
//! formatters) is resolved through a [`LocaleRegistry`]. Lookup tries the
//! exact culture, then each parent culture, then the registry's mandatory
//! default, so resolution always succeeds.

use crate::culture::{current_culture, CultureKey};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// How a strategy was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Registered under the requested culture.
    Exact,
    /// Registered under this ancestor of the requested culture.
    Parent(CultureKey),
    /// Nothing matched; the registry default was used.
    Default,
}

/// Culture-keyed registry of shared, stateless strategies.
pub struct LocaleRegistry<T: ?Sized> {
    /// Label used in log events ("number_to_words", "collection_formatters").
    name: &'static str,
    strategies: HashMap<CultureKey, Arc<T>>,
    default: Arc<T>,
}

impl<T: ?Sized> LocaleRegistry<T> {
    /// Create a registry with only a default strategy.
    pub fn new(name: &'static str, default: Arc<T>) -> Self {
        Self {
            name,
            strategies: HashMap::new(),
            default,
        }
    }

    /// Register `strategy` for `culture`, replacing any previous binding.
    pub fn register(&mut self, culture: impl Into<CultureKey>, strategy: Arc<T>) {
        let culture = culture.into();
        let replaced = self.strategies.insert(culture.clone(), strategy).is_some();
        debug!(registry = self.name, culture = %culture, replaced, "Registered strategy");
    }

    /// Replace the fallback strategy.
    pub fn set_default(&mut self, strategy: Arc<T>) {
        self.default = strategy;
    }

    /// Resolve for `culture`, or for the ambient culture when `None`.
    pub fn resolve_for_culture(&self, culture: Option<&str>) -> Arc<T> {
        let key = match culture {
            Some(raw) => CultureKey::new(raw),
            None => current_culture(),
        };
        self.resolve(&key)
    }

    /// Resolve for the calling thread's current culture.
    pub fn resolve_for_ui_culture(&self) -> Arc<T> {
        self.resolve(&current_culture())
    }

    pub fn resolve(&self, culture: &CultureKey) -> Arc<T> {
        self.resolve_with_source(culture).0
    }

    /// Resolve and report which binding answered.
    pub fn resolve_with_source(&self, culture: &CultureKey) -> (Arc<T>, Resolution) {
        if let Some(strategy) = self.strategies.get(culture) {
            return (Arc::clone(strategy), Resolution::Exact);
        }

        for ancestor in culture.ancestors() {
            if let Some(strategy) = self.strategies.get(&ancestor) {
                debug!(
                    registry = self.name,
                    culture = %culture,
                    resolved = %ancestor,
                    "Resolved through parent culture"
                );
                return (Arc::clone(strategy), Resolution::Parent(ancestor));
            }
        }

        debug!(registry = self.name, culture = %culture, "Falling back to default strategy");
        (Arc::clone(&self.default), Resolution::Default)
    }

    /// Whether a strategy is registered for exactly `culture`.
    pub fn contains(&self, culture: &CultureKey) -> bool {
        self.strategies.contains_key(culture)
    }

    /// Registered cultures in sorted order.
    pub fn registered_cultures(&self) -> Vec<&CultureKey> {
        let mut cultures: Vec<_> = self.strategies.keys().collect();
        cultures.sort();
        cultures
    }

    pub fn default_strategy(&self) -> Arc<T> {
        Arc::clone(&self.default)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for LocaleRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleRegistry")
            .field("name", &self.name)
            .field("cultures", &self.registered_cultures())
            .finish()
    }
}
