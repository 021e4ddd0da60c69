//! The configuration environment: one registry per localizable concern.
//!
//! A [`Configurator`] is an ordinary owned value. Build one, adjust its
//! registries through `&mut`, then either pass it around explicitly or
//! install it once as the process-wide instance used by the crate-level
//! helpers. The installed instance is immutable.

use crate::collection::{CollectionFormatter, DefaultFormatter, OxfordFormatter};
use crate::number_to_words::{
    BanglaConverter, ChineseConverter, EnglishConverter, GermanConverter, JapaneseConverter,
    NumberToWordsConverter, RussianConverter, SpanishConverter,
};
use crate::registry::LocaleRegistry;
use std::sync::{Arc, OnceLock};
use tracing::info;

static GLOBAL: OnceLock<Configurator> = OnceLock::new();

/// Per-culture conjunctions for collection formatting.
const COLLECTION_CONJUNCTIONS: [(&str, &str); 7] = [
    ("de", "und"),
    ("es", "y"),
    ("it", "e"),
    ("sv", "och"),
    ("ro", "și"),
    ("is", "og"),
    ("ru", "и"),
];

#[derive(Debug)]
pub struct Configurator {
    number_to_words: LocaleRegistry<dyn NumberToWordsConverter>,
    collection_formatters: LocaleRegistry<dyn CollectionFormatter>,
}

impl Configurator {
    /// A configurator with every built-in converter and formatter registered.
    pub fn new() -> Self {
        Self {
            number_to_words: default_number_to_words(),
            collection_formatters: default_collection_formatters(),
        }
    }

    pub fn number_to_words(&self) -> &LocaleRegistry<dyn NumberToWordsConverter> {
        &self.number_to_words
    }

    pub fn number_to_words_mut(&mut self) -> &mut LocaleRegistry<dyn NumberToWordsConverter> {
        &mut self.number_to_words
    }

    pub fn collection_formatters(&self) -> &LocaleRegistry<dyn CollectionFormatter> {
        &self.collection_formatters
    }

    pub fn collection_formatters_mut(&mut self) -> &mut LocaleRegistry<dyn CollectionFormatter> {
        &mut self.collection_formatters
    }

    /// Install as the process-wide configurator.
    ///
    /// # Returns
    /// * `Ok(&'static Configurator)` on the first successful install
    /// * `Err(self)` if a configurator is already installed (including the
    ///   built-in one created lazily by [`global`](Self::global))
    pub fn install(self) -> Result<&'static Configurator, Configurator> {
        GLOBAL.set(self)?;
        let installed = Self::global();
        info!(
            converters = installed.number_to_words.len(),
            formatters = installed.collection_formatters.len(),
            "Installed numeral configurator"
        );
        Ok(installed)
    }

    /// The installed configurator, or the built-in one if none was installed.
    pub fn global() -> &'static Configurator {
        GLOBAL.get_or_init(Configurator::new)
    }

    /// Whether a configurator has been installed or lazily created.
    pub fn is_installed() -> bool {
        GLOBAL.get().is_some()
    }
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new()
    }
}

fn default_number_to_words() -> LocaleRegistry<dyn NumberToWordsConverter> {
    let english: Arc<dyn NumberToWordsConverter> = Arc::new(EnglishConverter::new());
    let mut registry = LocaleRegistry::new("number_to_words", Arc::clone(&english));
    registry.register("en", english);
    registry.register("en-GB", Arc::new(EnglishConverter::british()));
    registry.register("es", Arc::new(SpanishConverter::new()));
    registry.register("ru", Arc::new(RussianConverter::new()));
    registry.register("de", Arc::new(GermanConverter::new()));
    registry.register("de-CH", Arc::new(GermanConverter::swiss("de-CH")));
    registry.register("de-LI", Arc::new(GermanConverter::swiss("de-LI")));
    registry.register("ja", Arc::new(JapaneseConverter::new()));
    registry.register("zh", Arc::new(ChineseConverter::new()));
    registry.register("bn", Arc::new(BanglaConverter::new()));
    registry
}

fn default_collection_formatters() -> LocaleRegistry<dyn CollectionFormatter> {
    let mut registry: LocaleRegistry<dyn CollectionFormatter> =
        LocaleRegistry::new("collection_formatters", Arc::new(DefaultFormatter::new("&")));
    registry.register("en", Arc::new(OxfordFormatter::new("and")));
    for (culture, conjunction) in COLLECTION_CONJUNCTIONS {
        registry.register(culture, Arc::new(DefaultFormatter::new(conjunction)));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::culture::CultureKey;
    use crate::grammar::{Gender, WordForm};
    use crate::registry::Resolution;

    fn words(configurator: &Configurator, culture: &str, value: i64) -> String {
        configurator
            .number_to_words()
            .resolve_for_culture(Some(culture))
            .convert(value, Gender::Masculine, WordForm::Normal)
            .unwrap()
    }

    // ==================== Built-in Registration Tests ====================

    #[test]
    fn test_builtin_cultures() {
        let configurator = Configurator::new();
        let cultures: Vec<&str> = configurator
            .number_to_words()
            .registered_cultures()
            .into_iter()
            .map(CultureKey::as_str)
            .collect();
        assert_eq!(
            cultures,
            vec!["bn", "de", "de-ch", "de-li", "en", "en-gb", "es", "ja", "ru", "zh"]
        );
    }

    #[test]
    fn test_each_culture_gets_its_converter() {
        let configurator = Configurator::new();
        assert_eq!(words(&configurator, "en", 2), "two");
        assert_eq!(words(&configurator, "es", 2), "dos");
        assert_eq!(words(&configurator, "ru", 2), "два");
        assert_eq!(words(&configurator, "de", 2), "zwei");
        assert_eq!(words(&configurator, "ja", 2), "二");
        assert_eq!(words(&configurator, "zh", 2), "二");
        assert_eq!(words(&configurator, "bn", 2), "দুই");
    }

    #[test]
    fn test_regional_variants() {
        let configurator = Configurator::new();
        assert_eq!(words(&configurator, "en-GB", 101), "one hundred and one");
        assert_eq!(words(&configurator, "en-US", 101), "one hundred one");
        assert_eq!(words(&configurator, "de-LI", 30), "dreissig");
        assert_eq!(words(&configurator, "de-AT", 30), "dreißig");
    }

    #[test]
    fn test_default_is_english() {
        let configurator = Configurator::new();
        let (converter, source) = configurator
            .number_to_words()
            .resolve_with_source(&CultureKey::new("fr-FR"));
        assert_eq!(source, Resolution::Default);
        assert_eq!(converter.culture(), "en");
    }

    #[test]
    fn test_collection_formatters() {
        let configurator = Configurator::new();
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let humanize = |culture: &str| {
            configurator
                .collection_formatters()
                .resolve_for_culture(Some(culture))
                .humanize(&items, None)
        };
        assert_eq!(humanize("en-US"), "a, b, and c");
        assert_eq!(humanize("de"), "a, b und c");
        assert_eq!(humanize("ro-RO"), "a, b și c");
        assert_eq!(humanize("fr"), "a, b & c");
    }

    // ==================== Mutation Tests ====================

    #[test]
    fn test_owned_configurator_can_be_reconfigured() {
        let mut configurator = Configurator::new();
        configurator
            .number_to_words_mut()
            .register("en-AU", Arc::new(EnglishConverter::british()));
        assert_eq!(words(&configurator, "en-AU", 105), "one hundred and five");

        configurator
            .collection_formatters_mut()
            .register("fr", Arc::new(DefaultFormatter::new("et")));
        let items = vec!["x".to_string(), "y".to_string()];
        assert_eq!(
            configurator
                .collection_formatters()
                .resolve_for_culture(Some("fr"))
                .humanize(&items, None),
            "x et y"
        );
    }

    #[test]
    fn test_global_is_a_singleton() {
        let first = Configurator::global();
        let second = Configurator::global();
        assert!(std::ptr::eq(first, second));
        assert!(Configurator::is_installed());
        assert!(Configurator::new().install().is_err());
    }
}
