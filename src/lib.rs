//! Locale-aware number verbalization.
//!
//! Integers become cardinal words ("one thousand two hundred thirty-four"),
//! ordinal words ("twenty-first", "vigésimo primero", "двухтысячный") and
//! multiplicative words ("double"), in the grammar of the requested culture.
//!
//! # Architecture
//!
//! - `culture`: culture keys, parent derivation and the ambient culture
//! - `registry`: culture-keyed strategy lookup with parent/default fallback
//! - `configurator`: the registries, owned or installed process-wide
//! - `number_to_words`: the converter trait and one converter per language
//! - `decomposer`, `exceptions`, `grammar`: the building blocks converters
//!   are composed from
//! - `collection`: "a, b and c" list formatting
//!
//! # Example
//!
//! ```rust
//! use numeral_words::{to_words_with, Gender, WordForm};
//!
//! let words = to_words_with(21, Some("es"), Gender::Feminine, WordForm::Normal)?;
//! assert_eq!(words, "veintiuna");
//! # Ok::<(), numeral_words::ConversionError>(())
//! ```

pub mod collection;
pub mod config;
pub mod configurator;
pub mod culture;
pub mod decomposer;
pub mod error;
pub mod exceptions;
pub mod grammar;
pub mod number_to_words;
pub mod registry;

pub use collection::CollectionFormatter;
pub use config::Config;
pub use configurator::Configurator;
pub use culture::{current_culture, scoped_culture, set_current_culture, CultureGuard, CultureKey};
pub use error::{ConversionError, Result};
pub use grammar::{Gender, GrammaticalNumber, WordForm};
pub use number_to_words::{NumberToWordsConverter, NumberingFamily};
pub use registry::{LocaleRegistry, Resolution};

use std::fmt;
use std::sync::Arc;
use tracing::debug;

fn converter(culture: Option<&str>) -> Arc<dyn NumberToWordsConverter> {
    Configurator::global()
        .number_to_words()
        .resolve_for_culture(culture)
}

fn log_failure(operation: &'static str, value: i64, err: &ConversionError) {
    debug!(operation, value, error = %err, "Numeral conversion failed");
}

/// Cardinal words in the current culture with the configured default gender.
pub fn to_words(value: i64) -> Result<String> {
    to_words_with(value, None, Config::process().default_gender, WordForm::Normal)
}

/// Cardinal words for `culture` (`None` = current culture).
pub fn to_words_with(
    value: i64,
    culture: Option<&str>,
    gender: Gender,
    word_form: WordForm,
) -> Result<String> {
    converter(culture)
        .convert(value, gender, word_form)
        .inspect_err(|err| log_failure("cardinal", value, err))
}

/// Ordinal words in the current culture with the configured default gender.
pub fn to_ordinal_words(value: i32) -> Result<String> {
    to_ordinal_words_with(value, None, Config::process().default_gender, WordForm::Normal)
}

/// Ordinal words for `culture` (`None` = current culture).
pub fn to_ordinal_words_with(
    value: i32,
    culture: Option<&str>,
    gender: Gender,
    word_form: WordForm,
) -> Result<String> {
    converter(culture)
        .convert_to_ordinal(value, gender, word_form)
        .inspect_err(|err| log_failure("ordinal", i64::from(value), err))
}

/// Multiplicative word ("double", "triple") for `culture`.
pub fn to_tuple(value: i32, culture: Option<&str>) -> Result<String> {
    converter(culture)
        .convert_to_tuple(value)
        .inspect_err(|err| log_failure("tuple", i64::from(value), err))
}

/// Format `items` as a list using the culture's collection formatter.
pub fn humanize_collection<I>(items: I, culture: Option<&str>) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let formatter = Configurator::global()
        .collection_formatters()
        .resolve_for_culture(culture);
    collection::humanize_display(formatter.as_ref(), items, None)
}
