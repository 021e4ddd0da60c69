//! Errors reported by numeral converters.
//!
//! Verbalization is all-or-nothing: a converter either produces the whole
//! string or one of these errors. Culture resolution never fails, so there is
//! no "unknown culture" variant here.

use crate::grammar::{Gender, WordForm};
use thiserror::Error;

/// Errors returned by `convert`, `convert_to_ordinal` and `convert_to_tuple`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value lies outside the domain the converter implements.
    #[error("{culture}: value {value} is outside the supported range {min}..={max}")]
    UnsupportedRange {
        culture: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The converter does not model the requested grammatical gender.
    #[error("{culture}: grammatical gender {gender:?} is not supported")]
    UnsupportedGender {
        culture: &'static str,
        gender: Gender,
    },

    /// The gender/word-form combination has no ordinal in this language.
    #[error("{culture}: no ordinal form for {gender:?} {word_form:?}")]
    UnsupportedOrdinalForm {
        culture: &'static str,
        gender: Gender,
        word_form: WordForm,
    },
}

/// Result alias used throughout the conversion code.
pub type Result<T> = std::result::Result<T, ConversionError>;
