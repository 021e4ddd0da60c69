//! Per-locale number-to-words converters.
//!
//! Every converter implements [`NumberToWordsConverter`] by composing a
//! decomposition [`Scale`](crate::decomposer::Scale), an
//! [`ExceptionTable`](crate::exceptions::ExceptionTable) and the
//! [`GrammaticalAxes`] it is sensitive to. Converters are stateless and
//! shared behind `Arc` by the registry.
//!
//! | Module | Cultures | Family |
//! |--------|----------|--------|
//! | `english` | `en`, `en-GB` | thousand |
//! | `spanish` | `es` | thousand |
//! | `russian` | `ru` | thousand |
//! | `german` | `de`, `de-CH`, `de-LI` | thousand |
//! | `japanese` | `ja` | myriad |
//! | `chinese` | `zh` | myriad |
//! | `bangla` | `bn` | lakh/crore |

mod bangla;
mod chinese;
mod english;
mod german;
mod japanese;
mod russian;
mod spanish;

pub use bangla::BanglaConverter;
pub use chinese::ChineseConverter;
pub use english::EnglishConverter;
pub use german::GermanConverter;
pub use japanese::JapaneseConverter;
pub use russian::RussianConverter;
pub use spanish::SpanishConverter;

use crate::error::{ConversionError, Result};
use crate::grammar::{Gender, GrammaticalAxes, WordForm};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a converter groups digits into magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingFamily {
    /// 10³ windows: thousand, million, billion …
    Thousand,
    /// 10⁴ windows: 万, 億, 兆 …
    Myriad,
    /// Thousand, then 10² windows: lakh, crore.
    Indian,
}

/// Shared interface of every locale converter.
pub trait NumberToWordsConverter: Send + Sync + fmt::Debug {
    /// Culture key this converter was built for (used in errors and logs).
    fn culture(&self) -> &'static str;

    fn family(&self) -> NumberingFamily;

    /// Agreement axes the converter models.
    fn axes(&self) -> GrammaticalAxes {
        GrammaticalAxes::GENDERLESS
    }

    /// Cardinal words for `value`.
    fn convert(&self, value: i64, gender: Gender, word_form: WordForm) -> Result<String>;

    /// Ordinal words for `value`.
    fn convert_to_ordinal(&self, value: i32, gender: Gender, word_form: WordForm)
        -> Result<String>;

    /// Multiplicative word ("double", "triple" …). Languages without a
    /// dedicated series return the cardinal.
    fn convert_to_tuple(&self, value: i32) -> Result<String> {
        self.convert(i64::from(value), Gender::default(), WordForm::Normal)
    }
}

/// Reject values outside `min..=max`.
pub(crate) fn check_range(culture: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(ConversionError::UnsupportedRange {
            culture,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn all_converters() -> Vec<Arc<dyn NumberToWordsConverter>> {
        vec![
            Arc::new(EnglishConverter::new()),
            Arc::new(EnglishConverter::british()),
            Arc::new(SpanishConverter::new()),
            Arc::new(RussianConverter::new()),
            Arc::new(GermanConverter::new()),
            Arc::new(GermanConverter::swiss("de-CH")),
            Arc::new(JapaneseConverter::new()),
            Arc::new(ChineseConverter::new()),
            Arc::new(BanglaConverter::new()),
        ]
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("bn", 5, -10, 10).is_ok());
        assert!(matches!(
            check_range("bn", 11, -10, 10),
            Err(ConversionError::UnsupportedRange { value: 11, .. })
        ));
    }

    #[test]
    fn test_every_converter_verbalizes_zero_and_one() {
        for converter in all_converters() {
            let zero = converter
                .convert(0, Gender::Masculine, WordForm::Normal)
                .expect("zero is always supported");
            let one = converter
                .convert(1, Gender::Masculine, WordForm::Normal)
                .expect("one is always supported");
            assert!(!zero.is_empty(), "{}", converter.culture());
            assert_ne!(zero, one, "{}", converter.culture());
        }
    }

    #[test]
    fn test_every_converter_is_deterministic() {
        for converter in all_converters() {
            for value in [7, 42, 1_000, 65_536, 1_234_567] {
                let first = converter.convert(value, Gender::Masculine, WordForm::Normal);
                let second = converter.convert(value, Gender::Masculine, WordForm::Normal);
                assert_eq!(first, second, "{}", converter.culture());
            }
        }
    }

    #[test]
    fn test_families() {
        assert_eq!(EnglishConverter::new().family(), NumberingFamily::Thousand);
        assert_eq!(JapaneseConverter::new().family(), NumberingFamily::Myriad);
        assert_eq!(ChineseConverter::new().family(), NumberingFamily::Myriad);
        assert_eq!(BanglaConverter::new().family(), NumberingFamily::Indian);
    }

    #[test]
    fn test_default_tuple_falls_back_to_cardinal() {
        let russian = RussianConverter::new();
        assert_eq!(russian.convert_to_tuple(5).unwrap(), "пять");
    }
}
