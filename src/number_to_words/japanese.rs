//! Japanese: myriad grouping (万, 億, 兆, 京) with 十/百/千 inside each
//! four-digit window; a leading one before 十/百/千 is silent.

use super::{NumberToWordsConverter, NumberingFamily};
use crate::decomposer::{decompose, Magnitude};
use crate::error::Result;
use crate::exceptions::ExceptionTable;
use crate::grammar::{Gender, WordForm};

const CARDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::dense(
    0,
    &["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
);
const ORDINAL_SUFFIX: &str = "番目";

const SCALE: [Magnitude; 4] = [
    Magnitude::named(10_000_000_000_000_000, "京"),
    Magnitude::named(1_000_000_000_000, "兆"),
    Magnitude::named(100_000_000, "億"),
    Magnitude::named(10_000, "万"),
];

/// Place markers inside a window, highest first.
const PLACES: [(u64, &str); 3] = [(1000, "千"), (100, "百"), (10, "十")];

#[derive(Debug, Clone, Default)]
pub struct JapaneseConverter;

impl JapaneseConverter {
    pub fn new() -> Self {
        Self
    }

    fn digit(value: u64) -> &'static str {
        CARDINAL_EXCEPTIONS.try_get(value).unwrap_or_default()
    }

    /// One four-digit window, 1–9999. One is silent before 十, 百 and 千.
    fn window(value: u64) -> String {
        let mut words = String::new();
        let mut rest = value;
        for (place, marker) in PLACES {
            let digit = rest / place;
            if digit > 1 {
                words.push_str(Self::digit(digit));
            }
            if digit > 0 {
                words.push_str(marker);
            }
            rest %= place;
        }
        if rest > 0 {
            words.push_str(Self::digit(rest));
        }
        words
    }

    fn cardinal(value: u64) -> String {
        if let Some(word) = CARDINAL_EXCEPTIONS.try_get(value) {
            return word.to_string();
        }
        let decomposition = decompose(value, &SCALE);
        let mut words = String::new();
        for group in &decomposition.groups {
            words.push_str(&Self::window(group.multiplier));
            words.push_str(group.magnitude.forms.singular);
        }
        words.push_str(&Self::window(decomposition.remainder));
        words
    }

    fn signed(value: i64) -> String {
        let words = Self::cardinal(value.unsigned_abs());
        if value < 0 {
            format!("マイナス {words}")
        } else {
            words
        }
    }
}

impl NumberToWordsConverter for JapaneseConverter {
    fn culture(&self) -> &'static str {
        "ja"
    }

    fn family(&self) -> NumberingFamily {
        NumberingFamily::Myriad
    }

    fn convert(&self, value: i64, _gender: Gender, _word_form: WordForm) -> Result<String> {
        Ok(Self::signed(value))
    }

    /// Negative ordinals have no counter form and fall back to the signed
    /// cardinal.
    fn convert_to_ordinal(&self, value: i32, _gender: Gender, _word_form: WordForm) -> Result<String> {
        if value < 0 {
            return Ok(Self::signed(i64::from(value)));
        }
        Ok(format!("{}{ORDINAL_SUFFIX}", Self::cardinal(u64::from(value.unsigned_abs()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(value: i64) -> String {
        JapaneseConverter::new()
            .convert(value, Gender::None, WordForm::Normal)
            .unwrap()
    }

    #[test]
    fn test_window_words() {
        assert_eq!(words(0), "〇");
        assert_eq!(words(1), "一");
        assert_eq!(words(10), "十");
        assert_eq!(words(11), "十一");
        assert_eq!(words(21), "二十一");
        assert_eq!(words(111), "百十一");
        assert_eq!(words(1000), "千");
        assert_eq!(words(2345), "二千三百四十五");
    }

    #[test]
    fn test_myriad_groups() {
        assert_eq!(words(10_000), "一万");
        assert_eq!(words(10_001), "一万一");
        assert_eq!(words(123_456_789), "一億二千三百四十五万六千七百八十九");
        assert_eq!(words(100_000_000), "一億");
        assert_eq!(words(1_000_000_000_000), "一兆");
        assert_eq!(words(10_000_000_000_000_000), "一京");
    }

    #[test]
    fn test_negative() {
        assert_eq!(words(-5), "マイナス 五");
        assert_eq!(words(i64::MIN), format!("マイナス {}", JapaneseConverter::cardinal(9_223_372_036_854_775_808)));
        assert!(words(i64::MIN).starts_with("マイナス 九百二十二京"));
    }

    #[test]
    fn test_ordinal() {
        let converter = JapaneseConverter::new();
        let ordinal = |value| converter.convert_to_ordinal(value, Gender::None, WordForm::Normal).unwrap();
        assert_eq!(ordinal(0), "〇番目");
        assert_eq!(ordinal(1), "一番目");
        assert_eq!(ordinal(10_000), "一万番目");
        assert_eq!(ordinal(-3), "マイナス 三");
    }

    #[test]
    fn test_exception_table_answers_first() {
        let converter = JapaneseConverter::new();
        let ordinal = |value| converter.convert_to_ordinal(value, Gender::None, WordForm::Normal).unwrap();
        assert_eq!(CARDINAL_EXCEPTIONS.try_get(0), Some("〇"));
        assert_eq!(CARDINAL_EXCEPTIONS.try_get(10), None);
        assert_eq!(words(-9), "マイナス 九");
        assert_eq!(ordinal(0), "〇番目");
        assert_eq!(ordinal(9), "九番目");
        assert_eq!(ordinal(1_001), "千一番目");
    }

    #[test]
    fn test_gender_is_ignored() {
        let converter = JapaneseConverter::new();
        assert_eq!(
            converter.convert(7, Gender::Feminine, WordForm::Abbreviation).unwrap(),
            "七"
        );
    }
}
