//! Chinese: myriad grouping with 零 marking a skipped place.

use super::{NumberToWordsConverter, NumberingFamily};
use crate::decomposer::{decompose, Magnitude};
use crate::error::Result;
use crate::exceptions::ExceptionTable;
use crate::grammar::{Gender, WordForm};

const UNITS: [&str; 11] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

const CARDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::dense(0, &UNITS);

/// 11–19 on their own drop the leading 一: 十一, not 一十一.
const TOP_LEVEL_EXCEPTIONS: ExceptionTable = ExceptionTable::dense(
    11,
    &["十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九"],
);

/// Marks a skipped place inside the number.
const SKIPPED_PLACE: &str = "零";

/// 万 windows above the thousand, then 千 and 百 as plain places.
const SCALE: [Magnitude; 5] = [
    Magnitude::named(1_000_000_000_000, "兆"),
    Magnitude::named(100_000_000, "亿"),
    Magnitude::named(10_000, "万"),
    Magnitude::named(1_000, "千"),
    Magnitude::named(100, "百"),
];

#[derive(Debug, Clone, Default)]
pub struct ChineseConverter;

impl ChineseConverter {
    pub fn new() -> Self {
        Self
    }

    fn below_hundred(value: u64) -> String {
        if value == 0 {
            return String::new();
        }
        match CARDINAL_EXCEPTIONS.try_get(value) {
            Some(word) => word.to_string(),
            None => {
                let mut words = format!("{}十", UNITS[(value / 10) as usize]);
                if value % 10 > 0 {
                    words.push_str(UNITS[(value % 10) as usize]);
                }
                words
            }
        }
    }

    fn cardinal(value: u64) -> String {
        if let Some(word) = CARDINAL_EXCEPTIONS.try_get(value) {
            return word.to_string();
        }

        let decomposition = decompose(value, &SCALE);
        let mut words = String::new();
        let mut remaining = value;
        for group in &decomposition.groups {
            remaining %= group.divisor();
            words.push_str(&Self::cardinal(group.multiplier));
            words.push_str(group.magnitude.forms.singular);
            if remaining > 0 && remaining < group.divisor() / 10 {
                words.push_str(SKIPPED_PLACE);
            }
        }
        words.push_str(&Self::below_hundred(decomposition.remainder));
        words
    }

    fn top_level(value: u64) -> String {
        match TOP_LEVEL_EXCEPTIONS.try_get(value) {
            Some(word) => word.to_string(),
            None => Self::cardinal(value),
        }
    }

    fn signed(value: i64) -> String {
        let words = Self::top_level(value.unsigned_abs());
        if value < 0 {
            format!("负 {words}")
        } else {
            words
        }
    }
}

impl NumberToWordsConverter for ChineseConverter {
    fn culture(&self) -> &'static str {
        "zh"
    }

    fn family(&self) -> NumberingFamily {
        NumberingFamily::Myriad
    }

    fn convert(&self, value: i64, _gender: Gender, _word_form: WordForm) -> Result<String> {
        Ok(Self::signed(value))
    }

    /// Negative ordinals fall back to the signed cardinal.
    fn convert_to_ordinal(&self, value: i32, _gender: Gender, _word_form: WordForm) -> Result<String> {
        if value < 0 {
            return Ok(Self::signed(i64::from(value)));
        }
        Ok(format!("第 {}", Self::top_level(u64::from(value.unsigned_abs()))))
    }
}
