//! Bangla: lakh/crore grouping and a fully irregular 0–99 table.
//! Values outside the 32-bit range are rejected.

use super::{check_range, NumberToWordsConverter, NumberingFamily};
use crate::decomposer::{decompose, Hundreds, Magnitude, TermKind, Terms};
use crate::error::Result;
use crate::exceptions::ExceptionTable;
use crate::grammar::{Gender, WordForm};

const BELOW_HUNDRED: [&str; 100] = [
    "শূন্য",
    "এক",
    "দুই",
    "তিন",
    "চার",
    "পাঁচ",
    "ছয়",
    "সাত",
    "আট",
    "নয়",
    "দশ",
    "এগারো",
    "বারো",
    "তেরো",
    "চোদ্দ",
    "পনেরো",
    "ষোল",
    "সতেরো",
    "আঠারো",
    "উনিশ",
    "বিশ",
    "একুশ",
    "বাইশ",
    "তেইশ",
    "চব্বিশ",
    "পঁচিশ",
    "ছাব্বিশ",
    "সাতাশ",
    "আঠাশ",
    "উনতিরিশ",
    "তিরিশ",
    "একতিরিশ",
    "বত্রিশ",
    "তেত্রিশ",
    "চৌঁতিরিশ",
    "পঁয়তিরিশ",
    "ছত্রিশ",
    "সাঁইতিরিশ",
    "আটতিরিশ",
    "উনচল্লিশ",
    "চল্লিশ",
    "একচল্লিশ",
    "বিয়াল্লিশ",
    "তেতাল্লিশ",
    "চুয়াল্লিশ",
    "পঁয়তাল্লিশ",
    "ছেচাল্লিশ",
    "সাতচল্লিশ",
    "আটচল্লিশ",
    "উনপঞ্চাশ",
    "পঞ্চাশ",
    "একান্ন",
    "বাহান্ন",
    "তিপ্পান্ন",
    "চুয়ান্ন",
    "পঞ্চান্ন",
    "ছাপ্পান্ন",
    "সাতান্ন",
    "আটান্ন",
    "উনষাট",
    "ষাট",
    "একষট্টি",
    "বাষট্টি",
    "তেষট্টি",
    "চৌষট্টি",
    "পঁয়ষট্টি",
    "ছেষট্টি",
    "সাতষট্টি",
    "আটষট্টি",
    "উনসত্তর",
    "সত্তর",
    "একাত্তর",
    "বাহাত্তর",
    "তিয়াত্তর",
    "চুয়াত্তর",
    "পঁচাত্তর",
    "ছিয়াত্তর",
    "সাতাত্তর",
    "আটাত্তর",
    "উনআশি",
    "আশি",
    "একাশি",
    "বিরাশি",
    "তিরাশি",
    "চুরাশি",
    "পঁচাশি",
    "ছিয়াশি",
    "সাতাশি",
    "আটাশি",
    "উননব্বই",
    "নব্বই",
    "একানব্বই",
    "বিরানব্বই",
    "তিরানব্বিই",
    "চুরানব্বই",
    "পঁচানব্বই",
    "ছিয়ানব্বই",
    "সাতানব্বই",
    "আটানব্বই",
    "নিরানব্বই",
];

const CARDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::dense(0, &BELOW_HUNDRED);

const HUNDREDS: [&str; 10] = [
    "শূন্য",
    "একশ",
    "দুইশ",
    "তিনশ",
    "চারশ",
    "পাঁচশ",
    "ছয়শ",
    "সাতশ",
    "আটশ",
    "নয়শ",
];

const ORDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::new(&[
    (100, "শত তম"),
    (1000, "হাজার তম"),
    (100_000, "লক্ষ তম"),
    (10_000_000, "কোটি তম"),
])
.with_dense(
    1,
    &[
        "প্রথম",
        "দ্বিতীয়",
        "তৃতীয়",
        "চতুর্থ",
        "পঞ্চম",
        "ষষ্ট",
        "সপ্তম",
        "অষ্টম",
        "নবম",
        "দশম",
        "একাদশ",
        "দ্বাদশ",
        "ত্রয়োদশ",
        "চতুর্দশ",
        "পঞ্চদশ",
        "ষোড়শ",
        "সপ্তদশ",
        "অষ্টাদশ",
    ],
);

const SCALE: [Magnitude; 3] = [
    Magnitude::named(10_000_000, "কোটি"),
    Magnitude::named(100_000, "লক্ষ"),
    Magnitude::named(1_000, "হাজার"),
];

const CULTURE: &str = "bn";

#[derive(Debug, Clone, Default)]
pub struct BanglaConverter;

impl BanglaConverter {
    pub fn new() -> Self {
        Self
    }

    fn cardinal(value: u64) -> String {
        if let Some(word) = CARDINAL_EXCEPTIONS.try_get(value) {
            return word.to_string();
        }

        let decomposition = decompose(value, &SCALE);
        let mut terms = Terms::new();
        for group in &decomposition.groups {
            terms.push(TermKind::Multiplier, Self::cardinal(group.multiplier));
            terms.push(TermKind::Magnitude, group.magnitude.forms.singular);
        }
        let Hundreds { hundreds, tail } = Hundreds::split(decomposition.remainder);
        if hundreds > 0 {
            terms.push(TermKind::Hundreds, HUNDREDS[hundreds as usize]);
        }
        if tail > 0 {
            terms.push(TermKind::Tail, BELOW_HUNDRED[tail as usize]);
        }
        terms.join(" ")
    }
}

impl NumberToWordsConverter for BanglaConverter {
    fn culture(&self) -> &'static str {
        CULTURE
    }

    fn family(&self) -> NumberingFamily {
        NumberingFamily::Indian
    }

    fn convert(&self, value: i64, _gender: Gender, _word_form: WordForm) -> Result<String> {
        check_range(CULTURE, value, i64::from(i32::MIN), i64::from(i32::MAX))?;
        let words = Self::cardinal(value.unsigned_abs());
        Ok(if value < 0 {
            format!("ঋণাত্মক {words}")
        } else {
            words
        })
    }

    fn convert_to_ordinal(&self, value: i32, gender: Gender, word_form: WordForm) -> Result<String> {
        if let Ok(exact) = u64::try_from(value) {
            if let Some(word) = ORDINAL_EXCEPTIONS.try_get(exact) {
                return Ok(word.to_string());
            }
        }
        Ok(format!("{} তম", self.convert(i64::from(value), gender, word_form)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;

    fn words(value: i64) -> String {
        BanglaConverter::new()
            .convert(value, Gender::None, WordForm::Normal)
            .unwrap()
    }

    fn ordinal(value: i32) -> String {
        BanglaConverter::new()
            .convert_to_ordinal(value, Gender::None, WordForm::Normal)
            .unwrap()
    }

    // ==================== Cardinal Tests ====================

    #[test]
    fn test_irregular_below_hundred() {
        assert_eq!(words(0), "শূন্য");
        assert_eq!(words(1), "এক");
        assert_eq!(words(21), "একুশ");
        assert_eq!(words(99), "নিরানব্বই");
    }

    #[test]
    fn test_hundreds_and_thousands() {
        assert_eq!(words(100), "একশ");
        assert_eq!(words(105), "একশ পাঁচ");
        assert_eq!(words(1000), "এক হাজার");
        assert_eq!(words(2345), "দুই হাজার তিনশ পঁয়তাল্লিশ");
    }

    #[test]
    fn test_lakh_and_crore() {
        assert_eq!(words(100_000), "এক লক্ষ");
        assert_eq!(words(10_000_000), "এক কোটি");
        assert_eq!(words(12_34_56_789), "বারো কোটি চৌঁতিরিশ লক্ষ ছাপ্পান্ন হাজার সাতশ উননব্বই");
    }

    #[test]
    fn test_negative() {
        assert_eq!(words(-5), "ঋণাত্মক পাঁচ");
        assert_eq!(
            words(i64::from(i32::MIN)),
            "ঋণাত্মক দুইশ চোদ্দ কোটি চুয়াত্তর লক্ষ তিরাশি হাজার ছয়শ আটচল্লিশ"
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = BanglaConverter::new()
            .convert(i64::from(i32::MAX) + 1, Gender::None, WordForm::Normal)
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedRange {
                culture: "bn",
                value: 2_147_483_648,
                min: -2_147_483_648,
                max: 2_147_483_647
            }
        );
        assert!(BanglaConverter::new()
            .convert(i64::MIN, Gender::None, WordForm::Normal)
            .is_err());
    }

    // ==================== Ordinal Tests ====================

    #[test]
    fn test_ordinal_exceptions() {
        assert_eq!(ordinal(1), "প্রথম");
        assert_eq!(ordinal(18), "অষ্টাদশ");
        assert_eq!(ordinal(100), "শত তম");
        assert_eq!(ordinal(10_000_000), "কোটি তম");
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal(0), "শূন্য তম");
        assert_eq!(ordinal(19), "উনিশ তম");
        assert_eq!(ordinal(101), "একশ এক তম");
        assert_eq!(ordinal(-1), "ঋণাত্মক এক তম");
    }
}
