//! German: fused compounds below a million ("dreitausendfünfhundert"),
//! units-before-tens ("einundzwanzig"), separate feminine nouns from the
//! million upwards, and the Swiss spelling variant.

use super::{NumberToWordsConverter, NumberingFamily};
use crate::decomposer::{decompose, Magnitude, TermKind, Terms};
use crate::error::Result;
use crate::exceptions::ExceptionTable;
use crate::grammar::{Gender, GrammaticalAxes, NumberForms, WordForm};

const UNITS: [&str; 20] = [
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn", "elf",
    "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn", "neunzehn",
];

const CARDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::dense(0, &UNITS);

const TENS: [&str; 10] = [
    "null", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

const SWISS_TENS: [&str; 10] = [
    "null", "zehn", "zwanzig", "dreissig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

const UNITS_ORDINAL: [&str; 20] = [
    "null", "ers", "zwei", "drit", "vier", "fünf", "sechs", "sieb", "ach", "neun", "zehn", "elf",
    "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn", "neunzehn",
];

/// Ordinal stems below twenty; the gender ending is appended.
const ORDINAL_STEMS: ExceptionTable = ExceptionTable::dense(0, &UNITS_ORDINAL);

/// Nouns from the million upwards stand alone and are feminine; tausend and
/// hundert fuse with their count.
const SCALE: [Magnitude; 7] = [
    Magnitude::new(
        1_000_000_000_000_000_000,
        NumberForms::new("Trillion", "Trillionen", "Trillionen"),
        Gender::Feminine,
    ),
    Magnitude::new(
        1_000_000_000_000_000,
        NumberForms::new("Billiarde", "Billiarden", "Billiarden"),
        Gender::Feminine,
    ),
    Magnitude::new(
        1_000_000_000_000,
        NumberForms::new("Billion", "Billionen", "Billionen"),
        Gender::Feminine,
    ),
    Magnitude::new(
        1_000_000_000,
        NumberForms::new("Milliarde", "Milliarden", "Milliarden"),
        Gender::Feminine,
    ),
    Magnitude::new(
        1_000_000,
        NumberForms::new("Million", "Millionen", "Millionen"),
        Gender::Feminine,
    ),
    Magnitude::named(1_000, "tausend"),
    Magnitude::named(100, "hundert"),
];

const SEPARATE_NOUN_THRESHOLD: u64 = 1_000_000;

/// Magnitudes reachable by a 32-bit ordinal: Milliarde and below.
const ORDINAL_SCALE_START: usize = 3;

/// Lower-cased magnitude stems inside an ordinal compound.
struct OrdinalStem {
    /// Nothing follows: "einmilliardster".
    exact: &'static str,
    singular: &'static str,
    plural: &'static str,
}

static MILLIARD_STEM: OrdinalStem = OrdinalStem {
    exact: "milliard",
    singular: "milliarde",
    plural: "milliarden",
};

static MILLION_STEM: OrdinalStem = OrdinalStem {
    exact: "million",
    singular: "million",
    plural: "millionen",
};

const AXES: GrammaticalAxes = GrammaticalAxes {
    genders: &[Gender::Masculine, Gender::Feminine, Gender::Neuter],
    word_forms: &[WordForm::Normal, WordForm::Abbreviation],
    ordinal_word_forms: &[WordForm::Normal],
};

/// German converter; `swiss` builds the variant without "ß".
#[derive(Debug, Clone)]
pub struct GermanConverter {
    culture: &'static str,
    tens: &'static [&'static str; 10],
}

impl GermanConverter {
    pub fn new() -> Self {
        Self {
            culture: "de",
            tens: &TENS,
        }
    }

    /// Swiss and Liechtenstein spelling ("dreissig").
    pub fn swiss(culture: &'static str) -> Self {
        Self {
            culture,
            tens: &SWISS_TENS,
        }
    }

    /// A lone final one: "eins", "ein" before a noun, "eine" for feminine.
    fn one(gender: Gender, word_form: WordForm) -> &'static str {
        match (gender, word_form) {
            (Gender::Feminine, _) => "eine",
            (_, WordForm::Abbreviation) => "ein",
            _ => UNITS[1],
        }
    }

    fn below_hundred(&self, value: u64, gender: Gender, word_form: WordForm) -> String {
        match (value, CARDINAL_EXCEPTIONS.try_get(value)) {
            (0, _) => String::new(),
            (1, _) => Self::one(gender, word_form).to_string(),
            (_, Some(word)) => word.to_string(),
            _ => {
                let tens = self.tens[(value / 10) as usize];
                match value % 10 {
                    0 => tens.to_string(),
                    1 => format!("einund{tens}"),
                    units => format!("{}und{tens}", UNITS[units as usize]),
                }
            }
        }
    }

    /// Count fused in front of tausend/hundert and inside ordinal compounds.
    fn fused_count(&self, count: u64) -> String {
        self.cardinal(count, Gender::Masculine, WordForm::Abbreviation)
    }

    /// Separate nouns from the million upwards, then one fused compound for
    /// everything below.
    fn cardinal_terms(&self, value: u64, gender: Gender, word_form: WordForm) -> Terms {
        let decomposition = decompose(value, &SCALE);
        let mut terms = Terms::new();
        let mut compound = Terms::new();
        for group in &decomposition.groups {
            let forms = group.magnitude.forms;
            if group.divisor() < SEPARATE_NOUN_THRESHOLD {
                compound.push(TermKind::Multiplier, self.fused_count(group.multiplier));
                compound.push(TermKind::Magnitude, forms.singular);
            } else if group.multiplier == 1 {
                terms.push(TermKind::Multiplier, "eine");
                terms.push(TermKind::Magnitude, forms.singular);
            } else {
                let count = self.cardinal(group.multiplier, group.magnitude.gender, WordForm::Normal);
                terms.push(TermKind::Multiplier, count);
                terms.push(TermKind::Magnitude, forms.plural);
            }
        }
        compound.push(
            TermKind::Tail,
            self.below_hundred(decomposition.remainder, gender, word_form),
        );
        terms.push(TermKind::Tail, compound.join(""));
        terms
    }

    fn cardinal(&self, value: u64, gender: Gender, word_form: WordForm) -> String {
        match CARDINAL_EXCEPTIONS.try_get(value) {
            Some(_) if value == 1 => Self::one(gender, word_form).to_string(),
            Some(word) => word.to_string(),
            None => self.cardinal_terms(value, gender, word_form).join(" "),
        }
    }

    fn ending(gender: Gender) -> &'static str {
        match gender {
            Gender::Feminine => "te",
            Gender::Neuter => "tes",
            _ => "ter",
        }
    }

    fn ordinal_stem(divisor: u64) -> Option<&'static OrdinalStem> {
        match divisor {
            1_000_000_000 => Some(&MILLIARD_STEM),
            1_000_000 => Some(&MILLION_STEM),
            _ => None,
        }
    }

    fn ordinal(&self, value: u64, gender: Gender) -> String {
        let ending = Self::ending(gender);
        if let Some(stem) = ORDINAL_STEMS.try_get(value) {
            return format!("{stem}{ending}");
        }

        let decomposition = decompose(value, &SCALE[ORDINAL_SCALE_START..]);
        let (leading, last) = decomposition.split_final_magnitude();
        let mut terms = Terms::new();
        for group in leading {
            match Self::ordinal_stem(group.divisor()) {
                Some(stem) if group.multiplier == 1 => {
                    terms.push(TermKind::Multiplier, "eine");
                    terms.push(TermKind::Magnitude, stem.singular);
                }
                Some(stem) => {
                    terms.push(TermKind::Multiplier, self.fused_count(group.multiplier));
                    terms.push(TermKind::Magnitude, stem.plural);
                }
                None => {
                    terms.push(TermKind::Multiplier, self.fused_count(group.multiplier));
                    terms.push(TermKind::Magnitude, group.magnitude.forms.singular);
                }
            }
        }
        if let Some(group) = last {
            let name = Self::ordinal_stem(group.divisor())
                .map_or(group.magnitude.forms.singular, |stem| stem.exact);
            terms.push(TermKind::Multiplier, self.fused_count(group.multiplier));
            terms.push(TermKind::Magnitude, name);
        }

        let rest = decomposition.remainder;
        match ORDINAL_STEMS.try_get(rest) {
            Some(stem) if rest > 0 => terms.push(TermKind::Tail, stem),
            _ => {
                terms.push(
                    TermKind::Tail,
                    self.below_hundred(rest, Gender::Masculine, WordForm::Normal),
                );
                terms.push(TermKind::Tail, "s");
            }
        }
        terms.map_last(|word| format!("{word}{ending}"));
        terms.join("")
    }
}

impl Default for GermanConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberToWordsConverter for GermanConverter {
    fn culture(&self) -> &'static str {
        self.culture
    }

    fn family(&self) -> NumberingFamily {
        NumberingFamily::Thousand
    }

    fn axes(&self) -> GrammaticalAxes {
        AXES
    }

    fn convert(&self, value: i64, gender: Gender, word_form: WordForm) -> Result<String> {
        let (gender, word_form) = AXES.check_cardinal(self.culture, gender, word_form)?;
        let words = self.cardinal(value.unsigned_abs(), gender, word_form);
        Ok(if value < 0 {
            format!("minus {words}")
        } else {
            words
        })
    }

    fn convert_to_ordinal(&self, value: i32, gender: Gender, word_form: WordForm) -> Result<String> {
        let (gender, _) = AXES.check_ordinal(self.culture, gender, word_form)?;
        let words = self.ordinal(u64::from(value.unsigned_abs()), gender);
        Ok(if value < 0 {
            format!("minus {words}")
        } else {
            words
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;

    fn words(value: i64) -> String {
        GermanConverter::new()
            .convert(value, Gender::Masculine, WordForm::Normal)
            .unwrap()
    }

    fn ordinal(value: i32, gender: Gender) -> String {
        GermanConverter::new()
            .convert_to_ordinal(value, gender, WordForm::Normal)
            .unwrap()
    }

    // ==================== Cardinal Tests ====================

    #[test]
    fn test_units_and_tens() {
        assert_eq!(words(0), "null");
        assert_eq!(words(1), "eins");
        assert_eq!(words(12), "zwölf");
        assert_eq!(words(21), "einundzwanzig");
        assert_eq!(words(30), "dreißig");
        assert_eq!(words(99), "neunundneunzig");
    }

    #[test]
    fn test_fused_hundreds_and_thousands() {
        assert_eq!(words(100), "einhundert");
        assert_eq!(words(101), "einhunderteins");
        assert_eq!(words(1001), "eintausendeins");
        assert_eq!(words(3501), "dreitausendfünfhunderteins");
        assert_eq!(words(101_000), "einhunderteintausend");
    }

    #[test]
    fn test_separate_large_nouns() {
        assert_eq!(words(1_000_000), "eine Million");
        assert_eq!(words(2_000_000), "zwei Millionen");
        assert_eq!(words(1_000_001), "eine Million eins");
        assert_eq!(words(101_000_000), "einhunderteine Millionen");
        assert_eq!(words(1_000_000_000), "eine Milliarde");
        assert_eq!(
            words(2_500_000_000),
            "zwei Milliarden fünfhundert Millionen"
        );
    }

    #[test]
    fn test_negative_and_extremes() {
        assert_eq!(words(-5), "minus fünf");
        assert_eq!(
            words(i64::MIN),
            "minus neun Trillionen zweihundertdreiundzwanzig Billiarden dreihundertzweiundsiebzig Billionen \
sechsunddreißig Milliarden achthundertvierundfünfzig Millionen siebenhundertfünfundsiebzigtausendachthundertacht"
        );
    }

    #[test]
    fn test_gender_and_word_form_on_final_one() {
        let converter = GermanConverter::new();
        assert_eq!(
            converter.convert(1, Gender::Feminine, WordForm::Normal).unwrap(),
            "eine"
        );
        assert_eq!(
            converter.convert(1, Gender::Masculine, WordForm::Abbreviation).unwrap(),
            "ein"
        );
        assert_eq!(
            converter.convert(101, Gender::Neuter, WordForm::Abbreviation).unwrap(),
            "einhundertein"
        );
    }

    #[test]
    fn test_swiss_spelling() {
        let swiss = GermanConverter::swiss("de-CH");
        assert_eq!(swiss.culture(), "de-CH");
        assert_eq!(
            swiss.convert(33, Gender::Masculine, WordForm::Normal).unwrap(),
            "dreiunddreissig"
        );
        assert_eq!(words(33), "dreiunddreißig");
    }

    // ==================== Ordinal Tests ====================

    #[test]
    fn test_ordinal_small() {
        assert_eq!(ordinal(0, Gender::Masculine), "nullter");
        assert_eq!(ordinal(1, Gender::Masculine), "erster");
        assert_eq!(ordinal(1, Gender::Feminine), "erste");
        assert_eq!(ordinal(1, Gender::Neuter), "erstes");
        assert_eq!(ordinal(3, Gender::Masculine), "dritter");
        assert_eq!(ordinal(7, Gender::Masculine), "siebter");
        assert_eq!(ordinal(8, Gender::Masculine), "achter");
        assert_eq!(ordinal(19, Gender::Masculine), "neunzehnter");
    }

    #[test]
    fn test_ordinal_takes_s_after_twenty() {
        assert_eq!(ordinal(20, Gender::Masculine), "zwanzigster");
        assert_eq!(ordinal(21, Gender::Masculine), "einundzwanzigster");
        assert_eq!(ordinal(102, Gender::Feminine), "einhundertzweite");
        assert_eq!(ordinal(100, Gender::Masculine), "einhundertster");
        assert_eq!(ordinal(1000, Gender::Masculine), "eintausendster");
    }

    #[test]
    fn test_ordinal_large_magnitudes() {
        assert_eq!(ordinal(1_000_000, Gender::Masculine), "einmillionster");
        assert_eq!(ordinal(2_000_000, Gender::Masculine), "zweimillionster");
        assert_eq!(ordinal(1_000_001, Gender::Masculine), "einemillionerster");
        assert_eq!(ordinal(2_000_001, Gender::Masculine), "zweimillionenerster");
        assert_eq!(ordinal(1_000_000_000, Gender::Masculine), "einmilliardster");
    }

    #[test]
    fn test_exception_tables_answer_first() {
        assert_eq!(CARDINAL_EXCEPTIONS.try_get(0), Some("null"));
        assert_eq!(ORDINAL_STEMS.try_get(0), Some("null"));
        assert_eq!(ORDINAL_STEMS.try_get(3), Some("drit"));
        assert_eq!(ORDINAL_STEMS.try_get(20), None);
        assert_eq!(words(-17), "minus siebzehn");
        assert_eq!(ordinal(0, Gender::Neuter), "nulltes");
        assert_eq!(ordinal(-3, Gender::Feminine), "minus dritte");
    }

    #[test]
    fn test_ordinal_leading_groups_keep_their_count() {
        assert_eq!(ordinal(3_000_005, Gender::Masculine), "dreimillionenfünfter");
        assert_eq!(ordinal(2_100_000, Gender::Neuter), "zweimillioneneinhunderttausendstes");
        assert_eq!(ordinal(1_200, Gender::Feminine), "eintausendzweihundertste");
    }

    #[test]
    fn test_ordinal_negative() {
        assert_eq!(ordinal(-1, Gender::Masculine), "minus erster");
    }

    #[test]
    fn test_ordinal_abbreviation_rejected() {
        let err = GermanConverter::new()
            .convert_to_ordinal(1, Gender::Masculine, WordForm::Abbreviation)
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedOrdinalForm {
                culture: "de",
                gender: Gender::Masculine,
                word_form: WordForm::Abbreviation
            }
        );
    }

    #[test]
    fn test_none_gender_rejected() {
        let err = GermanConverter::new()
            .convert(3, Gender::None, WordForm::Normal)
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedGender { .. }));
    }
}
