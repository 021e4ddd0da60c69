//! English: thousand-grouping, hyphenated tens, irregular ordinals.

use super::{NumberToWordsConverter, NumberingFamily};
use crate::decomposer::{decompose, Hundreds, Magnitude, Scale, TermKind, Terms};
use crate::error::Result;
use crate::exceptions::ExceptionTable;
use crate::grammar::{Gender, WordForm};

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Everything below twenty is irregular.
const CARDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::dense(0, &UNITS);

const ORDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::new(&[
    (0, "zeroth"),
    (1, "first"),
    (2, "second"),
    (3, "third"),
    (5, "fifth"),
    (8, "eighth"),
    (9, "ninth"),
    (12, "twelfth"),
]);

const TUPLES: ExceptionTable = ExceptionTable::new(&[
    (1, "single"),
    (2, "double"),
    (3, "triple"),
    (4, "quadruple"),
    (5, "quintuple"),
    (6, "sextuple"),
    (7, "septuple"),
    (8, "octuple"),
    (9, "nonuple"),
    (10, "decuple"),
    (100, "centuple"),
    (1000, "milluple"),
]);

const SCALE: [Magnitude; 6] = [
    Magnitude::named(1_000_000_000_000_000_000, "quintillion"),
    Magnitude::named(1_000_000_000_000_000, "quadrillion"),
    Magnitude::named(1_000_000_000_000, "trillion"),
    Magnitude::named(1_000_000_000, "billion"),
    Magnitude::named(1_000_000, "million"),
    Magnitude::named(1_000, "thousand"),
];

/// English converter. The British variant inserts "and" before the final
/// group below one hundred.
#[derive(Debug, Clone)]
pub struct EnglishConverter {
    culture: &'static str,
    conjunction: Option<&'static str>,
}

impl EnglishConverter {
    pub fn new() -> Self {
        Self {
            culture: "en",
            conjunction: None,
        }
    }

    pub fn british() -> Self {
        Self {
            culture: "en-GB",
            conjunction: Some("and"),
        }
    }

    fn scale(&self) -> &'static Scale {
        &SCALE
    }

    /// Words below one hundred: "seven", "forty", "forty-two".
    fn tail_words(tail: u64) -> String {
        if let Some(word) = CARDINAL_EXCEPTIONS.try_get(tail) {
            return word.to_string();
        }
        let tens = TENS[(tail / 10) as usize];
        match tail % 10 {
            0 => tens.to_string(),
            units => format!("{tens}-{}", UNITS[units as usize]),
        }
    }

    fn ordinal_tail_words(tail: u64) -> String {
        if let Some(word) = ORDINAL_EXCEPTIONS.try_get(tail) {
            return word.to_string();
        }
        if tail < 20 {
            return format!("{}th", UNITS[tail as usize]);
        }
        let tens = TENS[(tail / 10) as usize];
        match tail % 10 {
            0 => format!("{}ieth", tens.trim_end_matches('y')),
            units => format!("{tens}-{}", Self::ordinal_tail_words(units)),
        }
    }

    fn push_below_thousand(terms: &mut Terms, value: u64) {
        let Hundreds { hundreds, tail } = Hundreds::split(value);
        if hundreds > 0 {
            terms.push(
                TermKind::Hundreds,
                format!("{} hundred", UNITS[hundreds as usize]),
            );
        }
        if tail > 0 {
            terms.push(TermKind::Tail, Self::tail_words(tail));
        }
    }

    /// Cardinal terms for a non-zero magnitude. Multipliers recurse through
    /// the same routine and get their own conjunction pass.
    fn cardinal_terms(&self, value: u64) -> Terms {
        let decomposition = decompose(value, self.scale());
        let mut terms = Terms::new();
        for group in &decomposition.groups {
            let mut multiplier = self.cardinal_terms(group.multiplier);
            self.insert_conjunction(&mut multiplier);
            terms.push(TermKind::Multiplier, multiplier.join(" "));
            terms.push(TermKind::Magnitude, group.magnitude.forms.singular);
        }
        Self::push_below_thousand(&mut terms, decomposition.remainder);
        terms
    }

    fn insert_conjunction(&self, terms: &mut Terms) {
        if let Some(token) = self.conjunction {
            terms.insert_conjunction_before_tail(token);
        }
    }

    fn exception(word: &str) -> Terms {
        let mut terms = Terms::new();
        terms.push(TermKind::Tail, word);
        terms
    }

    fn finish(&self, negative: bool, mut terms: Terms) -> String {
        self.insert_conjunction(&mut terms);
        let words = terms.join(" ");
        if negative {
            format!("minus {words}")
        } else {
            words
        }
    }
}

impl Default for EnglishConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberToWordsConverter for EnglishConverter {
    fn culture(&self) -> &'static str {
        self.culture
    }

    fn family(&self) -> NumberingFamily {
        NumberingFamily::Thousand
    }

    fn convert(&self, value: i64, _gender: Gender, _word_form: WordForm) -> Result<String> {
        let magnitude = value.unsigned_abs();
        let terms = match CARDINAL_EXCEPTIONS.try_get(magnitude) {
            Some(word) => Self::exception(word),
            None => self.cardinal_terms(magnitude),
        };
        Ok(self.finish(value < 0, terms))
    }

    fn convert_to_ordinal(&self, value: i32, _gender: Gender, _word_form: WordForm) -> Result<String> {
        let magnitude = u64::from(value.unsigned_abs());
        if let Some(word) = ORDINAL_EXCEPTIONS.try_get(magnitude) {
            return Ok(self.finish(value < 0, Self::exception(word)));
        }

        let mut terms = self.cardinal_terms(magnitude);
        let tail = magnitude % 100;
        if tail > 0 {
            terms.map_last(|_| Self::ordinal_tail_words(tail));
        } else {
            // hundred, thousand, million … all take a plain "th"
            terms.map_last(|word| format!("{word}th"));
        }
        Ok(self.finish(value < 0, terms))
    }

    fn convert_to_tuple(&self, value: i32) -> Result<String> {
        let magnitude = u64::from(value.unsigned_abs());
        Ok(match TUPLES.try_get(magnitude) {
            Some(word) => word.to_string(),
            None => format!("{magnitude}-tuple"),
        })
    }
}
