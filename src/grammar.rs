//! Grammatical agreement axes: gender, word form and grammatical number.
//!
//! Each converter declares which axes it is sensitive to through
//! [`GrammaticalAxes`]. Requests on an axis a converter does not model at all
//! are ignored (a genderless language ignores `Gender`); requests for a value
//! the converter *does* model the axis for but lacks are reported as errors.

use crate::error::{ConversionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammatical gender requested for the counted noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
    Neuter,
    /// No agreement requested. Only genderless converters accept this.
    None,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
            Gender::None => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "masculine" => Ok(Gender::Masculine),
            "f" | "feminine" => Ok(Gender::Feminine),
            "n" | "neuter" => Ok(Gender::Neuter),
            "none" => Ok(Gender::None),
            other => Err(format!("unknown grammatical gender: '{other}'")),
        }
    }
}

/// Normal or abbreviated (elided) lexeme, e.g. Spanish "uno" vs "un".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordForm {
    #[default]
    Normal,
    Abbreviation,
}

/// Linguistic number used to inflect magnitude nouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalNumber {
    Singular,
    Paucal,
    Plural,
}

impl GrammaticalNumber {
    /// East Slavic rule: 1, 21, 31 … are singular; 2–4, 22–24 … paucal;
    /// everything else (including 11–19) plural.
    pub fn detect_slavic(n: u64) -> GrammaticalNumber {
        let tens = n % 100 / 10;
        if tens != 1 {
            let unit = n % 10;
            if unit == 1 {
                return GrammaticalNumber::Singular;
            }
            if unit > 1 && unit < 5 {
                return GrammaticalNumber::Paucal;
            }
        }
        GrammaticalNumber::Plural
    }
}

/// The three inflections of a counted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberForms {
    pub singular: &'static str,
    pub paucal: &'static str,
    pub plural: &'static str,
}

impl NumberForms {
    pub const fn new(singular: &'static str, paucal: &'static str, plural: &'static str) -> Self {
        Self {
            singular,
            paucal,
            plural,
        }
    }

    /// Same word for every grammatical number.
    pub const fn invariant(word: &'static str) -> Self {
        Self::new(word, word, word)
    }

    pub fn get(&self, number: GrammaticalNumber) -> &'static str {
        match number {
            GrammaticalNumber::Singular => self.singular,
            GrammaticalNumber::Paucal => self.paucal,
            GrammaticalNumber::Plural => self.plural,
        }
    }

    /// Pick the form agreeing with `count` under the Slavic rule.
    pub fn select_slavic(&self, count: u64) -> &'static str {
        self.get(GrammaticalNumber::detect_slavic(count))
    }
}

/// Declares the agreement axes a converter models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammaticalAxes {
    /// Genders the converter inflects for; empty means genderless.
    pub genders: &'static [Gender],
    /// Word forms distinguished in cardinals.
    pub word_forms: &'static [WordForm],
    /// Word forms distinguished in ordinals.
    pub ordinal_word_forms: &'static [WordForm],
}

impl GrammaticalAxes {
    /// A converter insensitive to gender and word form.
    pub const GENDERLESS: GrammaticalAxes = GrammaticalAxes {
        genders: &[],
        word_forms: &[WordForm::Normal],
        ordinal_word_forms: &[WordForm::Normal],
    };

    pub fn is_gendered(&self) -> bool {
        !self.genders.is_empty()
    }

    fn models_word_forms(&self) -> bool {
        self.word_forms.contains(&WordForm::Abbreviation)
    }

    fn check_gender(&self, culture: &'static str, gender: Gender) -> Result<Gender> {
        if !self.is_gendered() {
            return Ok(Gender::None);
        }
        if self.genders.contains(&gender) {
            Ok(gender)
        } else {
            Err(ConversionError::UnsupportedGender { culture, gender })
        }
    }

    /// Validate a cardinal request and normalize ignored axes.
    pub fn check_cardinal(
        &self,
        culture: &'static str,
        gender: Gender,
        word_form: WordForm,
    ) -> Result<(Gender, WordForm)> {
        let gender = self.check_gender(culture, gender)?;
        let word_form = if self.models_word_forms() {
            word_form
        } else {
            WordForm::Normal
        };
        Ok((gender, word_form))
    }

    /// Validate an ordinal request and normalize ignored axes.
    pub fn check_ordinal(
        &self,
        culture: &'static str,
        gender: Gender,
        word_form: WordForm,
    ) -> Result<(Gender, WordForm)> {
        let gender = self.check_gender(culture, gender)?;
        if !self.models_word_forms() {
            return Ok((gender, WordForm::Normal));
        }
        if self.ordinal_word_forms.contains(&word_form) {
            Ok((gender, word_form))
        } else {
            Err(ConversionError::UnsupportedOrdinalForm {
                culture,
                gender,
                word_form,
            })
        }
    }
}
