//! Spanish: gendered cardinals and ordinals, apocopated forms ("un",
//! "veintiún", "primer", "tercer"), the "y" ligature between tens and units,
//! and the long-scale millón/billón/trillón.

use super::{NumberToWordsConverter, NumberingFamily};
use crate::decomposer::{decompose, Magnitude, TermKind, Terms};
use crate::error::Result;
use crate::exceptions::ExceptionTable;
use crate::grammar::{Gender, GrammaticalAxes, NumberForms, WordForm};

const UNITS: [&str; 30] = [
    "cero",
    "uno",
    "dos",
    "tres",
    "cuatro",
    "cinco",
    "seis",
    "siete",
    "ocho",
    "nueve",
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

/// Zero to twenty-nine are single words.
const CARDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::dense(0, &UNITS);

/// "cien" replaces "ciento" when nothing follows.
const CONTRACTIONS: ExceptionTable = ExceptionTable::new(&[(100, "cien")]);

const TENS: [&str; 10] = [
    "cero", "diez", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];

const HUNDREDS_ROOT: [&str; 10] = [
    "cero",
    "ciento",
    "doscient",
    "trescient",
    "cuatrocient",
    "quinient",
    "seiscient",
    "setecient",
    "ochocient",
    "novecient",
];

const ORDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::new(&[(0, "cero")]);

/// Unit ordinal stems; the gender ending is appended.
const ORDINAL_UNIT_STEMS: ExceptionTable = ExceptionTable::dense(
    1,
    &["primer", "segund", "tercer", "cuart", "quint", "sext", "séptim", "octav", "noven"],
);

const TENTHS_ROOT: [&str; 10] = [
    "",
    "décim",
    "vigésim",
    "trigésim",
    "cuadragésim",
    "quincuagésim",
    "sexagésim",
    "septuagésim",
    "octogésim",
    "nonagésim",
];

const HUNDREDTHS_ROOT: [&str; 10] = [
    "",
    "centésim",
    "ducentésim",
    "tricentésim",
    "cuadringentésim",
    "quingentésim",
    "sexcentésim",
    "septingentésim",
    "octingentésim",
    "noningentésim",
];

const THOUSANDTHS_ROOT: [&str; 10] = [
    "",
    "milésim",
    "dosmilésim",
    "tresmilésim",
    "cuatromilésim",
    "cincomilésim",
    "seismilésim",
    "sietemilésim",
    "ochomilésim",
    "nuevemilésim",
];

const TUPLES: ExceptionTable = ExceptionTable::dense(
    0,
    &[
        "cero veces",
        "una vez",
        "doble",
        "triple",
        "cuádruple",
        "quíntuple",
        "séxtuple",
        "séptuple",
        "óctuple",
        "nonuplo",
        "décuplo",
        "undécuplo",
        "duodécuplo",
        "terciodécuplo",
    ],
);

/// Magnitudes above the thousand; the thousand itself never pluralizes.
const LARGE_SCALE: [Magnitude; 3] = [
    Magnitude::new(
        1_000_000_000_000_000_000,
        NumberForms::new("trillón", "trillones", "trillones"),
        Gender::Masculine,
    ),
    Magnitude::new(
        1_000_000_000_000,
        NumberForms::new("billón", "billones", "billones"),
        Gender::Masculine,
    ),
    Magnitude::new(
        1_000_000,
        NumberForms::new("millón", "millones", "millones"),
        Gender::Masculine,
    ),
];

const AXES: GrammaticalAxes = GrammaticalAxes {
    genders: &[Gender::Masculine, Gender::Feminine, Gender::Neuter],
    word_forms: &[WordForm::Normal, WordForm::Abbreviation],
    ordinal_word_forms: &[WordForm::Normal, WordForm::Abbreviation],
};

const CULTURE: &str = "es";

/// Spanish converter. Neuter agreement uses the masculine forms.
#[derive(Debug, Clone, Default)]
pub struct SpanishConverter;

impl SpanishConverter {
    pub fn new() -> Self {
        Self
    }

    fn ending(gender: Gender) -> &'static str {
        if gender == Gender::Feminine {
            "a"
        } else {
            "o"
        }
    }

    fn one(gender: Gender, word_form: WordForm) -> &'static str {
        match (gender, word_form) {
            (Gender::Feminine, _) => "una",
            (_, WordForm::Abbreviation) => "un",
            _ => "uno",
        }
    }

    fn twenty_one(gender: Gender, word_form: WordForm) -> &'static str {
        match (gender, word_form) {
            (Gender::Feminine, _) => "veintiuna",
            (_, WordForm::Abbreviation) => "veintiún",
            _ => "veintiuno",
        }
    }

    /// Single-word cardinals below thirty, agreeing in gender and form.
    fn unit_word(value: u64, gender: Gender, word_form: WordForm) -> Option<&'static str> {
        let word = CARDINAL_EXCEPTIONS.try_get(value)?;
        Some(match value {
            1 => Self::one(gender, word_form),
            21 => Self::twenty_one(gender, word_form),
            _ => word,
        })
    }

    /// 1–99; tens and units stay separate terms for the "y" ligature.
    fn push_below_hundred(terms: &mut Terms, value: u64, gender: Gender, word_form: WordForm) {
        if value == 0 {
            return;
        }
        if let Some(word) = Self::unit_word(value, gender, word_form) {
            terms.push(TermKind::Tail, word);
            return;
        }
        terms.push(TermKind::Tens, TENS[(value / 10) as usize]);
        if value % 10 > 0 {
            if let Some(word) = Self::unit_word(value % 10, gender, word_form) {
                terms.push(TermKind::Tail, word);
            }
        }
    }

    fn hundreds(value: u64, gender: Gender) -> String {
        if let Some(word) = CONTRACTIONS.try_get(value) {
            return word.to_string();
        }
        match value / 100 {
            0 => String::new(),
            1 => HUNDREDS_ROOT[1].to_string(),
            h => {
                let plural = if gender == Gender::Feminine { "as" } else { "os" };
                format!("{}{plural}", HUNDREDS_ROOT[h as usize])
            }
        }
    }

    fn push_thousands(&self, terms: &mut Terms, value: u64, gender: Gender) {
        let count = value / 1000;
        if count == 0 {
            return;
        }
        if count > 1 {
            let word_form = if gender == Gender::Feminine {
                WordForm::Normal
            } else {
                WordForm::Abbreviation
            };
            terms.push(TermKind::Multiplier, self.cardinal(count, gender, word_form));
        }
        terms.push(TermKind::Magnitude, "mil");
    }

    fn cardinal_terms(&self, value: u64, gender: Gender, word_form: WordForm) -> Terms {
        let decomposition = decompose(value, &LARGE_SCALE);
        let mut terms = Terms::new();
        for group in &decomposition.groups {
            let forms = group.magnitude.forms;
            match group.multiplier {
                1 => {
                    terms.push(TermKind::Multiplier, "un");
                    terms.push(TermKind::Magnitude, forms.singular);
                }
                count => {
                    let multiplier = self.cardinal(count, Gender::Masculine, WordForm::Abbreviation);
                    terms.push(TermKind::Multiplier, multiplier);
                    terms.push(TermKind::Magnitude, forms.plural);
                }
            }
        }

        let rest = decomposition.remainder;
        self.push_thousands(&mut terms, rest, gender);
        terms.push(TermKind::Hundreds, Self::hundreds(rest % 1000, gender));
        Self::push_below_hundred(&mut terms, rest % 100, gender, word_form);
        terms.insert_between(TermKind::Tens, TermKind::Tail, "y");
        terms
    }

    fn cardinal(&self, value: u64, gender: Gender, word_form: WordForm) -> String {
        if let Some(word) = Self::unit_word(value, gender, word_form) {
            return word.to_string();
        }
        self.cardinal_terms(value, gender, word_form).join(" ")
    }

    fn mapped_ordinal(value: u64, divisor: u64, roots: &[&str; 10], gender: Gender) -> String {
        match value / divisor {
            0 => String::new(),
            digit => format!("{}{}", roots[digit as usize], Self::ending(gender)),
        }
    }

    fn ordinal_units(value: u64, gender: Gender, word_form: WordForm) -> String {
        let Some(stem) = ORDINAL_UNIT_STEMS.try_get(value) else {
            return String::new();
        };
        let apocopated = matches!(value, 1 | 3) && word_form == WordForm::Abbreviation;
        let ending = match gender {
            Gender::Feminine => "a",
            _ if apocopated => "",
            _ => "o",
        };
        format!("{stem}{ending}")
    }

    fn is_round_for_compound(n: u64) -> bool {
        (n % 10_000 == 0 && n < 100_000)
            || (n % 100_000 == 0 && n < 1_000_000)
            || (n % 1_000_000 == 0 && n < 10_000_000)
            || (n % 10_000_000 == 0 && n < 100_000_000)
            || (n % 100_000_000 == 0 && n < 1_000_000_000)
            || (n % 1_000_000_000 == 0 && n < i32::MAX as u64)
    }

    /// Ordinals from ten thousand up: the cardinal thousands followed by
    /// "-ésimo". Round and small values fuse into one word ("diezmilésimo").
    fn thousandths_compound(&self, n: u64, gender: Gender) -> String {
        if n / 10_000 == 0 {
            return String::new();
        }
        let mut word = self.cardinal(n / 1000 * 1000, gender, WordForm::Normal);
        if n < 30_000 || Self::is_round_for_compound(n) {
            if n == 21_000 {
                word = word.replace('a', "").replace('ú', "u");
            }
            if let Some(index) = word.rfind(' ') {
                word.remove(index);
            }
        }
        format!("{word}ésim{}", Self::ending(gender))
    }

    fn ordinal(&self, n: u64, gender: Gender, word_form: WordForm) -> String {
        if let Some(word) = ORDINAL_EXCEPTIONS.try_get(n) {
            return word.to_string();
        }

        if n >= 1_000_000_000 && n % 1_000_000 == 0 {
            let cardinal = self.cardinal(n / 1_000_000, gender, WordForm::Abbreviation);
            let separator = if n == 1_000_000_000 { "" } else { " " };
            let millionth = self.ordinal(1_000_000, gender, WordForm::Normal);
            return format!("{cardinal}{separator}{millionth}");
        }

        if n >= 1_000_000 && n % 1_000_000 == 0 {
            return self
                .ordinal(n / 1000, gender, WordForm::Normal)
                .replace("milésim", "millonésim");
        }

        let mut terms = Terms::new();
        terms.push(TermKind::Magnitude, self.thousandths_compound(n, gender));
        let rest = if n / 10_000 > 0 { n % 1000 } else { n };
        terms.push(
            TermKind::Magnitude,
            Self::mapped_ordinal(rest, 1000, &THOUSANDTHS_ROOT, gender),
        );
        terms.push(
            TermKind::Hundreds,
            Self::mapped_ordinal(rest % 1000, 100, &HUNDREDTHS_ROOT, gender),
        );
        terms.push(
            TermKind::Tens,
            Self::mapped_ordinal(rest % 100, 10, &TENTHS_ROOT, gender),
        );
        terms.push(TermKind::Tail, Self::ordinal_units(rest % 10, gender, word_form));
        terms.join(" ")
    }
}

impl NumberToWordsConverter for SpanishConverter {
    fn culture(&self) -> &'static str {
        CULTURE
    }

    fn family(&self) -> NumberingFamily {
        NumberingFamily::Thousand
    }

    fn axes(&self) -> GrammaticalAxes {
        AXES
    }

    fn convert(&self, value: i64, gender: Gender, word_form: WordForm) -> Result<String> {
        let (gender, word_form) = AXES.check_cardinal(CULTURE, gender, word_form)?;
        let words = self.cardinal(value.unsigned_abs(), gender, word_form);
        Ok(if value < 0 {
            format!("menos {words}")
        } else {
            words
        })
    }

    /// Negative values take the ordinal of their absolute value.
    fn convert_to_ordinal(&self, value: i32, gender: Gender, word_form: WordForm) -> Result<String> {
        let (gender, word_form) = AXES.check_ordinal(CULTURE, gender, word_form)?;
        Ok(self.ordinal(u64::from(value.unsigned_abs()), gender, word_form))
    }

    fn convert_to_tuple(&self, value: i32) -> Result<String> {
        let magnitude = u64::from(value.unsigned_abs());
        Ok(match TUPLES.try_get(magnitude) {
            Some(word) => word.to_string(),
            None => format!(
                "{} veces",
                self.cardinal(magnitude, Gender::Masculine, WordForm::Normal)
            ),
        })
    }
}
