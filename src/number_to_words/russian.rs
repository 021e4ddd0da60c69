//! Russian: gendered one/two, magnitude nouns inflected by the Slavic
//! singular/paucal/plural rule, and fused ordinal compounds
//! ("двухтысячный").

use super::{NumberToWordsConverter, NumberingFamily};
use crate::decomposer::{decompose, Hundreds, Magnitude, TermKind, Terms};
use crate::error::Result;
use crate::exceptions::ExceptionTable;
use crate::grammar::{Gender, GrammaticalAxes, NumberForms, WordForm};

const HUNDREDS: [&str; 10] = [
    "ноль",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

const TENS: [&str; 10] = [
    "ноль",
    "десять",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

const UNITS: [&str; 20] = [
    "ноль",
    "один",
    "два",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const CARDINAL_EXCEPTIONS: ExceptionTable = ExceptionTable::new(&[(0, "ноль")]);

const FEMININE_UNITS: ExceptionTable = ExceptionTable::new(&[(1, "одна"), (2, "две")]);
const NEUTER_UNITS: ExceptionTable = ExceptionTable::new(&[(1, "одно")]);

/// Genitive stems used when a count fuses with an ordinal ("двух-", "пяти-").
const UNITS_ORDINAL_PREFIXES: [&str; 20] = [
    "",
    "",
    "двух",
    "трёх",
    "четырёх",
    "пяти",
    "шести",
    "семи",
    "восьми",
    "девяти",
    "десяти",
    "одиннадцати",
    "двенадцати",
    "тринадцати",
    "четырнадцати",
    "пятнадцати",
    "шестнадцати",
    "семнадцати",
    "восемнадцати",
    "девятнадцати",
];

const TENS_ORDINAL_PREFIXES: [&str; 10] = [
    "",
    "десяти",
    "двадцати",
    "тридцати",
    "сорока",
    "пятидесяти",
    "шестидесяти",
    "семидесяти",
    "восьмидесяти",
    "девяносто",
];

const TENS_ORDINAL: [&str; 10] = [
    "",
    "десят",
    "двадцат",
    "тридцат",
    "сороков",
    "пятидесят",
    "шестидесят",
    "семидесят",
    "восьмидесят",
    "девяност",
];

const UNITS_ORDINAL: [&str; 20] = [
    "нулев",
    "перв",
    "втор",
    "трет",
    "четверт",
    "пят",
    "шест",
    "седьм",
    "восьм",
    "девят",
    "десят",
    "одиннадцат",
    "двенадцат",
    "тринадцат",
    "четырнадцат",
    "пятнадцат",
    "шестнадцат",
    "семнадцат",
    "восемнадцат",
    "девятнадцат",
];

/// Ordinal stems below twenty; the gender ending is appended.
const ORDINAL_STEMS: ExceptionTable = ExceptionTable::dense(0, &UNITS_ORDINAL);

const SCALE: [Magnitude; 6] = [
    Magnitude::new(
        1_000_000_000_000_000_000,
        NumberForms::new("квинтиллион", "квинтиллиона", "квинтиллионов"),
        Gender::Masculine,
    ),
    Magnitude::new(
        1_000_000_000_000_000,
        NumberForms::new("квадриллион", "квадриллиона", "квадриллионов"),
        Gender::Masculine,
    ),
    Magnitude::new(
        1_000_000_000_000,
        NumberForms::new("триллион", "триллиона", "триллионов"),
        Gender::Masculine,
    ),
    Magnitude::new(
        1_000_000_000,
        NumberForms::new("миллиард", "миллиарда", "миллиардов"),
        Gender::Masculine,
    ),
    Magnitude::new(
        1_000_000,
        NumberForms::new("миллион", "миллиона", "миллионов"),
        Gender::Masculine,
    ),
    Magnitude::new(
        1_000,
        NumberForms::new("тысяча", "тысячи", "тысяч"),
        Gender::Feminine,
    ),
];

/// Magnitudes reachable by a 32-bit ordinal: миллиард and below.
const ORDINAL_SCALE_START: usize = 3;

const AXES: GrammaticalAxes = GrammaticalAxes {
    genders: &[Gender::Masculine, Gender::Feminine, Gender::Neuter],
    word_forms: &[WordForm::Normal],
    ordinal_word_forms: &[WordForm::Normal],
};

const CULTURE: &str = "ru";
const MINUS: &str = "минус";

#[derive(Debug, Clone, Default)]
pub struct RussianConverter;

impl RussianConverter {
    pub fn new() -> Self {
        Self
    }

    fn unit_word(unit: u64, gender: Gender) -> &'static str {
        let gendered = match gender {
            Gender::Feminine => FEMININE_UNITS.try_get(unit),
            Gender::Neuter => NEUTER_UNITS.try_get(unit),
            _ => None,
        };
        gendered.unwrap_or(UNITS[unit as usize])
    }

    fn push_below_thousand(terms: &mut Terms, value: u64, gender: Gender) {
        let Hundreds { hundreds, mut tail } = Hundreds::split(value);
        if hundreds > 0 {
            terms.push(TermKind::Hundreds, HUNDREDS[hundreds as usize]);
        }
        if tail >= 20 {
            terms.push(TermKind::Tail, TENS[(tail / 10) as usize]);
            tail %= 10;
        }
        if tail > 0 {
            terms.push(TermKind::Tail, Self::unit_word(tail, gender));
        }
    }

    /// Adjective ending agreeing with `gender`; irregular after 0, 2, 3, 6,
    /// 7, 8 and 40.
    fn ending(gender: Gender, number: u64) -> &'static str {
        match gender {
            Gender::Feminine if number == 3 => "ья",
            Gender::Feminine => "ая",
            Gender::Neuter if number == 3 => "ье",
            Gender::Neuter => "ое",
            _ if matches!(number, 0 | 2 | 6 | 7 | 8 | 40) => "ой",
            _ if number == 3 => "ий",
            _ => "ый",
        }
    }

    fn ordinal_stem(divisor: u64) -> &'static str {
        match divisor {
            1_000_000_000 => "миллиардн",
            1_000_000 => "миллионн",
            _ => "тысячн",
        }
    }

    /// Genitive count fused in front of an ordinal magnitude: 2 → "двух",
    /// 21 → "двадцатиодно", 300 → "трёхсот".
    fn fused_prefix(count: u64) -> String {
        let Hundreds { hundreds, mut tail } = Hundreds::split(count);
        let mut prefix = String::new();
        match hundreds {
            0 => {}
            1 => prefix.push_str("сто"),
            h => {
                prefix.push_str(UNITS_ORDINAL_PREFIXES[h as usize]);
                prefix.push_str("сот");
            }
        }
        if tail >= 20 {
            prefix.push_str(TENS_ORDINAL_PREFIXES[(tail / 10) as usize]);
            tail %= 10;
        }
        match tail {
            0 => {}
            1 => prefix.push_str("одно"),
            t => prefix.push_str(UNITS_ORDINAL_PREFIXES[t as usize]),
        }
        prefix
    }

    fn push_ordinal_below_thousand(terms: &mut Terms, value: u64, gender: Gender) {
        let Hundreds { hundreds, mut tail } = Hundreds::split(value);
        if hundreds > 0 {
            if tail == 0 {
                terms.push(
                    TermKind::Hundreds,
                    format!(
                        "{}сот{}",
                        UNITS_ORDINAL_PREFIXES[hundreds as usize],
                        Self::ending(gender, value)
                    ),
                );
            } else {
                terms.push(TermKind::Hundreds, HUNDREDS[hundreds as usize]);
            }
        }
        if tail >= 20 {
            let tens = (tail / 10) as usize;
            if tail % 10 == 0 {
                terms.push(
                    TermKind::Tail,
                    format!("{}{}", TENS_ORDINAL[tens], Self::ending(gender, tail)),
                );
            } else {
                terms.push(TermKind::Tail, TENS[tens]);
            }
            tail %= 10;
        }
        if tail > 0 {
            if let Some(stem) = ORDINAL_STEMS.try_get(tail) {
                terms.push(TermKind::Tail, format!("{stem}{}", Self::ending(gender, tail)));
            }
        }
    }
}

impl NumberToWordsConverter for RussianConverter {
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
        let (gender, _) = AXES.check_cardinal(CULTURE, gender, word_form)?;
        if let Some(word) = CARDINAL_EXCEPTIONS.try_get(value.unsigned_abs()) {
            return Ok(word.to_string());
        }

        let mut terms = Terms::new();
        if value < 0 {
            terms.push(TermKind::Sign, MINUS);
        }
        let decomposition = decompose(value.unsigned_abs(), &SCALE);
        for group in &decomposition.groups {
            Self::push_below_thousand(&mut terms, group.multiplier, group.magnitude.gender);
            terms.push(TermKind::Magnitude, group.slavic_name());
        }
        Self::push_below_thousand(&mut terms, decomposition.remainder, gender);

        Ok(terms.join(" "))
    }

    fn convert_to_ordinal(&self, value: i32, gender: Gender, word_form: WordForm) -> Result<String> {
        let (gender, _) = AXES.check_ordinal(CULTURE, gender, word_form)?;

        let mut terms = Terms::new();
        if value < 0 {
            terms.push(TermKind::Sign, MINUS);
        }
        let magnitude = u64::from(value.unsigned_abs());
        if let Some(stem) = ORDINAL_STEMS.try_get(magnitude) {
            terms.push(TermKind::Tail, format!("{stem}{}", Self::ending(gender, magnitude)));
            return Ok(terms.join(" "));
        }

        let decomposition = decompose(magnitude, &SCALE[ORDINAL_SCALE_START..]);
        let (leading, last) = decomposition.split_final_magnitude();
        for group in leading {
            Self::push_below_thousand(&mut terms, group.multiplier, group.magnitude.gender);
            terms.push(TermKind::Magnitude, group.slavic_name());
        }
        if let Some(group) = last {
            let prefix = match group.multiplier {
                1 => String::new(),
                count => Self::fused_prefix(count),
            };
            let stem = Self::ordinal_stem(group.divisor());
            terms.push(
                TermKind::Magnitude,
                format!("{prefix}{stem}{}", Self::ending(gender, magnitude)),
            );
        }
        Self::push_ordinal_below_thousand(&mut terms, decomposition.remainder, gender);

        Ok(terms.join(" "))
    }
}
