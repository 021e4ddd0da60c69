//! Magnitude decomposition shared by every converter.
//!
//! A [`Scale`] is an ordered list of magnitude descriptors, largest first.
//! [`decompose`] splits an absolute value into one [`Group`] per non-zero
//! window plus a remainder below the smallest divisor. Converters verbalize
//! each group's multiplier recursively, pick the magnitude noun's inflection
//! from the multiplier, verbalize the remainder with their base rule, and
//! then run locale post-processing (conjunctions, ordinal endings) over the
//! assembled [`Terms`].
//!
//! # Invariants
//!
//! 1. **Tiling**: `Σ group.multiplier · group.divisor + remainder == value`.
//! 2. **No overlap**: every multiplier except the first is smaller than
//!    `previous_divisor / divisor`.
//! 3. **Bounded recursion**: multipliers are strictly smaller than the value
//!    being decomposed whenever a group exists, and scales hold at most seven
//!    descriptors for 64-bit values.

use crate::grammar::{Gender, NumberForms};

/// One numbering-scale step (thousand, million, lakh, 万 …).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    pub divisor: u64,
    pub forms: NumberForms,
    /// Gender of the magnitude noun; the multiplier agrees with it.
    pub gender: Gender,
}

impl Magnitude {
    pub const fn new(divisor: u64, forms: NumberForms, gender: Gender) -> Self {
        Self {
            divisor,
            forms,
            gender,
        }
    }

    /// A magnitude whose name never inflects.
    pub const fn named(divisor: u64, name: &'static str) -> Self {
        Self::new(divisor, NumberForms::invariant(name), Gender::Masculine)
    }
}

/// Magnitudes ordered from largest to smallest divisor.
pub type Scale = [Magnitude];

/// One non-zero window of a decomposed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    pub magnitude: &'a Magnitude,
    pub multiplier: u64,
}

impl Group<'_> {
    pub fn divisor(&self) -> u64 {
        self.magnitude.divisor
    }

    /// The magnitude noun agreeing with the multiplier (Slavic rule).
    pub fn slavic_name(&self) -> &'static str {
        self.magnitude.forms.select_slavic(self.multiplier)
    }
}

/// Result of splitting a value over a scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<'a> {
    pub groups: Vec<Group<'a>>,
    pub remainder: u64,
}

impl<'a> Decomposition<'a> {
    /// True when the value is an exact multiple of its smallest group, so the
    /// ordinal ending belongs to the last magnitude term.
    pub fn ends_on_magnitude(&self) -> bool {
        self.remainder == 0 && !self.groups.is_empty()
    }

    /// Groups before the ordinal-bearing magnitude, and that magnitude when
    /// the value ends on it ("two million | thousandth").
    pub fn split_final_magnitude(&self) -> (&[Group<'a>], Option<&Group<'a>>) {
        match self.groups.split_last() {
            Some((last, leading)) if self.ends_on_magnitude() => (leading, Some(last)),
            _ => (&self.groups, None),
        }
    }

    /// Reassemble the original value.
    pub fn value(&self) -> u64 {
        self.groups
            .iter()
            .map(|group| group.multiplier * group.divisor())
            .sum::<u64>()
            + self.remainder
    }
}

/// Split `value` into groups over `scale`.
pub fn decompose(value: u64, scale: &Scale) -> Decomposition<'_> {
    debug_assert!(
        scale.windows(2).all(|pair| pair[0].divisor > pair[1].divisor),
        "scale must be ordered from largest to smallest divisor"
    );

    let mut remainder = value;
    let mut groups = Vec::new();
    for magnitude in scale {
        let multiplier = remainder / magnitude.divisor;
        if multiplier > 0 {
            groups.push(Group {
                magnitude,
                multiplier,
            });
            remainder %= magnitude.divisor;
        }
    }

    Decomposition { groups, remainder }
}

/// Digits of a value below 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hundreds {
    pub hundreds: u64,
    /// The last two digits (0–99).
    pub tail: u64,
}

impl Hundreds {
    pub fn split(value: u64) -> Self {
        debug_assert!(value < 1000);
        Self {
            hundreds: value / 100,
            tail: value % 100,
        }
    }
}

/// Role of an assembled word within the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Sign,
    Multiplier,
    Magnitude,
    Hundreds,
    /// A tens word followed by a separate units term ("treinta" in
    /// "treinta y uno").
    Tens,
    /// Everything below one hundred.
    Tail,
    Conjunction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub kind: TermKind,
    pub text: String,
}

/// Assembled words of one number, most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Terms {
    terms: Vec<Term>,
}

impl Terms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term; empty text is dropped.
    pub fn push(&mut self, kind: TermKind, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.terms.push(Term { kind, text });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn last(&self) -> Option<&Term> {
        self.terms.last()
    }

    /// Insert `token` before the final tail term when something precedes it
    /// ("one hundred and one"). A lone tail gets nothing.
    pub fn insert_conjunction_before_tail(&mut self, token: &str) {
        let has_leading_number = self
            .terms
            .iter()
            .any(|term| !matches!(term.kind, TermKind::Sign | TermKind::Tail));
        if !has_leading_number {
            return;
        }
        if let Some(index) = self.terms.iter().rposition(|t| t.kind == TermKind::Tail) {
            if index + 1 == self.terms.len() {
                self.terms.insert(
                    index,
                    Term {
                        kind: TermKind::Conjunction,
                        text: token.to_string(),
                    },
                );
            }
        }
    }

    /// Insert `token` between every adjacent `left`, `right` pair.
    pub fn insert_between(&mut self, left: TermKind, right: TermKind, token: &str) {
        let mut index = 1;
        while index < self.terms.len() {
            if self.terms[index - 1].kind == left && self.terms[index].kind == right {
                self.terms.insert(
                    index,
                    Term {
                        kind: TermKind::Conjunction,
                        text: token.to_string(),
                    },
                );
                index += 1;
            }
            index += 1;
        }
    }

    /// Rewrite the deepest (last) term, which carries the ordinal ending.
    pub fn map_last(&mut self, f: impl FnOnce(&str) -> String) {
        if let Some(term) = self.terms.last_mut() {
            term.text = f(&term.text);
        }
    }

    pub fn join(&self, separator: &str) -> String {
        self.terms
            .iter()
            .map(|term| term.text.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THOUSANDS: [Magnitude; 3] = [
        Magnitude::named(1_000_000_000, "billion"),
        Magnitude::named(1_000_000, "million"),
        Magnitude::named(1_000, "thousand"),
    ];

    const MYRIADS: [Magnitude; 2] = [
        Magnitude::named(100_000_000, "億"),
        Magnitude::named(10_000, "万"),
    ];

    const LAKH_CRORE: [Magnitude; 3] = [
        Magnitude::named(10_000_000, "crore"),
        Magnitude::named(100_000, "lakh"),
        Magnitude::named(1_000, "thousand"),
    ];

    // ==================== Decomposition Tests ====================

    #[test]
    fn test_decompose_thousand_grouping() {
        let d = decompose(1_234_567, &THOUSANDS);
        let multipliers: Vec<_> = d.groups.iter().map(|g| g.multiplier).collect();
        assert_eq!(multipliers, vec![1, 234]);
        assert_eq!(d.groups[0].divisor(), 1_000_000);
        assert_eq!(d.remainder, 567);
        assert_eq!(d.value(), 1_234_567);
    }

    #[test]
    fn test_decompose_skips_zero_windows() {
        let d = decompose(1_000_000_005, &THOUSANDS);
        assert_eq!(d.groups.len(), 1);
        assert_eq!(d.groups[0].magnitude.forms.singular, "billion");
        assert_eq!(d.remainder, 5);
    }

    #[test]
    fn test_decompose_myriad_grouping() {
        let d = decompose(123_456_789, &MYRIADS);
        let multipliers: Vec<_> = d.groups.iter().map(|g| g.multiplier).collect();
        assert_eq!(multipliers, vec![1, 2345]);
        assert_eq!(d.remainder, 6789);
    }

    #[test]
    fn test_decompose_lakh_crore_grouping() {
        let d = decompose(12_34_56_789, &LAKH_CRORE);
        let multipliers: Vec<_> = d.groups.iter().map(|g| g.multiplier).collect();
        assert_eq!(multipliers, vec![12, 34, 56]);
        assert_eq!(d.remainder, 789);
    }

    #[test]
    fn test_decompose_below_smallest_divisor() {
        let d = decompose(999, &THOUSANDS);
        assert!(d.groups.is_empty());
        assert_eq!(d.remainder, 999);
        assert!(!d.ends_on_magnitude());
    }

    #[test]
    fn test_ends_on_magnitude() {
        assert!(decompose(1_000_000, &THOUSANDS).ends_on_magnitude());
        assert!(!decompose(1_000_001, &THOUSANDS).ends_on_magnitude());
    }

    #[test]
    fn test_split_final_magnitude() {
        let exact = decompose(2_001_000, &THOUSANDS);
        let (leading, last) = exact.split_final_magnitude();
        assert_eq!(leading.len(), 1);
        assert_eq!(leading[0].divisor(), 1_000_000);
        assert_eq!(last.map(|g| (g.multiplier, g.divisor())), Some((1, 1_000)));

        let with_tail = decompose(2_001_005, &THOUSANDS);
        let (leading, last) = with_tail.split_final_magnitude();
        assert_eq!(leading.len(), 2);
        assert!(last.is_none());

        let small = decompose(7, &THOUSANDS);
        let (leading, last) = small.split_final_magnitude();
        assert!(leading.is_empty());
        assert!(last.is_none());
    }

    #[test]
    fn test_decompose_u64_max() {
        let d = decompose(u64::MAX, &THOUSANDS);
        assert_eq!(d.value(), u64::MAX);
    }

    #[test]
    fn test_hundreds_split() {
        assert_eq!(Hundreds::split(345), Hundreds { hundreds: 3, tail: 45 });
        assert_eq!(Hundreds::split(7), Hundreds { hundreds: 0, tail: 7 });
    }

    // ==================== Terms Tests ====================

    #[test]
    fn test_terms_drop_empty_text() {
        let mut terms = Terms::new();
        terms.push(TermKind::Hundreds, "");
        assert!(terms.is_empty());
    }

    #[test]
    fn test_conjunction_inserted_before_tail() {
        let mut terms = Terms::new();
        terms.push(TermKind::Hundreds, "one hundred");
        terms.push(TermKind::Tail, "one");
        terms.insert_conjunction_before_tail("and");
        assert_eq!(terms.join(" "), "one hundred and one");
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn test_conjunction_skipped_for_lone_tail() {
        let mut terms = Terms::new();
        terms.push(TermKind::Sign, "minus");
        terms.push(TermKind::Tail, "five");
        terms.insert_conjunction_before_tail("and");
        assert_eq!(terms.join(" "), "minus five");
    }

    #[test]
    fn test_conjunction_skipped_without_tail() {
        let mut terms = Terms::new();
        terms.push(TermKind::Multiplier, "two");
        terms.push(TermKind::Magnitude, "thousand");
        terms.insert_conjunction_before_tail("and");
        assert_eq!(terms.join(" "), "two thousand");
    }

    #[test]
    fn test_map_last_rewrites_deepest_term() {
        let mut terms = Terms::new();
        terms.push(TermKind::Multiplier, "one");
        terms.push(TermKind::Magnitude, "million");
        terms.map_last(|word| format!("{word}th"));
        assert_eq!(terms.join(" "), "one millionth");
        assert_eq!(terms.last().map(|t| t.kind), Some(TermKind::Magnitude));
    }

    #[test]
    fn test_insert_between_adjacent_kinds() {
        let mut terms = Terms::new();
        terms.push(TermKind::Hundreds, "ciento");
        terms.push(TermKind::Tens, "treinta");
        terms.push(TermKind::Tail, "uno");
        terms.insert_between(TermKind::Tens, TermKind::Tail, "y");
        assert_eq!(terms.join(" "), "ciento treinta y uno");
    }

    #[test]
    fn test_insert_between_skips_other_pairs() {
        let mut terms = Terms::new();
        terms.push(TermKind::Hundreds, "ciento");
        terms.push(TermKind::Tail, "cinco");
        terms.insert_between(TermKind::Tens, TermKind::Tail, "y");
        assert_eq!(terms.join(" "), "ciento cinco");
    }
}
