//! Irregular-number lookup tables.
//!
//! A table is a set of sparse exact entries plus an optional dense range
//! (`start..start + words.len()`) for contiguous irregular runs such as the
//! teens. Tables are `const` data: built once, never mutated.

/// Lookup of numbers whose words do not follow the general rule.
#[derive(Debug, Clone, Copy)]
pub struct ExceptionTable {
    sparse: &'static [(u64, &'static str)],
    dense_start: u64,
    dense: &'static [&'static str],
}

impl ExceptionTable {
    pub const EMPTY: ExceptionTable = ExceptionTable::new(&[]);

    /// Exact entries only.
    pub const fn new(sparse: &'static [(u64, &'static str)]) -> Self {
        Self {
            sparse,
            dense_start: 0,
            dense: &[],
        }
    }

    /// A contiguous run starting at `start`.
    pub const fn dense(start: u64, words: &'static [&'static str]) -> Self {
        Self {
            sparse: &[],
            dense_start: start,
            dense: words,
        }
    }

    /// Exact entries layered over a contiguous run; exact entries win.
    pub const fn with_dense(mut self, start: u64, words: &'static [&'static str]) -> Self {
        self.dense_start = start;
        self.dense = words;
        self
    }

    /// The irregular word for `n`, if any.
    pub fn try_get(&self, n: u64) -> Option<&'static str> {
        if let Some((_, word)) = self.sparse.iter().find(|(key, _)| *key == n) {
            return Some(word);
        }
        let offset = n.checked_sub(self.dense_start)?;
        usize::try_from(offset)
            .ok()
            .and_then(|index| self.dense.get(index))
            .copied()
    }

    /// Number of numbers covered by the table.
    pub fn len(&self) -> usize {
        self.sparse.len() + self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEENS: ExceptionTable =
        ExceptionTable::new(&[(0, "zero"), (12, "dozen")]).with_dense(10, &["ten", "eleven", "twelve"]);

    #[test]
    fn test_sparse_lookup() {
        assert_eq!(TEENS.try_get(0), Some("zero"));
    }

    #[test]
    fn test_dense_lookup() {
        assert_eq!(TEENS.try_get(10), Some("ten"));
        assert_eq!(TEENS.try_get(11), Some("eleven"));
    }

    #[test]
    fn test_sparse_wins_over_dense() {
        assert_eq!(TEENS.try_get(12), Some("dozen"));
    }

    #[test]
    fn test_miss_outside_range() {
        assert_eq!(TEENS.try_get(9), None);
        assert_eq!(TEENS.try_get(13), None);
        assert_eq!(TEENS.try_get(u64::MAX), None);
        assert_eq!(TEENS.try_get(1), None);
    }

    #[test]
    fn test_empty_table() {
        assert!(ExceptionTable::EMPTY.is_empty());
        assert_eq!(ExceptionTable::EMPTY.try_get(0), None);
        assert_eq!(ExceptionTable::dense(5, &["five"]).try_get(5), Some("five"));
        assert_eq!(TEENS.len(), 5);
    }
}
