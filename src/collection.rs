//! Collection formatters: "a, b and c" in the resolved culture.

use std::fmt;

/// Joins display strings into a human-readable list.
pub trait CollectionFormatter: Send + Sync + fmt::Debug {
    /// Word placed before the last item ("and", "und", "&").
    fn conjunction(&self) -> &str;

    /// Combine everything before the last item with the conjunction and the
    /// last item.
    fn join_last(&self, head: &str, conjunction: &str, last: &str, _item_count: usize) -> String {
        format!("{head} {conjunction} {last}")
    }

    /// Trim the items, drop blank ones and join what remains.
    ///
    /// # Arguments
    /// * `items` - Display strings in order
    /// * `conjunction` - Overrides [`conjunction`](Self::conjunction) when set
    fn humanize(&self, items: &[String], conjunction: Option<&str>) -> String {
        let items: Vec<&str> = items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect();

        match items.as_slice() {
            [] => String::new(),
            [only] => only.to_string(),
            [head @ .., last] => self.join_last(
                &head.join(", "),
                conjunction.unwrap_or_else(|| self.conjunction()),
                last,
                items.len(),
            ),
        }
    }
}

/// Format any displayable items with `formatter`.
pub fn humanize_display<I>(formatter: &dyn CollectionFormatter, items: I, conjunction: Option<&str>) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    formatter.humanize(&items, conjunction)
}

/// "a, b & c".
#[derive(Debug, Clone)]
pub struct DefaultFormatter {
    conjunction: &'static str,
}

impl DefaultFormatter {
    pub fn new(conjunction: &'static str) -> Self {
        Self { conjunction }
    }
}

impl CollectionFormatter for DefaultFormatter {
    fn conjunction(&self) -> &str {
        self.conjunction
    }
}

/// Serial comma before the conjunction once there are three or more items:
/// "a, b, and c" but "a and b".
#[derive(Debug, Clone)]
pub struct OxfordFormatter {
    conjunction: &'static str,
}

impl OxfordFormatter {
    pub fn new(conjunction: &'static str) -> Self {
        Self { conjunction }
    }
}

impl CollectionFormatter for OxfordFormatter {
    fn conjunction(&self) -> &str {
        self.conjunction
    }

    fn join_last(&self, head: &str, conjunction: &str, last: &str, item_count: usize) -> String {
        if item_count > 2 {
            format!("{head}, {conjunction} {last}")
        } else {
            format!("{head} {conjunction} {last}")
        }
    }
}
