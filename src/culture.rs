//! Culture keys and the ambient (current) culture.
//!
//! A [`CultureKey`] is a normalized, case-insensitive locale identifier such as
//! `en-gb` or `zh-hant-tw`. Keys derive their parents by dropping the last
//! subtag, which is what the registries walk during fallback.
//!
//! The ambient culture is what `resolve_for_culture(None)` uses. Each thread
//! may override it with [`set_current_culture`] or the RAII guard returned by
//! [`scoped_culture`]; otherwise the process culture from
//! [`Config::process`](crate::config::Config::process) applies.

use crate::config::Config;
use regex::Regex;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

static KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn key_pattern() -> &'static Regex {
    KEY_PATTERN
        .get_or_init(|| Regex::new(r"^[a-z]{2,8}(-[a-z0-9]{1,8})*$").expect("valid culture key pattern"))
}

/// A normalized culture identifier.
///
/// The empty key is the invariant culture; it has no parent and always
/// resolves to a registry's default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CultureKey(String);

impl CultureKey {
    /// The invariant culture.
    pub fn invariant() -> Self {
        Self::default()
    }

    /// Parse and normalize a culture identifier.
    ///
    /// Accepts BCP-47-like keys (`en-US`) as well as POSIX locale names
    /// (`en_US.UTF-8`, `de_DE@euro`). `C` and `POSIX` mean the invariant
    /// culture.
    ///
    /// # Returns
    /// * `Some(CultureKey)` for a well-formed key
    /// * `None` if the key does not look like a culture identifier
    pub fn parse(raw: &str) -> Option<Self> {
        let base = raw.trim().split(['.', '@']).next().unwrap_or_default();
        let normalized = base.replace('_', "-").to_ascii_lowercase();
        if normalized.is_empty() || normalized == "c" || normalized == "posix" {
            return Some(Self::invariant());
        }
        key_pattern()
            .is_match(&normalized)
            .then_some(CultureKey(normalized))
    }

    /// Like [`parse`](Self::parse), but malformed keys become the invariant
    /// culture so that resolution stays total.
    pub fn new(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            warn!(culture = raw, "Malformed culture key, using the invariant culture");
            Self::invariant()
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_invariant(&self) -> bool {
        self.0.is_empty()
    }

    /// The key with its last subtag removed; `None` for a bare language or
    /// the invariant culture.
    pub fn parent(&self) -> Option<CultureKey> {
        self.0
            .rfind('-')
            .map(|index| CultureKey(self.0[..index].to_string()))
    }

    /// All ancestors, nearest first: "zh-hant-tw" → "zh-hant", "zh".
    pub fn ancestors(&self) -> impl Iterator<Item = CultureKey> {
        std::iter::successors(self.parent(), CultureKey::parent)
    }
}

impl fmt::Display for CultureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CultureKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid culture key: '{s}'"))
    }
}

impl From<&str> for CultureKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&CultureKey> for CultureKey {
    fn from(key: &CultureKey) -> Self {
        key.clone()
    }
}

thread_local! {
    static CURRENT_CULTURE: RefCell<Option<CultureKey>> = const { RefCell::new(None) };
}

/// The culture used when neither the caller nor the thread names one.
pub fn process_culture() -> &'static CultureKey {
    &Config::process().culture
}

/// The calling thread's culture, falling back to the process culture.
pub fn current_culture() -> CultureKey {
    CURRENT_CULTURE
        .with(|current| current.borrow().clone())
        .unwrap_or_else(|| process_culture().clone())
}

/// Override (or with `None`, clear) the calling thread's culture.
///
/// # Returns
/// The previous thread override, if any.
pub fn set_current_culture(culture: Option<CultureKey>) -> Option<CultureKey> {
    CURRENT_CULTURE.with(|current| current.replace(culture))
}

/// Restores the previous thread culture when dropped.
#[must_use = "the culture is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct CultureGuard {
    previous: Option<CultureKey>,
    // Thread-local state: the guard must be dropped on the thread that made it.
    _not_send: PhantomData<*const ()>,
}

impl Drop for CultureGuard {
    fn drop(&mut self) {
        set_current_culture(self.previous.take());
    }
}

/// Set the thread culture until the returned guard is dropped.
pub fn scoped_culture(culture: impl Into<CultureKey>) -> CultureGuard {
    let previous = set_current_culture(Some(culture.into()));
    CultureGuard {
        previous,
        _not_send: PhantomData,
    }
}
