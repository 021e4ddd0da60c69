use crate::culture::CultureKey;
use crate::grammar::Gender;
use anyhow::{Context, Result};
use std::sync::OnceLock;
use tracing::warn;

/// POSIX locale variables, most specific first.
const POSIX_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    // Culture used when a thread has not set its own
    pub culture: CultureKey,

    // Gender for the crate-level helpers that do not take one
    pub default_gender: Gender,
}

static PROCESS_CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let explicit = lookup("NUMERALS_CULTURE").filter(|raw| !raw.trim().is_empty());
        let culture = match explicit {
            Some(raw) => CultureKey::parse(&raw)
                .with_context(|| format!("NUMERALS_CULTURE is not a culture key: '{raw}'"))?,
            None => POSIX_LOCALE_VARS
                .iter()
                .filter_map(|name| lookup(name))
                .find(|raw| !raw.trim().is_empty())
                .map(|raw| CultureKey::new(&raw))
                .unwrap_or_default(),
        };

        let default_gender = match lookup("NUMERALS_DEFAULT_GENDER") {
            Some(raw) => raw
                .parse::<Gender>()
                .map_err(anyhow::Error::msg)
                .context("NUMERALS_DEFAULT_GENDER is invalid")?,
            None => Gender::default(),
        };

        Ok(Self {
            culture,
            default_gender,
        })
    }

    /// The process-wide config, read from the environment on first use.
    ///
    /// An invalid environment is logged and replaced by the defaults.
    pub fn process() -> &'static Config {
        PROCESS_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring invalid numeral configuration");
                Self::default()
            })
        })
    }
}
