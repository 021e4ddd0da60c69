//! Preview binary - prints the words for one or more numbers
//!
//! Usage:
//!   cargo run -- 1234 21                        # Current culture
//!   cargo run -- --culture es --gender f 21     # Feminine Spanish
//!   cargo run -- --culture de --ordinal 1000000
//!   cargo run -- --culture en --tuple 3
//!   cargo run -- --json --culture ru 2 5 21     # One JSON object per number
//!   cargo run -- --list                         # Registered cultures
//!
//! Optional environment variables:
//! - NUMERALS_CULTURE (defaults to LC_ALL / LC_MESSAGES / LANG)
//! - NUMERALS_DEFAULT_GENDER (defaults to masculine)
//! - RUST_LOG (e.g. numeral_words=debug to trace culture fallback)

use anyhow::{bail, Context, Result};
use numeral_words::{Config, Configurator, CultureKey, Gender, Resolution, WordForm};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Cardinal,
    Ordinal,
    Tuple,
}

#[derive(Debug)]
struct PreviewArgs {
    culture: Option<String>,
    kind: Kind,
    gender: Option<Gender>,
    word_form: WordForm,
    json: bool,
    list: bool,
    numbers: Vec<i64>,
}

impl PreviewArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = PreviewArgs {
            culture: None,
            kind: Kind::Cardinal,
            gender: None,
            word_form: WordForm::Normal,
            json: false,
            list: false,
            numbers: Vec::new(),
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--culture" | "-c" => {
                    parsed.culture = Some(args.next().context("--culture needs a value")?);
                }
                "--gender" | "-g" => {
                    let raw = args.next().context("--gender needs a value")?;
                    let gender = raw.parse::<Gender>().map_err(anyhow::Error::msg)?;
                    parsed.gender = Some(gender);
                }
                "--ordinal" => parsed.kind = Kind::Ordinal,
                "--tuple" => parsed.kind = Kind::Tuple,
                "--abbreviation" => parsed.word_form = WordForm::Abbreviation,
                "--json" => parsed.json = true,
                "--list" => parsed.list = true,
                other if other.starts_with("--") => bail!("Unknown option: {}", other),
                number => {
                    let value = number
                        .replace('_', "")
                        .parse::<i64>()
                        .with_context(|| format!("Not an integer: {}", number))?;
                    parsed.numbers.push(value);
                }
            }
        }

        Ok(parsed)
    }
}

#[derive(Debug, Serialize)]
struct PreviewRecord {
    value: i64,
    kind: Kind,
    requested_culture: String,
    resolved_culture: &'static str,
    resolution: String,
    gender: Gender,
    word_form: WordForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn describe(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Exact => "exact".to_string(),
        Resolution::Parent(parent) => format!("parent:{}", parent),
        Resolution::Default => "default".to_string(),
    }
}

fn preview(args: &PreviewArgs, value: i64) -> Result<PreviewRecord> {
    let culture = match &args.culture {
        Some(raw) => CultureKey::new(raw),
        None => numeral_words::current_culture(),
    };
    let (converter, resolution) = Configurator::global()
        .number_to_words()
        .resolve_with_source(&culture);
    let gender = args.gender.unwrap_or(Config::process().default_gender);

    let result = match args.kind {
        Kind::Cardinal => converter.convert(value, gender, args.word_form),
        Kind::Ordinal => {
            let value = i32::try_from(value).context("Ordinals take a 32-bit value")?;
            converter.convert_to_ordinal(value, gender, args.word_form)
        }
        Kind::Tuple => {
            let value = i32::try_from(value).context("Tuples take a 32-bit value")?;
            converter.convert_to_tuple(value)
        }
    };

    let (words, error) = match result {
        Ok(words) => (Some(words), None),
        Err(e) => (None, Some(e.to_string())),
    };

    Ok(PreviewRecord {
        value,
        kind: args.kind,
        requested_culture: culture.to_string(),
        resolved_culture: converter.culture(),
        resolution: describe(&resolution),
        gender,
        word_form: args.word_form,
        words,
        error,
    })
}

fn print_usage() {
    eprintln!(
        "Usage: preview [--culture KEY] [--ordinal | --tuple] [--gender m|f|n|none] \
[--abbreviation] [--json] NUMBER..."
    );
    eprintln!("       preview --list");
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("numeral_words=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = PreviewArgs::parse(std::env::args().skip(1))?;

    if args.list {
        let registry = Configurator::global().number_to_words();
        for culture in registry.registered_cultures() {
            println!("{}", culture);
        }
        return Ok(());
    }

    if args.numbers.is_empty() {
        print_usage();
        return Ok(());
    }

    info!(
        culture = ?args.culture,
        process_culture = %numeral_words::culture::process_culture(),
        "Previewing {} number(s)",
        args.numbers.len()
    );

    if !args.json {
        println!("\n========== NUMBER PREVIEW ==========");
    }
    for &value in &args.numbers {
        let record = preview(&args, value)?;
        if args.json {
            println!("{}", serde_json::to_string(&record)?);
            continue;
        }
        match (&record.words, &record.error) {
            (Some(words), _) => println!("{} ({}): {}", value, record.resolved_culture, words),
            (None, Some(error)) => println!("{} ({}): error: {}", value, record.resolved_culture, error),
            (None, None) => {}
        }
    }
    if !args.json {
        println!("====================================\n");
    }

    Ok(())
}
