use regex::Regex;
use std::sync::LazyLock;

use crate::core::{Cell, is_known_currency_code};

/// Currency reported when a balance carries no parseable currency.
pub const DEFAULT_CURRENCY: &str = "USD";

static COUNTRY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s-\s+([A-Z]{2})$").expect("country suffix pattern"));
static CURRENCY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s-\s+([A-Z]{3})$").expect("currency suffix pattern"));

/// Which code a compound `"<label> - CODE"` display value carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// ISO 3166-1 alpha-2, e.g. `"Mauritius - MU"`.
    Country,
    /// ISO 4217, e.g. `"US Dollar - USD"`.
    Currency,
}

impl CodeKind {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Country => &COUNTRY_SUFFIX,
            Self::Currency => &CURRENCY_SUFFIX,
        }
    }
}

/// Outcome of reading a code out of a display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCode {
    /// The trailing code was found.
    Parsed(String),
    /// No code suffix; the trimmed raw text is passed through.
    Passthrough(String),
    /// The cell was empty.
    Absent,
}

impl ParsedCode {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// The code, or the passthrough text, or `""` when absent.
    pub fn into_value(self) -> String {
        match self {
            Self::Parsed(code) | Self::Passthrough(code) => code,
            Self::Absent => String::new(),
        }
    }
}

/// Parse a compound `"<label> - CODE"` value.
pub fn parse_code(raw: &Cell, kind: CodeKind) -> ParsedCode {
    let text = raw.text();
    if text.is_empty() {
        return ParsedCode::Absent;
    }
    match kind.pattern().captures(&text).and_then(|c| c.get(1)) {
        Some(code) => ParsedCode::Parsed(code.as_str().to_string()),
        None => ParsedCode::Passthrough(text),
    }
}

/// Two-letter country code from `"Mauritius - MU"`; unmatched input is
/// returned unchanged, empty input as `""`.
pub fn parse_country_code(raw: &Cell) -> String {
    let parsed = parse_code(raw, CodeKind::Country);
    if let ParsedCode::Passthrough(text) = &parsed {
        tracing::debug!(value = %text, "country value has no code suffix, passing through");
    }
    parsed.into_value()
}

/// Three-letter currency code from `"US Dollar - USD"`; [`DEFAULT_CURRENCY`]
/// when empty or unmatched.
pub fn parse_currency_code(raw: &Cell) -> String {
    match parse_code(raw, CodeKind::Currency) {
        ParsedCode::Parsed(code) => {
            if !is_known_currency_code(&code) {
                tracing::warn!(currency = %code, "currency code not in ISO 4217 table");
            }
            code
        }
        ParsedCode::Passthrough(text) => {
            tracing::debug!(value = %text, "unparseable currency, defaulting to USD");
            DEFAULT_CURRENCY.to_string()
        }
        ParsedCode::Absent => DEFAULT_CURRENCY.to_string(),
    }
}

/// First `" - "` segment of a compound code value such as
/// `"OECD601 - IBAN"`, or `default` when the cell is empty.
pub fn split_code(raw: &Cell, default: &str) -> String {
    let text = raw.text();
    let code = text.split(" - ").next().unwrap_or_default().trim();
    if code.is_empty() {
        default.to_string()
    } else {
        code.to_string()
    }
}

/// Read an account flag cell. Booleans, non-zero numbers and
/// `true`/`yes`/`y`/`1`/`x` text count as set.
pub fn parse_flag(raw: &Cell) -> bool {
    match raw {
        Cell::Bool(b) => *b,
        Cell::Number(n) => *n != 0.0,
        Cell::Text(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1" | "x"
        ),
        Cell::Empty | Cell::Date(_) => false,
    }
}
