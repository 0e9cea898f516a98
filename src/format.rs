//! Locale-aware number and currency formatting
//!
//! Presentation helpers only; the financial model never formats anything.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NBSP: char = '\u{a0}';

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Norwegian Bokmål
    #[default]
    NbNo,
    EnUs,
    EnGb,
    SvSe,
    DeDe,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::NbNo => "nb-NO",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::SvSe => "sv-SE",
            Locale::DeDe => "de-DE",
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Locale::NbNo | Locale::SvSe => NBSP,
            Locale::EnUs | Locale::EnGb => ',',
            Locale::DeDe => '.',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::NbNo | Locale::SvSe | Locale::DeDe => ',',
            Locale::EnUs | Locale::EnGb => '.',
        }
    }

    fn minus_sign(&self) -> char {
        match self {
            // Nordic locales use the typographic minus
            Locale::NbNo | Locale::SvSe => '\u{2212}',
            _ => '-',
        }
    }

    /// Whether the currency sign follows the amount
    fn currency_after(&self) -> bool {
        matches!(self, Locale::NbNo | Locale::SvSe | Locale::DeDe)
    }

    fn currency_symbol(&self, currency: &str) -> String {
        let symbol = match (self, currency) {
            (Locale::NbNo, "NOK") | (Locale::SvSe, "SEK") => "kr",
            (_, "EUR") => "€",
            (Locale::EnUs, "USD") => "$",
            (Locale::EnGb, "GBP") => "£",
            _ => currency,
        };
        symbol.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "nb-no" | "nb" | "no" => Ok(Locale::NbNo),
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "sv-se" | "sv" => Ok(Locale::SvSe),
            "de-de" | "de" => Ok(Locale::DeDe),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Most decimals `format_number` renders
pub const MAX_DECIMALS: usize = 20;

/// Format a number with grouping and a fixed number of decimals
///
/// Rounds half away from zero. Values that round to zero never carry a sign.
pub fn format_number(value: f64, decimals: usize, locale: Locale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { locale.minus_sign().to_string() } else { String::new() };
        return format!("{}∞", sign);
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let factor = 10f64.powi(decimals as i32);
    let scaled = value.abs() * factor;
    // Values too large to scale have no fraction left to round
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value.abs()
    };
    let digits = format!("{:.*}", decimals, rounded);

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if value < 0.0 && rounded != 0.0 {
        out.push(locale.minus_sign());
    }
    out.push_str(&group_digits(int_part, locale.group_separator()));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator());
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Currency formatter for whole currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub locale: Locale,
    /// ISO 4217 code, e.g. "NOK"
    pub currency: String,
}

impl CurrencyFormat {
    pub fn new(locale: Locale, currency: impl Into<String>) -> Self {
        Self {
            locale,
            currency: currency.into().to_ascii_uppercase(),
        }
    }

    /// Norwegian kroner in Norwegian formatting
    pub fn nok() -> Self {
        Self::new(Locale::NbNo, "NOK")
    }

    /// Format an amount rounded to whole units
    pub fn format(&self, value: f64) -> String {
        let amount = format_number(value, 0, self.locale);
        let symbol = self.locale.currency_symbol(&self.currency);

        if self.locale.currency_after() {
            return format!("{}{}{}", amount, NBSP, symbol);
        }

        // Put the sign in front of the symbol: -$1,200
        let (sign, amount) = match amount.strip_prefix(self.locale.minus_sign()) {
            Some(rest) => (self.locale.minus_sign().to_string(), rest.to_string()),
            None => (String::new(), amount),
        };
        // Alphabetic codes need a space, symbols do not
        let gap = if symbol.chars().all(|c| c.is_ascii_alphabetic()) { NBSP.to_string() } else { String::new() };
        format!("{}{}{}{}", sign, symbol, gap, amount)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::nok()
    }
}

/// Format as Norwegian kroner, e.g. "3 500 000 kr"
pub fn format_nok(value: f64) -> String {
    CurrencyFormat::nok().format(value)
}

/// Format a percentage with one decimal, e.g. "5,1 %"
pub fn format_percent(value: f64, locale: Locale) -> String {
    let number = format_number(value, 1, locale);
    match locale {
        Locale::EnUs | Locale::EnGb => format!("{}%", number),
        _ => format!("{}{}%", number, NBSP),
    }
}
