//! Amounts in words, Indian numbering system.
//!
//! Integers are grouped as crore (10^7), lakh (10^5), thousand and hundred
//! rather than in Western thousands:
//!
//! ```
//! use bahi::words::amount_in_words;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(
//!     amount_in_words(dec!(1234567.50), "Rupees", "Paise").unwrap(),
//!     "Rupees Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven and Fifty Paise Only"
//! );
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{BahiError, Result, round_half_up};

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;
const THOUSAND: u128 = 1_000;

/// Labels wrapped around the words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsStyle {
    /// Leading label, e.g. "Rupees" or "INR". May be empty.
    pub currency_label: String,
    /// Label after the minor-unit words, e.g. "Paise".
    pub minor_unit_label: String,
}

impl Default for WordsStyle {
    fn default() -> Self {
        Self {
            currency_label: "Rupees".to_string(),
            minor_unit_label: "Paise".to_string(),
        }
    }
}

impl WordsStyle {
    pub fn new(currency_label: impl Into<String>, minor_unit_label: impl Into<String>) -> Self {
        Self {
            currency_label: currency_label.into(),
            minor_unit_label: minor_unit_label.into(),
        }
    }

    pub fn format(&self, amount: Decimal) -> Result<String> {
        amount_in_words(amount, &self.currency_label, &self.minor_unit_label)
    }
}

/// Write a non-negative amount as `<currency> <words> [and <minor> <minor label>] Only`.
///
/// Minor units are the fractional part rounded half-up to two places; a
/// fraction that rounds to 100 carries into the whole part.
pub fn amount_in_words(
    amount: Decimal,
    currency_label: &str,
    minor_unit_label: &str,
) -> Result<String> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(BahiError::Validation(format!(
            "amount must not be negative, got {amount}"
        )));
    }
    let amount = amount.abs();

    let mut whole = amount.trunc();
    let mut paise = round_half_up(amount.fract() * dec!(100), 0);
    if paise >= dec!(100) {
        whole += Decimal::ONE;
        paise = Decimal::ZERO;
    }

    // Decimal's range (< 2^96) always fits into u128.
    let rupees = whole
        .to_u128()
        .ok_or_else(|| BahiError::Validation(format!("amount {amount} out of range")))?;
    let paise = paise
        .to_u128()
        .filter(|p| *p < 100)
        .ok_or_else(|| BahiError::Validation(format!("paise {paise} out of range")))?;

    let mut parts: Vec<String> = Vec::new();
    let label = currency_label.trim();
    if !label.is_empty() {
        parts.push(label.to_string());
    }
    parts.push(integer_in_words(rupees));
    if paise > 0 {
        parts.push("and".to_string());
        parts.push(below_hundred(paise as usize));
        let minor = minor_unit_label.trim();
        if !minor.is_empty() {
            parts.push(minor.to_string());
        }
    }
    parts.push("Only".to_string());

    Ok(parts.join(" "))
}

/// Write a whole number in Indian-system words. Zero is "Zero".
///
/// Crore counts above 99 are themselves written in Indian words, so
/// 1,50,00,00,000 is "One Hundred Fifty Crore".
pub fn integer_in_words(n: u128) -> String {
    if n == 0 {
        return "Zero".to_string();
    }
    let mut words = Vec::new();
    push_groups(n, &mut words);
    words.join(" ")
}

fn push_groups(n: u128, words: &mut Vec<String>) {
    let crore = n / CRORE;
    let lakh = (n % CRORE) / LAKH;
    let thousand = (n % LAKH) / THOUSAND;
    let hundred = (n % THOUSAND) / 100;
    let rest = n % 100;

    if crore > 0 {
        push_groups(crore, words);
        words.push("Crore".to_string());
    }
    for (value, suffix) in [(lakh, "Lakh"), (thousand, "Thousand")] {
        if value > 0 {
            words.push(below_hundred(value as usize));
            words.push(suffix.to_string());
        }
    }
    if hundred > 0 {
        words.push(ONES[hundred as usize].to_string());
        words.push("Hundred".to_string());
    }
    if rest > 0 {
        words.push(below_hundred(rest as usize));
    }
}

/// 1..=99 in words; 0 yields an empty string.
fn below_hundred(n: usize) -> String {
    match n {
        0..=9 => ONES[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ if n % 10 == 0 => TENS[n / 10].to_string(),
        _ => format!("{} {}", TENS[n / 10], ONES[n % 10]),
    }
}
