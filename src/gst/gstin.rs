//! GSTIN format and checksum validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::states::state_name;

const CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error returned when a GSTIN fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GstinError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for GstinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GSTIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for GstinError {}

/// A validated, upper-cased GSTIN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gstin(String);

impl Gstin {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit state code, e.g. "27".
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// Canonical name of the registering state.
    pub fn state(&self) -> &'static str {
        // Checked during validation.
        state_name(self.state_code()).unwrap_or_default()
    }

    /// The embedded 10-character PAN.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Gstin {
    type Err = GstinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_gstin(s)
    }
}

/// Validate a GSTIN by layout and check character (no network call).
///
/// Layout: 2-digit state code, 10-character PAN (5 letters, 4 digits,
/// 1 letter), entity code, the letter `Z`, and a mod-36 check character.
/// Input is trimmed and upper-cased first.
pub fn validate_gstin(value: &str) -> Result<Gstin, GstinError> {
    let gstin = value.trim().to_ascii_uppercase();
    let err = |reason: &str| GstinError {
        value: value.trim().to_string(),
        reason: reason.to_string(),
    };

    if gstin.len() != 15 || !gstin.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(err("must be 15 alphanumeric characters"));
    }
    let b = gstin.as_bytes();

    if state_name(&gstin[..2]).is_none() {
        return Err(err("unknown state code"));
    }

    let pan = &b[2..12];
    let pan_ok = pan[..5].iter().all(u8::is_ascii_uppercase)
        && pan[5..9].iter().all(u8::is_ascii_digit)
        && pan[9].is_ascii_uppercase();
    if !pan_ok {
        return Err(err("PAN segment must be 5 letters, 4 digits, 1 letter"));
    }

    if b[12] == b'0' {
        return Err(err("entity code must be 1-9 or A-Z"));
    }

    if b[13] != b'Z' {
        return Err(err("14th character must be 'Z'"));
    }

    if checksum_char(&b[..14]) != b[14] {
        return Err(err("check character mismatch"));
    }

    Ok(Gstin(gstin))
}

/// Mod-36 check character over the first 14 characters.
///
/// Each character's value is multiplied by 1 or 2 alternately; the quotient
/// and remainder of the product by 36 are summed.
fn checksum_char(body: &[u8]) -> u8 {
    let sum: usize = body
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let value = CHARSET.iter().position(|x| x == c).unwrap_or(0);
            let product = value * if i % 2 == 0 { 1 } else { 2 };
            product / 36 + product % 36
        })
        .sum();
    CHARSET[(36 - sum % 36) % 36]
}
