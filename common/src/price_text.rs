//! Price text parsing.
//!
//! Price inputs are free text. They are parsed with decimal floating-point prefix
//! semantics: leading whitespace is skipped, the longest numeric prefix is used and
//! anything after it is ignored. Text without a numeric prefix becomes `NaN`, which
//! is still submitted; rejecting it is left to the search service.

use serde::{Deserialize, Deserializer, Serializer};


/// Classification of a price field, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceText {
    Empty,
    Parsed(f64),
    Unparsable,
}

impl PriceText {
    pub fn value(self) -> f64 {
        match self {
            PriceText::Parsed(v) => v,
            PriceText::Empty | PriceText::Unparsable => f64::NAN,
        }
    }
}

pub fn parse_price_text(text: &str) -> PriceText {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return PriceText::Empty;
    }
    match numeric_prefix(trimmed) {
        Some(v) => PriceText::Parsed(v),
        None => PriceText::Unparsable,
    }
}

/// Parses the leading number of `text`, or `NaN` when there is none.
pub fn parse_price(text: &str) -> f64 {
    parse_price_text(text).value()
}

fn numeric_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut negative = false;
    if let Some(&sign) = bytes.first() {
        if sign == b'+' || sign == b'-' {
            negative = sign == b'-';
            i = 1;
        }
    }

    if s[i..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - i - 1;
        // a lone "." only counts when digits precede it
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // exponent is only consumed when it carries at least one digit
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().ok()
}

/// Serde adapter for prices on the wire.
///
/// Strict JSON cannot carry `NaN` or infinities, so non-finite prices are written
/// as `null`, and `null` reads back as `NaN`.
pub mod price_wire {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
