//! Conversion of user tokens into hex digit strings.
//!
//! Raw text is first classified into a [`NumericInput`] (decimal, `0x`-prefixed
//! hex, or a literal hex digit string) and then converted into a
//! [`HexDigitString`]. Decimal tokens may be arbitrarily long.

use log::debug;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A token classified by its shape.
///
/// Each variant holds the whitespace-free token, prefix included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericInput {
    /// Only ASCII decimal digits.
    Decimal(String),
    /// Starts with `0x` or `0X`.
    PrefixedHex(String),
    /// Anything else; expected to be hex digits as written.
    LiteralHex(String),
}

impl NumericInput {
    /// Classifies raw text after removing all whitespace from it.
    ///
    /// A token made only of decimal digits is always decimal, so `"123"` is
    /// one hundred twenty-three even when it was meant as hex.
    pub fn classify(raw: &str) -> Self {
        let token: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if token
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("0x"))
        {
            NumericInput::PrefixedHex(token)
        } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            NumericInput::Decimal(token)
        } else {
            NumericInput::LiteralHex(token)
        }
    }

    /// The token as classified.
    pub fn token(&self) -> &str {
        match self {
            NumericInput::Decimal(t) | NumericInput::PrefixedHex(t) | NumericInput::LiteralHex(t) => {
                t
            }
        }
    }

    /// Converts the token into uppercase hex digits.
    pub fn parse(&self) -> Result<HexDigitString> {
        let digits = match self {
            NumericInput::Decimal(token) => decimal_to_hex(token)?,
            NumericInput::PrefixedHex(token) => prefixed_to_hex(token)?,
            NumericInput::LiteralHex(token) => HexDigitString::from_literal(token)?,
        };

        debug!("Parsed {:?} as {}", self, digits);
        Ok(digits)
    }
}

/// Parses raw text in one step.
pub fn parse_token(raw: &str) -> Result<HexDigitString> {
    NumericInput::classify(raw).parse()
}

/// A non-empty sequence of uppercase hex digits, most significant first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexDigitString(String);

impl HexDigitString {
    /// Uses `token` as hex digits directly, uppercased. Leading zeros are kept.
    pub fn from_literal(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::InvalidNumber(token.to_string()));
        }

        if let Some(digit) = token.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidDigit {
                token: token.to_string(),
                digit,
            });
        }

        Ok(Self(token.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    /// The digit at `index`, if any.
    pub fn digit_at(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).map(|&b| char::from(b))
    }

    pub fn digits(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Left-pads with `'0'` up to `len` digits. Longer strings are returned
    /// unchanged.
    pub fn zero_padded(&self, len: usize) -> Self {
        Self(format!("{:0>len$}", self.0))
    }
}

impl fmt::Display for HexDigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexDigitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_token(s)
    }
}

fn prefixed_to_hex(token: &str) -> Result<HexDigitString> {
    let digits = token.get(2..).unwrap_or_default();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidNumber(token.to_string()));
    }

    let significant = digits.trim_start_matches('0');
    let canonical = if significant.is_empty() {
        "0"
    } else {
        significant
    };

    Ok(HexDigitString(canonical.to_ascii_uppercase()))
}

/// Decimal to hex through little-endian base 2^32 limbs, so the token length
/// is unbounded.
fn decimal_to_hex(token: &str) -> Result<HexDigitString> {
    if token.is_empty() {
        return Err(Error::InvalidNumber(token.to_string()));
    }

    let mut limbs: Vec<u32> = vec![0];
    for c in token.chars() {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| Error::InvalidNumber(token.to_string()))?;

        let mut carry = u64::from(digit);
        for limb in limbs.iter_mut() {
            let acc = u64::from(*limb) * 10 + carry;
            *limb = acc as u32;
            carry = acc >> 32;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
    }

    // The top limb is non-zero unless the whole value is zero.
    let mut limbs = limbs.iter().rev();
    let mut hex = match limbs.next() {
        Some(top) => format!("{:X}", top),
        None => String::from("0"),
    };
    for limb in limbs {
        hex.push_str(&format!("{:08X}", limb));
    }

    Ok(HexDigitString(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_shapes() {
        assert_eq!(
            NumericInput::classify("255"),
            NumericInput::Decimal("255".to_string())
        );
        assert_eq!(
            NumericInput::classify("0xff"),
            NumericInput::PrefixedHex("0xff".to_string())
        );
        assert_eq!(
            NumericInput::classify("0XFF"),
            NumericInput::PrefixedHex("0XFF".to_string())
        );
        assert_eq!(
            NumericInput::classify("dead beef"),
            NumericInput::LiteralHex("deadbeef".to_string())
        );
        assert_eq!(
            NumericInput::classify(""),
            NumericInput::LiteralHex(String::new())
        );
    }

    #[test]
    fn test_classify_strips_whitespace() {
        assert_eq!(
            NumericInput::classify(" 1 0\t24 "),
            NumericInput::Decimal("1024".to_string())
        );
    }

    #[test]
    fn test_decimal_matches_native_formatting() {
        for n in (0u64..5000).chain([u64::from(u32::MAX), u64::from(u32::MAX) + 1, u64::MAX]) {
            let parsed = parse_token(&n.to_string()).unwrap();
            assert_eq!(parsed.as_str(), format!("{:X}", n), "n = {}", n);
        }
    }

    #[test]
    fn test_decimal_beyond_u128() {
        // 2^128
        let parsed = parse_token("340282366920938463463374607431768211456").unwrap();
        assert_eq!(parsed.as_str(), format!("1{}", "0".repeat(32)));

        let parsed = parse_token(&u128::MAX.to_string()).unwrap();
        assert_eq!(parsed.as_str(), "F".repeat(32));
    }

    #[test]
    fn test_decimal_zero_and_leading_zeros() {
        assert_eq!(parse_token("0").unwrap().as_str(), "0");
        assert_eq!(parse_token("000").unwrap().as_str(), "0");
        assert_eq!(parse_token("0010").unwrap().as_str(), "A");
    }

    #[test]
    fn test_digits_only_token_is_decimal() {
        assert_eq!(parse_token("123").unwrap().as_str(), "7B");
    }

    #[test]
    fn test_prefixed_hex() {
        assert_eq!(parse_token("0xff").unwrap().as_str(), "FF");
        assert_eq!(parse_token("0X1f").unwrap().as_str(), "1F");
        assert_eq!(parse_token("0x00ab").unwrap().as_str(), "AB");
        assert_eq!(parse_token("0x0000").unwrap().as_str(), "0");
    }

    #[test]
    fn test_prefixed_hex_invalid() {
        assert!(matches!(parse_token("0x"), Err(Error::InvalidNumber(_))));
        assert!(matches!(parse_token("0x1G"), Err(Error::InvalidNumber(t)) if t == "0x1G"));
    }

    #[test]
    fn test_literal_hex_uppercased_and_kept() {
        assert_eq!(parse_token("ff").unwrap().as_str(), "FF");
        assert_eq!(parse_token("00fF").unwrap().as_str(), "00FF");
        assert_eq!(parse_token("DeadBeef").unwrap().as_str(), "DEADBEEF");
    }

    #[test]
    fn test_literal_hex_invalid_digit() {
        match parse_token("12G") {
            Err(Error::InvalidDigit { token, digit }) => {
                assert_eq!(token, "12G");
                assert_eq!(digit, 'G');
            }
            other => panic!("expected InvalidDigit, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_token_is_invalid_number() {
        assert!(matches!(parse_token("   "), Err(Error::InvalidNumber(_))));
    }

    #[test]
    fn test_zero_padded() {
        let digits = parse_token("1").unwrap();
        assert_eq!(digits.zero_padded(3).as_str(), "001");
        assert_eq!(digits.zero_padded(0).as_str(), "1");
        assert_eq!(digits.digit_at(0), Some('1'));
        assert_eq!(digits.digit_at(1), None);
    }

    #[test]
    fn test_from_str() {
        let digits: HexDigitString = "0xabc".parse().unwrap();
        assert_eq!(digits.to_string(), "ABC");
    }
}
