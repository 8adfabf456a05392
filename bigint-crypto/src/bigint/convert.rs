//! Radix conversions: decimal, base-2, hexadecimal, base-64 and raw bytes.
//!
//! Every forward conversion has an exact inverse, including the canonical
//! single-symbol form of zero (`"0"`, `"0"`, `"A"` and `[0]` respectively).
//! String encodings carry a leading `-` for negative values; the byte
//! encoding covers the magnitude only.

use std::fmt;
use std::str::FromStr;

use crate::errors::BigIntCryptoError;

use super::encoding_table::{BASE64_CHAR_TO_INDEX_MAP, INDEX_TO_BASE64_CHAR_MAP};
use super::{BigInt, Digit};

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        for &digit in self.digits.iter().rev() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for BigInt {
    type Err = BigIntCryptoError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let (positive, body) = match src.strip_prefix('-') {
            Some(rest) => (false, rest),
            None => (true, src),
        };
        if body.is_empty() {
            return Err(BigIntCryptoError::InvalidInput(
                "empty decimal string".to_string(),
            ));
        }
        let mut digits = Vec::with_capacity(body.len());
        for ch in body.chars().rev() {
            let digit = ch.to_digit(10).ok_or_else(|| {
                BigIntCryptoError::InvalidInput(format!("invalid decimal digit '{ch}'"))
            })?;
            digits.push(digit as Digit);
        }
        Ok(BigInt::from_digits(digits, positive))
    }
}

fn hex_char(value: u8) -> char {
    if value < 10 {
        (b'0' + value) as char
    } else {
        (b'a' + value - 10) as char
    }
}

impl BigInt {
    /// Magnitude rewritten in the given radix, least-significant digit
    /// first; empty for zero.
    fn magnitude_in_radix(&self, radix: i64) -> Vec<u8> {
        let radix = BigInt::from(radix);
        let mut tmp = self.abs();
        let mut out = Vec::new();
        while !tmp.is_zero() {
            let (quotient, remainder) = tmp.div_rem(&radix).expect("radix is nonzero");
            out.push(remainder.to_i64().expect("remainder is below the radix") as u8);
            tmp = quotient;
        }
        out
    }

    fn radix_prefix(&self) -> &'static str {
        if self.is_negative() { "-" } else { "" }
    }

    pub fn to_base2(&self) -> String {
        let digits = self.magnitude_in_radix(2);
        if digits.is_empty() {
            return "0".to_string();
        }
        let body: String = digits
            .iter()
            .rev()
            .map(|&bit| if bit == 0 { '0' } else { '1' })
            .collect();
        format!("{}{}", self.radix_prefix(), body)
    }

    pub fn to_hex(&self) -> String {
        let digits = self.magnitude_in_radix(16);
        if digits.is_empty() {
            return "0".to_string();
        }
        let body: String = digits.iter().rev().map(|&d| hex_char(d)).collect();
        format!("{}{}", self.radix_prefix(), body)
    }

    /// Positional radix-64 numeral over the standard alphabet; zero is `"A"`.
    pub fn to_base64(&self) -> String {
        let mut digits = self.magnitude_in_radix(64);
        if digits.is_empty() {
            digits.push(0);
        }
        let body: String = digits
            .iter()
            .rev()
            .map(|d| INDEX_TO_BASE64_CHAR_MAP[d])
            .collect();
        format!("{}{}", self.radix_prefix(), body)
    }

    /// Magnitude as big-endian radix-256 bytes; zero is `[0]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.magnitude_in_radix(256);
        if bytes.is_empty() {
            bytes.push(0);
        }
        bytes.reverse();
        bytes
    }

    fn from_radix_str<F>(src: &str, radix: i64, digit_value: F) -> Result<BigInt, BigIntCryptoError>
    where
        F: Fn(char) -> Result<u8, BigIntCryptoError>,
    {
        let (negative, body) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src),
        };
        if body.is_empty() {
            return Err(BigIntCryptoError::InvalidInput(
                "empty numeral string".to_string(),
            ));
        }
        let radix = BigInt::from(radix);
        let mut result = BigInt::zero();
        for ch in body.chars() {
            let value = digit_value(ch)?;
            result = &(&result * &radix) + &BigInt::from(value as i64);
        }
        if negative { Ok(-result) } else { Ok(result) }
    }

    pub fn from_base2(src: &str) -> Result<BigInt, BigIntCryptoError> {
        BigInt::from_radix_str(src, 2, |ch| match ch {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(BigIntCryptoError::InvalidInput(format!(
                "invalid binary digit '{ch}'"
            ))),
        })
    }

    pub fn from_hex(src: &str) -> Result<BigInt, BigIntCryptoError> {
        BigInt::from_radix_str(src, 16, |ch| {
            ch.to_digit(16).map(|d| d as u8).ok_or_else(|| {
                BigIntCryptoError::InvalidInput(format!("invalid hex digit '{ch}'"))
            })
        })
    }

    pub fn from_base64(src: &str) -> Result<BigInt, BigIntCryptoError> {
        BigInt::from_radix_str(src, 64, |ch| {
            BASE64_CHAR_TO_INDEX_MAP.get(&ch).copied().ok_or_else(|| {
                BigIntCryptoError::InvalidInput(format!("invalid base64 symbol '{ch}'"))
            })
        })
    }

    /// Inverse of [`BigInt::to_bytes`]; the result is always non-negative.
    pub fn from_bytes(src: &[u8]) -> BigInt {
        let radix = BigInt::from(256);
        let mut result = BigInt::zero();
        for &byte in src {
            result = &(&result * &radix) + &BigInt::from(byte as i64);
        }
        result
    }
}
