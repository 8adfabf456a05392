//! # BigInt Module
//!
//! Provides the [`BigInt`] struct, an arbitrary-precision signed integer
//! over a base-10 digit vector, together with its arithmetic and radix
//! conversions.

pub mod arithmetic;
pub mod convert;
pub mod encoding_table;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single decimal digit, always in `0..=9`.
pub type Digit = u8;

/// Arbitrary-precision signed integer.
///
/// Digits are stored least-significant first. Invariants:
/// - no trailing zero at the most-significant end, except the value zero
///   which is stored as exactly one `0` digit;
/// - zero always carries a positive sign;
/// - every digit is in `0..=9`.
///
/// `BigInt` is an immutable value: every operation produces a new value
/// and no instance ever aliases another's digit storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigInt {
    digits: Vec<Digit>,
    positive: bool,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt {
            digits: vec![0],
            positive: true,
        }
    }

    pub fn one() -> Self {
        BigInt {
            digits: vec![1],
            positive: true,
        }
    }

    /// Builds a value from a prevalidated least-significant-first digit
    /// buffer, trimming high zeros and fixing the sign of zero.
    pub(crate) fn from_digits(digits: Vec<Digit>, positive: bool) -> Self {
        let mut number = BigInt { digits, positive };
        number.normalize();
        number
    }

    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        if self.digits.len() == 1 && self.digits[0] == 0 {
            self.positive = true;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Zero counts as positive.
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    pub fn is_even(&self) -> bool {
        self.digits[0] % 2 == 0
    }

    pub fn is_odd(&self) -> bool {
        self.digits[0] % 2 == 1
    }

    /// Number of decimal digits in the magnitude.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Digit at 1-based position `pos`, counted from the most significant
    /// digit. `pos` must be in `1..=len()`.
    pub fn digit_at(&self, pos: usize) -> Digit {
        self.digits[self.digits.len() - pos]
    }

    pub fn abs(&self) -> BigInt {
        BigInt {
            digits: self.digits.clone(),
            positive: true,
        }
    }

    /// Value as `i64`, or `None` when the magnitude does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        // Accumulate on the negative side, which is one wider than the
        // positive side.
        let mut result: i64 = 0;
        for &digit in self.digits.iter().rev() {
            result = result.checked_mul(10)?.checked_sub(digit as i64)?;
        }
        if self.positive {
            result.checked_neg()
        } else {
            Some(result)
        }
    }
}

impl From<i64> for BigInt {
    fn from(number: i64) -> Self {
        let positive = number >= 0;
        let mut magnitude = number.unsigned_abs();
        if magnitude == 0 {
            return BigInt::zero();
        }
        let mut digits = Vec::new();
        while magnitude != 0 {
            digits.push((magnitude % 10) as Digit);
            magnitude /= 10;
        }
        BigInt { digits, positive }
    }
}

impl From<i32> for BigInt {
    fn from(number: i32) -> Self {
        BigInt::from(number as i64)
    }
}

impl From<u32> for BigInt {
    fn from(number: u32) -> Self {
        BigInt::from(number as i64)
    }
}

impl From<u64> for BigInt {
    fn from(number: u64) -> Self {
        if number == 0 {
            return BigInt::zero();
        }
        let mut magnitude = number;
        let mut digits = Vec::new();
        while magnitude != 0 {
            digits.push((magnitude % 10) as Digit);
            magnitude /= 10;
        }
        BigInt {
            digits,
            positive: true,
        }
    }
}

/// Compares two magnitudes: longer wins, equal lengths compare from the
/// most significant digit downward. Both slices must be trimmed.
pub(crate) fn cmp_digits(lhs: &[Digit], rhs: &[Digit]) -> Ordering {
    if lhs.len() != rhs.len() {
        return lhs.len().cmp(&rhs.len());
    }
    for pos in (0..lhs.len()).rev() {
        if lhs[pos] != rhs[pos] {
            return lhs[pos].cmp(&rhs[pos]);
        }
    }
    Ordering::Equal
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.positive, other.positive) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => cmp_digits(&self.digits, &other.digits),
            (false, false) => cmp_digits(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_machine_integers() {
        assert_eq!(BigInt::from(0i64), BigInt::zero());
        assert_eq!(BigInt::from(1i64), BigInt::one());
        assert_eq!(BigInt::from(-1i64).to_i64(), Some(-1));
        assert_eq!(BigInt::from(i64::MAX).to_string(), "9223372036854775807");
        assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_zero_is_positive() {
        let negative_zero = BigInt::from_str("-0").unwrap();
        assert!(negative_zero.is_positive());
        assert_eq!(negative_zero, BigInt::zero());
    }

    #[test]
    fn test_parity() {
        assert!(BigInt::from(0).is_even());
        assert!(BigInt::from(-7).is_odd());
        assert!(BigInt::from(42).is_even());
    }

    #[test]
    fn test_ordering() {
        let mut values: Vec<BigInt> = [3, -10, 0, 99, -2, 100, -100]
            .iter()
            .map(|&v| BigInt::from(v))
            .collect();
        values.sort();
        let sorted: Vec<i64> = values.iter().map(|v| v.to_i64().unwrap()).collect();
        assert_eq!(sorted, vec![-100, -10, -2, 0, 3, 99, 100]);
    }

    #[test]
    fn test_digit_access() {
        let number = BigInt::from(90210);
        assert_eq!(number.len(), 5);
        assert_eq!(number.digit_at(1), 9);
        assert_eq!(number.digit_at(5), 0);
    }

    #[test]
    fn test_to_i64_overflow() {
        let too_big = BigInt::from_str("10000000000000000000").unwrap();
        assert_eq!(too_big.to_i64(), None);
        assert_eq!(BigInt::from(i64::MAX).to_i64(), Some(i64::MAX));
        assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(BigInt::from_str("9223372036854775808").unwrap().to_i64(), None);
    }
}
