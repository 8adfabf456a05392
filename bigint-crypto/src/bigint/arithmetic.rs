//! Schoolbook and Karatsuba arithmetic over base-10 digit vectors.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::errors::BigIntCryptoError;

use super::{BigInt, Digit, cmp_digits};

/// Operands whose shorter magnitude is at most this many digits are
/// multiplied with the schoolbook convolution.
const KARATSUBA_THRESHOLD: usize = 100;

fn unsigned_sum(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    let max_length = lhs.len().max(rhs.len());
    let mut sum = Vec::with_capacity(max_length + 1);
    let mut carry = 0u8;
    for i in 0..max_length {
        let cur = lhs.get(i).copied().unwrap_or(0) + rhs.get(i).copied().unwrap_or(0) + carry;
        sum.push(cur % 10);
        carry = cur / 10;
    }
    if carry != 0 {
        sum.push(carry);
    }
    sum
}

/// Subtracts `rhs` from `lhs` digit-wise. The minuend's magnitude must be
/// at least the subtrahend's; a leftover borrow is a violated precondition.
fn unsigned_diff(lhs: &[Digit], rhs: &[Digit]) -> Result<Vec<Digit>, BigIntCryptoError> {
    if lhs.len() < rhs.len() {
        return Err(BigIntCryptoError::PreconditionViolated(
            "minuend magnitude is smaller than subtrahend magnitude".to_string(),
        ));
    }
    let mut diff = Vec::with_capacity(lhs.len());
    let mut borrow = 0i8;
    for i in 0..lhs.len() {
        let cur = lhs[i] as i8 - borrow - rhs.get(i).copied().unwrap_or(0) as i8;
        if cur >= 0 {
            borrow = 0;
            diff.push(cur as Digit);
        } else {
            borrow = 1;
            diff.push((10 + cur) as Digit);
        }
    }
    if borrow != 0 {
        return Err(BigIntCryptoError::PreconditionViolated(
            "minuend magnitude is smaller than subtrahend magnitude".to_string(),
        ));
    }
    Ok(diff)
}

fn signed_add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.positive == rhs.positive {
        return BigInt::from_digits(unsigned_sum(&lhs.digits, &rhs.digits), lhs.positive);
    }
    match cmp_digits(&lhs.digits, &rhs.digits) {
        Ordering::Less => BigInt::from_digits(
            unsigned_diff(&rhs.digits, &lhs.digits).expect("magnitudes already ordered"),
            rhs.positive,
        ),
        _ => BigInt::from_digits(
            unsigned_diff(&lhs.digits, &rhs.digits).expect("magnitudes already ordered"),
            lhs.positive,
        ),
    }
}

/// O(n·m) digit convolution with carry propagation.
fn schoolbook_mul(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    let mut acc = vec![0i64; lhs.len() + rhs.len()];
    for (i, &a) in lhs.iter().enumerate() {
        if a == 0 {
            continue;
        }
        let mut carry = 0i64;
        for (j, &b) in rhs.iter().enumerate() {
            let cur = acc[i + j] + a as i64 * b as i64 + carry;
            acc[i + j] = cur % 10;
            carry = cur / 10;
        }
        let mut k = i + rhs.len();
        while carry != 0 {
            let cur = acc[k] + carry;
            acc[k] = cur % 10;
            carry = cur / 10;
            k += 1;
        }
    }
    acc.into_iter().map(|d| d as Digit).collect()
}

/// Karatsuba multiplication of magnitudes.
///
/// A = A0 + A1·10^M, B = B0 + B1·10^M, with M = max(|A|, |B|) / 2:
///   C0 = A0·B0
///   C1 = A1·B1
///   C2 = (A0 + A1)·(B0 + B1) − C0 − C1
///   A·B = C0 + C2·10^M + C1·10^(2M)
fn karatsuba_mul(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    if lhs.len().min(rhs.len()) <= KARATSUBA_THRESHOLD {
        return schoolbook_mul(lhs, rhs);
    }
    let split = lhs.len().max(rhs.len()) / 2;
    if split <= 1 {
        return schoolbook_mul(lhs, rhs);
    }

    let (lhs_lo, lhs_hi) = lhs.split_at(split.min(lhs.len()));
    let (rhs_lo, rhs_hi) = rhs.split_at(split.min(rhs.len()));

    let c0 = BigInt::from_digits(karatsuba_mul(lhs_lo, rhs_lo), true);
    let c1 = BigInt::from_digits(karatsuba_mul(lhs_hi, rhs_hi), true);
    let cross = BigInt::from_digits(
        karatsuba_mul(&unsigned_sum(lhs_lo, lhs_hi), &unsigned_sum(rhs_lo, rhs_hi)),
        true,
    );
    // Non-negative by construction.
    let c2 = &(&cross - &c0) - &c1;

    let result_len = c0
        .len()
        .max(c2.len() + split)
        .max(c1.len() + 2 * split);
    let mut acc = vec![0i64; result_len + 1];
    for (i, &d) in c0.digits.iter().enumerate() {
        acc[i] += d as i64;
    }
    for (i, &d) in c2.digits.iter().enumerate() {
        acc[split + i] += d as i64;
    }
    for (i, &d) in c1.digits.iter().enumerate() {
        acc[2 * split + i] += d as i64;
    }

    let mut digits = Vec::with_capacity(acc.len());
    let mut carry = 0i64;
    for value in acc {
        let cur = value + carry;
        digits.push((cur % 10) as Digit);
        carry = cur / 10;
    }
    while carry != 0 {
        digits.push((carry % 10) as Digit);
        carry /= 10;
    }
    digits
}

fn signed_mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.is_zero() || rhs.is_zero() {
        return BigInt::zero();
    }
    BigInt::from_digits(
        karatsuba_mul(&lhs.digits, &rhs.digits),
        lhs.positive == rhs.positive,
    )
}

/// Largest digit `k` in `0..=9` with `divisor * k <= prefix`.
fn quotient_digit(prefix: &BigInt, divisor: &BigInt) -> Digit {
    let mut lo = 0u8;
    let mut hi = 9u8;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if divisor * &BigInt::from(mid as i64) <= *prefix {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Magnitude long division. `rhs` must be nonzero and both slices trimmed.
fn unsigned_div_rem(lhs: &[Digit], rhs: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    if cmp_digits(lhs, rhs) == Ordering::Less {
        return (vec![0], lhs.to_vec());
    }

    let divisor = BigInt::from_digits(rhs.to_vec(), true);
    let mut quotient = vec![0 as Digit; lhs.len()];
    let mut remainder = BigInt::zero();

    for (pos, &digit) in lhs.iter().enumerate().rev() {
        if remainder.is_zero() {
            remainder.digits[0] = digit;
        } else {
            remainder.digits.insert(0, digit);
        }
        let k = quotient_digit(&remainder, &divisor);
        if k > 0 {
            remainder = &remainder - &(&divisor * &BigInt::from(k as i64));
        }
        quotient[pos] = k;
    }

    (quotient, remainder.digits)
}

impl BigInt {
    /// Truncating division: the quotient rounds toward zero and the
    /// remainder's sign follows the dividend, so that
    /// `(a / b) * b + a % b == a`.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), BigIntCryptoError> {
        if other.is_zero() {
            return Err(BigIntCryptoError::DivisionByZero);
        }
        let (quotient, remainder) = unsigned_div_rem(&self.digits, &other.digits);
        Ok((
            BigInt::from_digits(quotient, self.positive == other.positive),
            BigInt::from_digits(remainder, self.positive),
        ))
    }

    /// Subtracts `other`'s magnitude from `self`'s magnitude, ignoring
    /// both signs. Errors unless `|self| >= |other|`.
    pub fn magnitude_sub(&self, other: &BigInt) -> Result<BigInt, BigIntCryptoError> {
        Ok(BigInt::from_digits(
            unsigned_diff(&self.digits, &other.digits)?,
            true,
        ))
    }

    /// Fast exponentiation by repeated squaring.
    ///
    /// # Errors
    ///
    /// `PreconditionViolated` for a negative exponent.
    pub fn pow(base: &BigInt, exponent: &BigInt) -> Result<BigInt, BigIntCryptoError> {
        if exponent.is_negative() {
            return Err(BigIntCryptoError::PreconditionViolated(
                "exponent must be non-negative".to_string(),
            ));
        }
        let mut result = BigInt::one();
        for bit in exponent.to_base2().bytes() {
            result = &result * &result;
            if bit == b'1' {
                result = &result * base;
            }
        }
        Ok(result)
    }

    /// Fast exponentiation modulo `modulus`, reducing after every
    /// multiply to bound intermediate size.
    pub fn modpow(
        base: &BigInt,
        exponent: &BigInt,
        modulus: &BigInt,
    ) -> Result<BigInt, BigIntCryptoError> {
        if modulus.is_zero() {
            return Err(BigIntCryptoError::DivisionByZero);
        }
        if modulus.is_negative() {
            return Err(BigIntCryptoError::PreconditionViolated(
                "modulus must be positive".to_string(),
            ));
        }
        if exponent.is_negative() {
            return Err(BigIntCryptoError::PreconditionViolated(
                "exponent must be non-negative".to_string(),
            ));
        }
        let reduced_base = BigInt::mod_floor(base, modulus)?;
        let mut result = BigInt::mod_floor(&BigInt::one(), modulus)?;
        for bit in exponent.to_base2().bytes() {
            result = BigInt::mod_floor(&(&result * &result), modulus)?;
            if bit == b'1' {
                result = BigInt::mod_floor(&(&result * &reduced_base), modulus)?;
            }
        }
        Ok(result)
    }

    /// Floor square root, found digit by digit from the most significant
    /// position with a binary search over `0..=9`.
    pub fn sqrt(number: &BigInt) -> Result<BigInt, BigIntCryptoError> {
        if number.is_negative() {
            return Err(BigIntCryptoError::PreconditionViolated(
                "square root of a negative number".to_string(),
            ));
        }
        if number.is_zero() {
            return Ok(BigInt::zero());
        }
        let len = (number.len() + 1) / 2;
        let mut result = vec![0 as Digit; len];
        for i in (0..len).rev() {
            let mut lo = 0u8;
            let mut hi = 9u8;
            while lo < hi {
                let mid = (lo + hi + 1) / 2;
                result[i] = mid;
                let candidate = BigInt::from_digits(result.clone(), true);
                if &candidate * &candidate <= *number {
                    lo = mid;
                } else {
                    hi = mid - 1;
                }
            }
            result[i] = lo;
        }
        Ok(BigInt::from_digits(result, true))
    }

    /// Floor-style modulus: the truncating quotient is lowered by one
    /// whenever the operand signs differ and the truncating remainder is
    /// nonzero. For a positive divisor the result lands in `[0, divisor)`.
    pub fn mod_floor(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, BigIntCryptoError> {
        let (_, remainder) = lhs.div_rem(rhs)?;
        if lhs.positive != rhs.positive && !remainder.is_zero() {
            return Ok(&remainder + rhs);
        }
        Ok(remainder)
    }

    /// Iterative Euclidean algorithm on magnitudes.
    pub fn gcd(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let mut a = lhs.abs();
        let mut b = rhs.abs();
        while !a.is_zero() && !b.is_zero() {
            if a > b {
                a = &a % &b;
            } else {
                b = &b % &a;
            }
        }
        &a + &b
    }

    /// Least common multiple; both operands must be strictly positive.
    pub fn lcm(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, BigIntCryptoError> {
        if *lhs <= BigInt::zero() || *rhs <= BigInt::zero() {
            return Err(BigIntCryptoError::PreconditionViolated(
                "lcm requires strictly positive operands".to_string(),
            ));
        }
        let g = BigInt::gcd(lhs, rhs);
        Ok(&(lhs * rhs) / &g)
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        signed_add(self, rhs)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        signed_add(self, &-rhs)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        signed_mul(self, rhs)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("modulus by zero"),
        }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        if self.is_zero() {
            return self.clone();
        }
        BigInt {
            digits: self.digits.clone(),
            positive: !self.positive,
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

macro_rules! forward_value_variants {
    (impl $imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }
    };
}

forward_value_variants!(impl Add, add);
forward_value_variants!(impl Sub, sub);
forward_value_variants!(impl Mul, mul);
forward_value_variants!(impl Div, div);
forward_value_variants!(impl Rem, rem);

macro_rules! forward_assign_variants {
    (impl $imp:ident, $method:ident, $op:tt) => {
        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = &*self $op rhs;
            }
        }

        impl $imp<BigInt> for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = &*self $op &rhs;
            }
        }
    };
}

forward_assign_variants!(impl AddAssign, add_assign, +);
forward_assign_variants!(impl SubAssign, sub_assign, -);
forward_assign_variants!(impl MulAssign, mul_assign, *);
forward_assign_variants!(impl DivAssign, div_assign, /);
forward_assign_variants!(impl RemAssign, rem_assign, %);
