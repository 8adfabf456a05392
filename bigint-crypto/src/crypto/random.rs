//! Bounded random sampling and prime generation.
//!
//! Samplers draw decimal digits against the bound from the most
//! significant position down, so no intermediate value ever exceeds the
//! bound's length. Prime generators probe with [`miller_rabin`].

use rand::Rng;
use rand::seq::SliceRandom;

use crate::bigint::BigInt;
use crate::errors::BigIntCryptoError;

use super::primality::miller_rabin;

/// Probes per slot before `random_primes` reports the range exhausted.
const PRIME_PROBES: u32 = 10;

/// Value in `[0, max]`, drawn digit by digit: each position is bounded
/// by the corresponding digit of `max` until one draw comes in strictly
/// below it, after which the remaining positions are free.
fn sample_at_most(rng: &mut impl Rng, max: &BigInt) -> BigInt {
    let ten = BigInt::from(10);
    let mut result = BigInt::zero();
    let mut smaller = false;
    for pos in 1..=max.len() {
        let new_digit = if smaller {
            rng.random_range(0..10u8)
        } else {
            let bound = max.digit_at(pos);
            let drawn = rng.random_range(0..=bound);
            smaller |= drawn < bound;
            drawn
        };
        result = &(&result * &ten) + &BigInt::from(new_digit as i64);
    }
    result
}

/// Digit-lexicographic value in `[0, bound)`, approximately uniform.
///
/// # Errors
///
/// `PreconditionViolated` unless `bound` is strictly positive.
pub fn random_below(rng: &mut impl Rng, bound: &BigInt) -> Result<BigInt, BigIntCryptoError> {
    if bound.is_zero() || bound.is_negative() {
        return Err(BigIntCryptoError::PreconditionViolated(
            "sampling bound must be strictly positive".to_string(),
        ));
    }
    Ok(sample_at_most(rng, &(bound - &BigInt::one())))
}

/// Digit-lexicographic value in `[min, max]`, both ends inclusive and
/// approximately uniform.
///
/// # Errors
///
/// `PreconditionViolated` when `min > max`.
pub fn random_in_range(
    rng: &mut impl Rng,
    min: &BigInt,
    max: &BigInt,
) -> Result<BigInt, BigIntCryptoError> {
    if min > max {
        return Err(BigIntCryptoError::PreconditionViolated(format!(
            "empty sampling range [{min}, {max}]"
        )));
    }
    Ok(min + &sample_at_most(rng, &(max - min)))
}

/// Value with exactly `len` decimal digits.
///
/// # Errors
///
/// `PreconditionViolated` for `len == 0`.
pub fn random_with_len(rng: &mut impl Rng, len: usize) -> Result<BigInt, BigIntCryptoError> {
    if len == 0 {
        return Err(BigIntCryptoError::PreconditionViolated(
            "length must be at least one digit".to_string(),
        ));
    }
    let max = BigInt::from_digits(vec![9; len], true);
    let min = &(&max + &BigInt::one()) / &BigInt::from(10);
    random_in_range(rng, &min, &max)
}

/// Value in `[2^(bitness-1), 2^bitness - 1]`; zero for `bitness == 0`.
pub fn random_with_bitness(rng: &mut impl Rng, bitness: u32) -> BigInt {
    if bitness == 0 {
        return BigInt::zero();
    }
    let (min, max) = bitness_bounds(bitness);
    random_in_range(rng, &min, &max).expect("bit range is ordered")
}

fn bitness_bounds(bitness: u32) -> (BigInt, BigInt) {
    let two = BigInt::from(2);
    let min = BigInt::pow(&two, &BigInt::from(bitness as i64 - 1)).expect("exponent is non-negative");
    let max = &BigInt::pow(&two, &BigInt::from(bitness as i64)).expect("exponent is non-negative")
        - &BigInt::one();
    (min, max)
}

/// Smallest probable prime not below `src` (except `src <= 2`, which
/// maps to 2). Steps over odd candidates with [`miller_rabin`].
pub fn closest_prime(rng: &mut impl Rng, src: &BigInt) -> Result<BigInt, BigIntCryptoError> {
    if *src <= BigInt::zero() {
        return Err(BigIntCryptoError::PreconditionViolated(
            "prime search needs a strictly positive start".to_string(),
        ));
    }
    let two = BigInt::from(2);
    if *src == BigInt::one() || *src == two {
        return Ok(two);
    }
    let mut candidate = src.clone();
    if candidate.is_even() {
        candidate = &candidate + &BigInt::one();
    }
    while !miller_rabin(rng, &candidate) {
        candidate = &candidate + &two;
    }
    Ok(candidate)
}

/// Up to `count` primes in `[min, max]`, in ascending order, found by
/// repeated [`closest_prime`] steps.
pub fn first_primes(
    rng: &mut impl Rng,
    min: &BigInt,
    max: &BigInt,
    count: usize,
) -> Result<Vec<BigInt>, BigIntCryptoError> {
    let mut last = min.clone();
    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        if last > *max {
            break;
        }
        let prime = closest_prime(rng, &last)?;
        last = &prime + &BigInt::one();
        if prime <= *max {
            result.push(prime);
        }
    }
    Ok(result)
}

/// `count` random primes in `[min, max]`. Narrow ranges (span of 200 or
/// less) are enumerated and shuffled; wide ranges are probed, with
/// `SearchExhausted` when a slot finds no prime within its probe budget.
pub fn random_primes(
    rng: &mut impl Rng,
    min: &BigInt,
    max: &BigInt,
    count: usize,
) -> Result<Vec<BigInt>, BigIntCryptoError> {
    if &(max - min) <= &BigInt::from(200) {
        let mut primes = first_primes(rng, min, max, 200)?;
        primes.shuffle(rng);
        primes.truncate(count);
        return Ok(primes);
    }

    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        let mut found = false;
        for _ in 0..PRIME_PROBES {
            let probe = random_in_range(rng, min, max)?;
            let prime = closest_prime(rng, &probe)?;
            if prime <= *max {
                result.push(prime);
                found = true;
                break;
            }
        }
        if !found {
            return Err(BigIntCryptoError::SearchExhausted(format!(
                "no prime found in [{min}, {max}] after {PRIME_PROBES} probes"
            )));
        }
    }
    Ok(result)
}

/// [`random_primes`] over the `bitness`-bit range; empty below 2 bits.
pub fn random_primes_with_bitness(
    rng: &mut impl Rng,
    bitness: u32,
    count: usize,
) -> Result<Vec<BigInt>, BigIntCryptoError> {
    if bitness <= 1 {
        return Ok(Vec::new());
    }
    let (min, max) = bitness_bounds(bitness);
    random_primes(rng, &min, &max, count)
}

/// [`first_primes`] over the `bitness`-bit range; empty below 2 bits.
pub fn first_primes_with_bitness(
    rng: &mut impl Rng,
    bitness: u32,
    count: usize,
) -> Result<Vec<BigInt>, BigIntCryptoError> {
    if bitness <= 1 {
        return Ok(Vec::new());
    }
    let (min, max) = bitness_bounds(bitness);
    first_primes(rng, &min, &max, count)
}
