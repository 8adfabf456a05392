//! Pollard-rho factorization and the multiplicative functions built on
//! top of it.

use itertools::Itertools;
use rand::Rng;

use crate::bigint::BigInt;
use crate::errors::BigIntCryptoError;

use super::primality::miller_rabin;
use super::random::random_below;

/// Restart budget used by [`factorize`] for each composite split.
pub const DEFAULT_RHO_RESTARTS: u32 = 24;

/// Pollard's rho with Floyd cycle detection, pushing the prime factors
/// of `number` onto `result` with multiplicity.
///
/// Each restart draws a fresh start point and a fresh constant for the
/// polynomial `f(x) = x^2 + c`. A degenerate cycle (the tortoise and
/// hare collide exactly) burns one restart; running out of restarts on
/// a composite is `SearchExhausted`.
pub fn pollard_rho(
    rng: &mut impl Rng,
    number: &BigInt,
    restarts: u32,
    result: &mut Vec<BigInt>,
) -> Result<(), BigIntCryptoError> {
    let one = BigInt::one();
    let two = BigInt::from(2);
    if *number <= BigInt::zero() {
        return Err(BigIntCryptoError::PreconditionViolated(
            "factorization needs a strictly positive number".to_string(),
        ));
    }
    if *number == one {
        return Ok(());
    }
    if number.is_even() {
        result.push(two.clone());
        return pollard_rho(rng, &(number / &two), restarts, result);
    }
    if miller_rabin(rng, number) {
        result.push(number.clone());
        return Ok(());
    }

    for _ in 0..restarts {
        let mut x = random_below(rng, number)?;
        let mut y = x.clone();
        let c = random_below(rng, number)?;
        let step = |value: &BigInt| -> Result<BigInt, BigIntCryptoError> {
            BigInt::mod_floor(&(&BigInt::mod_floor(&(value * value), number)? + &c), number)
        };

        let mut g = one.clone();
        let mut diff = BigInt::zero();
        while g == one {
            x = step(&x)?;
            y = step(&step(&y)?)?;
            diff = (&x - &y).abs();
            g = BigInt::gcd(&diff, number);
        }
        if diff.is_zero() {
            continue;
        }

        pollard_rho(rng, &g, restarts, result)?;
        pollard_rho(rng, &(number / &g), restarts, result)?;
        return Ok(());
    }

    Err(BigIntCryptoError::SearchExhausted(format!(
        "no factor of {number} found within {restarts} restarts"
    )))
}

/// Full factorization as ascending `(prime, multiplicity)` pairs; empty
/// for 1.
pub fn factorize(
    rng: &mut impl Rng,
    number: &BigInt,
) -> Result<Vec<(BigInt, u32)>, BigIntCryptoError> {
    let mut partition = Vec::new();
    pollard_rho(rng, number, DEFAULT_RHO_RESTARTS, &mut partition)?;
    partition.sort();
    Ok(partition
        .into_iter()
        .dedup_with_count()
        .map(|(count, prime)| (prime, count as u32))
        .collect())
}

/// Euler's totient via the factorization of `number`.
pub fn phi(rng: &mut impl Rng, number: &BigInt) -> Result<BigInt, BigIntCryptoError> {
    let mut result = number.clone();
    for (prime, _) in factorize(rng, number)? {
        result = &result - &(&result / &prime);
    }
    Ok(result)
}

/// Möbius function: 0 for non-squarefree numbers, otherwise `(-1)^k`
/// for `k` distinct prime factors.
pub fn mobius(rng: &mut impl Rng, number: &BigInt) -> Result<i32, BigIntCryptoError> {
    let factors = factorize(rng, number)?;
    if factors.iter().any(|(_, multiplicity)| *multiplicity > 1) {
        return Ok(0);
    }
    Ok(if factors.len() % 2 == 1 { -1 } else { 1 })
}
