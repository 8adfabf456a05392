//! Discrete logarithms by the baby-step giant-step meet in the middle.

use std::collections::HashMap;

use crate::bigint::BigInt;
use crate::errors::BigIntCryptoError;

/// Solves `a^x = b (mod p)` for `x` with `O(sqrt(p))` multiplications
/// and a table of the same size.
///
/// The giant strides `a^m, a^2m, ...` with `m = floor(sqrt(p)) + 1` are
/// indexed first; the baby walk `b, b*a, b*a^2, ...` then looks for a
/// collision. `SearchExhausted` means no exponent below `p` exists.
pub fn giant_step_baby_step(
    a: &BigInt,
    b: &BigInt,
    p: &BigInt,
) -> Result<BigInt, BigIntCryptoError> {
    let one = BigInt::one();
    if *p <= one {
        return Err(BigIntCryptoError::PreconditionViolated(
            "modulus must be greater than one".to_string(),
        ));
    }

    let m = &BigInt::sqrt(p)? + &one;
    let an = BigInt::modpow(a, &m, p)?;

    let mut table: HashMap<BigInt, BigInt> = HashMap::new();
    let mut cur = an.clone();
    let mut i = one.clone();
    while i <= m {
        // Keep the first index only, so the answer below stays minimal.
        table.entry(cur.clone()).or_insert_with(|| i.clone());
        cur = BigInt::mod_floor(&(&cur * &an), p)?;
        i = &i + &one;
    }

    let mut cur = BigInt::mod_floor(b, p)?;
    let mut i = BigInt::zero();
    while i <= m {
        if let Some(j) = table.get(&cur) {
            let candidate = &(j * &m) - &i;
            if candidate < *p {
                return Ok(candidate);
            }
        }
        cur = BigInt::mod_floor(&(&cur * a), p)?;
        i = &i + &one;
    }

    Err(BigIntCryptoError::SearchExhausted(format!(
        "no discrete logarithm of {b} to base {a} modulo {p}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_a_valid_exponent() {
        let a = BigInt::from(5);
        let b = BigInt::from(3);
        let p = BigInt::from(7);
        let x = giant_step_baby_step(&a, &b, &p).unwrap();
        assert_eq!(BigInt::modpow(&a, &x, &p).unwrap(), b);
    }

    #[test]
    fn test_known_exponent() {
        let x = giant_step_baby_step(&BigInt::from(2), &BigInt::from(1), &BigInt::from(5)).unwrap();
        assert_eq!(x, BigInt::from(4));
    }

    #[test]
    fn test_no_solution() {
        // Powers of 2 modulo 7 cycle through {1, 2, 4}, never 3.
        assert!(matches!(
            giant_step_baby_step(&BigInt::from(2), &BigInt::from(3), &BigInt::from(7)),
            Err(BigIntCryptoError::SearchExhausted(_))
        ));
    }

    #[test]
    fn test_rejects_tiny_modulus() {
        assert!(matches!(
            giant_step_baby_step(&BigInt::from(2), &BigInt::from(1), &BigInt::one()),
            Err(BigIntCryptoError::PreconditionViolated(_))
        ));
    }
}
