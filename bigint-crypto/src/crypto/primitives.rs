//! Extended Euclid, modular inverses and quadratic-residue symbols.

use crate::bigint::BigInt;
use crate::errors::BigIntCryptoError;

/// Recursive extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y == g == gcd(a, b)` for
/// non-negative `a` and `b`. Recursion depth is `O(log min(a, b))`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }
    let (quotient, remainder) = b.div_rem(a).expect("a is nonzero");
    let (g, x, y) = extended_gcd(&remainder, a);
    (g, &y - &(&quotient * &x), x)
}

/// Modular multiplicative inverse of `number` modulo `modulus`,
/// normalized into `[0, modulus)`.
///
/// # Errors
///
/// `PreconditionViolated` when either operand is negative;
/// `NonCoprimeModulus` when `gcd(number, modulus) != 1`.
pub fn mod_inverse(number: &BigInt, modulus: &BigInt) -> Result<BigInt, BigIntCryptoError> {
    if number.is_negative() || modulus.is_negative() {
        return Err(BigIntCryptoError::PreconditionViolated(
            "modular inverse requires non-negative operands".to_string(),
        ));
    }
    let (g, x, _) = extended_gcd(number, modulus);
    if g != BigInt::one() {
        return Err(BigIntCryptoError::NonCoprimeModulus(format!(
            "no inverse of {number} modulo {modulus} (gcd = {g})"
        )));
    }
    BigInt::mod_floor(&x, modulus)
}

/// Legendre symbol `(a | p)` for prime `p`: 0 when `p | a`, otherwise
/// `+1` for quadratic residues and `-1` for non-residues, decided by
/// Euler's criterion `a^((p-1)/2) mod p`.
pub fn legendre_symbol(a: &BigInt, p: &BigInt) -> Result<i32, BigIntCryptoError> {
    if *p <= BigInt::zero() {
        return Err(BigIntCryptoError::PreconditionViolated(
            "Legendre symbol requires a positive prime modulus".to_string(),
        ));
    }
    if BigInt::mod_floor(a, p)?.is_zero() {
        return Ok(0);
    }
    let exponent = &(p - &BigInt::one()) / &BigInt::from(2);
    let q = BigInt::modpow(a, &exponent, p)?;
    Ok(if q == BigInt::one() { 1 } else { -1 })
}

/// Jacobi symbol `(a | p)` for odd positive `p`.
pub fn jacobi_symbol(a: &BigInt, p: &BigInt) -> Result<i32, BigIntCryptoError> {
    if *p <= BigInt::zero() || p.is_even() {
        return Err(BigIntCryptoError::PreconditionViolated(
            "Jacobi symbol requires an odd positive modulus".to_string(),
        ));
    }
    let one = BigInt::one();
    if *p == one {
        return Ok(1);
    }
    if BigInt::gcd(a, p) != one {
        return Ok(0);
    }

    let two = BigInt::from(2);
    let three = BigInt::from(3);
    let four = BigInt::from(4);
    let five = BigInt::from(5);
    let eight = BigInt::from(8);

    let mut a = a.clone();
    let mut p = p.clone();
    let mut result = 1;

    if a.is_negative() {
        a = a.abs();
        if &p % &four == three {
            result = -result;
        }
    }

    loop {
        // Strip factors of two; an odd count flips the sign for
        // p = 3 or 5 (mod 8).
        let mut stripped = 0u32;
        while a.is_even() {
            stripped += 1;
            a = &a / &two;
        }
        if stripped % 2 == 1 {
            let p_mod_8 = &p % &eight;
            if p_mod_8 == three || p_mod_8 == five {
                result = -result;
            }
        }

        // Quadratic reciprocity.
        if &a % &four == three && &p % &four == three {
            result = -result;
        }

        let c = a.clone();
        a = &p % &c;
        p = c;
        if a.is_zero() {
            break;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        for &(a, b) in &[(240, 46), (0, 7), (17, 0), (1, 1), (270, 192)] {
            let (g, x, y) = extended_gcd(&big(a), &big(b));
            assert_eq!(g, BigInt::gcd(&big(a), &big(b)));
            assert_eq!(&(&big(a) * &x) + &(&big(b) * &y), g);
        }
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(&big(3), &big(10)).unwrap(), big(7));
        assert_eq!(mod_inverse(&big(7), &big(10)).unwrap(), big(3));
        assert!(matches!(
            mod_inverse(&big(2), &big(10)),
            Err(BigIntCryptoError::NonCoprimeModulus(_))
        ));
        assert!(matches!(
            mod_inverse(&big(-3), &big(10)),
            Err(BigIntCryptoError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn test_legendre_symbol() {
        // Quadratic residues mod 7 are {1, 2, 4}.
        assert_eq!(legendre_symbol(&big(2), &big(7)).unwrap(), 1);
        assert_eq!(legendre_symbol(&big(3), &big(7)).unwrap(), -1);
        assert_eq!(legendre_symbol(&big(14), &big(7)).unwrap(), 0);
        assert!(legendre_symbol(&big(2), &big(0)).is_err());
    }

    #[test]
    fn test_jacobi_symbol() {
        assert_eq!(jacobi_symbol(&big(1001), &big(9907)).unwrap(), -1);
        assert_eq!(jacobi_symbol(&big(19), &big(45)).unwrap(), 1);
        assert_eq!(jacobi_symbol(&big(8), &big(21)).unwrap(), -1);
        assert_eq!(jacobi_symbol(&big(5), &big(21)).unwrap(), 1);
        assert_eq!(jacobi_symbol(&big(21), &big(1)).unwrap(), 1);
        assert_eq!(jacobi_symbol(&big(6), &big(21)).unwrap(), 0);
        assert_eq!(jacobi_symbol(&big(-1), &big(3)).unwrap(), -1);
    }

    #[test]
    fn test_jacobi_symbol_preconditions() {
        assert!(matches!(
            jacobi_symbol(&big(3), &big(8)),
            Err(BigIntCryptoError::PreconditionViolated(_))
        ));
        assert!(matches!(
            jacobi_symbol(&big(3), &big(-7)),
            Err(BigIntCryptoError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn test_jacobi_matches_legendre_for_primes() {
        for p in [3i64, 5, 7, 11, 13, 97] {
            for a in 1..p {
                assert_eq!(
                    jacobi_symbol(&big(a), &big(p)).unwrap(),
                    legendre_symbol(&big(a), &big(p)).unwrap(),
                    "a={a}, p={p}"
                );
            }
        }
    }
}
