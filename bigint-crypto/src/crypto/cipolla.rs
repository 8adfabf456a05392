//! Cipolla's square root modulo an odd prime.

use rand::Rng;

use crate::bigint::BigInt;
use crate::errors::BigIntCryptoError;

use super::primality::miller_rabin;
use super::primitives::legendre_symbol;
use super::random::random_in_range;

/// Fresh `(a, w)` pairs drawn before the search is declared exhausted.
const MAX_ATTEMPTS: u32 = 64;

/// Element `real + imag * w` of the quadratic extension built over a
/// non-residue `w^2`.
#[derive(Clone)]
struct Fp2 {
    real: BigInt,
    imag: BigInt,
}

fn fp2_mul(lhs: &Fp2, rhs: &Fp2, p: &BigInt, w2: &BigInt) -> Result<Fp2, BigIntCryptoError> {
    let rr = BigInt::mod_floor(&(&lhs.real * &rhs.real), p)?;
    let ii = BigInt::mod_floor(&(&lhs.imag * &rhs.imag), p)?;
    let ii_w = BigInt::mod_floor(&(&ii * w2), p)?;
    let ri = BigInt::mod_floor(&(&lhs.real * &rhs.imag), p)?;
    let ir = BigInt::mod_floor(&(&lhs.imag * &rhs.real), p)?;
    Ok(Fp2 {
        real: BigInt::mod_floor(&(&rr + &ii_w), p)?,
        imag: BigInt::mod_floor(&(&ri + &ir), p)?,
    })
}

fn fp2_pow(
    base: &Fp2,
    exponent: &BigInt,
    p: &BigInt,
    w2: &BigInt,
) -> Result<Fp2, BigIntCryptoError> {
    let mut result = Fp2 {
        real: BigInt::one(),
        imag: BigInt::zero(),
    };
    for bit in exponent.to_base2().bytes() {
        result = fp2_mul(&result, &result, p, w2)?;
        if bit == b'1' {
            result = fp2_mul(&result, base, p, w2)?;
        }
    }
    Ok(result)
}

/// Square root of `n` modulo the odd prime `p`.
///
/// Picks `a` until `a^2 - n` is a non-residue `w^2`, then computes
/// `(a + w)^((p + 1) / 2)` in the extension; a valid root lands back in
/// the base field. The other root is `p - x`.
///
/// # Errors
///
/// `PreconditionViolated` when `p` is not an odd prime above 2 or `n`
/// is not a nonzero quadratic residue; `SearchExhausted` when no
/// suitable `a` turns up within the attempt budget.
pub fn cipolla(rng: &mut impl Rng, n: &BigInt, p: &BigInt) -> Result<BigInt, BigIntCryptoError> {
    let one = BigInt::one();
    let two = BigInt::from(2);
    if *p <= two || !miller_rabin(rng, p) {
        return Err(BigIntCryptoError::PreconditionViolated(
            "modulus must be a prime greater than two".to_string(),
        ));
    }
    let n = BigInt::mod_floor(n, p)?;
    if legendre_symbol(&n, p)? != 1 {
        return Err(BigIntCryptoError::PreconditionViolated(format!(
            "{n} is not a nonzero quadratic residue modulo {p}"
        )));
    }

    let exponent = &(p + &one) / &two;
    for _ in 0..MAX_ATTEMPTS {
        let a = random_in_range(rng, &two, p)?;
        let w2 = BigInt::mod_floor(&(&(&a * &a) - &n), p)?;
        if legendre_symbol(&w2, p)? != -1 {
            continue;
        }

        let root = fp2_pow(
            &Fp2 {
                real: a,
                imag: one.clone(),
            },
            &exponent,
            p,
            &w2,
        )?;
        if !root.imag.is_zero() {
            continue;
        }

        let x = root.real;
        let y = p - &x;
        if BigInt::mod_floor(&(&x * &x), p)? == n && BigInt::mod_floor(&(&y * &y), p)? == n {
            return Ok(x);
        }
    }

    Err(BigIntCryptoError::SearchExhausted(format!(
        "no square root of {n} modulo {p} found within {MAX_ATTEMPTS} attempts"
    )))
}
