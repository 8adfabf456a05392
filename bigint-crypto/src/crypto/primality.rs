//! Probabilistic primality: Miller-Rabin, the strong Lucas-Selfridge
//! test and their BPSW combination.

use lazy_static::lazy_static;
use rand::Rng;

use crate::bigint::BigInt;
use crate::errors::BigIntCryptoError;

use super::primitives::jacobi_symbol;
use super::random::random_in_range;

/// Miller-Rabin never runs fewer witness rounds than this.
const MIN_WITNESS_ROUNDS: u32 = 10;

lazy_static! {
    /// First ten primes, used by [`bpsw`] as a trial-division screen.
    static ref SMALL_PRIMES: Vec<BigInt> = [2i64, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        .iter()
        .map(|&p| BigInt::from(p))
        .collect();
}

/// Miller-Rabin probable-prime test with random witnesses.
///
/// Writes `number - 1 = d * 2^s` with `d` odd and runs
/// `max(MIN_WITNESS_ROUNDS, s)` rounds; each round draws a witness in
/// `[2, number - 2]` and squares `witness^d` up the chain.
pub fn miller_rabin(rng: &mut impl Rng, number: &BigInt) -> bool {
    let one = BigInt::one();
    let two = BigInt::from(2);
    let three = BigInt::from(3);
    if *number == two || *number == three {
        return true;
    }
    if *number < two || number.is_even() {
        return false;
    }

    let minus_one = number - &one;
    let mut d = minus_one.clone();
    let mut degree = 0u32;
    while d.is_even() {
        degree += 1;
        d = &d / &two;
    }

    for _ in 0..degree.max(MIN_WITNESS_ROUNDS) {
        let witness =
            random_in_range(rng, &two, &(number - &two)).expect("witness range is ordered");
        let mut x = BigInt::modpow(&witness, &d, number).expect("modulus is positive");
        if x == one || x == minus_one {
            continue;
        }
        for _ in 1..degree {
            x = BigInt::mod_floor(&(&x * &x), number).expect("modulus is positive");
            if x == one {
                return false;
            }
            if x == minus_one {
                break;
            }
        }
        if x != minus_one {
            return false;
        }
    }
    true
}

/// Strong Lucas probable-prime test with Selfridge parameters.
///
/// Scans `D = 5, -7, 9, -11, ...` for the first value with Jacobi
/// symbol `(D | number) == -1`, takes `P = 1`, `Q = (1 - D) / 4`, then
/// checks the strong Lucas condition on `U` and `V` over
/// `number + 1 = d * 2^s`. Perfect squares are rejected up front since
/// no `D` would terminate the scan for them.
pub fn lucas_selfridge(number: &BigInt) -> Result<bool, BigIntCryptoError> {
    let one = BigInt::one();
    let two = BigInt::from(2);
    if *number == two {
        return Ok(true);
    }
    if *number < two || number.is_even() {
        return Ok(false);
    }
    let root = BigInt::sqrt(number)?;
    if &(&root * &root) == number {
        return Ok(false);
    }

    let d_sign = {
        let mut d_abs = 5i64;
        let mut negative = false;
        loop {
            let candidate = BigInt::from(if negative { -d_abs } else { d_abs });
            let g = BigInt::gcd(&candidate, number);
            if g > one && &g < number {
                return Ok(false);
            }
            if jacobi_symbol(&candidate, number)? == -1 {
                break candidate;
            }
            d_abs += 2;
            negative = !negative;
        }
    };

    // P = 1, Q = (1 - D) / 4.
    let q = &(&one - &d_sign) / &BigInt::from(4);

    let mut d = number + &one;
    let mut s = 0u32;
    while d.is_even() {
        s += 1;
        d = &d / &two;
    }

    let modn = |value: &BigInt| BigInt::mod_floor(value, number).expect("modulus is positive");

    // U_1 = 1 and V_1 = P; the doubled track starts there as well.
    let mut u = one.clone();
    let mut v = one.clone();
    let mut u2m = one.clone();
    let mut v2m = one.clone();
    let mut qm = modn(&q);
    let mut qm2 = &qm * &two;
    let mut qkd = qm.clone();

    // Walk the bits of the odd part from the second-lowest up, doubling
    // the (u2m, v2m) track each step and folding it in on set bits.
    let bits = d.to_base2();
    for bit in bits.bytes().rev().skip(1) {
        u2m = modn(&(&u2m * &v2m));
        let v2m_sq = &v2m * &v2m;
        v2m = modn(&(&v2m_sq - &qm2));
        qm = modn(&(&qm * &qm));
        qm2 = &qm * &two;
        if bit == b'1' {
            let t1 = modn(&(&u2m * &v));
            let t2 = modn(&(&v2m * &u));
            let t3 = modn(&(&v2m * &v));
            let t4 = modn(&(&modn(&(&u2m * &u)) * &d_sign));
            // Halving stays exact: the modulus is odd, so adding it
            // fixes the parity before the division by two.
            let mut u_next = &t1 + &t2;
            if u_next.is_odd() {
                u_next = &u_next + number;
            }
            u = modn(&(&u_next / &two));
            let mut v_next = &t3 + &t4;
            if v_next.is_odd() {
                v_next = &v_next + number;
            }
            v = modn(&(&v_next / &two));
            qkd = modn(&(&qkd * &qm));
        }
    }

    if u.is_zero() || v.is_zero() {
        return Ok(true);
    }

    // Trailing V-squaring rounds for the strong condition.
    let mut qkd2 = &qkd * &two;
    for r in 1..s {
        let v_sq = &v * &v;
        v = modn(&(&v_sq - &qkd2));
        if v.is_zero() {
            return Ok(true);
        }
        if r < s - 1 {
            qkd = modn(&(&qkd * &qkd));
            qkd2 = &qkd * &two;
        }
    }
    Ok(false)
}

/// Baillie-PSW: trial division by the first ten primes, then
/// [`miller_rabin`] and [`lucas_selfridge`] both have to pass.
pub fn bpsw(rng: &mut impl Rng, number: &BigInt) -> Result<bool, BigIntCryptoError> {
    let two = BigInt::from(2);
    if *number == two {
        return Ok(true);
    }
    if *number < two || number.is_even() {
        return Ok(false);
    }
    for prime in SMALL_PRIMES.iter() {
        if number == prime {
            return Ok(true);
        }
        if BigInt::mod_floor(number, prime)?.is_zero() {
            return Ok(false);
        }
    }
    if !miller_rabin(rng, number) {
        return Ok(false);
    }
    lucas_selfridge(number)
}
