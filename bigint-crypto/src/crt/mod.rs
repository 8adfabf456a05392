//! # CRT Module
//!
//! Incremental solver for systems of linear congruences
//! `a * x = b (mod p)`, including systems whose moduli are not pairwise
//! coprime. Each equation is normalized to `x = b' (mod p')` on insert;
//! [`CrtSolver::solve`] then merges the equations pairwise and verifies
//! the result against everything that was added.

use serde::{Deserialize, Serialize};

use crate::bigint::BigInt;
use crate::crypto::primitives::{extended_gcd, mod_inverse};
use crate::errors::BigIntCryptoError;

/// Congruence system accumulator with a cached answer.
///
/// The cache is dropped whenever an equation is added, so `solve` can
/// be called freely between insertions.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CrtSolver {
    /// Equations reduced to the form `x = b (mod p)`.
    equations: Vec<(BigInt, BigInt)>,
    answer: Option<BigInt>,
}

impl CrtSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `a * x = b (mod p)`, reduced to `x = b' (mod p')`.
    ///
    /// # Errors
    ///
    /// `InconsistentSystem` when `gcd(a, p)` does not divide `b`, since
    /// the single equation already has no solution then.
    pub fn add_equation(
        &mut self,
        a: &BigInt,
        b: &BigInt,
        p: &BigInt,
    ) -> Result<(), BigIntCryptoError> {
        let (g, _, _) = extended_gcd(a, p);
        if !BigInt::mod_floor(b, &g)?.is_zero() {
            return Err(BigIntCryptoError::InconsistentSystem(format!(
                "{a}x = {b} (mod {p}) has no solution: gcd {g} does not divide {b}"
            )));
        }
        let a = a / &g;
        let b = b / &g;
        let p = p / &g;

        let inverse = mod_inverse(&a, &p)?;
        let reduced = BigInt::mod_floor(&(&b * &inverse), &p)?;
        self.equations.push((reduced, p));
        self.answer = None;
        Ok(())
    }

    /// Drops all equations and the cached answer.
    pub fn reset(&mut self) {
        self.equations.clear();
        self.answer = None;
    }

    /// Smallest non-negative solution of the accumulated system, modulo
    /// the lcm of all reduced moduli.
    ///
    /// Merging runs left to right: equation `i` turns every later
    /// equation `x = b_j (mod p_j)` into a congruence on the quotient
    /// `(x - b_i) / p_i`, splitting off `gcd(p_i, p_j)` first so shared
    /// modulus factors stay solvable.
    ///
    /// # Errors
    ///
    /// `PreconditionViolated` for an empty system; `Unsatisfiable` when
    /// shared factors disagree or the merged result fails the final
    /// cross-check against the stored equations.
    pub fn solve(&mut self) -> Result<BigInt, BigIntCryptoError> {
        if let Some(answer) = &self.answer {
            return Ok(answer.clone());
        }
        if self.equations.is_empty() {
            return Err(BigIntCryptoError::PreconditionViolated(
                "no equations to solve".to_string(),
            ));
        }

        let mut equations = self.equations.clone();
        let n = equations.len();

        let mut total_modulus = BigInt::one();
        for (_, p) in &equations {
            let g = BigInt::gcd(&total_modulus, p);
            total_modulus = &(&total_modulus * p) / &g;
        }

        let mut transitions = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let (b, p) = equations[i].clone();
            transitions.push((b.clone(), p.clone()));
            for j in i + 1..n {
                let (bj, pj) = equations[j].clone();
                let mut bb = BigInt::mod_floor(&(&bj - &b), &pj)?;
                let g = BigInt::gcd(&p, &pj);
                if !BigInt::mod_floor(&bb, &g)?.is_zero() {
                    return Err(BigIntCryptoError::Unsatisfiable);
                }
                bb = &bb / &g;
                let pp = &pj / &g;
                let inverse = mod_inverse(&(&p / &g), &pp)?;
                bb = BigInt::mod_floor(&(&bb * &inverse), &pp)?;
                equations[j] = (bb, pp);
            }
        }

        let mut result = equations[n - 1].0.clone();
        for (b, p) in transitions.iter().rev() {
            result = BigInt::mod_floor(&(&(&result * p) + b), &total_modulus)?;
        }

        for (b, p) in &self.equations {
            if &BigInt::mod_floor(&result, p)? != b {
                return Err(BigIntCryptoError::Unsatisfiable);
            }
        }

        self.answer = Some(result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn plain(solver: &mut CrtSolver, b: i64, p: i64) {
        solver.add_equation(&big(1), &big(b), &big(p)).unwrap();
    }

    #[test]
    fn test_classic_coprime_system() {
        let mut solver = CrtSolver::new();
        plain(&mut solver, 2, 3);
        plain(&mut solver, 3, 5);
        plain(&mut solver, 2, 7);
        assert_eq!(solver.solve().unwrap(), big(23));
    }

    #[test]
    fn test_shared_modulus_factors() {
        let mut solver = CrtSolver::new();
        // 2x = 4 (mod 6) reduces to x = 2 (mod 3).
        solver.add_equation(&big(2), &big(4), &big(6)).unwrap();
        plain(&mut solver, 1, 2);
        assert_eq!(solver.solve().unwrap(), big(5));
    }

    #[test]
    fn test_unsatisfiable_system() {
        let mut solver = CrtSolver::new();
        plain(&mut solver, 1, 2);
        plain(&mut solver, 0, 4);
        assert!(matches!(
            solver.solve(),
            Err(BigIntCryptoError::Unsatisfiable)
        ));
    }

    #[test]
    fn test_inconsistent_equation_rejected_on_insert() {
        let mut solver = CrtSolver::new();
        assert!(matches!(
            solver.add_equation(&big(2), &big(1), &big(4)),
            Err(BigIntCryptoError::InconsistentSystem(_))
        ));
    }

    #[test]
    fn test_empty_system() {
        let mut solver = CrtSolver::new();
        assert!(matches!(
            solver.solve(),
            Err(BigIntCryptoError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn test_answer_cache_and_invalidation() {
        let mut solver = CrtSolver::new();
        plain(&mut solver, 2, 3);
        plain(&mut solver, 3, 5);
        assert_eq!(solver.solve().unwrap(), big(8));
        assert_eq!(solver.solve().unwrap(), big(8));

        plain(&mut solver, 2, 7);
        assert_eq!(solver.solve().unwrap(), big(23));

        solver.reset();
        plain(&mut solver, 1, 4);
        assert_eq!(solver.solve().unwrap(), big(1));
    }

    #[test]
    fn test_single_equation() {
        let mut solver = CrtSolver::new();
        solver.add_equation(&big(3), &big(6), &big(9)).unwrap();
        // 3x = 6 (mod 9) reduces to x = 2 (mod 3).
        assert_eq!(solver.solve().unwrap(), big(2));
    }
}
