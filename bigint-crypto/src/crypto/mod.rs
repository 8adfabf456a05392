//! # Crypto Module
//!
//! Number-theoretic algorithms over [`BigInt`](crate::BigInt): modular
//! inverses and residue symbols, bounded random sampling, prime
//! generation, the Miller-Rabin / Lucas-Selfridge / BPSW primality suite,
//! Pollard-rho factorization, baby-step giant-step discrete logarithms
//! and Cipolla's modular square root.
//!
//! Every randomized routine takes an explicit `&mut impl Rng`, so callers
//! control seeding and there is no process-wide generator state.

pub mod cipolla;
pub mod dlog;
pub mod factorization;
pub mod primality;
pub mod primitives;
pub mod random;

pub use cipolla::cipolla;
pub use dlog::giant_step_baby_step;
pub use factorization::{DEFAULT_RHO_RESTARTS, factorize, mobius, phi, pollard_rho};
pub use primality::{bpsw, lucas_selfridge, miller_rabin};
pub use primitives::{extended_gcd, jacobi_symbol, legendre_symbol, mod_inverse};
pub use random::{
    closest_prime, first_primes, first_primes_with_bitness, random_below, random_in_range,
    random_primes, random_primes_with_bitness, random_with_bitness, random_with_len,
};
