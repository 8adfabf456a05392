//! From-scratch arbitrary-precision signed integers plus the
//! number-theoretic algorithms needed for cryptographic primitives:
//! primality testing (Miller-Rabin, Lucas-Selfridge, BPSW), Pollard-rho
//! factorization, discrete logarithm, modular square roots and a Chinese
//! Remainder Theorem solver.

pub mod bigint;
pub mod crt;
pub mod crypto;
pub mod errors;

pub use bigint::BigInt;
pub use crt::CrtSolver;
pub use errors::BigIntCryptoError;
