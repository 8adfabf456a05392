#[derive(thiserror::Error, Debug)]
pub enum BigIntCryptoError {
    /// Malformed numeral string or a symbol outside the radix alphabet.
    #[error("InvalidInput: {0}")]
    InvalidInput(String),
    #[error("Division or modulus by zero")]
    DivisionByZero,
    /// No modular inverse exists (gcd(a, modulus) != 1).
    #[error("NonCoprimeModulus: {0}")]
    NonCoprimeModulus(String),
    /// A congruence contradicts itself at insertion time.
    #[error("InconsistentSystem: {0}")]
    InconsistentSystem(String),
    /// The system of congruences has no solution after full reduction.
    #[error("System of congruences is unsatisfiable")]
    Unsatisfiable,
    /// A bounded search ran out of attempts without producing a result.
    #[error("SearchExhausted: {0}")]
    SearchExhausted(String),
    #[error("PreconditionViolated: {0}")]
    PreconditionViolated(String),
}
