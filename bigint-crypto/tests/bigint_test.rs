use std::str::FromStr;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use bigint_crypto::BigInt;
use bigint_crypto::errors::BigIntCryptoError;

#[quickcheck]
fn prop_decimal_round_trip(value: i64) -> bool {
    let number = BigInt::from(value);
    BigInt::from_str(&number.to_string()).unwrap() == number
}

#[quickcheck]
fn prop_addition_commutes(a: i64, b: i64) -> bool {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    &x + &y == &y + &x
}

#[quickcheck]
fn prop_multiplication_commutes(a: i64, b: i64) -> bool {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    &x * &y == &y * &x
}

#[quickcheck]
fn prop_addition_associates(a: i32, b: i32, c: i32) -> bool {
    let (x, y, z) = (BigInt::from(a), BigInt::from(b), BigInt::from(c));
    &(&x + &y) + &z == &x + &(&y + &z)
}

#[quickcheck]
fn prop_self_difference_is_zero(a: i64) -> bool {
    let x = BigInt::from(a);
    (&x - &x).is_zero()
}

#[quickcheck]
fn prop_multiplication_by_zero(a: i64) -> bool {
    (&BigInt::from(a) * &BigInt::zero()).is_zero()
}

#[quickcheck]
fn prop_division_matches_machine_semantics(a: i64, b: i64) -> TestResult {
    if b == 0 || (a == i64::MIN && b == -1) {
        return TestResult::discard();
    }
    let (quotient, remainder) = BigInt::from(a).div_rem(&BigInt::from(b)).unwrap();
    TestResult::from_bool(quotient == BigInt::from(a / b) && remainder == BigInt::from(a % b))
}

#[quickcheck]
fn prop_gcd_times_lcm_is_the_product(a: u32, b: u32) -> TestResult {
    if a == 0 || b == 0 {
        return TestResult::discard();
    }
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    let g = BigInt::gcd(&x, &y);
    let l = BigInt::lcm(&x, &y).unwrap();
    TestResult::from_bool(&g * &l == &x * &y)
}

#[quickcheck]
fn prop_radix_round_trips(value: u64) -> bool {
    let number = BigInt::from(value);
    BigInt::from_base2(&number.to_base2()).unwrap() == number
        && BigInt::from_hex(&number.to_hex()).unwrap() == number
        && BigInt::from_base64(&number.to_base64()).unwrap() == number
        && BigInt::from_bytes(&number.to_bytes()) == number
}

#[quickcheck]
fn prop_negative_radix_round_trips(value: i64) -> TestResult {
    if value >= 0 {
        return TestResult::discard();
    }
    let number = BigInt::from(value);
    TestResult::from_bool(
        BigInt::from_base2(&number.to_base2()).unwrap() == number
            && BigInt::from_hex(&number.to_hex()).unwrap() == number
            && BigInt::from_base64(&number.to_base64()).unwrap() == number,
    )
}

#[quickcheck]
fn prop_to_i64_round_trip(value: i64) -> bool {
    BigInt::from(value).to_i64() == Some(value)
}

#[test]
fn doubling_a_thirty_digit_number() -> Result<(), BigIntCryptoError> {
    let a = BigInt::from_str("123456789012345678901234567890")?;
    assert_eq!(
        (&a * &BigInt::from(2)).to_string(),
        "246913578024691357802469135780"
    );
    Ok(())
}

#[test]
fn large_product_division_identities() -> Result<(), BigIntCryptoError> {
    // Operands well past a hundred digits, so the split multiplication
    // path carries the whole test.
    let a = BigInt::from_str(&"123456789".repeat(15))?;
    let b = BigInt::from_str(&"987654321".repeat(13))?;
    let product = &a * &b;
    assert_eq!(&product / &b, a);
    assert!((&product % &b).is_zero());
    assert_eq!(product, &(&a * &(&b - &BigInt::one())) + &a);
    Ok(())
}

#[test]
fn canonical_zero_has_a_single_form() -> Result<(), BigIntCryptoError> {
    let negative_zero = BigInt::from_str("-0")?;
    assert!(negative_zero.is_zero());
    assert!(negative_zero.is_positive());
    assert_eq!(negative_zero.to_string(), "0");
    assert_eq!(negative_zero, BigInt::from_str("000")?);
    Ok(())
}

#[test]
fn division_by_zero_is_a_typed_error() {
    assert!(matches!(
        BigInt::from(5).div_rem(&BigInt::zero()),
        Err(BigIntCryptoError::DivisionByZero)
    ));
    assert!(matches!(
        BigInt::mod_floor(&BigInt::from(5), &BigInt::zero()),
        Err(BigIntCryptoError::DivisionByZero)
    ));
}

#[test]
fn serde_round_trip() -> Result<(), BigIntCryptoError> {
    let number = BigInt::from_str("-987654321098765432109876543210")?;
    let encoded = serde_json::to_string(&number).expect("serialize");
    let decoded: BigInt = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, number);
    Ok(())
}
