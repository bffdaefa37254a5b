use ecfft_params::error::{ArithmeticError, ParamError};
use ecfft_params::field::{FieldElement, Polynomial, PrimeField};
use ecfft_params::primitives::U256;

fn field() -> PrimeField {
    PrimeField::new(U256::from(10007u64)).unwrap()
}

fn from_roots<'f>(field: &'f PrimeField, roots: &[u64]) -> Polynomial<'f> {
    roots.iter().fold(Polynomial::constant(field.one()), |acc, &r| {
        let linear = Polynomial::new(field, vec![-field.from_u64(r), field.one()]);
        &acc * &linear
    })
}

fn values(xs: &[FieldElement<'_>]) -> Vec<U256> {
    xs.iter().map(FieldElement::to_canonical).collect()
}

#[test]
fn test_trailing_zeros_are_trimmed() {
    let field = field();
    let p = Polynomial::new(&field, vec![field.one(), field.zero(), field.zero()]);

    assert_eq!(p.degree(), Some(0));
    assert!(Polynomial::new(&field, vec![field.zero()]).is_zero());
    assert_eq!(Polynomial::zero(&field).degree(), None);
}

#[test]
fn test_evaluate_horner() {
    let field = field();
    // 2 + 3x + x^2
    let p = Polynomial::new(&field, vec![field.from_u64(2), field.from_u64(3), field.one()]);

    assert_eq!(p.evaluate(&field.from_u64(10)), field.from_u64(132));
    assert_eq!(p.evaluate(&-field.one()), field.zero());
    assert_eq!(p.to_string(), "1*x^2 + 3*x + 2");
}

#[test]
fn test_division_identity() {
    let field = field();
    let a = from_roots(&field, &[1, 2, 3, 4, 5]);
    let b = Polynomial::new(&field, vec![field.from_u64(7), field.from_u64(11), field.from_u64(13)]);

    let (q, r) = a.div_rem(&b).unwrap();
    assert!(r.degree().is_none_or(|d| d < 2));
    assert_eq!(&(&q * &b) + &r, a);

    assert!(matches!(
        a.div_rem(&Polynomial::zero(&field)),
        Err(ParamError::Arithmetic(ArithmeticError::DivisionByZero))
    ));
}

#[test]
fn test_gcd_is_monic_common_factor() {
    let field = field();
    let a = from_roots(&field, &[3, 8, 20]).scale(field.from_u64(5));
    let b = from_roots(&field, &[8, 20, 100]);

    assert_eq!(a.gcd(&b).unwrap(), from_roots(&field, &[8, 20]));
}

#[test]
fn test_roots_are_sorted_and_distinct() {
    let field = field();
    let p = from_roots(&field, &[9000, 5, 5, 1, 777]);

    assert_eq!(
        values(&p.roots().unwrap()),
        vec![
            U256::from(1u64),
            U256::from(5u64),
            U256::from(777u64),
            U256::from(9000u64)
        ]
    );
}

#[test]
fn test_irreducible_factors_have_no_roots() {
    let field = field();
    // 10007 ≡ 3 (mod 4), so x^2 + 1 is irreducible.
    let x2_plus_1 = Polynomial::new(&field, vec![field.one(), field.zero(), field.one()]);

    assert!(x2_plus_1.roots().unwrap().is_empty());

    let mixed = &x2_plus_1 * &from_roots(&field, &[42]);
    assert_eq!(values(&mixed.roots().unwrap()), vec![U256::from(42u64)]);
}

#[test]
fn test_degenerate_root_inputs() {
    let field = field();

    assert!(Polynomial::constant(field.from_u64(3)).roots().unwrap().is_empty());
    assert!(matches!(
        Polynomial::zero(&field).roots(),
        Err(ParamError::InvalidParameter { .. })
    ));
}

#[test]
fn test_pow_mod_matches_repeated_multiplication() {
    let field = field();
    let modulus = from_roots(&field, &[2, 3, 4]);
    let base = Polynomial::new(&field, vec![field.one(), field.one()]);

    let mut expected = Polynomial::constant(field.one());
    for _ in 0..13 {
        expected = (&expected * &base).rem(&modulus).unwrap();
    }

    assert_eq!(base.pow_mod(&U256::from(13u64), &modulus).unwrap(), expected);
}
