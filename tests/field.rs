use ecfft_params::error::{ArithmeticError, ParamError};
use ecfft_params::field::{FieldElement, PrimeField};
use ecfft_params::primitives::U256;
use ecfft_params::rng::Csprng;

use proptest::prelude::*;
use std::sync::OnceLock;

fn bn254() -> &'static PrimeField {
    static FIELD: OnceLock<PrimeField> = OnceLock::new();
    FIELD.get_or_init(|| {
        PrimeField::new(U256::from([
            0x3c208c16d87cfd47,
            0x97816a916871ca8d,
            0xb85045b68181585d,
            0x30644e72e131a029,
        ]))
        .unwrap()
    })
}

fn small(p: u64) -> PrimeField {
    PrimeField::new(U256::from(p)).unwrap()
}

fn element(limbs: [u64; 4]) -> FieldElement<'static> {
    bn254().reduce(&U256::from(limbs))
}

fn arb_element() -> impl Strategy<Value = FieldElement<'static>> {
    any::<[u64; 4]>().prop_map(element)
}

proptest! {
    #[test]
    fn test_results_are_canonical(a in arb_element(), b in arb_element()) {
        let p = *bn254().modulus();

        prop_assert!((a + b).to_canonical() < p);
        prop_assert!((a - b).to_canonical() < p);
        prop_assert!((a * b).to_canonical() < p);
        prop_assert!((-a).to_canonical() < p);
    }

    #[test]
    fn test_ring_laws(a in arb_element(), b in arb_element(), c in arb_element()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!((a - b) + b, a);
        prop_assert_eq!(a + (-a), bn254().zero());
    }

    #[test]
    fn test_inverse_is_two_sided(a in arb_element()) {
        prop_assume!(!a.is_zero());

        let inv = a.invert().unwrap();
        prop_assert!((a * inv).is_one());
        prop_assert_eq!(inv.invert().unwrap(), a);
    }

    #[test]
    fn test_sqrt_of_square_is_smaller_root(a in arb_element()) {
        let sq = a.square();
        let root = sq.sqrt().unwrap();

        prop_assert_eq!(root.square(), sq);
        prop_assert!(root == a || root == -a);
        prop_assert!(root.to_canonical() <= (-root).to_canonical());
    }

    #[test]
    fn test_batch_inversion_matches_single(values in prop::collection::vec(arb_element(), 1..16)) {
        prop_assume!(values.iter().all(|v| !v.is_zero()));

        let batch = bn254().batch_invert(&values).unwrap();
        for (v, inv) in values.iter().zip(&batch) {
            prop_assert_eq!(v.invert().unwrap(), *inv);
        }
    }

    #[test]
    fn test_canonical_roundtrip(v in any::<u64>()) {
        let field = small(10007);
        let x = field.from_u64(v);

        prop_assert_eq!(x.to_canonical(), U256::from(v % 10007));
        prop_assert_eq!(field.from_canonical(&x.to_canonical()), Some(x));
    }
}

#[test]
fn test_bn254_field_shape() {
    let field = bn254();

    assert_eq!(field.bits(), 254);
    assert_eq!(field.two_adicity(), 1);
    assert!(field.one().is_one());
    assert_eq!(field.from_canonical(field.modulus()), None);
}

#[test]
fn test_modulus_validation() {
    for bad in [U256::ZERO, U256::from(2u64), U256::from(3u64), U256::from(10008u64)] {
        assert!(matches!(
            PrimeField::new(bad),
            Err(ParamError::InvalidModulus { .. })
        ));
    }

    assert!(matches!(
        PrimeField::new(U256::MAX),
        Err(ParamError::InvalidModulus { .. })
    ));
}

#[test]
fn test_zero_has_no_inverse() {
    let field = small(10007);
    let zero = field.zero();

    assert!(matches!(
        zero.invert(),
        Err(ParamError::Arithmetic(ArithmeticError::DivisionByZero))
    ));
    assert!(field.one().div(&zero).is_err());
    assert!(field.batch_invert(&[field.one(), zero]).is_err());
}

#[test]
fn test_exhaustive_square_roots_small_field() {
    // p − 1 = 8 · 1251 exercises the Tonelli–Shanks loop.
    let field = small(10009);
    assert_eq!(field.two_adicity(), 3);

    let mut squares = 0;
    for v in 0..10009u64 {
        let x = field.from_u64(v);
        match x.sqrt() {
            Some(r) => {
                squares += 1;
                assert_eq!(r.square(), x);
                assert!(r.to_canonical() <= (-r).to_canonical());
                assert!(x.is_square());
            }
            None => assert!(!x.is_square()),
        }
    }

    assert_eq!(squares, (10009 + 1) / 2);
}

#[test]
fn test_pow_small_cases() {
    let field = small(10007);
    let three = field.from_u64(3);

    assert!(three.pow(&U256::ZERO).is_one());
    assert_eq!(three.pow(&U256::from(5u64)), field.from_u64(243));
    // Fermat
    assert!(three.pow(&U256::from(10006u64)).is_one());
}

#[test]
fn test_random_elements_are_in_range() {
    let field = small(10007);
    let mut rng = Csprng::from_seed([3u8; 32]);

    for _ in 0..1000 {
        assert!(field.random(&mut rng).to_canonical() < U256::from(10007u64));
    }
}

#[test]
fn test_display_is_canonical_decimal() {
    let field = small(10007);

    assert_eq!(field.from_u64(10008).to_string(), "1");
    assert_eq!((-field.one()).to_string(), "10006");
}
