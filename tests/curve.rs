use ecfft_params::curve::{Curve, Point, Subgroup};
use ecfft_params::error::{ParamError, SubgroupFault};
use ecfft_params::field::PrimeField;
use ecfft_params::primitives::U256;
use ecfft_params::rng::Csprng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn field(p: u64) -> PrimeField {
    PrimeField::new(U256::from(p)).unwrap()
}

fn curve(field: &PrimeField, a: u64, b: u64) -> Curve<'_> {
    Curve::new(field.from_u64(a), field.from_u64(b)).unwrap()
}

fn affine<'f>(field: &'f PrimeField, x: u64, y: u64) -> Point<'f> {
    Point::Affine {
        x: field.from_u64(x),
        y: field.from_u64(y),
    }
}

#[test]
fn test_singular_curves_are_rejected() {
    let f = field(10007);

    assert!(matches!(
        Curve::new(f.zero(), f.zero()),
        Err(ParamError::SingularCurve { .. })
    ));
    // 4·(−3)^3 + 27·2^2 = 0
    assert!(matches!(
        Curve::new(-f.from_u64(3), f.from_u64(2)),
        Err(ParamError::SingularCurve { .. })
    ));
}

#[test]
fn test_point_construction_checks_the_equation() {
    let f = field(10007);
    let e = curve(&f, 1, 3);

    assert!(e.point(f.from_u64(965), f.from_u64(211)).is_ok());
    assert!(matches!(
        e.point(f.from_u64(965), f.from_u64(212)),
        Err(ParamError::NotOnCurve { .. })
    ));
    assert!(e.contains(&Point::Identity));
}

#[test]
fn test_group_law_closure_and_identities() {
    let f = field(10007);
    let e = curve(&f, 1, 8);
    let mut rng = Csprng::from_seed([1u8; 32]);

    for _ in 0..50 {
        let p = e.random_point(&mut rng);
        let q = e.random_point(&mut rng);

        let sum = e.add(&p, &q).unwrap();
        assert!(e.contains(&sum));
        assert_eq!(sum, e.add(&q, &p).unwrap());

        assert_eq!(e.add(&p, &p).unwrap(), e.double(&p).unwrap());
        assert_eq!(e.add(&p, &e.negate(&p)).unwrap(), Point::Identity);
        assert_eq!(e.add(&p, &Point::Identity).unwrap(), p);

        let r = e.random_point(&mut rng);
        let left = e.add(&e.add(&p, &q).unwrap(), &r).unwrap();
        let right = e.add(&p, &e.add(&q, &r).unwrap()).unwrap();
        assert_eq!(left, right);
    }
}

#[test]
fn test_scalar_multiplication_edge_scalars() {
    // #E = 9912
    let f = field(10007);
    let e = curve(&f, 1, 8);
    let mut rng = Csprng::from_seed([2u8; 32]);
    let n = U256::from(9912u64);

    for _ in 0..10 {
        let p = e.random_point(&mut rng);

        assert_eq!(e.mul(&p, &U256::ZERO).unwrap(), Point::Identity);
        assert_eq!(e.mul(&p, &U256::ONE).unwrap(), p);
        assert_eq!(e.mul(&p, &n).unwrap(), Point::Identity);
        assert_eq!(e.mul(&p, &(n - U256::ONE)).unwrap(), e.negate(&p));
        assert_eq!(e.mul(&Point::Identity, &n).unwrap(), Point::Identity);
    }
}

#[test]
fn test_scalar_multiplication_matches_repeated_addition() {
    let f = field(10009);
    let e = curve(&f, 2, 28);
    let mut rng = Csprng::from_seed([4u8; 32]);
    let p = e.random_point(&mut rng);

    let mut acc = Point::Identity;
    for k in 0..40u64 {
        assert_eq!(e.mul_u64(&p, k).unwrap(), acc);
        acc = e.add(&acc, &p).unwrap();
    }

    assert_eq!(e.double_n(&p, 3).unwrap(), e.mul_u64(&p, 8).unwrap());
}

#[test]
fn test_two_torsion_roots() {
    let f = field(10007);

    assert!(curve(&f, 1, 1).two_torsion().unwrap().is_empty());
    assert_eq!(
        curve(&f, 1, 8).two_torsion().unwrap(),
        vec![f.from_u64(5792)]
    );

    let three: Vec<_> = curve(&f, 1, 2)
        .two_torsion()
        .unwrap()
        .iter()
        .map(|x| x.to_canonical())
        .collect();
    assert_eq!(
        three,
        vec![U256::from(4954u64), U256::from(5054u64), U256::from(10006u64)]
    );
}

#[test]
fn test_lift_x_and_j_invariant() {
    let f = field(10007);
    let e = curve(&f, 1, 3);

    let p = e.lift_x(f.from_u64(965)).unwrap();
    assert!(e.contains(&p));
    assert_eq!(p.x(), Some(f.from_u64(965)));

    let zero_a = Curve::new(f.zero(), f.from_u64(7)).unwrap();
    assert_eq!(zero_a.j_invariant().unwrap(), f.zero());
    let zero_b = Curve::new(f.one(), f.zero()).unwrap();
    assert_eq!(zero_b.j_invariant().unwrap(), f.from_u64(1728));
}

#[test]
fn test_two_primary_exponents_on_small_curves() {
    init_logging();

    let cases: [(u64, u64, u64, u32); 9] = [
        (10007, 1, 1, 0),
        (10007, 1, 15, 1),
        (10007, 1, 3, 2),
        (10007, 1, 8, 3),
        (10007, 1, 4, 4),
        (10007, 1, 53, 8),
        (10009, 1, 8, 0),
        (10009, 1, 2, 3),
        (10009, 2, 28, 4),
    ];

    for (p, a, b, k) in cases {
        let f = field(p);
        let e = curve(&f, a, b);
        let sub = e.order_2_primary().unwrap();

        assert_eq!(sub.exponent(), k, "curve ({p}, {a}, {b})");
        assert_eq!(sub.order(), U256::ONE << k);

        let g = sub.generator();
        assert!(e.contains(&g));
        assert!(e.double_n(&g, k).unwrap().is_identity());
        if k > 0 {
            assert!(!e.double_n(&g, k - 1).unwrap().is_identity());
        } else {
            assert!(g.is_identity());
        }
    }
}

#[test]
fn test_two_primary_generators_are_deterministic() {
    let f = field(10007);

    assert_eq!(
        curve(&f, 1, 15).order_2_primary().unwrap().generator(),
        affine(&f, 9538, 0)
    );
    assert_eq!(
        curve(&f, 1, 3).order_2_primary().unwrap().generator(),
        affine(&f, 965, 211)
    );
    assert_eq!(
        curve(&f, 1, 8).order_2_primary().unwrap().generator(),
        affine(&f, 2138, 9519)
    );
}

#[test]
fn test_non_cyclic_two_sylow_is_a_structure_error() {
    for (p, a, b) in [(10007, 1, 2), (10009, 1, 6)] {
        let f = field(p);
        let err = curve(&f, a, b).order_2_primary().unwrap_err();

        assert!(matches!(
            err,
            ParamError::SubgroupStructure {
                fault: SubgroupFault::NonCyclic,
                ..
            }
        ));
    }
}

#[test]
fn test_trivial_subgroup_is_not_an_error_but_a_wrong_order_is() {
    let f = field(10007);

    // Odd group order: k = 0 with the identity is legitimate.
    let odd = curve(&f, 1, 1);
    let sub = odd.order_2_primary().unwrap();
    assert_eq!(sub.exponent(), 0);
    assert!(Subgroup::verify(&odd, Point::Identity, 0).is_ok());

    // An inconsistent claim about the generator's order is rejected.
    let e = curve(&f, 1, 8);
    let g = affine(&f, 2138, 9519);
    assert!(Subgroup::verify(&e, g, 3).is_ok());

    for claimed in [0, 2, 4] {
        let err = Subgroup::verify(&e, g, claimed).unwrap_err();
        assert!(matches!(
            err,
            ParamError::SubgroupStructure {
                fault: SubgroupFault::OrderMismatch { claimed: c },
                ..
            } if c == claimed
        ));
    }

    let err = Subgroup::verify(&odd, Point::Identity, 1).unwrap_err();
    assert!(matches!(
        err,
        ParamError::SubgroupStructure {
            fault: SubgroupFault::OrderMismatch { claimed: 1 },
            ..
        }
    ));
}

#[test]
fn test_halving_stops_at_the_generator() {
    let f = field(10007);
    let e = curve(&f, 1, 8);
    let g = affine(&f, 2138, 9519);

    assert_eq!(e.halve(&g).unwrap(), None);
    assert_eq!(e.halve(&Point::Identity).unwrap(), None);

    let two_g = e.double(&g).unwrap();
    let half = e.halve(&two_g).unwrap().unwrap();
    assert_eq!(e.double(&half).unwrap(), two_g);
}

#[test]
fn test_subgroup_membership() {
    let f = field(10007);
    let e = curve(&f, 1, 8);
    let sub = e.order_2_primary().unwrap();
    let g = sub.generator();

    assert!(sub.contains(&e, &Point::Identity).unwrap());
    assert!(sub.contains(&e, &e.mul_u64(&g, 5).unwrap()).unwrap());

    // 8 · 1239 = 9912; a point of odd order 1239 is outside.
    let mut rng = Csprng::from_seed([5u8; 32]);
    let p = e.random_point(&mut rng);
    let odd = e.mul_u64(&p, 8).unwrap();
    if !odd.is_identity() {
        assert!(!sub.contains(&e, &odd).unwrap());
    }
}

#[test]
fn test_random_points_do_not_favour_two_torsion() {
    // y^2 = x^3 + 2x + 1 over F_13 has 7 affine points; (2, 0) is the only
    // one with y = 0.
    let f = field(13);
    let e = curve(&f, 2, 1);
    let torsion = affine(&f, 2, 0);
    let mut rng = Csprng::from_seed([6u8; 32]);

    let mut hits = 0;
    for _ in 0..7000 {
        let p = e.random_point(&mut rng);
        assert!(e.contains(&p));
        if p == torsion {
            hits += 1;
        }
    }

    // Uniform: about 1000. Weighting the x-coordinate alone gives about 1750.
    assert!(hits > 800 && hits < 1250, "{hits} hits on the 2-torsion point");
}
