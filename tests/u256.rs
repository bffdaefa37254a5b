use ecfft_params::primitives::{ParseU256Error, U256};

const BN254_P: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";

#[test]
fn test_u256_max_const() {
    assert_eq!(U256::MAX, U256::from([u64::MAX; 4]));
    assert_eq!(U256::MAX.to_le_bytes(), [0xffu8; 32]);
}

#[test]
fn test_u256_limbs_roundtrip() {
    let a = U256::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(a.limbs(), [0x0123_4567_89AB_CDEF, 0, 0, 0]);

    const WIDE: U256 = U256::from_limbs([1, 2, 3, 4]);
    assert_eq!(WIDE, U256::from([1, 2, 3, 4]));
    assert_eq!(WIDE.limbs(), [1, 2, 3, 4]);
}

#[test]
fn test_u256_leading_and_trailing_zeros() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ZERO.trailing_zeros(), 256);
    assert_eq!(U256::ONE.leading_zeros(), 255);
    assert_eq!(U256::ONE.trailing_zeros(), 0);

    let high = U256::from([0, 0, 0, 1 << 60]);
    assert_eq!(high.leading_zeros(), 3);
    assert_eq!(high.trailing_zeros(), 252);

    let mid = U256::from([0, 1 << 23, 0, 0]);
    assert_eq!(mid.leading_zeros(), 168);
    assert_eq!(mid.bits(), 88);
}

#[test]
fn test_u256_bit_access() {
    let v = U256::from([0b101, 0, 0, 1 << 63]);

    assert!(v.bit(0));
    assert!(!v.bit(1));
    assert!(v.bit(2));
    assert!(v.bit(255));
    assert!(!v.bit(254));
    assert!(v.is_odd());
    assert!(!U256::from(10u64).is_odd());
}

#[test]
fn test_u256_shifts_cross_limbs() {
    let one = U256::ONE;

    assert_eq!(one << 64, U256::from([0, 1, 0, 0]));
    assert_eq!(one << 255, U256::from([0, 0, 0, 1 << 63]));
    assert_eq!(one << 256, U256::ZERO);

    let v = U256::from([0, 0, 0, 0x8000_0000_0000_0001]);
    assert_eq!(v >> 192, U256::from(0x8000_0000_0000_0001u64));
    assert_eq!(v >> 193, U256::from(0x4000_0000_0000_0000u64));
    assert_eq!(v >> 300, U256::ZERO);

    let w = U256::from([u64::MAX, 0, 0, 0]);
    assert_eq!(w << 4, U256::from([0xffff_ffff_ffff_fff0, 0xf, 0, 0]));
}

#[test]
fn test_u256_add_sub_carry_propagation() {
    let a = U256::from([u64::MAX, u64::MAX, 0, 0]);
    let (sum, carry) = a.overflowing_add(&U256::ONE);
    assert_eq!(sum, U256::from([0, 0, 1, 0]));
    assert!(!carry);

    let (wrapped, carry) = U256::MAX.overflowing_add(&U256::ONE);
    assert_eq!(wrapped, U256::ZERO);
    assert!(carry);

    let (diff, borrow) = U256::ZERO.overflowing_sub(&U256::ONE);
    assert_eq!(diff, U256::MAX);
    assert!(borrow);

    assert_eq!(sum - U256::ONE, a);
    assert_eq!(a + U256::ONE, sum);
}

#[test]
fn test_u256_small_mul_and_div() {
    let (lo, hi) = U256::MAX.mul_small(2);
    assert_eq!(hi, 1);
    assert_eq!(lo, U256::MAX - U256::ONE);

    let (q, r) = U256::from(1_000_003u64).div_rem_small(10);
    assert_eq!(q, U256::from(100_000u64));
    assert_eq!(r, 3);
}

#[test]
#[should_panic]
fn test_u256_div_by_zero_panics() {
    let _ = U256::ONE.div_rem_small(0);
}

#[test]
fn test_u256_ordering_is_numeric() {
    let small = U256::from([u64::MAX, 0, 0, 0]);
    let large = U256::from([0, 1, 0, 0]);

    assert!(small < large);
    assert!(U256::MAX > large);
    assert_eq!(large.max(small), large);
}

#[test]
fn test_u256_byte_roundtrip_is_little_endian() {
    let mut bytes = [0u8; 32];
    bytes[0] = 0x01;
    bytes[8] = 0x02;
    bytes[31] = 0x80;

    let v = U256::from_le_bytes(bytes);
    assert_eq!(v, U256::from([1, 2, 0, 0x8000_0000_0000_0000]));
    assert_eq!(v.to_le_bytes(), bytes);
}

#[test]
fn test_u256_decimal_display_and_parse() {
    let p: U256 = BN254_P.parse().unwrap();

    assert_eq!(
        p,
        U256::from([
            0x3c208c16d87cfd47,
            0x97816a916871ca8d,
            0xb85045b68181585d,
            0x30644e72e131a029,
        ])
    );
    assert_eq!(p.to_string(), BN254_P);
    assert_eq!(U256::ZERO.to_string(), "0");
    assert_eq!(U256::from(10_000_000_000_000_000_000u64).to_string(), "10000000000000000000");
    assert_eq!(
        U256::MAX.to_string(),
        "115792089237316195423570985008687907853269984665640564039457584007913129639935"
    );
}

#[test]
fn test_u256_hex_display_and_parse() {
    let p: U256 = "0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
        .parse()
        .unwrap();

    assert_eq!(p.to_string(), BN254_P);
    assert_eq!(
        format!("{p:#x}"),
        "0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
    );
    assert_eq!(format!("{:x}", U256::ZERO), "0");
    assert_eq!(U256::from_hex_str("dead_beef").unwrap(), U256::from(0xdead_beefu64));
}

#[test]
fn test_u256_parse_errors() {
    assert_eq!("".parse::<U256>(), Err(ParseU256Error::Empty));
    assert_eq!("12a".parse::<U256>(), Err(ParseU256Error::InvalidDigit('a')));
    assert_eq!("0xzz".parse::<U256>(), Err(ParseU256Error::InvalidDigit('z')));

    // 2^256
    assert_eq!(
        "115792089237316195423570985008687907853269984665640564039457584007913129639936"
            .parse::<U256>(),
        Err(ParseU256Error::Overflow)
    );
    assert_eq!(
        U256::from_hex_str(&"f".repeat(65)),
        Err(ParseU256Error::Overflow)
    );
}
