use p256_core::curve::{AffinePoint, G, GX, GY, N, P, inv_mod_p, random_scalar};
use p256_core::field::U256;
use p256_core::rng::Xoshiro128Plus;

fn two_g() -> AffinePoint {
    AffinePoint::new(
        U256::from_hex("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
        U256::from_hex("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
    )
}

#[test]
fn generator_is_on_curve() {
    assert!(G.is_on_curve());
    assert!(AffinePoint::INFINITY.is_on_curve());
}

#[test]
fn tampered_point_is_off_curve() {
    let bogus = AffinePoint::new(GX, GY + U256::ONE);
    assert!(!bogus.is_on_curve());
}

#[test]
fn point_construction() {
    let point = AffinePoint::new(GX, GY);
    assert!(!point.is_infinity());
    assert_eq!(point.x, GX);
    assert_eq!(point.y, GY);

    let identity = AffinePoint::INFINITY;
    assert!(identity.is_infinity());
    assert!(identity.x.is_zero());
    assert!(identity.y.is_zero());
}

#[test]
fn addition_identity_laws() {
    assert_eq!(G + AffinePoint::INFINITY, G);
    assert_eq!(AffinePoint::INFINITY + G, G);
    assert_eq!(
        AffinePoint::INFINITY + AffinePoint::INFINITY,
        AffinePoint::INFINITY
    );
}

#[test]
fn addition_inverse_law() {
    assert_eq!(G + (-G), AffinePoint::INFINITY);
    assert!((-G).is_on_curve());
    assert_eq!(-AffinePoint::INFINITY, AffinePoint::INFINITY);
}

#[test]
fn doubling_known_answer() {
    let doubled = G + G;

    assert_eq!(doubled, two_g());
    assert!(doubled.is_on_curve());
}

#[test]
fn addition_commutes() {
    let p = G;
    let q = two_g();

    assert_eq!(p + q, q + p);
}

#[test]
fn addition_chains_match_scalar_multiples() {
    let three_g = G + two_g();

    assert_eq!(
        three_g.x,
        U256::from_hex("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c")
    );
    assert_eq!(
        three_g.y,
        U256::from_hex("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032")
    );

    assert_eq!(G.scalar_mul(U256::from(3u32)), three_g);
    assert_eq!(two_g() + three_g, G.scalar_mul(U256::from(5u32)));
}

#[test]
fn scalar_mul_zero_and_one() {
    assert_eq!(G.scalar_mul(U256::ZERO), AffinePoint::INFINITY);
    assert_eq!(G.scalar_mul(U256::ONE), G);
}

#[test]
fn scalar_mul_two_matches_doubling() {
    assert_eq!(G * U256::from(2u32), two_g());
}

#[test]
fn scalar_mul_by_group_order_is_infinity() {
    assert_eq!(G * N, AffinePoint::INFINITY);
}

#[test]
fn scalar_mul_results_stay_on_curve() {
    let mut rng = Xoshiro128Plus::from_default_seed();

    for _ in 0..4 {
        let k = random_scalar(&mut rng);
        assert!((G * k).is_on_curve());
    }
}

#[test]
fn inverse_of_zero_is_zero() {
    assert_eq!(inv_mod_p(U256::ZERO), U256::ZERO);
}

#[test]
fn inverse_round_trips() {
    assert_eq!(inv_mod_p(U256::ONE), U256::ONE);

    assert_eq!(
        inv_mod_p(U256::from(2u32)),
        U256::from_hex("7fffffff80000000800000000000000000000000800000000000000000000000")
    );

    let a = U256::from_hex("deadbeefcafebabe0123456789abcdef");
    let inverse = inv_mod_p(a);

    assert_eq!(a.mul_mod(inverse, P), U256::ONE);
    assert_eq!(inv_mod_p(inverse), a);
}

#[test]
fn inverse_reduces_its_input() {
    // p + 2 ≡ 2, so both must invert to the same value
    let shifted = P + U256::from(2u32);
    assert_eq!(inv_mod_p(shifted), inv_mod_p(U256::from(2u32)));
}

#[test]
fn random_scalars_are_in_range() {
    let mut rng = Xoshiro128Plus::from_default_seed();

    for _ in 0..10 {
        let k = random_scalar(&mut rng);
        assert!(!k.is_zero());
        assert!(k < N);
    }
}

#[test]
fn random_scalar_stream_is_deterministic() {
    let mut rng = Xoshiro128Plus::from_default_seed();

    let first = random_scalar(&mut rng);
    assert_eq!(
        first,
        U256::from_hex("d372a54da9f7d98cc47cf814f7acccb32253452606a9e88c800ce5b7de762952")
    );

    let second = random_scalar(&mut rng);
    assert_eq!(
        second,
        U256::from_hex("7299225c9b3d7b4de13201b0b9776a05642a318beb69ca17e8245b4970d67175")
    );
}
