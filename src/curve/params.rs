//! NIST P-256 domain parameters
//!
//! The values are the secp256r1 constants from FIPS 186 / SEC 2, stored
//! as little-endian limb arrays. The raw big-endian hex form is quoted
//! above each constant.

use crate::curve::AffinePoint;
use crate::field::U256;

/// Field prime `p`.
///
/// ffffffff00000001000000000000000000000000ffffffffffffffffffffffff
pub const P: U256 = U256::from_limbs([
    0xffffffff, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000001, 0xffffffff,
]);

/// Curve coefficient `a` (= p − 3).
///
/// ffffffff00000001000000000000000000000000fffffffffffffffffffffffc
pub const A: U256 = U256::from_limbs([
    0xfffffffc, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000001, 0xffffffff,
]);

/// Curve coefficient `b`.
///
/// 5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b
pub const B: U256 = U256::from_limbs([
    0x27d2604b, 0x3bce3c3e, 0xcc53b0f6, 0x651d06b0, 0x769886bc, 0xb3ebbd55, 0xaa3a93e7, 0x5ac635d8,
]);

/// Generator x-coordinate.
///
/// 6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296
pub const GX: U256 = U256::from_limbs([
    0xd898c296, 0xf4a13945, 0x2deb33a0, 0x77037d81, 0x63a440f2, 0xf8bce6e5, 0xe12c4247, 0x6b17d1f2,
]);

/// Generator y-coordinate.
///
/// 4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5
pub const GY: U256 = U256::from_limbs([
    0x37bf51f5, 0xcbb64068, 0x6b315ece, 0x2bce3357, 0x7c0f9e16, 0x8ee7eb4a, 0xfe1a7f9b, 0x4fe342e2,
]);

/// Group order `n`.
///
/// ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551
pub const N: U256 = U256::from_limbs([
    0xfc632551, 0xf3b9cac2, 0xa7179e84, 0xbce6faad, 0xffffffff, 0xffffffff, 0x00000000, 0xffffffff,
]);

/// The generator point `G`.
pub const G: AffinePoint = AffinePoint {
    x: GX,
    y: GY,
    infinity: false,
};
