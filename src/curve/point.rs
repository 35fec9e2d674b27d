//! Affine curve points and group operations

use crate::curve::inverse::inv_mod_p;
use crate::curve::params::{A, B, P};
use crate::field::U256;

use std::ops::{Add, Mul, Neg};

/// Point on the curve in affine coordinates, or the point at infinity.
///
/// When `infinity` is set both coordinates are zero. Construction does
/// not validate the curve equation; see [`is_on_curve`](Self::is_on_curve).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: U256,
    pub y: U256,
    pub infinity: bool,
}

impl AffinePoint {
    /// The point at infinity, the group identity.
    pub const INFINITY: Self = Self {
        x: U256::ZERO,
        y: U256::ZERO,
        infinity: true,
    };

    /// Builds a finite point from its coordinates.
    ///
    /// No curve-equation check is performed.
    pub const fn new(x: U256, y: U256) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Returns `true` for the point at infinity.
    pub const fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Checks the curve equation `y² ≡ x³ + a·x + b (mod p)`.
    ///
    /// The point at infinity is considered on the curve. This predicate
    /// is never invoked by the group operations; callers accepting
    /// untrusted points must call it explicitly.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }

        let left = self.y.mul_mod(self.y, P);

        let x_squared = self.x.mul_mod(self.x, P);
        let right = x_squared
            .mul_mod(self.x, P)
            .add_mod(A.mul_mod(self.x, P), P)
            .add_mod(B, P);

        left == right
    }

    /// Double-and-add scalar multiplication.
    ///
    /// Runs a fixed 256 iterations over the scalar bits, most significant
    /// first: double the accumulator, then add `self` when the bit is
    /// set. The accumulator starts at infinity, so the leading doublings
    /// are no-ops and the first set bit seeds it. The conditional add
    /// leaks the bit pattern through timing; this is not constant-time.
    pub fn scalar_mul(&self, k: U256) -> AffinePoint {
        let mut acc = AffinePoint::INFINITY;

        for bit in (0..256).rev() {
            acc = acc + acc;

            if k.bit(bit) {
                acc = acc + *self;
            }
        }

        acc
    }
}

/// Group addition, covering all affine cases.
///
/// Case order: infinity identities, then `P + (−P) = O`, then the
/// doubling slope `(3x² + a)·(2y)⁻¹` when both coordinates match, and
/// otherwise the chord slope `(y₂ − y₁)·(x₂ − x₁)⁻¹`. The doubling
/// branch would divide by zero for a point with `y = 0`, but P-256 has
/// no point of order two, so valid inputs never reach it.
impl Add for AffinePoint {
    type Output = AffinePoint;

    fn add(self, rhs: AffinePoint) -> Self::Output {
        if self.infinity {
            return rhs;
        }
        if rhs.infinity {
            return self;
        }

        if self.x == rhs.x && self.y == P - rhs.y {
            return AffinePoint::INFINITY;
        }

        let slope = if self.x == rhs.x && self.y == rhs.y {
            let x_squared = self.x.mul_mod(self.x, P);
            let numerator = U256::from(3u32).mul_mod(x_squared, P).add_mod(A, P);
            let denominator = U256::from(2u32).mul_mod(self.y, P);

            numerator.mul_mod(inv_mod_p(denominator), P)
        } else {
            let numerator = rhs.y.sub_mod(self.y, P);
            let denominator = rhs.x.sub_mod(self.x, P);

            numerator.mul_mod(inv_mod_p(denominator), P)
        };

        let x3 = slope
            .mul_mod(slope, P)
            .sub_mod(self.x, P)
            .sub_mod(rhs.x, P);
        let y3 = slope.mul_mod(self.x.sub_mod(x3, P), P).sub_mod(self.y, P);

        AffinePoint::new(x3, y3)
    }
}

/// Point negation: `(x, p − y)`; infinity is its own negative.
impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> Self::Output {
        if self.infinity {
            return self;
        }

        AffinePoint::new(self.x, U256::ZERO.sub_mod(self.y, P))
    }
}

/// Scalar multiplication as an operator: `point * scalar`.
impl Mul<U256> for AffinePoint {
    type Output = AffinePoint;

    fn mul(self, k: U256) -> Self::Output {
        self.scalar_mul(k)
    }
}
