//! Integer arithmetic and bitwise operations for `U256`
//!
//! All operations here treat the value as a plain unsigned 256-bit
//! integer. Addition, subtraction, and multiplication wrap modulo 2²⁵⁶;
//! that wrap is part of the contract, not an error. Division is the
//! classic shift-and-subtract long division.
//!
//! The checked entry point for division is [`U256::div_rem`]; the `Div`
//! and `Rem` operators panic on a zero divisor.

use crate::field::{LIMBS, U256};

use std::ops::{Add, Div, Mul, Rem, Shl, Shr, Sub};

impl U256 {
    /// Wrapping addition with an explicit carry-out.
    ///
    /// The carry into the next limb is 1 iff the limb sum overflowed:
    /// `sum < a`, or `sum == a` while `b` was non-zero (the incoming-carry
    /// case with `b == 0xFFFFFFFF`).
    pub fn overflowing_add(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u32; LIMBS];
        let mut carry = 0u32;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let sum = a.wrapping_add(b).wrapping_add(carry);
            carry = ((sum < a) || (sum == a && b > 0)) as u32;
            *o = sum;
        }

        (U256(out), carry == 1)
    }

    /// Wrapping subtraction with an explicit borrow-out.
    ///
    /// The borrow predicate mirrors the carry predicate of
    /// [`overflowing_add`](Self::overflowing_add): `diff > a`, or
    /// `diff == a` while `b` was non-zero.
    pub fn overflowing_sub(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u32; LIMBS];
        let mut borrow = 0u32;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let diff = a.wrapping_sub(b).wrapping_sub(borrow);
            borrow = ((diff > a) || (diff == a && b > 0)) as u32;
            *o = diff;
        }

        (U256(out), borrow == 1)
    }

    /// Full 512-bit schoolbook product, returned as `(low, high)` halves.
    ///
    /// Each inner step accumulates `a[i]·b[j] + acc[i+j] + carry` in
    /// 64-bit precision and carries the high word forward.
    pub fn widening_mul(self, rhs: U256) -> (U256, U256) {
        let mut acc = [0u32; 2 * LIMBS];

        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u64;

            for (j, &b) in rhs.0.iter().enumerate() {
                let product = a as u64 * b as u64 + acc[i + j] as u64 + carry;
                acc[i + j] = product as u32;
                carry = product >> 32;
            }

            acc[i + LIMBS] = carry as u32;
        }

        let mut low = [0u32; LIMBS];
        let mut high = [0u32; LIMBS];
        low.copy_from_slice(&acc[..LIMBS]);
        high.copy_from_slice(&acc[LIMBS..]);

        (U256(low), U256(high))
    }

    /// Long division: returns `(quotient, remainder)`.
    ///
    /// Shift-and-subtract: the divisor is aligned with the dividend's top
    /// bit (`shift = clz(divisor) − clz(dividend)`), then walked down one
    /// bit at a time, subtracting and setting the matching quotient bit
    /// whenever it still fits.
    ///
    /// A zero divisor yields the all-ones sentinel in **both** outputs;
    /// callers that want a panic instead can use the `/` and `%`
    /// operators.
    pub fn div_rem(self, divisor: U256) -> (U256, U256) {
        if divisor.is_zero() {
            return (U256::MAX, U256::MAX);
        }

        if self < divisor {
            return (U256::ZERO, self);
        }

        let mut quotient = U256::ZERO;
        let mut remainder = self;

        let mut shift = (divisor.leading_zeros() - remainder.leading_zeros()) as i32;
        let mut shifted = divisor << shift as u32;

        while shift >= 0 {
            if remainder >= shifted {
                remainder = remainder - shifted;
                quotient.0[(shift / 32) as usize] |= 1 << (shift % 32);
            }

            shifted = shifted >> 1;
            shift -= 1;
        }

        (quotient, remainder)
    }
}

/// Addition modulo 2²⁵⁶; the carry out of the top limb is discarded.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.overflowing_add(rhs).0
    }
}

/// Subtraction modulo 2²⁵⁶; the borrow out of the top limb is discarded.
///
/// On underflow the result is the two's-complement representation of the
/// negative difference, which the extended Euclidean inverse relies on.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.overflowing_sub(rhs).0
    }
}

/// Multiplication modulo 2²⁵⁶.
///
/// Schoolbook product keeping only the limbs below 2²⁵⁶; the inner loop
/// runs `j < LIMBS − i` because everything above would be truncated
/// anyway.
impl Mul for U256 {
    type Output = U256;

    fn mul(self, rhs: U256) -> Self::Output {
        let mut acc = [0u32; LIMBS];

        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u64;

            for (j, &b) in rhs.0.iter().take(LIMBS - i).enumerate() {
                let product = a as u64 * b as u64 + acc[i + j] as u64 + carry;
                acc[i + j] = product as u32;
                carry = product >> 32;
            }
        }

        U256(acc)
    }
}

/// Logical left shift. A shift of 0 is the identity; 256 or more yields
/// zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256::ZERO;
        }

        let limb_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut out = [0u32; LIMBS];

        if bit_shift == 0 {
            for i in limb_shift..LIMBS {
                out[i] = self.0[i - limb_shift];
            }
        } else {
            for i in (limb_shift + 1)..LIMBS {
                out[i] = (self.0[i - limb_shift] << bit_shift)
                    | (self.0[i - limb_shift - 1] >> (32 - bit_shift));
            }
            out[limb_shift] = self.0[0] << bit_shift;
        }

        U256(out)
    }
}

/// Logical right shift. A shift of 0 is the identity; 256 or more yields
/// zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256::ZERO;
        }

        let limb_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut out = [0u32; LIMBS];

        if bit_shift == 0 {
            for i in 0..LIMBS - limb_shift {
                out[i] = self.0[i + limb_shift];
            }
        } else {
            for i in 0..LIMBS - limb_shift - 1 {
                out[i] = (self.0[i + limb_shift] >> bit_shift)
                    | (self.0[i + limb_shift + 1] << (32 - bit_shift));
            }
            out[LIMBS - limb_shift - 1] = self.0[LIMBS - 1] >> bit_shift;
        }

        U256(out)
    }
}

/// Integer division producing the quotient.
impl Div for U256 {
    type Output = U256;

    fn div(self, rhs: U256) -> Self::Output {
        assert!(rhs != U256::ZERO, "division by zero");

        self.div_rem(rhs).0
    }
}

/// Integer division producing the remainder.
impl Rem for U256 {
    type Output = U256;

    fn rem(self, rhs: U256) -> Self::Output {
        assert!(rhs != U256::ZERO, "division by zero");

        self.div_rem(rhs).1
    }
}
