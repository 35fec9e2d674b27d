//! Crate-private 512-bit helper
//!
//! `U512` exists for one purpose: carrying the full double-width product
//! of two `U256` values into modular reduction, so that `mul_mod` never
//! loses high bits. It implements only what that path needs: comparison,
//! subtraction, shifts, and a shift-subtract reduction against a 256-bit
//! modulus. The representation mirrors `U256`: sixteen little-endian
//! 32-bit limbs.

use crate::field::{LIMBS, U256};

use std::cmp::Ordering;
use std::ops::{Shl, Shr, Sub};

const WIDE_LIMBS: usize = 2 * LIMBS;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct U512([u32; WIDE_LIMBS]);

impl U512 {
    /// Assembles a 512-bit value from its 256-bit halves.
    pub(crate) fn from_parts(low: U256, high: U256) -> Self {
        let mut out = [0u32; WIDE_LIMBS];
        out[..LIMBS].copy_from_slice(&low.limbs());
        out[LIMBS..].copy_from_slice(&high.limbs());

        U512(out)
    }

    fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == 0 {
                count += 32;
            } else {
                count += limb.leading_zeros();
                break;
            }
        }

        count
    }

    /// Reduces modulo a 256-bit modulus and truncates to the low half.
    ///
    /// Same shift-subtract walk as `U256::rem_mod`, run over the full
    /// 512-bit width. The final value is below the modulus and therefore
    /// fits in 256 bits. The modulus must be non-zero.
    pub(crate) fn rem(self, modulus: U256) -> U256 {
        debug_assert!(!modulus.is_zero(), "reduction by zero modulus");

        let wide_modulus = U512::from_parts(modulus, U256::ZERO);

        let mut value = self;

        if value >= wide_modulus {
            let mut shift = (wide_modulus.leading_zeros() - value.leading_zeros()) as i32;
            let mut shifted = wide_modulus << shift as u32;

            while shift >= 0 {
                if value >= shifted {
                    value = value - shifted;
                }

                shifted = shifted >> 1;
                shift -= 1;
            }
        }

        let mut low = [0u32; LIMBS];
        low.copy_from_slice(&value.0[..LIMBS]);

        U256::from_limbs(low)
    }
}

impl Ord for U512 {
    fn cmp(&self, rhs: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(rhs.0.iter()).rev() {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for U512 {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

/// Subtraction modulo 2⁵¹²; only ever called with `self >= rhs`.
impl Sub for U512 {
    type Output = U512;

    fn sub(self, rhs: U512) -> Self::Output {
        let mut out = [0u32; WIDE_LIMBS];
        let mut borrow = 0u32;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let diff = a.wrapping_sub(b).wrapping_sub(borrow);
            borrow = ((diff > a) || (diff == a && b > 0)) as u32;
            *o = diff;
        }

        U512(out)
    }
}

/// Logical left shift; 512 or more yields zero.
impl Shl<u32> for U512 {
    type Output = U512;

    fn shl(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= 512 {
            return U512([0u32; WIDE_LIMBS]);
        }

        let limb_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut out = [0u32; WIDE_LIMBS];

        if bit_shift == 0 {
            for i in limb_shift..WIDE_LIMBS {
                out[i] = self.0[i - limb_shift];
            }
        } else {
            for i in (limb_shift + 1)..WIDE_LIMBS {
                out[i] = (self.0[i - limb_shift] << bit_shift)
                    | (self.0[i - limb_shift - 1] >> (32 - bit_shift));
            }
            out[limb_shift] = self.0[0] << bit_shift;
        }

        U512(out)
    }
}

/// Logical right shift; 512 or more yields zero.
impl Shr<u32> for U512 {
    type Output = U512;

    fn shr(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= 512 {
            return U512([0u32; WIDE_LIMBS]);
        }

        let limb_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut out = [0u32; WIDE_LIMBS];

        if bit_shift == 0 {
            for i in 0..WIDE_LIMBS - limb_shift {
                out[i] = self.0[i + limb_shift];
            }
        } else {
            for i in 0..WIDE_LIMBS - limb_shift - 1 {
                out[i] = (self.0[i + limb_shift] >> bit_shift)
                    | (self.0[i + limb_shift + 1] << (32 - bit_shift));
            }
            out[WIDE_LIMBS - limb_shift - 1] = self.0[WIDE_LIMBS - 1] >> bit_shift;
        }

        U512(out)
    }
}
