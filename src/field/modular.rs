//! Modular arithmetic against an explicit modulus
//!
//! Every operation takes the modulus as a parameter; nothing here knows
//! about any particular curve. Results are always true residues in
//! `[0, m)`, regardless of whether the operands were already reduced:
//! `add_mod` keeps the carry out of the 256-bit addition, `sub_mod`
//! folds the modulus back in on underflow, and `mul_mod` reduces the full
//! 512-bit product.
//!
//! The modulus must be non-zero for every operation in this module.

use crate::field::{LIMBS, U256, U512};

impl U256 {
    /// Reduces `self` modulo `modulus`.
    ///
    /// Values already below the modulus are returned unchanged. Otherwise
    /// a shifted copy of the modulus is aligned with the value's top bit
    /// and walked down one bit at a time, subtracting whenever it still
    /// fits.
    pub fn rem_mod(self, modulus: U256) -> U256 {
        debug_assert!(!modulus.is_zero(), "reduction by zero modulus");

        if self < modulus {
            return self;
        }

        let mut value = self;

        let mut shift = (modulus.leading_zeros() - value.leading_zeros()) as i32;
        let mut shifted = modulus << shift as u32;

        while shift >= 0 {
            if value >= shifted {
                value = value - shifted;
            }

            shifted = shifted >> 1;
            shift -= 1;
        }

        value
    }

    /// Modular addition: `(self + rhs) mod modulus`.
    ///
    /// The single carry bit a 256-bit addition can produce is folded back
    /// in, so the result is correct even for moduli close to 2²⁵⁶.
    pub fn add_mod(self, rhs: U256, modulus: U256) -> U256 {
        let a = self.rem_mod(modulus);
        let b = rhs.rem_mod(modulus);

        let (sum, carry) = a.overflowing_add(b);

        // a + b < 2m, so one conditional subtraction settles it. When the
        // carry is set the wrapped difference is exactly a + b - m.
        if carry || sum >= modulus {
            sum - modulus
        } else {
            sum
        }
    }

    /// Modular subtraction: `(self − rhs) mod modulus`.
    pub fn sub_mod(self, rhs: U256, modulus: U256) -> U256 {
        let a = self.rem_mod(modulus);
        let b = rhs.rem_mod(modulus);

        if a >= b {
            a - b
        } else {
            modulus - (b - a)
        }
    }

    /// Modular multiplication: `(self · rhs) mod modulus`.
    ///
    /// The full 512-bit product is carried into the reduction; no high
    /// bits are discarded.
    pub fn mul_mod(self, rhs: U256, modulus: U256) -> U256 {
        let (low, high) = self.widening_mul(rhs);

        U512::from_parts(low, high).rem(modulus)
    }

    /// Modular exponentiation: `(self ^ exponent) mod modulus`.
    ///
    /// Fixed 4-bit window, most significant nibble first: four squarings
    /// per window, then one multiply by the table entry for the window
    /// value. Zero windows still cost the four squarings; this is not a
    /// sliding window.
    pub fn pow_mod(self, exponent: U256, modulus: U256) -> U256 {
        // base^0 .. base^15
        let mut table = [U256::ONE.rem_mod(modulus); 16];
        for k in 1..16 {
            table[k] = table[k - 1].mul_mod(self, modulus);
        }

        let mut acc = U256::ONE.rem_mod(modulus);

        for i in (0..LIMBS).rev() {
            let limb = exponent.0[i];

            for window_shift in (0..32).step_by(4).rev() {
                for _ in 0..4 {
                    acc = acc.mul_mod(acc, modulus);
                }

                let window = (limb >> window_shift) & 0xF;
                if window != 0 {
                    acc = acc.mul_mod(table[window as usize], modulus);
                }
            }
        }

        acc
    }
}
