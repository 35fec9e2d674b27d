//! Conversions between `U256` and native integer types
//!
//! These conversions support arithmetic setup, test vectors, and
//! interoperability with native integers while preventing implicit
//! truncation: widening conversions are `From`, narrowing ones are
//! `TryFrom` and fail when any higher-order limb is non-zero.

use crate::field::{LIMBS, U256};

/// Places the value in the least significant limb, all higher limbs zero.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = value;

        U256(limbs)
    }
}

/// Places the value in the two least significant limbs, little-endian.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = value as u32;
        limbs[1] = (value >> 32) as u32;

        U256(limbs)
    }
}

/// Builds a value from its little-endian limbs.
impl From<[u32; LIMBS]> for U256 {
    fn from(limbs: [u32; LIMBS]) -> Self {
        U256(limbs)
    }
}

/// Extracts the little-endian limbs of a value.
impl From<U256> for [u32; LIMBS] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Succeeds only if all limbs above the first are zero.
impl TryFrom<U256> for u32 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[1..].iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(value.0[0])
    }
}

/// Succeeds only if all limbs above the second are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[2..].iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(value.0[0] as u64 | (value.0[1] as u64) << 32)
    }
}
