//! Hexadecimal codec for `U256`
//!
//! The encoder always emits exactly 64 lowercase hex characters, most
//! significant nibble first, with no prefix and no terminator. The
//! decoder is deliberately permissive: it accepts either case, skips
//! bytes that are not hex digits, right-aligns short input, and discards
//! nibbles beyond the 64-nibble window of over-length input.

use crate::field::{LIMBS, U256};

use std::fmt::{Display, Formatter, Result};
use std::str;

impl U256 {
    /// Parses a hexadecimal string.
    ///
    /// The input is consumed right to left so that short strings land
    /// right-aligned in the low limbs, zero-extended above. Non-hex bytes
    /// are silently skipped; there is no error signal.
    pub fn from_hex(hex: &str) -> U256 {
        let mut limbs = [0u32; LIMBS];
        let mut limb = 0usize;
        let mut shift = 0u32;

        for &byte in hex.as_bytes().iter().rev() {
            let nibble = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => continue,
            };

            limbs[limb] |= (nibble as u32) << shift;

            shift += 4;
            if shift == 32 {
                shift = 0;
                limb += 1;

                if limb == LIMBS {
                    break;
                }
            }
        }

        U256(limbs)
    }

    /// Encodes as exactly 64 lowercase hex characters, most significant
    /// nibble first.
    pub fn to_hex(&self) -> [u8; 64] {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut out = [0u8; 64];

        for (i, &limb) in self.0.iter().rev().enumerate() {
            for j in 0..8 {
                let nibble = (limb >> (28 - 4 * j)) & 0xF;
                out[i * 8 + j as usize] = DIGITS[nibble as usize];
            }
        }

        out
    }
}

impl Display for U256 {
    /// Formats as the 64-character lowercase hex encoding.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let hex = self.to_hex();

        // to_hex only emits ASCII hex digits.
        f.write_str(str::from_utf8(&hex).unwrap())
    }
}
