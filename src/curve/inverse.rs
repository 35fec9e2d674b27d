//! Modular inverse over the curve prime
//!
//! Extended Euclidean algorithm, hard-wired to `p`. This is the one
//! place in the crate where 256-bit values are reinterpreted as signed
//! two's-complement: the Bézout coefficients go negative during the
//! iteration, represented by wrapping subtraction, and are detected via
//! the top bit during the final normalization. Fermat exponentiation
//! (`a^(p−2) mod p` via `pow_mod`) would avoid the reinterpretation at
//! the cost of roughly 256 modular multiplications per inverse.

use crate::curve::params::P;
use crate::field::U256;

/// Computes `a⁻¹ mod p`, or zero when no inverse exists.
///
/// Since `p` is prime the only non-invertible input is zero; the final
/// `a·s ≡ 1 (mod p)` verification turning up anything else would
/// indicate an arithmetic bug, and also reports zero.
pub fn inv_mod_p(a: U256) -> U256 {
    if a.is_zero() {
        return U256::ZERO;
    }

    let reduced = a.rem_mod(P);

    let mut r = P;
    let mut old_r = reduced;
    let mut s = U256::ZERO;
    let mut old_s = U256::ONE;
    let mut t = U256::ONE;
    let mut old_t = U256::ZERO;

    while !r.is_zero() {
        let (quotient, remainder) = old_r.div_rem(r);

        old_r = r;
        r = remainder;

        // Bézout updates in wrapping two's-complement. Intermediates may
        // overflow the signed range, but every value stays correct
        // modulo 2^256; only the final readout needs a magnitude bound.
        let next_s = old_s - quotient * s;
        old_s = s;
        s = next_s;

        let next_t = old_t - quotient * t;
        old_t = t;
        t = next_t;
    }

    let mut inverse = old_s;

    // The final coefficient lies in (-p/2, p/2), so the top bit is a true
    // sign bit and one addition of p lands negatives in [0, p). A repeated
    // add would misread correct results in [2^255, p), since p > 2^255.
    if inverse.is_negative() {
        inverse = inverse + P;
    }
    while inverse >= P {
        inverse = inverse - P;
    }

    if reduced.mul_mod(inverse, P) != U256::ONE {
        return U256::ZERO;
    }

    inverse
}
