//! Scalar sampling

use crate::curve::params::N;
use crate::field::{LIMBS, U256};
use crate::rng::Xoshiro128Plus;

/// Draws a scalar in `[0, n)` from the generator.
///
/// Eight 32-bit words fill the limbs, then the value is reduced modulo
/// the group order. The residual bias from the reduction and the zero
/// case are accepted: this feeds deterministic tests, not key
/// generation. Callers needing a non-zero scalar must reject and redraw
/// themselves; there is no rejection loop here.
pub fn random_scalar(rng: &mut Xoshiro128Plus) -> U256 {
    let mut limbs = [0u32; LIMBS];

    for limb in &mut limbs {
        *limb = rng.next_u32();
    }

    U256::from_limbs(limbs).rem_mod(N)
}
