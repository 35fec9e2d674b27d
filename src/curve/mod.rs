//! Affine point arithmetic on NIST P-256
//!
//! This module implements group operations on the short Weierstrass curve
//!
//! ```text
//! y² = x³ + a·x + b   over 𝔽ₚ
//! ```
//!
//! with the NIST P-256 (secp256r1) domain parameters, in plain affine
//! coordinates.
//!
//! ## Representation
//!
//! A point is a pair of field coordinates plus an infinity flag; the
//! identity element is the flag, not a coordinate encoding. Constructors
//! do **not** check the curve equation; callers accepting points from
//! untrusted sources must call [`AffinePoint::is_on_curve`] themselves.
//!
//! ## Scope and caveats
//!
//! - Every coordinate operation is a handful of field operations against
//!   the curve prime; scalar reduction uses the group order.
//! - Nothing here is constant-time: point addition branches on operand
//!   values and scalar multiplication's conditional add leaks the bit
//!   pattern through timing. Acceptable for the intended uses (test
//!   vectors, non-secret commitments); not for secret scalars under an
//!   observing attacker.
//! - The modular inverse is hard-wired to the curve prime and lives here
//!   rather than in the field layer, which stays curve-agnostic.

mod inverse;
mod params;
mod point;
mod scalar;

pub use inverse::inv_mod_p;
pub use params::{A, B, G, GX, GY, N, P};
pub use point::AffinePoint;
pub use scalar::random_scalar;
