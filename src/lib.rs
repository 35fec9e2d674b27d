//! Portable arithmetic core for the NIST P-256 elliptic curve
//!
//! This crate provides the low-level arithmetic needed to build protocols
//! on top of P-256 (ECDSA, ECDH, scalar commitments) on small 32-bit
//! targets. The protocol logic itself lives elsewhere; this crate stops at
//! field and group operations.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are dependency-free, allocation-free, and explicit in their
//! semantics.
//!
//! # Module overview
//!
//! - `field`
//!   A fixed-size 256-bit unsigned integer type (`U256`) stored as eight
//!   32-bit limbs, with wrapping integer arithmetic, long division, and
//!   modular arithmetic against an explicit modulus. The field layer knows
//!   nothing about any particular curve.
//!
//! - `curve`
//!   Affine Weierstrass point arithmetic over the P-256 prime field:
//!   point addition with the doubling special case, negation, the point at
//!   infinity, double-and-add scalar multiplication, and the curve domain
//!   parameters. The modular inverse lives here because it is hard-wired
//!   to the curve prime.
//!
//! - `rng`
//!   A small deterministic generator (xoshiro128+ seeded through
//!   SplitMix64) used to draw test scalars. It is **not** cryptographic
//!   and is documented as such; real deployments must substitute a real
//!   entropy source.
//!
//! # Design goals
//!
//! - No heap allocations anywhere in the crate
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics, including on wraparound
//! - No constant-time guarantees: operations branch on operand values
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled arithmetic
//! foundation on targets where those libraries do not fit.

pub mod curve;
pub mod field;
pub mod rng;
