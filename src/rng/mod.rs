//! Deterministic pseudorandom number generation
//!
//! This module provides the small deterministic generator used to draw
//! test scalars: a SplitMix64 seed expander feeding a xoshiro128+ stream.
//!
//! Everything here is **explicitly non-cryptographic**. The fixed default
//! seed exists so that test runs are reproducible bit for bit; a real
//! deployment drawing key material must substitute a real entropy source.
//!
//! Generator state is a plain value owned by the caller. There is no
//! process-wide state; confine each generator to one thread or guard it
//! externally.

mod splitmix;
mod xoshiro;

pub use splitmix::SplitMix64;
pub use xoshiro::{DEFAULT_SEED, Xoshiro128Plus};
