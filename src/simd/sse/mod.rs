//! SSE implementations for 128-bit lane groups.
//!
//! The x86 path for CPUs without AVX2. SSE is part of the x86_64 baseline.

pub mod f32x4;

pub(crate) mod add;
