//! AVX2 implementations for 256-bit lane groups.
//!
//! Built only when `build.rs` reports AVX2 on an x86 target. The module is
//! crate-private: the adder reaches it only after `is_x86_feature_detected!`
//! succeeds, so a binary copied to an older CPU falls back instead of
//! faulting.
//!
//! # Available Types
//!
//! - [`f32x8::F32x8`]: 8 packed single-precision values in a `__m256`

pub mod f32x8;

pub(crate) mod add;
