//! ARM NEON implementations for 128-bit lane groups.
//!
//! NEON is mandatory on AArch64, so this module is the vector path on Apple
//! Silicon, Graviton and other 64-bit ARM processors.

pub mod f32x4;

pub(crate) mod add;
