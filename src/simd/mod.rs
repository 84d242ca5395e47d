//! Lane types and the slice-level adder.
//!
//! Which lane modules exist is decided at build time by the cfg flags that
//! `build.rs` emits (`avx2`, `sse`, `neon`, `fallback`); which one runs is
//! decided at run time by [`Backend::detect`]. The scalar path is always
//! compiled.
//!
//! The lane types run their instructions without checking the CPU, so they
//! stay inside the crate and are only reached through the adder:
//!
//! ```compile_fail
//! use lanesum::simd::avx2::f32x8::F32x8;
//! ```
//!
//! ```compile_fail
//! use lanesum::simd::sse::f32x4::F32x4;
//! ```

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
pub(crate) mod avx2;

#[cfg(all(any(avx2, sse), any(target_arch = "x86", target_arch = "x86_64")))]
pub(crate) mod sse;

#[cfg(all(neon, target_arch = "aarch64"))]
pub(crate) mod neon;

pub mod backend;
pub mod scalar;
pub mod slice;
pub mod traits;

pub use backend::Backend;
pub use slice::{add_into, add_into_with, try_add, try_add_into, PARALLEL_THRESHOLD};
pub use traits::{Alignment, SimdAdd, SimdLoad, SimdStore};
