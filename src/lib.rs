//! Element-wise `f32` vector addition on SIMD lanes.
//!
//! The adder picks the widest instruction set the machine offers (AVX2,
//! then NEON, then SSE) and falls back to scalar code otherwise. Inputs of
//! any length are accepted; a trailing group shorter than the lane width is
//! handled with masked or zero-padded loads and never writes past the end of
//! the output.
//!
//! ```rust
//! use lanesum::{FloatVector, SimdAdd};
//!
//! let a = [1.0f32, 2.0, 3.0];
//! let b = [3.0f32, 2.0, 1.0];
//! assert_eq!(a.as_slice().simd_add(b.as_slice()), vec![4.0, 4.0, 4.0]);
//!
//! let (lhs, rhs) = lanesum::inputs::operands();
//! assert_eq!((lhs + rhs).to_array(), [9.0; FloatVector::LEN]);
//! ```

pub mod error;
pub mod inputs;
pub mod report;
pub mod simd;
pub mod vector;

pub use error::{LanesumError, Result};
pub use simd::{add_into, try_add, try_add_into, Backend, SimdAdd};
pub use vector::FloatVector;
