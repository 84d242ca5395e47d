use log::debug;
use rayon::prelude::*;

use crate::error::{self, Result};
use crate::simd::backend::Backend;
use crate::simd::scalar;
use crate::simd::traits::SimdAdd;

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
use crate::simd::avx2;

#[cfg(all(any(avx2, sse), any(target_arch = "x86", target_arch = "x86_64")))]
use crate::simd::sse;

#[cfg(all(neon, target_arch = "aarch64"))]
use crate::simd::neon;

/// Below this many elements `par_simd_add` runs on the calling thread;
/// rayon's scheduling overhead exceeds the gain.
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Elements per rayon task. A multiple of every lane count.
const PARALLEL_CHUNK: usize = 4_096;

/// Runs the lane module for `backend`. Lengths are checked by the callers.
#[inline(always)]
fn dispatch(backend: Backend, a: &[f32], b: &[f32], c: &mut [f32]) {
    match backend {
        #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
        // SAFETY: Backend::Avx2 is only dispatched after `is_x86_feature_detected!("avx2")`.
        Backend::Avx2 => unsafe { avx2::add::add_into(a, b, c) },
        #[cfg(all(any(avx2, sse), any(target_arch = "x86", target_arch = "x86_64")))]
        // SAFETY: Backend::Sse is only dispatched after `is_x86_feature_detected!("sse")`.
        Backend::Sse => unsafe { sse::add::add_into(a, b, c) },
        #[cfg(all(neon, target_arch = "aarch64"))]
        // SAFETY: Backend::Neon is only dispatched after `is_aarch64_feature_detected!("neon")`.
        Backend::Neon => unsafe { neon::add::add_into(a, b, c) },
        _ => scalar::add_into(a, b, c),
    }
}

/// Adds `a` and `b` into `c` with the detected backend.
///
/// # Panics
///
/// Panics if the three slices do not all have the same length.
#[inline(always)]
pub fn add_into(a: &[f32], b: &[f32], c: &mut [f32]) {
    add_into_with(Backend::detect(), a, b, c)
}

/// Adds `a` and `b` into `c` with a specific backend.
///
/// An unavailable backend degrades to [`Backend::Scalar`].
///
/// # Panics
///
/// Panics if the three slices do not all have the same length.
pub fn add_into_with(backend: Backend, a: &[f32], b: &[f32], c: &mut [f32]) {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");
    assert_eq!(a.len(), c.len(), "Output must have the same length as the inputs");

    let backend = if backend.is_available() {
        backend
    } else {
        debug!("{backend} backend unavailable, using scalar");
        Backend::Scalar
    };

    dispatch(backend, a, b, c)
}

/// Checked form of [`add_into`].
pub fn try_add_into(a: &[f32], b: &[f32], c: &mut [f32]) -> Result<()> {
    if a.len() != b.len() {
        return Err(error::length_mismatch(a.len(), b.len()));
    }
    if c.len() != a.len() {
        return Err(error::output_length(a.len(), c.len()));
    }

    dispatch(Backend::detect(), a, b, c);
    Ok(())
}

/// Checked form of [`SimdAdd::simd_add`].
pub fn try_add(a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    let mut c = vec![0.0; a.len()];
    try_add_into(a, b, &mut c)?;
    Ok(c)
}

#[inline(always)]
fn simd_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    let mut c = vec![0.0; a.len()];
    dispatch(Backend::detect(), a, b, &mut c);
    c
}

fn parallel_simd_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    let size = a.len();

    if size < PARALLEL_THRESHOLD {
        debug!("{size} elements is below the parallel threshold, adding serially");
        return simd_add(a, b);
    }

    let backend = Backend::detect();
    let mut c = vec![0.0; size];

    c.par_chunks_mut(PARALLEL_CHUNK)
        .zip(a.par_chunks(PARALLEL_CHUNK))
        .zip(b.par_chunks(PARALLEL_CHUNK))
        .for_each(|((c_chunk, a_chunk), b_chunk)| {
            dispatch(backend, a_chunk, b_chunk, c_chunk);
        });

    c
}

impl<'b> SimdAdd<&'b [f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_add(self, rhs: &'b [f32]) -> Self::Output {
        simd_add(self, rhs)
    }

    #[inline(always)]
    fn par_simd_add(self, rhs: &'b [f32]) -> Self::Output {
        parallel_simd_add(self, rhs)
    }

    #[inline(always)]
    fn scalar_add(self, rhs: &'b [f32]) -> Self::Output {
        scalar::scalar_add(self, rhs)
    }
}

impl SimdAdd<Vec<f32>> for Vec<f32> {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_add(self, rhs: Vec<f32>) -> Self::Output {
        simd_add(&self, &rhs)
    }

    #[inline(always)]
    fn par_simd_add(self, rhs: Vec<f32>) -> Self::Output {
        parallel_simd_add(&self, &rhs)
    }

    #[inline(always)]
    fn scalar_add(self, rhs: Vec<f32>) -> Self::Output {
        scalar::scalar_add(&self, &rhs)
    }
}
