//! SSE 4-lane f32 vector.
//!
//! SSE has no masked load/store for `__m128`, so partial lane groups are
//! staged through a zero-filled stack buffer.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::Add;
use std::ptr;

use crate::simd::traits::{Alignment, SimdLoad, SimdStore};

pub(crate) const SSE_ALIGNMENT: usize = 16;

pub(crate) const LANE_COUNT: usize = 4;

/// SSE SIMD vector containing 4 packed f32 values.
///
/// Executes SSE instructions unconditionally; reached only through the adder
/// after feature detection.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// Number of valid elements in the vector (1-4)
    pub size: usize,
    pub elements: __m128,
}

impl Alignment<f32> for F32x4 {
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        (ptr as usize) % SSE_ALIGNMENT == 0
    }
}

impl From<&[f32]> for F32x4 {
    fn from(slice: &[f32]) -> Self {
        debug_assert!(!slice.is_empty(), "slice can't be empty");

        match slice.len().cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => unsafe { Self::load_partial(slice.as_ptr(), slice.len()) },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                Self::load(slice.as_ptr(), LANE_COUNT)
            },
        }
    }
}

impl SimdLoad<f32> for F32x4 {
    type Output = Self;

    #[inline(always)]
    unsafe fn load(ptr: *const f32, size: usize) -> Self::Output {
        debug_assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F32x4::is_aligned(ptr) {
            true => Self::load_aligned(ptr),
            false => Self::load_unaligned(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self::Output {
        Self {
            elements: _mm_load_ps(ptr),
            size: LANE_COUNT,
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self::Output {
        Self {
            elements: _mm_loadu_ps(ptr),
            size: LANE_COUNT,
        }
    }

    #[inline(always)]
    unsafe fn load_partial(ptr: *const f32, size: usize) -> Self::Output {
        debug_assert!(size > 0 && size < LANE_COUNT, "Size must be in 1..{LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mut buffer = [0.0f32; LANE_COUNT];
        ptr::copy_nonoverlapping(ptr, buffer.as_mut_ptr(), size);

        Self {
            elements: _mm_loadu_ps(buffer.as_ptr()),
            size,
        }
    }
}

impl SimdStore<f32> for F32x4 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(self.size <= LANE_COUNT, "Size must be <= {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match self.size.cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => self.store_at_partial(ptr),
            std::cmp::Ordering::Equal => match F32x4::is_aligned(ptr) {
                true => self.store_aligned_at(ptr),
                false => self.store_unaligned_at(ptr),
            },
            std::cmp::Ordering::Greater => unreachable!("Size cannot exceed LANE_COUNT"),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        _mm_store_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f32) {
        debug_assert!(
            self.size > 0 && self.size < LANE_COUNT,
            "Size must be in 1..{LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mut buffer = [0.0f32; LANE_COUNT];
        _mm_storeu_ps(buffer.as_mut_ptr(), self.elements);
        ptr::copy_nonoverlapping(buffer.as_ptr(), ptr, self.size);
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        debug_assert!(
            self.size == rhs.size,
            "Operands must have the same size (got {} and {})",
            self.size,
            rhs.size
        );

        Self {
            size: self.size,
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}
