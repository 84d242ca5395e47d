//! AVX2 8-lane f32 vector.
//!
//! `F32x8` wraps an `__m256` register together with the number of valid
//! lanes, so a trailing group shorter than 8 elements can be loaded and
//! stored with masked instructions without touching memory past the slice.
//!
//! The methods are `#[inline(always)]` and carry no `target_feature` of their
//! own; they are meant to be inlined into a caller compiled with
//! `#[target_feature(enable = "avx2")]`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::Add;

use crate::simd::traits::{Alignment, SimdLoad, SimdStore};

/// AVX2 memory alignment requirement in bytes.
pub(crate) const AVX_ALIGNMENT: usize = 32;

/// Number of f32 elements in a 256-bit register.
pub(crate) const LANE_COUNT: usize = 8;

/// AVX2 SIMD vector containing 8 packed f32 values.
///
/// Loads, stores and `Add` execute AVX instructions unconditionally. Only
/// use it from code that has already confirmed AVX2 support.
///
/// # Usage
///
/// ```rust,ignore
/// // inside a `#[target_feature(enable = "avx2")]` function
/// let a = F32x8::from(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0][..]);
/// let b = F32x8::from(&[8.0f32, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0][..]);
/// let sum = a + b; // [9.0; 8]
/// ```
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// Number of valid elements in the vector (1-8)
    pub size: usize,
    /// AVX2 256-bit vector register containing 8 packed f32 values
    pub elements: __m256,
}

impl Alignment<f32> for F32x8 {
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        (ptr as usize) % AVX_ALIGNMENT == 0
    }
}

impl From<&[f32]> for F32x8 {
    /// Loads up to 8 elements from a slice.
    ///
    /// Slices of 8 or more elements load the first 8; shorter slices use a
    /// masked partial load.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the slice is empty.
    fn from(slice: &[f32]) -> Self {
        debug_assert!(!slice.is_empty(), "slice can't be empty");

        let size = slice.len();

        match size.cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => unsafe { Self::load_partial(slice.as_ptr(), size) },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                Self::load(slice.as_ptr(), LANE_COUNT)
            },
        }
    }
}

/// Mask selecting the first `size` lanes (1-7).
#[inline(always)]
unsafe fn partial_mask(size: usize) -> __m256i {
    match size {
        1 => _mm256_setr_epi32(-1, 0, 0, 0, 0, 0, 0, 0),
        2 => _mm256_setr_epi32(-1, -1, 0, 0, 0, 0, 0, 0),
        3 => _mm256_setr_epi32(-1, -1, -1, 0, 0, 0, 0, 0),
        4 => _mm256_setr_epi32(-1, -1, -1, -1, 0, 0, 0, 0),
        5 => _mm256_setr_epi32(-1, -1, -1, -1, -1, 0, 0, 0),
        6 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, 0, 0),
        7 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, -1, 0),
        _ => unreachable!("Size must be < {LANE_COUNT}"),
    }
}

impl SimdLoad<f32> for F32x8 {
    type Output = Self;

    #[inline(always)]
    unsafe fn load(ptr: *const f32, size: usize) -> Self::Output {
        debug_assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F32x8::is_aligned(ptr) {
            true => Self::load_aligned(ptr),
            false => Self::load_unaligned(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self::Output {
        Self {
            elements: _mm256_load_ps(ptr),
            size: LANE_COUNT,
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self::Output {
        Self {
            elements: _mm256_loadu_ps(ptr),
            size: LANE_COUNT,
        }
    }

    /// Uses `_mm256_maskload_ps`; masked-off lanes read as zero and their
    /// addresses are never dereferenced.
    #[inline(always)]
    unsafe fn load_partial(ptr: *const f32, size: usize) -> Self::Output {
        debug_assert!(size > 0 && size < LANE_COUNT, "Size must be in 1..{LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm256_maskload_ps(ptr, partial_mask(size)),
            size,
        }
    }
}

impl SimdStore<f32> for F32x8 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(self.size <= LANE_COUNT, "Size must be <= {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match self.size.cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => self.store_at_partial(ptr),
            std::cmp::Ordering::Equal => match F32x8::is_aligned(ptr) {
                true => self.store_aligned_at(ptr),
                false => self.store_unaligned_at(ptr),
            },
            std::cmp::Ordering::Greater => unreachable!("Size cannot exceed LANE_COUNT"),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        _mm256_store_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        _mm256_storeu_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f32) {
        debug_assert!(
            self.size > 0 && self.size < LANE_COUNT,
            "Size must be in 1..{LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm256_maskstore_ps(ptr, partial_mask(self.size), self.elements);
    }
}

/// Lanewise addition with `_mm256_add_ps`.
///
/// # Panics
///
/// Panics in debug builds if the operands have different sizes.
impl Add for F32x8 {
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
            elements: unsafe { _mm256_add_ps(self.elements, rhs.elements) },
        }
    }
}
