#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::Add;
use std::ptr;

use crate::simd::traits::{Alignment, SimdLoad, SimdStore};

pub(crate) const NEON_ALIGNMENT: usize = 16;

pub(crate) const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// Number of valid elements in the vector (1-4)
    pub size: usize,
    pub elements: float32x4_t,
}

impl Alignment<f32> for F32x4 {
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        (ptr as usize) % NEON_ALIGNMENT == 0
    }
}

impl From<&[f32]> for F32x4 {
    fn from(slice: &[f32]) -> Self {
        debug_assert!(!slice.is_empty(), "slice can't be empty");

        // Shorter slices are zero-padded into a full register
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
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");

        // vld1q_f32 has no alignment requirement
        Self::load_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self::Output {
        Self::load_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self::Output {
        Self {
            elements: vld1q_f32(ptr),
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
            elements: vld1q_f32(buffer.as_ptr()),
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
            std::cmp::Ordering::Equal => self.store_unaligned_at(ptr),
            std::cmp::Ordering::Greater => unreachable!("Size cannot exceed LANE_COUNT"),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        self.store_unaligned_at(ptr)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f32) {
        debug_assert!(
            self.size > 0 && self.size < LANE_COUNT,
            "Size must be in 1..{LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mut buffer = [0.0f32; LANE_COUNT];
        vst1q_f32(buffer.as_mut_ptr(), self.elements);
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
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_all_elements(v: F32x4) -> [f32; LANE_COUNT] {
        let mut result = [0.0f32; LANE_COUNT];
        unsafe { vst1q_f32(result.as_mut_ptr(), v.elements) };
        result
    }

    #[test]
    fn test_new_full_slice() {
        let v = F32x4::from(&[1.0f32, 2.0, 3.0, 4.0][..]);
        assert_eq!(v.size, LANE_COUNT);
        assert_eq!(get_all_elements(v), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_new_partial_slice() {
        let v = F32x4::from(&[1.0f32, 2.0, 3.0][..]);
        assert_eq!(v.size, 3);
        assert_eq!(get_all_elements(v), [1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_partial_store_leaves_tail_untouched() {
        let v = F32x4::from(&[5.0f32][..]);
        let mut dst = [-1.0f32; LANE_COUNT];
        unsafe { v.store_at(dst.as_mut_ptr()) };
        assert_eq!(dst, [5.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_add() {
        let a = F32x4::from(&[1.0f32, 2.0, 3.0, 4.0][..]);
        let b = F32x4::from(&[8.0f32, 7.0, 6.0, 5.0][..]);
        assert_eq!(get_all_elements(a + b), [9.0; LANE_COUNT]);
    }
}
