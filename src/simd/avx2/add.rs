use crate::simd::avx2::f32x8::{self, F32x8};
use crate::simd::traits::{SimdLoad, SimdStore};

/// Adds `a` and `b` into `c` eight lanes at a time.
///
/// The trailing `len % 8` elements go through one masked lane group.
///
/// # Safety
///
/// The CPU must support AVX2, and the three slices must have the same length.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn add_into(a: &[f32], b: &[f32], c: &mut [f32]) {
    debug_assert!(a.len() == b.len() && a.len() == c.len());

    let size = c.len();
    let step = f32x8::LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    let (a, b, c) = (a.as_ptr(), b.as_ptr(), c.as_mut_ptr());

    for i in (0..nb_lanes).step_by(step) {
        add_block(a.add(i), b.add(i), c.add(i));
    }

    if rem_lanes > 0 {
        add_partial_block(a.add(nb_lanes), b.add(nb_lanes), c.add(nb_lanes), rem_lanes);
    }
}

#[inline(always)]
unsafe fn add_block(a: *const f32, b: *const f32, c: *mut f32) {
    let a_chunk = F32x8::load(a, f32x8::LANE_COUNT);
    let b_chunk = F32x8::load(b, f32x8::LANE_COUNT);
    (a_chunk + b_chunk).store_at(c);
}

#[inline(always)]
unsafe fn add_partial_block(a: *const f32, b: *const f32, c: *mut f32, size: usize) {
    let a_chunk = F32x8::load_partial(a, size);
    let b_chunk = F32x8::load_partial(b, size);
    (a_chunk + b_chunk).store_at_partial(c);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::scalar;

    #[test]
    fn test_add_into_matches_scalar_for_all_tail_sizes() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }

        for len in 0..=35 {
            let a: Vec<f32> = (0..len).map(|i| i as f32 * 0.25).collect();
            let b: Vec<f32> = (0..len).map(|i| 100.0 - i as f32).collect();

            let mut expected = vec![0.0; len];
            scalar::add_into(&a, &b, &mut expected);

            let mut c = vec![0.0; len];
            unsafe { add_into(&a, &b, &mut c) };

            assert_eq!(c, expected, "len {len}");
        }
    }

    #[test]
    fn test_add_into_unaligned_subslices() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }

        let a: Vec<f32> = (0..40).map(|i| i as f32).collect();
        let b: Vec<f32> = (0..40).map(|i| (40 - i) as f32).collect();
        let mut c = vec![-1.0f32; 40];

        unsafe { add_into(&a[1..20], &b[3..22], &mut c[5..24]) };

        assert!(c[..5].iter().all(|&x| x == -1.0));
        for (k, &v) in c[5..24].iter().enumerate() {
            assert_eq!(v, a[1 + k] + b[3 + k]);
        }
        assert!(c[24..].iter().all(|&x| x == -1.0));
    }
}
