use crate::simd::{
    neon::f32x4::{self, F32x4},
    traits::{SimdLoad, SimdStore},
};

/// # Safety
///
/// The CPU must support NEON, and the three slices must have the same length.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn add_into(a: &[f32], b: &[f32], c: &mut [f32]) {
    debug_assert!(a.len() == b.len() && a.len() == c.len());

    let size = c.len();

    let step = f32x4::LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    let (a, b, c) = (a.as_ptr(), b.as_ptr(), c.as_mut_ptr());

    for i in (0..nb_lanes).step_by(step) {
        add_block(a.add(i), b.add(i), c.add(i));
    }

    if rem_lanes > 0 {
        add_partial_block(
            a.add(nb_lanes),
            b.add(nb_lanes),
            c.add(nb_lanes),
            rem_lanes, // number of remaining incomplete lanes
        );
    }
}

#[inline(always)]
unsafe fn add_block(a: *const f32, b: *const f32, c: *mut f32) {
    let a_chunk_simd = F32x4::load(a, f32x4::LANE_COUNT);
    let b_chunk_simd = F32x4::load(b, f32x4::LANE_COUNT);
    (a_chunk_simd + b_chunk_simd).store_at(c);
}

#[inline(always)]
unsafe fn add_partial_block(a: *const f32, b: *const f32, c: *mut f32, size: usize) {
    let a_chunk_simd = F32x4::load_partial(a, size);
    let b_chunk_simd = F32x4::load_partial(b, size);
    (a_chunk_simd + b_chunk_simd).store_at_partial(c);
}
