use crate::simd::sse::f32x4::{self, F32x4};
use crate::simd::traits::{SimdLoad, SimdStore};

/// Adds `a` and `b` into `c` four lanes at a time.
///
/// # Safety
///
/// The CPU must support SSE, and the three slices must have the same length.
#[target_feature(enable = "sse")]
pub(crate) unsafe fn add_into(a: &[f32], b: &[f32], c: &mut [f32]) {
    debug_assert!(a.len() == b.len() && a.len() == c.len());

    let size = c.len();
    let step = f32x4::LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    let (a, b, c) = (a.as_ptr(), b.as_ptr(), c.as_mut_ptr());

    for i in (0..nb_lanes).step_by(step) {
        let sum = F32x4::load(a.add(i), step) + F32x4::load(b.add(i), step);
        sum.store_at(c.add(i));
    }

    if rem_lanes > 0 {
        let sum = F32x4::load_partial(a.add(nb_lanes), rem_lanes)
            + F32x4::load_partial(b.add(nb_lanes), rem_lanes);
        sum.store_at_partial(c.add(nb_lanes));
    }
}
