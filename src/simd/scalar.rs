/// Element-wise addition with plain iterators.
///
/// # Panics
///
/// Panics if `a` and `b` have different lengths.
#[inline(always)]
pub fn scalar_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// One element per step; the path taken when no lane module is available.
#[inline(always)]
pub(crate) fn add_into(a: &[f32], b: &[f32], c: &mut [f32]) {
    debug_assert!(a.len() == b.len() && a.len() == c.len());

    for ((c, x), y) in c.iter_mut().zip(a.iter()).zip(b.iter()) {
        *c = x + y;
    }
}
