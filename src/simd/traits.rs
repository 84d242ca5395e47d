//! Traits shared by the lane types and the slice-level adders.

/// Pointer alignment check for a lane type's preferred boundary.
pub trait Alignment<T> {
    fn is_aligned(ptr: *const T) -> bool;
}

/// Loading a lane group from memory.
pub trait SimdLoad<T> {
    type Output;

    /// Loads a full lane group, picking the aligned or unaligned path from
    /// the pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `size` elements and `size` must equal
    /// the lane count.
    unsafe fn load(ptr: *const T, size: usize) -> Self::Output;

    /// # Safety
    ///
    /// `ptr` must be aligned to the lane type's boundary and valid for reads
    /// of a full lane group.
    unsafe fn load_aligned(ptr: *const T) -> Self::Output;

    /// # Safety
    ///
    /// `ptr` must be valid for reads of a full lane group.
    unsafe fn load_unaligned(ptr: *const T) -> Self::Output;

    /// Loads fewer elements than the lane count. Unloaded lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `size` elements and `size` must be
    /// below the lane count.
    unsafe fn load_partial(ptr: *const T, size: usize) -> Self::Output;
}

/// Storing a lane group to memory.
pub trait SimdStore<T> {
    /// Stores the valid lanes, picking partial, aligned or unaligned stores.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `self.size` elements.
    unsafe fn store_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must be aligned to the lane type's boundary and valid for writes
    /// of a full lane group.
    unsafe fn store_aligned_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must be valid for writes of a full lane group.
    unsafe fn store_unaligned_at(&self, ptr: *mut T);

    /// Writes only the valid lanes; memory past them is left untouched.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `self.size` elements.
    unsafe fn store_at_partial(&self, ptr: *mut T);
}

/// Element-wise addition of two equal-length sequences.
///
/// Every method panics if the operands differ in length.
pub trait SimdAdd<Rhs = Self> {
    type Output;

    /// Adds using the widest lane type available on this machine.
    fn simd_add(self, rhs: Rhs) -> Self::Output;

    /// Adds disjoint chunks on the rayon pool, each chunk vectorized.
    fn par_simd_add(self, rhs: Rhs) -> Self::Output;

    /// Plain iterator addition, the baseline for the other two.
    fn scalar_add(self, rhs: Rhs) -> Self::Output;
}
