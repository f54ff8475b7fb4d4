/// Full-width loads into a SIMD register.
pub trait SimdLoad<T> {
    type Output;

    /// Loads `LANE_COUNT` elements from memory with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and readable for `LANE_COUNT` elements.
    unsafe fn load_unaligned(ptr: *const T) -> Self::Output;
}

/// Full-width and partial stores out of a SIMD register.
pub trait SimdStore<T> {
    /// Stores all `LANE_COUNT` elements with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and writable for `LANE_COUNT` elements.
    unsafe fn store_unaligned_at(&self, ptr: *mut T);

    /// Stores the first `count` lanes, `0 < count < LANE_COUNT`.
    ///
    /// The store is decomposed along the bits of `count`, widest chunk first,
    /// shifting the remaining lanes down after each partial store. Each lane is
    /// written at most once and nothing past `ptr + count` is touched.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and writable for `count` elements.
    unsafe fn store_tail_at(&self, ptr: *mut T, count: usize);
}

/// Lanewise maximum with the x86 `maxps` operand rule.
pub trait SimdMax {
    /// A vector with every lane set to `+0.0`.
    ///
    /// # Safety
    ///
    /// The running CPU must support the instruction set of the implementing type.
    unsafe fn zero() -> Self;

    /// Lanewise `max(self, rhs)`.
    ///
    /// A lane of `self` is kept only when it compares strictly greater than the
    /// matching lane of `rhs`; otherwise the `rhs` lane is returned. Against
    /// [`SimdMax::zero`] this maps `-0.0` and every NaN, quiet or signaling, to
    /// `+0.0`.
    ///
    /// # Safety
    ///
    /// The running CPU must support the instruction set of the implementing type.
    unsafe fn max_elements(&self, rhs: Self) -> Self;
}
