//! NEON ReLU micro-kernel, 4 lanes per step.

use crate::{
    params::ReluParams,
    simd::{
        neon::f32x4::{F32x4, LANE_COUNT},
        SimdLoad, SimdMax, SimdStore,
    },
};

const BLOCK_BYTES: usize = LANE_COUNT * std::mem::size_of::<f32>();

/// NEON ReLU micro-kernel: `y[i] = max(x[i], 0)` over `n` bytes, 4 lanes per step.
///
/// # Safety
///
/// - `n` is nonzero and a multiple of `size_of::<f32>()`.
/// - `x` is readable for `n` bytes rounded up to a multiple of 16.
/// - `y` is writable for `n` bytes.
/// - `x` and `y` are either disjoint or identical.
#[inline]
#[target_feature(enable = "neon")]
pub unsafe fn f32_relu_ukernel_neon_x4(
    n: usize,
    x: *const f32,
    y: *mut f32,
    _params: &ReluParams,
) {
    debug_assert!(n != 0, "n must be non-zero");
    debug_assert!(
        n % std::mem::size_of::<f32>() == 0,
        "n must be a multiple of 4"
    );
    debug_assert!(!x.is_null(), "x pointer must not be null");
    debug_assert!(!y.is_null(), "y pointer must not be null");

    let mut n = n;
    let mut x = x;
    let mut y = y;

    let vzero = F32x4::zero();

    while n >= BLOCK_BYTES {
        let vacc = F32x4::load_unaligned(x).max_elements(vzero);
        x = x.add(LANE_COUNT);

        vacc.store_unaligned_at(y);
        y = y.add(LANE_COUNT);

        n -= BLOCK_BYTES;
    }

    if n != 0 {
        let vacc = F32x4::load_unaligned(x).max_elements(vzero);
        vacc.store_tail_at(y, n / std::mem::size_of::<f32>());
    }
}
