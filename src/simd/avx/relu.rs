//! AVX ReLU micro-kernel, 8 lanes per step.

use crate::{
    params::ReluParams,
    simd::{
        avx::f32x8::{F32x8, LANE_COUNT},
        SimdLoad, SimdMax, SimdStore,
    },
};

const BLOCK_BYTES: usize = LANE_COUNT * std::mem::size_of::<f32>();

/// AVX ReLU micro-kernel: `y[i] = max(x[i], 0)` over `n` bytes, 8 lanes per step.
///
/// The tail (1-7 elements) loads one full 8-lane vector and stores it as a
/// 4/2/1 sequence.
///
/// # Safety
///
/// - The CPU supports AVX.
/// - `n` is nonzero and a multiple of `size_of::<f32>()`.
/// - `x` is readable for `n` bytes rounded up to a multiple of 32.
/// - `y` is writable for `n` bytes.
/// - `x` and `y` are either disjoint or identical.
#[inline]
#[target_feature(enable = "avx,sse2")]
pub unsafe fn f32_relu_ukernel_avx_x8(
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

    let vzero = F32x8::zero();

    while n >= BLOCK_BYTES {
        let vacc = F32x8::load_unaligned(x).max_elements(vzero);
        x = x.add(LANE_COUNT);

        vacc.store_unaligned_at(y);
        y = y.add(LANE_COUNT);

        n -= BLOCK_BYTES;
    }

    if n != 0 {
        let vacc = F32x8::load_unaligned(x).max_elements(vzero);
        vacc.store_tail_at(y, n / std::mem::size_of::<f32>());
    }
}
