//! Portable ReLU kernel and the elementwise reference definition.
//!
//! The scalar kernel mirrors the SIMD variants (4-element main loop, 2-then-1
//! tail) but reads only the `n` bytes it was given.

use crate::params::ReluParams;

const LANE_COUNT: usize = 4;

/// `max(v, 0)` with the `maxps` operand rule: `v` is kept only when it compares
/// strictly greater than zero. `-0.0`, NaN and negative values all give `+0.0`.
///
/// Unlike `f32::max`, the sign of a zero result is fixed.
#[inline(always)]
pub fn relu_scalar(v: f32) -> f32 {
    if v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Scalar ReLU micro-kernel with the same calling convention as the SIMD ones.
///
/// # Safety
///
/// - `n` is nonzero and a multiple of `size_of::<f32>()`.
/// - `x` is readable and `y` writable for `n` bytes.
/// - `x` and `y` are either disjoint or identical.
#[inline]
pub unsafe fn f32_relu_ukernel_scalar_x4(
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

    let mut count = n / std::mem::size_of::<f32>();
    let mut x = x;
    let mut y = y;

    while count >= LANE_COUNT {
        let v0 = relu_scalar(*x);
        let v1 = relu_scalar(*x.add(1));
        let v2 = relu_scalar(*x.add(2));
        let v3 = relu_scalar(*x.add(3));
        x = x.add(LANE_COUNT);

        *y = v0;
        *y.add(1) = v1;
        *y.add(2) = v2;
        *y.add(3) = v3;
        y = y.add(LANE_COUNT);

        count -= LANE_COUNT;
    }

    if count & 2 != 0 {
        let v0 = relu_scalar(*x);
        let v1 = relu_scalar(*x.add(1));
        x = x.add(2);

        *y = v0;
        *y.add(1) = v1;
        y = y.add(2);
    }
    if count & 1 != 0 {
        *y = relu_scalar(*x);
    }
}
