//! SSE ReLU micro-kernel, 4 lanes per step.

use crate::{
    params::ReluParams,
    simd::{
        sse::f32x4::{F32x4, LANE_COUNT},
        SimdLoad, SimdMax, SimdStore,
    },
};

const BLOCK_BYTES: usize = LANE_COUNT * std::mem::size_of::<f32>();

/// Computes `y[i] = max(x[i], 0)` over `n` bytes of packed f32.
///
/// Full 4-lane blocks go through the main loop. A remainder of 1-3 elements is
/// handled by one more 4-lane load followed by a 2-lane and/or 1-lane store.
///
/// # Safety
///
/// - `n` is nonzero and a multiple of `size_of::<f32>()`.
/// - `x` is readable for `n` bytes rounded up to a multiple of 16: the tail
///   loads a full vector past the last valid element.
/// - `y` is writable for exactly `n` bytes; nothing beyond is written.
/// - `x` and `y` are either disjoint or identical.
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn f32_relu_ukernel_sse_x4(
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::relu_scalar;

    /// Input block padded to a multiple of 4 lanes so the tail load stays in bounds.
    fn padded(values: &[f32]) -> Vec<f32> {
        let mut padded = values.to_vec();
        padded.resize(values.len().next_multiple_of(LANE_COUNT), -7.0);
        padded
    }

    fn run(values: &[f32]) -> Vec<f32> {
        let x = padded(values);
        let mut y = vec![f32::MAX; x.len()];
        unsafe {
            f32_relu_ukernel_sse_x4(
                values.len() * 4,
                x.as_ptr(),
                y.as_mut_ptr(),
                &ReluParams::default(),
            )
        };

        for (i, e) in y.iter().enumerate().skip(values.len()) {
            assert_eq!(*e, f32::MAX, "Overwrite past the end at index {i}");
        }
        y.truncate(values.len());
        y
    }

    #[test]
    fn test_full_block() {
        let y = run(&[-1.0, 0.0, 3.5, -0.0]);
        assert_eq!(y, [0.0, 0.0, 3.5, 0.0]);
        assert_eq!(y[3].to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn test_one_element_tail() {
        assert_eq!(run(&[1.0, -2.0, 3.0, -4.0, 5.0]), [1.0, 0.0, 3.0, 0.0, 5.0]);
    }

    #[test]
    fn test_two_then_one_tail() {
        let y = run(&[1.0, 2.0, 3.0, 4.0, -5.0, 6.0, 7.0]);
        assert_eq!(y, [1.0, 2.0, 3.0, 4.0, 0.0, 6.0, 7.0]);
    }

    #[test]
    fn test_shorter_than_one_vector() {
        for len in 1..LANE_COUNT {
            let values: Vec<f32> = (0..len).map(|i| i as f32 - 1.0).collect();
            let expected: Vec<f32> = values.iter().copied().map(relu_scalar).collect();
            assert_eq!(run(&values), expected, "len {len}");
        }
    }

    #[test]
    fn test_in_place() {
        let values = [-3.0f32, 2.0, -1.0, 0.5, -0.25, 8.0];
        let mut buffer = padded(&values);
        let ptr = buffer.as_mut_ptr();
        unsafe { f32_relu_ukernel_sse_x4(values.len() * 4, ptr, ptr, &ReluParams::default()) };

        assert_eq!(&buffer[..values.len()], run(&values).as_slice());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "n must be a multiple of 4")]
    fn test_unaligned_byte_count_panic() {
        let x = [1.0f32; 4];
        let mut y = [0.0f32; 4];
        unsafe { f32_relu_ukernel_sse_x4(6, x.as_ptr(), y.as_mut_ptr(), &ReluParams::default()) };
    }
}
