//! AVX 8-lane f32 SIMD vector implementation.
//!
//! `F32x8` wraps a 256-bit `__m256` register. Max and full-width memory access
//! only need AVX (not AVX2). Partial stores split the register into its 128-bit
//! halves and reuse the SSE store forms:
//!
//! | Bit of `count` | Store | Then |
//! |----------------|-------|------|
//! | 4 | `_mm_storeu_ps` of the low half | continue with the high half |
//! | 2 | `_mm_storel_epi64` (low 64 bits) | `_mm_movehl_ps` |
//! | 1 | `_mm_store_ss` | done |

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::{SimdLoad, SimdMax, SimdStore};

/// Number of f32 elements that fit in an AVX 256-bit vector.
pub const LANE_COUNT: usize = 8;

/// AVX SIMD vector containing 8 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// AVX 256-bit vector register containing 8 packed f32 values
    pub elements: __m256,
}

impl SimdLoad<f32> for F32x8 {
    type Output = Self;

    /// Loads 8 elements from unaligned memory with `_mm256_loadu_ps`.
    ///
    /// # Safety
    ///
    /// Pointer must point to at least 8 readable f32 values.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm256_loadu_ps(ptr),
        }
    }
}

impl SimdStore<f32> for F32x8 {
    /// Stores 8 elements to unaligned memory with `_mm256_storeu_ps`.
    ///
    /// # Safety
    ///
    /// Pointer must point to at least 8 writable f32 values.
    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm256_storeu_ps(ptr, self.elements)
    }

    /// Stores the first `count` (1-7) lanes as a 4/2/1 sequence.
    ///
    /// # Safety
    ///
    /// Pointer must point to at least `count` writable f32 values.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `count` is 0 or >= 8.
    #[inline(always)]
    unsafe fn store_tail_at(&self, ptr: *mut f32, count: usize) {
        debug_assert!(
            count > 0 && count < LANE_COUNT,
            "Count must be in 1..{LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mut ptr = ptr;
        let mut vacc = _mm256_castps256_ps128(self.elements);

        if count & 4 != 0 {
            _mm_storeu_ps(ptr, vacc);
            vacc = _mm256_extractf128_ps::<1>(self.elements);
            ptr = ptr.add(4);
        }
        if count & 2 != 0 {
            _mm_storel_epi64(ptr as *mut __m128i, _mm_castps_si128(vacc));
            vacc = _mm_movehl_ps(vacc, vacc);
            ptr = ptr.add(2);
        }
        if count & 1 != 0 {
            _mm_store_ss(ptr, vacc);
        }
    }
}

impl SimdMax for F32x8 {
    #[inline(always)]
    unsafe fn zero() -> Self {
        Self {
            elements: _mm256_setzero_ps(),
        }
    }

    /// Uses `_mm256_max_ps`, which keeps the `maxps` rule of returning the
    /// second operand when the comparison is false or unordered.
    #[inline(always)]
    unsafe fn max_elements(&self, rhs: Self) -> Self {
        Self {
            elements: _mm256_max_ps(self.elements, rhs.elements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to extract vector elements for comparison in tests
    fn extract_elements(vec: &F32x8) -> [f32; 8] {
        let mut result = [0.0f32; 8];
        unsafe { _mm256_storeu_ps(result.as_mut_ptr(), vec.elements) };
        result
    }

    mod simd_store_tests {
        use super::*;

        #[test]
        fn test_store_unaligned() {
            let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
            let vec = unsafe { F32x8::load_unaligned(data.as_ptr()) };

            let mut buffer = [0.0f32; 10];
            unsafe { vec.store_unaligned_at(buffer.as_mut_ptr().add(1)) };

            assert_eq!(buffer[0], 0.0);
            assert_eq!(&buffer[1..9], &data);
            assert_eq!(buffer[9], 0.0);
        }

        #[test]
        fn test_store_tail_each_count() {
            let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
            let vec = unsafe { F32x8::load_unaligned(data.as_ptr()) };

            for count in 1..LANE_COUNT {
                let mut buffer = [f32::MAX; 8];
                unsafe { vec.store_tail_at(buffer.as_mut_ptr(), count) };

                for (i, e) in buffer.iter().enumerate().take(count) {
                    assert_eq!(*e, data[i], "Mismatch at index {i} for count {count}");
                }
                for (i, e) in buffer.iter().enumerate().skip(count) {
                    assert_eq!(*e, f32::MAX, "Overwrite at index {i} for count {count}");
                }
            }
        }
    }

    mod simd_max_tests {
        use super::*;

        #[test]
        fn test_max_against_zero() {
            let data = [-1.0f32, 0.0, 3.5, -0.0, f32::NAN, -f32::NAN, f32::INFINITY, -1e-30];
            let vec = unsafe { F32x8::load_unaligned(data.as_ptr()).max_elements(F32x8::zero()) };
            let out = extract_elements(&vec);

            assert_eq!(&out[..4], &[0.0, 0.0, 3.5, 0.0]);
            assert_eq!(out[3].to_bits(), 0.0f32.to_bits());
            assert_eq!(out[4].to_bits(), 0.0f32.to_bits());
            assert_eq!(out[5].to_bits(), 0.0f32.to_bits());
            assert_eq!(out[6], f32::INFINITY);
            assert_eq!(out[7].to_bits(), 0.0f32.to_bits());
        }

        #[test]
        fn test_max_against_zero_signaling_nan() {
            let mut data = [1.0f32; 8];
            data[1] = f32::from_bits(0x7f80_0001);
            data[6] = f32::from_bits(0xff80_0001);
            let vec = unsafe { F32x8::load_unaligned(data.as_ptr()).max_elements(F32x8::zero()) };
            let out = extract_elements(&vec);

            assert_eq!(out[1].to_bits(), 0.0f32.to_bits());
            assert_eq!(out[6].to_bits(), 0.0f32.to_bits());
            assert_eq!(out[0], 1.0);
            assert_eq!(out[7], 1.0);
        }
    }

    #[cfg(debug_assertions)]
    mod debug_assertion_tests {
        use super::*;

        #[test]
        #[should_panic(expected = "Count must be in 1..8")]
        fn test_store_tail_zero_count_panic() {
            let mut buffer = [0.0f32; 8];
            unsafe { F32x8::zero().store_tail_at(buffer.as_mut_ptr(), 0) };
        }
    }
}
