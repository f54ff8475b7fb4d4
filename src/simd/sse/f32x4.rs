//! SSE 4-lane f32 SIMD vector.
//!
//! `F32x4` wraps a 128-bit `__m128` register. Full-width loads and stores use the
//! unaligned SSE forms; the 2-lane partial store goes through the low 64 bits of
//! the register with the SSE2 `movq` store, the 1-lane store through `movss`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::{SimdLoad, SimdMax, SimdStore};

/// Number of f32 elements in a 128-bit SSE register.
pub const LANE_COUNT: usize = 4;

/// SSE SIMD vector containing 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    pub elements: __m128,
}

impl SimdLoad<f32> for F32x4 {
    type Output = Self;

    /// Loads 4 elements with `_mm_loadu_ps`.
    ///
    /// # Safety
    ///
    /// `ptr` must be readable for 4 f32 values.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm_loadu_ps(ptr),
        }
    }
}

impl SimdStore<f32> for F32x4 {
    /// Stores 4 elements with `_mm_storeu_ps`.
    ///
    /// # Safety
    ///
    /// `ptr` must be writable for 4 f32 values.
    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm_storeu_ps(ptr, self.elements)
    }

    /// Stores the first `count` (1-3) lanes: 2 lanes if bit 1 is set, then 1 lane
    /// if bit 0 is set.
    ///
    /// # Safety
    ///
    /// `ptr` must be writable for `count` f32 values.
    #[inline(always)]
    unsafe fn store_tail_at(&self, ptr: *mut f32, count: usize) {
        debug_assert!(
            count > 0 && count < LANE_COUNT,
            "Count must be in 1..{LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mut ptr = ptr;
        let mut vacc = self.elements;

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

impl SimdMax for F32x4 {
    #[inline(always)]
    unsafe fn zero() -> Self {
        Self {
            elements: _mm_setzero_ps(),
        }
    }

    /// `maxps` returns the second operand unless the first is strictly greater.
    #[inline(always)]
    unsafe fn max_elements(&self, rhs: Self) -> Self {
        Self {
            elements: _mm_max_ps(self.elements, rhs.elements),
        }
    }
}
