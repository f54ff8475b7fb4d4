#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::{SimdLoad, SimdMax, SimdStore};

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    pub elements: float32x4_t,
}

impl SimdLoad<f32> for F32x4 {
    type Output = Self;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: vld1q_f32(ptr),
        }
    }
}

impl SimdStore<f32> for F32x4 {
    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        vst1q_f32(ptr, self.elements);
    }

    /// Stores lanes [0, 1] when bit 1 of `count` is set and moves on to the high
    /// half, then stores one lane when bit 0 is set.
    #[inline(always)]
    unsafe fn store_tail_at(&self, ptr: *mut f32, count: usize) {
        debug_assert!(
            count > 0 && count < LANE_COUNT,
            "Count must be in 1..{LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mut ptr = ptr;
        let mut vacc = vget_low_f32(self.elements);

        if count & 2 != 0 {
            vst1_f32(ptr, vacc);
            vacc = vget_high_f32(self.elements);
            ptr = ptr.add(2);
        }
        if count & 1 != 0 {
            vst1_lane_f32::<0>(ptr, vacc);
        }
    }
}

impl SimdMax for F32x4 {
    #[inline(always)]
    unsafe fn zero() -> Self {
        Self {
            elements: vdupq_n_f32(0.0),
        }
    }

    /// Selects `self` where `self > rhs` and `rhs` everywhere else. `fcmgt` is
    /// false for any NaN operand, so quiet and signaling NaNs both yield `rhs`,
    /// the same as `maxps`.
    #[inline(always)]
    unsafe fn max_elements(&self, rhs: Self) -> Self {
        let mask = vcgtq_f32(self.elements, rhs.elements);
        Self {
            elements: vbslq_f32(mask, self.elements, rhs.elements),
        }
    }
}
