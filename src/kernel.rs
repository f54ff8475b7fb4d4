//! The ReLU variant compiled in as this build's default.
//!
//! Selection is purely compile-time: the widest variant whose cfg the build
//! script emitted wins. When it found none it emits `fallback` and the scalar
//! kernel takes over.

use crate::params::{ReluParams, UnaryUkernel};

#[cfg(all(avx, any(target_arch = "x86", target_arch = "x86_64")))]
mod default {
    pub use crate::simd::avx::f32x8::LANE_COUNT;
    pub use crate::simd::avx::relu::f32_relu_ukernel_avx_x8 as ukernel;
    pub const NAME: &str = "avx_x8";
}

#[cfg(all(
    sse,
    not(avx),
    any(target_arch = "x86", target_arch = "x86_64")
))]
mod default {
    pub use crate::simd::sse::f32x4::LANE_COUNT;
    pub use crate::simd::sse::relu::f32_relu_ukernel_sse_x4 as ukernel;
    pub const NAME: &str = "sse_x4";
}

#[cfg(all(neon, target_arch = "aarch64"))]
mod default {
    pub use crate::simd::neon::f32x4::LANE_COUNT;
    pub use crate::simd::neon::relu::f32_relu_ukernel_neon_x4 as ukernel;
    pub const NAME: &str = "neon_x4";
}

#[cfg(fallback)]
mod default {
    pub const LANE_COUNT: usize = 4;
    pub use crate::scalar::f32_relu_ukernel_scalar_x4 as ukernel;
    pub const NAME: &str = "scalar_x4";
}

/// The default ReLU micro-kernel of this build.
pub const DEFAULT_UKERNEL: UnaryUkernel<ReluParams> = default::ukernel;

/// Lanes processed per main-loop step by [`DEFAULT_UKERNEL`].
///
/// SIMD variants read up to `DEFAULT_LANE_COUNT - 1` elements past the end of
/// the input in their tail, so callers of the raw kernel pad inputs to a
/// multiple of this.
pub const DEFAULT_LANE_COUNT: usize = default::LANE_COUNT;

/// Short name of [`DEFAULT_UKERNEL`], e.g. `"avx_x8"`.
pub const DEFAULT_UKERNEL_NAME: &str = default::NAME;
