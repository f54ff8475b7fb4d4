//! Vectorized ReLU micro-kernels for `f32` buffers.
//!
//! Every kernel computes `y[i] = max(x[i], 0)` over `n` bytes of packed floats
//! with a full-width SIMD main loop followed by a bit-decomposed partial tail.
//! All variants share the [`UnaryUkernel`] calling convention:
//!
//! | Variant | Lanes | Enabled by |
//! |---------|-------|------------|
//! | [`simd::avx::relu::f32_relu_ukernel_avx_x8`] | 8 | `cfg(avx)` |
//! | [`simd::sse::relu::f32_relu_ukernel_sse_x4`] | 4 | `cfg(sse)` |
//! | [`simd::neon::relu::f32_relu_ukernel_neon_x4`] | 4 | `cfg(neon)` |
//! | [`scalar::f32_relu_ukernel_scalar_x4`] | 4 | always |
//!
//! The `cfg` flags are emitted by the build script after CPU feature detection.
//!
//! # Usage
//!
//! ```rust
//! use simd_relu::{relu, ReluParams};
//!
//! let x = [-1.0f32, 0.0, 3.5, -0.0, 2.0];
//! let mut y = [0.0f32; 5];
//! relu(&x, &mut y, &ReluParams::default()).unwrap();
//! assert_eq!(y, [0.0, 0.0, 3.5, 0.0, 2.0]);
//! ```

pub mod error;
pub mod kernel;
pub mod params;
pub mod relu;
pub mod scalar;
pub mod simd;

pub use error::{ReluError, Result};
pub use params::{ReluParams, UnaryUkernel};
pub use relu::{relu, relu_inplace, SimdRelu};
