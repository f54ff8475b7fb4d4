//! SSE implementations for 128-bit vector operations.
//!
//! Enabled by the `sse` cfg, which the build script emits for any x86 target
//! with SSE2. SSE2 is part of the x86_64 baseline.
//!
//! - **Vector Width**: 128 bits (4 × f32)
//! - **Partial stores**: 64-bit `movq` for 2 lanes, `movss` for 1 lane

pub mod f32x4;

pub mod relu;
