//! ARM NEON SIMD implementations for 128-bit vector operations.
//!
//! NEON is part of every AArch64 processor, including Apple Silicon and AWS
//! Graviton. The build system emits the `neon` cfg when it finds `neon` or
//! `asimd` among the host CPU features.
//!
//! - **Vector Width**: 128 bits (4 × f32)
//! - **Partial stores**: `vst1_f32` for 2 lanes, `vst1_lane_f32` for 1 lane

pub mod f32x4;

pub mod relu;
