//! AVX SIMD implementations for 256-bit vector operations.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Sandy Bridge (2011+) or AMD Bulldozer (2011+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build system emits the `avx` cfg only when AVX
//!   was detected on the build host (or enabled for the cross target)
//!
//! # Available Types
//!
//! - [`f32x8::F32x8`]: 256-bit vector containing 8 packed single-precision values
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 256 bits (8 × f32)
//! - **Tail**: one full-width load, then a 4/2/1 partial store sequence

pub mod f32x8;

pub mod relu;
