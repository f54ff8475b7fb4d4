#[cfg(all(avx, any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx;

#[cfg(all(sse, any(target_arch = "x86", target_arch = "x86_64")))]
pub mod sse;

#[cfg(all(neon, target_arch = "aarch64"))]
pub mod neon;

pub mod traits;

pub use traits::{SimdLoad, SimdMax, SimdStore};
