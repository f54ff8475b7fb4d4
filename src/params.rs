//! Parameter blocks and the shared elementwise-kernel signature.

/// Signature shared by the elementwise activation micro-kernels.
///
/// Arguments are the byte count `n`, the input pointer, the output pointer and a
/// read-only parameter block. Each kernel family picks its own `P`; the kernel
/// never mutates or retains it past the call.
///
/// # Safety
///
/// Callers must uphold the preconditions documented on the concrete kernel:
/// `n` is a nonzero multiple of `size_of::<f32>()`, both pointers are non-null,
/// span `n` bytes and are either disjoint or identical.
pub type UnaryUkernel<P> = unsafe fn(n: usize, x: *const f32, y: *mut f32, params: &P);

/// Parameter block of the ReLU kernels.
///
/// ReLU has no tunable state, so this block is empty. It keeps the ReLU kernels
/// call-compatible with sibling kernels whose blocks do carry fields (clamp
/// bounds, leaky slopes).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ReluParams {}

impl ReluParams {
    pub const fn new() -> Self {
        Self {}
    }
}
