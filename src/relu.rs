//! Safe slice entry points over the default ReLU micro-kernel.
//!
//! The raw kernels trust their caller: they only debug-assert their
//! preconditions and their SIMD tail reads a full vector past the last valid
//! element. The functions here validate the slices, run every complete block
//! straight through [`DEFAULT_UKERNEL`], and stage the final partial block in a
//! zero-padded stack buffer so the tail load never leaves memory owned by this
//! call.
//!
//! # Usage
//!
//! ```rust
//! use simd_relu::{relu_inplace, ReluParams, SimdRelu};
//!
//! let mut activations = vec![-1.0f32, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0];
//! relu_inplace(&mut activations, &ReluParams::default()).unwrap();
//! assert_eq!(activations, [0.0, 2.0, 0.0, 4.0, 0.0, 6.0, 0.0]);
//!
//! let fresh = [1.0f32, -1.0].as_slice().simd_relu();
//! assert_eq!(fresh, [1.0, 0.0]);
//! ```

use crate::{
    error::{empty_buffer_error, length_mismatch_error, Result},
    kernel::{DEFAULT_LANE_COUNT, DEFAULT_UKERNEL},
    params::ReluParams,
    scalar::relu_scalar,
};

const F32_SIZE: usize = std::mem::size_of::<f32>();

/// Computes `y[i] = max(x[i], 0)` for every element.
///
/// # Errors
///
/// - [`ReluError::EmptyBuffer`](crate::ReluError::EmptyBuffer) if `x` is empty.
/// - [`ReluError::LengthMismatch`](crate::ReluError::LengthMismatch) if the
///   slices differ in length.
pub fn relu(x: &[f32], y: &mut [f32], params: &ReluParams) -> Result<()> {
    if x.len() != y.len() {
        return Err(length_mismatch_error(x.len(), y.len()));
    }
    if x.is_empty() {
        return Err(empty_buffer_error());
    }

    relu_nonempty(x, y, params);

    Ok(())
}

/// Computes `buf[i] = max(buf[i], 0)` in place.
///
/// # Errors
///
/// [`ReluError::EmptyBuffer`](crate::ReluError::EmptyBuffer) if `buf` is empty.
pub fn relu_inplace(buf: &mut [f32], params: &ReluParams) -> Result<()> {
    if buf.is_empty() {
        return Err(empty_buffer_error());
    }

    relu_inplace_nonempty(buf, params);

    Ok(())
}

#[inline(always)]
fn complete_blocks(len: usize) -> usize {
    len - len % DEFAULT_LANE_COUNT
}

fn relu_nonempty(x: &[f32], y: &mut [f32], params: &ReluParams) {
    debug_assert!(!x.is_empty(), "Size can't be empty (size zero)");
    debug_assert_eq!(x.len(), y.len(), "Vectors must be the same length");

    let main = complete_blocks(x.len());
    if main > 0 {
        // SAFETY: both slices hold at least `main` elements, `main` is a nonzero
        // multiple of the lane count (no tail over-read), and the borrow rules
        // keep `x` and `y` disjoint.
        unsafe { DEFAULT_UKERNEL(main * F32_SIZE, x.as_ptr(), y.as_mut_ptr(), params) };
    }
    if main < x.len() {
        y[main..].copy_from_slice(&x[main..]);
        relu_tail_inplace(&mut y[main..], params);
    }
}

fn relu_inplace_nonempty(buf: &mut [f32], params: &ReluParams) {
    debug_assert!(!buf.is_empty(), "Size can't be empty (size zero)");

    let main = complete_blocks(buf.len());
    if main > 0 {
        let ptr = buf.as_mut_ptr();
        // SAFETY: `main` is a nonzero multiple of the lane count, so the kernel
        // stays in its main loop and touches exactly `buf[..main]`; input and
        // output are the same region.
        unsafe { DEFAULT_UKERNEL(main * F32_SIZE, ptr, ptr, params) };
    }
    if main < buf.len() {
        relu_tail_inplace(&mut buf[main..], params);
    }
}

/// Runs a partial block (fewer than `DEFAULT_LANE_COUNT` elements) through the
/// kernel's tail path using a padded stack block.
#[inline(always)]
fn relu_tail_inplace(tail: &mut [f32], params: &ReluParams) {
    debug_assert!(
        !tail.is_empty() && tail.len() < DEFAULT_LANE_COUNT,
        "Tail must hold 1..{DEFAULT_LANE_COUNT} elements"
    );

    let mut block = [0.0f32; DEFAULT_LANE_COUNT];
    block[..tail.len()].copy_from_slice(tail);

    let ptr = block.as_mut_ptr();
    // SAFETY: `block` spans a full vector, so the tail's full-width load stays
    // inside it; the partial store writes `tail.len()` elements in place.
    unsafe { DEFAULT_UKERNEL(tail.len() * F32_SIZE, ptr, ptr, params) };

    tail.copy_from_slice(&block[..tail.len()]);
}

/// ReLU over whole slices, in the style of the crate's `simd_*`/`scalar_*`
/// operation traits.
///
/// Empty inputs produce empty outputs.
pub trait SimdRelu {
    type Output;

    /// ReLU through the default SIMD micro-kernel.
    fn simd_relu(self) -> Self::Output;

    /// ReLU through [`relu_scalar`], one element at a time.
    fn scalar_relu(self) -> Self::Output;
}

impl SimdRelu for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_relu(self) -> Self::Output {
        if self.is_empty() {
            return Vec::new();
        }

        let mut y = vec![0.0f32; self.len()];
        relu_nonempty(self, &mut y, &ReluParams::default());
        y
    }

    #[inline(always)]
    fn scalar_relu(self) -> Self::Output {
        self.iter().copied().map(relu_scalar).collect()
    }
}

/// Owned vectors are transformed in place, without a second allocation.
impl SimdRelu for Vec<f32> {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_relu(mut self) -> Self::Output {
        if !self.is_empty() {
            relu_inplace_nonempty(&mut self, &ReluParams::default());
        }
        self
    }

    #[inline(always)]
    fn scalar_relu(mut self) -> Self::Output {
        self.iter_mut().for_each(|v| *v = relu_scalar(*v));
        self
    }
}
