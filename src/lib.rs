//! Size-adaptive 1D convolution over owned buffers and zero-copy views.
//!
//! [`DirectConv1d`] convolves with the kernel as given; [`PaddedConv1d`]
//! zero-pads the kernel to an alignment modulus so most of the work runs on a
//! block-unrolled inner loop. Both implement [`Conv1d`] and return identical
//! results for the same kernel and input.
//!
//! ```
//! use conv1d::{Buffer, Conv1d, ConvMode, PaddedConv1d};
//!
//! let kernel: Buffer<f32> = vec![1.0, 0.0, -1.0].into();
//! let input: Buffer<f32> = vec![1.0, 2.0, 3.0, 4.0, 5.0].into();
//!
//! let conv = PaddedConv1d::with_kernel(kernel.as_view(), 8, ConvMode::Valid).unwrap();
//! let output = conv.conv(input.as_view()).unwrap();
//! assert_eq!(output.as_slice(), &[2.0, 2.0, 2.0]);
//! ```

pub mod array;
pub mod convolution;
pub mod direct;
pub mod error;
pub mod kernel;
pub mod operator;
pub mod padded;
pub mod parameters;
pub mod traits;

#[cfg(feature = "python")]
mod python;

pub use array::{Buffer, BufferView, BufferViewMut};
pub use convolution::{conv1d_core, conv1d_with_path, KernelPath};
pub use direct::DirectConv1d;
pub use error::{ConvError, Result};
pub use operator::Conv1dOperator;
pub use padded::PaddedConv1d;
pub use parameters::{ConvMode, ConvParameters};
pub use traits::Conv1d;
