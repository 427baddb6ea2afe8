use num_traits::Float;
use tracing::trace;

use crate::array::{BufferView, BufferViewMut};
use crate::error::{ConvError, Result};

pub mod scalar;

/// Inner-loop variant used for a given kernel length.
///
/// Paths are ranked the same way [`KernelPath::select`] checks them: the
/// widest block size that divides the kernel wins, a single tap collapses to
/// a scaled copy and everything else goes through the general loop. All
/// paths sum taps in increasing order with a single accumulator, so they
/// produce identical results for the same data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelPath {
    Block16,
    Block8,
    Block4,
    SingleTap,
    General,
}

impl KernelPath {
    pub const ALL: [KernelPath; 5] = [
        KernelPath::Block16,
        KernelPath::Block8,
        KernelPath::Block4,
        KernelPath::SingleTap,
        KernelPath::General,
    ];

    /// Picks the path for a kernel of `kernel_len` taps.
    pub fn select(kernel_len: usize) -> Self {
        if kernel_len % 16 == 0 {
            KernelPath::Block16
        } else if kernel_len % 8 == 0 {
            KernelPath::Block8
        } else if kernel_len % 4 == 0 {
            KernelPath::Block4
        } else if kernel_len == 1 {
            KernelPath::SingleTap
        } else {
            KernelPath::General
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KernelPath::Block16 => "block16",
            KernelPath::Block8 => "block8",
            KernelPath::Block4 => "block4",
            KernelPath::SingleTap => "single_tap",
            KernelPath::General => "general",
        }
    }

    /// Number of taps processed per unrolled block, if any.
    pub fn block_size(&self) -> Option<usize> {
        match self {
            KernelPath::Block16 => Some(16),
            KernelPath::Block8 => Some(8),
            KernelPath::Block4 => Some(4),
            KernelPath::SingleTap | KernelPath::General => None,
        }
    }

    /// Whether this path can compute a kernel of `kernel_len` taps.
    pub fn supports(&self, kernel_len: usize) -> bool {
        match self {
            KernelPath::SingleTap => kernel_len == 1,
            KernelPath::General => true,
            _ => self.block_size().is_some_and(|b| kernel_len % b == 0),
        }
    }
}

/// Valid-mode correlation of `x` with `k` into `y`, using the path picked by
/// [`KernelPath::select`].
///
/// Computes `y[i] = sum_j k[j] * x[i + j]` for `i in 0..x.len() - k.len() + 1`.
/// `y` must have exactly that length; otherwise [`ConvError::ShapeMismatch`]
/// is returned before anything is written.
pub fn conv1d_core<F: Float>(
    x: BufferView<'_, F>,
    k: BufferView<'_, F>,
    y: BufferViewMut<'_, F>,
) -> Result<()> {
    conv1d_with_path(KernelPath::select(k.len()), x, k, y)
}

/// Same as [`conv1d_core`] but runs the given path.
pub fn conv1d_with_path<F: Float>(
    path: KernelPath,
    x: BufferView<'_, F>,
    k: BufferView<'_, F>,
    mut y: BufferViewMut<'_, F>,
) -> Result<()> {
    let kernel_len = k.len();
    let input_len = x.len();

    if kernel_len > input_len + 1 {
        return Err(ConvError::KernelTooLong {
            kernel: kernel_len,
            input: input_len,
        });
    }
    let expected = input_len + 1 - kernel_len;
    if y.len() != expected {
        return Err(ConvError::ShapeMismatch {
            expected,
            actual: y.len(),
        });
    }
    if !path.supports(kernel_len) {
        return Err(ConvError::PathMismatch {
            path: path.name(),
            kernel: kernel_len,
        });
    }

    trace!(
        path = path.name(),
        input = input_len,
        kernel = kernel_len,
        output = expected,
        "conv1d dispatch"
    );

    let (x, k, y) = (x.as_slice(), k.as_slice(), y.as_mut_slice());
    match path {
        KernelPath::Block16 => scalar::conv1d_blocked::<F, 16>(x, k, y),
        KernelPath::Block8 => scalar::conv1d_blocked::<F, 8>(x, k, y),
        KernelPath::Block4 => scalar::conv1d_blocked::<F, 4>(x, k, y),
        KernelPath::SingleTap => scalar::conv1d_single_tap(x, k[0], y),
        KernelPath::General => scalar::conv1d_general(x, k, y),
    }
    Ok(())
}

/// Textbook convolution of `x` with the unreversed `kernel`, valid mode.
///
/// Independent of the dispatcher and of kernel reversal; used to verify the
/// operators.
pub fn reference_conv1d<F: Float>(x: &[F], kernel: &[F]) -> Vec<F> {
    let m = kernel.len();
    if m == 0 || m > x.len() {
        return Vec::new();
    }
    (0..x.len() - m + 1)
        .map(|i| {
            let mut total = F::zero();
            for j in 0..m {
                total = total + kernel[m - 1 - j] * x[i + j];
            }
            total
        })
        .collect()
}
