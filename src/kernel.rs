use num_traits::Float;

use crate::array::{Buffer, BufferView};

/// Zero taps needed to grow a kernel of `len` taps to a multiple of `modulo`.
pub fn padding_for(len: usize, modulo: usize) -> usize {
    debug_assert!(modulo > 0, "alignment modulus must be positive");
    (modulo - len % modulo) % modulo
}

/// Kernel coefficients stored back to front, optionally followed by zero taps.
///
/// Reversing turns convolution into a left-to-right sliding dot product,
/// which is what [`crate::convolution::conv1d_core`] computes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReversedKernel<F> {
    taps: Buffer<F>,
    len: usize,
    padding: usize,
}

impl<F: Float> ReversedKernel<F> {
    pub fn new(kernel: BufferView<'_, F>) -> Self {
        Self::padded(kernel, 1)
    }

    /// Reversed kernel padded with zeros up to a multiple of `modulo`.
    pub fn padded(kernel: BufferView<'_, F>, modulo: usize) -> Self {
        let len = kernel.len();
        let padding = padding_for(len, modulo);

        let mut taps = Buffer::new(len + padding);
        for (dst, &src) in taps.as_mut_slice().iter_mut().zip(kernel.iter().rev()) {
            *dst = src;
        }

        Self { taps, len, padding }
    }
}

impl<F> ReversedKernel<F> {
    pub fn empty() -> Self {
        Self {
            taps: Buffer::empty(),
            len: 0,
            padding: 0,
        }
    }

    /// Length of the kernel as given by the caller.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn padded_len(&self) -> usize {
        self.taps.len()
    }

    /// All stored taps, zero padding included.
    pub fn taps(&self) -> BufferView<'_, F> {
        self.taps.as_view()
    }

    /// The reversed kernel without padding.
    pub fn raw_taps(&self) -> BufferView<'_, F> {
        BufferView::new(&self.taps.as_slice()[..self.len])
    }
}

impl<F> Default for ReversedKernel<F> {
    fn default() -> Self {
        Self::empty()
    }
}
