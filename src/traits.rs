use crate::array::{Buffer, BufferView};
use crate::error::Result;
use crate::parameters::ConvMode;

/// Core trait for 1D convolution operators.
///
/// An operator owns a kernel and a [`ConvMode`]. Implementations differ only
/// in how they schedule work over the dispatcher; for the same kernel, mode
/// and input every implementation returns the same values.
///
/// The trait is object safe, so harnesses can iterate over
/// `Box<dyn Conv1d<F>>`. Library code that knows the operator type should use
/// it directly or through [`crate::operator::Conv1dOperator`].
///
/// # Required Methods
///
/// * `set_kernel` - Replaces the kernel
/// * `kernel_size` - Length of the kernel as passed to `set_kernel`
/// * `mode` - Output shape policy
/// * `conv` - Convolves an input into a newly allocated buffer
pub trait Conv1d<F> {
    /// Replace the current kernel with `kernel`.
    ///
    /// The kernel is copied; the view is not retained.
    fn set_kernel(&mut self, kernel: BufferView<'_, F>);

    /// Length of the current kernel, excluding any internal padding.
    fn kernel_size(&self) -> usize;

    /// Output shape policy of this operator.
    fn mode(&self) -> ConvMode;

    /// Length of the buffer [`Conv1d::conv`] returns for an input of
    /// `input_size` elements.
    fn output_size(&self, input_size: usize) -> usize {
        self.mode().output_size(input_size, self.kernel_size())
    }

    /// Convolve `input` with the current kernel.
    ///
    /// # Parameters
    ///
    /// * `input` - Input samples, at least `kernel_size()` long
    ///
    /// # Returns
    ///
    /// A buffer of `output_size(input.len())` elements. In same mode the
    /// positions the kernel cannot fully cover are zero.
    fn conv(&self, input: BufferView<'_, F>) -> Result<Buffer<F>>;
}
