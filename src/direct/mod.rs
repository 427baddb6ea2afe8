use num_traits::Float;
use tracing::debug;

use crate::array::{Buffer, BufferView};
use crate::convolution::conv1d_core;
use crate::error::{ConvError, Result};
use crate::kernel::ReversedKernel;
use crate::parameters::ConvMode;
use crate::traits::Conv1d;

#[cfg(test)]
mod tests;

/// Convolution with the kernel as given; the dispatcher picks the inner loop
/// from the kernel length alone.
#[derive(Debug, Clone)]
pub struct DirectConv1d<F> {
    kernel: ReversedKernel<F>,
    mode: ConvMode,
}

impl<F: Float> DirectConv1d<F> {
    pub fn new(mode: ConvMode) -> Self {
        Self {
            kernel: ReversedKernel::empty(),
            mode,
        }
    }

    pub fn with_kernel(kernel: BufferView<'_, F>, mode: ConvMode) -> Self {
        let mut conv = Self::new(mode);
        conv.set_kernel(kernel);
        conv
    }
}

/// Checks shared by both operators before any output is allocated.
pub(crate) fn check_input(kernel_size: usize, input_size: usize) -> Result<()> {
    if kernel_size == 0 {
        return Err(ConvError::EmptyKernel);
    }
    if input_size < kernel_size {
        return Err(ConvError::KernelTooLong {
            kernel: kernel_size,
            input: input_size,
        });
    }
    Ok(())
}

impl<F: Float> Conv1d<F> for DirectConv1d<F> {
    fn set_kernel(&mut self, kernel: BufferView<'_, F>) {
        self.kernel = ReversedKernel::new(kernel);
        debug!(kernel_size = self.kernel.len(), mode = ?self.mode, "direct kernel set");
    }

    fn kernel_size(&self) -> usize {
        self.kernel.len()
    }

    fn mode(&self) -> ConvMode {
        self.mode
    }

    fn conv(&self, x: BufferView<'_, F>) -> Result<Buffer<F>> {
        let kernel_size = self.kernel.len();
        let input_size = x.len();
        check_input(kernel_size, input_size)?;

        let mut y = Buffer::new(self.output_size(input_size));
        let raw_output_size = input_size - kernel_size + 1;
        let offset = self.mode.offset(kernel_size);

        conv1d_core(
            x,
            self.kernel.taps(),
            y.view_mut(offset, offset + raw_output_size)?,
        )?;
        Ok(y)
    }
}
