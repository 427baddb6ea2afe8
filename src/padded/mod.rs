use num_traits::Float;
use tracing::{debug, trace};

use crate::array::{Buffer, BufferView};
use crate::convolution::conv1d_core;
use crate::direct::check_input;
use crate::error::{ConvError, Result};
use crate::kernel::ReversedKernel;
use crate::parameters::ConvMode;
use crate::traits::Conv1d;


/// Convolution with the kernel zero-padded to a multiple of `pad_modulo`.
///
/// Padding keeps the bulk of the work on a block-unrolled path. The work is
/// split in two passes:
///
/// 1. the padded kernel runs over the whole input and yields all but the
///    last `padding` outputs (the zero taps only ever meet real samples),
/// 2. the unpadded kernel covers the remaining `padding` outputs, reading
///    the input from `raw_output_size - padding` onwards.
///
/// Output shape follows the unpadded kernel length, and results equal those
/// of [`crate::direct::DirectConv1d`].
#[derive(Debug, Clone)]
pub struct PaddedConv1d<F> {
    kernel: ReversedKernel<F>,
    pad_modulo: usize,
    mode: ConvMode,
}

impl<F: Float> PaddedConv1d<F> {
    pub fn new(pad_modulo: usize, mode: ConvMode) -> Result<Self> {
        if pad_modulo == 0 {
            return Err(ConvError::InvalidAlignment(pad_modulo));
        }
        Ok(Self {
            kernel: ReversedKernel::empty(),
            pad_modulo,
            mode,
        })
    }

    pub fn with_kernel(
        kernel: BufferView<'_, F>,
        pad_modulo: usize,
        mode: ConvMode,
    ) -> Result<Self> {
        let mut conv = Self::new(pad_modulo, mode)?;
        conv.set_kernel(kernel);
        Ok(conv)
    }

    pub fn pad_modulo(&self) -> usize {
        self.pad_modulo
    }

    /// Zero taps appended to the current kernel.
    pub fn padding(&self) -> usize {
        self.kernel.padding()
    }
}

impl<F: Float> Conv1d<F> for PaddedConv1d<F> {
    fn set_kernel(&mut self, kernel: BufferView<'_, F>) {
        self.kernel = ReversedKernel::padded(kernel, self.pad_modulo);
        debug!(
            kernel_size = self.kernel.len(),
            padding = self.kernel.padding(),
            pad_modulo = self.pad_modulo,
            mode = ?self.mode,
            "padded kernel set"
        );
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

        // Inputs shorter than the padded kernel go entirely through the tail pass.
        let main_outputs = raw_output_size.saturating_sub(self.kernel.padding());
        trace!(
            main = main_outputs,
            tail = raw_output_size - main_outputs,
            "padded conv1d split"
        );

        if main_outputs > 0 {
            conv1d_core(
                x,
                self.kernel.taps(),
                y.view_mut(offset, offset + main_outputs)?,
            )?;
        }
        if main_outputs < raw_output_size {
            conv1d_core(
                x.view(main_outputs, input_size)?,
                self.kernel.raw_taps(),
                y.view_mut(offset + main_outputs, offset + raw_output_size)?,
            )?;
        }
        Ok(y)
    }
}
