use num_traits::Float;

use crate::array::{Buffer, BufferView};
use crate::direct::DirectConv1d;
use crate::error::Result;
use crate::padded::PaddedConv1d;
use crate::parameters::{ConvMode, ConvParameters};
use crate::traits::Conv1d;

/// Either convolution operator, chosen from [`ConvParameters`].
#[derive(Debug, Clone)]
pub enum Conv1dOperator<F> {
    Direct(DirectConv1d<F>),
    Padded(PaddedConv1d<F>),
}

impl<F: Float> Conv1dOperator<F> {
    pub fn from_parameters(params: &ConvParameters) -> Result<Self> {
        params.validate()?;
        let mode = params.mode();
        Ok(match params.pad_modulo {
            Some(pad_modulo) => Conv1dOperator::Padded(PaddedConv1d::new(pad_modulo, mode)?),
            None => Conv1dOperator::Direct(DirectConv1d::new(mode)),
        })
    }

    pub fn with_kernel(kernel: BufferView<'_, F>, params: &ConvParameters) -> Result<Self> {
        let mut operator = Self::from_parameters(params)?;
        operator.set_kernel(kernel);
        Ok(operator)
    }

    pub fn name(&self) -> String {
        match self {
            Conv1dOperator::Direct(_) => "direct".to_string(),
            Conv1dOperator::Padded(conv) => format!("padded(modulo={})", conv.pad_modulo()),
        }
    }
}

impl<F: Float> Conv1d<F> for Conv1dOperator<F> {
    fn set_kernel(&mut self, kernel: BufferView<'_, F>) {
        match self {
            Conv1dOperator::Direct(conv) => conv.set_kernel(kernel),
            Conv1dOperator::Padded(conv) => conv.set_kernel(kernel),
        }
    }

    fn kernel_size(&self) -> usize {
        match self {
            Conv1dOperator::Direct(conv) => conv.kernel_size(),
            Conv1dOperator::Padded(conv) => conv.kernel_size(),
        }
    }

    fn mode(&self) -> ConvMode {
        match self {
            Conv1dOperator::Direct(conv) => conv.mode(),
            Conv1dOperator::Padded(conv) => conv.mode(),
        }
    }

    fn conv(&self, input: BufferView<'_, F>) -> Result<Buffer<F>> {
        match self {
            Conv1dOperator::Direct(conv) => conv.conv(input),
            Conv1dOperator::Padded(conv) => conv.conv(input),
        }
    }
}

impl<F> From<DirectConv1d<F>> for Conv1dOperator<F> {
    fn from(conv: DirectConv1d<F>) -> Self {
        Conv1dOperator::Direct(conv)
    }
}

impl<F> From<PaddedConv1d<F>> for Conv1dOperator<F> {
    fn from(conv: PaddedConv1d<F>) -> Self {
        Conv1dOperator::Padded(conv)
    }
}
