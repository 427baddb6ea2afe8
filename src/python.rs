use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::array::Buffer;
use crate::error::ConvError;
use crate::operator::Conv1dOperator;
use crate::parameters::ConvParameters;
use crate::traits::Conv1d;

impl From<ConvError> for PyErr {
    fn from(err: ConvError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn to_buffer(array: &PyReadonlyArray1<'_, f32>) -> Buffer<f32> {
    array.as_array().iter().copied().collect()
}

#[pyclass(name = "Conv1d")]
pub struct PyConv1d {
    inner: Conv1dOperator<f32>,
}

#[pymethods]
impl PyConv1d {
    #[new]
    #[pyo3(signature = (kernel, params=None))]
    fn new<'py>(
        kernel: PyReadonlyArray1<'py, f32>,
        params: Option<ConvParameters>,
    ) -> PyResult<Self> {
        let params = params.unwrap_or_default();
        let kernel = to_buffer(&kernel);
        let inner = Conv1dOperator::with_kernel(kernel.as_view(), &params)?;
        Ok(Self { inner })
    }

    fn set_kernel<'py>(&mut self, kernel: PyReadonlyArray1<'py, f32>) {
        let kernel = to_buffer(&kernel);
        self.inner.set_kernel(kernel.as_view());
    }

    #[getter]
    fn kernel_size(&self) -> usize {
        self.inner.kernel_size()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name()
    }

    fn output_size(&self, input_size: usize) -> usize {
        self.inner.output_size(input_size)
    }

    fn conv<'py>(
        &self,
        py: Python<'py>,
        x: PyReadonlyArray1<'py, f32>,
    ) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let y = match x.as_slice() {
            Ok(slice) => self.inner.conv(slice.into())?,
            Err(_) => self.inner.conv(to_buffer(&x).as_view())?,
        };
        Ok(PyArray1::from_vec(py, y.into_vec()))
    }
}

/// 1D convolution operators for float32 numpy arrays.
#[pymodule]
fn conv1d(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyConv1d>()?;
    m.add_class::<ConvParameters>()?;
    Ok(())
}
