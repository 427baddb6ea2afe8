#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyDict;

use crate::error::{ConvError, Result};

/// Output shape policy of a convolution operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConvMode {
    /// Output shrinks by `kernel_size - 1`; only fully overlapping positions.
    #[default]
    Valid,
    /// Output keeps the input length; the valid result is centered and the
    /// boundary positions stay zero.
    Same,
}

impl ConvMode {
    pub fn from_preserve_shape(preserve_shape: bool) -> Self {
        if preserve_shape {
            ConvMode::Same
        } else {
            ConvMode::Valid
        }
    }

    pub fn preserves_shape(self) -> bool {
        self == ConvMode::Same
    }

    pub fn output_size(self, input_size: usize, kernel_size: usize) -> usize {
        match self {
            ConvMode::Valid => (input_size + 1).saturating_sub(kernel_size),
            ConvMode::Same => input_size,
        }
    }

    /// Index of the output element receiving the first valid result.
    pub fn offset(self, kernel_size: usize) -> usize {
        match self {
            ConvMode::Valid => 0,
            ConvMode::Same => kernel_size.saturating_sub(1) / 2,
        }
    }
}

/// Construction-time options shared by the convolution operators.
///
/// `pad_modulo` selects the padded operator with the given alignment; `None`
/// selects the direct operator.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvParameters {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub preserve_shape: bool,

    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub pad_modulo: Option<usize>,
}

impl ConvParameters {
    pub fn new() -> Self {
        Self {
            preserve_shape: false,
            pad_modulo: None,
        }
    }

    pub fn with_mode(mut self, mode: ConvMode) -> Self {
        self.preserve_shape = mode.preserves_shape();
        self
    }

    pub fn with_pad_modulo(mut self, pad_modulo: usize) -> Self {
        self.pad_modulo = Some(pad_modulo);
        self
    }

    pub fn mode(&self) -> ConvMode {
        ConvMode::from_preserve_shape(self.preserve_shape)
    }

    pub fn validate(&self) -> Result<()> {
        match self.pad_modulo {
            Some(0) => Err(ConvError::InvalidAlignment(0)),
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl ConvParameters {
    #[new]
    fn py_new() -> Self {
        Self::new()
    }

    pub fn update(&mut self, config: &Bound<'_, PyDict>) -> PyResult<()> {
        if let Some(value) = config.get_item("preserve_shape")? {
            self.preserve_shape = value.extract::<bool>()?;
        }
        if let Some(value) = config.get_item("pad_modulo")? {
            self.pad_modulo = value.extract::<Option<usize>>()?;
        }
        self.validate()?;
        Ok(())
    }
}

impl Default for ConvParameters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_size() {
        assert_eq!(ConvMode::Valid.output_size(10, 3), 8);
        assert_eq!(ConvMode::Valid.output_size(10, 10), 1);
        assert_eq!(ConvMode::Valid.output_size(2, 5), 0);
        for kernel_size in 1..=10 {
            assert_eq!(ConvMode::Same.output_size(10, kernel_size), 10);
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(ConvMode::Valid.offset(5), 0);
        assert_eq!(ConvMode::Same.offset(1), 0);
        assert_eq!(ConvMode::Same.offset(4), 1);
        assert_eq!(ConvMode::Same.offset(5), 2);
    }

    #[test]
    fn test_parameters() {
        let params = ConvParameters::default();
        assert_eq!(params.mode(), ConvMode::Valid);
        assert!(params.validate().is_ok());

        let params = ConvParameters::new()
            .with_mode(ConvMode::Same)
            .with_pad_modulo(8);
        assert!(params.preserve_shape);
        assert_eq!(params.pad_modulo, Some(8));

        let params = ConvParameters::new().with_pad_modulo(0);
        assert_eq!(params.validate(), Err(ConvError::InvalidAlignment(0)));
    }
}
