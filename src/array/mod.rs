//! Owning buffers and the zero-copy views the convolution routines work on.
//!
//! A [`Buffer`] exclusively owns a contiguous run of elements. A
//! [`BufferView`] (read-only) or [`BufferViewMut`] (read/write) borrows a
//! sub-range of a buffer or of another view without copying. The borrow
//! checker ties every view to the lifetime of the storage it points into.
//!
//! Element access comes in three flavours:
//!
//! * `get` / `get_mut` return [`ConvError::OutOfBounds`] instead of panicking,
//! * `Index` / `IndexMut` panic on an out-of-range index,
//! * `get_unchecked` / `get_unchecked_mut` skip the check entirely and are `unsafe`.
//!
//! View construction is always checked.

use std::fmt;
use std::ops::{Index, IndexMut};

use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use num_traits::Float;

use crate::error::{ConvError, Result};

#[cfg(test)]
mod tests;

#[inline]
fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if end < start || end > len {
        return Err(ConvError::InvalidRange { start, end, len });
    }
    Ok(())
}

#[inline]
fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(ConvError::OutOfBounds { index, len });
    }
    Ok(())
}

/// Owning contiguous buffer of numeric elements.
///
/// Cloning deep-copies the elements. Moving out with [`Buffer::take`] (or
/// [`std::mem::take`]) leaves an empty buffer behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer<F> {
    data: Vec<F>,
}

impl<F: Float> Buffer<F> {
    /// Allocates a buffer of `size` zero-valued elements.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![F::zero(); size],
        }
    }
}

impl<F> Buffer<F> {
    /// Buffer without any storage.
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    pub fn from_vec(data: Vec<F>) -> Self {
        Self { data }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Moves the storage out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn get(&self, index: usize) -> Result<&F> {
        check_index(index, self.data.len())?;
        Ok(&self.data[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut F> {
        check_index(index, self.data.len())?;
        Ok(&mut self.data[index])
    }

    /// # Safety
    ///
    /// `index` must be smaller than [`Buffer::size`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &F {
        self.data.get_unchecked(index)
    }

    /// # Safety
    ///
    /// `index` must be smaller than [`Buffer::size`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut F {
        self.data.get_unchecked_mut(index)
    }

    /// Read-only view over `[start, end)`.
    pub fn view(&self, start: usize, end: usize) -> Result<BufferView<'_, F>> {
        check_range(start, end, self.data.len())?;
        Ok(BufferView {
            data: &self.data[start..end],
            offset: start,
        })
    }

    /// Mutable view over `[start, end)`.
    pub fn view_mut(&mut self, start: usize, end: usize) -> Result<BufferViewMut<'_, F>> {
        check_range(start, end, self.data.len())?;
        Ok(BufferViewMut {
            data: &mut self.data[start..end],
            offset: start,
        })
    }

    pub fn as_view(&self) -> BufferView<'_, F> {
        BufferView::from(self)
    }

    pub fn as_view_mut(&mut self) -> BufferViewMut<'_, F> {
        BufferViewMut::from(self)
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [F] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<F> {
        self.data
    }

    pub fn as_array(&self) -> ArrayView1<'_, F> {
        ArrayView1::from(self.data.as_slice())
    }

    pub fn as_array_mut(&mut self) -> ArrayViewMut1<'_, F> {
        ArrayViewMut1::from(self.data.as_mut_slice())
    }
}

impl<F: Clone> Buffer<F> {
    pub fn to_array(&self) -> Array1<F> {
        Array1::from_vec(self.data.clone())
    }
}

impl<F> Default for Buffer<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F> From<Vec<F>> for Buffer<F> {
    fn from(data: Vec<F>) -> Self {
        Self::from_vec(data)
    }
}

impl<F: Clone> From<Array1<F>> for Buffer<F> {
    fn from(array: Array1<F>) -> Self {
        array.iter().cloned().collect()
    }
}

/// Deep copy of the viewed elements.
impl<F: Clone> From<BufferView<'_, F>> for Buffer<F> {
    fn from(view: BufferView<'_, F>) -> Self {
        Self::from_vec(view.data.to_vec())
    }
}

impl<F> FromIterator<F> for Buffer<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<F> Index<usize> for Buffer<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.data[index]
    }
}

impl<F> IndexMut<usize> for Buffer<F> {
    fn index_mut(&mut self, index: usize) -> &mut F {
        &mut self.data[index]
    }
}

impl<F> fmt::Display for Buffer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            f.write_str("<unallocated>")
        } else {
            write!(f, "{{0..{}}}", self.data.len() - 1)
        }
    }
}

/// Read-only window into a buffer or another view.
///
/// `offset` is the position of the first element relative to the storage the
/// outermost view was taken from.
#[derive(Debug)]
pub struct BufferView<'a, F> {
    data: &'a [F],
    offset: usize,
}

impl<F> Clone for BufferView<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for BufferView<'_, F> {}

impl<'a, F> BufferView<'a, F> {
    pub fn new(data: &'a [F]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn get(&self, index: usize) -> Result<&'a F> {
        check_index(index, self.data.len())?;
        Ok(&self.data[index])
    }

    /// # Safety
    ///
    /// `index` must be smaller than [`BufferView::size`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a F {
        self.data.get_unchecked(index)
    }

    /// Sub-view over `[start, end)` of this view.
    pub fn view(&self, start: usize, end: usize) -> Result<BufferView<'a, F>> {
        check_range(start, end, self.data.len())?;
        Ok(BufferView {
            data: &self.data[start..end],
            offset: self.offset + start,
        })
    }

    pub fn as_slice(&self) -> &'a [F] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'a, F> {
        self.data.iter()
    }

    pub fn as_array(&self) -> ArrayView1<'a, F> {
        ArrayView1::from(self.data)
    }
}

impl<'a, F> From<&'a Buffer<F>> for BufferView<'a, F> {
    fn from(buffer: &'a Buffer<F>) -> Self {
        Self::new(&buffer.data)
    }
}

impl<'a, F> From<&'a [F]> for BufferView<'a, F> {
    fn from(data: &'a [F]) -> Self {
        Self::new(data)
    }
}

impl<'a, F> From<&'a BufferViewMut<'_, F>> for BufferView<'a, F> {
    fn from(view: &'a BufferViewMut<'_, F>) -> Self {
        Self {
            data: &*view.data,
            offset: view.offset,
        }
    }
}

impl<F> Index<usize> for BufferView<'_, F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.data[index]
    }
}

/// Read/write window into a buffer or another mutable view.
#[derive(Debug)]
pub struct BufferViewMut<'a, F> {
    data: &'a mut [F],
    offset: usize,
}

impl<'a, F> BufferViewMut<'a, F> {
    pub fn new(data: &'a mut [F]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn get(&self, index: usize) -> Result<&F> {
        check_index(index, self.data.len())?;
        Ok(&self.data[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut F> {
        check_index(index, self.data.len())?;
        Ok(&mut self.data[index])
    }

    /// # Safety
    ///
    /// `index` must be smaller than [`BufferViewMut::size`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &F {
        self.data.get_unchecked(index)
    }

    /// # Safety
    ///
    /// `index` must be smaller than [`BufferViewMut::size`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut F {
        self.data.get_unchecked_mut(index)
    }

    /// Read-only sub-view over `[start, end)`.
    pub fn view(&self, start: usize, end: usize) -> Result<BufferView<'_, F>> {
        self.as_view().view(start, end)
    }

    /// Mutable sub-view over `[start, end)`.
    pub fn view_mut(&mut self, start: usize, end: usize) -> Result<BufferViewMut<'_, F>> {
        check_range(start, end, self.data.len())?;
        Ok(BufferViewMut {
            data: &mut self.data[start..end],
            offset: self.offset + start,
        })
    }

    pub fn as_view(&self) -> BufferView<'_, F> {
        BufferView::from(self)
    }

    /// Shorter-lived mutable view over the same range.
    pub fn reborrow(&mut self) -> BufferViewMut<'_, F> {
        BufferViewMut {
            data: &mut *self.data,
            offset: self.offset,
        }
    }

    pub fn as_slice(&self) -> &[F] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [F] {
        &mut *self.data
    }

    pub fn into_slice(self) -> &'a mut [F] {
        self.data
    }

    pub fn as_array_mut(&mut self) -> ArrayViewMut1<'_, F> {
        ArrayViewMut1::from(&mut *self.data)
    }
}

impl<F: Clone> BufferViewMut<'_, F> {
    pub fn fill(&mut self, value: F) {
        self.data.fill(value);
    }
}

impl<'a, F> From<&'a mut Buffer<F>> for BufferViewMut<'a, F> {
    fn from(buffer: &'a mut Buffer<F>) -> Self {
        Self::new(&mut buffer.data)
    }
}

impl<'a, F> From<&'a mut [F]> for BufferViewMut<'a, F> {
    fn from(data: &'a mut [F]) -> Self {
        Self::new(data)
    }
}

impl<F> Index<usize> for BufferViewMut<'_, F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.data[index]
    }
}

impl<F> IndexMut<usize> for BufferViewMut<'_, F> {
    fn index_mut(&mut self, index: usize) -> &mut F {
        &mut self.data[index]
    }
}
