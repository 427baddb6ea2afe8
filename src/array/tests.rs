use super::*;

fn range_buffer(n: usize) -> Buffer<f32> {
    (0..n).map(|i| i as f32).collect()
}

#[test]
fn test_new_buffer_is_zeroed() {
    let buffer = Buffer::<f64>::new(7);
    assert_eq!(buffer.size(), 7);
    assert!(buffer.iter().all(|&v| v == 0.0));
}

#[test]
fn test_view_sum() {
    let buffer = range_buffer(20);
    let view = buffer.view(5, 6).unwrap();
    assert_eq!(view.size(), 1);
    assert_eq!(view[0], 5.0);

    let copied = Buffer::from(buffer.view(10, 12).unwrap());
    assert_eq!(copied.iter().sum::<f32>(), 21.0);
}

#[test]
fn test_view_rejects_bad_ranges() {
    let buffer = range_buffer(10);

    assert_eq!(
        buffer.view(6, 5).unwrap_err(),
        ConvError::InvalidRange { start: 6, end: 5, len: 10 }
    );
    assert_eq!(
        buffer.view(0, 11).unwrap_err(),
        ConvError::InvalidRange { start: 0, end: 11, len: 10 }
    );
}

#[test]
fn test_zero_length_view() {
    let buffer = range_buffer(10);
    let view = buffer.view(4, 4).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.offset(), 4);

    let at_end = buffer.view(10, 10).unwrap();
    assert_eq!(at_end.size(), 0);
}

#[test]
fn test_nested_views_are_bounded_by_parent() {
    let buffer = range_buffer(20);
    let outer = buffer.view(5, 15).unwrap();
    let inner = outer.view(2, 4).unwrap();

    assert_eq!(inner.offset(), 7);
    assert_eq!(inner.as_slice(), &[7.0, 8.0]);

    // bounded by the view length, not the buffer length
    assert!(outer.view(0, 11).is_err());
    assert!(inner.get(2).is_err());
}

#[test]
fn test_mutable_view_writes_through() {
    let mut buffer = Buffer::<f32>::new(8);
    {
        let mut view = buffer.view_mut(2, 6).unwrap();
        let mut inner = view.view_mut(1, 3).unwrap();
        inner[0] = 1.5;
        *inner.get_mut(1).unwrap() = 2.5;
        assert_eq!(inner.offset(), 3);
    }
    assert_eq!(buffer.as_slice(), &[0.0, 0.0, 0.0, 1.5, 2.5, 0.0, 0.0, 0.0]);
}

#[test]
fn test_read_only_view_from_mutable_view() {
    let mut buffer = range_buffer(6);
    let view = buffer.view_mut(1, 5).unwrap();
    let read_only = BufferView::from(&view);
    assert_eq!(read_only.offset(), 1);
    assert_eq!(read_only.view(1, 3).unwrap().as_slice(), &[2.0, 3.0]);
}

#[test]
fn test_checked_access_reports_out_of_bounds() {
    let mut buffer = range_buffer(3);
    assert_eq!(*buffer.get(2).unwrap(), 2.0);
    assert_eq!(
        buffer.get(3).unwrap_err(),
        ConvError::OutOfBounds { index: 3, len: 3 }
    );
    assert!(buffer.get_mut(5).is_err());

    let view = buffer.view(1, 3).unwrap();
    assert_eq!(
        view.get(2).unwrap_err(),
        ConvError::OutOfBounds { index: 2, len: 2 }
    );
}

#[test]
#[should_panic]
fn test_index_out_of_bounds_panics() {
    let buffer = range_buffer(4);
    let view = buffer.view(0, 2).unwrap();
    let _ = view[2];
}

#[test]
fn test_unchecked_access() {
    let buffer = range_buffer(4);
    let view = buffer.view(1, 4).unwrap();
    let value = unsafe { *view.get_unchecked(2) };
    assert_eq!(value, 3.0);
}

#[test]
fn test_clone_is_independent() {
    let original = range_buffer(5);
    let mut copy = original.clone();
    copy[0] = 100.0;
    copy.view_mut(1, 5).unwrap().fill(-1.0);

    assert_eq!(original.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(copy.as_slice(), &[100.0, -1.0, -1.0, -1.0, -1.0]);
}

#[test]
fn test_move_leaves_source_empty() {
    let mut source = range_buffer(5);
    let mut destination = Buffer::<f32>::new(2);
    assert_eq!(destination.size(), 2);
    destination = source.take();

    assert_eq!(source.size(), 0);
    assert!(source.is_empty());
    assert_eq!(destination.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_display() {
    assert_eq!(Buffer::<f32>::empty().to_string(), "<unallocated>");
    assert_eq!(range_buffer(4).to_string(), "{0..3}");
}

#[test]
fn test_ndarray_interop() {
    let array = ndarray::Array1::from_vec(vec![1.0f64, 2.0, 3.0]);
    let mut buffer = Buffer::from(array.clone());
    assert_eq!(buffer.to_array(), array);

    buffer.as_array_mut()[1] = 5.0;
    assert_eq!(buffer.view(1, 3).unwrap().as_array().sum(), 8.0);
}
