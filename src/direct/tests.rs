use super::*;
use crate::convolution::reference_conv1d;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn buffer(values: &[f32]) -> Buffer<f32> {
    Buffer::from_vec(values.to_vec())
}

#[test]
fn test_valid_mode() {
    let x = buffer(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let k = buffer(&[1.0, 0.0, -1.0]);
    let conv = DirectConv1d::with_kernel(k.as_view(), ConvMode::Valid);

    let y = conv.conv(x.as_view()).unwrap();

    assert_eq!(conv.output_size(5), 3);
    assert_eq!(y.as_slice(), &[2.0, 2.0, 2.0]);
}

#[test]
fn test_kernel_is_flipped() {
    let x = buffer(&[0.0, 0.0, 1.0, 0.0, 0.0]);
    let k = buffer(&[1.0, 2.0, 3.0]);
    let conv = DirectConv1d::with_kernel(k.as_view(), ConvMode::Valid);

    // an impulse reproduces the kernel in its original order
    assert_eq!(conv.conv(x.as_view()).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_same_mode_odd_kernel() {
    let x = buffer(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let k = buffer(&[1.0, 0.0, -1.0]);
    let conv = DirectConv1d::with_kernel(k.as_view(), ConvMode::Same);

    let y = conv.conv(x.as_view()).unwrap();

    assert_eq!(conv.output_size(5), 5);
    assert_eq!(y.as_slice(), &[0.0, 2.0, 2.0, 2.0, 0.0]);
}

#[test]
fn test_same_mode_even_kernel() {
    let x = buffer(&[1.0; 8]);
    let k = buffer(&[1.0; 4]);
    let conv = DirectConv1d::with_kernel(k.as_view(), ConvMode::Same);

    let y = conv.conv(x.as_view()).unwrap();

    assert_eq!(y.as_slice(), &[0.0, 4.0, 4.0, 4.0, 4.0, 4.0, 0.0, 0.0]);
}

#[test]
fn test_kernel_as_long_as_input() {
    let x = buffer(&[1.0, 2.0, 3.0, 4.0]);
    let k = buffer(&[1.0, 1.0, 1.0, 1.0]);
    let conv = DirectConv1d::with_kernel(k.as_view(), ConvMode::Valid);

    assert_eq!(conv.conv(x.as_view()).unwrap().as_slice(), &[10.0]);
}

#[test]
fn test_matches_reference() {
    let mut rng = StdRng::seed_from_u64(42);

    for kernel_size in 1..=33 {
        let input_size = kernel_size + rng.gen_range(0..100);
        let x: Buffer<f64> = (0..input_size).map(|_| rng.gen_range(-5.0..5.0)).collect();
        let k: Buffer<f64> = (0..kernel_size).map(|_| rng.gen_range(-5.0..5.0)).collect();
        let conv = DirectConv1d::with_kernel(k.as_view(), ConvMode::Valid);

        let y = conv.conv(x.as_view()).unwrap();

        assert_eq!(y.len(), input_size - kernel_size + 1);
        assert_eq!(y.as_slice(), reference_conv1d(x.as_slice(), k.as_slice()).as_slice());
    }
}

#[test]
fn test_zero_kernel_gives_zero_output() {
    let x: Buffer<f32> = (0..50).map(|i| (i as f32 * 0.3).sin()).collect();
    for kernel_size in [1, 3, 4, 8, 13, 16] {
        let k = Buffer::<f32>::new(kernel_size);
        let conv = DirectConv1d::with_kernel(k.as_view(), ConvMode::Valid);
        assert!(conv.conv(x.as_view()).unwrap().iter().all(|&v| v == 0.0));
    }
}

#[test]
fn test_moving_average_of_constant_signal() {
    let x = buffer(&[0.7; 64]);
    let k = buffer(&[0.2; 5]);
    let conv = DirectConv1d::with_kernel(k.as_view(), ConvMode::Valid);

    for &value in conv.conv(x.as_view()).unwrap().iter() {
        assert_relative_eq!(value, 0.7, epsilon = 1e-6);
    }
}

#[test]
fn test_set_kernel_replaces_previous_kernel() {
    let x = buffer(&[1.0, 2.0, 3.0, 4.0]);
    let mut conv = DirectConv1d::new(ConvMode::Valid);

    conv.set_kernel(buffer(&[1.0, 1.0]).as_view());
    assert_eq!(conv.conv(x.as_view()).unwrap().as_slice(), &[3.0, 5.0, 7.0]);

    conv.set_kernel(buffer(&[2.0]).as_view());
    assert_eq!(conv.kernel_size(), 1);
    assert_eq!(conv.conv(x.as_view()).unwrap().as_slice(), &[2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn test_input_sub_view() {
    let x: Buffer<f32> = (0..10).map(|i| i as f32).collect();
    let conv = DirectConv1d::with_kernel(buffer(&[1.0, 1.0]).as_view(), ConvMode::Valid);

    let y = conv.conv(x.view(3, 6).unwrap()).unwrap();

    assert_eq!(y.as_slice(), &[7.0, 9.0]);
}

#[test]
fn test_errors() {
    let x = buffer(&[1.0, 2.0]);

    let conv = DirectConv1d::<f32>::new(ConvMode::Valid);
    assert_eq!(conv.conv(x.as_view()).unwrap_err(), ConvError::EmptyKernel);

    let conv = DirectConv1d::with_kernel(buffer(&[1.0; 3]).as_view(), ConvMode::Same);
    assert_eq!(
        conv.conv(x.as_view()).unwrap_err(),
        ConvError::KernelTooLong { kernel: 3, input: 2 }
    );
}
