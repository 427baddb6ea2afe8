//! Portable inner loops behind [`super::KernelPath`].
//!
//! Callers have already checked shapes: `y.len() == x.len() - k.len() + 1`.

use num_traits::Float;

/// One multiply-add per tap, no unrolling.
pub fn conv1d_general<F: Float>(x: &[F], k: &[F], y: &mut [F]) {
    for (i, out) in y.iter_mut().enumerate() {
        let mut total = F::zero();
        for (&tap, &sample) in k.iter().zip(&x[i..]) {
            total = total + tap * sample;
        }
        *out = total;
    }
}

/// Taps are consumed in blocks of `BLOCK`; `k.len()` must be a multiple of it.
///
/// Accumulation order matches [`conv1d_general`] exactly.
pub fn conv1d_blocked<F: Float, const BLOCK: usize>(x: &[F], k: &[F], y: &mut [F]) {
    debug_assert_eq!(k.len() % BLOCK, 0, "kernel size must be a multiple of {}", BLOCK);
    let kernel_len = k.len();

    for (i, out) in y.iter_mut().enumerate() {
        let window = &x[i..i + kernel_len];
        let mut total = F::zero();
        for (taps, samples) in k.chunks_exact(BLOCK).zip(window.chunks_exact(BLOCK)) {
            for t in 0..BLOCK {
                total = total + taps[t] * samples[t];
            }
        }
        *out = total;
    }
}

pub fn conv1d_single_tap<F: Float>(x: &[F], tap: F, y: &mut [F]) {
    for (out, &sample) in y.iter_mut().zip(x) {
        *out = sample * tap;
    }
}
