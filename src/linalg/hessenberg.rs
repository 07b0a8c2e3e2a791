use crate::traits::FloatScalar;
use crate::Matrix;

/// Householder reduction of a square matrix to upper Hessenberg form.
///
/// On return `h` is upper Hessenberg and `v` holds the accumulated
/// orthogonal transform, with `Vᵀ·A·V = H`. `ort` is working storage of
/// length n for the reflector vectors; its contents are scratch afterwards.
///
/// Columns are scaled before forming each reflector to avoid
/// under/overflow, and the accumulation pass divides twice
/// (`(g / ort[m]) / h[m][m-1]`) for the same reason.
pub(crate) fn hessenberg<T: FloatScalar>(h: &mut Matrix<T>, v: &mut Matrix<T>, ort: &mut [T]) {
    let n = h.nrows();
    if n == 0 {
        return;
    }
    let high = n - 1;

    for m in 1..high {
        // Scale the column below the sub-diagonal.
        let mut scale = T::zero();
        for i in m..=high {
            scale = scale + h[(i, m - 1)].abs();
        }
        if scale != T::zero() {
            // Compute the Householder transformation.
            let mut hsum = T::zero();
            for i in (m..=high).rev() {
                ort[i] = h[(i, m - 1)] / scale;
                hsum = hsum + ort[i] * ort[i];
            }
            let mut g = hsum.sqrt();
            if ort[m] > T::zero() {
                g = T::zero() - g;
            }
            hsum = hsum - ort[m] * g;
            ort[m] = ort[m] - g;

            // Apply the similarity transform H = (I - u·uᵀ/h)·H·(I - u·uᵀ/h)
            for j in m..n {
                let mut f = T::zero();
                for i in (m..=high).rev() {
                    f = f + ort[i] * h[(i, j)];
                }
                f = f / hsum;
                for i in m..=high {
                    h[(i, j)] = h[(i, j)] - f * ort[i];
                }
            }
            for i in 0..=high {
                let mut f = T::zero();
                for j in (m..=high).rev() {
                    f = f + ort[j] * h[(i, j)];
                }
                f = f / hsum;
                for j in m..=high {
                    h[(i, j)] = h[(i, j)] - f * ort[j];
                }
            }

            ort[m] = scale * ort[m];
            h[(m, m - 1)] = scale * g;
        }
    }

    // Accumulate the transformations into V.
    for i in 0..n {
        for j in 0..n {
            v[(i, j)] = if i == j { T::one() } else { T::zero() };
        }
    }
    for m in (1..high).rev() {
        if h[(m, m - 1)] != T::zero() {
            for i in (m + 1)..=high {
                ort[i] = h[(i, m - 1)];
            }
            for j in m..=high {
                let mut g = T::zero();
                for i in m..=high {
                    g = g + ort[i] * v[(i, j)];
                }
                // Double division avoids possible underflow.
                g = (g / ort[m]) / h[(m, m - 1)];
                for i in m..=high {
                    v[(i, j)] = v[(i, j)] + g * ort[i];
                }
            }
        }
    }
}
