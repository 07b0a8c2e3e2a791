use crate::traits::FloatScalar;
use crate::Matrix;

/// Householder reduction of a symmetric matrix to tridiagonal form.
///
/// On entry `v` holds the symmetric input. On return:
/// - `d[0..n]` contains the diagonal of the tridiagonal matrix
/// - `e[1..n]` contains the sub-diagonal (`e[0]` is zero)
/// - `v` holds the accumulated orthogonal transform Q, with Qᵀ·A·Q
///   tridiagonal
///
/// Columns are scaled before forming each reflector to avoid
/// under/overflow in the norm.
pub(crate) fn tridiagonalize<T: FloatScalar>(v: &mut Matrix<T>, d: &mut [T], e: &mut [T]) {
    let n = v.nrows();
    if n == 0 {
        return;
    }

    for j in 0..n {
        d[j] = v[(n - 1, j)];
    }

    // Householder reduction, working up from the last row.
    for i in (1..n).rev() {
        let mut scale = T::zero();
        let mut h = T::zero();
        for k in 0..i {
            scale = scale + d[k].abs();
        }
        if scale == T::zero() {
            e[i] = d[i - 1];
            for j in 0..i {
                d[j] = v[(i - 1, j)];
                v[(i, j)] = T::zero();
                v[(j, i)] = T::zero();
            }
        } else {
            // Generate the Householder vector.
            for k in 0..i {
                d[k] = d[k] / scale;
                h = h + d[k] * d[k];
            }
            let mut f = d[i - 1];
            let mut g = h.sqrt();
            if f > T::zero() {
                g = T::zero() - g;
            }
            e[i] = scale * g;
            h = h - f * g;
            d[i - 1] = f - g;
            for j in 0..i {
                e[j] = T::zero();
            }

            // Apply the similarity transformation to the remaining rows.
            for j in 0..i {
                f = d[j];
                v[(j, i)] = f;
                g = e[j] + v[(j, j)] * f;
                for k in (j + 1)..i {
                    g = g + v[(k, j)] * d[k];
                    e[k] = e[k] + v[(k, j)] * f;
                }
                e[j] = g;
            }
            f = T::zero();
            for j in 0..i {
                e[j] = e[j] / h;
                f = f + e[j] * d[j];
            }
            let hh = f / (h + h);
            for j in 0..i {
                e[j] = e[j] - hh * d[j];
            }
            for j in 0..i {
                f = d[j];
                g = e[j];
                for k in j..i {
                    v[(k, j)] = v[(k, j)] - (f * e[k] + g * d[k]);
                }
                d[j] = v[(i - 1, j)];
                v[(i, j)] = T::zero();
            }
        }
        d[i] = h;
    }

    // Accumulate the transformations.
    for i in 0..n - 1 {
        v[(n - 1, i)] = v[(i, i)];
        v[(i, i)] = T::one();
        let h = d[i + 1];
        if h != T::zero() {
            for k in 0..=i {
                d[k] = v[(k, i + 1)] / h;
            }
            for j in 0..=i {
                let mut g = T::zero();
                for k in 0..=i {
                    g = g + v[(k, i + 1)] * v[(k, j)];
                }
                for k in 0..=i {
                    v[(k, j)] = v[(k, j)] - g * d[k];
                }
            }
        }
        for k in 0..=i {
            v[(k, i + 1)] = T::zero();
        }
    }
    for j in 0..n {
        d[j] = v[(n - 1, j)];
        v[(n - 1, j)] = T::zero();
    }
    v[(n - 1, n - 1)] = T::one();
    e[0] = T::zero();
}

/// Implicit-shift QL iteration on a symmetric tridiagonal matrix.
///
/// `d`/`e` are the diagonal and sub-diagonal from [`tridiagonalize`]; on
/// return `d` holds the eigenvalues sorted ascending, and the rotations are
/// accumulated into the eigenvector columns of `v` (permuted to match the
/// sort).
///
/// `max_iter` bounds the total number of QL sweeps; on exhaustion the
/// current values are kept and `false` is returned. Every sweep otherwise
/// continues until the split sub-diagonal entry drops below
/// `eps * (|d| + |e|)` scale.
pub(crate) fn tridiagonal_ql<T: FloatScalar>(
    d: &mut [T],
    e: &mut [T],
    v: &mut Matrix<T>,
    max_iter: usize,
) -> bool {
    let n = d.len();
    if n <= 1 {
        return true;
    }

    for i in 1..n {
        e[i - 1] = e[i];
    }
    e[n - 1] = T::zero();

    let mut f = T::zero();
    let mut tst1 = T::zero();
    let eps = T::epsilon();
    let two = T::one() + T::one();
    let mut iter = 0usize;
    let mut converged = true;

    for l in 0..n {
        // Find a small sub-diagonal element to split at.
        tst1 = tst1.max(d[l].abs() + e[l].abs());
        let mut m = l;
        while m < n {
            if e[m].abs() <= eps * tst1 {
                break;
            }
            m += 1;
        }

        // If m == l, d[l] is already an eigenvalue; otherwise iterate.
        if m > l {
            loop {
                iter += 1;
                if iter > max_iter {
                    converged = false;
                    break;
                }

                // Compute the implicit shift.
                let mut g = d[l];
                let mut p = (d[l + 1] - g) / (two * e[l]);
                let mut r = p.hypot(T::one());
                if p < T::zero() {
                    r = T::zero() - r;
                }
                d[l] = e[l] / (p + r);
                d[l + 1] = e[l] * (p + r);
                let dl1 = d[l + 1];
                let mut h = g - d[l];
                for i in (l + 2)..n {
                    d[i] = d[i] - h;
                }
                f = f + h;

                // Implicit QL sweep from m back down to l.
                p = d[m];
                let mut c = T::one();
                let mut c2 = c;
                let mut c3 = c;
                let el1 = e[l + 1];
                let mut s = T::zero();
                let mut s2 = T::zero();
                for i in (l..m).rev() {
                    c3 = c2;
                    c2 = c;
                    s2 = s;
                    g = c * e[i];
                    h = c * p;
                    r = p.hypot(e[i]);
                    e[i + 1] = s * r;
                    s = e[i] / r;
                    c = p / r;
                    p = c * d[i] - s * g;
                    d[i + 1] = h + s * (c * g + s * d[i]);

                    // Accumulate the rotation into the eigenvectors.
                    for k in 0..n {
                        h = v[(k, i + 1)];
                        v[(k, i + 1)] = s * v[(k, i)] + c * h;
                        v[(k, i)] = c * v[(k, i)] - s * h;
                    }
                }
                p = (T::zero() - s) * s2 * c3 * el1 * e[l] / dl1;
                e[l] = s * p;
                d[l] = c * p;

                if e[l].abs() <= eps * tst1 {
                    break;
                }
            }
        }
        d[l] = d[l] + f;
        e[l] = T::zero();
    }

    // Sort eigenvalues ascending and permute eigenvector columns.
    for i in 0..n - 1 {
        let mut k = i;
        let mut p = d[i];
        for j in (i + 1)..n {
            if d[j] < p {
                k = j;
                p = d[j];
            }
        }
        if k != i {
            d[k] = d[i];
            d[i] = p;
            for j in 0..n {
                let tmp = v[(j, i)];
                v[(j, i)] = v[(j, k)];
                v[(j, k)] = tmp;
            }
        }
    }

    converged
}
