use crate::traits::FloatScalar;
use crate::Matrix;

/// Complex scalar division, `(xr + i·xi) / (yr + i·yi)`, scaled by the
/// larger denominator component to avoid overflow.
#[inline]
pub(crate) fn cdiv<T: FloatScalar>(xr: T, xi: T, yr: T, yi: T) -> (T, T) {
    if yr.abs() > yi.abs() {
        let r = yi / yr;
        let d = yr + r * yi;
        ((xr + r * xi) / d, (xi - r * xr) / d)
    } else {
        let r = yr / yi;
        let d = yi + r * yr;
        ((r * xr + xi) / d, (r * xi - xr) / d)
    }
}

/// Conversion for the shift constants of the classic Algol procedure; every
/// one of them is exactly representable in `f32` and `f64`.
#[inline]
fn cst<T: FloatScalar>(x: f64) -> T {
    T::from(x).unwrap()
}

/// Implicit double-shift QR iteration from upper Hessenberg to real Schur
/// form, with eigenvector recovery.
///
/// `h` is the Hessenberg matrix and `v` the orthogonal transform accumulated
/// by [`hessenberg`](crate::linalg::hessenberg::hessenberg). On return:
/// - `d`/`e` hold the real and imaginary eigenvalue parts; complex
///   conjugate pairs sit in adjacent entries as `+μ`/`−μ`
/// - `v` holds the eigenvectors of the *original* matrix (back-substituted
///   through the Schur form, then back-transformed through the Hessenberg
///   reduction)
///
/// Deflation uses the `|h[l][l-1]| < eps·s` test against the local diagonal
/// scale. After 10 stagnant iterations on one eigenvalue the exceptional
/// (Wilkinson) shift is applied; after 30, the secondary ad-hoc shift. Both
/// counts and the `0.75` / `-0.4375` / `0.964` shift constants are
/// load-bearing convergence tuning and must not be changed.
///
/// `max_iter` bounds the total iteration count. On exhaustion the remaining
/// diagonal is taken as-is and `false` is returned; the caller surfaces this
/// through a convergence flag rather than an error.
pub(crate) fn hessenberg_schur<T: FloatScalar>(
    h: &mut Matrix<T>,
    v: &mut Matrix<T>,
    d: &mut [T],
    e: &mut [T],
    max_iter: usize,
) -> bool {
    let nn = h.nrows();
    if nn == 0 {
        return true;
    }

    let eps = T::epsilon();
    let zero = T::zero();
    let one = T::one();
    let two = one + one;

    let mut exshift = zero;
    let mut p = zero;
    let mut q = zero;
    let mut r = zero;
    let mut s = zero;
    let mut z = zero;
    let mut t;
    let mut w;
    let mut x;
    let mut y;

    let mut norm = zero;
    for i in 0..nn {
        for j in i.saturating_sub(1)..nn {
            norm = norm + h[(i, j)].abs();
        }
    }

    let mut converged = true;
    let mut n = nn - 1;
    let mut iter = 0usize;
    let mut total_iter = 0usize;

    // Outer loop over eigenvalue index, counting down.
    'outer: loop {
        // Look for a single small sub-diagonal element.
        let mut l = n;
        while l > 0 {
            s = h[(l - 1, l - 1)].abs() + h[(l, l)].abs();
            if s == zero {
                s = norm;
            }
            if h[(l, l - 1)].abs() < eps * s {
                break;
            }
            l -= 1;
        }

        if l == n {
            // One root found.
            h[(n, n)] = h[(n, n)] + exshift;
            d[n] = h[(n, n)];
            e[n] = zero;
            if n == 0 {
                break 'outer;
            }
            n -= 1;
            iter = 0;
        } else if l + 1 == n {
            // Two roots found: solve the trailing 2×2 block in closed form.
            w = h[(n, n - 1)] * h[(n - 1, n)];
            p = (h[(n - 1, n - 1)] - h[(n, n)]) / two;
            q = p * p + w;
            z = q.abs().sqrt();
            h[(n, n)] = h[(n, n)] + exshift;
            h[(n - 1, n - 1)] = h[(n - 1, n - 1)] + exshift;
            x = h[(n, n)];

            if q >= zero {
                // Real pair.
                z = if p >= zero { p + z } else { p - z };
                d[n - 1] = x + z;
                d[n] = d[n - 1];
                if z != zero {
                    d[n] = x - w / z;
                }
                e[n - 1] = zero;
                e[n] = zero;
                x = h[(n, n - 1)];
                s = x.abs() + z.abs();
                p = x / s;
                q = z / s;
                r = (p * p + q * q).sqrt();
                p = p / r;
                q = q / r;

                // Row modification.
                for j in (n - 1)..nn {
                    z = h[(n - 1, j)];
                    h[(n - 1, j)] = q * z + p * h[(n, j)];
                    h[(n, j)] = q * h[(n, j)] - p * z;
                }

                // Column modification.
                for i in 0..=n {
                    z = h[(i, n - 1)];
                    h[(i, n - 1)] = q * z + p * h[(i, n)];
                    h[(i, n)] = q * h[(i, n)] - p * z;
                }

                // Accumulate transformations.
                for i in 0..nn {
                    z = v[(i, n - 1)];
                    v[(i, n - 1)] = q * z + p * v[(i, n)];
                    v[(i, n)] = q * v[(i, n)] - p * z;
                }
            } else {
                // Complex conjugate pair.
                d[n - 1] = x + p;
                d[n] = x + p;
                e[n - 1] = z;
                e[n] = -z;
            }
            iter = 0;
            if n >= 2 {
                n -= 2;
            } else {
                break 'outer;
            }
        } else {
            // No convergence yet: form the shift.
            x = h[(n, n)];
            y = zero;
            w = zero;
            if l < n {
                y = h[(n - 1, n - 1)];
                w = h[(n, n - 1)] * h[(n - 1, n)];
            }

            // Wilkinson's original ad hoc shift.
            if iter == 10 {
                exshift = exshift + x;
                for i in 0..=n {
                    h[(i, i)] = h[(i, i)] - x;
                }
                s = h[(n, n - 1)].abs() + h[(n - 1, n - 2)].abs();
                x = cst::<T>(0.75) * s;
                y = x;
                w = cst::<T>(-0.4375) * s * s;
            }

            // The secondary ad hoc shift.
            if iter == 30 {
                s = (y - x) / two;
                s = s * s + w;
                if s > zero {
                    s = s.sqrt();
                    if y < x {
                        s = -s;
                    }
                    s = x - w / ((y - x) / two + s);
                    for i in 0..=n {
                        h[(i, i)] = h[(i, i)] - s;
                    }
                    exshift = exshift + s;
                    x = cst::<T>(0.964);
                    y = x;
                    w = x;
                }
            }

            iter += 1;
            total_iter += 1;
            if total_iter > max_iter {
                // Out of budget: take the remaining diagonal as-is.
                converged = false;
                for i in 0..=n {
                    d[i] = h[(i, i)] + exshift;
                    e[i] = zero;
                }
                break 'outer;
            }

            // Look for two consecutive small sub-diagonal elements.
            let mut m = n - 2;
            loop {
                z = h[(m, m)];
                r = x - z;
                s = y - z;
                p = (r * s - w) / h[(m + 1, m)] + h[(m, m + 1)];
                q = h[(m + 1, m + 1)] - z - r - s;
                r = h[(m + 2, m + 1)];
                s = p.abs() + q.abs() + r.abs();
                p = p / s;
                q = q / s;
                r = r / s;
                if m == l {
                    break;
                }
                if h[(m, m - 1)].abs() * (q.abs() + r.abs())
                    < eps
                        * (p.abs()
                            * (h[(m - 1, m - 1)].abs() + z.abs() + h[(m + 1, m + 1)].abs()))
                {
                    break;
                }
                m -= 1;
            }

            for i in (m + 2)..=n {
                h[(i, i - 2)] = zero;
                if i > m + 2 {
                    h[(i, i - 3)] = zero;
                }
            }

            // Double QR step on rows l..=n and columns m..=n.
            for k in m..n {
                let notlast = k != n - 1;
                if k != m {
                    p = h[(k, k - 1)];
                    q = h[(k + 1, k - 1)];
                    r = if notlast { h[(k + 2, k - 1)] } else { zero };
                    x = p.abs() + q.abs() + r.abs();
                    if x == zero {
                        continue;
                    }
                    p = p / x;
                    q = q / x;
                    r = r / x;
                }

                s = (p * p + q * q + r * r).sqrt();
                if p < zero {
                    s = -s;
                }
                if s != zero {
                    if k != m {
                        h[(k, k - 1)] = -s * x;
                    } else if l != m {
                        h[(k, k - 1)] = -h[(k, k - 1)];
                    }
                    p = p + s;
                    x = p / s;
                    y = q / s;
                    z = r / s;
                    q = q / p;
                    r = r / p;

                    // Row modification.
                    for j in k..nn {
                        p = h[(k, j)] + q * h[(k + 1, j)];
                        if notlast {
                            p = p + r * h[(k + 2, j)];
                            h[(k + 2, j)] = h[(k + 2, j)] - p * z;
                        }
                        h[(k, j)] = h[(k, j)] - p * x;
                        h[(k + 1, j)] = h[(k + 1, j)] - p * y;
                    }

                    // Column modification.
                    for i in 0..=n.min(k + 3) {
                        p = x * h[(i, k)] + y * h[(i, k + 1)];
                        if notlast {
                            p = p + z * h[(i, k + 2)];
                            h[(i, k + 2)] = h[(i, k + 2)] - p * r;
                        }
                        h[(i, k)] = h[(i, k)] - p;
                        h[(i, k + 1)] = h[(i, k + 1)] - p * q;
                    }

                    // Accumulate transformations.
                    for i in 0..nn {
                        p = x * v[(i, k)] + y * v[(i, k + 1)];
                        if notlast {
                            p = p + z * v[(i, k + 2)];
                            v[(i, k + 2)] = v[(i, k + 2)] - p * r;
                        }
                        v[(i, k)] = v[(i, k)] - p;
                        v[(i, k + 1)] = v[(i, k + 1)] - p * q;
                    }
                }
            }
        }
    }

    // Backsubstitute to find the vectors of the upper triangular form.
    if norm == zero {
        return converged;
    }

    for nb in (0..nn).rev() {
        p = d[nb];
        q = e[nb];

        if q == zero {
            // Real eigenvector.
            let mut ll = nb;
            h[(nb, nb)] = one;
            for i in (0..nb).rev() {
                w = h[(i, i)] - p;
                r = zero;
                for j in ll..=nb {
                    r = r + h[(i, j)] * h[(j, nb)];
                }
                if e[i] < zero {
                    z = w;
                    s = r;
                } else {
                    ll = i;
                    if e[i] == zero {
                        h[(i, nb)] = if w != zero { -r / w } else { -r / (eps * norm) };
                    } else {
                        // Solve the real 2×2 block equations.
                        x = h[(i, i + 1)];
                        y = h[(i + 1, i)];
                        q = (d[i] - p) * (d[i] - p) + e[i] * e[i];
                        t = (x * s - z * r) / q;
                        h[(i, nb)] = t;
                        h[(i + 1, nb)] = if x.abs() > z.abs() {
                            (-r - w * t) / x
                        } else {
                            (-s - y * t) / z
                        };
                    }

                    // Overflow control.
                    t = h[(i, nb)].abs();
                    if (eps * t) * t > one {
                        for j in i..=nb {
                            h[(j, nb)] = h[(j, nb)] / t;
                        }
                    }
                }
            }
        } else if q < zero {
            // Complex eigenvector; the pair occupies columns nb-1 and nb.
            let mut ll = nb - 1;

            // Last vector component imaginary, so the matrix is triangular.
            if h[(nb, nb - 1)].abs() > h[(nb - 1, nb)].abs() {
                h[(nb - 1, nb - 1)] = q / h[(nb, nb - 1)];
                h[(nb - 1, nb)] = -(h[(nb, nb)] - p) / h[(nb, nb - 1)];
            } else {
                let (cr, ci) = cdiv(zero, -h[(nb - 1, nb)], h[(nb - 1, nb - 1)] - p, q);
                h[(nb - 1, nb - 1)] = cr;
                h[(nb - 1, nb)] = ci;
            }
            h[(nb, nb - 1)] = zero;
            h[(nb, nb)] = one;
            for i in (0..nb - 1).rev() {
                let mut ra = zero;
                let mut sa = zero;
                for j in ll..=nb {
                    ra = ra + h[(i, j)] * h[(j, nb - 1)];
                    sa = sa + h[(i, j)] * h[(j, nb)];
                }
                w = h[(i, i)] - p;

                if e[i] < zero {
                    z = w;
                    r = ra;
                    s = sa;
                } else {
                    ll = i;
                    if e[i] == zero {
                        let (cr, ci) = cdiv(-ra, -sa, w, q);
                        h[(i, nb - 1)] = cr;
                        h[(i, nb)] = ci;
                    } else {
                        // Solve the complex 2×2 block equations.
                        x = h[(i, i + 1)];
                        y = h[(i + 1, i)];
                        let mut vr = (d[i] - p) * (d[i] - p) + e[i] * e[i] - q * q;
                        let vi = (d[i] - p) * two * q;
                        if vr == zero && vi == zero {
                            vr = eps
                                * norm
                                * (w.abs() + q.abs() + x.abs() + y.abs() + z.abs());
                        }
                        let (cr, ci) =
                            cdiv(x * r - z * ra + q * sa, x * s - z * sa - q * ra, vr, vi);
                        h[(i, nb - 1)] = cr;
                        h[(i, nb)] = ci;
                        if x.abs() > z.abs() + q.abs() {
                            h[(i + 1, nb - 1)] =
                                (-ra - w * h[(i, nb - 1)] + q * h[(i, nb)]) / x;
                            h[(i + 1, nb)] =
                                (-sa - w * h[(i, nb)] - q * h[(i, nb - 1)]) / x;
                        } else {
                            let (cr, ci) =
                                cdiv(-r - y * h[(i, nb - 1)], -s - y * h[(i, nb)], z, q);
                            h[(i + 1, nb - 1)] = cr;
                            h[(i + 1, nb)] = ci;
                        }
                    }

                    // Overflow control.
                    t = h[(i, nb - 1)].abs().max(h[(i, nb)].abs());
                    if (eps * t) * t > one {
                        for j in i..=nb {
                            h[(j, nb - 1)] = h[(j, nb - 1)] / t;
                            h[(j, nb)] = h[(j, nb)] / t;
                        }
                    }
                }
            }
        }
    }

    // Back transformation to the eigenvectors of the original matrix.
    for j in (0..nn).rev() {
        for i in 0..nn {
            z = zero;
            for k in 0..=j {
                z = z + v[(i, k)] * h[(k, j)];
            }
            v[(i, j)] = z;
        }
    }

    converged
}
