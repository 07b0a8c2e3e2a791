use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, MatrixMut};
use crate::Matrix;

/// QR decomposition in place using Householder reflections.
///
/// On return, `a` contains the packed factorization:
/// - Strictly upper triangle: R (off-diagonal part)
/// - Lower trapezoid (including diagonal): Householder reflector vectors
///
/// `rdiag` receives the diagonal of R, kept out of the packed buffer so the
/// reflector vectors can occupy the diagonal. Each diagonal entry is the
/// column norm with its sign flipped against `a[k][k]` to avoid
/// cancellation when forming the reflector.
///
/// Works on rectangular matrices with `m >= n`. A zero column leaves a zero
/// in `rdiag`; rank deficiency is reported by
/// [`QrDecomposition::is_full_rank`], not here.
pub fn qr_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>, rdiag: &mut [T]) {
    let m = a.nrows();
    let n = a.ncols();
    assert!(m >= n, "QR decomposition requires M >= N");
    assert_eq!(rdiag.len(), n, "rdiag length must equal N");

    for k in 0..n {
        // 2-norm of the sub-column a[k:m, k], accumulated with hypot.
        let mut nrm = T::zero();
        for i in k..m {
            nrm = nrm.hypot(*a.get(i, k));
        }

        if nrm != T::zero() {
            // Flip the sign so v = x + sign(x0)*||x||*e1 never cancels.
            if *a.get(k, k) < T::zero() {
                nrm = T::zero() - nrm;
            }
            for i in k..m {
                let v = *a.get(i, k) / nrm;
                *a.get_mut(i, k) = v;
            }
            *a.get_mut(k, k) = *a.get(k, k) + T::one();

            // Apply the reflector to the trailing columns.
            for j in (k + 1)..n {
                let mut s = T::zero();
                for i in k..m {
                    s = s + *a.get(i, k) * *a.get(i, j);
                }
                s = (T::zero() - s) / *a.get(k, k);
                for i in k..m {
                    let v = *a.get(i, j) + s * *a.get(i, k);
                    *a.get_mut(i, j) = v;
                }
            }
        }
        rdiag[k] = T::zero() - nrm;
    }
}

/// QR decomposition of an `m × n` matrix with `m >= n`.
///
/// Householder factorization into orthogonal Q and upper-triangular R,
/// computed once from a snapshot of the input. The reflector vectors stay
/// packed in the lower trapezoid; `Q` and `H` are reconstructed on demand.
/// Construction never fails: rank deficiency is reported by
/// [`QrDecomposition::is_full_rank`] and fails the solve instead.
///
/// # Example
///
/// ```
/// use eigenum::{Matrix, Vector};
///
/// // Least-squares fit y = c0 + c1*x to the points (0,1), (1,2), (2,4)
/// let a = Matrix::from_rows(3, 2, &[
///     1.0_f64, 0.0,
///     1.0, 1.0,
///     1.0, 2.0,
/// ]);
/// let b = Vector::from_slice(&[1.0, 2.0, 4.0]);
/// let x = a.qr().solve_vec(&b).unwrap();
/// assert!((x[0] - 5.0 / 6.0).abs() < 1e-10);
/// assert!((x[1] - 3.0 / 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct QrDecomposition<T> {
    qr: Matrix<T>,
    rdiag: Vec<T>,
}

impl<T: FloatScalar> QrDecomposition<T> {
    /// Decompose a matrix. Panics if `m < n`.
    pub fn new(a: &Matrix<T>) -> Self {
        assert!(a.nrows() >= a.ncols(), "QR decomposition requires M >= N");
        let mut qr = a.clone();
        let mut rdiag = vec![T::zero(); a.ncols()];
        qr_in_place(&mut qr, &mut rdiag);
        Self { qr, rdiag }
    }

    /// Whether R has no zero diagonal entry, i.e. the columns of the input
    /// are linearly independent.
    ///
    /// `false` exactly when [`QrDecomposition::solve`] would return
    /// [`LinalgError::RankDeficient`].
    pub fn is_full_rank(&self) -> bool {
        for &d in &self.rdiag {
            if d == T::zero() {
                return false;
            }
        }
        true
    }

    /// Extract the upper-triangular R factor (N × N).
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     12.0_f64, -51.0, 4.0,
    ///     6.0, 167.0, -68.0,
    ///     -4.0, 24.0, -41.0,
    /// ]);
    /// let r = a.qr().r();
    /// assert!((r[(1, 0)]).abs() < 1e-12);
    /// assert!((r[(2, 0)]).abs() < 1e-12);
    /// ```
    pub fn r(&self) -> Matrix<T> {
        let n = self.qr.ncols();
        let mut r = Matrix::zeros(n, n, T::zero());
        for i in 0..n {
            r[(i, i)] = self.rdiag[i];
            for j in (i + 1)..n {
                r[(i, j)] = self.qr[(i, j)];
            }
        }
        r
    }

    /// Extract the packed Householder reflector vectors (M × N lower
    /// trapezoid).
    pub fn h(&self) -> Matrix<T> {
        let m = self.qr.nrows();
        let n = self.qr.ncols();
        let mut h = Matrix::zeros(m, n, T::zero());
        for i in 0..m {
            for j in 0..n.min(i + 1) {
                h[(i, j)] = self.qr[(i, j)];
            }
        }
        h
    }

    /// Compute the thin Q factor (M × N, orthonormal columns).
    ///
    /// Applies the Householder reflections in reverse to the first N
    /// columns of the identity matrix.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     12.0_f64, -51.0, 4.0,
    ///     6.0, 167.0, -68.0,
    ///     -4.0, 24.0, -41.0,
    /// ]);
    /// let q = a.qr().q();
    /// let qtq = q.transpose() * &q;
    /// assert!((qtq[(0, 0)] - 1.0).abs() < 1e-10);
    /// assert!((qtq[(0, 1)]).abs() < 1e-10);
    /// ```
    pub fn q(&self) -> Matrix<T> {
        let m = self.qr.nrows();
        let n = self.qr.ncols();
        let mut q = Matrix::zeros(m, n, T::zero());

        for k in (0..n).rev() {
            q[(k, k)] = T::one();
            for j in k..n {
                if self.qr[(k, k)] != T::zero() {
                    let mut s = T::zero();
                    for i in k..m {
                        s = s + self.qr[(i, k)] * q[(i, j)];
                    }
                    s = (T::zero() - s) / self.qr[(k, k)];
                    for i in k..m {
                        q[(i, j)] = q[(i, j)] + s * self.qr[(i, k)];
                    }
                }
            }
        }

        q
    }

    /// Least-squares solve: the X minimizing ‖A·X − B‖ column by column.
    ///
    /// Computes `Y = Qᵀ·B` by applying the reflectors in order, then back
    /// substitution against R.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] if `b.nrows() != a.nrows()`,
    /// [`LinalgError::RankDeficient`] if any `rdiag` entry is zero.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        let m = self.qr.nrows();
        let n = self.qr.ncols();
        if b.nrows() != m {
            return Err(LinalgError::DimensionMismatch {
                expected: (m, b.ncols()),
                got: (b.nrows(), b.ncols()),
            });
        }
        if !self.is_full_rank() {
            return Err(LinalgError::RankDeficient);
        }

        let nx = b.ncols();
        let mut y = b.clone();

        // Y = Q^T * B
        for k in 0..n {
            for j in 0..nx {
                let mut s = T::zero();
                for i in k..m {
                    s = s + self.qr[(i, k)] * y[(i, j)];
                }
                s = (T::zero() - s) / self.qr[(k, k)];
                for i in k..m {
                    y[(i, j)] = y[(i, j)] + s * self.qr[(i, k)];
                }
            }
        }

        // Solve R*X = Y for the first n rows
        for k in (0..n).rev() {
            for j in 0..nx {
                y[(k, j)] = y[(k, j)] / self.rdiag[k];
            }
            for i in 0..k {
                let r_ik = self.qr[(i, k)];
                for j in 0..nx {
                    y[(i, j)] = y[(i, j)] - y[(k, j)] * r_ik;
                }
            }
        }

        let mut x = Matrix::zeros(n, nx, T::zero());
        for i in 0..n {
            for j in 0..nx {
                x[(i, j)] = y[(i, j)];
            }
        }
        Ok(x)
    }

    /// Least-squares solve for a single right-hand side.
    ///
    /// Same error conditions as [`QrDecomposition::solve`].
    pub fn solve_vec(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let m = self.qr.nrows();
        if b.len() != m {
            return Err(LinalgError::DimensionMismatch {
                expected: (m, 1),
                got: (b.len(), 1),
            });
        }
        let x = self.solve(&b.to_column())?;
        Ok(Vector::from_vec(x.to_vec()))
    }
}

// ── Convenience methods ─────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// QR decomposition using Householder reflections.
    pub fn qr(&self) -> QrDecomposition<T> {
        QrDecomposition::new(self)
    }

    /// Solve `Ax = b` via QR decomposition (least squares for tall A).
    pub fn solve_qr(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.qr().solve_vec(b)
    }
}
