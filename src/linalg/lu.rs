use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::Matrix;

/// LU decomposition with partial pivoting, in place.
///
/// Crout-style column-by-column update: column `j` is refreshed with dot
/// products against the already-factored columns, then the largest remaining
/// magnitude is pivoted onto the diagonal.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `piv` is filled with the row permutation indices. Returns `true` if the
/// number of row swaps was even (the permutation sign, used for the
/// determinant).
///
/// A zero pivot does not fail the factorization; it is reported through
/// [`LuDecomposition::is_nonsingular`] and fails the solve instead.
pub fn lu_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>, piv: &mut [usize]) -> bool {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(n, piv.len(), "pivot slice length must match matrix size");

    for (i, p) in piv.iter_mut().enumerate() {
        *p = i;
    }

    let mut even = true;
    let mut col_j = vec![T::zero(); n];

    for j in 0..n {
        for i in 0..n {
            col_j[i] = *a.get(i, j);
        }

        // Crout update: subtract the dot product against the rows already
        // holding multipliers. kmax splits the L part from the U part.
        for i in 0..n {
            let kmax = i.min(j);
            let mut s = T::zero();
            for k in 0..kmax {
                s = s + *a.get(i, k) * col_j[k];
            }
            col_j[i] = col_j[i] - s;
            *a.get_mut(i, j) = col_j[i];
        }

        // Partial pivoting: largest magnitude at or below the diagonal.
        let mut p = j;
        for i in (j + 1)..n {
            if col_j[i].abs() > col_j[p].abs() {
                p = i;
            }
        }
        if p != j {
            for k in 0..n {
                let tmp = *a.get(p, k);
                *a.get_mut(p, k) = *a.get(j, k);
                *a.get_mut(j, k) = tmp;
            }
            piv.swap(p, j);
            even = !even;
        }

        // Scale the multipliers below the pivot. Exactly-zero pivots are
        // left untouched so the factorization of a singular matrix still
        // completes.
        let pivot = *a.get(j, j);
        if pivot != T::zero() {
            for i in (j + 1)..n {
                let v = *a.get(i, j) / pivot;
                *a.get_mut(i, j) = v;
            }
        }
    }

    even
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from [`lu_in_place`], `piv` its row
/// permutation. `b` (input) and `x` (output) are separate slices of length n.
/// The caller must have checked [`LuDecomposition::is_nonsingular`]; a zero
/// diagonal entry here divides by zero.
pub fn lu_solve<T: FloatScalar>(lu: &impl MatrixRef<T>, piv: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Apply permutation and forward substitution (solve Ly = Pb)
    for i in 0..n {
        let mut sum = b[piv[i]];
        for j in 0..i {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum / *lu.get(i, i);
    }
}

/// LU decomposition of a square matrix.
///
/// Stores the packed L/U factors, permutation vector, and permutation sign,
/// all computed once from a snapshot of the input. Construction never fails:
/// a singular matrix still factors, [`LuDecomposition::is_nonsingular`]
/// reports it, and [`LuDecomposition::solve`] is the operation that errors.
///
/// # Example
///
/// ```
/// use eigenum::{Matrix, Vector};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = a.lu();
/// assert!(lu.is_nonsingular());
///
/// let b = Vector::from_slice(&[4.0, 11.0]);
/// let x = lu.solve_vec(&b).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    lu: Matrix<T>,
    piv: Vec<usize>,
    even: bool,
}

impl<T: FloatScalar> LuDecomposition<T> {
    /// Decompose a square matrix. Panics if the matrix is not square.
    pub fn new(a: &Matrix<T>) -> Self {
        assert!(a.is_square(), "LU decomposition requires a square matrix");
        let n = a.nrows();
        let mut lu = a.clone();
        let mut piv = vec![0usize; n];
        let even = lu_in_place(&mut lu, &mut piv);
        Self { lu, piv, even }
    }

    /// Whether every diagonal pivot of U is nonzero.
    ///
    /// `false` exactly when [`LuDecomposition::solve`] would return
    /// [`LinalgError::Singular`].
    pub fn is_nonsingular(&self) -> bool {
        let n = self.lu.nrows();
        for j in 0..n {
            if self.lu[(j, j)] == T::zero() {
                return false;
            }
        }
        true
    }

    /// Extract the unit lower triangular factor L.
    pub fn l(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut l = Matrix::zeros(n, n, T::zero());
        for i in 0..n {
            l[(i, i)] = T::one();
            for j in 0..i {
                l[(i, j)] = self.lu[(i, j)];
            }
        }
        l
    }

    /// Extract the upper triangular factor U.
    pub fn u(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut u = Matrix::zeros(n, n, T::zero());
        for i in 0..n {
            for j in i..n {
                u[(i, j)] = self.lu[(i, j)];
            }
        }
        u
    }

    /// The row permutation: row `i` of the factorization came from row
    /// `pivot()[i]` of the original matrix.
    #[inline]
    pub fn pivot(&self) -> &[usize] {
        &self.piv
    }

    /// Compute the determinant (product of pivots times permutation sign).
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let mut d = if self.even {
            T::one()
        } else {
            T::zero() - T::one()
        };
        for i in 0..n {
            d = d * self.lu[(i, i)];
        }
        d
    }

    /// Solve A·X = B for X, where B may carry multiple right-hand-side
    /// columns.
    ///
    /// Forward substitution on the pivoted right-hand side, then back
    /// substitution against U.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] if `b.nrows() != a.nrows()`,
    /// [`LinalgError::Singular`] if any pivot is zero.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        let n = self.lu.nrows();
        if b.nrows() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: (n, b.ncols()),
                got: (b.nrows(), b.ncols()),
            });
        }
        if !self.is_nonsingular() {
            return Err(LinalgError::Singular);
        }

        let nx = b.ncols();
        let mut x = Matrix::zeros(n, nx, T::zero());
        for i in 0..n {
            for j in 0..nx {
                x[(i, j)] = b[(self.piv[i], j)];
            }
        }

        // Solve L·Y = P·B
        for k in 0..n {
            for i in (k + 1)..n {
                let m = self.lu[(i, k)];
                for j in 0..nx {
                    x[(i, j)] = x[(i, j)] - x[(k, j)] * m;
                }
            }
        }

        // Solve U·X = Y
        for k in (0..n).rev() {
            let d = self.lu[(k, k)];
            for j in 0..nx {
                x[(k, j)] = x[(k, j)] / d;
            }
            for i in 0..k {
                let m = self.lu[(i, k)];
                for j in 0..nx {
                    x[(i, j)] = x[(i, j)] - x[(k, j)] * m;
                }
            }
        }

        Ok(x)
    }

    /// Solve A·x = b for a single right-hand side.
    ///
    /// Same error conditions as [`LuDecomposition::solve`].
    pub fn solve_vec(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let n = self.lu.nrows();
        if b.len() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: (n, 1),
                got: (b.len(), 1),
            });
        }
        if !self.is_nonsingular() {
            return Err(LinalgError::Singular);
        }
        let mut x = vec![T::zero(); n];
        lu_solve(&self.lu, &self.piv, b.as_slice(), &mut x);
        Ok(Vector::from_vec(x))
    }
}

// ── Convenience methods on square matrices ──────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> LuDecomposition<T> {
        LuDecomposition::new(self)
    }

    /// Solve `Ax = b` for `x` via LU decomposition.
    ///
    /// ```
    /// use eigenum::{Matrix, Vector};
    /// let a = Matrix::from_rows(3, 3, &[
    ///     2.0_f64, 1.0, -1.0,
    ///     -3.0, -1.0, 2.0,
    ///     -2.0, 1.0, 2.0,
    /// ]);
    /// let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.lu().solve_vec(b)
    }

    /// Determinant via LU decomposition.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[3.0_f64, 8.0, 4.0, 6.0]);
    /// assert!((a.det() - (-14.0)).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> T {
        self.lu().det()
    }

    /// Matrix inverse via LU decomposition.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let a_inv = a.inverse().unwrap();
    /// let id = &a * &a_inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((id[(0, 1)]).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>, LinalgError> {
        let n = self.nrows();
        self.lu().solve(&Matrix::eye(n, T::zero()))
    }
}
