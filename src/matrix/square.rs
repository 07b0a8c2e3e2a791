use crate::traits::{FloatScalar, Scalar};

use super::vector::Vector;
use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows().min(self.ncols());
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Extract the diagonal as a [`Vector`].
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let d = m.diag();
    /// assert_eq!(d[0], 1.0);
    /// assert_eq!(d[1], 4.0);
    /// ```
    pub fn diag(&self) -> Vector<T> {
        let n = self.nrows().min(self.ncols());
        let mut data = alloc::vec::Vec::with_capacity(n);
        for i in 0..n {
            data.push(self[(i, i)]);
        }
        Vector::from_vec(data)
    }

    /// Create a square diagonal matrix from a vector.
    ///
    /// ```
    /// use eigenum::{Matrix, Vector};
    /// let v = Vector::from_slice(&[2.0, 3.0]);
    /// let m = Matrix::from_diag(&v);
    /// assert_eq!(m[(0, 0)], 2.0);
    /// assert_eq!(m[(1, 1)], 3.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(v: &Vector<T>) -> Self {
        let n = v.len();
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = v[i];
        }
        m
    }

    /// Whether the matrix is square and element-wise equal to its transpose.
    ///
    /// Exact equality, no tolerance: this is the dispatch test used by
    /// [`EigenDecomposition`](crate::linalg::EigenDecomposition), and a
    /// tolerance here would silently change which algorithm runs.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let s = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 3.0]);
    /// assert!(s.is_symmetric());
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.1, 3.0]);
    /// assert!(!a.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows();
        for i in 0..n {
            for j in (i + 1)..n {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }
}

// ── Norms ───────────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// One norm: maximum absolute column sum.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, -2.0, 3.0, 4.0]);
    /// assert_eq!(m.norm_one(), 6.0);
    /// ```
    pub fn norm_one(&self) -> T {
        let mut max = T::zero();
        for j in 0..self.ncols() {
            let mut sum = T::zero();
            for i in 0..self.nrows() {
                sum = sum + self[(i, j)].abs();
            }
            if sum > max {
                max = sum;
            }
        }
        max
    }

    /// Infinity norm: maximum absolute row sum.
    pub fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for i in 0..self.nrows() {
            let mut sum = T::zero();
            for j in 0..self.ncols() {
                sum = sum + self[(i, j)].abs();
            }
            if sum > max {
                max = sum;
            }
        }
        max
    }

    /// Frobenius norm: square root of the sum of squared elements.
    ///
    /// Accumulated with `hypot` to avoid overflow.
    pub fn norm_fro(&self) -> T {
        let mut f = T::zero();
        for &x in self.as_slice() {
            f = f.hypot(x);
        }
        f
    }
}
