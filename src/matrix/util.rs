use alloc::vec::Vec;
use core::fmt;

use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of all elements.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for &x in self.as_slice() {
            s = s + x;
        }
        s
    }
}

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        let data: Vec<U> = self.as_slice().iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows(),
            ncols: self.ncols(),
        }
    }
}

// ── Element-wise helpers ────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Element-wise absolute value.
    ///
    /// ```
    /// use eigenum::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, -3.0, 4.0]);
    /// let a = m.abs();
    /// assert_eq!(a[(0, 1)], 2.0);
    /// assert_eq!(a[(1, 0)], 3.0);
    /// ```
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows() {
            f.write_str(if i == 0 { "[" } else { " " })?;
            for j in 0..self.ncols() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>10}", self[(i, j)])?;
            }
            if i + 1 == self.nrows() {
                f.write_str("]")?;
            } else {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.sum(), 21.0);
    }

    #[test]
    fn map_changes_type() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let r: Matrix<i64> = m.map(|x| x as i64);
        assert_eq!(r[(1, 1)], 4);
    }

    #[test]
    fn display() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let s = alloc::format!("{}", m);
        assert!(s.contains('1'));
        assert!(s.contains('4'));
    }
}
