//! Exact-decimal LU decomposition, enabled by the `decimal` feature.
//!
//! Mirrors the float path's control flow over [`rust_decimal::Decimal`],
//! trading speed for arithmetic that does not depend on binary floating
//! point rounding. Useful when the verdict on a nearly singular system must
//! be exact in the decimal inputs, e.g. checking whether a user-supplied
//! system of decimal coefficients is actually solvable.

use alloc::vec;
use alloc::vec::Vec;

use rust_decimal::Decimal;

use crate::linalg::LinalgError;
use crate::matrix::vector::Vector;
use crate::Matrix;

/// LU decomposition of a square [`Decimal`] matrix with partial pivoting.
///
/// Identical pivoting and elimination order to
/// [`LuDecomposition`](crate::linalg::LuDecomposition); the zero-pivot test
/// is exact instead of tolerance-based, because decimal arithmetic carries
/// no rounding fuzz to tolerate.
///
/// # Example
///
/// ```
/// use eigenum::{DecimalLu, Matrix, Vector};
/// use rust_decimal::Decimal;
///
/// let d = |s: &str| s.parse::<Decimal>().unwrap();
/// let a = Matrix::from_rows(2, 2, &[d("0.5"), d("0.2"), d("0.25"), d("0.4")]);
/// let lu = DecimalLu::new(&a);
/// assert!(lu.is_nonsingular());
/// assert_eq!(lu.det(), d("0.15"));
///
/// let b = Vector::from_slice(&[d("0.9"), d("1.05")]);
/// let x = lu.solve_vec(&b).unwrap();
/// assert_eq!(x[0], d("1"));
/// assert_eq!(x[1], d("2"));
/// ```
#[derive(Debug, Clone)]
pub struct DecimalLu {
    lu: Matrix<Decimal>,
    piv: Vec<usize>,
    even: bool,
}

impl DecimalLu {
    /// Decompose a square matrix. Panics if the matrix is not square.
    pub fn new(a: &Matrix<Decimal>) -> Self {
        assert!(a.is_square(), "LU decomposition requires a square matrix");
        let n = a.nrows();
        let mut lu = a.clone();
        let mut piv: Vec<usize> = (0..n).collect();
        let mut even = true;
        let mut col_j = vec![Decimal::ZERO; n];

        for j in 0..n {
            for i in 0..n {
                col_j[i] = lu[(i, j)];
            }

            for i in 0..n {
                let kmax = i.min(j);
                let mut s = Decimal::ZERO;
                for k in 0..kmax {
                    s += lu[(i, k)] * col_j[k];
                }
                col_j[i] -= s;
                lu[(i, j)] = col_j[i];
            }

            let mut p = j;
            for i in (j + 1)..n {
                if col_j[i].abs() > col_j[p].abs() {
                    p = i;
                }
            }
            if p != j {
                for k in 0..n {
                    let tmp = lu[(p, k)];
                    lu[(p, k)] = lu[(j, k)];
                    lu[(j, k)] = tmp;
                }
                piv.swap(p, j);
                even = !even;
            }

            let pivot = lu[(j, j)];
            if pivot != Decimal::ZERO {
                for i in (j + 1)..n {
                    let v = lu[(i, j)] / pivot;
                    lu[(i, j)] = v;
                }
            }
        }

        Self { lu, piv, even }
    }

    /// Whether every diagonal pivot of U is exactly nonzero.
    pub fn is_nonsingular(&self) -> bool {
        let n = self.lu.nrows();
        for j in 0..n {
            if self.lu[(j, j)] == Decimal::ZERO {
                return false;
            }
        }
        true
    }

    /// The row permutation applied by pivoting.
    #[inline]
    pub fn pivot(&self) -> &[usize] {
        &self.piv
    }

    /// Determinant (product of pivots times permutation sign).
    pub fn det(&self) -> Decimal {
        let n = self.lu.nrows();
        let mut d = if self.even {
            Decimal::ONE
        } else {
            -Decimal::ONE
        };
        for i in 0..n {
            d *= self.lu[(i, i)];
        }
        d
    }

    /// Solve A·X = B for X.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] if `b.nrows() != a.nrows()`,
    /// [`LinalgError::Singular`] if any pivot is exactly zero.
    pub fn solve(&self, b: &Matrix<Decimal>) -> Result<Matrix<Decimal>, LinalgError> {
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
        let mut x = Matrix::zeros(n, nx, Decimal::ZERO);
        for i in 0..n {
            for j in 0..nx {
                x[(i, j)] = b[(self.piv[i], j)];
            }
        }

        for k in 0..n {
            for i in (k + 1)..n {
                let m = self.lu[(i, k)];
                for j in 0..nx {
                    let v = x[(i, j)] - x[(k, j)] * m;
                    x[(i, j)] = v;
                }
            }
        }

        for k in (0..n).rev() {
            let d = self.lu[(k, k)];
            for j in 0..nx {
                let v = x[(k, j)] / d;
                x[(k, j)] = v;
            }
            for i in 0..k {
                let m = self.lu[(i, k)];
                for j in 0..nx {
                    let v = x[(i, j)] - x[(k, j)] * m;
                    x[(i, j)] = v;
                }
            }
        }

        Ok(x)
    }

    /// Solve A·x = b for a single right-hand side.
    pub fn solve_vec(&self, b: &Vector<Decimal>) -> Result<Vector<Decimal>, LinalgError> {
        let n = self.lu.nrows();
        if b.len() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: (n, 1),
                got: (b.len(), 1),
            });
        }
        let x = self.solve(&b.to_column())?;
        Ok(Vector::from_vec(x.to_vec()))
    }
}
