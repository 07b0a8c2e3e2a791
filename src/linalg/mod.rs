pub(crate) mod eigen;
pub(crate) mod hessenberg;
pub(crate) mod lu;
pub(crate) mod qr;
pub(crate) mod schur;
pub(crate) mod tridiagonal;

#[cfg(feature = "decimal")]
pub(crate) mod decimal;

pub use eigen::EigenDecomposition;
pub use lu::LuDecomposition;
pub use qr::QrDecomposition;

#[cfg(feature = "decimal")]
pub use decimal::DecimalLu;

/// Errors from linear algebra operations.
///
/// Returned by the decomposition solvers and the convenience methods on
/// [`Matrix`](crate::Matrix) (`solve`, `solve_qr`, `inverse`). Structural
/// errors are raised at the point of detection and are never retried; the
/// algorithms are deterministic, so there is nothing to retry.
///
/// Eigenvalue iteration running out of budget is deliberately *not* an
/// error: the best available form is kept and flagged through
/// [`EigenDecomposition::is_converged`].
///
/// ```
/// use eigenum::{Matrix, Vector};
/// use eigenum::linalg::LinalgError;
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// let b = Vector::from_slice(&[1.0, 1.0]);
/// let lu = singular.lu();
/// assert!(!lu.is_nonsingular());
/// assert_eq!(lu.solve_vec(&b).unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand shapes are incompatible (e.g. a right-hand side with the
    /// wrong row count).
    DimensionMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// LU solve attempted on a matrix with a zero pivot.
    Singular,
    /// QR solve attempted on a matrix that is not full column rank.
    RankDeficient,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::RankDeficient => write!(f, "matrix is rank deficient"),
        }
    }
}
