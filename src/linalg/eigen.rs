use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::hessenberg::hessenberg;
use crate::linalg::schur::hessenberg_schur;
use crate::linalg::tridiagonal::{tridiagonal_ql, tridiagonalize};
use crate::traits::FloatScalar;
use crate::Matrix;

/// Eigenvalues and eigenvectors of a real square matrix.
///
/// The path is chosen once at construction by testing symmetry with exact
/// element equality:
///
/// - **Symmetric**: Householder tridiagonalization followed by
///   implicit-shift QL iteration. Eigenvalues are real (the imaginary array
///   is identically zero), sorted ascending, and `V` is orthogonal with
///   `A = V·D·Vᵀ`.
/// - **Nonsymmetric**: Householder reduction to upper Hessenberg form
///   followed by the implicit double-shift QR iteration to real Schur form,
///   with eigenvectors recovered by back-substitution. Eigenvalues may form
///   complex conjugate pairs, stored in adjacent entries of the parallel
///   real/imaginary arrays as `(λ, +μ)` / `(λ, −μ)`. `D` is block diagonal
///   with 1×1 real blocks and 2×2 blocks `[λ, μ; −μ, λ]`, and `A·V ≈ V·D`.
///   `V` may be badly conditioned or even singular for defective matrices;
///   no error is raised, callers interpret the result via tolerance.
///
/// Construction never fails. The iterations carry a `30·n` budget; if it is
/// exhausted the best available form is kept and
/// [`EigenDecomposition::is_converged`] returns `false`.
///
/// # Example
///
/// ```
/// use eigenum::Matrix;
/// use eigenum::linalg::EigenDecomposition;
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, -1.0, -1.0, 2.0]);
/// let eig = EigenDecomposition::new(&a);
/// assert!(eig.is_converged());
/// assert!((eig.real_eigenvalues()[0] - 1.0).abs() < 1e-10);
/// assert!((eig.real_eigenvalues()[1] - 3.0).abs() < 1e-10);
/// assert_eq!(eig.imag_eigenvalues(), &[0.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct EigenDecomposition<T> {
    n: usize,
    d: Vec<T>,
    e: Vec<T>,
    v: Matrix<T>,
    converged: bool,
}

impl<T: FloatScalar> EigenDecomposition<T> {
    /// Decompose a square matrix. Panics if the matrix is not square.
    ///
    /// The input is snapshotted; later mutation of `a` does not affect the
    /// decomposition.
    pub fn new(a: &Matrix<T>) -> Self {
        assert!(
            a.is_square(),
            "eigenvalue decomposition requires a square matrix"
        );
        let n = a.nrows();
        let mut d = vec![T::zero(); n];
        let mut e = vec![T::zero(); n];

        if n == 0 {
            return Self {
                n,
                d,
                e,
                v: Matrix::zeros(0, 0, T::zero()),
                converged: true,
            };
        }

        if a.is_symmetric() {
            let mut v = a.clone();
            tridiagonalize(&mut v, &mut d, &mut e);
            let converged = tridiagonal_ql(&mut d, &mut e, &mut v, 30 * n);
            Self {
                n,
                d,
                e,
                v,
                converged,
            }
        } else {
            let mut h = a.clone();
            let mut v = Matrix::zeros(n, n, T::zero());
            let mut ort = vec![T::zero(); n];
            hessenberg(&mut h, &mut v, &mut ort);
            let converged = hessenberg_schur(&mut h, &mut v, &mut d, &mut e, 30 * n);
            Self {
                n,
                d,
                e,
                v,
                converged,
            }
        }
    }

    /// The real parts of the eigenvalues, one entry per eigenvalue.
    #[inline]
    pub fn real_eigenvalues(&self) -> &[T] {
        &self.d
    }

    /// The imaginary parts of the eigenvalues, parallel to
    /// [`EigenDecomposition::real_eigenvalues`]. Identically zero on the
    /// symmetric path; conjugate pairs appear as adjacent `+μ` / `−μ`.
    #[inline]
    pub fn imag_eigenvalues(&self) -> &[T] {
        &self.e
    }

    /// The eigenvector matrix V (eigenvectors as columns).
    #[inline]
    pub fn v(&self) -> &Matrix<T> {
        &self.v
    }

    /// The block diagonal eigenvalue matrix D.
    ///
    /// Real eigenvalues produce 1×1 diagonal blocks; a complex conjugate
    /// pair `λ ± iμ` produces the 2×2 block `[λ, μ; −μ, λ]`, so that
    /// `A·V ≈ V·D` holds over the reals.
    pub fn d(&self) -> Matrix<T> {
        let n = self.n;
        let mut out = Matrix::zeros(n, n, T::zero());
        for i in 0..n {
            out[(i, i)] = self.d[i];
            if self.e[i] > T::zero() {
                out[(i, i + 1)] = self.e[i];
            } else if self.e[i] < T::zero() {
                out[(i, i - 1)] = self.e[i];
            }
        }
        out
    }

    /// Whether the iteration finished inside its budget.
    ///
    /// `false` means the `30·n` iteration cap was hit and the eigenvalues
    /// are the best available approximation, not fully converged. This is
    /// deliberately a quality signal rather than an error; pathological
    /// input still terminates and returns something usable.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.converged
    }
}

// ── Convenience methods ─────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Eigenvalue decomposition (symmetric or general, chosen by symmetry
    /// test).
    ///
    /// ```
    /// use eigenum::Matrix;
    ///
    /// // 90° rotation: eigenvalues ±i
    /// let a = Matrix::from_rows(2, 2, &[0.0_f64, -1.0, 1.0, 0.0]);
    /// let eig = a.eig();
    /// assert!(eig.real_eigenvalues()[0].abs() < 1e-10);
    /// assert!((eig.imag_eigenvalues()[0].abs() - 1.0).abs() < 1e-10);
    /// ```
    pub fn eig(&self) -> EigenDecomposition<T> {
        EigenDecomposition::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() < tol,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    /// A·V == V·D, the defining property for both paths.
    fn verify_av_equals_vd(a: &Matrix<f64>, eig: &EigenDecomposition<f64>, tol: f64) {
        let av = a * eig.v();
        let vd = eig.v() * &eig.d();
        let n = a.nrows();
        for i in 0..n {
            for j in 0..n {
                assert_near(av[(i, j)], vd[(i, j)], tol, &format!("AV=VD[({},{})]", i, j));
            }
        }
    }

    #[test]
    fn symmetric_2x2() {
        let a = Matrix::from_rows(2, 2, &[2.0_f64, -1.0, -1.0, 2.0]);
        let eig = a.eig();
        assert!(eig.is_converged());
        assert_near(eig.real_eigenvalues()[0], 1.0, TOL, "λ[0]");
        assert_near(eig.real_eigenvalues()[1], 3.0, TOL, "λ[1]");
        verify_av_equals_vd(&a, &eig, TOL);
    }

    #[test]
    fn symmetric_eigenvectors_orthogonal() {
        let a = Matrix::from_rows(
            3,
            3,
            &[4.0_f64, 1.0, -1.0, 1.0, 3.0, 2.0, -1.0, 2.0, 5.0],
        );
        let eig = a.eig();
        let v = eig.v();
        let vtv = v.transpose() * v;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(vtv[(i, j)], expected, TOL, &format!("VtV[({},{})]", i, j));
            }
        }
        verify_av_equals_vd(&a, &eig, TOL);
    }

    #[test]
    fn symmetric_reconstruction() {
        let a = Matrix::from_rows(
            3,
            3,
            &[4.0_f64, 1.0, -1.0, 1.0, 3.0, 2.0, -1.0, 2.0, 5.0],
        );
        let eig = a.eig();
        // A == V D V^T
        let rebuilt = eig.v() * &eig.d() * &eig.v().transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert_near(rebuilt[(i, j)], a[(i, j)], TOL, &format!("A[({},{})]", i, j));
            }
        }
    }

    #[test]
    fn symmetric_sorted_ascending_with_repeats() {
        let a = Matrix::from_rows(
            4,
            4,
            &[
                10.0_f64, 3.0, 0.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 7.0, 2.0, 0.0, 0.0, 2.0,
                4.0,
            ],
        );
        let eig = a.eig();
        let vals = eig.real_eigenvalues();
        for i in 0..3 {
            assert!(vals[i] <= vals[i + 1] + TOL, "not ascending at {}", i);
        }

        let id = Matrix::from_rows(3, 3, &[2.0_f64, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0]);
        let eig = id.eig();
        for i in 0..3 {
            assert_near(eig.real_eigenvalues()[i], 2.0, TOL, &format!("λ[{}]", i));
        }
    }

    #[test]
    fn nonsymmetric_real_eigenvalues() {
        let a = Matrix::from_rows(2, 2, &[2.0_f64, -1.0, 1.0, 0.0]);
        let eig = a.eig();
        // Defective matrix with double eigenvalue 1
        assert_near(eig.real_eigenvalues()[0], 1.0, 1e-7, "re[0]");
        assert_near(eig.real_eigenvalues()[1], 1.0, 1e-7, "re[1]");
        assert_near(eig.imag_eigenvalues()[0], 0.0, 1e-7, "im[0]");
    }

    #[test]
    fn nonsymmetric_complex_pair() {
        // 90° rotation: eigenvalues ±i
        let a = Matrix::from_rows(2, 2, &[0.0_f64, -1.0, 1.0, 0.0]);
        let eig = a.eig();
        assert!(eig.is_converged());
        let (re, im) = (eig.real_eigenvalues(), eig.imag_eigenvalues());
        assert_near(re[0], 0.0, TOL, "re[0]");
        assert_near(re[1], 0.0, TOL, "re[1]");
        assert_near(im[0].abs(), 1.0, TOL, "|im[0]|");
        assert!(im[0] * im[1] < 0.0, "conjugate pair signs");
        verify_av_equals_vd(&a, &eig, TOL);
    }

    #[test]
    fn nonsymmetric_av_equals_vd() {
        let a = Matrix::from_rows(
            3,
            3,
            &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 0.0],
        );
        let eig = a.eig();
        assert!(eig.is_converged());
        verify_av_equals_vd(&a, &eig, 1e-8);

        let trace = a.trace();
        let eig_sum: f64 = eig.real_eigenvalues().iter().sum();
        assert_near(eig_sum, trace, TOL, "trace");
    }

    #[test]
    fn nonsymmetric_complex_pair_block_structure() {
        // Companion-style matrix with one real root and a complex pair:
        // p(x) = x^3 - x^2 + x - 1 = (x-1)(x^2+1)
        let a = Matrix::from_rows(
            3,
            3,
            &[0.0_f64, 0.0, 1.0, 1.0, 0.0, -1.0, 0.0, 1.0, 1.0],
        );
        let eig = a.eig();
        verify_av_equals_vd(&a, &eig, 1e-8);

        let d = eig.d();
        let (re, im) = (eig.real_eigenvalues(), eig.imag_eigenvalues());
        for i in 0..3 {
            assert_near(d[(i, i)], re[i], TOL, "D diagonal");
            if im[i] > 0.0 {
                assert_near(d[(i, i + 1)], im[i], TOL, "D upper block entry");
                assert_near(d[(i + 1, i)], -im[i], TOL, "D lower block entry");
                assert_near(re[i], re[i + 1], TOL, "pair real parts match");
                assert_near(im[i + 1], -im[i], TOL, "pair imag parts conjugate");
            }
        }
    }

    #[test]
    fn scalar_1x1() {
        let a = Matrix::from_rows(1, 1, &[42.0_f64]);
        let eig = a.eig();
        assert_near(eig.real_eigenvalues()[0], 42.0, TOL, "λ");
        assert_near(eig.imag_eigenvalues()[0], 0.0, TOL, "μ");
        assert_near(eig.v()[(0, 0)].abs(), 1.0, TOL, "v");
    }

    #[test]
    fn all_zero_matrix() {
        let a = Matrix::zeros(3, 3, 0.0_f64);
        let eig = a.eig();
        assert!(eig.is_converged());
        for i in 0..3 {
            assert_near(eig.real_eigenvalues()[i], 0.0, TOL, "λ");
        }
    }

    #[test]
    fn f32_support() {
        let a = Matrix::from_rows(2, 2, &[2.0_f32, -1.0, -1.0, 2.0]);
        let eig = a.eig();
        assert!((eig.real_eigenvalues()[0] - 1.0).abs() < 1e-5);
        assert!((eig.real_eigenvalues()[1] - 3.0).abs() < 1e-5);
    }
}
