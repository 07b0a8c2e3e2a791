use alloc::vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::vector::Vector;
use super::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        let mut out = self.clone();
        for (a, &b) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a + b;
        }
        out
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a + b;
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        let mut out = self.clone();
        for (a, &b) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a - b;
        }
        out
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        let mut out = self.clone();
        for x in out.as_mut_slice().iter_mut() {
            *x = T::zero() - *x;
        }
        out
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols(),
            rhs.nrows(),
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        let m = self.nrows();
        let n = self.ncols();
        let p = rhs.ncols();
        let a = self.as_slice();
        let b = rhs.as_slice();
        let mut data = vec![T::zero(); m * p];
        // Row-major ikj loop order: both inner accesses walk contiguous rows.
        for i in 0..m {
            for k in 0..n {
                let a_ik = a[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * b[k * p + j];
                }
            }
        }
        Matrix::from_vec(m, p, data)
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Matrix-vector product `A * v` (treating `v` as a column).
    ///
    /// ```
    /// use eigenum::{Matrix, Vector};
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let v = Vector::from_slice(&[1.0, 1.0]);
    /// let av = a.matvec(&v);
    /// assert_eq!(av[0], 3.0);
    /// assert_eq!(av[1], 7.0);
    /// ```
    pub fn matvec(&self, v: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.ncols(),
            v.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.nrows(),
            self.ncols(),
            v.len(),
        );
        let mut out = alloc::vec::Vec::with_capacity(self.nrows());
        for i in 0..self.nrows() {
            let mut sum = T::zero();
            for j in 0..self.ncols() {
                sum = sum + self[(i, j)] * v[j];
            }
            out.push(sum);
        }
        Vector::from_vec(out)
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        let mut out = self.clone();
        for x in out.as_mut_slice().iter_mut() {
            *x = *x * rhs;
        }
        out
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.as_mut_slice().iter_mut() {
            *x = *x * rhs;
        }
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        let mut out = self.clone();
        for x in out.as_mut_slice().iter_mut() {
            *x = *x / rhs;
        }
        out
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.as_mut_slice().iter_mut() {
            *x = *x / rhs;
        }
    }
}
