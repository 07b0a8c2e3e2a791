use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::FloatConst;

use crate::linalg::EigenDecomposition;
use crate::roots;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Univariate polynomial with coefficients indexed by degree.
///
/// `coefficients()[k]` is the coefficient of `x^k`; index 0 is the constant
/// term. Construction trims trailing (highest-degree) zero coefficients, so
/// the invariant holds that the stored length is the true represented
/// length: the leading coefficient is nonzero, and the zero polynomial has
/// an empty coefficient list with [`Polynomial::degree`] `None`.
///
/// Evaluation uses Horner's method (no allocation, numerically preferable
/// to a naive power sum) for both real and complex arguments.
///
/// # Example
///
/// ```
/// use eigenum::Polynomial;
///
/// // 2x² + 6x + 4 = 2(x+1)(x+2)
/// let p = Polynomial::new(&[4.0_f64, 6.0, 2.0]);
/// assert_eq!(p.degree(), Some(2));
/// assert_eq!(p.eval(0.0), 4.0);
///
/// let mut roots: Vec<f64> = p.roots().iter().map(|z| z.re).collect();
/// roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert!((roots[0] + 2.0).abs() < 1e-10);
/// assert!((roots[1] + 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T: FloatScalar> Polynomial<T> {
    /// Create a polynomial from coefficients indexed by degree
    /// (`coeffs[0]` is the constant term). Trailing zeros are trimmed.
    ///
    /// ```
    /// use eigenum::Polynomial;
    /// let p = Polynomial::new(&[1.0_f64, 2.0, 0.0, 0.0]);
    /// assert_eq!(p.degree(), Some(1));
    /// ```
    pub fn new(coeffs: &[T]) -> Self {
        Self::from_vec(coeffs.to_vec())
    }

    /// Create a polynomial from an owned coefficient vector, trimming
    /// trailing zeros.
    pub fn from_vec(mut coeffs: Vec<T>) -> Self {
        while coeffs.last() == Some(&T::zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial (empty coefficient list, degree `None`).
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The coefficients, lowest degree first. Empty for the zero
    /// polynomial; the last entry is otherwise nonzero.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Degree of the polynomial, or `None` for the zero polynomial.
    ///
    /// ```
    /// use eigenum::Polynomial;
    /// assert_eq!(Polynomial::new(&[0.0_f64]).degree(), None);
    /// assert_eq!(Polynomial::new(&[5.0_f64]).degree(), Some(0));
    /// assert_eq!(Polynomial::new(&[0.0_f64, 0.0, 1.0]).degree(), Some(2));
    /// ```
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Whether this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The highest-degree coefficient, or `None` for the zero polynomial.
    #[inline]
    pub fn leading_coefficient(&self) -> Option<T> {
        self.coeffs.last().copied()
    }

    /// Evaluate at a real argument by Horner's method.
    ///
    /// ```
    /// use eigenum::Polynomial;
    /// let p = Polynomial::new(&[1.0_f64, -2.0, 1.0]); // (x-1)²
    /// assert_eq!(p.eval(3.0), 4.0);
    /// assert_eq!(p.eval(1.0), 0.0);
    /// ```
    pub fn eval(&self, x: T) -> T {
        let mut acc = T::zero();
        for &c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Evaluate at a complex argument by Horner's method.
    ///
    /// ```
    /// use eigenum::Polynomial;
    /// use num_complex::Complex;
    /// let p = Polynomial::new(&[1.0_f64, 0.0, 1.0]); // x² + 1
    /// let v = p.eval_complex(Complex::new(0.0, 1.0));
    /// assert!(v.norm() < 1e-12);
    /// ```
    pub fn eval_complex(&self, z: Complex<T>) -> Complex<T> {
        let mut acc = Complex::new(T::zero(), T::zero());
        for &c in self.coeffs.iter().rev() {
            acc = acc * z + c;
        }
        acc
    }

    /// Formal derivative.
    ///
    /// ```
    /// use eigenum::Polynomial;
    /// let p = Polynomial::new(&[1.0_f64, 2.0, 3.0]); // 3x² + 2x + 1
    /// assert_eq!(p.derivative().coefficients(), &[2.0, 6.0]);
    /// ```
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        let mut out = Vec::with_capacity(self.coeffs.len() - 1);
        let mut k = T::one();
        for &c in &self.coeffs[1..] {
            out.push(c * k);
            k = k + T::one();
        }
        Self::from_vec(out)
    }

    /// Normalize to a monic polynomial (leading coefficient 1).
    ///
    /// The zero polynomial stays zero.
    pub fn monic(&self) -> Self {
        match self.leading_coefficient() {
            None => Self::zero(),
            Some(lead) => Self {
                coeffs: self.coeffs.iter().map(|&c| c / lead).collect(),
            },
        }
    }

    /// Synthetic (long) division: returns `(quotient, remainder)` with
    /// `self = quotient * rhs + remainder` and
    /// `remainder.degree() < rhs.degree()`.
    ///
    /// Panics if `rhs` is the zero polynomial.
    ///
    /// ```
    /// use eigenum::Polynomial;
    /// // (x² - 1) / (x - 1) = (x + 1), remainder 0
    /// let p = Polynomial::new(&[-1.0_f64, 0.0, 1.0]);
    /// let d = Polynomial::new(&[-1.0_f64, 1.0]);
    /// let (q, r) = p.div_rem(&d);
    /// assert_eq!(q.coefficients(), &[1.0, 1.0]);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.is_zero(), "polynomial division by zero");
        let dn = rhs.coeffs.len() - 1;
        if self.coeffs.len() <= dn {
            return (Self::zero(), self.clone());
        }
        let lead = rhs.coeffs[dn];
        let mut rem = self.coeffs.clone();
        let qn = self.coeffs.len() - dn;
        let mut quot = vec![T::zero(); qn];

        for k in (0..qn).rev() {
            let q = rem[dn + k] / lead;
            quot[k] = q;
            for j in 0..=dn {
                rem[k + j] = rem[k + j] - q * rhs.coeffs[j];
            }
        }
        rem.truncate(dn);
        (Self::from_vec(quot), Self::from_vec(rem))
    }

    /// Greatest common divisor by Euclid's algorithm, returned monic.
    ///
    /// Floating-point division leaves rounding residue in the remainders,
    /// so coefficients below `sqrt(eps)` of the remainder's own scale are
    /// chopped to zero between steps; without this the recursion never
    /// reaches a zero remainder.
    ///
    /// ```
    /// use eigenum::Polynomial;
    /// // gcd((x-1)(x-2), (x-1)(x-3)) = x - 1
    /// let a = Polynomial::new(&[2.0_f64, -3.0, 1.0]);
    /// let b = Polynomial::new(&[3.0_f64, -4.0, 1.0]);
    /// let g = a.gcd(&b);
    /// assert_eq!(g.degree(), Some(1));
    /// assert!((g.eval(1.0)).abs() < 1e-9);
    /// ```
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            let r = r.chop();
            a = core::mem::replace(&mut b, r);
        }
        a.monic()
    }

    /// Zero out coefficients that are negligible against the polynomial's
    /// own largest coefficient, then re-trim.
    fn chop(&self) -> Self {
        let mut scale = T::zero();
        for &c in &self.coeffs {
            scale = scale.max(c.abs());
        }
        if scale == T::zero() {
            return Self::zero();
        }
        let tol = T::epsilon().sqrt() * scale;
        Self::from_vec(
            self.coeffs
                .iter()
                .map(|&c| if c.abs() <= tol { T::zero() } else { c })
                .collect(),
        )
    }
}

impl<T: FloatScalar + FloatConst> Polynomial<T> {
    /// All complex roots of the polynomial.
    ///
    /// - degree `None` or 0: no finite roots, empty result
    /// - degree 1–3: closed forms from the [`roots`] module
    /// - degree ≥ 4: eigenvalues of the companion matrix (sub-diagonal of
    ///   ones, last column the negated monic coefficients) via
    ///   [`EigenDecomposition`]
    ///
    /// Roots are returned once per multiplicity, in no particular order.
    ///
    /// ```
    /// use eigenum::Polynomial;
    ///
    /// // x² = 0: the root 0 with multiplicity two
    /// let p = Polynomial::new(&[0.0_f64, 0.0, 1.0]);
    /// let r = p.roots();
    /// assert_eq!(r.len(), 2);
    /// assert!(r[0].norm() < 1e-10);
    /// assert!(r[1].norm() < 1e-10);
    /// ```
    pub fn roots(&self) -> Vec<Complex<T>> {
        let c = &self.coeffs;
        match self.degree() {
            None | Some(0) => Vec::new(),
            Some(1) => roots::linear(c[1], c[0]),
            Some(2) => roots::quadratic(c[2], c[1], c[0]),
            Some(3) => roots::cubic(c[3], c[2], c[1], c[0]),
            Some(deg) => {
                // Companion matrix of the monic polynomial: ones on the
                // sub-diagonal, negated normalized coefficients in the last
                // column. Its eigenvalues are exactly the roots.
                let lead = c[deg];
                let mut companion = Matrix::zeros(deg, deg, T::zero());
                for i in 1..deg {
                    companion[(i, i - 1)] = T::one();
                }
                for i in 0..deg {
                    companion[(i, deg - 1)] = -(c[i] / lead);
                }

                let eig = EigenDecomposition::new(&companion);
                let re = eig.real_eigenvalues();
                let im = eig.imag_eigenvalues();
                (0..deg).map(|i| Complex::new(re[i], im[i])).collect()
            }
        }
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl<T: FloatScalar> Add<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let mut out = vec![T::zero(); n];
        for (i, &c) in self.coeffs.iter().enumerate() {
            out[i] = c;
        }
        for (i, &c) in rhs.coeffs.iter().enumerate() {
            out[i] = out[i] + c;
        }
        Polynomial::from_vec(out)
    }
}

impl<T: FloatScalar> Add for Polynomial<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: FloatScalar> Sub<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let mut out = vec![T::zero(); n];
        for (i, &c) in self.coeffs.iter().enumerate() {
            out[i] = c;
        }
        for (i, &c) in rhs.coeffs.iter().enumerate() {
            out[i] = out[i] - c;
        }
        Polynomial::from_vec(out)
    }
}

impl<T: FloatScalar> Sub for Polynomial<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: FloatScalar> Mul<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut out = vec![T::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j] + a * b;
            }
        }
        Polynomial::from_vec(out)
    }
}

impl<T: FloatScalar> Mul for Polynomial<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: FloatScalar> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial {
            coeffs: self.coeffs.iter().map(|&c| T::zero() - c).collect(),
        }
    }
}

impl<T: FloatScalar> Neg for Polynomial<T> {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: FloatScalar + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (k, &c) in self.coeffs.iter().enumerate().rev() {
            if c == T::zero() {
                continue;
            }
            if !first {
                f.write_str(if c < T::zero() { " - " } else { " + " })?;
            } else if c < T::zero() {
                f.write_str("-")?;
            }
            first = false;
            let mag = c.abs();
            match k {
                0 => write!(f, "{}", mag)?,
                1 => {
                    if mag == T::one() {
                        write!(f, "x")?
                    } else {
                        write!(f, "{}x", mag)?
                    }
                }
                _ => {
                    if mag == T::one() {
                        write!(f, "x^{}", k)?
                    } else {
                        write!(f, "{}x^{}", mag, k)?
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn sorted_re(mut roots: Vec<Complex<f64>>) -> Vec<f64> {
        roots.sort_by(|a, b| a.re.partial_cmp(&b.re).unwrap());
        roots.iter().map(|z| z.re).collect()
    }

    #[test]
    fn construction_trims_trailing_zeros() {
        let p = Polynomial::new(&[1.0_f64, 2.0, 0.0, 0.0]);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.coefficients(), &[1.0, 2.0]);

        let z = Polynomial::new(&[0.0_f64, 0.0]);
        assert!(z.is_zero());
        assert_eq!(z.degree(), None);
        assert_eq!(z.leading_coefficient(), None);
    }

    #[test]
    fn horner_matches_direct_evaluation() {
        let p = Polynomial::new(&[1.0_f64, -3.0, 0.5, 2.0]);
        for &x in &[-2.0, -0.5, 0.0, 1.0, 3.7] {
            let direct = 1.0 - 3.0 * x + 0.5 * x * x + 2.0 * x * x * x;
            assert!((p.eval(x) - direct).abs() < 1e-12, "x = {}", x);
        }
    }

    #[test]
    fn complex_horner() {
        let p = Polynomial::new(&[1.0_f64, 0.0, 1.0]);
        let i = Complex::new(0.0, 1.0);
        assert!(p.eval_complex(i).norm() < 1e-12);
        assert!((p.eval_complex(Complex::new(1.0, 0.0)).re - 2.0).abs() < 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a = Polynomial::new(&[1.0_f64, 1.0]); // x + 1
        let b = Polynomial::new(&[-1.0_f64, 1.0]); // x - 1
        let prod = &a * &b;
        assert_eq!(prod.coefficients(), &[-1.0, 0.0, 1.0]); // x² - 1

        let sum = &a + &b;
        assert_eq!(sum.coefficients(), &[0.0, 2.0]); // 2x

        let diff = &a - &a;
        assert!(diff.is_zero());

        let neg = -&a;
        assert_eq!(neg.coefficients(), &[-1.0, -1.0]);
    }

    #[test]
    fn division_identity() {
        // self = quotient * rhs + remainder
        let p = Polynomial::new(&[3.0_f64, -2.0, 0.0, 1.0, 5.0]);
        let d = Polynomial::new(&[1.0_f64, 0.0, 2.0]);
        let (q, r) = p.div_rem(&d);
        let rebuilt = &(&q * &d) + &r;
        assert_eq!(rebuilt.degree(), p.degree());
        for (a, b) in rebuilt.coefficients().iter().zip(p.coefficients()) {
            assert!((a - b).abs() < 1e-12);
        }
        assert!(r.degree() < d.degree() || r.is_zero());
    }

    #[test]
    fn division_by_larger_degree() {
        let p = Polynomial::new(&[1.0_f64, 1.0]);
        let d = Polynomial::new(&[1.0_f64, 0.0, 1.0]);
        let (q, r) = p.div_rem(&d);
        assert!(q.is_zero());
        assert_eq!(r, p);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_by_zero_polynomial() {
        let p = Polynomial::new(&[1.0_f64, 1.0]);
        let _ = p.div_rem(&Polynomial::zero());
    }

    #[test]
    fn gcd_of_products() {
        // gcd((x-1)(x-2), (x-1)(x-3)) = x - 1
        let common = Polynomial::new(&[-1.0_f64, 1.0]);
        let a = &common * &Polynomial::new(&[-2.0_f64, 1.0]);
        let b = &common * &Polynomial::new(&[-3.0_f64, 1.0]);
        let g = a.gcd(&b);
        assert_eq!(g.degree(), Some(1));
        assert!(g.eval(1.0).abs() < TOL);
        // Monic
        assert!((g.leading_coefficient().unwrap() - 1.0).abs() < TOL);
    }

    #[test]
    fn gcd_coprime_is_constant() {
        let a = Polynomial::new(&[-1.0_f64, 1.0]); // x - 1
        let b = Polynomial::new(&[-2.0_f64, 1.0]); // x - 2
        let g = a.gcd(&b);
        assert_eq!(g.degree(), Some(0));
    }

    #[test]
    fn gcd_with_zero() {
        let a = Polynomial::new(&[2.0_f64, 4.0]);
        let g = a.gcd(&Polynomial::zero());
        // gcd(p, 0) = monic(p)
        assert_eq!(g.coefficients(), &[0.5, 1.0]);
    }

    #[test]
    fn derivative() {
        let p = Polynomial::new(&[5.0_f64, 0.0, 3.0, 2.0]); // 2x³ + 3x² + 5
        assert_eq!(p.derivative().coefficients(), &[0.0, 6.0, 6.0]);
        assert!(Polynomial::new(&[7.0_f64]).derivative().is_zero());
    }

    #[test]
    fn roots_degenerate_degrees() {
        assert!(Polynomial::<f64>::zero().roots().is_empty());
        assert!(Polynomial::new(&[5.0_f64]).roots().is_empty());
    }

    #[test]
    fn roots_linear() {
        let r = Polynomial::new(&[-6.0_f64, 2.0]).roots();
        assert_eq!(r.len(), 1);
        assert!((r[0].re - 3.0).abs() < TOL);
    }

    #[test]
    fn roots_quadratic_spec_cases() {
        // 2x² + 6x + 4 = 0 → {-1, -2}
        let r = sorted_re(Polynomial::new(&[4.0_f64, 6.0, 2.0]).roots());
        assert!((r[0] + 2.0).abs() < TOL);
        assert!((r[1] + 1.0).abs() < TOL);

        // x² = 0 → repeated root {0, 0}
        let r = Polynomial::new(&[0.0_f64, 0.0, 1.0]).roots();
        assert_eq!(r.len(), 2);
        assert!(r[0].norm() < TOL);
        assert!(r[1].norm() < TOL);
    }

    #[test]
    fn roots_cubic() {
        let r = sorted_re(Polynomial::new(&[-6.0_f64, 11.0, -6.0, 1.0]).roots());
        assert!((r[0] - 1.0).abs() < TOL);
        assert!((r[1] - 2.0).abs() < TOL);
        assert!((r[2] - 3.0).abs() < TOL);
    }

    #[test]
    fn roots_quartic_companion() {
        // (x-1)(x-2)(x-3)(x-4) = x⁴ - 10x³ + 35x² - 50x + 24
        let p = Polynomial::new(&[24.0_f64, -50.0, 35.0, -10.0, 1.0]);
        let r = sorted_re(p.roots());
        assert_eq!(r.len(), 4);
        for (i, expected) in [1.0, 2.0, 3.0, 4.0].iter().enumerate() {
            assert!((r[i] - expected).abs() < 1e-7, "root {} = {}", i, r[i]);
        }
    }

    #[test]
    fn roots_quartic_complex() {
        // x⁴ - 1 = 0 → {1, -1, i, -i}
        let p = Polynomial::new(&[-1.0_f64, 0.0, 0.0, 0.0, 1.0]);
        let r = p.roots();
        assert_eq!(r.len(), 4);
        for z in &r {
            assert!(p.eval_complex(*z).norm() < 1e-8, "p({:?}) != 0", z);
        }
        let n_real = r.iter().filter(|z| z.im.abs() < 1e-8).count();
        assert_eq!(n_real, 2);
    }

    #[test]
    fn roots_satisfy_polynomial_high_degree() {
        // x⁵ - 3x⁴ + 2x³ + x - 1, verified through complex Horner
        let p = Polynomial::new(&[-1.0_f64, 1.0, 0.0, 2.0, -3.0, 1.0]);
        let r = p.roots();
        assert_eq!(r.len(), 5);
        for z in &r {
            assert!(p.eval_complex(*z).norm() < 1e-6, "p({:?}) = residual", z);
        }
    }

    #[test]
    fn roots_scaled_leading_coefficient() {
        // Non-monic input must be normalized before the companion matrix
        let p = Polynomial::new(&[48.0_f64, -100.0, 70.0, -20.0, 2.0]);
        let r = sorted_re(p.roots());
        for (i, expected) in [1.0, 2.0, 3.0, 4.0].iter().enumerate() {
            assert!((r[i] - expected).abs() < 1e-7, "root {} = {}", i, r[i]);
        }
    }

    #[test]
    fn display() {
        let p = Polynomial::new(&[4.0_f64, 6.0, 2.0]);
        let s = alloc::format!("{}", p);
        assert_eq!(s, "2x^2 + 6x + 4");
        let q = Polynomial::new(&[-1.0_f64, 1.0]);
        assert_eq!(alloc::format!("{}", q), "x - 1");
        assert_eq!(alloc::format!("{}", Polynomial::<f64>::zero()), "0");
    }
}
