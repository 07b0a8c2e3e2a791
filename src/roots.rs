//! Closed-form root solvers for polynomials of degree ≤ 3.
//!
//! All solvers take coefficients highest-degree first and return
//! [`Complex`] roots, with repeated roots emitted once per multiplicity.
//! Degenerate leading coefficients fall through to the next-lower degree,
//! so `quadratic(0.0, a, b)` is `linear(a, b)`.
//!
//! The discriminant-zero cases of the cubic are branched explicitly: the
//! triple root and double root come out in closed form instead of dividing
//! by a vanishing discriminant.

use alloc::vec;
use alloc::vec::Vec;

use num_complex::Complex;
use num_traits::FloatConst;

use crate::traits::FloatScalar;

/// Root of the linear equation `a·x + b = 0`.
///
/// Returns an empty vector when `a == 0`: a nonzero constant has no root,
/// and the zero polynomial has no *finite* roots to report.
///
/// ```
/// use eigenum::roots;
/// let r = roots::linear(2.0_f64, -4.0);
/// assert_eq!(r.len(), 1);
/// assert!((r[0].re - 2.0).abs() < 1e-12);
/// assert_eq!(r[0].im, 0.0);
/// ```
pub fn linear<T: FloatScalar>(a: T, b: T) -> Vec<Complex<T>> {
    if a == T::zero() {
        return Vec::new();
    }
    vec![Complex::new(-b / a, T::zero())]
}

/// Both roots of the quadratic equation `a·x² + b·x + c = 0`.
///
/// A repeated root is returned twice. Negative discriminants produce the
/// complex conjugate pair.
///
/// ```
/// use eigenum::roots;
///
/// // x² + 1 = 0 has roots ±i
/// let r = roots::quadratic(1.0_f64, 0.0, 1.0);
/// assert!((r[0].im - 1.0).abs() < 1e-12);
/// assert!((r[1].im + 1.0).abs() < 1e-12);
/// assert!(r[0].re.abs() < 1e-12);
/// ```
pub fn quadratic<T: FloatScalar>(a: T, b: T, c: T) -> Vec<Complex<T>> {
    if a == T::zero() {
        return linear(b, c);
    }
    let zero = T::zero();
    let two = T::one() + T::one();
    let four = two + two;

    let disc = b * b - four * a * c;
    let mid = -b / (two * a);
    if disc > zero {
        let sq = disc.sqrt() / (two * a);
        vec![
            Complex::new(mid + sq, zero),
            Complex::new(mid - sq, zero),
        ]
    } else if disc == zero {
        vec![Complex::new(mid, zero), Complex::new(mid, zero)]
    } else {
        let sq = (-disc).sqrt() / (two * a).abs();
        vec![Complex::new(mid, sq), Complex::new(mid, -sq)]
    }
}

/// All three roots of the cubic equation `a·x³ + b·x² + c·x + d = 0`.
///
/// Dispatches on the discriminant of the normalized cubic:
/// - triple root: returned three times, no radicals involved
/// - double root: closed-form pair, no division by the vanishing
///   discriminant
/// - three distinct real roots: trigonometric form
/// - one real root and a conjugate pair: Cardano's form
///
/// ```
/// use eigenum::roots;
///
/// // (x-1)(x-2)(x-3) = x³ - 6x² + 11x - 6
/// let mut r: Vec<f64> = roots::cubic(1.0_f64, -6.0, 11.0, -6.0)
///     .iter()
///     .map(|z| z.re)
///     .collect();
/// r.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert!((r[0] - 1.0).abs() < 1e-10);
/// assert!((r[1] - 2.0).abs() < 1e-10);
/// assert!((r[2] - 3.0).abs() < 1e-10);
/// ```
pub fn cubic<T: FloatScalar + FloatConst>(a: T, b: T, c: T, d: T) -> Vec<Complex<T>> {
    if a == T::zero() {
        return quadratic(b, c, d);
    }
    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let nine = three * three;

    // Normalize to x³ + p·x² + q·x + r.
    let p = b / a;
    let q = c / a;
    let r = d / a;
    let off = p / three;

    let qq = (p * p - three * q) / nine;
    let rr = (two * p * p * p - nine * p * q + (three * nine) * r) / (two * three * nine);

    if qq == zero && rr == zero {
        // Triple root.
        let root = Complex::new(-off, zero);
        return vec![root, root, root];
    }

    let disc = rr * rr - qq * qq * qq;

    if disc == zero {
        // Double root: rr³ = qq^(9/2), both real.
        let s = rr.cbrt();
        let single = Complex::new(-two * s - off, zero);
        let double = Complex::new(s - off, zero);
        return vec![single, double, double];
    }

    if disc < zero {
        // Three distinct real roots, trigonometric form.
        let theta = (rr / (qq * qq * qq).sqrt()).acos();
        let tq = -two * qq.sqrt();
        let two_pi = two * T::PI();
        return vec![
            Complex::new(tq * (theta / three).cos() - off, zero),
            Complex::new(tq * ((theta + two_pi) / three).cos() - off, zero),
            Complex::new(tq * ((theta - two_pi) / three).cos() - off, zero),
        ];
    }

    // One real root and a complex conjugate pair (Cardano).
    let sign = if rr >= zero { one } else { -one };
    let big_a = -sign * (rr.abs() + disc.sqrt()).cbrt();
    let big_b = if big_a == zero { zero } else { qq / big_a };
    let re_pair = -(big_a + big_b) / two - off;
    let im_pair = (three.sqrt() / two) * (big_a - big_b);
    vec![
        Complex::new(big_a + big_b - off, zero),
        Complex::new(re_pair, im_pair),
        Complex::new(re_pair, -im_pair),
    ]
}
