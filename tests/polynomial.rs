use eigenum::{Complex, Matrix, Polynomial, Vector};

type C = Complex<f64>;

const TOL: f64 = 1e-8;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

/// Sort roots by real part, then imaginary part, for stable comparison.
fn sorted(mut roots: Vec<C>) -> Vec<C> {
    roots.sort_by(|a, b| {
        a.re.partial_cmp(&b.re)
            .unwrap()
            .then(a.im.partial_cmp(&b.im).unwrap())
    });
    roots
}

/// Build a monic polynomial from its roots, to test recovery end to end.
fn poly_from_roots(roots: &[f64]) -> Polynomial<f64> {
    let mut p = Polynomial::new(&[1.0]);
    for &r in roots {
        p = p * Polynomial::new(&[-r, 1.0]);
    }
    p
}

// ── Root recovery through every dispatch arm ─────────────────────────

#[test]
fn recovers_roots_at_every_degree() {
    for deg in 1..=8 {
        let expected: Vec<f64> = (1..=deg).map(|k| k as f64).collect();
        let p = poly_from_roots(&expected);
        let got = sorted(p.roots());
        assert_eq!(got.len(), deg, "degree {}", deg);
        for (i, &want) in expected.iter().enumerate() {
            assert!(
                (got[i].re - want).abs() < 1e-6 && got[i].im.abs() < 1e-6,
                "degree {}, root {}: {:?} vs {}",
                deg,
                i,
                got[i],
                want
            );
        }
    }
}

#[test]
fn complex_roots_come_in_conjugate_pairs() {
    // (x² + 1)(x² + 4): roots ±i, ±2i
    let p = Polynomial::new(&[4.0, 0.0, 5.0, 0.0, 1.0]);
    let r = sorted(p.roots());
    assert_eq!(r.len(), 4);
    assert_complex_near(r[0], C::new(0.0, -2.0), TOL, "-2i");
    assert_complex_near(r[1], C::new(0.0, -1.0), TOL, "-i");
    assert_complex_near(r[2], C::new(0.0, 1.0), TOL, "+i");
    assert_complex_near(r[3], C::new(0.0, 2.0), TOL, "+2i");
}

#[test]
fn every_root_is_a_zero_of_the_polynomial() {
    let p = Polynomial::new(&[3.0, -1.0, 2.0, 0.5, -4.0, 1.0, 1.0]);
    let r = p.roots();
    assert_eq!(r.len(), 6);
    for z in &r {
        let residual = p.eval_complex(*z).norm();
        assert!(residual < 1e-6, "p({:?}) = {}", z, residual);
    }
}

#[test]
fn wilkinson_style_clustered_roots() {
    // Closely spaced real roots stress the QR iteration's deflation
    let p = poly_from_roots(&[1.0, 1.01, 1.02, 1.03]);
    let r = p.roots();
    assert_eq!(r.len(), 4);
    for z in &r {
        assert!(z.im.abs() < 1e-3);
        assert!((z.re - 1.015).abs() < 0.1);
    }
}

// ── The decomposition stack underneath the root finder ───────────────

#[test]
fn companion_eigenvalues_match_quadratic_closed_form() {
    // Same polynomial, both code paths: x² - 3x + 2
    let closed = sorted(Polynomial::new(&[2.0, -3.0, 1.0]).roots());

    // Force the companion path with a degree-4 polynomial that factors
    // as (x² - 3x + 2)(x² + 1) and compare the shared real roots.
    let p = Polynomial::new(&[2.0, -3.0, 3.0, -3.0, 1.0]);
    let all = sorted(p.roots());
    let real: Vec<C> = all.into_iter().filter(|z| z.im.abs() < 1e-7).collect();
    assert_eq!(real.len(), 2);
    assert_complex_near(real[0], closed[0], 1e-6, "root 1");
    assert_complex_near(real[1], closed[1], 1e-6, "root 2");
}

#[test]
fn eigen_reconstruction_of_companion_matrix() {
    // A·V == V·D for the companion matrix of x⁴ - 10x³ + 35x² - 50x + 24
    let coeffs = [24.0, -50.0, 35.0, -10.0];
    let mut a = Matrix::zeros(4, 4, 0.0_f64);
    for i in 1..4 {
        a[(i, i - 1)] = 1.0;
    }
    for i in 0..4 {
        a[(i, 3)] = -coeffs[i];
    }

    let eig = a.eig();
    assert!(eig.is_converged());
    let av = &a * eig.v();
    let vd = eig.v() * &eig.d();
    for i in 0..4 {
        for j in 0..4 {
            assert!(
                (av[(i, j)] - vd[(i, j)]).abs() < TOL,
                "AV=VD[({},{})]",
                i,
                j
            );
        }
    }
}

#[test]
fn lu_and_qr_agree_on_square_systems() {
    let a = Matrix::from_rows(
        4,
        4,
        &[
            4.0_f64, 1.0, -2.0, 2.0, 1.0, 2.0, 0.0, 1.0, -2.0, 0.0, 3.0, -2.0, 2.0, 1.0, -2.0,
            1.0,
        ],
    );
    let b = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let x_lu = a.solve(&b).unwrap();
    let x_qr = a.solve_qr(&b).unwrap();
    for i in 0..4 {
        assert!((x_lu[i] - x_qr[i]).abs() < TOL, "x[{}]", i);
    }
}

// ── Polynomial algebra driving the solver ────────────────────────────

#[test]
fn gcd_exposes_repeated_roots() {
    // p = (x-2)²(x+1) has gcd(p, p') = x - 2
    let p = poly_from_roots(&[2.0, 2.0, -1.0]);
    let g = p.gcd(&p.derivative());
    assert_eq!(g.degree(), Some(1));
    assert!(g.eval(2.0).abs() < 1e-7);
}

#[test]
fn deflation_by_synthetic_division() {
    // Divide out a known root and solve the rest in closed form
    let p = poly_from_roots(&[1.0, 2.0, 3.0, 4.0]);
    let (q, r) = p.div_rem(&Polynomial::new(&[-4.0, 1.0]));
    assert!(r.is_zero());
    let rest = sorted(q.roots());
    assert_eq!(rest.len(), 3);
    for (i, want) in [1.0, 2.0, 3.0].iter().enumerate() {
        assert!((rest[i].re - want).abs() < 1e-8);
    }
}
