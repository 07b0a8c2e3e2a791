use criterion::{criterion_group, criterion_main, Criterion};

use eigenum::{Matrix, Polynomial, Vector};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned matrices at a few sizes
// ---------------------------------------------------------------------------

fn dense(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        ((i * n + j) as f64).sin() + if i == j { (n as f64) + 2.0 } else { 0.0 }
    })
}

fn symmetric(n: usize) -> Matrix<f64> {
    let a = dense(n);
    let at = a.transpose();
    &a * &at
}

fn rhs(n: usize) -> Vector<f64> {
    Vector::from_vec((0..n).map(|i| (i as f64).cos()).collect())
}

// ---------------------------------------------------------------------------
// LU solve
// ---------------------------------------------------------------------------

fn lu_solve(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu_solve");
    for &n in &[4usize, 8, 16, 32] {
        let a = dense(n);
        let b = rhs(n);
        g.bench_function(format!("{}x{}", n, n), |bench| {
            bench.iter(|| {
                std::hint::black_box(&a)
                    .lu()
                    .solve_vec(std::hint::black_box(&b))
                    .unwrap()
            })
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// QR least squares
// ---------------------------------------------------------------------------

fn qr_least_squares(c: &mut Criterion) {
    let mut g = c.benchmark_group("qr_least_squares");
    for &n in &[4usize, 8, 16] {
        let m = 2 * n;
        let a = Matrix::from_fn(m, n, |i, j| ((i + 1) * (j + 2)) as f64 + (i as f64).sin());
        let b = rhs(m);
        g.bench_function(format!("{}x{}", m, n), |bench| {
            bench.iter(|| {
                std::hint::black_box(&a)
                    .qr()
                    .solve_vec(std::hint::black_box(&b))
                    .unwrap()
            })
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Eigendecomposition, both paths
// ---------------------------------------------------------------------------

fn eig_symmetric(c: &mut Criterion) {
    let mut g = c.benchmark_group("eig_symmetric");
    for &n in &[4usize, 8, 16] {
        let a = symmetric(n);
        g.bench_function(format!("{}x{}", n, n), |bench| {
            bench.iter(|| std::hint::black_box(&a).eig())
        });
    }
    g.finish();
}

fn eig_general(c: &mut Criterion) {
    let mut g = c.benchmark_group("eig_general");
    for &n in &[4usize, 8, 16] {
        let a = dense(n);
        g.bench_function(format!("{}x{}", n, n), |bench| {
            bench.iter(|| std::hint::black_box(&a).eig())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Polynomial roots: closed forms vs companion-matrix path
// ---------------------------------------------------------------------------

fn polynomial_roots(c: &mut Criterion) {
    let mut g = c.benchmark_group("polynomial_roots");

    let cubic = Polynomial::new(&[-6.0_f64, 11.0, -6.0, 1.0]);
    g.bench_function("cubic_closed_form", |bench| {
        bench.iter(|| std::hint::black_box(&cubic).roots())
    });

    for &deg in &[4usize, 8, 12] {
        let mut p = Polynomial::new(&[1.0_f64]);
        for k in 1..=deg {
            p = p * Polynomial::new(&[-(k as f64), 1.0]);
        }
        g.bench_function(format!("companion_degree_{}", deg), |bench| {
            bench.iter(|| std::hint::black_box(&p).roots())
        });
    }

    g.finish();
}

criterion_group!(
    benches,
    lu_solve,
    qr_least_squares,
    eig_symmetric,
    eig_general,
    polynomial_roots
);
criterion_main!(benches);
