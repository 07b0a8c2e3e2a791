//! # eigenum
//!
//! Dense matrix decompositions and polynomial root finding in pure Rust,
//! no-std compatible. The numerical core of a vector/geometry stack: solve
//! linear systems, decompose transforms, and find the roots of real-
//! coefficient polynomials of any degree.
//!
//! ## Quick start
//!
//! ```
//! use eigenum::{Matrix, Polynomial, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//!
//! // Find the roots of 2x² + 6x + 4
//! let p = Polynomial::new(&[4.0_f64, 6.0, 2.0]);
//! assert_eq!(p.roots().len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Dense heap-allocated [`Matrix<T>`] with runtime
//!   dimensions and flat row-major storage, plus the [`Vector<T>`] newtype.
//!   Arithmetic operators, indexing, norms, and trace/diagonal helpers.
//!
//! - [`linalg`] — The decompositions, each computed once from a snapshot of
//!   its input:
//!   - [`LuDecomposition`](linalg::LuDecomposition) — partial-pivoted
//!     Gaussian elimination; `solve`, `det`, singularity test.
//!   - [`QrDecomposition`](linalg::QrDecomposition) — Householder QR;
//!     least-squares `solve`, rank test, explicit `Q`/`R`/`H`.
//!   - [`EigenDecomposition`](linalg::EigenDecomposition) — symmetric
//!     (tridiagonal QL) and nonsymmetric (Hessenberg + real-Schur QR)
//!     paths, chosen by symmetry test at construction; eigenvalues,
//!     eigenvectors, and the block-diagonal `D`.
//!   - [`DecimalLu`](linalg::DecimalLu) — the LU algorithm over exact
//!     decimals, behind the `decimal` feature.
//!
//! - [`roots`] — Closed-form linear/quadratic/cubic solvers returning
//!   [`num_complex::Complex`] roots.
//!
//! - [`polynomial`] — [`Polynomial<T>`] with Horner evaluation, arithmetic,
//!   synthetic division, gcd, and `roots()` dispatching between the closed
//!   forms and the companion-matrix eigenvalue path.
//!
//! All components are synchronous, single-threaded value computations with
//! no shared mutable state: independently constructed instances can be used
//! freely from multiple threads.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm |
//! | `libm`    | no       | Pure-Rust software float fallback for no-std |
//! | `decimal` | no       | Exact-decimal LU via `rust_decimal` (implies `std`) |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod polynomial;
pub mod roots;
pub mod traits;

pub use linalg::{EigenDecomposition, LinalgError, LuDecomposition, QrDecomposition};
pub use matrix::{Matrix, Vector};
pub use polynomial::Polynomial;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "decimal")]
pub use linalg::DecimalLu;

pub use num_complex::Complex;
