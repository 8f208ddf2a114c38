//! Polynomial algorithms.
//!
//! - Division with remainder and monic GCD over a field
//! - Yun's squarefree decomposition
//! - Lagrange interpolation

pub mod gcd;
pub mod interpolate;
pub mod squarefree;
