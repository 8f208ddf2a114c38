//! Command-line front end for the cayley engine.
//!
//! The binary is a thin shell around [`Session`]: it reads matrix text,
//! picks a [`Task`], runs it and prints the [`Report`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod input;
pub mod render;
pub mod session;

pub use input::{parse_matrix, parse_vector};
pub use render::{Report, Section};
pub use session::{OutputFormat, ReconstructInput, Session, Task, DEFAULT_MATRIX};
