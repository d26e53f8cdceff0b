//! Library components of the `faculty-resolve` command line.

pub mod batch;
pub mod input;
pub mod logging;
