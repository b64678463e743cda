//! Error types for the dsreg protocol layer.

mod registry;

pub use registry::*;
