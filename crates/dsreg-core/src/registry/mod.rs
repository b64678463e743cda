//! Registry tables and the dataset builder registry.

mod dataset;
mod table;

pub use dataset::{DatasetRegistry, RegistryOptions};
pub use table::{ClassTable, Registerable};
