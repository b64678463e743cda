//! # dsreg Protocols
//!
//! Core protocol definitions for dataset builder registration.
//! Contains only interface definitions and descriptors - the registry itself
//! lives in `dsreg-core`.
//!
//! ## Core Items
//!
//! - [`DatasetBuilder`] - Trait for instantiable dataset builders
//! - [`RegisteredDataset`] - Compile-time registration metadata of a builder type
//! - [`BuilderClass`] - Runtime descriptor stored in the registry tables
//! - [`RegistryTable`] - The three disjoint registry tables
//! - [`naming`] - Normalized name derivation

pub mod builder;
pub mod class;
pub mod error;
pub mod naming;

pub use builder::{BuilderName, DatasetBuilder, DatasetInfo, RegisteredDataset};
pub use class::{BuilderClass, BuilderClassReg, BuilderFactory, RegistryTable, submitted_classes};
pub use error::RegistryError;

// Re-exported for `#[dataset_builder]` expansions.
#[doc(hidden)]
pub use inventory;
