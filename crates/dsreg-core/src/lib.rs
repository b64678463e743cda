//! # dsreg Core
//!
//! Registry of dataset builder classes.
//!
//! ## Components
//!
//! - [`DatasetRegistry`] - Three disjoint tables (concrete, abstract, in-development)
//!   keyed by normalized builder name
//! - [`skip`] - Scoped, per-thread suppression of registration
//! - [`community`] - Loading of builders assembled at runtime
//! - [`global`] - The process-wide registry built from `#[dataset_builder]` types
//!
//! ## Registration
//!
//! Rust has no hook on type definition, so registration is an explicit call.
//! Types annotated with `#[dataset_builder]` are collected at link time and
//! registered by [`DatasetRegistry::from_inventory`] or [`global()`].

pub mod community;
pub mod global;
pub mod registry;
pub mod skip;

pub use global::{global, init_global};
pub use registry::{ClassTable, DatasetRegistry, Registerable, RegistryOptions};
pub use skip::{
    is_registration_skipped, skip_registration, with_registration_skipped, SkipRegistrationGuard,
};
