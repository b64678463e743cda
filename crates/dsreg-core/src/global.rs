//! Process-wide registry instance.

use once_cell::sync::OnceCell;

use dsreg_protocols::RegistryError;

use crate::registry::{DatasetRegistry, RegistryOptions};

static GLOBAL: OnceCell<DatasetRegistry> = OnceCell::new();

/// Initialize the process-wide registry from the link-time inventory.
///
/// The first successful call decides the options; later calls return the
/// existing instance. A failed initialization leaves the registry unset so
/// the error surfaces again on the next call.
pub fn init_global(options: RegistryOptions) -> Result<&'static DatasetRegistry, RegistryError> {
    GLOBAL.get_or_try_init(|| DatasetRegistry::from_inventory_with(options))
}

/// The process-wide registry, initialized with default options on first use.
pub fn global() -> Result<&'static DatasetRegistry, RegistryError> {
    init_global(RegistryOptions::default())
}
