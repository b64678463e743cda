//! Dataset builder registry.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use dsreg_protocols::{
    submitted_classes, BuilderClass, DatasetBuilder, RegisteredDataset, RegistryError,
    RegistryTable,
};

use super::table::ClassTable;
use crate::skip::is_registration_skipped;

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

/// Registry behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Skip duplicate checks and let later registrations replace earlier
    /// ones. Meant for interactive sessions that redefine builders.
    pub allow_overwrite: bool,
}

impl RegistryOptions {
    pub fn with_overwrite(mut self, allow_overwrite: bool) -> Self {
        self.allow_overwrite = allow_overwrite;
        self
    }
}

/// Registry of dataset builder classes.
///
/// Holds three disjoint tables keyed by normalized name: concrete builders
/// available for lookup, abstract builders, and builders under development.
/// A name is present in at most one table at any time.
pub struct DatasetRegistry {
    concrete: ClassTable,
    abstract_builders: ClassTable,
    in_development: ClassTable,
    // Serializes the check-then-insert across all three tables.
    write_lock: Mutex<()>,
    options: RegistryOptions,
}

impl DatasetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// Create a new empty registry with the given options.
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            concrete: ClassTable::new(RegistryTable::Concrete),
            abstract_builders: ClassTable::new(RegistryTable::Abstract),
            in_development: ClassTable::new(RegistryTable::InDevelopment),
            write_lock: Mutex::new(()),
            options,
        }
    }

    /// Create a registry holding every builder declared with `#[dataset_builder]`.
    pub fn from_inventory() -> Result<Self, RegistryError> {
        Self::from_inventory_with(RegistryOptions::default())
    }

    /// Like [`Self::from_inventory`], with explicit options.
    pub fn from_inventory_with(options: RegistryOptions) -> Result<Self, RegistryError> {
        let registry = Self::with_options(options);
        registry.register_inventory()?;
        Ok(registry)
    }

    /// Register every builder submitted at link time.
    ///
    /// Classes are registered ordered by class name and module so collisions
    /// are reported deterministically. Stops at the first error.
    pub fn register_inventory(&self) -> Result<usize, RegistryError> {
        let mut classes = submitted_classes();
        classes.sort_by(|a, b| {
            a.class_name()
                .cmp(b.class_name())
                .then_with(|| a.module().cmp(&b.module()))
        });

        let count = classes.len();
        for class in classes {
            self.register(class)?;
        }

        info!(
            count,
            concrete = self.concrete.len(),
            abstract_builders = self.abstract_builders.len(),
            in_development = self.in_development.len(),
            "Registered dataset builders"
        );
        Ok(count)
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Register a builder class.
    ///
    /// Fails if the class's normalized name is already present in any table,
    /// unless overwrite is allowed. The check runs even inside a
    /// skip-registration scope; only the insertion is suppressed there.
    ///
    /// Abstract classes go to the abstract table, classes carrying the
    /// in-development marker to the in-development table, everything else to
    /// the concrete table.
    pub fn register(&self, class: BuilderClass) -> Result<Arc<BuilderClass>, RegistryError> {
        let _write = self.write_lock.lock();
        let class = Arc::new(class);

        if !self.options.allow_overwrite {
            self.check_collision(class.name())?;
        }

        if is_registration_skipped() {
            debug!(
                name = class.name(),
                class_name = class.class_name(),
                "Skipping registration"
            );
            return Ok(class);
        }

        let target = class.table();
        if self.options.allow_overwrite {
            for other in RegistryTable::ALL {
                if other != target && self.table(other).remove(class.name()).is_some() {
                    warn!(name = class.name(), from = other.as_str(), "Evicted builder from table");
                }
            }
            if self.table(target).replace(class.clone()).is_some() {
                warn!(name = class.name(), table = target.as_str(), "Overwrote registered builder");
            }
        } else {
            self.table(target).insert(class.clone())?;
        }

        debug!(
            name = class.name(),
            class_name = class.class_name(),
            table = target.as_str(),
            "Registered dataset builder"
        );
        Ok(class)
    }

    /// Register the Rust type `T`.
    pub fn register_type<T: RegisteredDataset>(&self) -> Result<Arc<BuilderClass>, RegistryError> {
        self.register(BuilderClass::of::<T>())
    }

    /// Fail if `name` is claimed by any table.
    ///
    /// Tables are checked concrete first, then in-development, then abstract.
    pub fn check_collision(&self, name: &str) -> Result<(), RegistryError> {
        match self.table_of(name) {
            Some(table) => Err(RegistryError::DuplicateRegistration {
                name: name.to_string(),
                table,
            }),
            None => Ok(()),
        }
    }

    /// Access one of the three tables.
    pub fn table(&self, table: RegistryTable) -> &ClassTable {
        match table {
            RegistryTable::Concrete => &self.concrete,
            RegistryTable::Abstract => &self.abstract_builders,
            RegistryTable::InDevelopment => &self.in_development,
        }
    }

    /// The table holding `name`, if any.
    pub fn table_of(&self, name: &str) -> Option<RegistryTable> {
        RegistryTable::ALL
            .into_iter()
            .find(|table| self.table(*table).contains(name))
    }

    /// Check if `name` is registered in any table.
    pub fn contains(&self, name: &str) -> bool {
        self.table_of(name).is_some()
    }

    /// Get a class from a specific table.
    pub fn get(&self, table: RegistryTable, name: &str) -> Option<Arc<BuilderClass>> {
        self.table(table).get(name)
    }

    /// Concrete builder classes, sorted by name.
    pub fn concrete(&self) -> Vec<Arc<BuilderClass>> {
        self.concrete.snapshot()
    }

    /// Abstract builder classes, sorted by name.
    pub fn abstract_builders(&self) -> Vec<Arc<BuilderClass>> {
        self.abstract_builders.snapshot()
    }

    /// In-development builder classes, sorted by name.
    pub fn in_development(&self) -> Vec<Arc<BuilderClass>> {
        self.in_development.snapshot()
    }

    /// Names of the builders available for lookup.
    pub fn list_builders(&self) -> Vec<String> {
        self.concrete.list_ids()
    }

    /// Total number of classes across all tables.
    pub fn len(&self) -> usize {
        RegistryTable::ALL
            .into_iter()
            .map(|table| self.table(table).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a concrete builder class by name.
    pub fn builder_class(&self, name: &str) -> Result<Arc<BuilderClass>, RegistryError> {
        if let Some(class) = self.concrete.get(name) {
            return Ok(class);
        }
        if self.in_development.contains(name) {
            return Err(RegistryError::InDevelopment(name.to_string()));
        }
        if self.abstract_builders.contains(name) {
            return Err(RegistryError::Abstract(name.to_string()));
        }
        Err(RegistryError::NotFound {
            name: name.to_string(),
            suggestion: self.suggest(name),
        })
    }

    /// Instantiate a concrete builder by name.
    ///
    /// Fails with [`RegistryError::NameMismatch`] if the instance reports a
    /// name other than the key its class is registered under.
    pub fn builder(&self, name: &str) -> Result<Box<dyn DatasetBuilder>, RegistryError> {
        let class = self.builder_class(name)?;
        let builder = class
            .instantiate()
            .ok_or_else(|| RegistryError::Abstract(name.to_string()))?;

        if builder.name() != class.name() {
            return Err(RegistryError::NameMismatch {
                name: class.name().to_string(),
                builder_name: builder.name().to_string(),
            });
        }
        Ok(builder)
    }

    /// Closest concrete name by edit distance.
    fn suggest(&self, name: &str) -> Option<String> {
        self.list_builders()
            .into_iter()
            .min_by_key(|candidate| strsim::levenshtein(name, candidate))
            .filter(|candidate| strsim::levenshtein(name, candidate) <= SUGGESTION_DISTANCE)
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
