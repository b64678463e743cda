//! Registration and lookup errors.

use thiserror::Error;

use crate::class::RegistryTable;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// A name already claimed by one of the three tables.
    #[error("Dataset with name {name} already registered in {table}")]
    DuplicateRegistration { name: String, table: RegistryTable },

    #[error("Dataset {name} not found{}", did_you_mean(.suggestion))]
    NotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Dataset {0} is under active development and cannot be loaded")]
    InDevelopment(String),

    #[error("Dataset {0} is abstract and cannot be instantiated")]
    Abstract(String),

    #[error("Could not load dataset builder from {module}: expected exactly one builder, found {found:?}")]
    InvalidModule { module: String, found: Vec<String> },

    /// The factory of a class built an instance reporting another name.
    #[error("Dataset {name} instantiated a builder named {builder_name}")]
    NameMismatch { name: String, builder_name: String },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean {}?)", s))
        .unwrap_or_default()
}

impl RegistryError {
    /// The table named by a duplicate registration, if any.
    pub fn conflicting_table(&self) -> Option<RegistryTable> {
        match self {
            RegistryError::DuplicateRegistration { table, .. } => Some(*table),
            _ => None,
        }
    }
}
