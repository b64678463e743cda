//! Dataset builder traits.

use serde::{Deserialize, Serialize};

use crate::class::{BuilderClass, BuilderFactory};

/// Static description of a dataset produced by a builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Normalized builder name.
    pub name: String,
    /// Dataset version (semver string).
    pub version: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Homepage of the upstream dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// BibTeX citation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl DatasetInfo {
    /// Create a new dataset info.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: String::new(),
            homepage: None,
            citation: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the homepage.
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    /// Set the citation.
    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }
}

/// Access to a builder's normalized name.
///
/// Implemented for every [`RegisteredDataset`] so the name assigned at
/// registration is also reachable through `dyn DatasetBuilder`.
pub trait BuilderName {
    /// Returns the normalized registry name of this builder.
    fn name(&self) -> &'static str;
}

impl<T: RegisteredDataset> BuilderName for T {
    fn name(&self) -> &'static str {
        T::NAME
    }
}

/// Core trait for instantiable dataset builders.
///
/// Builders that leave this trait unimplemented cannot provide a factory and
/// are classified as abstract.
pub trait DatasetBuilder: BuilderName + Send + Sync + 'static {
    /// Returns the dataset description.
    fn info(&self) -> DatasetInfo;

    /// Returns the dataset version.
    fn version(&self) -> String {
        self.info().version
    }
}

/// Registration metadata attached to a builder type.
///
/// Normally generated by `#[dataset_builder]`; the constants mirror what is
/// recorded in the type's [`BuilderClass`].
pub trait RegisteredDataset: 'static {
    /// The declared type identifier.
    const CLASS_NAME: &'static str;

    /// The normalized registry name derived from [`Self::CLASS_NAME`].
    const NAME: &'static str;

    /// Module path the type was declared in.
    const MODULE: &'static str;

    /// Whether the builder is under active development.
    const IN_DEVELOPMENT: bool = false;

    /// Factory for instantiable builders, `None` for abstract ones.
    fn factory() -> Option<BuilderFactory>;

    /// Build the registry descriptor for this type.
    fn class() -> BuilderClass
    where
        Self: Sized,
    {
        BuilderClass::of::<Self>()
    }
}
