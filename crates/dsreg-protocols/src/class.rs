//! Builder class descriptors.

use std::any::TypeId;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builder::{DatasetBuilder, RegisteredDataset};
use crate::naming::camelcase_to_snakecase;

/// Constructor of an instantiable builder.
pub type BuilderFactory = fn() -> Box<dyn DatasetBuilder>;

/// The three disjoint registry tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryTable {
    /// Instantiable builders available for lookup.
    Concrete,
    /// Builders with unimplemented required operations.
    Abstract,
    /// Instantiable builders excluded from lookup while under development.
    InDevelopment,
}

impl RegistryTable {
    /// All tables, in collision-check order.
    pub const ALL: [RegistryTable; 3] = [
        RegistryTable::Concrete,
        RegistryTable::InDevelopment,
        RegistryTable::Abstract,
    ];

    /// Short label used by the CLI and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryTable::Concrete => "concrete",
            RegistryTable::Abstract => "abstract",
            RegistryTable::InDevelopment => "in-development",
        }
    }
}

impl fmt::Display for RegistryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryTable::Concrete => write!(f, "ConcreteRegistry"),
            RegistryTable::Abstract => write!(f, "AbstractRegistry"),
            RegistryTable::InDevelopment => write!(f, "InDevelopmentRegistry"),
        }
    }
}

impl std::str::FromStr for RegistryTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concrete" => Ok(RegistryTable::Concrete),
            "abstract" => Ok(RegistryTable::Abstract),
            "in-development" | "in_development" => Ok(RegistryTable::InDevelopment),
            other => Err(format!("unknown registry table: {}", other)),
        }
    }
}

/// Runtime descriptor of a builder type, the unit stored in the registry.
///
/// The normalized `name` is derived from `class_name` when the descriptor is
/// created and never changes afterwards.
#[derive(Clone)]
pub struct BuilderClass {
    class_name: String,
    name: String,
    module: Option<String>,
    in_development: bool,
    factory: Option<BuilderFactory>,
    type_id: Option<TypeId>,
}

impl BuilderClass {
    /// Create a descriptor for a builder assembled at runtime.
    ///
    /// Without a factory the class is abstract.
    pub fn new(class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        let name = camelcase_to_snakecase(&class_name);
        Self {
            class_name,
            name,
            module: None,
            in_development: false,
            factory: None,
            type_id: None,
        }
    }

    /// Create the descriptor of a registered Rust type.
    pub fn of<T: RegisteredDataset>() -> Self {
        Self {
            class_name: T::CLASS_NAME.to_string(),
            name: camelcase_to_snakecase(T::CLASS_NAME),
            module: Some(T::MODULE.to_string()),
            in_development: T::IN_DEVELOPMENT,
            factory: T::factory(),
            type_id: Some(TypeId::of::<T>()),
        }
    }

    /// Set the factory, making the class instantiable.
    pub fn with_factory(mut self, factory: BuilderFactory) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Set the module path the class belongs to.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Mark the class as under development.
    pub fn in_development_marker(mut self, in_development: bool) -> Self {
        self.in_development = in_development;
        self
    }

    /// The declared type identifier.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The normalized registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Whether the class declares the in-development marker.
    pub fn in_development(&self) -> bool {
        self.in_development
    }

    /// Whether the class cannot be instantiated.
    pub fn is_abstract(&self) -> bool {
        self.factory.is_none()
    }

    /// The `TypeId` of the Rust type, if the class was created from one.
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    /// Whether this class describes the Rust type `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == Some(TypeId::of::<T>())
    }

    /// The table this class belongs in when registered.
    ///
    /// Abstractness takes precedence over the in-development marker.
    pub fn table(&self) -> RegistryTable {
        if self.is_abstract() {
            RegistryTable::Abstract
        } else if self.in_development {
            RegistryTable::InDevelopment
        } else {
            RegistryTable::Concrete
        }
    }

    /// Instantiate the builder, `None` for abstract classes.
    pub fn instantiate(&self) -> Option<Box<dyn DatasetBuilder>> {
        self.factory.map(|factory| factory())
    }
}

impl fmt::Debug for BuilderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderClass")
            .field("class_name", &self.class_name)
            .field("name", &self.name)
            .field("module", &self.module)
            .field("in_development", &self.in_development)
            .field("abstract", &self.is_abstract())
            .finish()
    }
}

/// Link-time registration record submitted by `#[dataset_builder]`.
///
/// Collected with `inventory` and registered by an explicit startup routine.
pub struct BuilderClassReg(pub fn() -> BuilderClass);

inventory::collect!(BuilderClassReg);

impl BuilderClassReg {
    pub const fn new(class: fn() -> BuilderClass) -> Self {
        Self(class)
    }

    /// Build the descriptor.
    pub fn class(&self) -> BuilderClass {
        (self.0)()
    }
}

/// Every descriptor submitted at link time, in submission order.
pub fn submitted_classes() -> Vec<BuilderClass> {
    let mut classes = Vec::new();
    for reg in inventory::iter::<BuilderClassReg> {
        classes.push(reg.class());
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DatasetInfo;

    struct Runtime;

    impl crate::builder::BuilderName for Runtime {
        fn name(&self) -> &'static str {
            "runtime"
        }
    }

    impl DatasetBuilder for Runtime {
        fn info(&self) -> DatasetInfo {
            DatasetInfo::new("runtime", "0.1.0")
        }
    }

    fn build_runtime() -> Box<dyn DatasetBuilder> {
        Box::new(Runtime)
    }

    #[test]
    fn test_new_derives_name() {
        let class = BuilderClass::new("MyDataset");
        assert_eq!(class.class_name(), "MyDataset");
        assert_eq!(class.name(), "my_dataset");
        assert!(class.module().is_none());
        assert!(class.type_id().is_none());
    }

    #[test]
    fn test_without_factory_is_abstract() {
        let class = BuilderClass::new("Base");
        assert!(class.is_abstract());
        assert_eq!(class.table(), RegistryTable::Abstract);
        assert!(class.instantiate().is_none());
    }

    #[test]
    fn test_with_factory_is_concrete() {
        let class = BuilderClass::new("Runtime").with_factory(build_runtime);
        assert!(!class.is_abstract());
        assert_eq!(class.table(), RegistryTable::Concrete);
        let builder = class.instantiate().unwrap();
        assert_eq!(builder.info().name, "runtime");
    }

    #[test]
    fn test_in_development_table() {
        let class = BuilderClass::new("Runtime")
            .with_factory(build_runtime)
            .in_development_marker(true);
        assert_eq!(class.table(), RegistryTable::InDevelopment);
    }

    #[test]
    fn test_abstract_wins_over_in_development() {
        let class = BuilderClass::new("Base").in_development_marker(true);
        assert_eq!(class.table(), RegistryTable::Abstract);
    }

    #[test]
    fn test_with_module() {
        let class = BuilderClass::new("Runtime").with_module("community.runtime");
        assert_eq!(class.module(), Some("community.runtime"));
    }

    #[test]
    fn test_table_display_names_table() {
        assert_eq!(RegistryTable::Concrete.to_string(), "ConcreteRegistry");
        assert_eq!(RegistryTable::Abstract.to_string(), "AbstractRegistry");
        assert_eq!(
            RegistryTable::InDevelopment.to_string(),
            "InDevelopmentRegistry"
        );
    }

    #[test]
    fn test_table_from_str() {
        assert_eq!("concrete".parse::<RegistryTable>(), Ok(RegistryTable::Concrete));
        assert_eq!("Abstract".parse::<RegistryTable>(), Ok(RegistryTable::Abstract));
        assert_eq!(
            "in_development".parse::<RegistryTable>(),
            Ok(RegistryTable::InDevelopment)
        );
        assert!("unknown".parse::<RegistryTable>().is_err());
    }

    #[test]
    fn test_debug_shows_abstractness() {
        let debug = format!("{:?}", BuilderClass::new("Base"));
        assert!(debug.contains("abstract: true"));
        assert!(debug.contains("\"base\""));
    }
}
