//! Two builder types that normalize to the same name.

use dsreg_core::{DatasetRegistry, RegistryOptions};
use dsreg_macros::dataset_builder;
use dsreg_protocols::{BuilderName, DatasetBuilder, DatasetInfo, RegistryTable};

#[dataset_builder(abstract_builder)]
struct Base;

#[dataset_builder]
#[derive(Default)]
struct MyDataset;

impl DatasetBuilder for MyDataset {
    fn info(&self) -> DatasetInfo {
        DatasetInfo::new(self.name(), "1.0.0")
    }
}

mod redefined {
    use super::*;

    #[dataset_builder]
    #[derive(Default)]
    pub struct MyDataset;

    impl DatasetBuilder for MyDataset {
        fn info(&self) -> DatasetInfo {
            DatasetInfo::new(self.name(), "2.0.0")
        }
    }
}

#[test]
fn test_second_definition_rejected() {
    let err = DatasetRegistry::from_inventory()
        .err()
        .expect("duplicate builder must be rejected");

    assert_eq!(err.conflicting_table(), Some(RegistryTable::Concrete));
    let message = err.to_string();
    assert!(message.contains("my_dataset"));
    assert!(message.contains("ConcreteRegistry"));
}

#[test]
fn test_first_definition_wins_registration_order() {
    let registry = DatasetRegistry::new();
    registry.register_type::<Base>().unwrap();
    let first = registry.register_type::<MyDataset>().unwrap();
    assert!(registry.register_type::<redefined::MyDataset>().is_err());

    assert!(first.is::<MyDataset>());
    assert_eq!(registry.table_of("base"), Some(RegistryTable::Abstract));
}

#[test]
fn test_overwrite_keeps_one_entry() {
    let registry =
        DatasetRegistry::from_inventory_with(RegistryOptions::default().with_overwrite(true))
            .unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.list_builders(), vec!["my_dataset"]);
}
