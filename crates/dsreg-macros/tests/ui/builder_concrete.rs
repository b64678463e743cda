use dsreg_macros::dataset_builder;
use dsreg_protocols::{BuilderName, DatasetBuilder, DatasetInfo, RegisteredDataset, RegistryTable};

#[dataset_builder]
#[derive(Default)]
struct MyDataset;

impl DatasetBuilder for MyDataset {
    fn info(&self) -> DatasetInfo {
        DatasetInfo::new(self.name(), "1.0.0")
    }
}

fn main() {
    assert_eq!(MyDataset::CLASS_NAME, "MyDataset");
    assert_eq!(MyDataset::NAME, "my_dataset");
    assert!(!MyDataset::IN_DEVELOPMENT);

    let class = MyDataset::class();
    assert_eq!(class.name(), "my_dataset");
    assert_eq!(class.table(), RegistryTable::Concrete);
    assert!(class.is::<MyDataset>());

    let builder = class.instantiate().unwrap();
    assert_eq!(builder.name(), "my_dataset");
    assert_eq!(builder.info().version, "1.0.0");
}
