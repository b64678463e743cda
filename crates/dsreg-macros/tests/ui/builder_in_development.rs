use dsreg_macros::dataset_builder;
use dsreg_protocols::{BuilderName, DatasetBuilder, DatasetInfo, RegisteredDataset, RegistryTable};

#[dataset_builder(in_development)]
#[derive(Default)]
struct Imagenet2012Corrupted;

impl DatasetBuilder for Imagenet2012Corrupted {
    fn info(&self) -> DatasetInfo {
        DatasetInfo::new(self.name(), "0.1.0")
    }
}

fn main() {
    assert_eq!(Imagenet2012Corrupted::NAME, "imagenet2012_corrupted");
    assert!(Imagenet2012Corrupted::IN_DEVELOPMENT);

    let class = Imagenet2012Corrupted::class();
    assert!(!class.is_abstract());
    assert_eq!(class.table(), RegistryTable::InDevelopment);
}
