use dsreg_macros::dataset_builder;
use dsreg_protocols::{RegisteredDataset, RegistryTable};

// Abstract builders implement neither `DatasetBuilder` nor `Default`.
#[dataset_builder(abstract_builder)]
struct GeneratorBasedBuilder {
    _split_count: usize,
}

fn main() {
    assert_eq!(GeneratorBasedBuilder::NAME, "generator_based_builder");
    assert!(GeneratorBasedBuilder::factory().is_none());

    let class = GeneratorBasedBuilder::class();
    assert!(class.is_abstract());
    assert_eq!(class.table(), RegistryTable::Abstract);
}
