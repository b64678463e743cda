//! Builders shipped with the dsreg binary.
//!
//! Small synthetic datasets used to exercise the registry end to end.

use dsreg_macros::dataset_builder;
use dsreg_protocols::{BuilderName, DatasetBuilder, DatasetInfo};

/// Base of builders that generate examples from a single generator function.
#[dataset_builder(abstract_builder)]
pub struct GeneratorBasedBuilder;

/// MNIST-shaped dataset of random digits.
#[dataset_builder]
#[derive(Default)]
pub struct DummyMnist;

impl DatasetBuilder for DummyMnist {
    fn info(&self) -> DatasetInfo {
        DatasetInfo::new(self.name(), "3.0.1")
            .with_description("Random 28x28 grayscale images with labels in 0..10")
    }
}

/// Dataset whose train and test splits share one generator.
#[dataset_builder]
#[derive(Default)]
pub struct DummyDatasetSharedGenerator;

impl DatasetBuilder for DummyDatasetSharedGenerator {
    fn info(&self) -> DatasetInfo {
        DatasetInfo::new(self.name(), "1.0.0")
            .with_description("Integer examples 0..30 split between train and test")
    }
}

/// Placeholder for a dataset that is still being written.
#[dataset_builder(in_development)]
#[derive(Default)]
pub struct DummyNewDataset;

impl DatasetBuilder for DummyNewDataset {
    fn info(&self) -> DatasetInfo {
        DatasetInfo::new(self.name(), "0.1.0")
    }
}
