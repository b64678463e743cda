use dsreg_macros::dataset_builder;
use dsreg_protocols::{submitted_classes, BuilderName, DatasetBuilder, DatasetInfo};

// Test builder with struct fields
#[dataset_builder]
#[derive(Default)]
struct Cifar10 {
    data_dir: String,
    shuffle_files: bool,
}

impl DatasetBuilder for Cifar10 {
    fn info(&self) -> DatasetInfo {
        DatasetInfo::new(self.name(), "3.0.2").with_homepage("https://www.cs.toronto.edu/~kriz/cifar.html")
    }
}

fn main() {
    let builder = Cifar10 {
        data_dir: "/tmp/cifar10".to_string(),
        shuffle_files: true,
    };
    assert_eq!(builder.name(), "cifar10");

    // Verify struct fields still work
    assert_eq!(builder.data_dir, "/tmp/cifar10");
    assert!(builder.shuffle_files);

    // The descriptor was submitted for startup registration.
    let submitted = submitted_classes();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].class_name(), "Cifar10");
}
