//! Normalized builder names.
//!
//! Registry keys are derived from the declared type identifier by converting
//! CamelCase to snake_case: an underscore is inserted before every uppercase
//! letter that starts a lowercase/digit run, and between a lowercase letter or
//! digit and a following uppercase letter. The result is lowercased.

use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_CAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.)([A-Z][a-z0-9]+)").expect("static regex must compile")
});

static ALL_CAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z0-9])([A-Z])").expect("static regex must compile")
});

/// Convert a CamelCase type identifier into its registry key.
///
/// ```
/// use dsreg_protocols::naming::camelcase_to_snakecase;
///
/// assert_eq!(camelcase_to_snakecase("MyDataset"), "my_dataset");
/// assert_eq!(camelcase_to_snakecase("Cifar10Corrupted"), "cifar10_corrupted");
/// ```
pub fn camelcase_to_snakecase(name: &str) -> String {
    let spaced = FIRST_CAP.replace_all(name, "${1}_${2}");
    ALL_CAP.replace_all(&spaced, "${1}_${2}").to_lowercase()
}

/// Convert a registry key back into a CamelCase identifier.
///
/// This is not an exact inverse: acronyms such as `MNIST` normalize to `mnist`
/// and come back as `Mnist`.
pub fn snakecase_to_camelcase(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}
