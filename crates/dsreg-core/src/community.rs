//! Loading of community builders assembled at runtime.
//!
//! A community module contributes builder classes that must not end up in
//! the registry tables. They are registered inside a skip scope, so a name
//! clash with an already registered builder is still reported.

use std::sync::Arc;

use tracing::debug;

use dsreg_protocols::{BuilderClass, RegistryError};

use crate::registry::DatasetRegistry;
use crate::skip::skip_registration;

/// Extract the single builder defined by a community module.
///
/// Classes without a module path are attributed to `module`. Fails if a
/// class collides with a registered name, or if the module does not define
/// exactly one non-abstract builder.
pub fn builder_class_from_module<I>(
    registry: &DatasetRegistry,
    module: &str,
    classes: I,
) -> Result<Arc<BuilderClass>, RegistryError>
where
    I: IntoIterator<Item = BuilderClass>,
{
    let mut builders = Vec::new();
    {
        let _skip = skip_registration();
        for class in classes {
            let class = match class.module() {
                Some(_) => class,
                None => class.with_module(module),
            };
            let class = registry.register(class)?;
            if !class.is_abstract() {
                builders.push(class);
            }
        }
    }

    if builders.len() != 1 {
        return Err(RegistryError::InvalidModule {
            module: module.to_string(),
            found: builders
                .iter()
                .map(|class| class.class_name().to_string())
                .collect(),
        });
    }

    let builder = builders.remove(0);
    debug!(module, name = builder.name(), "Loaded community builder");
    Ok(builder)
}
