//! Registry subcommand handlers for dsreg.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use dsreg_core::{DatasetRegistry, RegistryOptions};
use dsreg_protocols::{BuilderClass, DatasetInfo, RegistryError, RegistryTable};

use crate::cli::{OutputFormat, TableFilter};

/// One registered class, as printed by `list` and `info`.
#[derive(Debug, Serialize)]
pub(crate) struct ClassRow {
    pub name: String,
    pub class_name: String,
    pub module: Option<String>,
    pub table: RegistryTable,
}

impl ClassRow {
    fn new(class: &BuilderClass, table: RegistryTable) -> Self {
        Self {
            name: class.name().to_string(),
            class_name: class.class_name().to_string(),
            module: class.module().map(str::to_string),
            table,
        }
    }
}

/// Detailed view of one class.
#[derive(Debug, Serialize)]
pub(crate) struct ClassDetails {
    #[serde(flatten)]
    pub class: ClassRow,
    pub is_abstract: bool,
    pub in_development: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<DatasetInfo>,
}

/// Collect rows for the selected tables, in table order then name order.
pub(crate) fn collect_rows(registry: &DatasetRegistry, filter: TableFilter) -> Vec<ClassRow> {
    filter
        .tables()
        .into_iter()
        .flat_map(|table| {
            registry
                .table(table)
                .snapshot()
                .into_iter()
                .map(move |class| ClassRow::new(&class, table))
        })
        .collect()
}

/// Render rows as a fixed-width table.
pub(crate) fn format_table(rows: &[ClassRow]) -> String {
    let mut out = format!(
        "{:<36} {:<36} {:<16} {}\n",
        "NAME", "CLASS", "TABLE", "MODULE"
    );
    out.push_str(&"-".repeat(100));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{:<36} {:<36} {:<16} {}\n",
            row.name,
            row.class_name,
            row.table.as_str(),
            row.module.as_deref().unwrap_or("-")
        ));
    }
    out
}

/// List registered builders.
pub(crate) fn registry_list(
    registry: &DatasetRegistry,
    filter: TableFilter,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = collect_rows(registry, filter);

    if rows.is_empty() && format == OutputFormat::Table {
        println!("No builders found.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => print!("{}", format_table(&rows)),
    }
    Ok(())
}

/// Look up a class in any table.
///
/// Unlike [`DatasetRegistry::builder_class`], abstract and in-development
/// classes are returned too; only an unknown name is an error.
pub(crate) fn find_details(
    registry: &DatasetRegistry,
    name: &str,
) -> Result<ClassDetails, RegistryError> {
    let Some(table) = registry.table_of(name) else {
        // Reuse the lookup error so the message carries a suggestion.
        return Err(registry.builder_class(name).err().unwrap_or_else(|| {
            RegistryError::NotFound {
                name: name.to_string(),
                suggestion: None,
            }
        }));
    };

    let class: Arc<BuilderClass> = registry
        .get(table, name)
        .ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
            suggestion: None,
        })?;

    Ok(ClassDetails {
        class: ClassRow::new(&class, table),
        is_abstract: class.is_abstract(),
        in_development: class.in_development(),
        info: class.instantiate().map(|builder| builder.info()),
    })
}

/// Show detailed info about a builder.
pub(crate) fn registry_info(
    registry: &DatasetRegistry,
    name: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let details = find_details(registry, name)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("Builder: {}", details.class.name);
    println!("{}", "=".repeat(50));
    println!("Class:          {}", details.class.class_name);
    println!("Module:         {}", details.class.module.as_deref().unwrap_or("-"));
    println!("Table:          {}", details.class.table.as_str());
    println!("Abstract:       {}", details.is_abstract);
    println!("In development: {}", details.in_development);

    if let Some(info) = &details.info {
        println!("\nDataset:");
        println!("  Version:     {}", info.version);
        if !info.description.is_empty() {
            println!("  Description: {}", info.description);
        }
        if let Some(homepage) = &info.homepage {
            println!("  Homepage:    {}", homepage);
        }
    }

    Ok(())
}

/// Build a fresh registry from the inventory and report collisions.
pub(crate) fn registry_check(options: RegistryOptions) -> Result<(), Box<dyn std::error::Error>> {
    match DatasetRegistry::from_inventory_with(options) {
        Ok(registry) => {
            info!(total = registry.len(), "Registry check passed");
            println!(
                "OK: {} builders ({} concrete, {} abstract, {} in development)",
                registry.len(),
                registry.concrete().len(),
                registry.abstract_builders().len(),
                registry.in_development().len()
            );
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Registry check failed");
            Err(e.into())
        }
    }
}
