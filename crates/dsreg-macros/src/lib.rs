//! # dsreg Macros
//!
//! Procedural macros for declaring dataset builders.
//!
//! ## Available Macros
//!
//! - `#[dataset_builder]` - Declare a registered dataset builder

use darling::{ast::NestedMeta, FromMeta};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemStruct};

use dsreg_protocols::naming::camelcase_to_snakecase;

/// Dataset builder attribute arguments.
#[derive(Debug, FromMeta)]
struct DatasetBuilderArgs {
    /// The builder leaves required operations unimplemented.
    #[darling(default)]
    abstract_builder: bool,
    /// The builder is excluded from lookup while under development.
    #[darling(default)]
    in_development: bool,
}

/// Declare a registered dataset builder.
///
/// This macro implements `RegisteredDataset` for a struct, assigning the
/// normalized name derived from the struct's identifier, and submits the
/// builder's class descriptor for registration at startup.
///
/// Concrete builders must implement `DatasetBuilder` and `Default`. Builders
/// marked `abstract_builder` need neither; they are recorded in the abstract
/// table and cannot be instantiated.
///
/// # Example
///
/// ```ignore
/// use dsreg_macros::dataset_builder;
/// use dsreg_protocols::{BuilderName, DatasetBuilder, DatasetInfo};
///
/// #[dataset_builder(abstract_builder)]
/// struct GeneratorBasedBuilder;
///
/// #[dataset_builder]
/// #[derive(Default)]
/// struct MyDataset;
///
/// impl DatasetBuilder for MyDataset {
///     fn info(&self) -> DatasetInfo {
///         DatasetInfo::new(self.name(), "1.0.0")
///     }
/// }
///
/// #[dataset_builder(in_development)]
/// #[derive(Default)]
/// struct NotReadyYet;
/// ```
#[proc_macro_attribute]
pub fn dataset_builder(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };

    let args = match DatasetBuilderArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    let input = parse_macro_input!(item as ItemStruct);
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return TokenStream::from(
            syn::Error::new_spanned(
                &input.generics,
                "dataset builders cannot be generic: each builder registers under one name",
            )
            .to_compile_error(),
        );
    }

    let class_name = struct_name.to_string();
    let name = camelcase_to_snakecase(&class_name);
    let in_development = args.in_development;

    let factory = if args.abstract_builder {
        quote! { ::core::option::Option::None }
    } else {
        quote! {
            fn build() -> ::std::boxed::Box<dyn ::dsreg_protocols::DatasetBuilder> {
                ::std::boxed::Box::new(<#struct_name as ::core::default::Default>::default())
            }
            ::core::option::Option::Some(build)
        }
    };

    let expanded = quote! {
        #input

        impl ::dsreg_protocols::RegisteredDataset for #struct_name {
            const CLASS_NAME: &'static str = #class_name;
            const NAME: &'static str = #name;
            const MODULE: &'static str = ::core::module_path!();
            const IN_DEVELOPMENT: bool = #in_development;

            fn factory() -> ::core::option::Option<::dsreg_protocols::BuilderFactory> {
                #factory
            }
        }

        ::dsreg_protocols::inventory::submit! {
            ::dsreg_protocols::BuilderClassReg::new(
                <#struct_name as ::dsreg_protocols::RegisteredDataset>::class
            )
        }
    };

    TokenStream::from(expanded)
}
