//! Rust emitter: an async `reqwest` client with serde records.

use proc_macro2::TokenStream;
use quote::quote;

use crate::codegen::{
    ModuleDocBuilder, generate_client_struct, generate_error_type, generate_form_helper,
    generate_methods, generate_param_helper, generate_record, needs_form_helper,
    needs_param_helper,
};
use crate::emit::Emitter;
use crate::errors::Result;
use crate::ir::{ClientUnit, Import};
use crate::naming::rust_field_ident;
use crate::output::{format_code, validate_code};
use crate::validation::validate_record_fields;

/// Emits a single Rust module.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

impl Emitter for RustEmitter {
    fn extension(&self) -> &'static str {
        "rs"
    }

    fn emit(&self, unit: &ClientUnit) -> Result<String> {
        let tokens = assemble_client_module(unit)?;
        let file = validate_code(&tokens)?;
        Ok(format_code(&file))
    }
}

/// Assembles the client module code.
///
/// This function generates, in order:
/// - Module documentation
/// - The fixed import block
/// - The `ClientError` type, then `param_value` and `form_pairs` when a
///   method uses them
/// - One struct per record
/// - The client struct and its methods
///
/// ## Errors
///
/// Returns [`crate::errors::GeneratorError::DuplicateField`] when two fields
/// of a record map to the same Rust identifier.
pub fn assemble_client_module(unit: &ClientUnit) -> Result<TokenStream> {
    for record in &unit.records {
        validate_record_fields(record, rust_field_ident)?;
    }

    let module_docs = ModuleDocBuilder::new(unit).build();
    let imports: TokenStream = unit.imports.iter().map(|i| import_tokens(*i)).collect();
    let error_type = generate_error_type();
    let param_helper = if needs_param_helper(unit) {
        generate_param_helper()
    } else {
        quote! {}
    };
    let form_helper = if needs_form_helper(unit) {
        generate_form_helper()
    } else {
        quote! {}
    };
    let records: TokenStream = unit.records.iter().map(generate_record).collect();
    let client_struct = generate_client_struct(&unit.client);
    let methods = generate_methods(unit);

    Ok(quote! {
        #module_docs

        #imports

        #error_type

        #param_helper

        #form_helper

        #records

        #client_struct

        #methods
    })
}

fn import_tokens(import: Import) -> TokenStream {
    match import {
        Import::HttpClient => quote! { use reqwest::Client; },
        Import::RecordBase => quote! {
            #[allow(unused_imports)]
            use serde::{Deserialize, Serialize};
        },
        // `Option` is in the prelude.
        Import::Optional => quote! {},
        Import::Collections => quote! {
            #[allow(unused_imports)]
            use std::collections::HashMap;
        },
    }
}
