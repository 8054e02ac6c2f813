//! Rust code generation.
//!
//! This module contains the generators behind the Rust emitter. Each
//! submodule turns one part of the [`crate::ir::ClientUnit`] into tokens.
//!
//! ## Submodules
//!
//! - [`error`] - The `ClientError` enum and the `param_value` / `form_pairs` helpers
//! - [`records`] - One serde struct per record
//! - [`api_struct`] - The client struct, `BASE_URL` and constructor
//! - [`client`] - One async method per operation
//! - [`module_docs`] - The `//!` documentation block
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::emit::rust`] for the assembly.

pub mod api_struct;
pub mod client;
pub mod error;
pub mod module_docs;
pub mod records;

pub use api_struct::generate_client_struct;
pub use client::{generate_method, generate_methods, needs_form_helper, needs_param_helper};
pub use error::{generate_error_type, generate_form_helper, generate_param_helper};
pub use module_docs::ModuleDocBuilder;
pub use records::{field_type_tokens, generate_record, type_ref_tokens};
