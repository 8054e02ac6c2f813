//! Record struct generation.
//!
//! Each [`RecordDef`] becomes a serde struct. Optional fields are `Option<T>`
//! and are left out of serialized output when absent. Wrapper records are
//! `#[serde(transparent)]`, so their wire format is the bare `data` value.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::ir::{FieldType, RecordDef, RecordField, RecordRole, TypeRef};
use crate::naming::rust_field_ident;

/// Generates a record struct.
///
/// ## Examples
///
/// For a response record with a required `name` and optional `price`:
/// ```ignore
/// /// Response body of `GET /items/{id}`.
/// #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// pub struct GetItemsIdResponse {
///     pub name: String,
///     #[serde(default, skip_serializing_if = "Option::is_none")]
///     pub price: Option<f64>,
/// }
/// ```
pub fn generate_record(record: &RecordDef) -> TokenStream {
    let name = format_ident!("{}", record.name);
    let doc = record_doc(record);

    if record.wrapper {
        let fields = record.fields.iter().map(wrapper_field);
        return quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct #name {
                #(#fields)*
            }
        };
    }

    let fields = record.fields.iter().map(record_field);
    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct #name {
            #(#fields)*
        }
    }
}

fn record_doc(record: &RecordDef) -> String {
    let role = match record.role {
        RecordRole::RequestParameters => "Parameters",
        RecordRole::RequestBody => "Request body",
        RecordRole::Response => "Response body",
    };
    format!(" {} of `{}`.", role, record.operation)
}

fn record_field(field: &RecordField) -> TokenStream {
    let ident_str = rust_field_ident(&field.name);
    let ident = format_ident!("{}", ident_str);
    let ty = field_type_tokens(&field.field_type);

    let rename = if ident_str.trim_start_matches("r#") != field.name {
        let wire = &field.name;
        quote! { #[serde(rename = #wire)] }
    } else {
        quote! {}
    };

    if field.required {
        quote! {
            #rename
            pub #ident: #ty,
        }
    } else {
        quote! {
            #rename
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub #ident: Option<#ty>,
        }
    }
}

fn wrapper_field(field: &RecordField) -> TokenStream {
    let ident = format_ident!("{}", rust_field_ident(&field.name));
    let ty = field_type_tokens(&field.field_type);
    if field.required {
        quote! { pub #ident: #ty, }
    } else {
        quote! { pub #ident: Option<#ty>, }
    }
}

/// Rust type for a record field type.
pub fn field_type_tokens(field_type: &FieldType) -> TokenStream {
    match field_type {
        FieldType::String => quote! { String },
        FieldType::Float => quote! { f64 },
        FieldType::Integer => quote! { i64 },
        FieldType::Boolean => quote! { bool },
        FieldType::List(item) => {
            let item = field_type_tokens(item);
            quote! { Vec<#item> }
        }
        FieldType::Map => quote! { HashMap<String, serde_json::Value> },
        FieldType::Any => quote! { serde_json::Value },
    }
}

/// Rust type for a method argument or return type.
pub fn type_ref_tokens(type_ref: &TypeRef) -> TokenStream {
    match type_ref {
        TypeRef::Record(name) => {
            let ident = format_ident!("{}", name);
            quote! { #ident }
        }
        TypeRef::Untyped => quote! { serde_json::Value },
        TypeRef::Text => quote! { String },
        TypeRef::RawResponse => quote! { reqwest::Response },
    }
}
