//! Module documentation generation for generated clients.
//!
//! This module provides the [`ModuleDocBuilder`] struct for generating the
//! `//!` documentation at the top of a generated client file: an
//! introduction, authentication details, request headers, the operation
//! list and a usage example.

use std::collections::BTreeMap;

use proc_macro2::TokenStream;
use quote::quote;
use swagger2sdk_define::{AuthStrategy, HttpMethod};

use crate::emit::USER_AGENT;
use crate::ir::ClientUnit;
use crate::validation::WITH_HEADERS_SUFFIX;

/// Builds module-level documentation for a generated client.
///
/// ## Examples
///
/// ```ignore
/// let unit: ClientUnit = /* ... */;
/// let doc_tokens = ModuleDocBuilder::new(&unit).build();
/// ```
pub struct ModuleDocBuilder<'a> {
    unit: &'a ClientUnit,
}

impl<'a> ModuleDocBuilder<'a> {
    pub fn new(unit: &'a ClientUnit) -> Self {
        Self { unit }
    }

    /// Builds the complete module documentation as `#![doc = "..."]`
    /// attributes, one per line so each renders as a `//!` comment.
    pub fn build(&self) -> TokenStream {
        let text = [
            self.intro_paragraph(),
            self.auth_section(),
            self.headers_section(),
            self.operations_section(),
            self.example_section(),
        ]
        .join("\n\n");

        let lines = text.lines().map(|line| quote! { #![doc = #line] });
        quote! { #(#lines)* }
    }

    fn intro_paragraph(&self) -> String {
        format!(
            " Generated API client for {}.\n\n Requests are sent to `{}` by default.",
            self.unit.client.name, self.unit.client.base_url
        )
    }

    fn auth_section(&self) -> String {
        let auth_desc = match self.unit.client.auth {
            AuthStrategy::None => "No authentication required.",
            AuthStrategy::Basic => {
                "Uses HTTP Basic authentication with the `username` and `password` passed to `new()`."
            }
            AuthStrategy::Bearer => {
                "Uses Bearer token authentication via the `Authorization` header, with the `token` passed to `new()`."
            }
        };

        format!(" ## Authentication\n\n {}", auth_desc)
    }

    fn headers_section(&self) -> String {
        format!(
            " ## Headers\n\n Every request sends `User-Agent: {}`. Each method has a `{}` variant\n taking a `HeaderMap` whose entries replace the default headers.",
            USER_AGENT, WITH_HEADERS_SUFFIX
        )
    }

    /// Groups method names by HTTP method, keeping load order within a group.
    fn categorize_methods(&self) -> BTreeMap<String, Vec<(String, String)>> {
        let mut categories: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
        for method in &self.unit.client.methods {
            categories
                .entry(method.method.to_string())
                .or_default()
                .push((method.name.clone(), method.operation.clone()));
        }
        categories
    }

    fn operations_section(&self) -> String {
        let categories = self.categorize_methods();
        if categories.is_empty() {
            return " ## Operations\n\n No operations defined.".to_string();
        }

        let mut lines = vec![" ## Operations".to_string(), String::new()];
        for (verb, methods) in &categories {
            lines.push(format!(" **{}**:", verb));
            for (name, operation) in methods {
                lines.push(format!(" - `{}` - `{}`", name, operation));
            }
            lines.push(String::new());
        }
        lines.join("\n")
    }

    /// Uses the first GET method without arguments, then the first GET
    /// method, then the first method.
    fn example_section(&self) -> String {
        let methods = &self.unit.client.methods;
        let method = methods
            .iter()
            .find(|m| m.method == HttpMethod::Get && m.params.is_none() && m.body.is_none())
            .or_else(|| methods.iter().find(|m| m.method == HttpMethod::Get))
            .or_else(|| methods.first());

        let Some(method) = method else {
            return " ## Example\n\n No operations available for example.".to_string();
        };

        let client = &self.unit.client.name;
        let mut ctor_args = vec![format!("{}::BASE_URL", client)];
        ctor_args.extend(
            self.unit
                .client
                .credential_fields
                .iter()
                .map(|f| format!("\"<{}>\"", f)),
        );

        let mut call_args = Vec::new();
        if method.params.is_some() {
            call_args.push("request_parameters");
        }
        if method.body.is_some() {
            call_args.push("request_body");
        }

        format!(
            r#" ## Example

 ```ignore
 let client = {}::new({});
 let response = client.{}({}).await?;
 ```"#,
            client,
            ctor_args.join(", "),
            method.name,
            call_args.join(", ")
        )
    }
}
