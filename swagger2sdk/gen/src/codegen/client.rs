//! Client method generation.
//!
//! Generates two async methods per [`CallableUnit`]: `{name}_with_headers`,
//! which builds the URL, attaches the default headers, credentials and body,
//! applies the caller's extra headers, sends the request with reqwest, maps
//! non-2xx statuses to `ClientError::Api` and decodes the response; and
//! `{name}`, which calls it with no extra headers.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use swagger2sdk_define::{AuthStrategy, HttpMethod};

use crate::codegen::records::type_ref_tokens;
use crate::ir::{BodyEncoding, CallableUnit, ClientUnit, PathSegment, ResponseDecoding};
use crate::naming::rust_field_ident;
use crate::validation::{ERROR_TYPE_NAME, WITH_HEADERS_SUFFIX};

/// Generates the `impl` block holding every client method, in load order.
pub fn generate_methods(unit: &ClientUnit) -> TokenStream {
    let struct_name = format_ident!("{}", unit.client.name);
    let methods = unit.client.methods.iter().map(generate_method);

    quote! {
        impl #struct_name {
            #(#methods)*
        }
    }
}

/// Whether any generated method renders parameter values.
pub fn needs_param_helper(unit: &ClientUnit) -> bool {
    unit.client
        .methods
        .iter()
        .any(|m| m.has_path_params() || !m.query.is_empty())
}

/// Whether any generated method sends a form-encoded body.
pub fn needs_form_helper(unit: &ClientUnit) -> bool {
    unit.client
        .methods
        .iter()
        .any(|m| matches!(m.body.as_ref().map(|b| &b.encoding), Some(BodyEncoding::Form)))
}

/// Generates the method pair of one operation.
///
/// Substituted path parameters are required fields of the parameter record,
/// so they are rendered without an `Option` check.
///
/// ## Examples
///
/// For `GET /items/{id}` with a required query parameter `id`:
/// ```ignore
/// /// `GET /items/{id}`
/// pub async fn get_items_id(
///     &self,
///     request_parameters: GetItemsIdRequestParameters,
/// ) -> Result<GetItemsIdResponse, ClientError> {
///     self.get_items_id_with_headers(request_parameters, reqwest::header::HeaderMap::new())
///         .await
/// }
///
/// /// `GET /items/{id}` with extra request headers.
/// pub async fn get_items_id_with_headers(
///     &self,
///     request_parameters: GetItemsIdRequestParameters,
///     headers: reqwest::header::HeaderMap,
/// ) -> Result<GetItemsIdResponse, ClientError> {
///     let mut url = self.base_url.clone();
///     url.push_str("/items/{id}");
///     let mut query: Vec<String> = Vec::new();
///     let value = param_value(&request_parameters.id)?;
///     query.push(format!("id={}", value));
///     if !query.is_empty() {
///         url.push('?');
///         url.push_str(&query.join("&"));
///     }
///     let response = self
///         .client
///         .get(&url)
///         .header(reqwest::header::USER_AGENT, Self::USER_AGENT)
///         .headers(headers)
///         .send()
///         .await?;
///     ...
/// }
/// ```
pub fn generate_method(unit: &CallableUnit) -> TokenStream {
    let name = format_ident!("{}", unit.name);
    let with_headers = format_ident!("{}{}", unit.name, WITH_HEADERS_SUFFIX);
    let doc = format!(" `{}`", unit.operation);
    let with_headers_doc = format!(" `{}` with extra request headers.", unit.operation);
    let error_name = format_ident!("{}", ERROR_TYPE_NAME);

    let params_arg = unit.params.as_ref().map(|ty| {
        let ty = type_ref_tokens(ty);
        quote! { request_parameters: #ty, }
    });
    let params_pass = unit.params.as_ref().map(|_| quote! { request_parameters, });
    let body_arg = unit.body.as_ref().map(|body| {
        let ty = type_ref_tokens(&body.type_ref);
        quote! { request_body: #ty, }
    });
    let body_pass = unit.body.as_ref().map(|_| quote! { request_body, });
    let return_ty = type_ref_tokens(&unit.response);

    let url = generate_url(unit);
    let send = generate_send(unit);
    let decode = generate_decode(unit.decoding);

    quote! {
        #[doc = #doc]
        pub async fn #name(&self, #params_arg #body_arg) -> Result<#return_ty, #error_name> {
            self.#with_headers(#params_pass #body_pass reqwest::header::HeaderMap::new()).await
        }

        #[doc = #with_headers_doc]
        ///
        /// `headers` are applied last and replace default headers of the same name.
        pub async fn #with_headers(
            &self,
            #params_arg
            #body_arg
            headers: reqwest::header::HeaderMap,
        ) -> Result<#return_ty, #error_name> {
            #url
            #send
            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(#error_name::Api { status, body });
            }
            #decode
        }
    }
}

fn field_ident(name: &str) -> proc_macro2::Ident {
    format_ident!("{}", rust_field_ident(name))
}

/// Escapes a literal for use inside a `format!` string.
fn escape_format(s: &str) -> String {
    s.replace('{', "{{").replace('}', "}}")
}

/// Generates the statements that build `url`.
fn generate_url(unit: &CallableUnit) -> TokenStream {
    let mut steps = Vec::new();

    for segment in &unit.path {
        match segment {
            PathSegment::Literal(text) => steps.push(quote! { url.push_str(#text); }),
            PathSegment::Param(name) => {
                let field = field_ident(name);
                steps.push(quote! {
                    url.push_str(&param_value(&request_parameters.#field)?);
                });
            }
        }
    }

    if !unit.query.is_empty() {
        let pairs = unit.query.iter().map(|binding| {
            let field = field_ident(&binding.name);
            let pattern = format!("{}={{}}", escape_format(&binding.name));
            if binding.required {
                quote! {
                    let value = param_value(&request_parameters.#field)?;
                    query.push(format!(#pattern, value));
                }
            } else {
                quote! {
                    if let Some(value) = &request_parameters.#field {
                        let value = param_value(value)?;
                        query.push(format!(#pattern, value));
                    }
                }
            }
        });
        steps.push(quote! {
            let mut query: Vec<String> = Vec::new();
            #(#pairs)*
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query.join("&"));
            }
        });
    }

    if steps.is_empty() {
        quote! { let url = self.base_url.clone(); }
    } else {
        quote! {
            let mut url = self.base_url.clone();
            #(#steps)*
        }
    }
}

/// Generates the request chain ending in `let response = ...send().await?;`.
///
/// Header order: user agent, credentials, body headers, then the caller's
/// `headers`, which win on conflicts.
fn generate_send(unit: &CallableUnit) -> TokenStream {
    let verb = match unit.method {
        HttpMethod::Get => format_ident!("get"),
        HttpMethod::Post => format_ident!("post"),
        HttpMethod::Put => format_ident!("put"),
        HttpMethod::Patch => format_ident!("patch"),
        HttpMethod::Delete => format_ident!("delete"),
    };

    let auth = match unit.auth {
        AuthStrategy::None => quote! {},
        AuthStrategy::Basic => quote! {
            .basic_auth(&self.username, Some(&self.password))
        },
        AuthStrategy::Bearer => quote! {
            .header("Authorization", format!("Bearer {}", self.token))
        },
    };

    let body = match unit.body.as_ref().map(|b| &b.encoding) {
        None => quote! {},
        Some(BodyEncoding::Json) => quote! { .json(&request_body) },
        Some(BodyEncoding::Form) => quote! { .form(&form_pairs(&request_body)?) },
        Some(BodyEncoding::Raw { content_type }) => quote! {
            .header("Content-Type", #content_type)
            .body(request_body)
        },
    };

    quote! {
        let response = self
            .client
            .#verb(&url)
            .header(reqwest::header::USER_AGENT, Self::USER_AGENT)
            #auth
            #body
            .headers(headers)
            .send()
            .await?;
    }
}

fn generate_decode(decoding: ResponseDecoding) -> TokenStream {
    match decoding {
        ResponseDecoding::Json => quote! {
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        },
        ResponseDecoding::Text => quote! {
            Ok(response.text().await?)
        },
        ResponseDecoding::Raw => quote! {
            Ok(response)
        },
    }
}
