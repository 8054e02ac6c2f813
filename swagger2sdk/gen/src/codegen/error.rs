//! Runtime support items emitted into every generated Rust client.
//!
//! Generates the `ClientError` enum returned by every generated method, the
//! `param_value` helper that renders parameter values into URLs, and the
//! `form_pairs` helper that flattens form-encoded bodies.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::synth::types::WRAPPER_FIELD;
use crate::validation::ERROR_TYPE_NAME;

/// Generates the ClientError enum for runtime errors.
///
/// - `Http`: transport failures from `reqwest`
/// - `Json`: response bodies that do not match the expected type
/// - `Api`: non-2xx responses, with status and body text
///
/// ## Examples
///
/// ```ignore
/// let error_tokens = generate_error_type();
/// // Produces:
/// // #[derive(Debug, thiserror::Error)]
/// // pub enum ClientError {
/// //     #[error("HTTP request failed: {0}")]
/// //     Http(#[from] reqwest::Error),
/// //     ...
/// // }
/// ```
pub fn generate_error_type() -> TokenStream {
    let error_name = format_ident!("{}", ERROR_TYPE_NAME);

    quote! {
        /// Errors returned by client methods.
        #[derive(Debug, thiserror::Error)]
        pub enum #error_name {
            /// HTTP request failed (network error, timeout, etc.).
            #[error("HTTP request failed: {0}")]
            Http(#[from] reqwest::Error),

            /// Failed to serialize a parameter or deserialize a response.
            #[error("JSON (de)serialization failed: {0}")]
            Json(#[from] serde_json::Error),

            /// API returned an error response (non-2xx status code).
            #[error("API error (status {status}): {body}")]
            Api {
                /// HTTP status code from the response.
                status: u16,
                /// Response body text.
                body: String,
            },
        }
    }
}

/// Generates the `param_value` helper.
///
/// String values are inserted verbatim; every other value uses its JSON
/// text (`42`, `true`, `[1,2]`).
pub fn generate_param_helper() -> TokenStream {
    let error_name = format_ident!("{}", ERROR_TYPE_NAME);

    quote! {
        /// Renders a parameter value for a URL path or query string.
        fn param_value<T: Serialize>(value: &T) -> Result<String, #error_name> {
            match serde_json::to_value(value)? {
                serde_json::Value::String(s) => Ok(s),
                other => Ok(other.to_string()),
            }
        }
    }
}

/// Generates the `form_pairs` helper.
///
/// `reqwest`'s form encoder only accepts flat structs of scalars, so bodies
/// go through `serde_json::Value` first:
/// - each array item is sent as its own pair under the array's key
/// - nested arrays and objects are sent as JSON text
/// - a bare value (a transparent wrapper record) is sent under `data`
/// - `null` values are skipped
pub fn generate_form_helper() -> TokenStream {
    let error_name = format_ident!("{}", ERROR_TYPE_NAME);
    let wrapper_key = WRAPPER_FIELD;

    quote! {
        /// Flattens a form body into `application/x-www-form-urlencoded` pairs.
        fn form_pairs<T: Serialize>(value: &T) -> Result<Vec<(String, String)>, #error_name> {
            let fields: Vec<(String, serde_json::Value)> = match serde_json::to_value(value)? {
                serde_json::Value::Object(map) => map.into_iter().collect(),
                serde_json::Value::Null => Vec::new(),
                other => vec![(#wrapper_key.to_string(), other)],
            };

            let mut pairs = Vec::new();
            for (key, value) in fields {
                let items = match value {
                    serde_json::Value::Array(items) => items,
                    other => vec![other],
                };
                for item in items {
                    match item {
                        serde_json::Value::Null => {}
                        serde_json::Value::String(s) => pairs.push((key.clone(), s)),
                        other => pairs.push((key.clone(), other.to_string())),
                    }
                }
            }
            Ok(pairs)
        }
    }
}
