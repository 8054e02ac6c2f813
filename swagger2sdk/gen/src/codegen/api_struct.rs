//! Client struct generation.
//!
//! Generates the client type that owns the HTTP client handle, the base URL
//! and the credentials implied by the auth strategy.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::emit::USER_AGENT;
use crate::ir::ClientDef;

/// Generates the client struct and its constructor.
///
/// Creates a struct with:
/// - `BASE_URL` constant holding the resolved base URL
/// - `USER_AGENT` constant sent with every request
/// - `new()` taking the base URL followed by the credential fields
///
/// ## Examples
///
/// For a client named "ItemsApi" with bearer auth:
/// ```ignore
/// /// ItemsApi client.
/// #[derive(Clone)]
/// pub struct ItemsApi {
///     client: Client,
///     base_url: String,
///     token: String,
/// }
///
/// impl ItemsApi {
///     pub const BASE_URL: &'static str = "https://shop.example.com/api";
///     pub const USER_AGENT: &'static str = "swagger2sdk/1.0";
///
///     pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
///         Self {
///             client: Client::new(),
///             base_url: base_url.into(),
///             token: token.into(),
///         }
///     }
/// }
/// ```
pub fn generate_client_struct(client: &ClientDef) -> TokenStream {
    let struct_name = format_ident!("{}", client.name);
    let base_url = &client.base_url;
    let user_agent = USER_AGENT;
    let description = format!(" {} client.", client.name);

    let credentials: Vec<_> = client
        .credential_fields
        .iter()
        .map(|f| format_ident!("{}", f))
        .collect();

    quote! {
        #[doc = #description]
        #[derive(Clone)]
        pub struct #struct_name {
            client: Client,
            base_url: String,
            #(#credentials: String,)*
        }

        impl #struct_name {
            /// Base URL declared for the API.
            pub const BASE_URL: &'static str = #base_url;

            /// Default `User-Agent` header.
            pub const USER_AGENT: &'static str = #user_agent;

            /// Creates a client sending requests to `base_url`.
            ///
            /// ## Examples
            ///
            /// ```ignore
            /// let client = Api::new(Api::BASE_URL);
            /// ```
            pub fn new(base_url: impl Into<String>, #(#credentials: impl Into<String>),*) -> Self {
                Self {
                    client: Client::new(),
                    base_url: base_url.into(),
                    #(#credentials: #credentials.into(),)*
                }
            }
        }
    }
}
