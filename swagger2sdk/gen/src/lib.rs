//! swagger2sdk generator library.
//!
//! This crate turns an OpenAPI document into the source of a typed API
//! client. The generated client contains:
//!
//! - One record type per operation's parameters, request body and 200
//!   response, when they have fields
//! - A client type holding the base URL and credentials
//! - One method per operation that builds the URL, attaches credentials and
//!   the body, sends the request and decodes the response
//!
//! ## Modules
//!
//! - [`loader`] - Schema Loader: operations and base URL from a document
//! - [`synth`] - Type Synthesizer, Endpoint Function Synthesizer, Client Assembler
//! - [`ir`] - The language-neutral intermediate representation
//! - [`emit`] - Source emitters (Rust, Python)
//! - [`codegen`] - Token generators behind the Rust emitter
//! - [`output`] - Pipeline entry points and atomic file writing
//! - [`cargo_gen`] - Cargo.toml generation for a generated Rust client
//! - [`config`] - Generation run configuration
//! - [`naming`] - Identifier derivation
//! - [`parser`] - Path template parsing
//! - [`validation`] - Name collision checks
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use swagger2sdk_define::{AuthStrategy, OpenApiDocument};
//! use swagger2sdk_gen::config::GeneratorConfig;
//! use swagger2sdk_gen::output::generate;
//!
//! let doc = OpenApiDocument::from_str(r#"
//! servers:
//!   - url: https://api.example.com
//! paths:
//!   /health:
//!     get:
//!       responses:
//!         "200":
//!           content:
//!             text/plain: {}
//! "#).unwrap();
//!
//! let config = GeneratorConfig::new("HealthApi").with_auth(AuthStrategy::Bearer);
//! let code = generate(&doc, &config).unwrap();
//!
//! assert!(code.contains("pub struct HealthApi"));
//! assert!(code.contains("pub async fn get_health(&self) -> Result<String, ClientError>"));
//! ```
//!
//! ## Generated Code Structure
//!
//! For a client named `ItemsApi` with one operation `GET /items/{id}`:
//!
//! ```text
//! pub enum ClientError { Http(..), Json(..), Api { status, body } }
//!
//! pub struct GetItemsIdRequestParameters { pub id: String }
//! pub struct GetItemsIdResponse { pub name: String, pub price: Option<f64> }
//!
//! pub struct ItemsApi { client: Client, base_url: String }
//!
//! impl ItemsApi {
//!     pub const BASE_URL: &'static str = "...";
//!     pub const USER_AGENT: &'static str = "swagger2sdk/1.0";
//!     pub fn new(base_url: impl Into<String>) -> Self;
//!     pub async fn get_items_id(&self, request_parameters: GetItemsIdRequestParameters)
//!         -> Result<GetItemsIdResponse, ClientError>;
//!     pub async fn get_items_id_with_headers(
//!         &self,
//!         request_parameters: GetItemsIdRequestParameters,
//!         headers: HeaderMap,
//!     ) -> Result<GetItemsIdResponse, ClientError>;
//! }
//! ```

pub mod cargo_gen;
pub mod codegen;
pub mod config;
pub mod emit;
pub mod errors;
pub mod ir;
pub mod loader;
pub mod naming;
pub mod output;
pub mod parser;
pub mod synth;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
