//! Swagger2sdk Definition Library
//!
//! This crate provides the input side of the SDK generator: the subset of an
//! OpenAPI document the generator reads, and the normalized operation model
//! consumed by the `swagger2sdk-gen` synthesizers.
//!
//! ## Core Types
//!
//! ### Document Types
//!
//! - [`OpenApiDocument`] - Parsed document root (`servers`, `paths`)
//! - [`Operation`] - One operation object under a path
//! - [`Parameter`] / [`ParameterLocation`] - Declared parameters
//! - [`RequestBody`], [`Response`], [`MediaType`] - Content by media type
//! - [`Schema`] - JSON Schema fragment with a raw `type`
//!
//! ### Operation Types
//!
//! - [`OperationDescriptor`] - A loaded (path, method) pair
//! - [`HttpMethod`] - GET, POST, PUT, PATCH, DELETE
//! - [`ParameterSpec`], [`BodySpec`], [`MediaSpec`] - Normalized inputs and outputs
//!
//! ### Generation Options
//!
//! - [`AuthStrategy`] - None, Basic or Bearer
//! - [`ContentTypeClass`] - Json, Form, Text or Other
//!
//! ## Examples
//!
//! ```
//! use swagger2sdk_define::{OpenApiDocument, ContentTypeClass};
//!
//! let doc = OpenApiDocument::from_str(r#"{
//!     "servers": [{"url": "https://api.example.com"}],
//!     "paths": {"/health": {"get": {"responses": {"200": {"content": {"text/plain": {}}}}}}}
//! }"#).unwrap();
//!
//! assert_eq!(doc.first_server_url(), Some("https://api.example.com"));
//! assert_eq!(ContentTypeClass::classify("text/plain"), ContentTypeClass::Text);
//! ```

pub mod auth;
pub mod content_type;
pub mod document;
pub mod operation;

// Re-export main types at crate root
pub use auth::AuthStrategy;
pub use content_type::ContentTypeClass;
pub use document::{
    DocumentError, MediaType, OpenApiDocument, Operation, Parameter, ParameterLocation, PathItem,
    RequestBody, Response, Schema, Server,
};
pub use operation::{BodySpec, HttpMethod, MediaSpec, OperationDescriptor, ParameterSpec};
