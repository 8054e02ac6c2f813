//! Loaded operation model.
//!
//! This module provides the normalized view of one operation that every
//! synthesizer consumes:
//!
//! - [`HttpMethod`] - The five methods the generator understands
//! - [`OperationDescriptor`] - One (path, method) pair with its inputs and outputs
//! - [`ParameterSpec`] - A declared parameter
//! - [`BodySpec`] / [`MediaSpec`] - Request or response content by media type

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::content_type::ContentTypeClass;
use crate::document::{MediaType, ParameterLocation, Schema};

/// HTTP methods the generator turns into client methods.
///
/// Any other key under a path item (`head`, `options`, `parameters`, ...) is
/// skipped by the loader.
///
/// ## Examples
///
/// Parse from a path item key:
///
/// ```
/// use std::str::FromStr;
/// use swagger2sdk_define::HttpMethod;
///
/// let method = HttpMethod::from_str("get").unwrap();
/// assert_eq!(method, HttpMethod::Get);
/// assert_eq!(method.to_string(), "GET");
/// assert_eq!(method.as_lower(), "get");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HttpMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP PATCH
    Patch,
    /// HTTP DELETE
    Delete,
}

impl HttpMethod {
    /// The lower-case name, as written in a path item.
    pub fn as_lower(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }
}

/// A declared operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Name as declared. Also the query key on the wire.
    pub name: String,
    /// Declared location.
    pub location: ParameterLocation,
    /// Declared schema.
    pub schema: Option<Schema>,
    /// Whether the parameter is required.
    pub required: bool,
}

impl ParameterSpec {
    /// The raw declared schema type, if any.
    pub fn schema_type(&self) -> Option<&str> {
        self.schema.as_ref().and_then(|s| s.schema_type.as_deref())
    }
}

/// One media type entry of a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSpec {
    /// The media type as declared.
    pub content_type: String,
    /// Schema, if declared.
    pub schema: Option<Schema>,
}

impl MediaSpec {
    /// Classification of `content_type`.
    pub fn class(&self) -> ContentTypeClass {
        ContentTypeClass::classify(&self.content_type)
    }
}

/// Request or response content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    /// Whether the body is required. Always `false` for responses.
    pub required: bool,
    /// Media types in document order.
    pub content: Vec<MediaSpec>,
}

impl BodySpec {
    /// Builds a body from a document content map, keeping its order.
    pub fn from_content(required: bool, content: &IndexMap<String, MediaType>) -> Self {
        Self {
            required,
            content: content
                .iter()
                .map(|(content_type, media)| MediaSpec {
                    content_type: content_type.clone(),
                    schema: media.schema.clone(),
                })
                .collect(),
        }
    }

    /// The first declared media type.
    pub fn primary(&self) -> Option<&MediaSpec> {
        self.content.first()
    }

    /// The first media type of the given class.
    pub fn media(&self, class: ContentTypeClass) -> Option<&MediaSpec> {
        self.content.iter().find(|m| m.class() == class)
    }
}

/// One operation of the API: a (path, method) pair.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_define::{HttpMethod, OperationDescriptor};
///
/// let op = OperationDescriptor::new("/users/{id}", HttpMethod::Get, "get_users_id");
/// assert_eq!(op.key(), "GET /users/{id}");
/// assert!(op.success_response().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Path template, e.g. `/users/{id}`.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Operation name derived from method and path.
    pub name: String,
    /// Declared parameters in document order.
    pub parameters: Vec<ParameterSpec>,
    /// Request body, if declared.
    pub request_body: Option<BodySpec>,
    /// Responses keyed by status code.
    pub responses: IndexMap<String, BodySpec>,
}

impl OperationDescriptor {
    /// Creates an operation with no parameters, body or responses.
    pub fn new(path: impl Into<String>, method: HttpMethod, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            name: name.into(),
            parameters: Vec::new(),
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    /// The `"200"` response, the only one that shapes the return type.
    pub fn success_response(&self) -> Option<&BodySpec> {
        self.responses.get("200")
    }

    /// A human-readable identifier such as `GET /users/{id}`.
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}
