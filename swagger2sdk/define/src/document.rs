//! The subset of an OpenAPI document the generator reads.
//!
//! Only `servers`, `paths` and, per operation, `parameters`, `requestBody`
//! and `responses` are modelled. Every other key is accepted and ignored.
//! All maps keep document order so the generated output follows the order
//! in which paths, methods, media types and properties were declared.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading an API description.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("Failed to read API description '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the expected shape.
    #[error("Failed to parse YAML API description: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON or does not match the expected shape.
    #[error("Failed to parse JSON API description: {0}")]
    Json(#[from] serde_json::Error),

    /// An operation object under a path could not be decoded.
    #[error("Invalid operation '{method}' under path '{path}': {source}")]
    InvalidOperation {
        path: String,
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

/// OpenAPI document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// Declared servers. Only the first URL is ever used.
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Paths in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

/// A path item: every key under a path, in document order.
///
/// Method keys are decoded into [`Operation`] lazily, so unrelated keys
/// (`summary`, `parameters`, `x-*` extensions) never fail parsing.
pub type PathItem = IndexMap<String, serde_json::Value>;

/// A server entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Server URL.
    #[serde(default)]
    pub url: String,
}

/// A single operation under a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Declared parameters in document order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Request body, if any.
    #[serde(default, rename = "requestBody")]
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// Where a parameter is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Query string parameter.
    #[default]
    Query,
    /// URL path parameter.
    Path,
    /// HTTP header.
    Header,
    /// Cookie.
    Cookie,
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, used verbatim as the query key.
    pub name: String,
    /// Parameter location.
    #[serde(default, rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter is required.
    #[serde(default)]
    pub required: bool,
    /// Parameter schema.
    #[serde(default)]
    pub schema: Option<Schema>,
}

/// A request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Whether the body is required.
    #[serde(default)]
    pub required: bool,
    /// Content keyed by media type, in document order.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Content keyed by media type, in document order.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Media type content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema for this media type.
    #[serde(default)]
    pub schema: Option<Schema>,
}

/// JSON Schema fragment.
///
/// `schema_type` is kept as the raw declared string. Deciding whether it is
/// a supported primitive is the type synthesizer's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Declared `type`, if any.
    #[serde(default, rename = "type")]
    pub schema_type: Option<String>,
    /// Object properties in document order.
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,
    /// Names of required properties.
    #[serde(default)]
    pub required: Vec<String>,
    /// Array item schema.
    #[serde(default)]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// Creates a schema with only a `type`.
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Default::default()
        }
    }

    /// Whether the declared type is `object`.
    pub fn is_object(&self) -> bool {
        self.schema_type.as_deref() == Some("object")
    }
}

impl OpenApiDocument {
    /// Parses a document from JSON or YAML text.
    ///
    /// Text whose first non-whitespace character is `{` is parsed as JSON,
    /// anything else as YAML.
    ///
    /// ## Examples
    ///
    /// ```
    /// use swagger2sdk_define::OpenApiDocument;
    ///
    /// let doc = OpenApiDocument::from_str(r#"
    /// servers:
    ///   - url: https://api.example.com
    /// paths:
    ///   /users:
    ///     get:
    ///       responses: {}
    /// "#).unwrap();
    ///
    /// assert_eq!(doc.first_server_url(), Some("https://api.example.com"));
    /// assert_eq!(doc.paths.len(), 1);
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`DocumentError::Json`] or [`DocumentError::Yaml`] when the
    /// text is malformed or does not match the document shape.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self, DocumentError> {
        if input.trim_start().starts_with('{') {
            Ok(serde_json::from_str(input)?)
        } else {
            Ok(serde_yaml::from_str(input)?)
        }
    }

    /// Reads and parses a document from disk.
    ///
    /// ## Errors
    ///
    /// Returns [`DocumentError::Read`] when the file cannot be read, or a
    /// parse error as for [`OpenApiDocument::from_str`].
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let input = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str(&input)
    }

    /// The first declared server URL, if non-empty.
    pub fn first_server_url(&self) -> Option<&str> {
        self.servers
            .first()
            .map(|server| server.url.as_str())
            .filter(|url| !url.is_empty())
    }
}
