//! Language-neutral intermediate representation of a generated client.
//!
//! The synthesizers in [`crate::synth`] decide *what* to generate and record
//! it here; the emitters in [`crate::emit`] decide *how* it is spelled in a
//! target language. Nothing in this module knows about Rust or Python syntax.
//!
//! ```text
//! ClientUnit
//! ├── imports      [HttpClient, RecordBase, Optional, Collections]
//! ├── records      RecordDef*   (first-seen order across operations)
//! └── client       ClientDef
//!     ├── auth / base_url / constructor fields
//!     └── methods  CallableUnit*   (load order)
//! ```

use std::fmt;

use strum::Display;
use swagger2sdk_define::{AuthStrategy, HttpMethod};

/// Field types of synthesized records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `string`
    String,
    /// `number`
    Float,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
    /// `array` of the item type.
    List(Box<FieldType>),
    /// `object`, or a schema with no declared type.
    Map,
    /// Array items whose type is not declared.
    Any,
}

/// The role a record plays for its operation. Also its name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RecordRole {
    RequestParameters,
    RequestBody,
    Response,
}

/// One field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    /// Name on the wire (property or parameter name as declared).
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
}

/// A synthesized record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    /// `{RecordBase}{Role}`, e.g. `GetItemsIdResponse`.
    pub name: String,
    pub role: RecordRole,
    /// Operation key the record was derived from, e.g. `GET /items/{id}`.
    pub operation: String,
    /// Fields in declaration order. Never empty.
    pub fields: Vec<RecordField>,
    /// The record is a single `data` field standing in for a non-object
    /// payload. It serializes as the bare value.
    pub wrapper: bool,
}

/// Records synthesized for one operation. Absent records were suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationRecords {
    pub parameters: Option<RecordDef>,
    pub body: Option<RecordDef>,
    pub response: Option<RecordDef>,
}

impl OperationRecords {
    /// Present records in emission order: parameters, body, response.
    pub fn iter(&self) -> impl Iterator<Item = &RecordDef> {
        [&self.parameters, &self.body, &self.response]
            .into_iter()
            .flatten()
    }
}

/// A piece of the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Copied into the URL unchanged.
    Literal(String),
    /// Replaced at call time by the named parameter's value.
    Param(String),
}

/// A parameter serialized into the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBinding {
    /// Query key and parameter record field (wire) name.
    pub name: String,
    /// Optional bindings are skipped when absent.
    pub required: bool,
}

/// How a request body is put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyEncoding {
    /// Serialized as JSON.
    Json,
    /// Flattened to `application/x-www-form-urlencoded` pairs.
    Form,
    /// Passed through unchanged with its declared content type.
    Raw { content_type: String },
}

/// How a 200 response body is turned into the return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResponseDecoding {
    /// Parsed as JSON into the return type.
    Json,
    /// Returned as text.
    Text,
    /// The raw response handle is returned unchanged.
    Raw,
}

/// A type referenced by a method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A synthesized record by name.
    Record(String),
    /// Generic JSON value or mapping.
    Untyped,
    /// Plain text.
    Text,
    /// The raw HTTP response handle.
    RawResponse,
}

/// The request body argument of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyArg {
    pub encoding: BodyEncoding,
    pub type_ref: TypeRef,
}

/// One generated method, fully decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableUnit {
    /// Method identifier, e.g. `get_items_id`.
    pub name: String,
    /// Operation key for docs and errors, e.g. `GET /items/{id}`.
    pub operation: String,
    pub method: HttpMethod,
    /// Path template split into literal and parameter segments.
    pub path: Vec<PathSegment>,
    /// Parameter record type. `None` when no parameters are declared.
    pub params: Option<TypeRef>,
    /// Query pairs in declaration order.
    pub query: Vec<QueryBinding>,
    pub body: Option<BodyArg>,
    pub response: TypeRef,
    pub decoding: ResponseDecoding,
    pub auth: AuthStrategy,
}

impl CallableUnit {
    /// Whether any path segment is substituted from the parameters.
    pub fn has_path_params(&self) -> bool {
        self.path.iter().any(|s| matches!(s, PathSegment::Param(_)))
    }
}

/// Facilities every generated file imports, in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Import {
    /// The HTTP client library.
    HttpClient,
    /// The typed record base (serde derives, pydantic `BaseModel`).
    RecordBase,
    /// The optional-value facility.
    Optional,
    /// Collection types (maps, lists).
    Collections,
}

impl Import {
    /// The fixed per-run import list.
    pub const ALL: [Import; 4] = [
        Import::HttpClient,
        Import::RecordBase,
        Import::Optional,
        Import::Collections,
    ];
}

/// The client type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDef {
    pub name: String,
    pub auth: AuthStrategy,
    /// Resolved base URL, exposed as a constant on the client.
    pub base_url: String,
    /// Constructor fields after `base_url`, as implied by `auth`.
    pub credential_fields: Vec<String>,
    pub methods: Vec<CallableUnit>,
}

/// The terminal artifact handed to an emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientUnit {
    pub imports: Vec<Import>,
    pub records: Vec<RecordDef>,
    pub client: ClientDef,
}

impl ClientUnit {
    pub fn record(&self, name: &str) -> Option<&RecordDef> {
        self.records.iter().find(|r| r.name == name)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Float => f.write_str("number"),
            FieldType::Integer => f.write_str("integer"),
            FieldType::Boolean => f.write_str("boolean"),
            FieldType::List(item) => write!(f, "array<{}>", item),
            FieldType::Map => f.write_str("object"),
            FieldType::Any => f.write_str("any"),
        }
    }
}
