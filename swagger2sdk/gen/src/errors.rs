//! Error types for the SDK generator.

use swagger2sdk_define::DocumentError;
use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant is fatal: generation stops at the first error and no
/// partial output is written.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to read or parse the API description
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Neither a base URL override nor a declared server URL is available
    #[error(
        "No base URL available: the API description declares no servers and no --base-url override was given"
    )]
    MissingBaseUrl,

    /// A schema declares a `type` outside the supported primitive table
    #[error("Unknown schema type '{schema_type}' for field '{field}' in operation '{operation}'")]
    UnknownSchemaType {
        /// The operation whose schema is invalid (e.g. `GET /users`).
        operation: String,
        /// The field or parameter carrying the type.
        field: String,
        /// The unsupported type as declared.
        schema_type: String,
    },

    /// Two operations synthesize the same method or record name.
    #[error("Duplicate operation name '{name}': '{first}' and '{second}' both map to it")]
    DuplicateOperation {
        /// The colliding synthesized name.
        name: String,
        /// The operation that claimed the name first.
        first: String,
        /// The operation that collided with it.
        second: String,
    },

    /// Two fields of one record map to the same identifier.
    #[error("Duplicate field '{field}' in record '{record}'")]
    DuplicateField {
        /// The record holding both fields.
        record: String,
        /// The colliding field identifier.
        field: String,
    },

    /// A synthesized record name collides with a generated item.
    #[error("Naming collision for '{name}': {reason}")]
    NamingCollision {
        /// The colliding name.
        name: String,
        /// What it collides with.
        reason: String,
    },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Convenience alias used throughout the generator.
pub type Result<T> = std::result::Result<T, GeneratorError>;
