//! Schema Loader: turns a parsed document into the ordered operation list.

use swagger2sdk_define::{
    BodySpec, DocumentError, HttpMethod, OpenApiDocument, Operation, OperationDescriptor,
    ParameterSpec, PathItem,
};
use tracing::{debug, warn};

use crate::errors::{GeneratorError, Result};
use crate::naming::operation_name;
use crate::validation::validate_operation_names;

/// Path item keys that are not operations and are skipped silently.
const NON_OPERATION_KEYS: &[&str] = &[
    "parameters",
    "summary",
    "description",
    "servers",
    "$ref",
];

/// Loads every supported operation in document order.
///
/// Paths are visited in declaration order and, within a path, methods in
/// declaration order. Only `get`, `post`, `put`, `patch` and `delete` are
/// loaded; other methods are skipped with a warning.
///
/// ## Errors
///
/// - [`GeneratorError::Document`] when an operation object is malformed
/// - [`GeneratorError::DuplicateOperation`] when two operations would
///   generate the same method or record name
pub fn load_operations(doc: &OpenApiDocument) -> Result<Vec<OperationDescriptor>> {
    let mut operations = Vec::new();

    for (path, item) in &doc.paths {
        operations.extend(load_path(path, item)?);
    }

    validate_operation_names(&operations)?;
    Ok(operations)
}

/// Loads the operations declared under a single path.
pub fn load_path(path: &str, item: &PathItem) -> Result<Vec<OperationDescriptor>> {
    let mut operations = Vec::new();

    for (key, value) in item {
        let Ok(method) = key.parse::<HttpMethod>() else {
            if !NON_OPERATION_KEYS.contains(&key.as_str()) && !key.starts_with("x-") {
                warn!(path = %path, method = %key, "Skipping unsupported method");
            }
            continue;
        };

        let operation: Operation = serde_json::from_value(value.clone()).map_err(|source| {
            DocumentError::InvalidOperation {
                path: path.to_string(),
                method: key.clone(),
                source,
            }
        })?;

        let descriptor = describe(path, method, operation);
        debug!(
            operation = %descriptor.key(),
            name = %descriptor.name,
            parameters = descriptor.parameters.len(),
            has_body = descriptor.request_body.is_some(),
            "Loaded operation"
        );
        operations.push(descriptor);
    }

    Ok(operations)
}

fn describe(path: &str, method: HttpMethod, operation: Operation) -> OperationDescriptor {
    let parameters = operation
        .parameters
        .into_iter()
        .map(|p| ParameterSpec {
            name: p.name,
            location: p.location,
            schema: p.schema,
            required: p.required,
        })
        .collect();

    let request_body = operation
        .request_body
        .map(|body| BodySpec::from_content(body.required, &body.content));

    let responses = operation
        .responses
        .iter()
        .map(|(status, response)| (status.clone(), BodySpec::from_content(false, &response.content)))
        .collect();

    OperationDescriptor {
        name: operation_name(method, path),
        path: path.to_string(),
        method,
        parameters,
        request_body,
        responses,
    }
}

/// Resolves the base URL for the generated client.
///
/// A non-empty override wins; otherwise the document's first server URL is
/// used.
///
/// ## Errors
///
/// Returns [`GeneratorError::MissingBaseUrl`] when neither is available.
pub fn resolve_base_url(doc: &OpenApiDocument, override_url: Option<&str>) -> Result<String> {
    override_url
        .filter(|url| !url.is_empty())
        .or_else(|| doc.first_server_url())
        .map(str::to_string)
        .ok_or(GeneratorError::MissingBaseUrl)
}
