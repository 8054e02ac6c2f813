//! Name validation for synthesized output.
//!
//! Generated names are derived, never chosen, so two inputs can collide.
//! Collisions are rejected rather than silently renamed or overwritten.
//!
//! ## Validation Checks
//!
//! - **Duplicate operations**: two operations whose method names or record
//!   base names coincide (`/user-list` and `/user_list` both give
//!   `get_user_list`), or whose method name equals another operation's
//!   `_with_headers` method (`GET /users/with-headers` and `GET /users`)
//! - **Naming collisions**: a record named like the client type or the
//!   generated error type
//! - **Duplicate fields**: two properties of one record mapping to the same
//!   target identifier

use std::collections::HashMap;

use swagger2sdk_define::OperationDescriptor;

use crate::errors::{GeneratorError, Result};
use crate::ir::RecordDef;
use crate::naming::{method_name, record_base_name};

/// Name of the error type every generated client declares.
pub const ERROR_TYPE_NAME: &str = "ClientError";

/// Suffix of the method variant that takes extra request headers.
pub const WITH_HEADERS_SUFFIX: &str = "_with_headers";

/// Rejects operations that would generate the same method or record names.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_define::{HttpMethod, OperationDescriptor};
/// use swagger2sdk_gen::validation::validate_operation_names;
///
/// let ops = vec![
///     OperationDescriptor::new("/user-list", HttpMethod::Get, "get_user-list"),
///     OperationDescriptor::new("/user_list", HttpMethod::Get, "get_user_list"),
/// ];
/// assert!(validate_operation_names(&ops).is_err());
/// ```
///
/// ## Errors
///
/// Returns [`GeneratorError::DuplicateOperation`] naming both operations.
pub fn validate_operation_names(operations: &[OperationDescriptor]) -> Result<()> {
    let mut methods: HashMap<String, &OperationDescriptor> = HashMap::new();
    let mut records: HashMap<String, &OperationDescriptor> = HashMap::new();

    for op in operations {
        let method = method_name(&op.name);
        if let Some(first) = methods.insert(method.clone(), op) {
            return Err(duplicate(method, first, op));
        }

        let base = record_base_name(&op.name);
        if let Some(first) = records.insert(base.clone(), op) {
            return Err(duplicate(base, first, op));
        }
    }

    for op in operations {
        let variant = format!("{}{}", method_name(&op.name), WITH_HEADERS_SUFFIX);
        if let Some(other) = methods.get(&variant) {
            return Err(duplicate(variant, op, other));
        }
    }

    Ok(())
}

fn duplicate(
    name: String,
    first: &OperationDescriptor,
    second: &OperationDescriptor,
) -> GeneratorError {
    GeneratorError::DuplicateOperation {
        name,
        first: first.key(),
        second: second.key(),
    }
}

/// Rejects records whose names collide with the client or error type.
///
/// ## Errors
///
/// Returns [`GeneratorError::NamingCollision`] for the first offending record.
pub fn validate_record_names(records: &[RecordDef], client_name: &str) -> Result<()> {
    for record in records {
        if record.name == client_name {
            return Err(GeneratorError::NamingCollision {
                name: record.name.clone(),
                reason: "record name equals the client type name; choose a different SDK name"
                    .to_string(),
            });
        }
        if record.name == ERROR_TYPE_NAME {
            return Err(GeneratorError::NamingCollision {
                name: record.name.clone(),
                reason: format!("record name equals the generated error type '{}'", ERROR_TYPE_NAME),
            });
        }
    }

    if client_name == ERROR_TYPE_NAME {
        return Err(GeneratorError::NamingCollision {
            name: client_name.to_string(),
            reason: format!("SDK name equals the generated error type '{}'", ERROR_TYPE_NAME),
        });
    }

    Ok(())
}

/// Rejects a record whose fields map to the same identifier under `ident`.
///
/// ## Errors
///
/// Returns [`GeneratorError::DuplicateField`] with the colliding identifier.
pub fn validate_record_fields(record: &RecordDef, ident: impl Fn(&str) -> String) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for field in &record.fields {
        let id = ident(&field.name);
        if seen.insert(id.clone(), &field.name).is_some() {
            return Err(GeneratorError::DuplicateField {
                record: record.name.clone(),
                field: id,
            });
        }
    }

    Ok(())
}
