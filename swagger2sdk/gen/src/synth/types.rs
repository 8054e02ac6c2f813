//! Type Synthesizer: derives the records of one operation.
//!
//! Primitive mapping:
//!
//! | schema `type` | [`FieldType`] |
//! |---|---|
//! | `string` | `String` |
//! | `number` | `Float` |
//! | `integer` | `Integer` |
//! | `boolean` | `Boolean` |
//! | `array` | `List(items)`, `List(Any)` without `items.type` |
//! | `object` / absent | `Map` |
//!
//! Any other declared type is an error.

use swagger2sdk_define::{ContentTypeClass, OperationDescriptor, ParameterLocation, Schema};
use tracing::debug;

use crate::errors::{GeneratorError, Result};
use crate::ir::{FieldType, OperationRecords, RecordDef, RecordField, RecordRole};
use crate::naming::record_base_name;
use crate::parser::extract_path_params;
use crate::validation::validate_record_fields;

/// Field name used when a non-object payload is wrapped in a record.
pub const WRAPPER_FIELD: &str = "data";

/// Maps a schema to a field type.
///
/// `operation` and `field` only label the error.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_define::Schema;
/// use swagger2sdk_gen::ir::FieldType;
/// use swagger2sdk_gen::synth::types::map_schema_type;
///
/// let ty = map_schema_type(Some(&Schema::of_type("number")), "GET /a", "price").unwrap();
/// assert_eq!(ty, FieldType::Float);
///
/// assert_eq!(map_schema_type(None, "GET /a", "meta").unwrap(), FieldType::Map);
/// assert!(map_schema_type(Some(&Schema::of_type("date")), "GET /a", "when").is_err());
/// ```
///
/// ## Errors
///
/// Returns [`GeneratorError::UnknownSchemaType`] for a declared type outside
/// the table, including inside array items.
pub fn map_schema_type(schema: Option<&Schema>, operation: &str, field: &str) -> Result<FieldType> {
    let Some(schema) = schema else {
        return Ok(FieldType::Map);
    };
    let Some(schema_type) = schema.schema_type.as_deref() else {
        return Ok(FieldType::Map);
    };

    match schema_type {
        "string" => Ok(FieldType::String),
        "number" => Ok(FieldType::Float),
        "integer" => Ok(FieldType::Integer),
        "boolean" => Ok(FieldType::Boolean),
        "object" => Ok(FieldType::Map),
        "array" => {
            let item = match schema.items.as_deref() {
                Some(items) if items.schema_type.is_some() => {
                    map_schema_type(Some(items), operation, field)?
                }
                _ => FieldType::Any,
            };
            Ok(FieldType::List(Box::new(item)))
        }
        other => Err(GeneratorError::UnknownSchemaType {
            operation: operation.to_string(),
            field: field.to_string(),
            schema_type: other.to_string(),
        }),
    }
}

/// Synthesizes the parameter, body and response records of an operation.
///
/// Records with zero fields are suppressed and come back as `None`.
///
/// ## Errors
///
/// - [`GeneratorError::UnknownSchemaType`] for unsupported schema types
/// - [`GeneratorError::DuplicateField`] when two parameters share a name
pub fn synthesize_records(op: &OperationDescriptor) -> Result<OperationRecords> {
    let base = record_base_name(&op.name);
    let key = op.key();

    let records = OperationRecords {
        parameters: parameter_record(op, &base, &key)?,
        body: body_record(op, &base, &key)?,
        response: response_record(op, &base, &key)?,
    };

    for record in records.iter() {
        validate_record_fields(record, str::to_string)?;
        debug!(
            operation = %key,
            record = %record.name,
            fields = record.fields.len(),
            wrapper = record.wrapper,
            "Synthesized record"
        );
    }

    Ok(records)
}

/// Path parameters substituted into the template are always required, so
/// a placeholder can never be left empty.
fn parameter_record(op: &OperationDescriptor, base: &str, key: &str) -> Result<Option<RecordDef>> {
    let placeholders = extract_path_params(&op.path);
    let fields = op
        .parameters
        .iter()
        .map(|param| {
            let substituted = param.location == ParameterLocation::Path
                && placeholders.contains(&param.name.as_str());
            Ok(RecordField {
                name: param.name.clone(),
                field_type: map_schema_type(param.schema.as_ref(), key, &param.name)?,
                required: param.required || substituted,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(make_record(base, RecordRole::RequestParameters, key, fields, false))
}

fn body_record(op: &OperationDescriptor, base: &str, key: &str) -> Result<Option<RecordDef>> {
    let Some(body) = &op.request_body else {
        return Ok(None);
    };
    let Some(media) = body.primary() else {
        return Ok(None);
    };
    if !media.class().is_structured() {
        return Ok(None);
    }
    let Some(schema) = &media.schema else {
        return Ok(None);
    };

    payload_record(schema, base, RecordRole::RequestBody, body.required, key)
}

fn response_record(op: &OperationDescriptor, base: &str, key: &str) -> Result<Option<RecordDef>> {
    let Some(schema) = op
        .success_response()
        .and_then(|r| r.media(ContentTypeClass::Json))
        .and_then(|m| m.schema.as_ref())
    else {
        return Ok(None);
    };

    payload_record(schema, base, RecordRole::Response, true, key)
}

/// Builds a body or response record.
///
/// Object schemas (and schemas without a declared type) expand to one field
/// per property. Anything else becomes a single `data` wrapper field.
fn payload_record(
    schema: &Schema,
    base: &str,
    role: RecordRole,
    data_required: bool,
    key: &str,
) -> Result<Option<RecordDef>> {
    if schema.schema_type.is_none() || schema.is_object() {
        let fields = schema
            .properties
            .iter()
            .map(|(name, prop)| {
                Ok(RecordField {
                    name: name.clone(),
                    field_type: map_schema_type(Some(prop), key, name)?,
                    required: schema.required.contains(name),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        return Ok(make_record(base, role, key, fields, false));
    }

    let field = RecordField {
        name: WRAPPER_FIELD.to_string(),
        field_type: map_schema_type(Some(schema), key, WRAPPER_FIELD)?,
        required: data_required,
    };
    Ok(make_record(base, role, key, vec![field], true))
}

fn make_record(
    base: &str,
    role: RecordRole,
    operation: &str,
    fields: Vec<RecordField>,
    wrapper: bool,
) -> Option<RecordDef> {
    if fields.is_empty() {
        return None;
    }
    Some(RecordDef {
        name: format!("{}{}", base, role),
        role,
        operation: operation.to_string(),
        fields,
        wrapper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_operations;
    use crate::test_utils::{ITEMS_SPEC, parse};

    fn records_for(yaml: &str) -> OperationRecords {
        let doc = parse(yaml);
        let ops = load_operations(&doc).unwrap();
        synthesize_records(&ops[0]).unwrap()
    }

    fn field<'a>(record: &'a RecordDef, name: &str) -> &'a RecordField {
        record.fields.iter().find(|f| f.name == name).unwrap()
    }

    #[test]
    fn items_scenario_records() {
        let records = records_for(ITEMS_SPEC);

        let params = records.parameters.unwrap();
        assert_eq!(params.name, "GetItemsIdRequestParameters");
        assert_eq!(
            params.fields,
            vec![RecordField {
                name: "id".to_string(),
                field_type: FieldType::String,
                required: true,
            }]
        );

        let response = records.response.unwrap();
        assert_eq!(response.name, "GetItemsIdResponse");
        assert!(!response.wrapper);
        assert_eq!(field(&response, "name").field_type, FieldType::String);
        assert!(field(&response, "name").required);
        assert_eq!(field(&response, "price").field_type, FieldType::Float);
        assert!(!field(&response, "price").required);

        assert!(records.body.is_none());
    }

    #[test]
    fn operation_without_inputs_or_outputs_has_no_records() {
        let records = records_for("paths:\n  /ping:\n    get: {}\n");
        assert_eq!(records, OperationRecords::default());
    }

    #[test]
    fn array_response_wraps_list_of_item_type() {
        let records = records_for(
            r#"
paths:
  /tags:
    get:
      responses:
        "200":
          content:
            application/json:
              schema:
                type: array
                items:
                  type: integer
"#,
        );
        let response = records.response.unwrap();
        assert!(response.wrapper);
        assert_eq!(response.fields.len(), 1);
        assert_eq!(response.fields[0].name, "data");
        assert_eq!(
            response.fields[0].field_type,
            FieldType::List(Box::new(FieldType::Integer))
        );
        assert!(response.fields[0].required);
    }

    #[test]
    fn array_without_items_type_is_list_of_any() {
        let ty = map_schema_type(Some(&Schema::of_type("array")), "GET /a", "xs").unwrap();
        assert_eq!(ty, FieldType::List(Box::new(FieldType::Any)));
    }

    #[test]
    fn nested_array_items_are_mapped() {
        let mut inner = Schema::of_type("array");
        inner.items = Some(Box::new(Schema::of_type("string")));
        let mut outer = Schema::of_type("array");
        outer.items = Some(Box::new(inner));

        let ty = map_schema_type(Some(&outer), "GET /a", "grid").unwrap();
        assert_eq!(
            ty,
            FieldType::List(Box::new(FieldType::List(Box::new(FieldType::String))))
        );
    }

    #[test]
    fn primitive_response_wraps_single_data_field() {
        let records = records_for(
            r#"
paths:
  /count:
    get:
      responses:
        "200":
          content:
            application/json:
              schema:
                type: integer
"#,
        );
        let response = records.response.unwrap();
        assert!(response.wrapper);
        assert_eq!(response.fields[0].field_type, FieldType::Integer);
    }

    #[test]
    fn non_json_response_produces_no_record() {
        let records = records_for(
            r#"
paths:
  /health:
    get:
      responses:
        "200":
          content:
            text/plain:
              schema:
                type: string
"#,
        );
        assert!(records.response.is_none());
    }

    #[test]
    fn only_the_200_response_is_inspected() {
        let records = records_for(
            r#"
paths:
  /jobs:
    post:
      responses:
        "201":
          content:
            application/json:
              schema:
                type: object
                properties:
                  id:
                    type: string
"#,
        );
        assert!(records.response.is_none());
    }

    #[test]
    fn object_body_expands_properties() {
        let records = records_for(
            r#"
paths:
  /users:
    post:
      requestBody:
        required: true
        content:
          application/json:
            schema:
              type: object
              required: [email]
              properties:
                email:
                  type: string
                tags:
                  type: array
                  items:
                    type: string
                active:
                  type: boolean
"#,
        );
        let body = records.body.unwrap();
        assert_eq!(body.name, "PostUsersRequestBody");
        let names: Vec<&str> = body.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["email", "tags", "active"]);
        assert!(field(&body, "email").required);
        assert!(!field(&body, "tags").required);
        assert_eq!(field(&body, "active").field_type, FieldType::Boolean);
    }

    #[test]
    fn non_object_body_collapses_to_data_with_body_required_flag() {
        let records = records_for(
            r#"
paths:
  /users/anonymous:
    post:
      requestBody:
        required: false
        content:
          application/x-www-form-urlencoded:
            schema:
              type: string
"#,
        );
        let body = records.body.unwrap();
        assert_eq!(body.name, "PostUsersAnonymousRequestBody");
        assert!(body.wrapper);
        assert_eq!(body.fields[0].name, "data");
        assert!(!body.fields[0].required);
    }

    #[test]
    fn raw_primary_content_type_produces_no_body_record() {
        let records = records_for(
            r#"
paths:
  /upload:
    put:
      requestBody:
        content:
          application/octet-stream:
            schema:
              type: string
          application/json:
            schema:
              type: object
              properties:
                name:
                  type: string
"#,
        );
        assert!(records.body.is_none());
    }

    #[test]
    fn object_with_no_properties_is_suppressed() {
        let records = records_for(
            r#"
paths:
  /items:
    post:
      requestBody:
        content:
          application/json:
            schema:
              type: object
"#,
        );
        assert!(records.body.is_none());
    }

    #[test]
    fn parameter_without_schema_maps_to_map() {
        let records = records_for(
            r#"
paths:
  /search:
    get:
      parameters:
        - name: filter
          in: query
"#,
        );
        let params = records.parameters.unwrap();
        assert_eq!(params.fields[0].field_type, FieldType::Map);
        assert!(!params.fields[0].required);
    }

    #[test]
    fn substituted_path_parameters_are_always_required() {
        let records = records_for(
            r#"
paths:
  /users/{id}/posts:
    get:
      parameters:
        - name: id
          in: path
          schema:
            type: integer
        - name: owner
          in: path
"#,
        );
        let params = records.parameters.unwrap();
        assert!(field(&params, "id").required);
        // No `{owner}` placeholder, so it is sent in the query and stays optional.
        assert!(!field(&params, "owner").required);
    }

    #[test]
    fn unknown_parameter_type_is_fatal() {
        let doc = parse(
            r#"
paths:
  /events:
    get:
      parameters:
        - name: since
          schema:
            type: datetime
"#,
        );
        let ops = load_operations(&doc).unwrap();
        match synthesize_records(&ops[0]) {
            Err(GeneratorError::UnknownSchemaType { operation, field, schema_type }) => {
                assert_eq!(operation, "GET /events");
                assert_eq!(field, "since");
                assert_eq!(schema_type, "datetime");
            }
            other => panic!("expected UnknownSchemaType, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_parameter_names_are_rejected() {
        let doc = parse(
            r#"
paths:
  /items/{id}:
    get:
      parameters:
        - name: id
          in: path
          required: true
        - name: id
          in: query
"#,
        );
        let ops = load_operations(&doc).unwrap();
        assert!(matches!(
            synthesize_records(&ops[0]),
            Err(GeneratorError::DuplicateField { .. })
        ));
    }
}
