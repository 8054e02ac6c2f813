//! Shared test fixtures for swagger2sdk-gen tests.

use proc_macro2::TokenStream;
use swagger2sdk_define::{AuthStrategy, HttpMethod, OpenApiDocument};

use crate::ir::{
    CallableUnit, ClientDef, ClientUnit, FieldType, Import, RecordDef, RecordField, RecordRole,
    ResponseDecoding, TypeRef,
};
use crate::parser::split_path_template;

/// One operation, `GET /items/{id}`, whose `id` is declared as a query
/// parameter and whose 200 response is a JSON object.
pub const ITEMS_SPEC: &str = r#"
openapi: 3.0.0
info:
  title: Items
  version: "1.0"
servers:
  - url: https://shop.example.com/api
paths:
  /items/{id}:
    get:
      parameters:
        - name: id
          in: query
          required: true
          schema:
            type: string
      responses:
        "200":
          description: OK
          content:
            application/json:
              schema:
                type: object
                required: [name]
                properties:
                  name:
                    type: string
                  price:
                    type: number
"#;

/// Parses a document, panicking on malformed fixtures.
pub fn parse(input: &str) -> OpenApiDocument {
    OpenApiDocument::from_str(input).expect("fixture should parse")
}

/// Validates that generated code is syntactically correct.
pub fn validate_generated_code(tokens: &TokenStream) -> Result<syn::File, String> {
    syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())
}

/// Formats generated code using prettyplease.
pub fn format_generated_code(tokens: &TokenStream) -> Result<String, String> {
    let file = validate_generated_code(tokens)?;
    Ok(prettyplease::unparse(&file))
}

/// Creates a record for `GET /test` from `(wire name, type, required)`.
pub fn make_record(name: &str, role: RecordRole, fields: &[(&str, FieldType, bool)]) -> RecordDef {
    RecordDef {
        name: name.to_string(),
        role,
        operation: "GET /test".to_string(),
        fields: fields
            .iter()
            .map(|(name, field_type, required)| RecordField {
                name: name.to_string(),
                field_type: field_type.clone(),
                required: *required,
            })
            .collect(),
        wrapper: false,
    }
}

/// Creates a client definition with no methods.
pub fn make_client(name: &str, auth: AuthStrategy) -> ClientDef {
    ClientDef {
        name: name.to_string(),
        auth,
        base_url: "https://api.example.com".to_string(),
        credential_fields: auth.credential_fields().iter().map(|f| f.to_string()).collect(),
        methods: vec![],
    }
}

/// Creates a bare method: no parameters, no body, raw response.
pub fn make_callable(name: &str, method: HttpMethod, path: &str) -> CallableUnit {
    CallableUnit {
        name: name.to_string(),
        operation: format!("{} {}", method, path),
        method,
        path: split_path_template(path, &[]),
        params: None,
        query: vec![],
        body: None,
        response: TypeRef::RawResponse,
        decoding: ResponseDecoding::Raw,
        auth: AuthStrategy::None,
    }
}

/// Creates a client unit with the given methods and no records.
pub fn make_unit(name: &str, auth: AuthStrategy, methods: Vec<CallableUnit>) -> ClientUnit {
    let mut client = make_client(name, auth);
    client.methods = methods;
    ClientUnit {
        imports: Import::ALL.to_vec(),
        records: vec![],
        client,
    }
}
