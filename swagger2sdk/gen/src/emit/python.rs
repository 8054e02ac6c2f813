//! Python emitter: a `requests` client with pydantic records.
//!
//! Python has no token-level builder in this crate's stack, so the module is
//! assembled line by line with four-space indentation. Every string taken
//! from the document goes through [`py_str`].

use swagger2sdk_define::AuthStrategy;

use crate::codegen::{needs_form_helper, needs_param_helper};
use crate::emit::{Emitter, GENERATED_NOTICE, USER_AGENT};
use crate::errors::Result;
use crate::ir::{
    BodyEncoding, CallableUnit, ClientDef, ClientUnit, FieldType, Import, PathSegment, RecordDef,
    RecordField, RecordRole, ResponseDecoding, TypeRef,
};
use crate::naming::python_field_ident;
use crate::validation::validate_record_fields;

const INDENT: &str = "    ";

/// Emits a single Python module.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonEmitter;

impl Emitter for PythonEmitter {
    fn extension(&self) -> &'static str {
        "py"
    }

    fn emit(&self, unit: &ClientUnit) -> Result<String> {
        for record in &unit.records {
            validate_record_fields(record, python_field_ident)?;
        }

        // `_form_pairs` renders values with `_param_value`.
        let form_helper = needs_form_helper(unit);
        let helper = form_helper || needs_param_helper(unit);
        let mut out = Lines::default();
        out.line(0, format!("# {}", GENERATED_NOTICE));
        module_docstring(&mut out, unit);
        out.blank();
        imports(&mut out, unit, helper);

        if helper {
            out.blank();
            out.blank();
            param_helper(&mut out);
        }
        if form_helper {
            out.blank();
            out.blank();
            form_pairs_helper(&mut out);
        }
        for record in &unit.records {
            out.blank();
            out.blank();
            record_class(&mut out, record);
        }
        out.blank();
        out.blank();
        client_class(&mut out, unit);

        Ok(out.finish())
    }
}

#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.0.push(format!("{}{}", INDENT.repeat(depth), text.as_ref()));
    }

    fn blank(&mut self) {
        self.0.push(String::new());
    }

    fn finish(self) -> String {
        let mut text = self.0.join("\n");
        text.push('\n');
        text
    }
}

/// Quotes a string as a double-quoted Python literal.
fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Wraps text in a one-line docstring.
fn docstring(text: &str) -> String {
    format!(
        "\"\"\"{}\"\"\"",
        text.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
    )
}

fn module_docstring(out: &mut Lines, unit: &ClientUnit) {
    let client = &unit.client;
    out.line(0, format!("\"\"\"Generated API client for {}.", client.name));
    out.blank();
    out.line(0, format!("Default base URL: {}", client.base_url.replace('\\', "\\\\")));
    let auth = match client.auth {
        AuthStrategy::None => "No authentication required.",
        AuthStrategy::Basic => "HTTP Basic authentication with `username` and `password`.",
        AuthStrategy::Bearer => "Bearer token authentication with `token`.",
    };
    out.line(0, format!("Authentication: {}", auth));
    out.line(
        0,
        format!(
            "Headers: every request sends User-Agent {}; pass `override_headers` to replace defaults.",
            USER_AGENT
        ),
    );
    if !client.methods.is_empty() {
        out.blank();
        out.line(0, "Operations:");
        for method in &client.methods {
            out.line(
                0,
                format!("- {}: {}", method.name, method.operation.replace('\\', "\\\\")),
            );
        }
    }
    out.line(0, "\"\"\"");
}

fn imports(out: &mut Lines, unit: &ClientUnit, helper: bool) {
    if helper {
        out.line(0, "import json");
    }
    for import in &unit.imports {
        match import {
            Import::HttpClient => {
                out.line(0, "import requests");
                if unit.client.auth == AuthStrategy::Basic {
                    out.line(0, "from requests.auth import HTTPBasicAuth");
                }
            }
            Import::RecordBase => out.line(0, "from pydantic import BaseModel, ConfigDict, Field"),
            Import::Optional => out.line(0, "from typing import Any, Optional"),
            Import::Collections => out.line(0, "from typing import Dict, List"),
        }
    }
}

fn param_helper(out: &mut Lines) {
    out.line(0, "def _param_value(value: Any) -> str:");
    out.line(1, docstring("Renders a parameter value for a URL: strings verbatim, anything else as JSON."));
    out.line(1, "if isinstance(value, str):");
    out.line(2, "return value");
    out.line(1, "return json.dumps(value)");
}

fn form_pairs_helper(out: &mut Lines) {
    out.line(0, "def _form_pairs(value: Any) -> List[Any]:");
    out.line(1, docstring("Flattens a form body into key-value pairs: lists repeat their key, a bare value is sent as `data`."));
    out.line(1, "if not isinstance(value, dict):");
    out.line(2, "value = {\"data\": value}");
    out.line(1, "pairs = []");
    out.line(1, "for key, item in value.items():");
    out.line(2, "for entry in item if isinstance(item, list) else [item]:");
    out.line(3, "if entry is not None:");
    out.line(4, "pairs.append((key, _param_value(entry)))");
    out.line(1, "return pairs");
}

/// Python annotation for a field type.
pub fn field_type_annotation(field_type: &FieldType) -> String {
    match field_type {
        FieldType::String => "str".to_string(),
        FieldType::Float => "float".to_string(),
        FieldType::Integer => "int".to_string(),
        FieldType::Boolean => "bool".to_string(),
        FieldType::List(item) => format!("List[{}]", field_type_annotation(item)),
        FieldType::Map => "Dict[str, Any]".to_string(),
        FieldType::Any => "Any".to_string(),
    }
}

/// Python annotation for a signature type.
pub fn type_ref_annotation(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Record(name) => name.clone(),
        TypeRef::Untyped => "Any".to_string(),
        TypeRef::Text => "str".to_string(),
        TypeRef::RawResponse => "requests.Response".to_string(),
    }
}

fn record_class(out: &mut Lines, record: &RecordDef) {
    let role = match record.role {
        RecordRole::RequestParameters => "Parameters",
        RecordRole::RequestBody => "Request body",
        RecordRole::Response => "Response body",
    };
    out.line(0, format!("class {}(BaseModel):", record.name));
    out.line(1, docstring(&format!("{} of `{}`.", role, record.operation)));
    out.blank();

    if record.fields.iter().any(|f| python_field_ident(&f.name) != f.name) {
        out.line(1, "model_config = ConfigDict(populate_by_name=True)");
        out.blank();
    }
    for field in &record.fields {
        out.line(1, record_field(field));
    }
}

fn record_field(field: &RecordField) -> String {
    let ident = python_field_ident(&field.name);
    let annotation = field_type_annotation(&field.field_type);
    let alias = (ident != field.name).then(|| py_str(&field.name));

    match (field.required, alias) {
        (true, None) => format!("{}: {}", ident, annotation),
        (true, Some(alias)) => format!("{}: {} = Field(alias={})", ident, annotation, alias),
        (false, None) => format!("{}: Optional[{}] = None", ident, annotation),
        (false, Some(alias)) => format!(
            "{}: Optional[{}] = Field(default=None, alias={})",
            ident, annotation, alias
        ),
    }
}

fn client_class(out: &mut Lines, unit: &ClientUnit) {
    let client = &unit.client;
    out.line(0, format!("class {}:", client.name));
    out.line(1, docstring(&format!("{} client.", client.name)));
    out.blank();
    out.line(1, format!("BASE_URL = {}", py_str(&client.base_url)));
    out.line(1, format!("USER_AGENT = {}", py_str(USER_AGENT)));
    out.blank();

    let mut ctor_args = vec!["self".to_string(), "base_url: str".to_string()];
    ctor_args.extend(client.credential_fields.iter().map(|f| format!("{}: str", f)));
    out.line(1, format!("def __init__({}) -> None:", ctor_args.join(", ")));
    out.line(2, "self.base_url = base_url");
    for field in &client.credential_fields {
        out.line(2, format!("self.{} = {}", field, field));
    }

    for method in &client.methods {
        out.blank();
        let body = match method.body.as_ref().map(|b| &b.type_ref) {
            Some(TypeRef::Record(name)) => unit.record(name),
            _ => None,
        };
        let response = match &method.response {
            TypeRef::Record(name) => unit.record(name),
            _ => None,
        };
        client_method(out, client, method, body, response);
    }
}

fn client_method(
    out: &mut Lines,
    client: &ClientDef,
    method: &CallableUnit,
    body_record: Option<&RecordDef>,
    response_record: Option<&RecordDef>,
) {
    let mut args = vec!["self".to_string()];
    if let Some(ty) = &method.params {
        args.push(format!("request_parameters: {}", type_ref_annotation(ty)));
    }
    if let Some(body) = &method.body {
        args.push(format!("request_body: {}", type_ref_annotation(&body.type_ref)));
    }
    args.push("*".to_string());
    args.push("override_headers: Optional[Dict[str, str]] = None".to_string());
    out.line(
        1,
        format!(
            "def {}({}) -> {}:",
            method.name,
            args.join(", "),
            type_ref_annotation(&method.response)
        ),
    );
    out.line(2, docstring(&format!("`{}`", method.operation)));

    url_statements(out, method);
    request_statement(out, client, method, body_record);
    out.line(2, "response.raise_for_status()");
    out.line(2, decode_statement(method, response_record));
}

/// Substituted path parameters are always required record fields.
fn url_statements(out: &mut Lines, method: &CallableUnit) {
    out.line(2, "url = self.base_url");
    for segment in &method.path {
        match segment {
            PathSegment::Literal(text) => out.line(2, format!("url += {}", py_str(text))),
            PathSegment::Param(name) => out.line(
                2,
                format!("url += _param_value(request_parameters.{})", python_field_ident(name)),
            ),
        }
    }

    if method.query.is_empty() {
        return;
    }
    out.line(2, "query = []");
    for binding in &method.query {
        let access = format!("request_parameters.{}", python_field_ident(&binding.name));
        let pair = format!(
            "query.append({} + _param_value({}))",
            py_str(&format!("{}=", binding.name)),
            access
        );
        if binding.required {
            out.line(2, pair);
        } else {
            out.line(2, format!("if {} is not None:", access));
            out.line(3, pair);
        }
    }
    out.line(2, "if query:");
    out.line(3, "url += \"?\" + \"&\".join(query)");
}

fn request_statement(
    out: &mut Lines,
    client: &ClientDef,
    method: &CallableUnit,
    body_record: Option<&RecordDef>,
) {
    let mut kwargs = vec!["headers=headers".to_string()];
    let mut headers = vec!["\"User-Agent\": self.USER_AGENT".to_string()];

    match client.auth {
        AuthStrategy::None => {}
        AuthStrategy::Basic => {
            kwargs.push("auth=HTTPBasicAuth(self.username, self.password)".to_string())
        }
        AuthStrategy::Bearer => {
            headers.push("\"Authorization\": \"Bearer \" + self.token".to_string())
        }
    }

    if let Some(body) = &method.body {
        let payload = match body_record {
            Some(record) if record.wrapper => "request_body.data".to_string(),
            Some(_) => {
                "request_body.model_dump(mode=\"json\", by_alias=True, exclude_none=True)"
                    .to_string()
            }
            None => "request_body".to_string(),
        };
        match &body.encoding {
            BodyEncoding::Json => kwargs.push(format!("json={}", payload)),
            BodyEncoding::Form => kwargs.push(format!("data=_form_pairs({})", payload)),
            BodyEncoding::Raw { content_type } => {
                headers.push(format!("\"Content-Type\": {}", py_str(content_type)));
                kwargs.push(format!("data={}", payload));
            }
        }
    }

    out.line(2, format!("headers = {{{}}}", headers.join(", ")));
    out.line(2, "if override_headers:");
    out.line(3, "headers.update(override_headers)");

    out.line(2, format!("response = requests.{}(", method.method.as_lower()));
    out.line(3, "url,");
    for kwarg in kwargs {
        out.line(3, format!("{},", kwarg));
    }
    out.line(2, ")");
}

fn decode_statement(method: &CallableUnit, response_record: Option<&RecordDef>) -> String {
    match (method.decoding, response_record) {
        (ResponseDecoding::Json, Some(record)) if record.wrapper => {
            format!("return {}(data=response.json())", record.name)
        }
        (ResponseDecoding::Json, Some(record)) => {
            format!("return {}.model_validate(response.json())", record.name)
        }
        (ResponseDecoding::Json, None) => "return response.json()".to_string(),
        (ResponseDecoding::Text, _) => "return response.text".to_string(),
        (ResponseDecoding::Raw, _) => "return response".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GeneratorError;
    use crate::ir::{BodyArg, QueryBinding};
    use crate::test_utils::{make_callable, make_record, make_unit};
    use swagger2sdk_define::HttpMethod;

    fn items_unit() -> ClientUnit {
        let mut method = make_callable("get_items_id", HttpMethod::Get, "/items/{id}");
        method.operation = "GET /items/{id}".to_string();
        method.params = Some(TypeRef::Record("GetItemsIdRequestParameters".to_string()));
        method.query.push(QueryBinding {
            name: "id".to_string(),
            required: true,
        });
        method.response = TypeRef::Record("GetItemsIdResponse".to_string());
        method.decoding = ResponseDecoding::Json;

        let mut unit = make_unit("ItemsApi", AuthStrategy::Bearer, vec![method]);
        unit.client.methods[0].auth = AuthStrategy::Bearer;
        unit.records.push(make_record(
            "GetItemsIdRequestParameters",
            RecordRole::RequestParameters,
            &[("id", FieldType::String, true)],
        ));
        unit.records.push(make_record(
            "GetItemsIdResponse",
            RecordRole::Response,
            &[("name", FieldType::String, true), ("price", FieldType::Float, false)],
        ));
        unit
    }

    #[test]
    fn emits_notice_and_imports() {
        let code = PythonEmitter.emit(&items_unit()).unwrap();
        assert!(code.starts_with(
            "# This code was automatically generated by swagger2sdk. Do not edit manually.\n"
        ));
        assert!(code.contains("import json\n"));
        assert!(code.contains("import requests\n"));
        assert!(code.contains("from pydantic import BaseModel, ConfigDict, Field\n"));
        assert!(code.contains("from typing import Any, Optional\n"));
        assert!(!code.contains("HTTPBasicAuth"));
    }

    #[test]
    fn emits_pydantic_records() {
        let code = PythonEmitter.emit(&items_unit()).unwrap();
        assert!(code.contains("class GetItemsIdResponse(BaseModel):\n"));
        assert!(code.contains("    name: str\n"));
        assert!(code.contains("    price: Optional[float] = None\n"));
    }

    #[test]
    fn emits_client_method() {
        let code = PythonEmitter.emit(&items_unit()).unwrap();
        assert!(code.contains("class ItemsApi:\n"));
        assert!(code.contains("    BASE_URL = \"https://api.example.com\"\n"));
        assert!(code.contains("    def __init__(self, base_url: str, token: str) -> None:\n"));
        assert!(code.contains("    USER_AGENT = \"swagger2sdk/1.0\"\n"));
        assert!(code.contains(
            "    def get_items_id(self, request_parameters: GetItemsIdRequestParameters, *, override_headers: Optional[Dict[str, str]] = None) -> GetItemsIdResponse:\n"
        ));
        assert!(code.contains("        url += \"/items/{id}\"\n"));
        assert!(code.contains("        query.append(\"id=\" + _param_value(request_parameters.id))\n"));
        assert!(code.contains(
            "        headers = {\"User-Agent\": self.USER_AGENT, \"Authorization\": \"Bearer \" + self.token}\n"
        ));
        assert!(code.contains("            headers=headers,\n"));
        assert!(code.contains("        return GetItemsIdResponse.model_validate(response.json())\n"));
    }

    #[test]
    fn sections_are_in_order() {
        let code = PythonEmitter.emit(&items_unit()).unwrap();
        let imports = code.find("import requests").unwrap();
        let params = code.find("class GetItemsIdRequestParameters").unwrap();
        let response = code.find("class GetItemsIdResponse").unwrap();
        let client = code.find("class ItemsApi").unwrap();
        assert!(imports < params && params < response && response < client);
    }

    #[test]
    fn aliases_fields_that_are_not_identifiers() {
        let record = make_record(
            "GetAResponse",
            RecordRole::Response,
            &[("x-rate", FieldType::Integer, true), ("class", FieldType::String, false)],
        );
        let mut out = Lines::default();
        record_class(&mut out, &record);
        let code = out.finish();
        assert!(code.contains("model_config = ConfigDict(populate_by_name=True)"));
        assert!(code.contains("x_rate: int = Field(alias=\"x-rate\")"));
        assert!(code.contains("class_: Optional[str] = Field(default=None, alias=\"class\")"));
    }

    #[test]
    fn basic_auth_and_raw_body() {
        let mut method = make_callable("put_upload", HttpMethod::Put, "/upload");
        method.auth = AuthStrategy::Basic;
        method.body = Some(BodyArg {
            encoding: BodyEncoding::Raw {
                content_type: "text/plain".to_string(),
            },
            type_ref: TypeRef::Text,
        });
        let unit = make_unit("Files", AuthStrategy::Basic, vec![method]);
        let code = PythonEmitter.emit(&unit).unwrap();

        assert!(code.contains("from requests.auth import HTTPBasicAuth\n"));
        assert!(code.contains("def __init__(self, base_url: str, username: str, password: str) -> None:"));
        assert!(code.contains(
            "def put_upload(self, request_body: str, *, override_headers: Optional[Dict[str, str]] = None) -> requests.Response:"
        ));
        assert!(code.contains(
            "headers = {\"User-Agent\": self.USER_AGENT, \"Content-Type\": \"text/plain\"}"
        ));
        assert!(code.contains("auth=HTTPBasicAuth(self.username, self.password),"));
        assert!(code.contains("data=request_body,"));
        assert!(code.contains("        return response\n"));
        assert!(!code.contains("import json"));
    }

    #[test]
    fn json_body_record_is_dumped_by_alias() {
        let mut method = make_callable("post_items", HttpMethod::Post, "/items");
        method.body = Some(BodyArg {
            encoding: BodyEncoding::Json,
            type_ref: TypeRef::Record("PostItemsRequestBody".to_string()),
        });
        let mut unit = make_unit("A", AuthStrategy::None, vec![method]);
        unit.records.push(make_record(
            "PostItemsRequestBody",
            RecordRole::RequestBody,
            &[("name", FieldType::String, true)],
        ));
        let code = PythonEmitter.emit(&unit).unwrap();
        assert!(code.contains(
            "json=request_body.model_dump(mode=\"json\", by_alias=True, exclude_none=True),"
        ));
    }

    #[test]
    fn wrapper_records_decode_into_data() {
        let mut method = make_callable("get_tags", HttpMethod::Get, "/tags");
        method.response = TypeRef::Record("GetTagsResponse".to_string());
        method.decoding = ResponseDecoding::Json;
        let mut unit = make_unit("A", AuthStrategy::None, vec![method]);
        let mut record = make_record(
            "GetTagsResponse",
            RecordRole::Response,
            &[("data", FieldType::List(Box::new(FieldType::String)), true)],
        );
        record.wrapper = true;
        unit.records.push(record);

        let code = PythonEmitter.emit(&unit).unwrap();
        assert!(code.contains("    data: List[str]\n"));
        assert!(code.contains("return GetTagsResponse(data=response.json())"));
    }

    #[test]
    fn text_decoding_and_optional_query() {
        let mut method = make_callable("get_page", HttpMethod::Get, "/page");
        method.params = Some(TypeRef::Record("GetPageRequestParameters".to_string()));
        method.query.push(QueryBinding {
            name: "lang".to_string(),
            required: false,
        });
        method.response = TypeRef::Text;
        method.decoding = ResponseDecoding::Text;
        let unit = make_unit("A", AuthStrategy::None, vec![method]);
        let code = PythonEmitter.emit(&unit).unwrap();

        assert!(code.contains("        if request_parameters.lang is not None:\n"));
        assert!(code.contains("            query.append(\"lang=\" + _param_value(request_parameters.lang))\n"));
        assert!(code.contains("-> str:"));
        assert!(code.contains("        return response.text\n"));
    }

    #[test]
    fn colliding_field_idents_are_rejected() {
        let mut unit = make_unit("A", AuthStrategy::None, vec![]);
        unit.records.push(make_record(
            "GetAResponse",
            RecordRole::Response,
            &[("a-b", FieldType::String, true), ("a_b", FieldType::String, true)],
        ));
        assert!(matches!(
            PythonEmitter.emit(&unit),
            Err(GeneratorError::DuplicateField { .. })
        ));
    }

    #[test]
    fn override_headers_are_merged_after_defaults() {
        let unit = make_unit(
            "A",
            AuthStrategy::None,
            vec![make_callable("get_ping", HttpMethod::Get, "/ping")],
        );
        let code = PythonEmitter.emit(&unit).unwrap();

        assert!(code.contains(
            "    def get_ping(self, *, override_headers: Optional[Dict[str, str]] = None) -> requests.Response:\n"
        ));
        let defaults = code.find("        headers = {\"User-Agent\": self.USER_AGENT}\n").unwrap();
        let merge = code.find("        if override_headers:\n            headers.update(override_headers)\n").unwrap();
        let call = code.find("        response = requests.get(\n            url,\n            headers=headers,\n        )\n").unwrap();
        assert!(defaults < merge && merge < call);
    }

    #[test]
    fn form_bodies_are_flattened_into_pairs() {
        let mut method = make_callable("post_users", HttpMethod::Post, "/users");
        method.body = Some(BodyArg {
            encoding: BodyEncoding::Form,
            type_ref: TypeRef::Record("PostUsersRequestBody".to_string()),
        });
        let mut unit = make_unit("A", AuthStrategy::None, vec![method]);
        unit.records.push(make_record(
            "PostUsersRequestBody",
            RecordRole::RequestBody,
            &[
                ("email", FieldType::String, true),
                ("tags", FieldType::List(Box::new(FieldType::String)), false),
            ],
        ));
        let code = PythonEmitter.emit(&unit).unwrap();

        assert!(code.contains("import json\n"));
        assert!(code.contains("def _param_value(value: Any) -> str:"));
        assert!(code.contains("def _form_pairs(value: Any) -> List[Any]:"));
        assert!(code.contains("        for entry in item if isinstance(item, list) else [item]:\n"));
        assert!(code.contains(
            "data=_form_pairs(request_body.model_dump(mode=\"json\", by_alias=True, exclude_none=True)),"
        ));
    }

    #[test]
    fn form_wrapper_body_is_sent_under_data() {
        let mut method = make_callable("post_note", HttpMethod::Post, "/note");
        method.body = Some(BodyArg {
            encoding: BodyEncoding::Form,
            type_ref: TypeRef::Record("PostNoteRequestBody".to_string()),
        });
        let mut unit = make_unit("A", AuthStrategy::None, vec![method]);
        let mut record = make_record(
            "PostNoteRequestBody",
            RecordRole::RequestBody,
            &[("data", FieldType::String, true)],
        );
        record.wrapper = true;
        unit.records.push(record);
        let code = PythonEmitter.emit(&unit).unwrap();

        assert!(code.contains("        value = {\"data\": value}\n"));
        assert!(code.contains("data=_form_pairs(request_body.data),"));
    }

    #[test]
    fn substituted_path_parameters_are_not_guarded() {
        let mut method = make_callable("get_users_id_posts", HttpMethod::Get, "");
        method.params = Some(TypeRef::Record("GetUsersIdPostsRequestParameters".to_string()));
        method.path = vec![
            PathSegment::Literal("/users/".to_string()),
            PathSegment::Param("id".to_string()),
            PathSegment::Literal("/posts".to_string()),
        ];
        let unit = make_unit("A", AuthStrategy::None, vec![method]);
        let code = PythonEmitter.emit(&unit).unwrap();

        assert!(code.contains(
            "        url += \"/users/\"\n        url += _param_value(request_parameters.id)\n        url += \"/posts\"\n"
        ));
        assert!(!code.contains("if request_parameters.id is not None"));
    }

    #[test]
    fn py_str_escapes() {
        assert_eq!(py_str("a\"b\\c\n"), "\"a\\\"b\\\\c\\n\"");
    }

    #[test]
    fn emission_is_deterministic() {
        let unit = items_unit();
        assert_eq!(PythonEmitter.emit(&unit).unwrap(), PythonEmitter.emit(&unit).unwrap());
    }
}
