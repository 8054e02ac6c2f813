//! Endpoint Function Synthesizer: decides one method per operation.
//!
//! Everything a generated method does at call time is fixed here: path
//! substitution, query serialization, body encoding, auth and response
//! decoding. Emitters only spell the decisions out.

use swagger2sdk_define::{
    AuthStrategy, BodySpec, ContentTypeClass, OperationDescriptor, ParameterLocation,
};
use tracing::{debug, warn};

use crate::ir::{
    BodyArg, BodyEncoding, CallableUnit, OperationRecords, QueryBinding, ResponseDecoding, TypeRef,
};
use crate::naming::method_name;
use crate::parser::{extract_path_params, split_path_template};

/// Synthesizes the callable unit for an operation.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_define::{AuthStrategy, HttpMethod, OperationDescriptor};
/// use swagger2sdk_gen::ir::{OperationRecords, ResponseDecoding, TypeRef};
/// use swagger2sdk_gen::synth::endpoint::synthesize_callable;
///
/// let op = OperationDescriptor::new("/ping", HttpMethod::Get, "get_ping");
/// let unit = synthesize_callable(&op, AuthStrategy::None, &OperationRecords::default());
///
/// assert_eq!(unit.name, "get_ping");
/// assert!(unit.params.is_none());
/// assert!(unit.body.is_none());
/// assert_eq!(unit.decoding, ResponseDecoding::Raw);
/// assert_eq!(unit.response, TypeRef::RawResponse);
/// ```
pub fn synthesize_callable(
    op: &OperationDescriptor,
    auth: AuthStrategy,
    records: &OperationRecords,
) -> CallableUnit {
    let placeholders = extract_path_params(&op.path);
    let path_params: Vec<&str> = op
        .parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Path)
        .map(|p| p.name.as_str())
        .filter(|name| placeholders.contains(name))
        .collect();

    let query = op
        .parameters
        .iter()
        .filter(|p| !path_params.contains(&p.name.as_str()))
        .map(|p| QueryBinding {
            name: p.name.clone(),
            required: p.required,
        })
        .collect();

    let body = op
        .request_body
        .as_ref()
        .and_then(|body| body_arg(op, body, records));

    let decoding = response_decoding(op);
    let response = match (&records.response, decoding) {
        (Some(record), _) => TypeRef::Record(record.name.clone()),
        (None, ResponseDecoding::Json) => TypeRef::Untyped,
        (None, ResponseDecoding::Text) => TypeRef::Text,
        (None, ResponseDecoding::Raw) => TypeRef::RawResponse,
    };

    let unit = CallableUnit {
        name: method_name(&op.name),
        operation: op.key(),
        method: op.method,
        path: split_path_template(&op.path, &path_params),
        params: records
            .parameters
            .as_ref()
            .map(|r| TypeRef::Record(r.name.clone())),
        query,
        body,
        response,
        decoding,
        auth,
    };

    debug!(
        operation = %unit.operation,
        method = %unit.name,
        decoding = %unit.decoding,
        path_params = path_params.len(),
        query_params = unit.query.len(),
        "Synthesized method"
    );

    unit
}

fn body_arg(op: &OperationDescriptor, body: &BodySpec, records: &OperationRecords) -> Option<BodyArg> {
    let Some(primary) = body.primary() else {
        warn!(operation = %op.key(), "Request body declares no content; omitting body argument");
        return None;
    };

    let encoding = match primary.class() {
        ContentTypeClass::Json => BodyEncoding::Json,
        ContentTypeClass::Form => BodyEncoding::Form,
        ContentTypeClass::Text | ContentTypeClass::Other => BodyEncoding::Raw {
            content_type: primary.content_type.clone(),
        },
    };

    let type_ref = match (&records.body, &encoding) {
        (Some(record), _) => TypeRef::Record(record.name.clone()),
        (None, BodyEncoding::Json | BodyEncoding::Form) => TypeRef::Untyped,
        (None, BodyEncoding::Raw { .. }) => TypeRef::Text,
    };

    Some(BodyArg { encoding, type_ref })
}

/// Decodes JSON when the 200 response declares any JSON content, text when
/// its first media type is text, and passes everything else through raw.
fn response_decoding(op: &OperationDescriptor) -> ResponseDecoding {
    let Some(success) = op.success_response() else {
        return ResponseDecoding::Raw;
    };
    if success.media(ContentTypeClass::Json).is_some() {
        return ResponseDecoding::Json;
    }
    match success.primary().map(|m| m.class()) {
        Some(ContentTypeClass::Text) => ResponseDecoding::Text,
        _ => ResponseDecoding::Raw,
    }
}
