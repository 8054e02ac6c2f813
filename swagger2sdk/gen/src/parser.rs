//! Path template parsing.
//!
//! Path templates use `{param}` placeholders. A placeholder is only
//! substituted when the operation declares a matching `in: path` parameter;
//! otherwise it stays in the URL literally, braces included.

use crate::ir::PathSegment;

/// Extracts placeholder names from a path template.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_gen::parser::extract_path_params;
///
/// assert_eq!(extract_path_params("/models"), vec![] as Vec<&str>);
/// assert_eq!(extract_path_params("/models/{model}"), vec!["model"]);
/// assert_eq!(
///     extract_path_params("/threads/{thread_id}/messages/{message_id}"),
///     vec!["thread_id", "message_id"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in path.char_indices() {
        if c == '{' {
            start = Some(idx + 1);
        } else if c == '}' {
            if let Some(pos) = start.take() {
                let param = &path[pos..idx];
                if !param.is_empty() {
                    params.push(param);
                }
            }
        }
    }

    params
}

/// Splits a path template into literal and parameter segments.
///
/// Only placeholders named in `path_params` become [`PathSegment::Param`].
/// Neighbouring literal text is merged into one segment.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_gen::ir::PathSegment;
/// use swagger2sdk_gen::parser::split_path_template;
///
/// assert_eq!(
///     split_path_template("/users/{id}/posts/{slug}", &["id"]),
///     vec![
///         PathSegment::Literal("/users/".to_string()),
///         PathSegment::Param("id".to_string()),
///         PathSegment::Literal("/posts/{slug}".to_string()),
///     ]
/// );
/// ```
pub fn split_path_template(path: &str, path_params: &[&str]) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = path;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|c| open + c) else {
            break;
        };
        let name = &rest[open + 1..close];
        if !name.is_empty() && path_params.contains(&name) {
            literal.push_str(&rest[..open]);
            if !literal.is_empty() {
                segments.push(PathSegment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(PathSegment::Param(name.to_string()));
        } else {
            literal.push_str(&rest[..=close]);
        }
        rest = &rest[close + 1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(PathSegment::Literal(literal));
    }

    segments
}
