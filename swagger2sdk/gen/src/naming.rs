//! Identifier derivation for operations, methods, records and fields.
//!
//! All names are derived deterministically from the operation's method and
//! path template, so an unchanged document always produces the same names.
//!
//! ## Examples
//!
//! ```
//! use swagger2sdk_define::HttpMethod;
//! use swagger2sdk_gen::naming::{method_name, operation_name, record_base_name};
//!
//! let op = operation_name(HttpMethod::Get, "/users/{userId}");
//! assert_eq!(op, "get_users_userId");
//! assert_eq!(method_name(&op), "get_users_user_id");
//! assert_eq!(record_base_name(&op), "GetUsersUserId");
//! ```

use swagger2sdk_define::HttpMethod;

/// Rust keywords that can be written as raw identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Rust keywords that cannot be raw identifiers.
const RUST_RESERVED: &[&str] = &["crate", "self", "super", "Self"];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Derives the operation name: lower-case method followed by the path with
/// `/` turned into `_` and braces removed.
///
/// `GET /users/{id}` becomes `get_users_id`.
pub fn operation_name(method: HttpMethod, path: &str) -> String {
    let path: String = path
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .map(|c| if c == '/' { '_' } else { c })
        .collect();
    format!("{}{}", method.as_lower(), path)
}

/// Derives the generated method name from an operation name.
///
/// Dashes become underscores, other non-identifier characters are dropped,
/// and camelCase humps are split into snake_case.
pub fn method_name(operation_name: &str) -> String {
    let cleaned: String = operation_name
        .chars()
        .map(|c| if c == '-' { '_' } else { c })
        .filter(|c| is_ident_char(*c))
        .collect();
    to_snake_case(&cleaned)
}

/// Derives the PascalCase record base name from an operation name.
///
/// Non-identifier characters are stripped first; each `_`-separated part
/// then has its first letter upper-cased.
pub fn record_base_name(operation_name: &str) -> String {
    let cleaned: String = operation_name.chars().filter(|c| is_ident_char(*c)).collect();
    cleaned
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Derives a Rust field identifier for a wire property name.
///
/// Returns a snake_case name, prefixed with `field_` when it would start with
/// a digit, written as a raw identifier (`r#type`) for keywords.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_gen::naming::rust_field_ident;
///
/// assert_eq!(rust_field_ident("noEnlarge"), "no_enlarge");
/// assert_eq!(rust_field_ident("type"), "r#type");
/// assert_eq!(rust_field_ident("2fa"), "field_2fa");
/// assert_eq!(rust_field_ident("x-rate-limit"), "x_rate_limit");
/// ```
pub fn rust_field_ident(wire_name: &str) -> String {
    let replaced: String = wire_name
        .chars()
        .map(|c| if is_ident_char(c) { c } else { '_' })
        .collect();
    let mut ident = to_snake_case(&replaced);

    if ident.is_empty() || ident.chars().all(|c| c == '_') {
        ident = "field".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident = format!("field_{}", ident);
    }

    if RUST_RESERVED.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{}", ident)
    } else {
        ident
    }
}

/// Derives a Python attribute name for a wire property name.
///
/// Valid identifiers are kept as-is so pydantic field names match the wire;
/// anything else has invalid characters replaced and gets an alias.
pub fn python_field_ident(wire_name: &str) -> String {
    let mut ident: String = wire_name
        .chars()
        .map(|c| if is_ident_char(c) { c } else { '_' })
        .collect();

    if ident.is_empty() {
        ident = "field".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident = format!("field_{}", ident);
    }
    if PYTHON_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Converts an identifier-safe string to snake_case.
///
/// Splits before an upper-case letter that follows a lower-case letter or
/// digit, and before the last capital of an acronym run (`HTTPClient` ->
/// `http_client`). Existing underscores are kept.
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &current) in chars.iter().enumerate() {
        if i > 0 && current.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            let is_new_word = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if is_new_word && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(current.to_ascii_lowercase());
    }

    out
}
