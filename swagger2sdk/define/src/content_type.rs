//! Content type classification.
//!
//! Request encoding and response decoding only distinguish four classes of
//! media type. Everything the generator does with a payload is decided by
//! matching on [`ContentTypeClass`].

use serde::{Deserialize, Serialize};
use strum::Display;

/// The payload handling class of a media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ContentTypeClass {
    /// `application/json` or any `+json` structured suffix.
    Json,
    /// `application/x-www-form-urlencoded`.
    Form,
    /// `text/plain` or `text/html`.
    Text,
    /// Anything else. Payloads are passed through unchanged.
    Other,
}

impl ContentTypeClass {
    /// Classifies a media type string.
    ///
    /// Parameters after `;` are ignored and the comparison is
    /// case-insensitive.
    ///
    /// ## Examples
    ///
    /// ```
    /// use swagger2sdk_define::ContentTypeClass;
    ///
    /// assert_eq!(ContentTypeClass::classify("application/json; charset=utf-8"), ContentTypeClass::Json);
    /// assert_eq!(ContentTypeClass::classify("application/problem+json"), ContentTypeClass::Json);
    /// assert_eq!(ContentTypeClass::classify("TEXT/HTML"), ContentTypeClass::Text);
    /// assert_eq!(ContentTypeClass::classify("image/png"), ContentTypeClass::Other);
    /// ```
    pub fn classify(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/json" => ContentTypeClass::Json,
            "application/x-www-form-urlencoded" => ContentTypeClass::Form,
            "text/plain" | "text/html" => ContentTypeClass::Text,
            other if other.starts_with("application/") && other.ends_with("+json") => {
                ContentTypeClass::Json
            }
            _ => ContentTypeClass::Other,
        }
    }

    /// Whether request bodies of this class get a synthesized record.
    pub fn is_structured(&self) -> bool {
        matches!(self, ContentTypeClass::Json | ContentTypeClass::Form)
    }
}
