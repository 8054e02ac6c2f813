//! Source emitters.
//!
//! An [`Emitter`] renders a finished [`ClientUnit`] as one source file in its
//! target language: imports first, then records in first-seen order, then
//! the client type. Emitters only spell out decisions already recorded in the
//! IR, and the same unit always renders to byte-identical text.

pub mod python;
pub mod rust;

use strum::{Display, EnumIter, EnumString};

use crate::errors::Result;
use crate::ir::ClientUnit;

pub use python::PythonEmitter;
pub use rust::RustEmitter;

/// Notice placed at the top of every generated file.
pub const GENERATED_NOTICE: &str =
    "This code was automatically generated by swagger2sdk. Do not edit manually.";

/// `User-Agent` every generated client sends unless the caller overrides it.
pub const USER_AGENT: &str = "swagger2sdk/1.0";

/// Renders a client unit to target source text.
pub trait Emitter {
    /// File extension of the generated source, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders the unit.
    ///
    /// ## Errors
    ///
    /// Returns an error when the unit cannot be expressed in the target, such
    /// as two fields mapping to the same identifier.
    fn emit(&self, unit: &ClientUnit) -> Result<String>;
}

/// Language of the generated client.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use swagger2sdk_gen::emit::TargetLanguage;
///
/// assert_eq!(TargetLanguage::from_str("python").unwrap(), TargetLanguage::Python);
/// assert_eq!(TargetLanguage::default().extension(), "rs");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TargetLanguage {
    /// Async `reqwest` client with serde records.
    #[default]
    Rust,
    /// `requests` client with pydantic records.
    Python,
}

impl TargetLanguage {
    pub fn extension(&self) -> &'static str {
        self.emitter().extension()
    }

    /// The emitter for this language.
    pub fn emitter(&self) -> Box<dyn Emitter> {
        match self {
            TargetLanguage::Rust => Box::new(RustEmitter),
            TargetLanguage::Python => Box::new(PythonEmitter),
        }
    }
}

/// Renders `unit` with the emitter for `target`.
pub fn render(unit: &ClientUnit, target: TargetLanguage) -> Result<String> {
    target.emitter().emit(unit)
}
