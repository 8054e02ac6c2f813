//! Pipeline entry points, output validation and file writing.
//!
//! This module runs the whole generation pipeline:
//!
//! ```text
//! OpenApiDocument
//!   └─ loader          OperationDescriptor*      (+ base URL)
//!       └─ synth       OperationRecords + CallableUnit per operation
//!           └─ ClientAssembler → ClientUnit
//!               └─ emit           source text
//!                   └─ write_atomic  {output_dir}/{sdk_name}.{rs|py}
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: generated Rust is parsed with `syn` before it is returned
//! - **Formatting**: Rust output is formatted with `prettyplease`
//! - **Atomic writes**: temp file + rename, so a failed run never leaves a
//!   partially written client behind

use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use swagger2sdk_define::OpenApiDocument;
use tracing::{debug, info};

use crate::cargo_gen::write_cargo_toml;
use crate::config::GeneratorConfig;
use crate::emit::{GENERATED_NOTICE, TargetLanguage, render};
use crate::errors::{GeneratorError, Result};
use crate::ir::ClientUnit;
use crate::loader::{load_operations, resolve_base_url};
use crate::synth::{ClientAssembler, synthesize_callable, synthesize_records};

/// Progress after a path's operations have been synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed_paths: usize,
    pub total_paths: usize,
}

impl Progress {
    /// Completed fraction in `0.0..=1.0`. An empty document is complete.
    pub fn fraction(&self) -> f64 {
        if self.total_paths == 0 {
            1.0
        } else {
            self.completed_paths as f64 / self.total_paths as f64
        }
    }
}

/// Runs the loader, the synthesizers and the assembler.
///
/// `progress` is called once per path, in document order, after every
/// operation under that path has been synthesized.
///
/// ## Errors
///
/// Returns the first configuration, loading or synthesis error. Nothing is
/// produced on error.
pub fn build_client_unit(
    doc: &OpenApiDocument,
    config: &GeneratorConfig,
    progress: &mut dyn FnMut(Progress),
) -> Result<ClientUnit> {
    config.validate()?;
    let base_url = resolve_base_url(doc, config.base_url.as_deref())?;
    let operations = load_operations(doc)?;

    let total_paths = doc.paths.len();
    let mut assembler = ClientAssembler::new(&config.sdk_name, config.auth, base_url);

    for (index, path) in doc.paths.keys().enumerate() {
        for op in operations.iter().filter(|op| &op.path == path) {
            let records = synthesize_records(op)?;
            let method = synthesize_callable(op, config.auth, &records);
            assembler.push(records, method);
        }
        debug!(path = %path, "Processed path");
        progress(Progress {
            completed_paths: index + 1,
            total_paths,
        });
    }

    assembler.finish()
}

/// Generates client source for the configured target without writing it.
pub fn generate(doc: &OpenApiDocument, config: &GeneratorConfig) -> Result<String> {
    let unit = build_client_unit(doc, config, &mut |_| {})?;
    render(&unit, config.target)
}

/// Validates that the generated code is syntactically correct Rust.
///
/// ## Errors
///
/// Returns [`GeneratorError::CodeGenError`] if the tokens do not parse as a
/// file.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats generated Rust with prettyplease, prepending the generated-code
/// notice as a regular comment.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("// {}\n\n{}", GENERATED_NOTICE, formatted)
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed.
///
/// ## Errors
///
/// Returns [`GeneratorError::WriteError`] if any step fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates the client and writes it to [`GeneratorConfig::output_file`].
///
/// With `dry_run` the source is printed instead. With `write_manifest` and
/// the Rust target a `Cargo.toml` is written beside the source.
///
/// ## Returns
///
/// The generated source.
///
/// ## Errors
///
/// Returns an error if generation fails or the file cannot be written.
pub fn generate_and_write(
    doc: &OpenApiDocument,
    config: &GeneratorConfig,
    progress: &mut dyn FnMut(Progress),
) -> Result<String> {
    let unit = build_client_unit(doc, config, progress)?;
    let code = render(&unit, config.target)?;
    let path = config.output_file();

    if config.dry_run {
        println!("=== {} ===\n{}", path.display(), code);
    } else {
        write_atomic(&path, &code)?;
    }

    if config.write_manifest && config.target == TargetLanguage::Rust {
        write_cargo_toml(config.manifest_dir(), &config.sdk_name, config.dry_run)?;
    }

    info!(
        client = %unit.client.name,
        target = %config.target,
        records = unit.records.len(),
        methods = unit.client.methods.len(),
        path = %path.display(),
        dry_run = config.dry_run,
        "Generated client"
    );

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ITEMS_SPEC, parse};
    use quote::quote;
    use swagger2sdk_define::AuthStrategy;
    use tempfile::TempDir;

    const TWO_PATHS: &str = r#"
servers:
  - url: https://api.example.com
paths:
  /a:
    get:
      responses: {}
    post:
      responses: {}
  /b:
    summary: no operations here
  /c:
    delete:
      responses: {}
"#;

    #[test]
    fn build_client_unit_items_scenario() {
        let doc = parse(ITEMS_SPEC);
        let config = GeneratorConfig::new("ItemsApi");
        let unit = build_client_unit(&doc, &config, &mut |_| {}).unwrap();

        let names: Vec<&str> = unit.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["GetItemsIdRequestParameters", "GetItemsIdResponse"]);
        assert_eq!(unit.client.methods.len(), 1);
        assert_eq!(unit.client.methods[0].name, "get_items_id");
        assert_eq!(unit.client.base_url, "https://shop.example.com/api");
    }

    #[test]
    fn progress_is_reported_per_path_and_monotonic() {
        let doc = parse(TWO_PATHS);
        let config = GeneratorConfig::new("Api");
        let mut seen = Vec::new();
        build_client_unit(&doc, &config, &mut |p| seen.push(p)).unwrap();

        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|p| p.total_paths == 3));
        assert!(seen.windows(2).all(|w| w[0].fraction() <= w[1].fraction()));
        assert_eq!(seen.last().unwrap().fraction(), 1.0);
    }

    #[test]
    fn methods_keep_load_order() {
        let doc = parse(TWO_PATHS);
        let unit = build_client_unit(&doc, &GeneratorConfig::new("Api"), &mut |_| {}).unwrap();
        let names: Vec<&str> = unit.client.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["get_a", "post_a", "delete_c"]);
    }

    #[test]
    fn invalid_sdk_name_is_rejected_before_loading() {
        let doc = parse(ITEMS_SPEC);
        let err = generate(&doc, &GeneratorConfig::new("my-api")).unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigError(_)));
    }

    #[test]
    fn missing_base_url_is_fatal() {
        let doc = parse("paths:\n  /a:\n    get:\n      responses: {}\n");
        let err = generate(&doc, &GeneratorConfig::new("Api")).unwrap_err();
        assert!(matches!(err, GeneratorError::MissingBaseUrl));

        let code = generate(
            &doc,
            &GeneratorConfig::new("Api").with_base_url("https://override.example.com"),
        )
        .unwrap();
        assert!(code.contains("https://override.example.com"));
    }

    #[test]
    fn validate_code_rejects_invalid_code() {
        let invalid_tokens = quote! { let x = };
        assert!(matches!(
            validate_code(&invalid_tokens),
            Err(GeneratorError::CodeGenError(_))
        ));
    }

    #[test]
    fn format_code_prepends_notice() {
        let file = validate_code(&quote! { pub struct A; }).unwrap();
        let formatted = format_code(&file);
        assert!(formatted.starts_with("// This code was automatically generated by swagger2sdk."));
        assert!(formatted.contains("pub struct A;"));
    }

    #[test]
    fn write_atomic_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested/deep/test.rs");

        write_atomic(&file_path, "// Nested content").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// Nested content");
    }

    #[test]
    fn write_atomic_overwrites_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("existing.rs");
        fs::write(&file_path, "// Old content").unwrap();

        write_atomic(&file_path, "// New content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// New content");
        assert!(!file_path.with_extension("tmp").exists());
    }

    #[test]
    fn generate_and_write_creates_client_file() {
        let temp_dir = TempDir::new().unwrap();
        let doc = parse(ITEMS_SPEC);
        let config = GeneratorConfig::new("ItemsApi")
            .with_auth(AuthStrategy::Bearer)
            .with_output_dir(temp_dir.path());

        let code = generate_and_write(&doc, &config, &mut |_| {}).unwrap();

        let written = fs::read_to_string(temp_dir.path().join("ItemsApi.rs")).unwrap();
        assert_eq!(written, code);
        assert!(!temp_dir.path().join("Cargo.toml").exists());
    }

    #[test]
    fn generate_and_write_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let doc = parse(ITEMS_SPEC);
        let config = GeneratorConfig::new("ItemsApi")
            .with_output_dir(temp_dir.path())
            .with_dry_run(true)
            .with_manifest(true);

        let code = generate_and_write(&doc, &config, &mut |_| {}).unwrap();

        assert!(code.contains("pub struct ItemsApi"));
        assert!(!temp_dir.path().join("ItemsApi.rs").exists());
        assert!(!temp_dir.path().join("Cargo.toml").exists());
    }

    #[test]
    fn manifest_is_written_for_rust_only() {
        let doc = parse(ITEMS_SPEC);

        let rust_dir = TempDir::new().unwrap();
        let config = GeneratorConfig::new("ItemsApi")
            .with_output_dir(rust_dir.path())
            .with_manifest(true);
        generate_and_write(&doc, &config, &mut |_| {}).unwrap();
        assert!(rust_dir.path().join("Cargo.toml").exists());

        let py_dir = TempDir::new().unwrap();
        let config = config
            .with_output_dir(py_dir.path())
            .with_target(TargetLanguage::Python);
        generate_and_write(&doc, &config, &mut |_| {}).unwrap();
        assert!(py_dir.path().join("ItemsApi.py").exists());
        assert!(!py_dir.path().join("Cargo.toml").exists());
    }

    #[test]
    #[tracing_test::traced_test]
    fn logs_run_summary() {
        let temp_dir = TempDir::new().unwrap();
        let doc = parse(ITEMS_SPEC);
        let config = GeneratorConfig::new("ItemsApi").with_output_dir(temp_dir.path());
        generate_and_write(&doc, &config, &mut |_| {}).unwrap();

        assert!(logs_contain("Generated client"));
        assert!(logs_contain("Assembled client"));
    }
}
