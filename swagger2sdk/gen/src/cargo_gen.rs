//! Cargo.toml generation for a generated Rust client.
//!
//! The generated client is a single file. With `--manifest` a package
//! manifest is written next to it so the client builds as its own crate,
//! with the file as the library root.

use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::output::write_atomic;

/// Package name for a client: lower-case, `_` replaced with `-`.
pub fn package_name(sdk_name: &str) -> String {
    sdk_name.to_ascii_lowercase().replace('_', "-")
}

/// Renders the manifest for a client whose source is `{sdk_name}.rs`.
pub fn cargo_toml(sdk_name: &str) -> String {
    let package = package_name(sdk_name);
    let lib_name = package.replace('-', "_");
    format!(
        r#"# This file was automatically generated by swagger2sdk. Do not edit manually.

[package]
name = "{package}"
version = "0.1.0"
edition = "2024"

[lib]
name = "{lib_name}"
path = "{sdk_name}.rs"

[dependencies]
reqwest = {{ version = "0.12", features = ["json"] }}
serde = {{ version = "1.0", features = ["derive"] }}
serde_json = "1.0"
thiserror = "2.0"
"#
    )
}

/// Writes `Cargo.toml` into `dir`, or prints it when `dry_run` is set.
///
/// Returns the manifest text.
///
/// ## Errors
///
/// Returns [`crate::errors::GeneratorError::WriteError`] if the file cannot
/// be written.
pub fn write_cargo_toml(dir: &Path, sdk_name: &str, dry_run: bool) -> Result<String> {
    let content = cargo_toml(sdk_name);
    let path = dir.join("Cargo.toml");

    if dry_run {
        println!("=== {} ===\n{}", path.display(), content);
    } else {
        write_atomic(&path, &content)?;
        info!(path = %path.display(), "Wrote client manifest");
    }

    Ok(content)
}
