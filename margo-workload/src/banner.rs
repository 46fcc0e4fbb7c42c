//! Fixed banners printed around the readings.

use std::io::{self, Write};

/// First line of every run
pub const PRODUCT_BANNER: &str = "🦭 Margo WASM Demo - Hello from WebAssembly!";

/// Underline for the product banner (40 `=`)
pub const SEPARATOR: &str = "========================================";

/// Target the workload is packaged for
pub const RUNTIME_LABEL: &str = "wasm32-wasi";

/// Toolchain named on the build line
pub const TOOLCHAIN: &str = "Rust";

/// Package version baked in at compile time
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name baked in at compile time
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Printed once all readings are out
pub const SUCCESS_BANNER: &str = "✓ WASM workload completed successfully";

/// Footprint annotation printed after the success banner. Describes the
/// sandbox the workload is shipped in; nothing here measures it.
pub const FOOTPRINT_NOTE: &str = "Memory footprint: <10 MB (WASM sandbox)";

const _: () = assert!(SEPARATOR.len() == 40);

/// The `Build:` line, e.g. `Build: Rust 0.1.0 (margo-workload)`
#[must_use]
pub fn build_line() -> String {
    format!("Build: {TOOLCHAIN} {PACKAGE_VERSION} ({PACKAGE_NAME})")
}

/// Write the four identification lines.
///
/// # Errors
///
/// Propagates any write failure of `out`.
pub fn write_identification<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{PRODUCT_BANNER}")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Runtime: {RUNTIME_LABEL}")?;
    writeln!(out, "{}", build_line())
}

/// Write the success banner and the footprint annotation.
///
/// # Errors
///
/// Propagates any write failure of `out`.
pub fn write_completion<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{SUCCESS_BANNER}")?;
    writeln!(out, "{FOOTPRINT_NOTE}")
}
