//! Template assembly and artifact output.
//!
//! Templates are opaque text with textual insertion markers; the assembler
//! knows nothing about the surrounding Java beyond substring replacement.
//! Artifacts always overwrite whatever is at their output path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::synth::GeneratedMethod;

/// Marker replaced by the test class name.
pub const NAME_MARKER: &str = "INSERT NAME HERE";
/// Marker replaced by the joined test method sources.
pub const TESTS_MARKER: &str = "INSERT TESTS HERE";
/// Marker replaced by the suite's list of test class references.
pub const SUITE_MARKER: &str = "INSERT TEST CLASSES HERE";

/// Render a marker name as it appears in template text.
pub fn marker(name: &str) -> String {
    format!("<<<{name}>>>")
}

/// Read a template file; a missing or unreadable template aborts the run.
pub fn load_template(path: &Path) -> Result<String, GenError> {
    fs::read_to_string(path).map_err(|e| GenError::Template {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Substitute the class name and method sources into the class template.
/// Methods are joined with one blank line, preserving input order.
pub fn assemble_class(
    template: &str,
    class_name: &str,
    methods: &[GeneratedMethod],
) -> String {
    let joined = methods
        .iter()
        .map(|m| m.source.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    template
        .replace(&marker(NAME_MARKER), class_name)
        .replace(&marker(TESTS_MARKER), &joined)
}

/// Substitute the list of `<ClassName>.class` references into the suite
/// template, preserving category order.
pub fn assemble_suite(template: &str, class_names: &[&str]) -> String {
    let refs = class_names
        .iter()
        .map(|c| format!("{c}.class"))
        .collect::<Vec<_>>()
        .join(",\n\t");
    template.replace(&marker(SUITE_MARKER), &refs)
}

/// Write one artifact under the output directory, creating the directory
/// first if absent and overwriting any existing file.
pub fn write_artifact(
    out_dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, GenError> {
    fs::create_dir_all(out_dir).map_err(|e| GenError::WriteArtifact {
        path: out_dir.to_path_buf(),
        source: e,
    })?;
    let path = out_dir.join(file_name);
    fs::write(&path, contents).map_err(|e| GenError::WriteArtifact {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}
