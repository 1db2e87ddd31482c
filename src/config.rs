//! Run configuration.
//!
//! Every path and flag for one generation run lives in `GenConfig`. It is
//! built once from the command line, threaded by reference through the
//! scanner, synthesizer, and assembler, and never mutated afterwards.

use std::path::PathBuf;

use crate::corpus::slash_path;

/// Default root directory of the test program corpus.
pub const DEFAULT_PROGRAMS_DIR: &str = "programs";
/// Default directory the generated test sources are written to.
pub const DEFAULT_OUT_DIR: &str = "test";
/// Default test class template.
pub const DEFAULT_CLASS_TEMPLATE: &str = "templates/GoLiteTestTemplate.java";
/// Default test suite template.
pub const DEFAULT_SUITE_TEMPLATE: &str = "templates/GoLiteTestSuiteTemplate.java";
/// Path to the reference compiler on the course teaching servers.
pub const DEFAULT_REF_COMPILER: &str = "/home/course/cs520/golitec";

/// Name of the temporary file generated code-generation tests compile into.
pub const TEMP_GEN_FILE: &str = ".tmp.golite.py";

/// Which compiler the generated tests exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// The GoLite compiler under development.
    UnderTest,
    /// The trusted reference compiler, invoked per phase as a subprocess.
    Reference,
}

/// Immutable configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub programs_dir: PathBuf,
    pub out_dir: PathBuf,
    pub class_template: PathBuf,
    pub suite_template: PathBuf,
    pub ignore_file: Option<PathBuf>,
    pub mode: TargetMode,
    pub ref_compiler: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            programs_dir: PathBuf::from(DEFAULT_PROGRAMS_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            class_template: PathBuf::from(DEFAULT_CLASS_TEMPLATE),
            suite_template: PathBuf::from(DEFAULT_SUITE_TEMPLATE),
            ignore_file: None,
            mode: TargetMode::UnderTest,
            ref_compiler: PathBuf::from(DEFAULT_REF_COMPILER),
        }
    }
}

impl GenConfig {
    /// Path of the temporary generated-code file, as embedded in generated
    /// test sources. Always forward-slash separated.
    pub fn temp_gen_path(&self) -> String {
        format!("{}/{}", slash_path(&self.out_dir), TEMP_GEN_FILE)
    }

    /// Reference compiler path as embedded in generated test sources.
    pub fn ref_compiler_str(&self) -> String {
        slash_path(&self.ref_compiler)
    }
}
