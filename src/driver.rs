//! Generation driver.
//!
//! Runs the fixed category sequence — syntax, pretty printing, typing, code
//! generation — scanning, synthesizing, and assembling strictly in order,
//! then writes the aggregate suite from the classes actually built. Single
//! threaded by design; each item's synthesis is independent of every other.

use serde::Serialize;
use tracing::{debug, info};

use crate::assemble;
use crate::config::{GenConfig, TargetMode};
use crate::corpus::{self, Category, IgnoreSet};
use crate::error::GenError;
use crate::synth;

/// File name of the generated aggregate suite.
pub const SUITE_FILE: &str = "GoLiteTestSuite.java";

/// Machine-readable summary of one generation run.
#[derive(Debug, Serialize)]
pub struct GenReport {
    pub classes: Vec<ClassSummary>,
    pub suite: String,
}

#[derive(Debug, Serialize)]
pub struct ClassSummary {
    pub name: String,
    pub methods: usize,
    pub path: String,
}

/// Run one full generation pass over the corpus.
pub fn run(cfg: &GenConfig) -> Result<GenReport, GenError> {
    if cfg.mode == TargetMode::Reference && !cfg.ref_compiler.exists() {
        return Err(GenError::RefCompilerMissing {
            path: cfg.ref_compiler.clone(),
        });
    }
    if !cfg.programs_dir.is_dir() {
        return Err(GenError::CorpusRoot {
            path: cfg.programs_dir.clone(),
        });
    }

    let ignore = IgnoreSet::load(cfg.ignore_file.as_deref())?;
    let class_template = assemble::load_template(&cfg.class_template)?;
    let suite_template = assemble::load_template(&cfg.suite_template)?;

    let mut classes = Vec::new();
    let mut class_names = Vec::new();

    for category in Category::ALL {
        if cfg.mode == TargetMode::Reference && !category.in_reference_mode() {
            debug!(class = category.class_name(), "skipped in reference mode");
            continue;
        }

        info!("creating {}...", category.description());

        let mut methods = Vec::new();
        for sub in category.source_dirs() {
            let dir = cfg.programs_dir.join(sub);
            for item in corpus::scan(&dir, category, &ignore)? {
                methods.push(synth::synthesize(&item, cfg));
            }
        }

        let source = assemble::assemble_class(&class_template, category.class_name(), &methods);
        let file_name = format!("{}.java", category.class_name());
        let path = assemble::write_artifact(&cfg.out_dir, &file_name, &source)?;

        debug!(
            class = category.class_name(),
            methods = methods.len(),
            "wrote test class"
        );

        classes.push(ClassSummary {
            name: category.class_name().to_string(),
            methods: methods.len(),
            path: corpus::slash_path(&path),
        });
        class_names.push(category.class_name());
    }

    let suite_source = assemble::assemble_suite(&suite_template, &class_names);
    let suite_path = assemble::write_artifact(&cfg.out_dir, SUITE_FILE, &suite_source)?;
    info!(path = %suite_path.display(), "wrote test suite");

    Ok(GenReport {
        classes,
        suite: corpus::slash_path(&suite_path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const CLASS_TEMPLATE: &str =
        "public class <<<INSERT NAME HERE>>> {\n\n<<<INSERT TESTS HERE>>>\n\n}\n";
    const SUITE_TEMPLATE: &str =
        "@Suite.SuiteClasses({\n\t<<<INSERT TEST CLASSES HERE>>>\n})\npublic class GoLiteTestSuite {\n}\n";

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn fixture(root: &Path) -> GenConfig {
        write(&root.join("programs/valid/syntax/hello.go"), "package main\n");
        write(
            &root.join("programs/invalid/syntax/badtoken.go"),
            "package $\n",
        );
        write(&root.join("templates/class.java"), CLASS_TEMPLATE);
        write(&root.join("templates/suite.java"), SUITE_TEMPLATE);

        GenConfig {
            programs_dir: root.join("programs"),
            out_dir: root.join("test"),
            class_template: root.join("templates/class.java"),
            suite_template: root.join("templates/suite.java"),
            ..GenConfig::default()
        }
    }

    #[test]
    fn builds_all_six_classes_under_test() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = fixture(dir.path());

        let report = run(&cfg).unwrap();
        assert_eq!(report.classes.len(), 6);
        assert_eq!(report.classes[0].name, "GoLiteValidSyntaxTest");
        assert_eq!(report.classes[0].methods, 1);
        assert_eq!(report.classes[1].name, "GoLiteInvalidSyntaxTest");
        assert_eq!(report.classes[1].methods, 1);

        let valid = fs::read_to_string(dir.path().join("test/GoLiteValidSyntaxTest.java")).unwrap();
        assert!(valid.contains("public class GoLiteValidSyntaxTest"));
        assert!(valid.contains("public void helloTest()"));

        let suite = fs::read_to_string(dir.path().join("test/GoLiteTestSuite.java")).unwrap();
        for category in Category::ALL {
            assert!(suite.contains(&format!("{}.class", category.class_name())));
        }
    }

    #[test]
    fn missing_corpus_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GenConfig {
            programs_dir: dir.path().join("nowhere"),
            ..fixture(dir.path())
        };
        assert!(matches!(run(&cfg), Err(GenError::CorpusRoot { .. })));
    }

    #[test]
    fn missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GenConfig {
            class_template: dir.path().join("nowhere/class.java"),
            ..fixture(dir.path())
        };
        assert!(matches!(run(&cfg), Err(GenError::Template { .. })));
    }

    #[test]
    fn reference_mode_requires_reference_compiler() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GenConfig {
            mode: TargetMode::Reference,
            ref_compiler: dir.path().join("no-such-golitec"),
            ..fixture(dir.path())
        };
        assert!(matches!(run(&cfg), Err(GenError::RefCompilerMissing { .. })));
    }

    #[test]
    fn reference_mode_drops_pretty_and_codegen() {
        let dir = tempfile::tempdir().unwrap();
        let golitec = dir.path().join("golitec");
        fs::write(&golitec, "").unwrap();
        let cfg = GenConfig {
            mode: TargetMode::Reference,
            ref_compiler: golitec,
            ..fixture(dir.path())
        };

        let report = run(&cfg).unwrap();
        let names: Vec<&str> = report.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "GoLiteValidSyntaxTest",
                "GoLiteInvalidSyntaxTest",
                "GoLiteValidTypingTest",
                "GoLiteInvalidTypingTest",
            ]
        );

        let suite = fs::read_to_string(dir.path().join("test/GoLiteTestSuite.java")).unwrap();
        assert!(!suite.contains("GoLitePrettyPrintTest"));
        assert!(!suite.contains("GoLiteCodeGenerationTest"));
    }

    #[test]
    fn generation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = fixture(dir.path());

        run(&cfg).unwrap();
        let first = fs::read_to_string(dir.path().join("test/GoLiteValidSyntaxTest.java")).unwrap();
        run(&cfg).unwrap();
        let second = fs::read_to_string(dir.path().join("test/GoLiteValidSyntaxTest.java")).unwrap();
        assert_eq!(first, second);
    }
}
