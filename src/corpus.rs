//! Corpus discovery.
//!
//! Recursively enumerates the `.go` programs under a category's source
//! directories, tags each with its category and provenance, and filters out
//! anything listed in the test ignore file. Entries are sorted within each
//! directory so one corpus snapshot always scans in the same order.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::GenError;

/// File extension marking a corpus source program.
pub const SOURCE_EXT: &str = "go";
/// File extension of the golden output file next to a code-generation test.
pub const GOLDEN_EXT: &str = "out";
/// Path segment marking programs contributed by other groups.
pub const OTHER_GROUPS_DIR: &str = "other_groups";

/// The kind of check a corpus item exercises.
///
/// Each variant fixes the check operation the generated method invokes, the
/// ordered set of acceptable failure kinds (empty for must-succeed
/// categories), the corpus directories that feed it, and the name of the
/// test class it produces. The enum is closed: there is no way to hand the
/// synthesizer a category it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ValidSyntax,
    InvalidSyntax,
    PrettyPrint,
    ValidTyping,
    InvalidTyping,
    CodeGen,
}

impl Category {
    /// All categories, in generation and suite order: syntax before typing
    /// before code generation.
    pub const ALL: [Category; 6] = [
        Category::ValidSyntax,
        Category::InvalidSyntax,
        Category::PrettyPrint,
        Category::ValidTyping,
        Category::InvalidTyping,
        Category::CodeGen,
    ];

    /// Name of the generated test class.
    pub fn class_name(self) -> &'static str {
        match self {
            Category::ValidSyntax => "GoLiteValidSyntaxTest",
            Category::InvalidSyntax => "GoLiteInvalidSyntaxTest",
            Category::PrettyPrint => "GoLitePrettyPrintTest",
            Category::ValidTyping => "GoLiteValidTypingTest",
            Category::InvalidTyping => "GoLiteInvalidTypingTest",
            Category::CodeGen => "GoLiteCodeGenerationTest",
        }
    }

    /// Progress-log description of the category.
    pub fn description(self) -> &'static str {
        match self {
            Category::ValidSyntax => "parser tests for syntactically valid programs",
            Category::InvalidSyntax => "parser tests for syntactically invalid programs",
            Category::PrettyPrint => "pretty printer tests",
            Category::ValidTyping => "type checker tests for well-typed programs",
            Category::InvalidTyping => "type checker tests for ill-typed programs",
            Category::CodeGen => "code generator tests",
        }
    }

    /// Corpus directories feeding the category, relative to the programs
    /// root.
    pub fn source_dirs(self) -> &'static [&'static str] {
        match self {
            Category::ValidSyntax | Category::PrettyPrint => {
                &["valid/actual", "valid/general", "valid/syntax"]
            }
            Category::InvalidSyntax => &["invalid/syntax"],
            Category::ValidTyping => &["valid/actual", "valid/general", "valid/type"],
            Category::InvalidTyping => &["invalid/type"],
            Category::CodeGen => &["valid/actual", "valid/gen"],
        }
    }

    /// Ordered list of failure kinds the generated test accepts. Empty for
    /// must-succeed categories.
    pub fn acceptable_failures(self) -> &'static [&'static str] {
        match self {
            Category::InvalidSyntax => &["LexerException", "ParserException", "WeederException"],
            Category::InvalidTyping => &["SymbolTableException", "TypeCheckException"],
            _ => &[],
        }
    }

    /// Whether the category exists when targeting the reference compiler.
    /// Pretty printing and code generation only make sense for the compiler
    /// under development.
    pub fn in_reference_mode(self) -> bool {
        !matches!(self, Category::PrettyPrint | Category::CodeGen)
    }

    /// Whether the generated test spawns an external interpreter process.
    pub fn spawns_interpreter(self) -> bool {
        matches!(self, Category::CodeGen)
    }
}

/// Where a corpus item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    OwnGroup,
    OtherGroup,
}

/// One source program discovered during the scan.
///
/// `path` is the exact forward-slash string embedded in generated test
/// sources and matched against the ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusItem {
    pub path: String,
    pub category: Category,
    pub provenance: Provenance,
}

impl CorpusItem {
    /// Filename stem, with the source extension stripped.
    pub fn stem(&self) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        strip_source_ext(name)
    }

    /// Name of the immediate parent directory.
    pub fn parent_dir(&self) -> &str {
        let mut parts = self.path.rsplit('/');
        parts.next();
        parts.next().unwrap_or("")
    }

    /// Path of the sibling golden output file for code-generation tests.
    pub fn golden_path(&self) -> String {
        format!("{}.{GOLDEN_EXT}", strip_source_ext(&self.path))
    }
}

/// Strip the `.go` source extension. The scan only admits paths carrying
/// it, so for corpus items this always strips.
fn strip_source_ext(name: &str) -> &str {
    name.strip_suffix(SOURCE_EXT)
        .and_then(|n| n.strip_suffix('.'))
        .unwrap_or(name)
}

/// Render a path with forward slashes regardless of platform, matching the
/// separator convention of the corpus and the ignore file.
pub fn slash_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

// ---------------------------------------------------------------------------
// Ignore set
// ---------------------------------------------------------------------------

/// Set of corpus paths excluded from generation, loaded once per run.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    paths: HashSet<String>,
}

impl IgnoreSet {
    /// Load the ignore file, if one was given.
    ///
    /// A missing file is an empty set, not an error; a file that exists but
    /// cannot be read aborts the run.
    pub fn load(path: Option<&Path>) -> Result<Self, GenError> {
        let Some(path) = path else {
            info!("no test ignore file");
            return Ok(Self::default());
        };

        match fs::read_to_string(path) {
            Ok(content) => {
                let set = Self::parse(&content);
                info!(path = %path.display(), entries = set.len(), "read test ignore file");
                Ok(set)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no test ignore file at path");
                Ok(Self::default())
            }
            Err(e) => Err(GenError::Ignore {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Parse ignore file contents: one path per line, whitespace trimmed,
    /// blank lines and `#` comments skipped.
    pub fn parse(content: &str) -> Self {
        let paths = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { paths }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

/// Enumerate the corpus items under one source directory.
///
/// A directory that does not exist yields no items — not every corpus
/// populates every category. A directory that exists but cannot be read is
/// a fatal configuration error.
pub fn scan(dir: &Path, category: Category, ignore: &IgnoreSet) -> Result<Vec<CorpusItem>, GenError> {
    let mut items = Vec::new();
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "corpus directory absent, skipping");
        return Ok(items);
    }
    walk(dir, category, ignore, &mut items)?;
    Ok(items)
}

fn walk(
    dir: &Path,
    category: Category,
    ignore: &IgnoreSet,
    items: &mut Vec<CorpusItem>,
) -> Result<(), GenError> {
    let read_err = |e: io::Error| GenError::CorpusDir {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(read_err)?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk(&path, category, ignore, items)?;
        } else if path.extension().is_some_and(|e| e == SOURCE_EXT) {
            let rel = slash_path(&path);
            if ignore.contains(&rel) {
                debug!(path = %rel, "ignoring corpus item");
                continue;
            }
            let provenance = provenance_of(&rel);
            items.push(CorpusItem {
                path: rel,
                category,
                provenance,
            });
        }
    }

    Ok(())
}

fn provenance_of(path: &str) -> Provenance {
    let dir = match path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => return Provenance::OwnGroup,
    };
    if dir.split('/').any(|seg| seg == OTHER_GROUPS_DIR) {
        Provenance::OtherGroup
    } else {
        Provenance::OwnGroup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_set_skips_comments_and_blanks() {
        let set = IgnoreSet::parse(
            "# a comment\n\nprograms/valid/syntax/a.go\n  programs/invalid/type/b.go  \n",
        );
        assert_eq!(set.len(), 2);
        assert!(set.contains("programs/valid/syntax/a.go"));
        assert!(set.contains("programs/invalid/type/b.go"));
        assert!(!set.contains("# a comment"));
    }

    #[test]
    fn ignore_set_missing_file_is_empty() {
        let set = IgnoreSet::load(Some(Path::new("no/such/ignore.txt"))).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn provenance_from_path_segment() {
        assert_eq!(
            provenance_of("programs/valid/syntax/other_groups/team07/a.go"),
            Provenance::OtherGroup
        );
        assert_eq!(
            provenance_of("programs/valid/syntax/a.go"),
            Provenance::OwnGroup
        );
        // The segment must match exactly; a file merely named after it does
        // not change provenance.
        assert_eq!(provenance_of("other_groups.go"), Provenance::OwnGroup);
    }

    #[test]
    fn item_accessors() {
        let item = CorpusItem {
            path: "programs/valid/gen/sum.go".to_string(),
            category: Category::CodeGen,
            provenance: Provenance::OwnGroup,
        };
        assert_eq!(item.stem(), "sum");
        assert_eq!(item.parent_dir(), "gen");
        assert_eq!(item.golden_path(), "programs/valid/gen/sum.out");

        // Only the final source extension is stripped.
        let dotted = CorpusItem {
            path: "programs/valid/gen/v1.2.go".to_string(),
            category: Category::CodeGen,
            provenance: Provenance::OwnGroup,
        };
        assert_eq!(dotted.stem(), "v1.2");
        assert_eq!(dotted.golden_path(), "programs/valid/gen/v1.2.out");
    }

    #[test]
    fn ignore_set_unconfigured_is_empty() {
        let set = IgnoreSet::load(None).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("syntax");
        std::fs::create_dir_all(root.join("nested")).unwrap();
        std::fs::write(root.join("b.go"), "").unwrap();
        std::fs::write(root.join("a.go"), "").unwrap();
        std::fs::write(root.join("notes.txt"), "").unwrap();
        std::fs::write(root.join("nested").join("c.go"), "").unwrap();

        let items = scan(&root, Category::ValidSyntax, &IgnoreSet::default()).unwrap();
        let stems: Vec<&str> = items.iter().map(|i| i.stem()).collect();
        assert_eq!(stems, ["a", "b", "c"]);
        assert!(items.iter().all(|i| i.category == Category::ValidSyntax));
    }

    #[test]
    fn scan_missing_dir_is_empty() {
        let items = scan(
            Path::new("no/such/dir"),
            Category::ValidSyntax,
            &IgnoreSet::default(),
        )
        .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn scan_applies_ignore_set() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("syntax");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("keep.go"), "").unwrap();
        std::fs::write(root.join("drop.go"), "").unwrap();

        let drop_path = slash_path(&root.join("drop.go"));
        let ignore = IgnoreSet::parse(&drop_path);

        let items = scan(&root, Category::ValidSyntax, &ignore).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].stem(), "keep");
    }
}
