//! Test-method synthesis.
//!
//! Produces the Java source of one `@Test` method per corpus item. The body
//! depends on the item's category and the target mode:
//!
//! - must-succeed categories assert the check operation returns true (or,
//!   in reference mode, that the reference compiler reports the success
//!   token for the matching phase)
//! - must-fail categories assert the check throws one of the category's
//!   acceptable failure kinds, built as a fallback tree over the single-kind
//!   `isInstanceOf` primitive
//! - code generation compiles to a temporary file, runs it under the Python
//!   interpreter, and diffs captured output against the golden file, with
//!   cleanup guaranteed by a `finally` block
//!
//! Synthesis itself never fails; all failure semantics described here are
//! properties of the generated test code.

use crate::config::{GenConfig, TargetMode};
use crate::corpus::{Category, CorpusItem, Provenance};
use crate::ident;

/// The only status string the reference compiler reports for a passing
/// phase. Anything else is a failure, regardless of diagnostic content.
pub const SUCCESS_TOKEN: &str = "OK";

/// Reference compiler phase names.
const PHASE_PARSE: &str = "parse";
const PHASE_TYPECHECK: &str = "typecheck";

/// `throws` clause for methods that only drive the compiler under test.
const BASE_THROWS: &str = "IOException, LexerException, ParserException";
/// `throws` clause for methods that wait on a subprocess.
const SUBPROCESS_THROWS: &str = "IOException, InterruptedException, LexerException, ParserException";

/// One synthesized test method.
#[derive(Debug, Clone)]
pub struct GeneratedMethod {
    pub name: String,
    pub source: String,
}

// ---------------------------------------------------------------------------
// Disjunctive failure assertions
// ---------------------------------------------------------------------------

/// Assertion tree for "the check fails with one of these kinds".
///
/// The underlying assertion primitive only matches a single kind per
/// invocation, so a disjunction over n kinds is built as a chain of
/// fallbacks: try the first kind, and on assertion failure fall back to the
/// rest. The serialized form is n-1 nested try/catch blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionAssert {
    /// Assert the failure is exactly this kind.
    Single(&'static str),
    /// Try `first`; on assertion failure, fall back to `rest`.
    Fallback {
        first: &'static str,
        rest: Box<ExceptionAssert>,
    },
}

impl ExceptionAssert {
    /// Build the fallback chain for an ordered, non-empty list of kinds.
    pub fn build(first: &'static str, rest: &[&'static str]) -> Self {
        match rest.split_first() {
            None => ExceptionAssert::Single(first),
            Some((next, tail)) => ExceptionAssert::Fallback {
                first,
                rest: Box::new(ExceptionAssert::build(next, tail)),
            },
        }
    }

    /// Nesting depth of the serialized form: number of kinds minus one.
    pub fn depth(&self) -> usize {
        match self {
            ExceptionAssert::Single(_) => 0,
            ExceptionAssert::Fallback { rest, .. } => 1 + rest.depth(),
        }
    }

    /// Serialize to nested Java try/catch blocks at the given tab depth.
    ///
    /// Catch variables are numbered by the count of kinds still in play
    /// below each level (`e2`, `e1`, ... for a three-kind chain).
    fn render(&self, check: &str, path: &str, tabs: usize) -> String {
        let t = "\t".repeat(tabs);
        match self {
            ExceptionAssert::Single(kind) => format!(
                "{t}assertThatThrownBy(() -> {{ {check}(\"{path}\"); }}).isInstanceOf({kind}.class);"
            ),
            ExceptionAssert::Fallback { first, rest } => format!(
                "{t}try {{\n\
                 {t}\tassertThatThrownBy(() -> {{ {check}(\"{path}\"); }}).isInstanceOf({first}.class);\n\
                 {t}}} catch (AssertionError e{n}) {{\n\
                 {nested}\n\
                 {t}}}",
                n = self.depth(),
                nested = rest.render(check, path, tabs + 1),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Body builders
// ---------------------------------------------------------------------------

fn assert_true_body(check: &str, path: &str, tabs: usize) -> String {
    let t = "\t".repeat(tabs);
    format!("{t}assertTrue({check}(\"{path}\"));")
}

fn exception_body(check: &str, kinds: &'static [&'static str], path: &str, tabs: usize) -> String {
    match kinds.split_first() {
        None => assert_true_body(check, path, tabs),
        Some((first, rest)) => ExceptionAssert::build(first, rest).render(check, path, tabs),
    }
}

fn reference_body(ref_compiler: &str, path: &str, phase: &str, equals: bool, tabs: usize) -> String {
    let t = "\t".repeat(tabs);
    let assert = if equals { "assertEquals" } else { "assertNotEquals" };
    format!(
        "{t}{assert}(\"{SUCCESS_TOKEN}\", runReferenceCompiler(\"{ref_compiler}\", \"{path}\", \"{phase}\"));"
    )
}

/// Body of a code-generation test.
///
/// Compiles the program to a temporary file, runs it under the Python
/// interpreter, captures stdout then stderr line by line, reads the golden
/// file the same way, and asserts equality. The `finally` block releases
/// the reader and deletes the temporary file on every exit path, including
/// assertion failure and process-launch failure.
fn codegen_body(prog_path: &str, golden_path: &str, temp_gen_path: &str, tabs: usize) -> String {
    let t = "\t".repeat(tabs);
    let t1 = "\t".repeat(tabs + 1);
    let mut body = String::new();

    body.push_str(&format!("{t}File genProgF = new File(\"{temp_gen_path}\");\n"));
    body.push_str(&format!("{t}BufferedReader r = null;\n"));
    body.push_str(&format!("{t}try {{\n"));

    body.push_str(&format!(
        "{t1}generateCode(\"{prog_path}\", \"{temp_gen_path}\");\n\n"
    ));

    body.push_str(&format!(
        "{t1}ProcessBuilder pb = new ProcessBuilder(\"python\", \"{temp_gen_path}\");\n"
    ));
    body.push_str(&format!("{t1}Process p = pb.start();\n"));
    body.push_str(&format!("{t1}p.waitFor();\n\n"));

    body.push_str(&format!("{t1}String gen = \"\";\n\n"));

    body.push_str(&format!(
        "{t1}r = new BufferedReader(new InputStreamReader(p.getInputStream()));\n"
    ));
    body.push_str(&format!("{t1}String s;\n"));
    body.push_str(&format!(
        "{t1}while ((s = r.readLine()) != null) gen += s + \"\\n\";\n"
    ));
    body.push_str(&format!("{t1}r.close();\n\n"));

    body.push_str(&format!(
        "{t1}r = new BufferedReader(new InputStreamReader(p.getErrorStream()));\n"
    ));
    body.push_str(&format!(
        "{t1}while ((s = r.readLine()) != null) gen += s + \"\\n\";\n"
    ));
    body.push_str(&format!("{t1}r.close();\n\n"));

    body.push_str(&format!(
        "{t1}File exOutF = new File(\"{golden_path}\");\n\n"
    ));

    body.push_str(&format!(
        "{t1}r = new BufferedReader(new FileReader(exOutF));\n"
    ));
    body.push_str(&format!("{t1}String ex = \"\";\n"));
    body.push_str(&format!(
        "{t1}while ((s = r.readLine()) != null) ex += s + \"\\n\";\n\n"
    ));

    body.push_str(&format!("{t1}assertEquals(ex, gen);\n"));

    body.push_str(&format!("{t}}} finally {{\n"));
    body.push_str(&format!("{t1}if (r != null) r.close();\n"));
    body.push_str(&format!("{t1}genProgF.delete();\n"));
    body.push_str(&format!("{t}}}"));

    body
}

// ---------------------------------------------------------------------------
// Method synthesis
// ---------------------------------------------------------------------------

/// Synthesize the test method for one corpus item.
pub fn synthesize(item: &CorpusItem, cfg: &GenConfig) -> GeneratedMethod {
    let name = match item.provenance {
        Provenance::OwnGroup => ident::method_name(item.stem()),
        Provenance::OtherGroup => ident::group_method_name(item.parent_dir(), item.stem()),
    };

    let reference = cfg.mode == TargetMode::Reference;
    let ref_compiler = cfg.ref_compiler_str();

    let body = match item.category {
        Category::ValidSyntax if reference => {
            reference_body(&ref_compiler, &item.path, PHASE_PARSE, true, 2)
        }
        Category::ValidSyntax => assert_true_body("parse", &item.path, 2),
        Category::InvalidSyntax if reference => {
            reference_body(&ref_compiler, &item.path, PHASE_PARSE, false, 2)
        }
        Category::InvalidSyntax => {
            exception_body("parse", item.category.acceptable_failures(), &item.path, 2)
        }
        Category::PrettyPrint => assert_true_body("checkPrettyInvariant", &item.path, 2),
        Category::ValidTyping if reference => {
            reference_body(&ref_compiler, &item.path, PHASE_TYPECHECK, true, 2)
        }
        Category::ValidTyping => assert_true_body("typeCheck", &item.path, 2),
        Category::InvalidTyping if reference => {
            reference_body(&ref_compiler, &item.path, PHASE_TYPECHECK, false, 2)
        }
        Category::InvalidTyping => {
            exception_body("typeCheck", item.category.acceptable_failures(), &item.path, 2)
        }
        Category::CodeGen => codegen_body(
            &item.path,
            &item.golden_path(),
            &cfg.temp_gen_path(),
            2,
        ),
    };

    let throws = if reference || item.category.spawns_interpreter() {
        SUBPROCESS_THROWS
    } else {
        BASE_THROWS
    };

    let source = format!(
        "\t@Test\n\tpublic void {name}() throws {throws} {{\n{body}\n\t}}"
    );

    GeneratedMethod { name, source }
}
