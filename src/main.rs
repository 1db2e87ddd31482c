use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use golite_testgen::config::{
    DEFAULT_CLASS_TEMPLATE, DEFAULT_OUT_DIR, DEFAULT_PROGRAMS_DIR, DEFAULT_REF_COMPILER,
    DEFAULT_SUITE_TEMPLATE,
};
use golite_testgen::{driver, GenConfig, TargetMode};

#[derive(Parser)]
#[command(name = "golite-testgen")]
#[command(about = "Generates JUnit tests for the GoLite compiler from the program corpus")]
#[command(version)]
struct Cli {
    /// Root directory of the test program corpus
    #[arg(long, default_value = DEFAULT_PROGRAMS_DIR)]
    programs: PathBuf,

    /// Directory the generated test sources are written to
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Test class template
    #[arg(long, default_value = DEFAULT_CLASS_TEMPLATE)]
    class_template: PathBuf,

    /// Test suite template
    #[arg(long, default_value = DEFAULT_SUITE_TEMPLATE)]
    suite_template: PathBuf,

    /// Path to a test ignore file, listing corpus paths to skip
    #[arg(short, long)]
    ignore: Option<PathBuf>,

    /// Generate tests against the reference compiler
    #[arg(short = 'r', long = "ref")]
    reference: bool,

    /// Path to the reference compiler binary
    #[arg(long, default_value = DEFAULT_REF_COMPILER)]
    ref_compiler: PathBuf,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let cfg = GenConfig {
        programs_dir: cli.programs,
        out_dir: cli.out,
        class_template: cli.class_template,
        suite_template: cli.suite_template,
        ignore_file: cli.ignore,
        mode: if cli.reference {
            TargetMode::Reference
        } else {
            TargetMode::UnderTest
        },
        ref_compiler: cli.ref_compiler,
    };

    match driver::run(&cfg) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("error: failed to serialize report: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_human_readable(&report);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_human_readable(report: &driver::GenReport) {
    let mut total = 0;
    for class in &report.classes {
        println!("{}: {} test(s) -> {}", class.name, class.methods, class.path);
        total += class.methods;
    }
    println!("suite -> {}", report.suite);
    println!("{} test(s) across {} class(es)", total, report.classes.len());
}
