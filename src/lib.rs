//! Test-harness generator for the GoLite compiler.
//!
//! Walks the program corpus (`programs/valid/...`, `programs/invalid/...`),
//! synthesizes one JUnit test method per program, and assembles the methods
//! into test classes plus an aggregate suite. Tests can target either the
//! compiler under development or the course reference compiler; the two
//! modes differ only in the assertions the generated methods make.
//!
//! The generator never runs the tests it writes — that is the test runner's
//! job. It also performs no semantic validation of the programs themselves
//! beyond matching generated output against golden files.

pub mod assemble;
pub mod config;
pub mod corpus;
pub mod driver;
pub mod error;
pub mod ident;
pub mod synth;

pub use config::{GenConfig, TargetMode};
pub use driver::{run, GenReport};
pub use error::GenError;
