//! Test-method identifier synthesis.
//!
//! Turns a corpus program filename stem into a valid, readable Java test
//! method name:
//!
//! - the stem is split on runs of non-alphanumerics and camel-cased, with
//!   the first token lower-cased and a fixed `Test` suffix appended
//! - the corpus naming convention `2d`/`3d` (as in `matrix2d`) is rewritten
//!   to `TwoDim`/`ThreeDim` so no bare digit survives next to the `d`
//! - a leading digit, including one left over after the rewrite, is escaped
//!   with an underscore
//!
//! The `2d` rewrite takes priority over `3d`. Names
//! for programs contributed by other groups get a `<Dir>Group` prefix so
//! they can never collide with an in-house name built from the same stem.

/// Upper-case the first character of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character of a string.
fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Camel-case a stem: split on runs of non-alphanumerics, lower-case each
/// token, capitalize all but the first, and concatenate.
///
/// Lower-casing the tokens first makes the result insensitive to the case
/// and separator style of the input, so `foo_bar`, `foo-bar`, and `FOO_BAR`
/// all map to `fooBar`.
fn camel_case(stem: &str) -> String {
    let joined: String = stem
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| capitalize(&t.to_ascii_lowercase()))
        .collect();
    uncapitalize(&joined)
}

/// Synthesize the test method name for a program filename stem.
///
/// Total over any stem; a stem with no alphanumeric characters at all
/// yields the bare `Test` suffix.
pub fn method_name(stem: &str) -> String {
    let mut name = format!("{}Test", camel_case(stem));

    if name.contains("2d") {
        name = name.replace("2d", "TwoDim");
    } else if name.contains("3d") {
        name = name.replace("3d", "ThreeDim");
    }

    // The rewrite usually consumes a leading digit, but not one that merely
    // precedes the convention (`02d` becomes `0TwoDim...`).
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    name
}

/// Synthesize the test method name for a program contributed by another
/// group, prefixing the capitalized name of its group directory and the
/// word `Group`.
///
/// The prefix guarantees separation from in-house test names even when the
/// stems coincide: in-house names always start with a lower-case letter or
/// an underscore, group names with an upper-case letter.
pub fn group_method_name(group_dir: &str, stem: &str) -> String {
    let mut name = format!(
        "{}Group{}",
        capitalize(&camel_case(group_dir)),
        capitalize(&method_name(stem))
    );

    // A group directory starting with a digit would otherwise leak it into
    // the leading position.
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    name
}
