//! Integration tests using test data fixtures
//!
//! Each file in testdata/inline/ and testdata/restyle/ gets its own test function.
//! A fixture holds the input document, a `---` line, then the expected output.
//! Run all tests with: cargo test

use gotchi_svg::{inline, restyle, Palette};
use std::fs;
use std::path::PathBuf;

/// Get the path to a test data directory
fn get_testdata_dir(kind: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(kind)
}

/// Parse a test file into (input, expected_output)
fn parse_test_file(content: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = content.splitn(2, "\n---\n").collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parts[0].to_string(), parts[1].trim_end().to_string()))
}

/// Run a fixture through `transform` and compare with the expected output
fn run_test_file(kind: &str, test_name: &str, transform: impl Fn(&str) -> String) {
    let test_file = get_testdata_dir(kind).join(format!("{}.txt", test_name));
    let content = fs::read_to_string(&test_file)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", test_file, e));

    let (input, expected) = parse_test_file(&content)
        .unwrap_or_else(|| panic!("Failed to parse test file: {:?}", test_file));

    let actual = transform(&input);
    let actual = actual.trim_end();

    if expected != actual {
        eprintln!("=== Test: {}/{} ===", kind, test_name);
        eprintln!("Input:\n{}", input);
        eprintln!("\n--- Expected ---");
        eprintln!("{}", expected);
        eprintln!("\n--- Actual ---");
        eprintln!("{}", actual);
        panic!("Output mismatch for test: {}/{}", kind, test_name);
    }

    if let Err(e) = roxmltree::Document::parse(actual) {
        panic!("Output of {}/{} is not well-formed XML: {}", kind, test_name, e);
    }
}

fn run_inline_test(test_name: &str) {
    run_test_file("inline", test_name, inline);
}

fn run_restyle_test(test_name: &str) {
    let palette = Palette::default();
    run_test_file("restyle", test_name, |svg| restyle(svg, &palette));
}

/// Macro to generate inline test functions
macro_rules! inline_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<inline_ $name>]() {
                run_inline_test(stringify!($name));
            }
        }
    };
}

/// Macro to generate restyle test functions
macro_rules! restyle_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<restyle_ $name>]() {
                run_restyle_test(stringify!($name));
            }
        }
    };
}

// =============================================================================
// Inline tests
// =============================================================================

inline_test!(gotchi_body);
inline_test!(later_rule_wins);
inline_test!(no_style_block);
inline_test!(rule_shapes);

// =============================================================================
// Restyle tests
// =============================================================================

restyle_test!(no_palette_rules);
restyle_test!(palette_rules);
restyle_test!(secondary_fills);

// =============================================================================
// Properties
// =============================================================================

#[test]
fn inline_is_idempotent_on_fixtures() {
    for entry in fs::read_dir(get_testdata_dir("inline")).unwrap() {
        let content = fs::read_to_string(entry.unwrap().path()).unwrap();
        let (input, _) = parse_test_file(&content).unwrap();
        let once = inline(&input);
        assert_eq!(inline(&once), once);
    }
}

#[test]
fn restyle_keeps_class_attributes() {
    let svg = r##"<svg><path class="gotchi-secondary" fill="#112233" d="M0 0"/></svg>"##;
    let out = restyle(svg, &Palette::default());
    assert_eq!(
        out,
        r##"<svg><path class="gotchi-secondary" fill="#cfeef4" d="M0 0"/></svg>"##
    );
}

#[test]
fn inline_after_restyle_uses_new_palette() {
    let svg = r#"<svg><style>.gotchi-primary{fill:#aaaaaa;}</style><path class="gotchi-primary"/></svg>"#;
    let out = inline(&restyle(svg, &Palette::default()));
    assert_eq!(out, r##"<svg><path fill="#b6509e"/></svg>"##);
}
