use std::fs;

use numerus::{
    config::Config,
    error::{Error, ParseError},
    evaluate,
};
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("docs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "md")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line, expected) in extract_examples(&content) {
            count += 1;
            let result = evaluate(&line, Config::basic());
            match (expected.as_str(), &result) {
                ("error", Err(_)) => {},
                ("error", Ok(value)) => {
                    panic!("Example '{line}' in {path:?} should fail but gave {value}")
                },
                (expected, Ok(value)) => {
                    assert_eq!(value, expected, "Example '{line}' in {path:?}");
                },
                (_, Err(e)) => panic!("Example '{line}' in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No numerus examples found in docs");
}

/// Collects `line => result` pairs from ```numerus blocks.
fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```numerus") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = line.split_once(" => ") {
            examples.push((expression.to_string(), expected.trim().to_string()));
        }
    }

    examples
}

fn assert_success(src: &str, expected: &str) {
    match evaluate(src, Config::basic()) {
        Ok(value) => assert_eq!(value, expected, "'{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate(src, Config::basic()) {
        panic!("'{src}' gave {value} but was expected to fail")
    }
}

#[test]
fn arabic_arithmetic() {
    assert_success("1 + 2", "3");
    assert_success("7 * 9", "63");
    assert_success("8 - 5", "3");
    assert_success("10 / 2", "5");
    assert_success("2 - 9", "-7");
}

#[test]
fn roman_arithmetic() {
    assert_success("I + II", "III");
    assert_success("VII * I", "VII");
    assert_success("VIII - V", "III");
    assert_success("X / V", "II");
    assert_success("IV + VI", "X");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_success("  3 + 4\n", "7");
    assert_success("V - II\r\n", "III");
}

#[test]
fn inner_whitespace_is_not_collapsed() {
    assert_failure("3  + 4");
    assert_failure("3\t+ 4");
}

#[test]
fn lowercase_roman_is_rejected() {
    assert_failure("v + ii");
}

#[test]
fn zero_operand_is_rejected_before_division() {
    assert_eq!(evaluate("1 / 0", Config::basic()),
               Err(Error::Parse(ParseError::Operand { token: "0".to_string(),
                                                      max:   10, })));
}

#[test]
fn roman_result_below_one_is_error() {
    assert_failure("V - V");
    assert_failure("II - V");
    assert_failure("I / II");
}
