use std::fs;

use reckon::{Error, get_result};
use walkdir::WalkDir;

#[test]
fn guide_examples_work() {
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

        for block in extract_reckon_blocks(&content) {
            for source in block.lines.iter().filter(|l| !l.trim().is_empty()) {
                count += 1;
                match (get_result(source), block.should_fail) {
                    (Ok(_), false) | (Err(_), true) => {},
                    (Ok(v), true) => {
                        panic!("Example {source:?} in {path:?} evaluated to {v} but should fail")
                    },
                    (Err(e), false) => panic!("Example {source:?} in {path:?} failed: {e}"),
                }
            }
        }
    }

    assert!(count > 0, "No reckon examples found in docs");
}

struct Block {
    lines:       Vec<String>,
    should_fail: bool,
}

fn extract_reckon_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if current.is_none() && trimmed.starts_with("```reckon") {
            current = Some(Block { lines:       Vec::new(),
                                   should_fail: trimmed.contains("should_fail"), });
            continue;
        }
        if trimmed.starts_with("```")
           && let Some(block) = current.take()
        {
            blocks.push(block);
            continue;
        }
        if let Some(block) = current.as_mut() {
            block.lines.push(line.to_string());
        }
    }

    blocks
}

fn assert_value(src: &str, expected: f64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_parse_failure(src: &str) {
    match get_result(src) {
        Err(Error::Parse(_)) => {},
        other => panic!("Expression {src:?} should fail to parse, got {other:?}"),
    }
}

fn assert_runtime_failure(src: &str) {
    match get_result(src) {
        Err(Error::Runtime(_)) => {},
        other => panic!("Expression {src:?} should fail to evaluate, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("42", 42.0);
    assert_value("0.5 + .25 + 2.", 2.75);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("2 * (3 + 4) * 5", 70.0);
    assert_value("((((7))))", 7.0);
    assert_value("1 - (2 - (3 - 4))", -2.0);
}

#[test]
fn operators_are_left_associative() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 / 4 * 8", 4.0);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(get_result("2+3"), get_result(" 2 + 3 "));
    assert_eq!(get_result("(1+2)*3"), get_result("\t( 1 +\n2 ) *   3\r\n"));
}

#[test]
fn malformed_input_fails_to_parse() {
    assert_parse_failure("");
    assert_parse_failure("   ");
    assert_parse_failure("2 + ");
    assert_parse_failure("(2 + 3");
    assert_parse_failure("2 3");
    assert_parse_failure("2 @ 3");
    assert_parse_failure("2 + 3)");
    assert_parse_failure("-1");
    assert_parse_failure(".");
    assert_parse_failure("...");
    assert_parse_failure("1e5");
    assert_parse_failure("()");
}

#[test]
fn runtime_failures() {
    assert_runtime_failure("5 / 0");
    assert_runtime_failure("5 / 0.0");
    assert_runtime_failure("1 / (3 - 3)");
    assert_runtime_failure("0 / 0");
}

#[test]
fn errors_name_their_stage() {
    let parse = get_result("2 +").unwrap_err().to_string();
    assert!(parse.starts_with("Parse error: "), "{parse}");

    let runtime = get_result("1 / 0").unwrap_err().to_string();
    assert!(runtime.starts_with("Evaluation error: "), "{runtime}");
}

#[test]
fn huge_literal_is_reported_as_too_large() {
    let message = get_result(&format!("{} + 1", "9".repeat(400))).unwrap_err().to_string();
    assert_eq!(message, "Parse error: Number literal at position 0 is too large to represent.");
}

#[test]
fn repeated_runs_agree() {
    for src in ["8 - 3 - 2", "5 / 0", "2 @ 3", "(1 + 2) * 3.5"] {
        assert_eq!(get_result(src), get_result(src));
    }
}
