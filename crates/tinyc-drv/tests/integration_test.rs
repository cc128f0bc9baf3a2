//! Listing pipeline tests against golden files.

use std::fs;
use std::path::PathBuf;

use tinyc_drv::{normalize_source, render_listing};
use tinyc_lex::tokenize;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

fn listing_for(source_file: &str) -> String {
    let source = normalize_source(&fixture(source_file));
    render_listing(&tokenize(&source).unwrap())
}

#[test]
fn test_count_listing_matches_golden() {
    assert_eq!(listing_for("count.tc"), fixture("count.lex.expected"));
}

#[test]
fn test_prime_listing_matches_golden() {
    assert_eq!(listing_for("prime.tc"), fixture("prime.lex.expected"));
}

#[test]
fn test_hello_listing_matches_golden() {
    assert_eq!(listing_for("hello.tc"), fixture("hello.lex.expected"));
}

#[test]
fn test_unindented_tokens_sit_at_column_one() {
    let source = normalize_source("a\nb\nc\n");
    let tokens = tokenize(&source).unwrap();
    assert_eq!(tokens.len(), 4);
    for token in &tokens {
        assert_eq!(token.column, 1);
    }
}

#[test]
fn test_error_position_in_normalized_source() {
    let source = normalize_source("a & b;\n");
    let err = tokenize(&source).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unrecognized character: (32) ' ' in line 1, pos 3"
    );
}

#[test]
fn test_end_of_input_lands_past_the_last_line() {
    let source = normalize_source(&fixture("count.tc"));
    let tokens = tokenize(&source).unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.line, 5);
    assert_eq!(eof.column, 1);
}
