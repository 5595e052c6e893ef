//! Table-driven acceptance corpus.
//!
//! Each vector pairs an input document with the expected verdict from
//! the pipeline. Accepted documents are additionally required to survive
//! a render-then-reparse round trip.

use jsoncheck::{parse, render, Error};

/// Expected outcome for a corpus vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// The document parses.
    Accept,
    /// Tokenization fails.
    RejectLex,
    /// Tokenization succeeds but the grammar is violated.
    RejectParse,
}

use Verdict::{Accept, RejectLex, RejectParse};

const VECTORS: &[(&str, &str, Verdict)] = &[
    // Accepted documents
    ("empty_object", "{}", Accept),
    ("empty_array", "[]", Accept),
    ("null_literal", "null", Accept),
    ("true_literal", "true", Accept),
    ("false_literal", "false", Accept),
    ("zero", "0", Accept),
    ("integer", "42", Accept),
    ("leading_zero_run", "007", Accept),
    ("u64_max", "18446744073709551615", Accept),
    ("empty_string", "\"\"", Accept),
    ("plain_string", "\"hello\"", Accept),
    ("escaped_quote", r#""say \"hi\"""#, Accept),
    ("flat_array", "[1, 2, 3]", Accept),
    ("mixed_array", r#"[1, "two", true, null]"#, Accept),
    ("flat_object", r#"{"a": 1, "b": 2}"#, Accept),
    ("nested_containers", r#"{"a": [{"b": [0]}]}"#, Accept),
    ("duplicate_keys", r#"{"a": 1, "a": 2}"#, Accept),
    ("surrounding_whitespace", " \n\t{} \r\n", Accept),
    ("ten_levels_deep", "[[[[[[[[[[1]]]]]]]]]]", Accept),
    // Lexing failures
    ("truncated_true", "tru", RejectLex),
    ("truncated_null_in_array", "[nul]", RejectLex),
    ("negative_number", "-1", RejectLex),
    ("fractional_number", "1.5", RejectLex),
    ("unterminated_string", "\"abc", RejectLex),
    ("stray_symbol", "@", RejectLex),
    ("capitalized_keyword", "True", RejectLex),
    // Grammar failures
    ("empty_input", "", RejectParse),
    ("lone_open_brace", "{", RejectParse),
    ("lone_open_bracket", "[", RejectParse),
    ("lone_close_bracket", "]", RejectParse),
    ("lone_colon", ":", RejectParse),
    ("object_trailing_comma", r#"{"a": 1,}"#, RejectParse),
    ("array_trailing_comma", "[1,]", RejectParse),
    ("missing_colon", r#"{"a" 1}"#, RejectParse),
    ("number_key", r#"{1: 2}"#, RejectParse),
    ("missing_comma_in_object", r#"{"a": 1 "b": 2}"#, RejectParse),
    ("missing_comma_in_array", "[1 2]", RejectParse),
    ("missing_value_in_object", r#"{"a":}"#, RejectParse),
    ("two_top_level_values", "{} {}", RejectParse),
    ("number_overflow", "18446744073709551616", RejectParse),
];

#[test]
fn corpus_verdicts() {
    for &(id, input, expected) in VECTORS {
        let actual = match parse(input) {
            Ok(_) => Accept,
            Err(Error::Lex(_)) => RejectLex,
            Err(Error::Parse(_)) => RejectParse,
        };
        assert_eq!(actual, expected, "vector {id}: input {input:?}");
    }
}

#[test]
fn corpus_accepted_documents_round_trip() {
    for &(id, input, expected) in VECTORS {
        if expected != Accept {
            continue;
        }
        let value = parse(input).unwrap_or_else(|e| panic!("vector {id} failed to parse: {e}"));
        let reparsed = parse(&render(&value))
            .unwrap_or_else(|e| panic!("vector {id} failed to reparse: {e}"));
        assert_eq!(reparsed, value, "vector {id}: round trip changed the tree");
    }
}
