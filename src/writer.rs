//! Compact text rendering of a value tree.
//!
//! Produces JSON text with no whitespace, object members in their stored
//! insertion order, and the minimal escaping the lexer resolves: `"` and
//! `\` inside strings. Rendering a parsed tree and parsing the result
//! yields a structurally equal tree.

use crate::value::JsonValue;
use indexmap::IndexMap;

/// Render a value tree as compact JSON text.
pub fn render(value: &JsonValue) -> String {
    let mut output = String::new();
    write_value(value, &mut output);
    output
}

/// Append one value to the output string.
fn write_value(value: &JsonValue, output: &mut String) {
    match value {
        JsonValue::Null => output.push_str("null"),
        JsonValue::Bool(true) => output.push_str("true"),
        JsonValue::Bool(false) => output.push_str("false"),
        JsonValue::Number(n) => output.push_str(&n.to_string()),
        JsonValue::String(s) => write_string(s, output),
        JsonValue::Array(arr) => write_array(arr, output),
        JsonValue::Object(map) => write_object(map, output),
    }
}

/// Append a string literal, escaping quotes and backslashes.
fn write_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            c => output.push(c),
        }
    }
    output.push('"');
}

fn write_array(arr: &[JsonValue], output: &mut String) {
    output.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        write_value(value, output);
    }
    output.push(']');
}

/// Append an object with members in insertion order.
fn write_object(map: &IndexMap<String, JsonValue>, output: &mut String) {
    output.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        write_string(key, output);
        output.push(':');
        write_value(value, output);
    }
    output.push('}');
}
