use serde_json::{Map, Value};

/// Longest parent label drawn as-is; anything longer is cut and marked.
pub const MAX_LABEL_CHARS: usize = 25;

/// Truncates a label to [`MAX_LABEL_CHARS`] characters plus an ellipsis
/// marker. Counts characters, not bytes, so multi-byte labels never split.
pub fn abbreviate(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut out: String = label.chars().take(MAX_LABEL_CHARS).collect();
    out.push_str("...");
    out
}

/// Case-insensitive key lookup over a JSON object.
pub fn contains_key(map: &Map<String, Value>, key: &str) -> bool {
    map.keys().any(|k| k.eq_ignore_ascii_case(key))
}

/// Case-insensitive membership test over a string sequence.
pub fn array_contains(values: &[&str], needle: &str) -> bool {
    values.iter().any(|v| v.eq_ignore_ascii_case(needle))
}
