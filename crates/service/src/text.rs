//! Text normalization applied on every save path.

/// Trim, lower-case, then upper-case the first character.
///
/// Blank input (empty or whitespace only) is returned unchanged. Only the very
/// first character of the whole string is capitalized: `"golden retriever"`
/// becomes `"Golden retriever"`.
pub fn capitalize(value: &str) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }
    let lowered = value.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
