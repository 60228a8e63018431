/// Simple per-character lower-casing used for every name comparison.
pub fn normalize(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
