//! Case matching between an original word and its replacement.

/// Format `replacement` using `original` as the case signal.
///
/// - An original with no lowercase letters (it equals its own uppercase
///   form) makes the replacement fully uppercase.
/// - Otherwise, a replacement that itself starts uppercase keeps its own
///   capitalization, with only the first character forced to uppercase.
/// - Otherwise the replacement is lowercased.
///
/// The second rule looks at the replacement, not the original, so a
/// title-case original does not capitalize a lowercase replacement.
///
/// # Examples
///
/// ```
/// use word_replacer::substitution::match_case;
///
/// assert_eq!(match_case("CAT", "dog"), "DOG");
/// assert_eq!(match_case("Cat", "dog"), "dog");
/// assert_eq!(match_case("cat", "McDonald"), "McDonald");
/// ```
pub fn match_case(original: &str, replacement: &str) -> String {
    if original == original.to_uppercase() {
        return replacement.to_uppercase();
    }

    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_lowercase(),
    }
}
