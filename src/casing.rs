//! Identifier casing helpers shared by the language adapters.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap());

/// Split an identifier into words on separator runs and case boundaries.
///
/// `"user-profile"` → `["user", "profile"]`, `"getUserById"` →
/// `["get", "User", "By", "Id"]`, `"HTTPRequest"` → `["HTTP", "Request"]`.
fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in SEPARATORS.split(s) {
        if chunk.is_empty() {
            continue;
        }
        let chars: Vec<char> = chunk.chars().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let boundary = (chars[i].is_ascii_uppercase() && chars[i - 1].is_ascii_lowercase())
                || (chars[i].is_ascii_uppercase()
                    && chars[i - 1].is_ascii_uppercase()
                    && chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase()));
            if boundary {
                words.push(chars[start..i].iter().collect());
                start = i;
            }
        }
        words.push(chars[start..].iter().collect());
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
        }
        None => String::new(),
    }
}

/// Convert a string to PascalCase.
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => pascal,
    }
}

/// Convert a string to snake_case.
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_from_separators() {
        assert_eq!(to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("user profile"), "UserProfile");
    }

    #[test]
    fn pascal_case_from_camel_input() {
        assert_eq!(to_pascal_case("getUserById"), "GetUserById");
        assert_eq!(to_pascal_case("HTTPRequest"), "HttpRequest");
    }

    #[test]
    fn camel_case_variants() {
        assert_eq!(to_camel_case("get-user-by-id"), "getUserById");
        assert_eq!(to_camel_case("GETRequest"), "getRequest");
        assert_eq!(to_camel_case("petsGET"), "petsGet");
    }

    #[test]
    fn snake_case_variants() {
        assert_eq!(to_snake_case("getUserById"), "get_user_by_id");
        assert_eq!(to_snake_case("user-profile"), "user_profile");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_snake_case(""), "");
    }
}
