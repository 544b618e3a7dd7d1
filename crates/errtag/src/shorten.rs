//! Identifier shortening.
//!
//! Both shorteners keep the first character of the identifier, append the
//! characters of the remainder that survive a filter, truncate to the
//! configured maximum and lowercase the result:
//!
//! - packages drop vowels: `main -> mn`, `handlers -> hnd`
//! - functions keep uppercase letters: `shortenFunctionName -> sfn`, `Open -> open`

use crate::TagConfig;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Generate a shorthand identifier for a package name.
pub fn shorten_package(name: &str, config: &TagConfig) -> String {
    shorten(
        name,
        config.min_package_len,
        config.max_package_len,
        |c| !is_vowel(c),
    )
}

/// Generate a shorthand identifier for a function name.
pub fn shorten_function(name: &str, config: &TagConfig) -> String {
    shorten(
        name,
        config.min_function_len,
        config.max_function_len,
        char::is_uppercase,
    )
}

fn shorten(name: &str, min_len: usize, max_len: usize, keep: impl Fn(char) -> bool) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let kept: String = chars.filter(|&c| keep(c)).collect();
    let shortened = if kept.chars().count() + 1 > min_len {
        let mut s = String::with_capacity(first.len_utf8() + kept.len());
        s.push(first);
        s.push_str(&kept);
        s
    } else {
        name.to_string()
    };

    shortened
        .chars()
        .flat_map(char::to_lowercase)
        .take(max_len)
        .collect()
}
