//! Display formatting for game metadata.

use chrono::{Local, TimeZone};
use regex::Regex;
use std::sync::OnceLock;

fn parenthesized() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(.*\)").expect("static regex"))
}

fn roman_numeral() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(M{0,3})(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
            .expect("static regex")
    })
}

// A word is an optional leading punctuation char followed by a run of
// non-space, non-punctuation chars, so punctuation always starts a new word.
fn word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[[:punct:]]?[^\s[:punct:]]*").expect("static regex"))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn first_char_fallback(title: &str) -> String {
    title.chars().next().map(String::from).unwrap_or_default()
}

/// Abbreviation shown in place of missing artwork.
///
/// "Final Fantasy VII" becomes "FFVII", "Super Mario Bros." becomes "SMB.",
/// long single words are squeezed to their consonants.
pub fn format_title_placeholder(title: &str) -> String {
    let sanitized = parenthesized().replace_all(title, "");
    let sanitized = sanitized.trim();

    if !sanitized.contains(' ') {
        if sanitized.chars().count() > 10 {
            let consonants: String = sanitized
                .chars()
                .filter(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
                .collect();
            if consonants.chars().count() > 10 {
                let head: String = sanitized.chars().take(10).collect();
                return format!("{}.", head);
            }
            return consonants;
        }
        return sanitized.to_string();
    }

    let joined: String = word()
        .find_iter(sanitized)
        .map(|m| m.as_str())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let upper = w.to_uppercase();
            if roman_numeral().is_match(&upper) {
                upper
            } else {
                w.chars()
                    .next()
                    .map(|c| c.to_uppercase().collect())
                    .unwrap_or_default()
            }
        })
        .filter(|piece: &String| {
            piece.chars().next().is_some_and(|c| {
                c.is_numeric() || c.is_uppercase() || matches!(c, '&' | ':' | '.' | '-')
            })
        })
        .collect();

    if joined.trim().is_empty() {
        capitalize_first(&first_char_fallback(title))
    } else {
        capitalize_first(&joined)
    }
}

/// Three-letter tile label: the first digits, capitals or `&` of the title.
pub fn compute_title_placeholder(title: &str) -> String {
    let sanitized = parenthesized().replace_all(title, "");
    let label: String = sanitized
        .chars()
        .filter(|c| c.is_numeric() || c.is_uppercase() || *c == '&')
        .take(3)
        .collect();
    if label.trim().is_empty() {
        capitalize_first(&first_char_fallback(title))
    } else {
        capitalize_first(&label)
    }
}

/// Release year of an epoch-millis timestamp, in local time.
pub fn format_date(millis: i64) -> String {
    Local
        .timestamp_millis_opt(millis)
        .earliest()
        .map(|d| d.format("%Y").to_string())
        .unwrap_or_default()
}

/// Company names longer than two words collapse to their initials.
pub fn format_company(input: &str) -> String {
    let words: Vec<&str> = input.split(' ').collect();
    if words.len() > 2 {
        words.iter().filter_map(|w| w.chars().next()).collect()
    } else {
        input.to_string()
    }
}
