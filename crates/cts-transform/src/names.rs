//! Name unpacking and name-order guessing.
//!
//! The creator column holds one or many people in mixed conventions: names
//! after the first are sometimes inverted and sometimes not, separators
//! vary between semicolons, " and ", and bare commas, and a bare comma
//! usually means an inversion inside one name rather than a boundary
//! between two. The splitting here is a priority cascade from the
//! strongest signal (semicolon) down to the weakest (comma, gated by a
//! shape heuristic).

use std::sync::LazyLock;

use regex::Regex;

use cts_model::NameParts;

/// Separators that unambiguously divide two names.
const NAME_DELIMITERS: [&str; 2] = [";", " and "];

/// "Capitalized word-run, second word-run, comma" — the shape of
/// "First Last, First Last" rather than a single inverted "Last, First".
static COMMAS_BETWEEN_NAMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]\S+\s+\S+,").expect("comma heuristic regex"));

fn has_name_delimiter(names: &str) -> bool {
    NAME_DELIMITERS.iter().any(|delim| names.contains(delim))
}

fn split_on_name_delimiter(names: &str) -> Vec<&str> {
    for delim in NAME_DELIMITERS {
        if names.contains(delim) {
            return names.split(delim).collect();
        }
    }
    vec![names]
}

/// Does the string look like comma-separated uninverted names?
pub fn looks_like_commas_between_names(names: &str) -> bool {
    COMMAS_BETWEEN_NAMES.is_match(names)
}

/// Split a raw creator/author string into individual names, in whatever
/// form they occur (inverted or not).
///
/// Priority order: everything before the first semicolon is name one; the
/// remainder splits on a recognized delimiter if it has one, on commas if
/// it looks like bare comma-separated names, and otherwise stays whole.
/// Without a semicolon the same cascade applies to the whole string. Each
/// resulting piece is trimmed.
pub fn unpack_agent_names(blob: &str) -> Vec<String> {
    let mut names: Vec<&str> = Vec::new();
    if let Some((first, rest)) = blob.split_once(';') {
        names.push(first);
        if has_name_delimiter(rest) {
            names.extend(split_on_name_delimiter(rest));
        } else if looks_like_commas_between_names(rest) {
            names.extend(rest.split(','));
        } else {
            names.push(rest);
        }
    } else if blob.contains(" and ") {
        names.extend(blob.split(" and "));
    } else if looks_like_commas_between_names(blob) {
        names.extend(blob.split(','));
    } else {
        names.push(blob);
    }
    names.into_iter().map(|name| name.trim().to_string()).collect()
}

/// Guess which part of a name is first, middle, and last.
///
/// Best effort, not a guaranteed parse: multi-word surnames without an
/// inverting comma will be mis-split, and that is accepted behavior.
///
/// - comma not in final position: surname before the comma; the remainder
///   is first name, or first + middle when it is exactly two tokens
/// - exactly two tokens: uninverted "First Last"
/// - three or four tokens: first token, middle chunk, final surname
/// - anything else: the whole string is the surname
pub fn guess_name_order(name: &str) -> NameParts {
    if let Some(idx) = name.find(',')
        && idx + 1 < name.len()
    {
        let mut parts = NameParts::surname_only(&name[..idx]);
        let rest = name[idx + 1..].trim();
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        if let [first, middle] = tokens.as_slice() {
            parts.first_name = Some((*first).to_string());
            parts.middle_name = Some((*middle).to_string());
        } else {
            parts.first_name = Some(rest.to_string());
        }
        return parts;
    }

    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.as_slice() {
        [first, last] => NameParts {
            last_name: (*last).to_string(),
            first_name: Some((*first).to_string()),
            middle_name: None,
        },
        [first, middle @ .., last] if middle.len() <= 2 && !middle.is_empty() => NameParts {
            last_name: (*last).to_string(),
            first_name: Some((*first).to_string()),
            middle_name: Some(middle.join(" ")),
        },
        _ => NameParts::surname_only(name),
    }
}
