//! Author name initialization ("Last, First Middle" -> "Last, F.M.").
use once_cell::sync::Lazy;
use regex::Regex;

// Letters and numbers by general category; marks and symbols are not word characters.
static WORD_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}_]$").expect("valid word character regex"));

/// Characters that count as a "word" character when looking for an initial.
fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR_REGEX.is_match(c.encode_utf8(&mut buf))
}

/// Separators between given names: Unicode whitespace plus the ASCII
/// information separators (file, group, record and unit separator).
fn is_name_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Extracts the initial of a single given-name token.
///
/// The initial is the shortest run of characters (no spaces or periods) that
/// ends in a word character, followed by a period. A leading hyphen is kept,
/// so `"-First"` becomes `"-F."`. Tokens without any word character are
/// returned unchanged.
pub fn extract_initial(token: &str) -> String {
    let mut start = 0;
    for (idx, c) in token.char_indices() {
        if c == ' ' || c == '.' {
            start = idx + c.len_utf8();
        } else if is_word_char(c) {
            let end = idx + c.len_utf8();
            return format!("{}.", &token[start..end]);
        }
    }
    token.to_string()
}

/// Splits the given-name part of a raw name into tokens.
///
/// Hyphens become a separate token prefix and periods act as separators, so
/// `"Hyphenated-First"` yields `["Hyphenated", "-First"]` and `"F. M."`
/// yields `["F", "M"]`.
fn given_name_tokens(given: &str) -> Vec<String> {
    given
        .replace('-', " -")
        .replace('.', " ")
        .split(is_name_separator)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Converts a raw `"Last, Given Names"` author name into its initialed form.
///
/// Everything before the first comma is kept verbatim. Names without a comma
/// (organizations, mononyms, names written without the Western convention)
/// are returned as-is.
pub fn initialize_name(raw: &str) -> String {
    let Some((last_name, given)) = raw.split_once(',') else {
        return raw.to_string();
    };

    let initials: String = given_name_tokens(given)
        .iter()
        .map(|token| extract_initial(token))
        .collect();

    format!("{}, {}", last_name, initials)
}

/// Initializes every author and joins them for display.
pub fn initialize_authors(authors: &[String]) -> String {
    authors
        .iter()
        .map(|author| initialize_name(author))
        .collect::<Vec<_>>()
        .join(", ")
}
