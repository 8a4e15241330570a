//! Text helpers for contract strings.
//!
//! Contract strings live in the host, so inspecting their contents means
//! copying the bytes into a stack buffer first. Every helper here works on
//! a copy bounded by [`MAX_TEXT_BYTES`].

use soroban_sdk::{Env, String};

/// Size of the scratch buffer used to read a contract string.
///
/// No storable text field is longer than this.
pub const MAX_TEXT_BYTES: usize = 2048;

/// Copy a contract string into `buf` and view it as UTF-8.
///
/// Returns `None` when the string does not fit or is not valid UTF-8.
pub fn read<'b>(s: &String, buf: &'b mut [u8]) -> Option<&'b str> {
    let len = s.len() as usize;
    if len > buf.len() {
        return None;
    }
    let bytes = &mut buf[..len];
    s.copy_into_slice(bytes);
    core::str::from_utf8(bytes).ok()
}

/// Check whether a string is empty or whitespace only.
///
/// Strings that cannot be read count as non-blank; length checks reject
/// them separately.
pub fn is_blank(s: &String) -> bool {
    let mut buf = [0u8; MAX_TEXT_BYTES];
    match read(s, &mut buf) {
        Some(text) => text.trim().is_empty(),
        None => false,
    }
}

/// Trim surrounding whitespace, returning `None` if nothing remains.
///
/// Returns `Err(())` when the string is too long to inspect or is not UTF-8.
pub fn trimmed(env: &Env, s: &String) -> Result<Option<String>, ()> {
    let mut buf = [0u8; MAX_TEXT_BYTES];
    let text = read(s, &mut buf).ok_or(())?;
    let text = text.trim();
    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_str(env, text)))
    }
}

/// Case-insensitive substring test of a contract string against `needle`.
pub fn contains_ignore_case(haystack: &String, needle: &str) -> bool {
    let mut buf = [0u8; MAX_TEXT_BYTES];
    match read(haystack, &mut buf) {
        Some(text) => str_contains_ignore_case(text, needle),
        None => false,
    }
}

/// Case-insensitive substring test of two contract strings.
pub fn string_contains_ignore_case(haystack: &String, needle: &String) -> bool {
    let mut buf = [0u8; MAX_TEXT_BYTES];
    match read(needle, &mut buf) {
        Some(needle) => contains_ignore_case(haystack, needle),
        None => false,
    }
}

/// Case-insensitive substring test using Unicode lowercase mapping.
///
/// Final sigma folds to the ordinary sigma, so `ΟΔΟΣ` and `οδος` match
/// whichever form a lowercase source used.
pub fn str_contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .char_indices()
        .any(|(start, _)| starts_with_ignore_case(&haystack[start..], needle))
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(fold);
    prefix.chars().flat_map(fold).all(|p| text.next() == Some(p))
}

fn fold(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|c| if c == 'ς' { 'σ' } else { c })
}

/// Check an email address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
