//! Title to slug conversion

use once_cell::sync::Lazy;
use regex::Regex;

/// Decimal digits only (category Nd); fractions, super- and subscripts are not.
static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Nd}$").expect("decimal digit pattern is valid"));

/// Slug used when a record is created without a title.
pub const NO_TITLE: &str = "no-title-given";

/// Convert a free-form title into a file-name-safe slug.
///
/// Whitespace turns into `-` and capitals are lowered. Only digits, lowercase
/// letters and `-` survive; punctuation is dropped, not replaced, and runs of
/// dashes are left as they are. A title with nothing left to keep gets [`NO_TITLE`].
pub fn sanitize(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_whitespace() {
            slug.push('-');
        } else if c.is_uppercase() {
            // some capitals lower to a letter plus a combining mark; keep only the letter
            slug.extend(c.to_lowercase().filter(|l| l.is_lowercase()));
        } else if c == '-' || is_decimal_digit(c) || c.is_lowercase() {
            slug.push(c);
        }
    }

    if slug.is_empty() {
        return NO_TITLE.to_string();
    }
    slug
}

fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    c.is_numeric() && DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4]))
}
