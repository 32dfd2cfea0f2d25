//! Small text transforms

/// Title-case `text`: the first letter of every word is upper-cased and the
/// rest of the word lower-cased.
///
/// A word starts after any character that is neither alphanumeric nor an
/// apostrophe, so `won't` stays one word while `well-known` is two.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = in_word && matches!(c, '\'' | '’');
        }
    }
    out
}
