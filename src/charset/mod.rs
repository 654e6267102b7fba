//! Alphabets: character classification, sequences, and token expansion.

mod class;
mod sequence;

pub use class::{Category, CharacterClass, classify};
pub use sequence::AlphabetSequence;

pub const DIGITS: &str = "0123456789";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SYMBOLS: &str = "?!@#$%^&*-+";

/// Default alphabet: digits, uppercase, lowercase, symbols.
pub const ABC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz?!@#$%^&*-+";

/// Tokens that expand to [`ABC`].
pub const NULS: &str = "nuls";

/// Separates set codes from literal characters in alphabet tokens.
pub const LITERAL_SEPARATOR: char = '|';

/// Character set named by a single-letter code.
fn set_for(code: char) -> Option<&'static str> {
    match code {
        'n' | '1' => Some(DIGITS),
        'u' | 'A' => Some(UPPERCASE),
        'l' | 'a' => Some(LOWERCASE),
        's' | '@' => Some(SYMBOLS),
        _ => None,
    }
}

/// Expand alphabet tokens of the form `codes|literals`.
///
/// Each code before the separator appends its set (`n`/`1` digits, `u`/`A`
/// uppercase, `l`/`a` lowercase, `s`/`@` symbols); unknown codes are ignored.
/// Everything after the first separator is appended verbatim. Returns `None`
/// for empty tokens, meaning "keep the current alphabet".
pub fn expand(tokens: &str) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }

    let (codes, literals) = match tokens.split_once(LITERAL_SEPARATOR) {
        Some((codes, literals)) => (codes, literals),
        None => (tokens, ""),
    };

    let mut alphabet: String = codes.chars().filter_map(set_for).collect();
    alphabet.push_str(literals);
    Some(alphabet)
}
