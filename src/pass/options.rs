//! Generator configuration.

use super::complexity::{ComplexityPolicy, Rule};
use crate::charset::{self, ABC};

/// Default output size, enough for the default alphabet.
pub const ENOUGH: usize = 20;

/// Output size meaning "as long as the digest and the rules allow".
pub const MAX: usize = 0;

/// Generator options, fixed once the generator is built.
///
/// ```
/// use hintpass::{MAX, NULS, Options};
///
/// let options = Options::new()
///     .size(MAX)
///     .alphabet(NULS)
///     .unique()
///     .no_category_repetition()
///     .no_letter_repetition();
/// assert_eq!(options.output_size(), MAX);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    size: usize,
    alphabet: String,
    policy: ComplexityPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            size: ENOUGH,
            alphabet: ABC.to_string(),
            policy: ComplexityPolicy::new(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the alphabet from `codes|literals` tokens, see [`charset::expand`].
    /// Empty tokens keep the current alphabet.
    pub fn alphabet(mut self, tokens: &str) -> Self {
        if let Some(alphabet) = charset::expand(tokens) {
            self.alphabet = alphabet;
        }
        self
    }

    /// Desired output length. Negative sizes are ignored; [`MAX`] derives the
    /// length from the digest and alphabet exhaustion.
    pub fn size<N: TryInto<usize>>(mut self, size: N) -> Self {
        if let Ok(size) = size.try_into() {
            self.size = size;
        }
        self
    }

    pub fn unique(self) -> Self {
        self.rule(Rule::Unique)
    }

    pub fn no_category_repetition(self) -> Self {
        self.rule(Rule::NoCategoryRepetition)
    }

    pub fn no_letter_repetition(self) -> Self {
        self.rule(Rule::NoLetterRepetition)
    }

    /// All three rules.
    pub fn strict(self) -> Self {
        self.unique().no_category_repetition().no_letter_repetition()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.policy.register(rule);
        self
    }

    pub fn output_size(&self) -> usize {
        self.size
    }

    pub fn alphabet_chars(&self) -> &str {
        &self.alphabet
    }

    pub fn policy(&self) -> &ComplexityPolicy {
        &self.policy
    }
}
