//! Ordered character sequences.

use std::fmt;

use zeroize::Zeroize;

use super::CharacterClass;
use crate::rand::AdditiveSource;

/// An ordered run of classified characters.
///
/// Used both for alphabets and for generated output. Operations that change
/// the order or the length return a new sequence and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetSequence(Vec<CharacterClass>);

impl AlphabetSequence {
    /// Classify every character of `s`. Duplicates are kept.
    pub fn new(s: &str) -> Self {
        Self(s.chars().map(CharacterClass::new).collect())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterClass> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CharacterClass] {
        &self.0
    }

    pub fn push(&mut self, c: CharacterClass) {
        self.0.push(c);
    }

    /// A shuffled copy, drawing swaps from `rng`.
    pub fn shuffled(&self, rng: &mut AdditiveSource) -> Self {
        let mut chars = self.0.clone();
        rng.shuffle(chars.len(), |i, j| chars.swap(i, j));
        Self(chars)
    }

    /// A copy without the element at `i`, or `None` when `i` is out of range.
    pub fn remove_at(&self, i: usize) -> Option<Self> {
        if i >= self.0.len() {
            return None;
        }
        let mut chars = Vec::with_capacity(self.0.len() - 1);
        chars.extend_from_slice(&self.0[..i]);
        chars.extend_from_slice(&self.0[i + 1..]);
        Some(Self(chars))
    }

    pub fn pick_at(&self, i: usize) -> Option<CharacterClass> {
        self.0.get(i).copied()
    }

    pub fn last(&self) -> Option<CharacterClass> {
        self.0.last().copied()
    }
}

impl From<&str> for AlphabetSequence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl FromIterator<CharacterClass> for AlphabetSequence {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AlphabetSequence {
    type Item = &'a CharacterClass;
    type IntoIter = std::slice::Iter<'a, CharacterClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for AlphabetSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl Zeroize for AlphabetSequence {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
