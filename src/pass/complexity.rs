//! Complexity rules constraining which character may follow the output so far.

use std::fmt;

use thiserror::Error;

use crate::charset::{AlphabetSequence, Category, CharacterClass};

/// Why a candidate character was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("character {0:?} is already in the output")]
    Duplicate(char),

    #[error("repeated category in {prev:?} {next:?} pair")]
    RepeatedCategory { prev: char, next: char },

    #[error("adjacent letters in {prev:?} {next:?} pair")]
    AdjacentLetters { prev: char, next: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// No two output characters are equal ignoring case.
    Unique,
    /// Adjacent output characters never share a category mask.
    NoCategoryRepetition,
    /// At most one of any two adjacent output characters is a letter.
    NoLetterRepetition,
}

impl Rule {
    pub fn check(self, output: &AlphabetSequence, candidate: &CharacterClass) -> Result<(), Rejection> {
        match self {
            Rule::Unique => {
                if output.iter().any(|c| c.same_ignoring_case(candidate)) {
                    return Err(Rejection::Duplicate(candidate.char()));
                }
                Ok(())
            }
            Rule::NoCategoryRepetition => match output.last() {
                Some(prev) if prev.same_category(candidate) => Err(Rejection::RepeatedCategory {
                    prev: prev.char(),
                    next: candidate.char(),
                }),
                _ => Ok(()),
            },
            Rule::NoLetterRepetition => match output.last() {
                Some(prev) if prev.is(Category::LETTER) && candidate.is(Category::LETTER) => {
                    Err(Rejection::AdjacentLetters {
                        prev: prev.char(),
                        next: candidate.char(),
                    })
                }
                _ => Ok(()),
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Unique => "unique",
            Rule::NoCategoryRepetition => "no-category-repetition",
            Rule::NoLetterRepetition => "no-letter-repetition",
        }
    }
}

/// Chain of rules, each wrapping the ones registered before it.
///
/// The most recently registered rule is checked first and the first rejection
/// wins. Whether a candidate is accepted does not depend on the order, only
/// which rejection is reported does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexityPolicy {
    rules: Vec<Rule>,
}

impl ComplexityPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.register(rule);
        self
    }

    /// Add `rule` unless it is already registered.
    pub fn register(&mut self, rule: Rule) {
        if !self.contains(rule) {
            self.rules.push(rule);
        }
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn contains(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn check(&self, output: &AlphabetSequence, candidate: &CharacterClass) -> Result<(), Rejection> {
        self.rules
            .iter()
            .rev()
            .try_for_each(|rule| rule.check(output, candidate))
    }
}

impl fmt::Display for ComplexityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rules.is_empty() {
            return f.write_str("none");
        }
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(rule.name())?;
        }
        Ok(())
    }
}
