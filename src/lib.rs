//! Deterministic, rule-constrained password generation.
//!
//! Bytes written to a [`PasswordGenerator`] are folded into a digest; the
//! digest then drives a seeded selection loop that picks one character of a
//! fixed alphabet per digest byte, subject to pluggable complexity rules.
//!
//! The same input and options always give the same password. That makes the
//! output a derived secret only as strong as its input: anyone who knows the
//! input can reproduce it, and the search space is small.
//!
//! ```
//! use hintpass::{MAX, NULS, Options, PasswordGenerator};
//!
//! let mut generator = PasswordGenerator::new(
//!     Options::new()
//!         .size(MAX)
//!         .alphabet(NULS)
//!         .unique()
//!         .no_category_repetition()
//!         .no_letter_repetition(),
//! );
//! generator.write(b"salt").unwrap();
//! generator.write(b"hint").unwrap();
//!
//! assert_eq!(generator.sum(b""), b"e@c*x6d-q#J8U&F^%H+t7Y!L1P4M5I$g0S2A?R3o9n");
//! ```

pub mod charset;
pub mod digest;
mod error;
pub mod pass;
pub mod rand;

pub use charset::{ABC, AlphabetSequence, Category, CharacterClass, NULS};
pub use digest::{DigestCombiner, Fnv1Sha512};
pub use error::{Error, Result};
pub use pass::{ComplexityPolicy, ENOUGH, MAX, Options, PasswordGenerator, Rejection, Rule};
