//! Password generation: options, complexity rules, and the generator.

pub mod complexity;
mod generate;
pub mod options;

pub use complexity::{ComplexityPolicy, Rejection, Rule};
pub use generate::PasswordGenerator;
pub use options::{ENOUGH, MAX, Options};
