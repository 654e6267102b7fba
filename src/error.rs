use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The digest combiner refused the input. Nothing was generated.
    #[error("digest combiner rejected input: {0}")]
    Combiner(#[from] io::Error),

    /// The alphabet ran out before `size` characters satisfied the rules.
    #[error("unreachable complexity: alphabet exhausted before {size} characters were chosen")]
    UnreachableComplexity { size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
