//! Saved generation defaults.

mod file;

use std::path::PathBuf;

use hintpass::{ENOUGH, NULS, Options};

/// Generation defaults persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub alphabet: String,
    pub length: usize,
    pub unique: bool,
    pub no_category_repetition: bool,
    pub no_letter_repetition: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        file::load(&file::path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(&file::path(), self)
    }

    /// Remove saved defaults. Missing files are fine.
    pub fn clear_file() -> Result<(), std::io::Error> {
        match std::fs::remove_file(file::path()) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    pub fn file_path() -> PathBuf {
        file::path()
    }

    /// Generator options, rules registered in a fixed order.
    pub fn to_options(&self) -> Options {
        let mut options = Options::new().alphabet(&self.alphabet).size(self.length);
        if self.unique {
            options = options.unique();
        }
        if self.no_category_repetition {
            options = options.no_category_repetition();
        }
        if self.no_letter_repetition {
            options = options.no_letter_repetition();
        }
        options
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alphabet: NULS.to_string(),
            length: ENOUGH,
            unique: false,
            no_category_repetition: false,
            no_letter_repetition: false,
        }
    }
}
