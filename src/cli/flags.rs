#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub default: bool,
    pub command: bool,
    pub stdin: bool,
    pub prompt: bool,
    pub unique: bool,
    pub no_category_repetition: bool,
    pub no_letter_repetition: bool,
    pub alphabet: Option<String>,
    pub length: Option<usize>,
    /// Positional inputs, one write each.
    pub inputs: Vec<String>,
}

impl CliFlags {
    /// Flags that shape the generated password.
    pub fn has_generation_flags(&self) -> bool {
        self.alphabet.is_some()
            || self.length.is_some()
            || self.unique
            || self.no_category_repetition
            || self.no_letter_repetition
    }

    /// Some source of input was requested.
    pub fn has_input(&self) -> bool {
        !self.inputs.is_empty() || self.stdin || self.prompt
    }
}
