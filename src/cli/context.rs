//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Read;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, help, prompts};
use crate::settings::Settings;
use crate::terminal::{SecretInput, read_secret};
use hintpass::{Options, PasswordGenerator};

/// Why a run stopped without printing a password.
pub enum Halt {
    /// Nothing left to do - not an error.
    Done,
    /// The flags make no sense together.
    Usage(String),
    /// Report the message and exit non-zero.
    Failed(String),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    pub clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse command-line arguments and load saved defaults.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        prompts::set_quiet(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Ok(Self {
            settings,
            flags,
            clipboard: None,
        })
    }

    pub fn run(&mut self) -> Result<(), Halt> {
        self.handle_info_flags()?;
        if self.flags.command {
            self.handle_command_mode()?;
        } else {
            apply_flags(&mut self.settings, &self.flags);
        }
        self.handle_clipboard()?;

        let mut inputs = self.collect_inputs()?;
        let generated = generate(self.settings.to_options(), &inputs);
        inputs.iter_mut().for_each(Zeroize::zeroize);

        let mut password = generated?;
        self.emit(&password);
        password.zeroize();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Halt> {
        if self.flags.help {
            help::print_help();
            return Err(Halt::Done);
        }
        if self.flags.version {
            println!("hintpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Halt::Done);
        }
        Ok(())
    }

    /// `-c` with generation flags saves exactly those flags, `-c` alone clears
    /// saved defaults. Inputs are never saved; a run with inputs generates
    /// with the newly saved defaults.
    fn handle_command_mode(&mut self) -> Result<(), Halt> {
        if !self.flags.has_generation_flags() {
            if self.flags.has_input() {
                return Err(Halt::Usage(
                    "--command with inputs needs flags to save. Run `hintpass -c` alone to clear saved defaults."
                        .into(),
                ));
            }
            Settings::clear_file()
                .map_err(|e| Halt::Failed(format!("Failed to clear settings: {}", e)))?;
            prompts::settings_cleared();
            return Err(Halt::Done);
        }

        let mut saved = Settings::default();
        apply_flags(&mut saved, &self.flags);
        saved
            .save_to_file()
            .map_err(|e| Halt::Failed(format!("Failed to save settings: {}", e)))?;
        prompts::settings_saved(&Settings::file_path().display().to_string());
        self.settings = saved;

        if self.flags.has_input() {
            Ok(())
        } else {
            Err(Halt::Done)
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), Halt> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Halt::Done);
                }
            }
        }
        Ok(())
    }

    /// Inputs in write order: arguments, then stdin, then prompted entries.
    fn collect_inputs(&self) -> Result<Vec<Vec<u8>>, Halt> {
        if !self.flags.has_input() {
            return Err(Halt::Failed(
                "No input given. Pass inputs as arguments, or use --stdin or --prompt.".into(),
            ));
        }

        let mut inputs: Vec<Vec<u8>> = self
            .flags
            .inputs
            .iter()
            .map(|s| s.as_bytes().to_vec())
            .collect();
        if !inputs.is_empty() && prompts::stdin_is_tty() {
            prompts::secrets_in_arguments();
        }

        if self.flags.stdin {
            let mut data = Vec::new();
            if let Err(e) = std::io::stdin().read_to_end(&mut data) {
                data.zeroize();
                inputs.iter_mut().for_each(Zeroize::zeroize);
                return Err(Halt::Failed(format!("Failed to read stdin: {}", e)));
            }
            strip_line_ending(&mut data);
            inputs.push(data);
        }

        if self.flags.prompt {
            if !prompts::stdin_is_tty() {
                inputs.iter_mut().for_each(Zeroize::zeroize);
                return Err(Halt::Failed("--prompt needs an interactive terminal.".into()));
            }
            for n in 1.. {
                let prompt = format!("Input {n} (empty to finish)");
                match read_secret(&prompt) {
                    Ok(SecretInput::Entered(secret)) if secret.is_empty() => break,
                    Ok(SecretInput::Entered(secret)) => inputs.push(secret.into_bytes()),
                    Ok(SecretInput::Cancelled) => {
                        inputs.iter_mut().for_each(Zeroize::zeroize);
                        return Err(Halt::Done);
                    }
                    Err(e) => {
                        inputs.iter_mut().for_each(Zeroize::zeroize);
                        return Err(Halt::Failed(format!("Failed to read input: {}", e)));
                    }
                }
            }
            if inputs.is_empty() {
                return Err(Halt::Failed("No input entered.".into()));
            }
        }

        Ok(inputs)
    }

    /// Print the password, or copy it when the clipboard is in use.
    fn emit(&mut self, password: &str) {
        match self.clipboard.as_mut() {
            Some(ctx) => match ctx.set_contents(password.to_string()) {
                Ok(_) => prompts::clipboard_copied(),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            },
            None => println!("{password}"),
        }
    }
}

/// Layer explicit flags over `settings`. Rule flags add to the rules already set.
fn apply_flags(settings: &mut Settings, flags: &CliFlags) {
    if let Some(ref alphabet) = flags.alphabet {
        settings.alphabet = alphabet.clone();
    }
    if let Some(length) = flags.length {
        settings.length = length;
    }
    settings.unique |= flags.unique;
    settings.no_category_repetition |= flags.no_category_repetition;
    settings.no_letter_repetition |= flags.no_letter_repetition;
}

fn generate(options: Options, inputs: &[Vec<u8>]) -> Result<String, Halt> {
    let mut generator = PasswordGenerator::new(options);
    for input in inputs {
        generator
            .write(input)
            .map_err(|e| Halt::Failed(e.to_string()))?;
    }
    debug!(writes = inputs.len(), size = generator.size(), "password generated");
    Ok(generator.as_string())
}

/// Drop one trailing `\n` or `\r\n`, as left by `echo` and most editors.
fn strip_line_ending(data: &mut Vec<u8>) {
    if data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }
}
