//! Hidden line input for secrets.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use zeroize::Zeroize;

use super::{flush, reset_terminal};

/// Raw mode for the lifetime of the guard.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SecretInput {
    Entered(String),
    Cancelled,
}

/// Read one line without echoing it, drawing a `*` per character on stderr.
///
/// Enter finishes, Esc or Ctrl+Q cancels, Ctrl+U clears, Ctrl+C exits.
pub fn read_secret(prompt: &str) -> io::Result<SecretInput> {
    let guard = RawModeGuard::new()?;
    let mut secret = String::new();

    eprint!("{}: ", prompt);
    flush();

    let outcome = loop {
        let event = match read() {
            Ok(event) => event,
            Err(e) => {
                secret.zeroize();
                return Err(e);
            }
        };
        let key_event = match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => key_event,
            _ => continue,
        };
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c') if ctrl => {
                secret.zeroize();
                // process::exit skips destructors
                reset_terminal();
                eprintln!();
                std::process::exit(130);
            }
            KeyCode::Char('q') if ctrl => break None,
            KeyCode::Esc => break None,
            KeyCode::Char('u') if ctrl => {
                erase(secret.chars().count());
                secret.zeroize();
            }
            KeyCode::Enter => break Some(()),
            KeyCode::Backspace => {
                if secret.pop().is_some() {
                    erase(1);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                secret.push(c);
                eprint!("*");
                flush();
            }
            _ => {}
        }
    };

    drop(guard);
    eprintln!();

    match outcome {
        Some(()) => Ok(SecretInput::Entered(secret)),
        None => {
            secret.zeroize();
            Ok(SecretInput::Cancelled)
        }
    }
}

fn erase(count: usize) {
    for _ in 0..count {
        eprint!("\x08 \x08");
    }
    flush();
}
