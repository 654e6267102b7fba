//! Settings file persistence.
//!
//! One line of comma separated fields. Commas and pipes inside the alphabet
//! are escaped with a leading `|`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;

const FIELDS: usize = 5;
const ESCAPE: char = '|';
const DELIMITER: char = ',';

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{}\n",
        escape(&settings.alphabet),
        settings.length,
        settings.unique,
        settings.no_category_repetition,
        settings.no_letter_repetition,
    );

    file.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Read settings, falling back to defaults for a missing file and for any
/// field that fails to parse.
pub fn load(path: &Path) -> io::Result<Settings> {
    let mut settings = Settings::default();

    let file = match OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(settings),
        Err(e) => return Err(e),
    };

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(settings);
    }

    let parts = split_escaped(line);
    if parts.len() != FIELDS {
        warn!(path = %path.display(), fields = parts.len(), "malformed settings file, using defaults");
        return Ok(settings);
    }

    settings.alphabet = parts[0].clone();
    settings.length = parts[1].parse().unwrap_or(settings.length);
    settings.unique = parts[2].parse().unwrap_or(settings.unique);
    settings.no_category_repetition = parts[3].parse().unwrap_or(settings.no_category_repetition);
    settings.no_letter_repetition = parts[4].parse().unwrap_or(settings.no_letter_repetition);

    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// `$HINTPASS_SETTINGS`, or `$HOME/.config/hintpass/settings`.
pub fn path() -> PathBuf {
    if let Some(path) = env::var_os("HINTPASS_SETTINGS") {
        return PathBuf::from(path);
    }
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/hintpass/settings")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ESCAPE || c == DELIMITER {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == ESCAPE {
            escape_next = true;
        } else if c == DELIMITER {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_round_trip() {
        for s in ["nuls", "n|_-", "a,b", "||,,", ""] {
            let parts = split_escaped(&format!("{},x", escape(s)));
            assert_eq!(parts, vec![s.to_string(), "x".to_string()], "{s}");
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let settings = Settings {
            alphabet: "nl|,|".into(),
            length: 0,
            unique: true,
            no_category_repetition: true,
            no_letter_repetition: false,
        };

        save(&path, &settings).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(&dir.path().join("absent")).unwrap(), Settings::default());
    }

    #[test]
    fn malformed_fields_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        fs::write(&path, "n,abc,true,nope,false\n").unwrap();
        let settings = load(&path).unwrap();
        assert_eq!(settings.alphabet, "n");
        assert_eq!(settings.length, Settings::default().length);
        assert!(settings.unique);
        assert!(!settings.no_category_repetition);

        fs::write(&path, "only,three,fields\n").unwrap();
        assert_eq!(load(&path).unwrap(), Settings::default());
    }
}
