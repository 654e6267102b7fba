use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse `args`, skipping the program name. Everything after `--` is input.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-d" | "--default" => flags.default = true,
            "-c" | "--command" => flags.command = true,
            "-i" | "--stdin" => flags.stdin = true,
            "-p" | "--prompt" => flags.prompt = true,
            "-U" | "--unique" => flags.unique = true,
            "-C" | "--no-category-repetition" => flags.no_category_repetition = true,
            "-L" | "--no-letter-repetition" => flags.no_letter_repetition = true,
            "-S" | "--strict" => {
                flags.unique = true;
                flags.no_category_repetition = true;
                flags.no_letter_repetition = true;
            }
            "-a" | "--alphabet" => {
                flags.alphabet = Some(value(args, &mut i)?.to_string());
            }
            "-l" | "--length" => {
                let raw = value(args, &mut i)?;
                flags.length = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "--" => {
                flags.inputs.extend(args[i + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(ParseError::UnknownArg(arg.to_string()));
            }
            arg => flags.inputs.push(arg.to_string()),
        }
        i += 1;
    }

    Ok(flags)
}

/// The argument following the flag at `i`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("hintpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn generation_flags() {
        let flags = parse(&args(&["-a", "n|_-", "-l", "12", "-U", "-C", "-L"])).unwrap();
        assert_eq!(flags.alphabet.as_deref(), Some("n|_-"));
        assert_eq!(flags.length, Some(12));
        assert!(flags.unique && flags.no_category_repetition && flags.no_letter_repetition);
        assert!(flags.inputs.is_empty());
        assert!(flags.has_generation_flags());
    }

    #[test]
    fn strict_sets_every_rule() {
        let flags = parse(&args(&["--strict"])).unwrap();
        assert!(flags.unique && flags.no_category_repetition && flags.no_letter_repetition);
    }

    #[test]
    fn positionals_are_inputs_in_order() {
        let flags = parse(&args(&["salt", "-S", "hint"])).unwrap();
        assert_eq!(flags.inputs, vec!["salt", "hint"]);
        assert!(flags.has_input());
    }

    #[test]
    fn double_dash_ends_flags() {
        let flags = parse(&args(&["-U", "--", "-l", "--weird"])).unwrap();
        assert!(flags.unique);
        assert_eq!(flags.length, None);
        assert_eq!(flags.inputs, vec!["-l", "--weird"]);
    }

    #[test]
    fn lone_dash_is_input() {
        let flags = parse(&args(&["-"])).unwrap();
        assert_eq!(flags.inputs, vec!["-"]);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["-l", "ten"])),
            Err(ParseError::InvalidNumber("ten".into()))
        );
        assert_eq!(parse(&args(&["-l", "-1"])), Err(ParseError::InvalidNumber("-1".into())));
        assert_eq!(parse(&args(&["-a"])), Err(ParseError::MissingValue("-a".into())));
        assert_eq!(parse(&args(&["--nope"])), Err(ParseError::UnknownArg("--nope".into())));
    }
}
