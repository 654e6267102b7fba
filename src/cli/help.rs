pub fn print_help() {
    println!(
        "\
hintpass {version}
Deterministic password generator: the same inputs always give the same password.

The password is derived from the inputs, so it is only as secret as they are.
Do not use it where an attacker may know or guess the inputs.

USAGE:
  hintpass [OPTIONS] [INPUT]...

  Each INPUT is written to the generator in order (e.g. a salt, then a hint).

OPTIONS:
 Password:
  -a, --alphabet <TOKENS>          Alphabet as codes[|literals] (default: nuls)
                                   n/1 digits, u/A upper, l/a lower, s/@ symbols
  -l, --length <N>                 Password length, 0 for maximum (default: 20)
  -U, --unique                     No character repeats, ignoring case
  -C, --no-category-repetition     Adjacent characters differ in category
  -L, --no-letter-repetition       No two adjacent letters
  -S, --strict                     All three rules

 Input:
  -i, --stdin                      Read one more input from stdin
                                   (a single trailing newline is dropped)
  -p, --prompt                     Prompt for inputs without echo

 Output:
  -b, --board                      Copy to clipboard instead of printing
  -q, --quiet                      Suppress warnings and confirmations

 Settings:
  -c, --command [FLAGS]            Save password flags as defaults. Run alone to clear.
  -d, --default                    Ignore saved defaults

 Info:
  -h, --help                       Display this help message
  -v, --version                    Display version

ENVIRONMENT:
  HINTPASS_SETTINGS                Settings file (default: ~/.config/hintpass/settings)
  RUST_LOG                         Log filter, e.g. RUST_LOG=hintpass=debug

EXAMPLES:
  hintpass -p                      Prompt for inputs
  hintpass -l 0 -S salt hint       Longest strict password for two inputs
  hintpass -a 'n|_-' -l 8 --stdin  Eight digits, underscores or dashes
  hintpass -c -l 16 -U             Save 16 unique characters as default",
        version = env!("CARGO_PKG_VERSION")
    );
}
