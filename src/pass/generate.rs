//! Password generation.

use std::fmt;
use std::io;

use tracing::{debug, trace};
use zeroize::Zeroize;

use super::options::{MAX, Options};
use crate::charset::{AlphabetSequence, CharacterClass};
use crate::digest::{DigestCombiner, Fnv1Sha512};
use crate::error::{Error, Result};
use crate::rand::{AdditiveSource, INITIAL_SEED};

/// Deterministic password generator.
///
/// Every byte written is folded into a digest combiner; after each write the
/// output is regenerated from scratch out of the combined digest, so it is a
/// pure function of the options and all input since the last reset.
///
/// The output is reproducible by anyone holding the same input and options.
/// Treat it as a derived password, never as a security boundary.
///
/// One generator serves one caller at a time; it holds no locks.
pub struct PasswordGenerator<C: DigestCombiner = Fnv1Sha512> {
    options: Options,
    alphabet: AlphabetSequence,
    combiner: C,
    rng: AdditiveSource,
    output: AlphabetSequence,
}

impl PasswordGenerator {
    pub fn new(options: Options) -> Self {
        Self::with_combiner(options, Fnv1Sha512::new())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<C: DigestCombiner> PasswordGenerator<C> {
    pub fn with_combiner(options: Options, combiner: C) -> Self {
        let alphabet = AlphabetSequence::new(options.alphabet_chars());
        Self {
            options,
            alphabet,
            combiner,
            rng: AdditiveSource::new(INITIAL_SEED),
            output: AlphabetSequence::default(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Feed `data` and regenerate the output.
    ///
    /// Returns the number of input bytes consumed. A combiner failure leaves
    /// the previous output in place; an unreachable complexity clears it.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.combiner.write(data)?;

        let checksum = self.combiner.checksum64();
        let mut picks = self.combiner.digest();
        let size = self.options.output_size();
        if size != MAX && size < self.combiner.digest_size() {
            picks.truncate(size);
        }

        debug!(
            input = data.len(),
            picks = picks.len(),
            alphabet = self.alphabet.len(),
            rules = %self.options.policy(),
            "regenerating output"
        );

        let generated = self.generate(checksum, &picks);
        picks.zeroize();
        self.output.zeroize();

        match generated {
            Ok(output) => {
                debug!(len = output.len(), "output generated");
                self.output = output;
                Ok(data.len())
            }
            Err(err) => {
                debug!(%err, "generation failed");
                self.output = AlphabetSequence::default();
                Err(err)
            }
        }
    }

    /// Choose one character per digest byte.
    fn generate(&mut self, checksum: u64, picks: &[u8]) -> Result<AlphabetSequence> {
        let size = self.options.output_size();
        let mut abc = self.alphabet.clone();
        let mut output = AlphabetSequence::with_capacity(picks.len());
        let mut entropy: usize = 0;

        for &byte in picks {
            let seed = (checksum as i64)
                .wrapping_add(i64::from(byte))
                .wrapping_add(entropy as i64);
            self.rng.seed(seed);

            // The shuffled order carries over to the next byte.
            abc = abc.shuffled(&mut self.rng);
            let mut src = abc.clone();

            let mut p = usize::from(byte);
            let mut attempt = 0;
            let accepted = loop {
                let Some(max) = src.len().checked_sub(1) else {
                    break None;
                };
                p = sine_index(p + attempt, max);
                entropy += p;

                let Some((rest, candidate)) = take(&src, p) else {
                    break None;
                };
                src = rest;
                if src.is_empty() {
                    break None;
                }

                match self.options.policy().check(&output, &candidate) {
                    Ok(()) => break Some(candidate),
                    Err(rejection) => trace!(%rejection, attempt, "candidate rejected"),
                }
                attempt += 1;
            };

            match accepted {
                Some(candidate) => output.push(candidate),
                None if size == MAX => {
                    debug!(len = output.len(), "alphabet exhausted, stopping early");
                    return Ok(output);
                }
                None => return Err(Error::UnreachableComplexity { size }),
            }
        }

        Ok(output)
    }

    /// `prefix` followed by the UTF-8 encoded output.
    pub fn sum(&self, prefix: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(prefix.len() + self.output.len());
        out.extend_from_slice(prefix);

        let mut buf = [0u8; 4];
        for c in &self.output {
            out.extend_from_slice(c.char().encode_utf8(&mut buf).as_bytes());
        }
        buf.zeroize();
        out
    }

    /// The current output as a string.
    pub fn as_string(&self) -> String {
        self.output.to_string()
    }

    /// The current output characters.
    pub fn output(&self) -> &[CharacterClass] {
        self.output.as_slice()
    }

    /// Forget all input and output.
    pub fn reset(&mut self) {
        self.output.zeroize();
        self.output = AlphabetSequence::default();
        self.rng.seed(INITIAL_SEED);
        self.combiner.reset();
    }

    /// Output length requested, or the digest size when unbounded.
    pub fn size(&self) -> usize {
        match self.options.output_size() {
            MAX => self.combiner.digest_size(),
            size => size,
        }
    }

    pub fn block_size(&self) -> usize {
        1
    }
}

/// `trunc(sin(x) * max / 2 + max / 2)`, a pseudo-index in `[0, max]`.
#[inline]
fn sine_index(x: usize, max: usize) -> usize {
    let y = (x as f64).sin();
    let max = max as f64;
    (y * max / 2.0 + max / 2.0) as usize
}

/// The element at `i` and a copy of `src` without it.
fn take(src: &AlphabetSequence, i: usize) -> Option<(AlphabetSequence, CharacterClass)> {
    let picked = src.pick_at(i)?;
    let rest = src.remove_at(i)?;
    Some((rest, picked))
}

impl<C: DigestCombiner> io::Write for PasswordGenerator<C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        PasswordGenerator::write(self, buf).map_err(|err| match err {
            Error::Combiner(err) => err,
            err => io::Error::other(err),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<C: DigestCombiner> fmt::Display for PasswordGenerator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.output)
    }
}

impl<C: DigestCombiner> fmt::Debug for PasswordGenerator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordGenerator")
            .field("options", &self.options)
            .field("output_len", &self.output.len())
            .finish_non_exhaustive()
    }
}

impl<C: DigestCombiner> Drop for PasswordGenerator<C> {
    fn drop(&mut self) {
        self.output.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{ABC, NULS};

    struct Broken;

    impl DigestCombiner for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "combiner closed"))
        }
        fn checksum64(&self) -> u64 {
            0
        }
        fn digest(&self) -> Vec<u8> {
            Vec::new()
        }
        fn digest_size(&self) -> usize {
            64
        }
        fn reset(&mut self) {}
    }

    fn generate(options: Options, input: &[u8]) -> Result<String> {
        let mut generator = PasswordGenerator::new(options);
        generator.write(input)?;
        Ok(generator.as_string())
    }

    #[test]
    fn sine_index_stays_in_range() {
        for max in 0..80 {
            for x in 0..400 {
                assert!(sine_index(x, max) <= max, "x={x} max={max}");
            }
        }
        assert_eq!(sine_index(0, 70), 35);
    }

    #[test]
    fn default_options() {
        assert_eq!(generate(Options::default(), b"hello").unwrap(), "E9UZLvusQTdf5GYE83tk");
        assert_eq!(generate(Options::default(), b"").unwrap(), "d$bP+b3su+julFOA0vUI");
    }

    #[test]
    fn write_reports_input_length() {
        let mut generator = PasswordGenerator::default();
        assert_eq!(generator.write(b"salt").unwrap(), 4);
        assert_eq!(generator.write(b"").unwrap(), 0);
        assert_eq!(generator.as_string().chars().count(), 20);
    }

    #[test]
    fn output_is_replaced_not_appended() {
        let mut split = PasswordGenerator::default();
        split.write(b"salt").unwrap();
        split.write(b"hint").unwrap();

        assert_eq!(split.as_string(), "eHpky88e2vYyx6baOBX@");
        assert_eq!(split.as_string(), generate(Options::default(), b"salthint").unwrap());
    }

    #[test]
    fn sum_appends_to_prefix_without_mutating() {
        let mut generator = PasswordGenerator::new(Options::new().alphabet("n|_-").size(8));
        generator.write(b"salt").unwrap();

        assert_eq!(generator.sum(b""), b"69038163");
        assert_eq!(generator.sum(b"pw:"), b"pw:69038163");
        assert_eq!(generator.sum(b""), b"69038163");
    }

    #[test]
    fn reset_returns_to_fresh_state() {
        let mut generator = PasswordGenerator::new(Options::new().unique().size(10));
        generator.write(b"something else").unwrap();
        generator.reset();
        assert!(generator.sum(b"").is_empty());

        generator.write(b"salthint").unwrap();
        assert_eq!(generator.as_string(), "eHpky8UQ^r");
    }

    #[test]
    fn size_and_block_size() {
        let generator = PasswordGenerator::new(Options::new().size(12));
        assert_eq!(generator.size(), 12);
        assert_eq!(generator.block_size(), 1);

        let generator = PasswordGenerator::new(Options::new().size(MAX));
        assert_eq!(generator.size(), 64);
    }

    #[test]
    fn size_beyond_digest_uses_whole_digest() {
        let out = generate(Options::new().size(100), b"salthint").unwrap();
        assert_eq!(out.chars().count(), 64);
    }

    #[test]
    fn exhaustion_with_fixed_size_fails_and_clears() {
        let mut generator = PasswordGenerator::new(Options::new().alphabet("n").unique().size(10));
        generator.write(b"salthint").unwrap();
        assert_eq!(generator.as_string(), "5986271430");

        let mut generator = PasswordGenerator::new(Options::new().alphabet("n").unique().size(11));
        let err = generator.write(b"salthint").unwrap_err();
        assert!(matches!(err, Error::UnreachableComplexity { size: 11 }));
        assert!(generator.sum(b"").is_empty());
    }

    #[test]
    fn exhaustion_with_max_size_truncates() {
        let out = generate(Options::new().alphabet("n").unique().size(MAX), b"salthint").unwrap();
        assert_eq!(out, "5986271430");
    }

    #[test]
    fn empty_alphabet() {
        let out = generate(Options::new().alphabet("x").size(MAX), b"salt").unwrap();
        assert!(out.is_empty());

        let err = generate(Options::new().alphabet("x").size(4), b"salt").unwrap_err();
        assert!(matches!(err, Error::UnreachableComplexity { size: 4 }));
    }

    #[test]
    fn combiner_failure_keeps_previous_output() {
        let mut generator = PasswordGenerator::with_combiner(Options::default(), Broken);
        let err = generator.write(b"salt").unwrap_err();
        assert!(matches!(err, Error::Combiner(_)));
        assert!(generator.sum(b"").is_empty());
    }

    #[test]
    fn io_write_drives_the_generator() {
        use std::io::Write;

        let mut generator = PasswordGenerator::new(
            Options::new().size(MAX).alphabet(NULS).strict(),
        );
        generator.write_all(b"salt").unwrap();
        generator.write_all(b"hint").unwrap();
        generator.flush().unwrap();

        assert_eq!(generator.to_string(), "e@c*x6d-q#J8U&F^%H+t7Y!L1P4M5I$g0S2A?R3o9n");
    }

    #[test]
    fn io_write_maps_errors() {
        use std::io::Write;

        let mut generator = PasswordGenerator::with_combiner(Options::default(), Broken);
        let err = io::Write::write(&mut generator, b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mut generator = PasswordGenerator::new(Options::new().alphabet("x").size(3));
        let err = generator.write_all(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn output_draws_from_alphabet() {
        let out = generate(Options::new().size(MAX), b"alphabet check").unwrap();
        assert!(out.chars().all(|c| ABC.contains(c)));
    }
}
