use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use tracing::{debug, warn};

use regexgen_core::{AlphabetProvider, Operation, validate_tree};

use crate::errors::{GenerationError, Result};
use crate::interpreter::{EvalContext, OpcodeInterpreter};
use crate::model::{GenerateOptions, SampleOptions};
use crate::parser::parse;
use crate::sampler::sample_alphabet;

/// Pattern handed to [`Generator::generate`].
#[derive(Debug, Clone, Copy)]
pub enum PatternSource<'a> {
    Text(&'a str),
    Tree(&'a [Operation]),
}

impl<'a> From<&'a str> for PatternSource<'a> {
    fn from(value: &'a str) -> Self {
        PatternSource::Text(value)
    }
}

impl<'a> From<&'a String> for PatternSource<'a> {
    fn from(value: &'a String) -> Self {
        PatternSource::Text(value.as_str())
    }
}

impl<'a> From<&'a [Operation]> for PatternSource<'a> {
    fn from(value: &'a [Operation]) -> Self {
        PatternSource::Tree(value)
    }
}

impl<'a> From<&'a Vec<Operation>> for PatternSource<'a> {
    fn from(value: &'a Vec<Operation>) -> Self {
        PatternSource::Tree(value.as_slice())
    }
}

/// Entry point for generating strings from patterns.
///
/// Owns its random source, so a single instance must not be shared across
/// threads without external locking. Group captures are scoped to one
/// [`generate`](Self::generate) call.
#[derive(Debug, Clone)]
pub struct Generator {
    options: GenerateOptions,
    interpreter: OpcodeInterpreter,
    rng: ChaCha8Rng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let interpreter = OpcodeInterpreter::new(
            AlphabetProvider::standard().clone(),
            options.repeat_ceiling,
        );
        Self {
            options,
            interpreter,
            rng,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(GenerateOptions {
            seed: Some(seed),
            ..GenerateOptions::default()
        })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate one string matching `pattern`.
    pub fn generate<'a>(&mut self, pattern: impl Into<PatternSource<'a>>) -> Result<String> {
        match pattern.into() {
            PatternSource::Text(text) => {
                let parsed = parse(text)?;
                let value = self.run(&parsed.ops)?;
                if self.options.verify {
                    match &parsed.plain {
                        Some(plain) => verify_match(plain, &value)?,
                        None => debug!(
                            pattern = text,
                            "verification skipped: backreferences or lookaround"
                        ),
                    }
                }
                debug!(pattern = text, len = value.len(), "generated from pattern");
                Ok(value)
            }
            PatternSource::Tree(ops) => {
                validate_tree(ops)?;
                let value = self.run(ops)?;
                debug!(nodes = ops.len(), len = value.len(), "generated from tree");
                Ok(value)
            }
        }
    }

    /// Sample a string from one of the named alphabets (`"letters"`, ...).
    pub fn sample(&mut self, alphabet: &str, options: &SampleOptions) -> Result<String> {
        let alphabet = self
            .interpreter
            .alphabets()
            .named(alphabet)
            .ok_or_else(|| GenerationError::InvalidOptions(format!("unknown alphabet: {alphabet}")))?;
        sample_alphabet(alphabet, options, &mut self.rng)
    }

    fn run(&mut self, ops: &[Operation]) -> Result<String> {
        let mut ctx = EvalContext::new(&mut self.rng);
        self.interpreter.evaluate_sequence(ops, &mut ctx)
    }
}

/// Generate one string with a fixed seed.
pub fn generate_with_seed<'a>(pattern: impl Into<PatternSource<'a>>, seed: u64) -> Result<String> {
    Generator::from_seed(seed).generate(pattern)
}

/// Generate one string with a randomly seeded generator.
pub fn generate<'a>(pattern: impl Into<PatternSource<'a>>) -> Result<String> {
    Generator::default().generate(pattern)
}

fn verify_match(pattern: &str, value: &str) -> Result<()> {
    let regex = Regex::new(&format!("^(?:{pattern})$"))?;
    if !regex.is_match(value) {
        warn!(pattern, value, "generated value failed verification");
        return Err(GenerationError::NoMatch {
            pattern: pattern.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
