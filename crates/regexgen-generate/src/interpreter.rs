//! Recursive evaluator for regex operation trees.
//!
//! Every point of nondeterminism in the tree (alternation, class membership,
//! repetition count) is resolved with one draw from the [`RandomSource`]
//! held by the [`EvalContext`]. Captured groups live in the same context,
//! so the interpreter itself holds no per-call state.

use regexgen_core::{AlphabetProvider, Category, Operation, REPEAT_CEILING};

use crate::cache::GroupCache;
use crate::errors::{GenerationError, Result};
use crate::random::RandomSource;

/// Outcome of evaluating a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalResult {
    Text(String),
    /// Characters a class may draw from; only meaningful inside `in`.
    Candidates(Vec<char>),
    /// Leading marker of a negated class.
    Negated,
}

/// Per-call state threaded through the recursion.
pub struct EvalContext<'a, R: RandomSource + ?Sized> {
    pub rng: &'a mut R,
    pub groups: GroupCache,
}

impl<'a, R: RandomSource + ?Sized> EvalContext<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            groups: GroupCache::new(),
        }
    }
}

/// Evaluates operation trees into strings.
#[derive(Debug, Clone)]
pub struct OpcodeInterpreter {
    alphabets: AlphabetProvider,
    repeat_ceiling: u32,
}

impl Default for OpcodeInterpreter {
    fn default() -> Self {
        Self::new(AlphabetProvider::standard().clone(), REPEAT_CEILING)
    }
}

impl OpcodeInterpreter {
    pub fn new(alphabets: AlphabetProvider, repeat_ceiling: u32) -> Self {
        Self {
            alphabets,
            repeat_ceiling,
        }
    }

    pub fn alphabets(&self) -> &AlphabetProvider {
        &self.alphabets
    }

    /// Evaluate sibling operations and concatenate their text.
    pub fn evaluate_sequence<R: RandomSource + ?Sized>(
        &self,
        ops: &[Operation],
        ctx: &mut EvalContext<'_, R>,
    ) -> Result<String> {
        let mut out = String::new();
        for op in ops {
            match self.evaluate(op, ctx)? {
                EvalResult::Text(text) => out.push_str(&text),
                EvalResult::Candidates(chars) => out.extend(chars),
                EvalResult::Negated => {
                    return Err(GenerationError::UnsupportedOperation(
                        "negate outside of a character class".to_string(),
                    ));
                }
            }
        }
        Ok(out)
    }

    pub fn evaluate<R: RandomSource + ?Sized>(
        &self,
        op: &Operation,
        ctx: &mut EvalContext<'_, R>,
    ) -> Result<EvalResult> {
        let result = match op {
            Operation::Literal(ch) => EvalResult::Text(ch.to_string()),
            Operation::NotLiteral(ch) => {
                let pool = self.alphabets.printable().without(&[*ch]);
                EvalResult::Text(ctx.rng.choose(pool.chars())?.to_string())
            }
            Operation::At => EvalResult::Text(String::new()),
            Operation::Any => {
                let pool = self.alphabets.printable().without(&['\n']);
                EvalResult::Text(ctx.rng.choose(pool.chars())?.to_string())
            }
            Operation::Range(lo, hi) => EvalResult::Candidates((*lo..=*hi).collect()),
            Operation::Category(category) => {
                EvalResult::Candidates(self.category_chars(*category))
            }
            Operation::In(items) => EvalResult::Text(self.evaluate_in(items, ctx)?.to_string()),
            Operation::Negate => EvalResult::Negated,
            Operation::Branch(alternatives) => {
                let chosen = ctx.rng.choose(alternatives).map_err(|_| {
                    GenerationError::EmptyAlphabet("branch has no alternatives".to_string())
                })?;
                EvalResult::Text(self.evaluate_sequence(chosen, ctx)?)
            }
            Operation::Subpattern { group, body } => {
                let text = self.evaluate_sequence(body, ctx)?;
                if let Some(id) = group {
                    ctx.groups.put(*id, text.clone());
                }
                EvalResult::Text(text)
            }
            // Lookahead is not zero-width here: the asserted body is emitted.
            Operation::Assert(body) => EvalResult::Text(self.evaluate_sequence(body, ctx)?),
            Operation::AssertNot(_) => EvalResult::Text(String::new()),
            Operation::GroupRef(id) => EvalResult::Text(ctx.groups.get(*id)?.to_string()),
            Operation::MinRepeat { min, max, body } | Operation::MaxRepeat { min, max, body } => {
                EvalResult::Text(self.evaluate_repeat(*min, *max, body, ctx)?)
            }
        };
        Ok(result)
    }

    fn category_chars(&self, category: Category) -> Vec<char> {
        self.alphabets.category(category).chars().to_vec()
    }

    fn evaluate_in<R: RandomSource + ?Sized>(
        &self,
        items: &[Operation],
        ctx: &mut EvalContext<'_, R>,
    ) -> Result<char> {
        let mut negated = false;
        let mut candidates: Vec<char> = Vec::new();
        for (idx, item) in items.iter().enumerate() {
            match self.evaluate(item, ctx)? {
                EvalResult::Negated if idx == 0 => negated = true,
                EvalResult::Negated => {
                    return Err(GenerationError::UnsupportedOperation(
                        "negate must be the first item of a character class".to_string(),
                    ));
                }
                EvalResult::Candidates(chars) => candidates.extend(chars),
                EvalResult::Text(text) => candidates.extend(text.chars()),
            }
        }

        if negated {
            let remaining = self.alphabets.printable().without(&candidates);
            if remaining.is_empty() {
                return Err(GenerationError::EmptyAlphabet(
                    "negated class excludes every printable character".to_string(),
                ));
            }
            return ctx.rng.choose(remaining.chars()).copied();
        }

        ctx.rng.choose(&candidates).copied().map_err(|_| {
            GenerationError::EmptyAlphabet("character class has no members".to_string())
        })
    }

    fn evaluate_repeat<R: RandomSource + ?Sized>(
        &self,
        min: u32,
        max: u32,
        body: &[Operation],
        ctx: &mut EvalContext<'_, R>,
    ) -> Result<String> {
        let upper = max.min(self.repeat_ceiling).max(min);
        let times = ctx.rng.range_int(min, upper);
        let mut out = String::new();
        for _ in 0..times {
            out.push_str(&self.evaluate_sequence(body, ctx)?);
        }
        Ok(out)
    }
}
