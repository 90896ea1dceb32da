use rand::RngCore;
use rand::seq::SliceRandom;

use regexgen_core::Alphabet;

use crate::errors::{GenerationError, Result};
use crate::model::SampleOptions;
use crate::random::RandomSource;

const DEFAULT_MIN_LEN: usize = 1;
const DEFAULT_MAX_LEN: usize = 10;
/// Upper bound on `min_len`/`max_len`; the whole string is held in memory.
pub const MAX_SAMPLE_LEN: usize = 1 << 20;

/// Draw a random string from `alphabet`.
///
/// Characters in `include` are always present; the target length counts
/// them, so `include` longer than the drawn length yields exactly `include`
/// (shuffled).
pub fn sample_alphabet(
    alphabet: &Alphabet,
    options: &SampleOptions,
    rng: &mut dyn RngCore,
) -> Result<String> {
    if let Some(shared) = options
        .include
        .chars()
        .find(|ch| options.exclude.contains(*ch))
    {
        return Err(GenerationError::InvalidOptions(format!(
            "character {shared:?} is both included and excluded"
        )));
    }

    let excluded: Vec<char> = options.exclude.chars().collect();
    let population = alphabet.without(&excluded);

    let len = match (options.min_len, options.max_len) {
        (None, None) => rng.range_int(DEFAULT_MIN_LEN as u32, DEFAULT_MAX_LEN as u32) as usize,
        (Some(min), None) => {
            check_len("min_len", min)?;
            min
        }
        (None, Some(max)) => draw_len(rng, 0, max)?,
        (Some(min), Some(max)) => draw_len(rng, min, max)?,
    };
    let included = options.include.chars().count();
    let drawn = len.saturating_sub(included);
    let capacity = drawn.checked_add(included).ok_or_else(|| {
        GenerationError::InvalidOptions("sample length overflows usize".to_string())
    })?;

    let mut chars = Vec::with_capacity(capacity);
    for _ in 0..drawn {
        let ch = rng.choose(population.chars()).map_err(|_| {
            GenerationError::EmptyAlphabet("every alphabet character was excluded".to_string())
        })?;
        chars.push(*ch);
    }
    chars.extend(options.include.chars());
    chars.shuffle(rng);
    Ok(chars.into_iter().collect())
}

fn draw_len(rng: &mut dyn RngCore, min: usize, max: usize) -> Result<usize> {
    if min > max {
        return Err(GenerationError::InvalidOptions(
            "min_len must be <= max_len".to_string(),
        ));
    }
    let min = check_len("min_len", min)?;
    let max = check_len("max_len", max)?;
    Ok(rng.range_int(min, max) as usize)
}

fn check_len(name: &str, len: usize) -> Result<u32> {
    if len > MAX_SAMPLE_LEN {
        return Err(GenerationError::InvalidOptions(format!(
            "{name} must be <= {MAX_SAMPLE_LEN}"
        )));
    }
    u32::try_from(len)
        .map_err(|_| GenerationError::InvalidOptions(format!("{name} must fit u32")))
}
