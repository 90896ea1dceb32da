use serde::{Deserialize, Serialize};

use regexgen_core::REPEAT_CEILING;

/// Options for the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Seed for the random source; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
    /// Upper bound on repetitions per repeat node.
    pub repeat_ceiling: u32,
    /// Re-check text patterns against the `regex` crate after generation.
    pub verify: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            repeat_ceiling: REPEAT_CEILING,
            verify: false,
        }
    }
}

/// Options for sampling a string from a named alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    /// Characters that always appear in the result.
    pub include: String,
    /// Characters removed from the alphabet before sampling.
    pub exclude: String,
}
