//! Random string generation from regular expressions.
//!
//! Patterns are parsed with `regex-syntax`, lowered into the operation tree
//! from `regexgen-core`, and evaluated with seeded randomness so fixtures can
//! be reproduced.

pub mod cache;
pub mod engine;
pub mod errors;
pub mod interpreter;
pub mod model;
pub mod parser;
pub mod random;
pub mod sampler;

pub use cache::GroupCache;
pub use engine::{Generator, PatternSource, generate, generate_with_seed};
pub use errors::GenerationError;
pub use interpreter::{EvalContext, EvalResult, OpcodeInterpreter};
pub use model::{GenerateOptions, SampleOptions};
pub use parser::{ParsedPattern, parse, parse_pattern};
pub use random::RandomSource;
