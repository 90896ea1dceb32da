//! Core contracts for regexgen.
//!
//! This crate defines the regex operation tree, the character alphabets
//! sampled during generation, and tree validation helpers shared by the
//! generator and the CLI.

pub mod alphabet;
pub mod error;
pub mod operation;
pub mod tree;
pub mod validation;

pub use alphabet::{Alphabet, AlphabetProvider};
pub use error::{Error, Result};
pub use operation::{Category, MAXREPEAT, Opcode, Operation};
pub use tree::{tree_from_json, tree_to_json};
pub use validation::validate_tree;

/// Maximum repetitions produced for an unbounded or large repeat.
pub const REPEAT_CEILING: u32 = 100;
