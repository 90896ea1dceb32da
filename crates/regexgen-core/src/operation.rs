use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound used by the parser for `*`, `+` and `{n,}`.
pub const MAXREPEAT: u32 = u32::MAX;

/// Predefined character class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Digit,
    NotDigit,
    Space,
    NotSpace,
    Word,
    NotWord,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Digit,
        Category::NotDigit,
        Category::Space,
        Category::NotSpace,
        Category::Word,
        Category::NotWord,
    ];

    /// The category matching exactly the characters this one rejects.
    pub fn complement(self) -> Category {
        match self {
            Category::Digit => Category::NotDigit,
            Category::NotDigit => Category::Digit,
            Category::Space => Category::NotSpace,
            Category::NotSpace => Category::Space,
            Category::Word => Category::NotWord,
            Category::NotWord => Category::Word,
        }
    }
}

/// A node of the regex operation tree.
///
/// Serialized adjacently tagged, e.g. `{"op": "literal", "arg": "a"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub enum Operation {
    Literal(char),
    NotLiteral(char),
    /// Anchor or boundary; consumes no characters.
    At,
    Any,
    Range(char, char),
    Category(Category),
    In(Vec<Operation>),
    Negate,
    Branch(Vec<Vec<Operation>>),
    Subpattern {
        group: Option<u32>,
        body: Vec<Operation>,
    },
    Assert(Vec<Operation>),
    AssertNot(Vec<Operation>),
    #[serde(rename = "groupref")]
    GroupRef(u32),
    MinRepeat {
        min: u32,
        max: u32,
        body: Vec<Operation>,
    },
    MaxRepeat {
        min: u32,
        max: u32,
        body: Vec<Operation>,
    },
}

impl Operation {
    pub fn literal_str(text: &str) -> Vec<Operation> {
        text.chars().map(Operation::Literal).collect()
    }
}

/// Opcode tags, as they appear in the serialized `op` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Literal,
    NotLiteral,
    At,
    Any,
    Range,
    Category,
    In,
    Negate,
    Branch,
    Subpattern,
    Assert,
    AssertNot,
    GroupRef,
    MinRepeat,
    MaxRepeat,
}

impl Opcode {
    pub const ALL: [Opcode; 15] = [
        Opcode::Literal,
        Opcode::NotLiteral,
        Opcode::At,
        Opcode::Any,
        Opcode::Range,
        Opcode::Category,
        Opcode::In,
        Opcode::Negate,
        Opcode::Branch,
        Opcode::Subpattern,
        Opcode::Assert,
        Opcode::AssertNot,
        Opcode::GroupRef,
        Opcode::MinRepeat,
        Opcode::MaxRepeat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Opcode::Literal => "literal",
            Opcode::NotLiteral => "not_literal",
            Opcode::At => "at",
            Opcode::Any => "any",
            Opcode::Range => "range",
            Opcode::Category => "category",
            Opcode::In => "in",
            Opcode::Negate => "negate",
            Opcode::Branch => "branch",
            Opcode::Subpattern => "subpattern",
            Opcode::Assert => "assert",
            Opcode::AssertNot => "assert_not",
            Opcode::GroupRef => "groupref",
            Opcode::MinRepeat => "min_repeat",
            Opcode::MaxRepeat => "max_repeat",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Opcode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .into_iter()
            .find(|opcode| opcode.as_str() == value)
            .ok_or_else(|| value.to_string())
    }
}
