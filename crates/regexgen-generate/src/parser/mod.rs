//! Lowers `regex-syntax` ASTs into operation trees.
//!
//! Backreferences and lookaround never reach `regex-syntax` as such; see
//! [`rewrite`] for how they are carried through.

mod rewrite;

use std::collections::HashMap;

use regex_syntax::ast::parse::Parser;
use regex_syntax::ast::{
    Ast, ClassAscii, ClassAsciiKind, ClassBracketed, ClassPerl, ClassPerlKind, ClassSet,
    ClassSetItem, GroupKind, RepetitionKind, RepetitionRange,
};

use regexgen_core::{AlphabetProvider, Category, MAXREPEAT, Operation};

use crate::errors::{GenerationError, Result};

use rewrite::{Placeholder, rewrite};

/// Operations parsed from pattern text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    pub ops: Vec<Operation>,
    /// Equivalent pattern for the `regex` crate; `None` when the pattern
    /// uses backreferences or lookaround.
    pub plain: Option<String>,
}

/// Parse pattern text, keeping a `regex`-compatible form when one exists.
pub fn parse(pattern: &str) -> Result<ParsedPattern> {
    let rewritten = rewrite(pattern);
    let ast = Parser::new().parse(&rewritten.text)?;
    let mut lowerer = Lowerer {
        named_refs: &rewritten.named_refs,
        next_group: 0,
        names: HashMap::new(),
    };
    let ops = lowerer.lower(&ast)?;
    let plain = (!rewritten.uses_markers).then_some(rewritten.plain);
    Ok(ParsedPattern { ops, plain })
}

/// Parse pattern text into a sequence of operations.
pub fn parse_pattern(pattern: &str) -> Result<Vec<Operation>> {
    Ok(parse(pattern)?.ops)
}

struct Lowerer<'a> {
    named_refs: &'a [String],
    /// Last group number handed out; marker groups do not count.
    next_group: u32,
    names: HashMap<String, u32>,
}

impl Lowerer<'_> {
    fn lower(&mut self, ast: &Ast) -> Result<Vec<Operation>> {
        let mut ops = Vec::new();
        self.lower_into(ast, &mut ops)?;
        Ok(ops)
    }

    fn lower_into(&mut self, ast: &Ast, out: &mut Vec<Operation>) -> Result<()> {
        match ast {
            Ast::Empty(_) | Ast::Flags(_) => {}
            Ast::Literal(literal) => out.push(Operation::Literal(literal.c)),
            Ast::Dot(_) => out.push(Operation::Any),
            Ast::Assertion(_) => out.push(Operation::At),
            Ast::ClassUnicode(_) => {
                return Err(GenerationError::UnsupportedOperation(
                    "unicode character classes".to_string(),
                ));
            }
            Ast::ClassPerl(class) => out.push(Operation::In(vec![perl_category(class)])),
            Ast::ClassBracketed(class) => out.push(lower_bracketed(class)?),
            Ast::Repetition(repetition) => {
                let (min, max) = match &repetition.op.kind {
                    RepetitionKind::ZeroOrOne => (0, 1),
                    RepetitionKind::ZeroOrMore => (0, MAXREPEAT),
                    RepetitionKind::OneOrMore => (1, MAXREPEAT),
                    RepetitionKind::Range(RepetitionRange::Exactly(n)) => (*n, *n),
                    RepetitionKind::Range(RepetitionRange::AtLeast(n)) => (*n, MAXREPEAT),
                    RepetitionKind::Range(RepetitionRange::Bounded(lo, hi)) => (*lo, *hi),
                };
                let body = self.lower(&repetition.ast)?;
                out.push(if repetition.greedy {
                    Operation::MaxRepeat { min, max, body }
                } else {
                    Operation::MinRepeat { min, max, body }
                });
            }
            Ast::Group(group) => {
                let op = match &group.kind {
                    GroupKind::CaptureName { name, .. } => {
                        match Placeholder::from_group_name(&name.name) {
                            Some(placeholder) => self.lower_marker(placeholder, &group.ast)?,
                            None => {
                                let id = self.open_group();
                                self.names.insert(name.name.clone(), id);
                                Operation::Subpattern {
                                    group: Some(id),
                                    body: self.lower(&group.ast)?,
                                }
                            }
                        }
                    }
                    GroupKind::CaptureIndex(_) => {
                        let id = self.open_group();
                        Operation::Subpattern {
                            group: Some(id),
                            body: self.lower(&group.ast)?,
                        }
                    }
                    GroupKind::NonCapturing(_) => Operation::Subpattern {
                        group: None,
                        body: self.lower(&group.ast)?,
                    },
                };
                out.push(op);
            }
            Ast::Alternation(alternation) => {
                let mut alternatives = Vec::with_capacity(alternation.asts.len());
                for item in &alternation.asts {
                    alternatives.push(self.lower(item)?);
                }
                out.push(Operation::Branch(alternatives));
            }
            Ast::Concat(concat) => {
                for item in &concat.asts {
                    self.lower_into(item, out)?;
                }
            }
        }
        Ok(())
    }

    /// Groups are numbered by opening parenthesis, before their bodies.
    fn open_group(&mut self) -> u32 {
        self.next_group += 1;
        self.next_group
    }

    fn lower_marker(&mut self, placeholder: Placeholder, body: &Ast) -> Result<Operation> {
        let op = match placeholder {
            Placeholder::Ref(id) => Operation::GroupRef(id),
            Placeholder::NamedRef(slot) => {
                let name = self.named_refs.get(slot).map(String::as_str).unwrap_or_default();
                let id = self
                    .names
                    .get(name)
                    .copied()
                    .ok_or_else(|| GenerationError::UnknownGroupName(name.to_string()))?;
                Operation::GroupRef(id)
            }
            Placeholder::Ahead | Placeholder::Behind => Operation::Assert(self.lower(body)?),
            Placeholder::NotAhead | Placeholder::NotBehind => {
                Operation::AssertNot(self.lower(body)?)
            }
        };
        Ok(op)
    }
}

fn perl_category(class: &ClassPerl) -> Operation {
    let category = match class.kind {
        ClassPerlKind::Digit => Category::Digit,
        ClassPerlKind::Space => Category::Space,
        ClassPerlKind::Word => Category::Word,
    };
    Operation::Category(if class.negated {
        category.complement()
    } else {
        category
    })
}

fn lower_bracketed(class: &ClassBracketed) -> Result<Operation> {
    let mut items = Vec::new();
    if class.negated {
        items.push(Operation::Negate);
    }
    match &class.kind {
        ClassSet::Item(item) => lower_set_item(item, &mut items)?,
        ClassSet::BinaryOp(_) => {
            return Err(GenerationError::UnsupportedOperation(
                "character class set operations".to_string(),
            ));
        }
    }
    Ok(Operation::In(items))
}

fn lower_set_item(item: &ClassSetItem, out: &mut Vec<Operation>) -> Result<()> {
    match item {
        ClassSetItem::Empty(_) => {}
        ClassSetItem::Literal(literal) => out.push(Operation::Literal(literal.c)),
        ClassSetItem::Range(range) => out.push(Operation::Range(range.start.c, range.end.c)),
        ClassSetItem::Ascii(class) => out.extend(ascii_members(class)),
        ClassSetItem::Unicode(_) => {
            return Err(GenerationError::UnsupportedOperation(
                "unicode character classes".to_string(),
            ));
        }
        ClassSetItem::Perl(class) => out.push(perl_category(class)),
        ClassSetItem::Bracketed(nested) => {
            if nested.negated {
                return Err(GenerationError::UnsupportedOperation(
                    "negated class nested in a class".to_string(),
                ));
            }
            match &nested.kind {
                ClassSet::Item(inner) => lower_set_item(inner, out)?,
                ClassSet::BinaryOp(_) => {
                    return Err(GenerationError::UnsupportedOperation(
                        "character class set operations".to_string(),
                    ));
                }
            }
        }
        ClassSetItem::Union(union) => {
            for inner in &union.items {
                lower_set_item(inner, out)?;
            }
        }
    }
    Ok(())
}

/// Expand a POSIX class like `[:alpha:]` into its printable members.
fn ascii_members(class: &ClassAscii) -> impl Iterator<Item = Operation> + '_ {
    AlphabetProvider::standard()
        .printable()
        .chars()
        .iter()
        .copied()
        .filter(move |ch| ascii_class_contains(&class.kind, *ch) != class.negated)
        .map(Operation::Literal)
}

fn ascii_class_contains(kind: &ClassAsciiKind, ch: char) -> bool {
    match kind {
        ClassAsciiKind::Alnum => ch.is_ascii_alphanumeric(),
        ClassAsciiKind::Alpha => ch.is_ascii_alphabetic(),
        ClassAsciiKind::Ascii => ch.is_ascii(),
        ClassAsciiKind::Blank => ch == ' ' || ch == '\t',
        ClassAsciiKind::Cntrl => ch.is_ascii_control(),
        ClassAsciiKind::Digit => ch.is_ascii_digit(),
        ClassAsciiKind::Graph => ch.is_ascii_graphic(),
        ClassAsciiKind::Lower => ch.is_ascii_lowercase(),
        ClassAsciiKind::Print => ch.is_ascii_graphic() || ch == ' ',
        ClassAsciiKind::Punct => ch.is_ascii_punctuation(),
        ClassAsciiKind::Space => matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'),
        ClassAsciiKind::Upper => ch.is_ascii_uppercase(),
        ClassAsciiKind::Word => ch.is_ascii_alphanumeric() || ch == '_',
        ClassAsciiKind::Xdigit => ch.is_ascii_hexdigit(),
    }
}
