//! Character sets used when sampling.
//!
//! Every set is a subset of [`PRINTABLE`], the ASCII digits, letters,
//! punctuation and whitespace. Category complements are derived as
//! printable minus the positive set, so each pair partitions printable.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::operation::Category;

pub const DIGITS: &str = "0123456789";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const WHITESPACE: &str = " \t\n\r\x0b\x0c";
pub const PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
);

static STANDARD: LazyLock<AlphabetProvider> = LazyLock::new(AlphabetProvider::build);

/// Ordered, duplicate-free character set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut out: Vec<char> = Vec::new();
        for ch in chars {
            if !out.contains(&ch) {
                out.push(ch);
            }
        }
        Self { chars: out }
    }

    pub fn from_parts(parts: &[&str]) -> Self {
        Self::new(parts.iter().flat_map(|part| part.chars()))
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Characters of `self` that do not appear in `excluded`, order kept.
    pub fn without(&self, excluded: &[char]) -> Alphabet {
        Alphabet {
            chars: self
                .chars
                .iter()
                .copied()
                .filter(|ch| !excluded.contains(ch))
                .collect(),
        }
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Printable baseline, category sets and named sampling alphabets.
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AlphabetProvider {
    printable: Alphabet,
    categories: [Alphabet; 6],
    named: BTreeMap<&'static str, Alphabet>,
}

impl AlphabetProvider {
    /// Shared process-wide provider.
    pub fn standard() -> &'static AlphabetProvider {
        &STANDARD
    }

    fn build() -> Self {
        let printable = Alphabet::from_parts(&[PRINTABLE]);
        let letters = [LOWERCASE, UPPERCASE];
        let digit = Alphabet::from_parts(&[DIGITS]);
        let space = Alphabet::from_parts(&[WHITESPACE]);
        let word = Alphabet::from_parts(&[LOWERCASE, UPPERCASE, DIGITS, "_"]);

        let categories = [
            digit.clone(),
            printable.without(digit.chars()),
            space.clone(),
            printable.without(space.chars()),
            word.clone(),
            printable.without(word.chars()),
        ];

        let mut named = BTreeMap::new();
        named.insert("printable", printable.clone());
        named.insert("letters", Alphabet::from_parts(&letters));
        named.insert("uppercase", Alphabet::from_parts(&[UPPERCASE]));
        named.insert("lowercase", Alphabet::from_parts(&[LOWERCASE]));
        named.insert("digits", digit.clone());
        named.insert("punctuation", Alphabet::from_parts(&[PUNCTUATION]));
        named.insert("nondigits", categories[1].clone());
        named.insert(
            "nonletters",
            printable.without(Alphabet::from_parts(&letters).chars()),
        );
        named.insert("whitespace", space.clone());
        named.insert("nonwhitespace", categories[3].clone());
        named.insert(
            "normal",
            Alphabet::from_parts(&[LOWERCASE, UPPERCASE, DIGITS, " "]),
        );
        named.insert("word", word.clone());
        named.insert("nonword", categories[5].clone());
        named.insert(
            "postalsafe",
            Alphabet::from_parts(&[LOWERCASE, UPPERCASE, DIGITS, " .-#/"]),
        );
        named.insert(
            "urlsafe",
            Alphabet::from_parts(&[LOWERCASE, UPPERCASE, DIGITS, "-._~"]),
        );
        named.insert(
            "domainsafe",
            Alphabet::from_parts(&[LOWERCASE, UPPERCASE, DIGITS, "-"]),
        );

        Self {
            printable,
            categories,
            named,
        }
    }

    pub fn printable(&self) -> &Alphabet {
        &self.printable
    }

    pub fn category(&self, category: Category) -> &Alphabet {
        let idx = match category {
            Category::Digit => 0,
            Category::NotDigit => 1,
            Category::Space => 2,
            Category::NotSpace => 3,
            Category::Word => 4,
            Category::NotWord => 5,
        };
        &self.categories[idx]
    }

    /// Look up a sampling alphabet such as `"letters"` or `"urlsafe"`.
    pub fn named(&self, name: &str) -> Option<&Alphabet> {
        self.named.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.named.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_has_one_hundred_distinct_chars() {
        let provider = AlphabetProvider::standard();
        assert_eq!(provider.printable().len(), 100);
        assert_eq!(provider.printable().as_string(), PRINTABLE);
    }

    #[test]
    fn categories_partition_printable() {
        let provider = AlphabetProvider::standard();
        for category in Category::ALL {
            let positive = provider.category(category);
            let negative = provider.category(category.complement());
            for ch in provider.printable().chars() {
                assert!(
                    positive.contains(*ch) ^ negative.contains(*ch),
                    "{:?} splits {ch:?} incorrectly",
                    category
                );
            }
            assert_eq!(positive.len() + negative.len(), provider.printable().len());
        }
    }

    #[test]
    fn alphabet_drops_duplicates_and_keeps_order() {
        let alphabet = Alphabet::new("abcabd".chars());
        assert_eq!(alphabet.as_string(), "abcd");
        assert_eq!(alphabet.without(&['b']).as_string(), "acd");
    }

    #[test]
    fn named_alphabets_are_printable_subsets() {
        let provider = AlphabetProvider::standard();
        for name in provider.names() {
            let alphabet = provider.named(name).expect("named alphabet");
            assert!(!alphabet.is_empty(), "{name} is empty");
            assert!(
                alphabet
                    .chars()
                    .iter()
                    .all(|ch| provider.printable().contains(*ch)),
                "{name} leaves printable"
            );
        }
        assert_eq!(provider.named("urlsafe").map(Alphabet::len), Some(66));
        assert!(provider.named("klingon").is_none());
    }
}
