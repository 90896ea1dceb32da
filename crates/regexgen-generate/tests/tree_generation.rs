use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use regexgen_core::{Category, MAXREPEAT, Operation, tree_from_json};
use regexgen_generate::{EvalContext, GenerationError, Generator, OpcodeInterpreter};

fn lowercase_word(group: u32) -> Operation {
    Operation::Subpattern {
        group: Some(group),
        body: vec![Operation::MaxRepeat {
            min: 1,
            max: 6,
            body: vec![Operation::In(vec![Operation::Range('a', 'z')])],
        }],
    }
}

#[test]
fn backreference_repeats_captured_text() {
    let ops = vec![lowercase_word(1), Operation::Literal('-'), Operation::GroupRef(1)];
    let mut generator = Generator::from_seed(31);
    for _ in 0..50 {
        let value = generator.generate(&ops).expect("generate");
        let (left, right) = value.split_once('-').expect("separator");
        assert!(!left.is_empty());
        assert_eq!(left, right);
    }
}

#[test]
fn backreference_to_unwritten_group_fails() {
    let ops = vec![lowercase_word(1), Operation::GroupRef(2)];
    let mut generator = Generator::from_seed(1);
    assert!(matches!(
        generator.generate(&ops),
        Err(GenerationError::UnresolvedReference(2))
    ));
}

#[test]
fn backreference_before_its_group_fails() {
    let ops = vec![Operation::GroupRef(1), lowercase_word(1)];
    let mut generator = Generator::from_seed(1);
    assert!(matches!(
        generator.generate(&ops),
        Err(GenerationError::UnresolvedReference(1))
    ));
}

#[test]
fn captures_do_not_leak_between_calls() {
    let mut generator = Generator::from_seed(4);
    let writes = vec![lowercase_word(1)];
    let reads = vec![Operation::GroupRef(1)];

    generator.generate(&writes).expect("capture");
    assert!(matches!(
        generator.generate(&reads),
        Err(GenerationError::UnresolvedReference(1))
    ));
}

#[test]
fn positive_lookahead_emits_its_body() {
    let ops = vec![
        Operation::Assert(Operation::literal_str("ab")),
        Operation::Literal('c'),
    ];
    let mut generator = Generator::from_seed(1);
    assert_eq!(generator.generate(&ops).expect("generate"), "abc");
}

#[test]
fn negative_lookahead_emits_nothing() {
    let ops = vec![
        Operation::AssertNot(vec![Operation::GroupRef(9)]),
        Operation::Literal('c'),
    ];
    let mut generator = Generator::from_seed(1);
    assert_eq!(generator.generate(&ops).expect("generate"), "c");
}

#[test]
fn not_literal_avoids_its_character() {
    let ops = vec![Operation::MaxRepeat {
        min: 100,
        max: 100,
        body: vec![Operation::NotLiteral('a')],
    }];
    let mut generator = Generator::from_seed(12);
    let value = generator.generate(&ops).expect("generate");
    assert_eq!(value.chars().count(), 100);
    assert!(!value.contains('a'));
}

#[test]
fn negated_category_class_stays_in_complement() {
    let ops = vec![Operation::MaxRepeat {
        min: 50,
        max: 50,
        body: vec![Operation::In(vec![
            Operation::Negate,
            Operation::Category(Category::Digit),
        ])],
    }];
    let mut generator = Generator::from_seed(6);
    let value = generator.generate(&ops).expect("generate");
    assert!(value.chars().all(|ch| !ch.is_ascii_digit()), "{value:?}");
}

#[test]
fn repeat_counts_respect_bounds() {
    let interpreter = OpcodeInterpreter::default();
    let bounded = vec![Operation::MinRepeat {
        min: 5,
        max: 7,
        body: vec![Operation::Literal('r')],
    }];
    let unbounded = vec![Operation::MaxRepeat {
        min: 2,
        max: MAXREPEAT,
        body: vec![Operation::Literal('u')],
    }];
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ctx = EvalContext::new(&mut rng);
        let value = interpreter
            .evaluate_sequence(&bounded, &mut ctx)
            .expect("bounded");
        assert!((5..=7).contains(&value.len()));
        let value = interpreter
            .evaluate_sequence(&unbounded, &mut ctx)
            .expect("unbounded");
        assert!((2..=100).contains(&value.len()));
    }
}

#[test]
fn invalid_trees_are_rejected_before_evaluation() {
    let ops = vec![Operation::In(vec![Operation::Range('9', '0')])];
    let mut generator = Generator::from_seed(1);
    assert!(matches!(
        generator.generate(&ops),
        Err(GenerationError::InvalidTree(_))
    ));
}

#[test]
fn unknown_opcodes_map_to_unsupported_operation() {
    let err = tree_from_json(r#"[{"op": "possessive_repeat", "arg": {}}]"#)
        .expect_err("unknown opcode");
    assert!(matches!(
        GenerationError::from(err),
        GenerationError::UnsupportedOperation(op) if op == "possessive_repeat"
    ));
}

#[test]
fn json_tree_generates_like_parsed_pattern() {
    let json = r#"[
      {"op": "in", "arg": [{"op": "category", "arg": "digit"}]},
      {"op": "literal", "arg": "-"},
      {"op": "branch", "arg": [[{"op": "literal", "arg": "x"}], [{"op": "literal", "arg": "y"}]]}
    ]"#;
    let ops = tree_from_json(json).expect("tree");
    let mut generator = Generator::from_seed(10);
    let value = generator.generate(&ops).expect("generate");
    let regex = regex::Regex::new(r"^\d-(x|y)$").expect("regex");
    assert!(regex.is_match(&value), "{value:?}");
}
