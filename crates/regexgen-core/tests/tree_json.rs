use regexgen_core::{Category, Error, MAXREPEAT, Operation, tree_from_json, tree_to_json};

#[test]
fn serializes_tree_with_op_tags() {
    let ops = vec![
        Operation::Literal('a'),
        Operation::At,
        Operation::In(vec![
            Operation::Negate,
            Operation::Category(Category::NotSpace),
        ]),
        Operation::GroupRef(1),
    ];

    let json = serde_json::to_string(&ops).expect("serialize tree");
    let expected = r#"[{"op":"literal","arg":"a"},{"op":"at"},{"op":"in","arg":[{"op":"negate"},{"op":"category","arg":"not_space"}]},{"op":"groupref","arg":1}]"#;
    assert_eq!(json, expected);
}

#[test]
fn loads_tree_written_by_hand() {
    let json = r#"[
      {"op": "subpattern", "arg": {"group": 1, "body": [
        {"op": "max_repeat", "arg": {"min": 1, "max": 4294967295, "body": [
          {"op": "in", "arg": [{"op": "range", "arg": ["a", "z"]}]}
        ]}}
      ]}},
      {"op": "literal", "arg": "-"},
      {"op": "groupref", "arg": 1}
    ]"#;

    let ops = tree_from_json(json).expect("load tree");
    assert_eq!(
        ops,
        vec![
            Operation::Subpattern {
                group: Some(1),
                body: vec![Operation::MaxRepeat {
                    min: 1,
                    max: MAXREPEAT,
                    body: vec![Operation::In(vec![Operation::Range('a', 'z')])],
                }],
            },
            Operation::Literal('-'),
            Operation::GroupRef(1),
        ]
    );

    let round = tree_to_json(&ops).expect("write tree");
    assert_eq!(tree_from_json(&round).expect("reload tree"), ops);
}

#[test]
fn unknown_opcode_is_unsupported() {
    let json = r#"[{"op": "branch", "arg": [[{"op": "atomic_group", "arg": []}]]}]"#;
    match tree_from_json(json) {
        Err(Error::UnsupportedOpcode(op)) => assert_eq!(op, "atomic_group"),
        other => panic!("expected unsupported opcode, got {other:?}"),
    }
}

#[test]
fn invalid_structure_is_rejected_after_decoding() {
    let json = r#"[{"op": "min_repeat", "arg": {"min": 5, "max": 1, "body": []}}]"#;
    assert!(matches!(tree_from_json(json), Err(Error::InvalidTree(_))));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(tree_from_json("[{"), Err(Error::Json(_))));
}
