use crate::error::{Error, Result};
use crate::operation::Operation;

/// Validate internal consistency of an operation tree.
///
/// This checks:
/// - range bounds are ordered
/// - repeat bounds are ordered
/// - `negate` only appears as the first item of an `in`
/// - group ids are non-zero
pub fn validate_tree(ops: &[Operation]) -> Result<()> {
    validate_sequence(ops, "$")
}

fn validate_sequence(ops: &[Operation], path: &str) -> Result<()> {
    for (idx, op) in ops.iter().enumerate() {
        validate_op(op, &format!("{path}[{idx}]"), false)?;
    }
    Ok(())
}

fn validate_op(op: &Operation, path: &str, leading_class_item: bool) -> Result<()> {
    match op {
        Operation::Literal(_)
        | Operation::NotLiteral(_)
        | Operation::At
        | Operation::Any
        | Operation::Category(_) => Ok(()),
        Operation::Range(lo, hi) => {
            if lo > hi {
                return Err(Error::InvalidTree(format!(
                    "{path}: range start {lo:?} is after end {hi:?}"
                )));
            }
            Ok(())
        }
        Operation::Negate => {
            if !leading_class_item {
                return Err(Error::InvalidTree(format!(
                    "{path}: negate must be the first item of an in"
                )));
            }
            Ok(())
        }
        Operation::In(items) => {
            for (idx, item) in items.iter().enumerate() {
                validate_op(item, &format!("{path}.in[{idx}]"), idx == 0)?;
            }
            Ok(())
        }
        Operation::Branch(alternatives) => {
            for (idx, alternative) in alternatives.iter().enumerate() {
                validate_sequence(alternative, &format!("{path}.branch[{idx}]"))?;
            }
            Ok(())
        }
        Operation::Subpattern { group, body } => {
            if *group == Some(0) {
                return Err(Error::InvalidTree(format!(
                    "{path}: group id 0 is reserved"
                )));
            }
            validate_sequence(body, &format!("{path}.body"))
        }
        Operation::Assert(body) | Operation::AssertNot(body) => {
            validate_sequence(body, &format!("{path}.body"))
        }
        Operation::GroupRef(id) => {
            if *id == 0 {
                return Err(Error::InvalidTree(format!(
                    "{path}: groupref to reserved group 0"
                )));
            }
            Ok(())
        }
        Operation::MinRepeat { min, max, body } | Operation::MaxRepeat { min, max, body } => {
            if min > max {
                return Err(Error::InvalidTree(format!(
                    "{path}: repeat min {min} exceeds max {max}"
                )));
            }
            validate_sequence(body, &format!("{path}.body"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{Category, MAXREPEAT};

    #[test]
    fn accepts_negated_class() {
        let ops = vec![Operation::In(vec![
            Operation::Negate,
            Operation::Category(Category::Digit),
        ])];
        assert!(validate_tree(&ops).is_ok());
    }

    #[test]
    fn rejects_negate_after_first_item() {
        let ops = vec![Operation::In(vec![
            Operation::Literal('a'),
            Operation::Negate,
        ])];
        let err = validate_tree(&ops).expect_err("misplaced negate");
        assert!(err.to_string().contains("$[0].in[1]"));
    }

    #[test]
    fn rejects_bare_negate() {
        assert!(matches!(
            validate_tree(&[Operation::Negate]),
            Err(Error::InvalidTree(_))
        ));
    }

    #[test]
    fn rejects_reversed_range_inside_repeat() {
        let ops = vec![Operation::MaxRepeat {
            min: 0,
            max: MAXREPEAT,
            body: vec![Operation::In(vec![Operation::Range('z', 'a')])],
        }];
        assert!(matches!(validate_tree(&ops), Err(Error::InvalidTree(_))));
    }

    #[test]
    fn rejects_reversed_repeat_bounds() {
        let ops = vec![Operation::MinRepeat {
            min: 3,
            max: 2,
            body: Operation::literal_str("x"),
        }];
        assert!(matches!(validate_tree(&ops), Err(Error::InvalidTree(_))));
    }

    #[test]
    fn rejects_group_zero() {
        let ops = vec![Operation::Subpattern {
            group: Some(0),
            body: Vec::new(),
        }];
        assert!(validate_tree(&ops).is_err());
        assert!(validate_tree(&[Operation::GroupRef(0)]).is_err());
    }
}
