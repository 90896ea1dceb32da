//! JSON encoding of operation trees.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::operation::{Opcode, Operation};
use crate::validation::validate_tree;

/// Decode and validate a tree from its JSON form (an array of operations).
///
/// Unknown `op` tags are reported as [`Error::UnsupportedOpcode`] rather
/// than as a generic decoding failure.
pub fn tree_from_json(json: &str) -> Result<Vec<Operation>> {
    let value: Value = serde_json::from_str(json)?;
    check_opcodes(&value)?;
    let ops: Vec<Operation> = serde_json::from_value(value)?;
    validate_tree(&ops)?;
    Ok(ops)
}

pub fn tree_to_json(ops: &[Operation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(ops)?)
}

fn check_opcodes(value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => items.iter().try_for_each(check_opcodes),
        Value::Object(map) => {
            if let Some(Value::String(op)) = map.get("op") {
                op.parse::<Opcode>().map_err(Error::UnsupportedOpcode)?;
            }
            map.values().try_for_each(check_opcodes)
        }
        _ => Ok(()),
    }
}
