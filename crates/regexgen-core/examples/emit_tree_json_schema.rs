use regexgen_core::Operation;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(Vec<Operation>);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
