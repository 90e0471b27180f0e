// File: crates/kline-core/src/merge.rs
// Summary: Recursive merge of declarative option trees.

use serde_json::Value;

/// Merge `overrides` into `base`, override side winning.
///
/// When both sides are objects the merge recurses key by key; every other
/// pairing (arrays and scalars included) replaces the base value wholesale.
/// Merging an empty object is a no-op.
pub fn deep_merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(over_map)) => {
            for (key, over_value) in over_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, over_value),
                    None => {
                        base_map.insert(key, over_value);
                    }
                }
            }
        }
        (base_slot, over_value) => *base_slot = over_value,
    }
}
