// File: crates/kline-core/tests/merge.rs
// Purpose: Validate the recursive options merge.

use kline_core::deep_merge;
use serde_json::json;

#[test]
fn empty_override_leaves_base_unchanged() {
    let mut base = json!({
        "legend": { "top": "2%", "data": ["A", "MA5"] },
        "animation": false,
    });
    let expected = base.clone();
    deep_merge(&mut base, json!({}));
    assert_eq!(base, expected);
}

#[test]
fn leaf_override_leaves_siblings_intact() {
    let mut base = json!({
        "legend": {
            "top": "2%",
            "data": ["A", "MA5"],
            "textStyle": { "color": "#fff" },
        },
    });
    deep_merge(&mut base, json!({ "legend": { "top": "5%" } }));
    assert_eq!(base["legend"]["top"], json!("5%"));
    assert_eq!(base["legend"]["data"], json!(["A", "MA5"]));
    assert_eq!(base["legend"]["textStyle"]["color"], json!("#fff"));
}

#[test]
fn arrays_replace_wholesale() {
    let mut base = json!({ "dataZoom": [{ "type": "slider" }, { "type": "inside" }] });
    deep_merge(&mut base, json!({ "dataZoom": [{ "type": "inside" }] }));
    assert_eq!(base["dataZoom"], json!([{ "type": "inside" }]));
}

#[test]
fn scalars_replace_and_new_keys_insert_at_depth() {
    let mut base = json!({ "grid": { "bottom": 80 } });
    deep_merge(
        &mut base,
        json!({ "grid": { "bottom": 60, "top": 20 }, "animation": true }),
    );
    assert_eq!(base["grid"]["bottom"], json!(60));
    assert_eq!(base["grid"]["top"], json!(20));
    assert_eq!(base["animation"], json!(true));
}

#[test]
fn non_object_override_replaces_an_object() {
    let mut base = json!({ "tooltip": { "trigger": "axis" } });
    deep_merge(&mut base, json!({ "tooltip": "none" }));
    assert_eq!(base["tooltip"], json!("none"));
}
