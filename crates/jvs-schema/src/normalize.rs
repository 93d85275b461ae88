//! # Payload Normalization
//!
//! JSON Schema's `required` keyword counts `"field": null` as present. API
//! clients that send null for "no value" expect the opposite, so payloads
//! are normalized before validation: every null-valued key is removed from
//! every nested object.
//!
//! Only object members are inspected. Arrays are left exactly as they are,
//! including any objects and nulls inside them.

use serde_json::{Map, Value};

/// Recursively remove null-valued keys from `object` and every object
/// nested under its members.
///
/// A nested object that ends up empty is kept as `{}`.
pub fn strip_nulls(object: &mut Map<String, Value>) {
    object.retain(|_, value| !value.is_null());
    for value in object.values_mut() {
        if let Value::Object(nested) = value {
            strip_nulls(nested);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalized(value: Value) -> Value {
        match value {
            Value::Object(mut map) => {
                strip_nulls(&mut map);
                Value::Object(map)
            }
            other => other,
        }
    }

    #[test]
    fn removes_top_level_nulls() {
        let out = normalized(json!({"source": "value", "destination": null}));
        assert_eq!(out, json!({"source": "value"}));
    }

    #[test]
    fn removes_nested_nulls() {
        let out = normalized(json!({
            "chunks": {"number": null, "size": 4, "meta": {"owner": null, "tag": "x"}}
        }));
        assert_eq!(
            out,
            json!({"chunks": {"size": 4, "meta": {"tag": "x"}}})
        );
    }

    #[test]
    fn keeps_emptied_objects() {
        let out = normalized(json!({"chunks": {"number": null}}));
        assert_eq!(out, json!({"chunks": {}}));
    }

    #[test]
    fn keeps_falsy_non_null_values() {
        let input = json!({"a": false, "b": 0, "c": "", "d": [], "e": {}});
        assert_eq!(normalized(input.clone()), input);
    }

    // Arrays are not walked: nulls inside arrays, and null-valued keys of
    // objects inside arrays, survive normalization.
    #[test]
    fn leaves_arrays_untouched() {
        let input = json!({
            "list": [null, 1, {"inner": null}],
            "nested": {"items": [{"x": null}], "gone": null}
        });
        let out = normalized(input);
        assert_eq!(
            out,
            json!({
                "list": [null, 1, {"inner": null}],
                "nested": {"items": [{"x": null}]}
            })
        );
    }

    #[test]
    fn empty_object_is_unchanged() {
        let mut map = Map::new();
        strip_nulls(&mut map);
        assert!(map.is_empty());
    }
}
