use proptest::collection::{hash_map, vec};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

use aqlmodel::{normalize_keys, QUALIFIER_DELIMITER};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn response_key() -> impl Strategy<Value = String> {
    vec(segment(), 1..4).prop_map(|parts| parts.join("."))
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z .]{0,12}".prop_map(Value::String),
    ]
}

fn response() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::Array),
            hash_map(response_key(), inner, 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

fn flat_response() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::Array),
            hash_map(segment(), inner, 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

fn has_qualified_keys(value: &Value) -> bool {
    match value {
        Value::Object(fields) => fields
            .iter()
            .any(|(key, nested)| key.contains(QUALIFIER_DELIMITER) || has_qualified_keys(nested)),
        Value::Array(elements) => elements.iter().any(has_qualified_keys),
        _ => false,
    }
}

proptest! {
    #[test]
    fn no_qualified_key_survives_normalization(mut value in response()) {
        normalize_keys(&mut value);
        prop_assert!(!has_qualified_keys(&value));
    }

    #[test]
    fn normalization_is_idempotent(mut value in response()) {
        normalize_keys(&mut value);
        let first = value.clone();
        normalize_keys(&mut value);
        prop_assert_eq!(value, first);
    }

    #[test]
    fn a_qualified_key_lands_on_its_final_segment(
        prefix in segment(),
        field in segment(),
        value in scalar(),
    ) {
        let mut raw = Map::new();
        raw.insert(format!("{prefix}.{field}"), value.clone());
        let mut object = Value::Object(raw);

        normalize_keys(&mut object);

        let fields = object.as_object().unwrap();
        let qualified_key = format!("{prefix}.{field}");
        prop_assert!(!fields.contains_key(&qualified_key));
        prop_assert_eq!(fields.get(field.as_str()), Some(&value));
    }

    #[test]
    fn collision_free_keys_keep_their_values(
        fields in hash_map(segment(), scalar(), 0..6),
        qualify in vec(any::<bool>(), 6),
    ) {
        let mut raw = Map::new();
        let mut expected = Map::new();
        for ((segment, value), qualified) in fields.into_iter().zip(qualify) {
            let key = if qualified {
                format!("domain.{segment}")
            } else {
                segment.clone()
            };
            raw.insert(key, value.clone());
            expected.insert(segment, value);
        }
        let mut object = Value::Object(raw);

        normalize_keys(&mut object);

        prop_assert_eq!(object, Value::Object(expected));
    }

    #[test]
    fn already_flat_structures_are_untouched(mut value in flat_response()) {
        let before = value.clone();
        normalize_keys(&mut value);
        prop_assert_eq!(value, before);
    }
}
