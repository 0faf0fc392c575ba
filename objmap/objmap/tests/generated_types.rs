//! Types generated by `objmap-infer` (kept as golden files in its tests),
//! decoded through the mapper.

#[rustfmt::skip]
#[path = "../../objmap-infer/tests/golden/generated/mod.rs"]
mod generated;
#[rustfmt::skip]
#[path = "../../objmap-infer/tests/golden/nested/mod.rs"]
mod nested;

use objmap::{Value, decode, unmarshal};
use serde_json::json;

#[test]
fn flat_type_decodes_its_sample() {
    let sample: generated::Sample = unmarshal(r#"{"user_id": 7, "tags": ["a", "b"]}"#).unwrap();
    assert_eq!(sample.user_id(), 7);
    assert_eq!(
        sample.tags(),
        &[Value::string("a"), Value::string("b")][..]
    );
}

#[test]
fn nested_types_decode_objects_and_collections() {
    let order: nested::Order = decode(&Value::from(json!({
        "id": 3,
        "owner": { "name": "ada", "e-mail": "ada@example.com" },
        "items": [{ "a": 5 }, "broken"],
    })))
    .unwrap();

    assert_eq!(order.id(), 3);
    assert_eq!(order.owner().name(), "ada");
    assert_eq!(order.owner().e_mail(), Some("ada@example.com"));
    assert_eq!(order.items().len(), 2);
    assert_eq!(order.items()[0].as_ref().map(|item| item.a()), Some(5));
    assert!(order.items()[1].is_none());
}

#[test]
fn nested_types_from_empty_document() {
    let order: nested::Order = decode(&Value::from(json!({}))).unwrap();
    assert_eq!(order, nested::Order::default());
    assert_eq!(order.owner().e_mail(), None);
}
