use objmap_core::{JsonDecoder, ParseError, TextDecoder, Value, parse_document};

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    match value {
        Value::String(s) => assert_eq!(&*s, "hello"),
        other => panic!("unexpected value variant: {:?}", other),
    }
}

#[test]
fn json_conversion_keeps_member_order_and_number_kinds() {
    let value = Value::from(serde_json::json!({
        "zeta": 1,
        "alpha": 1.5,
        "big": 18446744073709551615u64,
        "nested": { "b": true, "a": null },
    }));

    let members = value.as_object().expect("object");
    let keys: Vec<&str> = members.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "big", "nested"]);
    assert_eq!(value.get("zeta"), Some(&Value::Int(1)));
    assert_eq!(value.get("alpha"), Some(&Value::Float(1.5)));
    assert!(matches!(value.get("big"), Some(Value::Float(_))));

    let nested = value.get("nested").expect("nested");
    let nested_keys: Vec<&str> = nested
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(nested_keys, ["b", "a"]);
    assert_eq!(nested.get("a"), Some(&Value::Null));
}

#[test]
fn parse_document_accepts_objects_only() {
    let document = parse_document(r#"{"id": 1}"#).expect("valid document");
    assert_eq!(document.get("id"), Some(&Value::Int(1)));

    assert!(matches!(
        parse_document("[1, 2]"),
        Err(ParseError::NotAnObject { found: "list" })
    ));
    assert!(matches!(parse_document("{\"id\": "), Err(ParseError::Json(_))));
}

#[test]
fn json_decoder_delegates_to_parse_document() {
    let document = JsonDecoder.parse(r#"{"name": "x"}"#).expect("valid document");
    assert_eq!(document.get("name").and_then(Value::as_str), Some("x"));
}

#[test]
fn kind_names_and_scalar_classification() {
    assert_eq!(Value::Null.kind_name(), "null");
    assert_eq!(Value::List(vec![]).kind_name(), "list");
    assert!(Value::Int(3).is_scalar());
    assert!(Value::Null.is_scalar());
    assert!(!Value::List(vec![]).is_scalar());
}
