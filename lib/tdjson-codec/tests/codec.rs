// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde_json::json;
use tdjson_codec::{decode, decode_required, decode_str, encode, encode_string, entity, union};
use tdjson_codec::{Bytes, DecodeError, Entity, Object, Union};

entity! {
    pub struct TextPlain = "textPlain" {
        pub text: String,
    }
}

entity! {
    pub struct TextBold = "textBold" {
        pub text: Text,
    }
}

entity! {
    pub struct TextConcat = "textConcat" {
        pub texts: Vec<Text>,
    }
}

union! {
    pub enum Text = "Text" {
        Plain(TextPlain),
        Bold(Box<TextBold>),
        Concat(TextConcat),
    }
}

entity! {
    pub struct Caption = "caption" {
        pub text: Text,
        pub credit: Option<Text>,
    }
}

entity! {
    pub struct Blob = "blob" {
        pub id: i64,
        pub size: i32,
        pub data: Bytes,
        pub r#type: Option<Text>,
    }
}

#[test]
fn check_concrete_slot_without_tag() {
    let caption = decode_str::<Caption>(r#"{"text":{"@type":"textPlain","text":"hi"}}"#).unwrap();
    assert_eq!(
        caption,
        Caption {
            text: Text::Plain(TextPlain { text: "hi".into() }),
            credit: None,
        }
    );
}

#[test]
fn check_concrete_slot_with_wrong_tag() {
    let err = decode_str::<Caption>(r#"{"@type":"textPlain","text":"hi"}"#).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedType {
            expected: "caption",
            ref found,
        } if found == "textPlain"
    ));
}

#[test]
fn check_missing_and_null_are_absent() {
    let missing = json!({"@type": "caption", "text": {"@type": "textPlain", "text": ""}});
    let null = json!({"@type": "caption", "text": {"@type": "textPlain", "text": ""}, "credit": null});

    let missing = decode_str::<Caption>(&missing.to_string()).unwrap();
    let null = decode_str::<Caption>(&null.to_string()).unwrap();
    assert_eq!(missing.credit, None);
    assert_eq!(missing, null);
    assert_eq!(
        encode(&missing),
        json!({"@type": "caption", "text": {"@type": "textPlain", "text": ""}})
    );
}

#[test]
fn check_required_field_missing() {
    let err = decode_str::<Caption>(r#"{"@type":"caption"}"#).unwrap_err();
    assert_eq!(err.to_string(), "failed to decode caption.text: missing value");
    assert!(matches!(err.root_cause(), DecodeError::MissingValue));
}

#[test]
fn check_union_null_and_required() {
    assert_eq!(decode::<Text>(&json!(null)).unwrap(), None);
    assert!(matches!(
        decode_required::<Text>(&json!(null)),
        Err(DecodeError::MissingValue)
    ));
}

#[test]
fn check_union_malformed() {
    for raw in [json!(1), json!({}), json!({"@type": 7}), json!([])] {
        assert!(
            matches!(
                decode::<Text>(&raw),
                Err(DecodeError::MalformedUnion { union: "Text" })
            ),
            "{raw} should be malformed"
        );
    }
}

#[test]
fn check_nested_unknown_variant_path() {
    let raw = json!({
        "@type": "textConcat",
        "texts": [
            {"@type": "textPlain", "text": "a"},
            {"@type": "textBold", "text": {"@type": "textPlain", "text": "b"}},
            {"@type": "textBold", "text": {"@type": "textStrikethrough", "text": "c"}},
        ]
    });

    let err = decode::<Text>(&raw).unwrap_err();
    assert_eq!(err.unknown_tag(), Some("textStrikethrough"));
    match &err {
        DecodeError::Field { union, path, .. } => {
            assert_eq!(*union, Some("Text"));
            assert_eq!(path.to_string(), "texts[2].text");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "failed to decode Text textConcat.texts[2].text: unknown Text variant: textStrikethrough"
    );
}

#[test]
fn check_deep_recursion_round_trip() {
    let mut text = Text::Plain(TextPlain {
        text: "deep".into(),
    });
    for _ in 0..50 {
        text = Text::Bold(Box::new(TextBold { text }));
    }

    let raw = encode(&text);
    let mut depth = 0;
    let mut cursor = &raw;
    while cursor["@type"] == "textBold" {
        depth += 1;
        cursor = &cursor["text"];
    }
    assert_eq!(depth, 50);
    assert_eq!(cursor["text"], "deep");

    assert_eq!(decode::<Text>(&raw).unwrap(), Some(text));
}

#[test]
fn check_deep_recursion_from_text() {
    let mut text = Text::Plain(TextPlain {
        text: "deep".into(),
    });
    // serde_json stops at 128 levels by default.
    for _ in 0..150 {
        text = Text::Bold(Box::new(TextBold { text }));
    }

    let raw = encode_string(&text);
    assert_eq!(decode_str::<Text>(&raw).unwrap(), text);
    assert_eq!(encode_string(&decode_str::<Text>(&raw).unwrap()), raw);
}

#[test]
fn check_primitive_fields() {
    let blob = Blob {
        id: i64::MAX,
        size: 0,
        data: Bytes(vec![0, 1, 2, 254, 255]),
        r#type: None,
    };

    let raw = encode(&blob);
    assert_eq!(
        raw,
        json!({"@type": "blob", "id": "9223372036854775807", "size": 0, "data": "AAEC/v8="})
    );
    assert_eq!(decode_str::<Blob>(&raw.to_string()).unwrap(), blob);
}

#[test]
fn check_raw_identifier_key() {
    let raw = json!({
        "@type": "blob",
        "id": "1",
        "size": 1,
        "data": "",
        "type": {"@type": "textPlain", "text": "x"},
    });
    let blob = decode_str::<Blob>(&raw.to_string()).unwrap();
    assert_eq!(blob.id, 1);
    assert_eq!(blob.r#type, Some(Text::Plain(TextPlain { text: "x".into() })));
    assert_eq!(encode(&blob)["type"]["@type"], "textPlain");
}

#[test]
fn check_union_metadata() {
    assert_eq!(Text::NAME, "Text");
    assert_eq!(
        Text::registry().tags(),
        vec!["textBold", "textConcat", "textPlain"]
    );
    assert_eq!(<Box<TextBold> as Entity>::TAG, "textBold");

    let text = Text::from(TextConcat { texts: Vec::new() });
    assert_eq!(text.tag(), "textConcat");

    let object: Box<dyn Object> = Box::new(text);
    assert_eq!(object.type_tag(), "textConcat");
}

#[test]
fn check_serde_bridge() {
    let caption = Caption {
        text: Text::Plain(TextPlain { text: "s".into() }),
        credit: Some(Text::Concat(TextConcat { texts: Vec::new() })),
    };

    let text = serde_json::to_string(&caption).unwrap();
    assert_eq!(serde_json::from_str::<Caption>(&text).unwrap(), caption);

    let err = serde_json::from_str::<Text>(r#"{"@type":"textItalic"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown Text variant: textItalic"));
}

#[test]
fn check_not_json() {
    assert!(matches!(
        decode_str::<Caption>("{not json"),
        Err(DecodeError::Json(_))
    ));
}
