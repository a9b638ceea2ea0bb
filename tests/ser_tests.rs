#![cfg(feature = "serde")]

mod common;

use common::{DocBuilder, every_kind, int32_array};
use na_bson::{DocumentView, ElementView};
use serde_json::{Value, json};

fn to_json(doc: DocumentView<'_>) -> Value {
    serde_json::to_value(doc).unwrap()
}

#[test]
fn test_plain_kinds() {
    let data = DocBuilder::new()
        .double("d", 1.5)
        .utf8("s", "hi")
        .bool("b", false)
        .null("n")
        .int32("i", -3)
        .int64("l", 1 << 40)
        .array("list", &int32_array(&[1, 2]))
        .document("sub", &DocBuilder::new().utf8("x", "y").build())
        .build();

    assert_eq!(
        to_json(DocumentView::new(&data)),
        json!({
            "d": 1.5,
            "s": "hi",
            "b": false,
            "n": null,
            "i": -3,
            "l": 1_099_511_627_776i64,
            "list": [1, 2],
            "sub": {"x": "y"},
        })
    );
}

#[test]
fn test_wrapped_kinds() {
    let data = every_kind();
    let json = to_json(DocumentView::new(&data));

    assert_eq!(json["oid"], json!({"$oid": "507f1f77bcf86cd799439011"}));
    assert_eq!(json["date"], json!({"$date": 1_700_000_000_000i64}));
    assert_eq!(json["undefined"], json!({"$undefined": true}));
    assert_eq!(
        json["regex"],
        json!({"$regularExpression": {"pattern": "^a.*", "options": "i"}})
    );
    assert_eq!(
        json["dbpointer"],
        json!({"$dbPointer": {"$ref": "coll", "$id": {"$oid": "507f1f77bcf86cd799439011"}}})
    );
    assert_eq!(json["code"], json!({"$code": "function() {}"}));
    assert_eq!(json["symbol"], json!({"$symbol": "sym"}));
    assert_eq!(
        json["codewscope"],
        json!({"$code": "x + 1", "$scope": {"x": 1}})
    );
    assert_eq!(
        json["timestamp"],
        json!({"$timestamp": {"t": 1_700_000_000u32, "i": 3}})
    );
    assert_eq!(json["decimal128"], json!({"$numberDecimal": "15"}));
    assert_eq!(json["minkey"], json!({"$minKey": 1}));
    assert_eq!(json["maxkey"], json!({"$maxKey": 1}));
    assert_eq!(
        json["binary"],
        json!({"$binary": {"bytes": [1, 2, 3], "subType": "00"}})
    );
}

#[test]
fn test_every_tag_renders() {
    let data = every_kind();
    let doc = DocumentView::new(&data);
    let json = to_json(doc);
    assert_eq!(json.as_object().unwrap().len(), doc.len());
}

#[test]
fn test_element_and_values() {
    let data = DocBuilder::new().int32("a", 4).build();
    let doc = DocumentView::new(&data);

    assert_eq!(serde_json::to_value(doc.get("a")).unwrap(), json!(4));
    assert_eq!(serde_json::to_value(ElementView::unset()).unwrap(), Value::Null);
    assert_eq!(serde_json::to_value(doc.get("a").to_value()).unwrap(), json!(4));
    assert_eq!(serde_json::to_value(doc.to_value()).unwrap(), json!({"a": 4}));
}

#[test]
fn test_malformed_payload_fails() {
    let data = DocBuilder::new().raw(0x08, "b", &[7]).build();
    let error = serde_json::to_string(&DocumentView::new(&data)).unwrap_err();
    assert!(error.to_string().contains("invalid boolean byte"));
}

#[test]
fn test_truncated_document_fails() {
    let data = DocBuilder::new().int32("a", 1).utf8("b", "hello").build();
    let truncated = &data[..data.len() - 4];

    let error = serde_json::to_string(&DocumentView::new(truncated)).unwrap_err();
    assert!(error.to_string().contains("unexpected end of input"));
}

#[test]
fn test_unknown_tag_fails() {
    let data = DocBuilder::new()
        .int32("a", 1)
        .raw(0x42, "b", &[])
        .int32("c", 3)
        .build();

    let error = serde_json::to_string(&DocumentView::new(&data)).unwrap_err();
    assert!(error.to_string().contains("invalid BSON type: 0x42"));
}

#[test]
fn test_damaged_nested_array_fails() {
    // the array's second element claims an unknown type
    let list = DocBuilder::new().int32("0", 1).raw(0x42, "1", &[]).build();
    let data = DocBuilder::new().array("list", &list).build();

    let error = serde_json::to_string(&DocumentView::new(&data)).unwrap_err();
    assert!(error.to_string().contains("invalid BSON type: 0x42"));
}
