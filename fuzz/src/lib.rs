use bytes::Bytes;
use na_bson::{
    ArrayView, DocumentValue, DocumentView, DocumentViewOrValue, ElementValue, ElementView,
    SharedDocument, Tag,
};

fn visit_element(element: ElementView<'_>) {
    let _ = element.key();
    let _ = element.raw_element();
    let _ = element.get("0");
    let _ = element.get(0);

    for tag in Tag::ALL {
        let _ = match tag {
            Tag::Double => element.get_double().map(drop),
            Tag::Utf8 => element.get_utf8().map(drop),
            Tag::Document => element.get_document().map(visit_document),
            Tag::Array => element.get_array().map(visit_array),
            Tag::Binary => element.get_binary().map(drop),
            Tag::Undefined => element.get_undefined(),
            Tag::Oid => element.get_oid().map(|oid| drop(oid.to_hex())),
            Tag::Bool => element.get_bool().map(drop),
            Tag::Date => element.get_date().map(|date| drop(date.to_system_time())),
            Tag::Null => element.get_null(),
            Tag::Regex => element.get_regex().map(drop),
            Tag::DbPointer => element.get_dbpointer().map(drop),
            Tag::Code => element.get_code().map(drop),
            Tag::Symbol => element.get_symbol().map(drop),
            Tag::CodeWithScope => element.get_codewscope().map(|cws| visit_document(cws.scope)),
            Tag::Int32 => element.get_int32().map(drop),
            Tag::Timestamp => element.get_timestamp().map(drop),
            Tag::Int64 => element.get_int64().map(drop),
            Tag::Decimal128 => element.get_decimal128().map(|d| drop(d.to_string())),
            Tag::MinKey => element.get_minkey(),
            Tag::MaxKey => element.get_maxkey(),
        };
    }
}

fn visit_document(doc: DocumentView<'_>) {
    for element in doc {
        visit_element(element);
        if let Ok(key) = element.key() {
            assert!(doc.get(key).is_set());
        }
    }
}

fn visit_array(array: ArrayView<'_>) {
    for element in array {
        visit_element(element);
    }
    let _ = array.get(0);
}

/// Walks every element and calls every accessor on it.
pub fn test_views(data: &[u8]) {
    let doc = DocumentView::new(data);
    visit_document(doc);
    let len = doc.len();
    if let Ok(complete) = doc.try_len() {
        assert_eq!(complete, len);
        // a complete walk renders unless an element payload is bad
        let _ = serde_json::to_string(&doc);
    } else {
        assert!(serde_json::to_string(&doc).is_err());
    }
    let _ = format!("{doc:?}");

    if let Ok(checked) = DocumentView::from_slice(data) {
        assert_eq!(checked.length() as usize, data.len());
    }
}

/// Copies views into values and checks the copies read the same.
pub fn test_values(data: &[u8]) {
    let doc = DocumentView::new(data);
    let value = doc.to_value();
    assert_eq!(value.view(), doc);
    assert_eq!(value.clone(), value);

    for element in doc {
        let owned = ElementValue::new(element);
        assert_eq!(owned.view().key(), element.key());
        assert_eq!(owned.view().tag(), element.tag());
    }

    let either = DocumentViewOrValue::from(doc);
    assert_eq!(either.clone().into_owned(), value);

    if let Ok(adopted) = DocumentValue::from_vec(data.to_vec()) {
        assert_eq!(adopted.as_bytes(), data);
    }
}

pub fn test_shared(data: &[u8]) {
    if let Ok(shared) = SharedDocument::from_bytes(Bytes::copy_from_slice(data)) {
        let other = shared.clone();
        assert_eq!(shared.view(), other.view());
        visit_document(other.view());
    }
}
