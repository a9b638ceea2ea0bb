mod common;

use common::{DocBuilder, every_kind, int32_array};
use na_bson::{ArrayValue, ArrayView, DocumentValue, DocumentView, ElementValue, ElementView, Error};

#[test]
fn test_element_value_round_trip() {
    let data = every_kind();
    let doc = DocumentView::new(&data);

    for element in doc {
        let value = ElementValue::new(element);
        let view = value.view();
        assert_eq!(view, element);
        assert_eq!(view.key(), element.key());
        assert_eq!(view.offset(), element.offset());
        assert_eq!(view.keylen(), element.keylen());
        assert_eq!(view.length(), element.length());
        assert_eq!(view.get_value(), element.get_value());
    }
}

#[test]
fn test_element_value_outlives_buffer() {
    let value = {
        let data = DocBuilder::new()
            .utf8("name", "survivor")
            .array("list", &int32_array(&[4, 5, 6]))
            .build();
        let doc = DocumentView::new(&data);
        doc.get("list").to_value()
    };

    let view = value.view();
    assert!(view.is_set());
    assert_eq!(view.key(), Ok("list"));
    assert_eq!(view.get(2).get_int32(), Ok(6));
    // the whole parent buffer was copied
    assert_eq!(view.raw()[4], 0x02);
}

#[test]
fn test_element_value_does_not_alias() {
    let data = DocBuilder::new().int32("a", 1).build();
    let doc = DocumentView::new(&data);

    let first = ElementValue::new(doc.get("a"));
    let second = first.clone();
    assert_eq!(first, second);
    assert_ne!(first.view().raw().as_ptr(), second.view().raw().as_ptr());
    assert_ne!(first.view().raw().as_ptr(), data.as_ptr());

    // copying a copy is stable
    let third = ElementValue::new(second.view());
    assert_eq!(third, first);
}

#[test]
fn test_element_value_take() {
    let data = DocBuilder::new().int32("a", 1).build();
    let doc = DocumentView::new(&data);

    let mut source = doc.get("a").to_value();
    let moved = std::mem::take(&mut source);

    assert!(!source.is_set());
    assert!(!source.view().is_set());
    assert_eq!(source.view().get_int32(), Err(Error::UnsetElement));
    assert_eq!(moved.view().get_int32(), Ok(1));
    drop(source);
    assert_eq!(moved.view().get_int32(), Ok(1));
}

#[test]
fn test_element_value_from_unset() {
    let value = ElementValue::new(ElementView::unset());
    assert!(!value.is_set());
    assert_eq!(value, ElementValue::default());
    assert_eq!(value.view(), ElementView::unset());
}

#[test]
fn test_element_value_assignment() {
    let data = DocBuilder::new().int32("a", 1).int32("b", 2).build();
    let doc = DocumentView::new(&data);

    let mut target = doc.get("a").to_value();
    let source = doc.get("b").to_value();
    target.clone_from(&source);
    assert_eq!(target.view().get_int32(), Ok(2));
    assert_eq!(source.view().get_int32(), Ok(2));

    let before = source.view().raw().as_ptr();
    let moved = source;
    assert_eq!(moved.view().raw().as_ptr(), before);
}

#[test]
fn test_document_value() {
    let value = {
        let data = DocBuilder::new().int32("a", 1).utf8("b", "x").build();
        DocumentView::new(&data).to_value()
    };
    let doc = value.view();
    assert_eq!(doc.get("a").get_int32(), Ok(1));
    assert_eq!(doc.get("b").get_utf8(), Ok("x"));

    let copy = value.clone();
    assert_eq!(copy, value);
    assert_ne!(copy.as_bytes().as_ptr(), value.as_bytes().as_ptr());

    let bytes = value.into_bytes();
    assert_eq!(DocumentValue::from_vec(bytes).unwrap(), copy);
}

#[test]
fn test_document_value_from_vec() {
    let data = DocBuilder::new().int32("a", 1).build();
    let value = DocumentValue::try_from(data.clone()).unwrap();
    assert_eq!(value.as_bytes(), data.as_slice());

    let mut broken = data;
    broken.pop();
    assert_eq!(DocumentValue::from_vec(broken), Err(Error::InvalidDocument));
}

#[test]
fn test_default_document_value_is_null() {
    let value = DocumentValue::default();
    assert!(value.view().is_null());
    assert!(!value.view().get("a").is_set());
}

#[test]
fn test_array_value() {
    let value = {
        let data = int32_array(&[1, 2, 3]);
        ArrayView::new(&data).to_value()
    };
    assert_eq!(value.view().get(2).get_int32(), Ok(3));
    assert_eq!(value.view().len(), 3);
    assert_eq!(ArrayValue::new(value.view()), value);
    assert!(ArrayValue::from_vec(vec![1, 2]).is_err());
}
