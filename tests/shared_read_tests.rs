#![cfg(feature = "shared")]

mod common;

use bytes::Bytes;
use common::{DocBuilder, int32_array};
use na_bson::{DocumentValue, DocumentView, Error, SharedDocument};

#[test]
fn test_shared_clone_shares_buffer() {
    let data = DocBuilder::new()
        .int32("a", 1)
        .array("list", &int32_array(&[5, 6]))
        .build();
    let shared = SharedDocument::from_bytes(Bytes::from(data)).unwrap();
    let other = shared.clone();

    assert_eq!(shared, other);
    assert_eq!(shared.as_bytes().as_ptr(), other.as_bytes().as_ptr());
    assert_eq!(other.view().get("list").get(1).get_int32(), Ok(6));

    drop(shared);
    assert_eq!(other.view().get("a").get_int32(), Ok(1));
}

#[test]
fn test_shared_from_value() {
    let value = {
        let data = DocBuilder::new().utf8("s", "x").build();
        DocumentView::new(&data).to_value()
    };
    let ptr = value.as_bytes().as_ptr();
    let shared = SharedDocument::from(value);

    assert_eq!(shared.as_bytes().as_ptr(), ptr);
    assert_eq!(shared.view().get("s").get_utf8(), Ok("x"));

    let copy: DocumentValue = shared.to_value();
    assert_ne!(copy.as_bytes().as_ptr(), ptr);
    assert_eq!(copy.view(), shared.view());
}

#[test]
fn test_shared_rejects_bad_framing() {
    assert_eq!(
        SharedDocument::from_bytes(Bytes::from_static(&[6, 0, 0, 0, 0])),
        Err(Error::InvalidDocument)
    );
    assert_eq!(
        SharedDocument::from_bytes(Bytes::new()),
        Err(Error::EndOfFile)
    );
}
