use na_bson::{BinarySubtype, Error, Tag};

#[test]
fn test_tag_round_trip() {
    for tag in Tag::ALL {
        assert_eq!(Tag::try_from(tag as u8), Ok(tag));
        assert_eq!(Tag::from_u8(tag as u8), Some(tag));
    }
    assert_eq!(Tag::Double as u8, 0x01);
    assert_eq!(Tag::Decimal128 as u8, 0x13);
    assert_eq!(Tag::MaxKey as u8, 0x7F);
    assert_eq!(Tag::MinKey as u8, 0xFF);
}

#[test]
fn test_unknown_tags() {
    for byte in [0x00, 0x14, 0x20, 0x7E, 0x80, 0xFE] {
        assert_eq!(Tag::try_from(byte), Err(Error::InvalidTagType(byte)));
    }
}

#[test]
fn test_tag_properties() {
    assert!(Tag::Int32.is_scalar());
    assert!(Tag::Decimal128.is_scalar());
    assert!(!Tag::Utf8.is_scalar());
    assert!(!Tag::Binary.is_scalar());

    assert!(Tag::Null.is_unit());
    assert!(Tag::MinKey.is_unit());
    assert!(!Tag::Bool.is_unit());

    assert!(Tag::Document.is_composite());
    assert!(Tag::Array.is_composite());
    assert!(!Tag::CodeWithScope.is_composite());
}

#[test]
fn test_tag_display() {
    assert_eq!(Tag::Utf8.to_string(), "utf8");
    assert_eq!(Tag::CodeWithScope.to_string(), "codewscope");
    assert_eq!(Tag::MinKey.to_string(), "minkey");
}

#[test]
fn test_binary_subtype() {
    assert_eq!(BinarySubtype::from(0x00), BinarySubtype::Generic);
    assert_eq!(BinarySubtype::from(0x02), BinarySubtype::BinaryOld);
    assert_eq!(BinarySubtype::from(0x04), BinarySubtype::Uuid);
    assert_eq!(BinarySubtype::from(0x80), BinarySubtype::UserDefined(0x80));
    assert_eq!(BinarySubtype::from(0x42), BinarySubtype::Reserved(0x42));
    for byte in 0..=u8::MAX {
        assert_eq!(u8::from(BinarySubtype::from(byte)), byte);
    }
}

#[test]
fn test_error_display() {
    assert_eq!(Error::UnsetElement.to_string(), "cannot read from an unset element");
    assert_eq!(
        Error::WrongElementType {
            expected: Tag::Int32,
            actual: Tag::Utf8
        }
        .to_string(),
        "expected element of type int32, found utf8"
    );
    assert_eq!(Error::EndOfFile.to_string(), "unexpected end of input");
    assert_eq!(Error::InvalidTagType(0x42).to_string(), "invalid BSON type: 0x42");
    assert_eq!(Error::InvalidLength(-1).to_string(), "invalid length prefix: -1");
    assert_eq!(Error::InvalidBool(2).to_string(), "invalid boolean byte: 0x02");
}

#[test]
fn test_error_classification() {
    assert!(!Error::UnsetElement.is_structural());
    assert!(
        !Error::WrongElementType {
            expected: Tag::Int32,
            actual: Tag::Utf8
        }
        .is_structural()
    );
    assert!(Error::EndOfFile.is_structural());
    assert!(Error::InvalidDocument.is_structural());

    let boxed: Box<dyn std::error::Error> = Box::new(Error::InvalidUtf8);
    assert_eq!(boxed.to_string(), "invalid UTF-8");
}
