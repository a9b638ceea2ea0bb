//! `serde::Serialize` for views, values and payloads.
//!
//! This is the hook through which a textual renderer (for example
//! `serde_json`) walks a document. Documents serialize as maps and arrays
//! as sequences. Doubles, strings, booleans, int32 and int64 map onto the
//! serde data model directly. Every other kind serializes as a
//! single-entry `$`-prefixed wrapper in the style of extended JSON:
//! `{"$oid": "..."}`, `{"$date": 0}`, `{"$numberDecimal": "1.5"}` and so on.
//!
//! `$binary.bytes` goes through `serialize_bytes`, so its shape is up to the
//! serializer: `serde_json` writes an array of numbers, not the base64
//! string of canonical extended JSON.
//!
//! A malformed element fails the serialization with the decoding error,
//! including an element the walk cannot get past; the output is never
//! silently cut short.

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{
    ArrayValue, ArrayView, BsonRef, DocumentValue, DocumentView, ElementValue, ElementView,
    types::{Binary, CodeWithScope, DbPointer, Decimal128, ObjectId, Regex, Timestamp},
};

impl Serialize for DocumentView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let mut iter = self.iter();
        for element in iter.by_ref() {
            let key = element.key().map_err(S::Error::custom)?;
            let value = element.get_value().map_err(S::Error::custom)?;
            map.serialize_entry(key, &value)?;
        }
        if let Some(error) = iter.error() {
            return Err(S::Error::custom(error));
        }
        map.end()
    }
}

impl Serialize for ArrayView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        let mut iter = self.iter();
        for element in iter.by_ref() {
            let value = element.get_value().map_err(S::Error::custom)?;
            seq.serialize_element(&value)?;
        }
        if let Some(error) = iter.error() {
            return Err(S::Error::custom(error));
        }
        seq.end()
    }
}

/// Serializes the element's value; the unset element serializes as unit.
impl Serialize for ElementView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_set() {
            return serializer.serialize_unit();
        }
        self.get_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl Serialize for DocumentValue {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

impl Serialize for ArrayValue {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

impl Serialize for ElementValue {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

#[cfg(feature = "shared")]
impl Serialize for crate::SharedDocument {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

/// `{key: value}`
struct Wrapped<'k, T>(&'k str, T);

impl<T: Serialize> Serialize for Wrapped<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, &self.1)?;
        map.end()
    }
}

struct Bytes<'b>(&'b [u8]);

impl Serialize for Bytes<'_> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Wrapped("$oid", self.to_hex()).serialize(serializer)
    }
}

impl Serialize for Decimal128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Wrapped("$numberDecimal", self.to_string()).serialize(serializer)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Inner<'t>(&'t Timestamp);

        impl Serialize for Inner<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("t", &self.0.timestamp)?;
                map.serialize_entry("i", &self.0.increment)?;
                map.end()
            }
        }

        Wrapped("$timestamp", Inner(self)).serialize(serializer)
    }
}

impl Serialize for Binary<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Inner<'b, 'a>(&'b Binary<'a>);

        impl Serialize for Inner<'_, '_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("bytes", &Bytes(self.0.bytes()))?;
                map.serialize_entry("subType", &format!("{:02x}", u8::from(self.0.subtype)))?;
                map.end()
            }
        }

        Wrapped("$binary", Inner(self)).serialize(serializer)
    }
}

impl Serialize for Regex<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Inner<'r, 'a>(&'r Regex<'a>);

        impl Serialize for Inner<'_, '_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("pattern", self.0.pattern)?;
                map.serialize_entry("options", self.0.options)?;
                map.end()
            }
        }

        Wrapped("$regularExpression", Inner(self)).serialize(serializer)
    }
}

impl Serialize for DbPointer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Inner<'p, 'a>(&'p DbPointer<'a>);

        impl Serialize for Inner<'_, '_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("$ref", self.0.collection)?;
                map.serialize_entry("$id", &self.0.oid)?;
                map.end()
            }
        }

        Wrapped("$dbPointer", Inner(self)).serialize(serializer)
    }
}

impl Serialize for CodeWithScope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("$code", self.code)?;
        map.serialize_entry("$scope", &self.scope)?;
        map.end()
    }
}

impl Serialize for BsonRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BsonRef::Double(value) => serializer.serialize_f64(*value),
            BsonRef::Utf8(value) => serializer.serialize_str(value),
            BsonRef::Document(value) => value.serialize(serializer),
            BsonRef::Array(value) => value.serialize(serializer),
            BsonRef::Binary(value) => value.serialize(serializer),
            BsonRef::Undefined => Wrapped("$undefined", true).serialize(serializer),
            BsonRef::Oid(value) => value.serialize(serializer),
            BsonRef::Bool(value) => serializer.serialize_bool(*value),
            BsonRef::Date(value) => Wrapped("$date", value.millis()).serialize(serializer),
            BsonRef::Null => serializer.serialize_unit(),
            BsonRef::Regex(value) => value.serialize(serializer),
            BsonRef::DbPointer(value) => value.serialize(serializer),
            BsonRef::Code(value) => Wrapped("$code", *value).serialize(serializer),
            BsonRef::Symbol(value) => Wrapped("$symbol", *value).serialize(serializer),
            BsonRef::CodeWithScope(value) => value.serialize(serializer),
            BsonRef::Int32(value) => serializer.serialize_i32(*value),
            BsonRef::Timestamp(value) => value.serialize(serializer),
            BsonRef::Int64(value) => serializer.serialize_i64(*value),
            BsonRef::Decimal128(value) => value.serialize(serializer),
            BsonRef::MinKey => Wrapped("$minKey", 1).serialize(serializer),
            BsonRef::MaxKey => Wrapped("$maxKey", 1).serialize(serializer),
        }
    }
}
