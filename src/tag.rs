use std::fmt;

/// The kind of a BSON element, as stored in the first byte of every element.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    Double = 0x01,
    Utf8 = 0x02,
    Document = 0x03,
    Array = 0x04,
    Binary = 0x05,
    Undefined = 0x06,
    Oid = 0x07,
    Bool = 0x08,
    Date = 0x09,
    Null = 0x0A,
    Regex = 0x0B,
    DbPointer = 0x0C,
    Code = 0x0D,
    Symbol = 0x0E,
    CodeWithScope = 0x0F,
    Int32 = 0x10,
    Timestamp = 0x11,
    Int64 = 0x12,
    Decimal128 = 0x13,
    MaxKey = 0x7F,
    MinKey = 0xFF,
}

impl Tag {
    /// Every tag, in encoding order.
    pub const ALL: [Tag; 21] = [
        Tag::Double,
        Tag::Utf8,
        Tag::Document,
        Tag::Array,
        Tag::Binary,
        Tag::Undefined,
        Tag::Oid,
        Tag::Bool,
        Tag::Date,
        Tag::Null,
        Tag::Regex,
        Tag::DbPointer,
        Tag::Code,
        Tag::Symbol,
        Tag::CodeWithScope,
        Tag::Int32,
        Tag::Timestamp,
        Tag::Int64,
        Tag::Decimal128,
        Tag::MaxKey,
        Tag::MinKey,
    ];

    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0x01 => Tag::Double,
            0x02 => Tag::Utf8,
            0x03 => Tag::Document,
            0x04 => Tag::Array,
            0x05 => Tag::Binary,
            0x06 => Tag::Undefined,
            0x07 => Tag::Oid,
            0x08 => Tag::Bool,
            0x09 => Tag::Date,
            0x0A => Tag::Null,
            0x0B => Tag::Regex,
            0x0C => Tag::DbPointer,
            0x0D => Tag::Code,
            0x0E => Tag::Symbol,
            0x0F => Tag::CodeWithScope,
            0x10 => Tag::Int32,
            0x11 => Tag::Timestamp,
            0x12 => Tag::Int64,
            0x13 => Tag::Decimal128,
            0x7F => Tag::MaxKey,
            0xFF => Tag::MinKey,
            _ => return None,
        })
    }

    /// Lower-case name used in error messages and debug output.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Double => "double",
            Tag::Utf8 => "utf8",
            Tag::Document => "document",
            Tag::Array => "array",
            Tag::Binary => "binary",
            Tag::Undefined => "undefined",
            Tag::Oid => "oid",
            Tag::Bool => "bool",
            Tag::Date => "date",
            Tag::Null => "null",
            Tag::Regex => "regex",
            Tag::DbPointer => "dbpointer",
            Tag::Code => "code",
            Tag::Symbol => "symbol",
            Tag::CodeWithScope => "codewscope",
            Tag::Int32 => "int32",
            Tag::Timestamp => "timestamp",
            Tag::Int64 => "int64",
            Tag::Decimal128 => "decimal128",
            Tag::MaxKey => "maxkey",
            Tag::MinKey => "minkey",
        }
    }

    /// Fixed-width scalars are copied out of the buffer by the accessors.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Double
                | Self::Oid
                | Self::Bool
                | Self::Date
                | Self::Int32
                | Self::Timestamp
                | Self::Int64
                | Self::Decimal128
        )
    }

    /// Tags whose payload is empty.
    pub const fn is_unit(self) -> bool {
        matches!(
            self,
            Self::Undefined | Self::Null | Self::MinKey | Self::MaxKey
        )
    }

    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Document | Self::Array)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Tag {
    type Error = crate::Error;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tag::from_u8(value).ok_or(crate::Error::InvalidTagType(value))
    }
}

/// The subtype byte of a binary element.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BinarySubtype {
    Generic,
    Function,
    /// Deprecated subtype whose payload repeats its own length.
    BinaryOld,
    UuidOld,
    Uuid,
    Md5,
    Encrypted,
    Column,
    Sensitive,
    Vector,
    UserDefined(u8),
    Reserved(u8),
}

impl BinarySubtype {
    pub const fn name(self) -> &'static str {
        match self {
            BinarySubtype::Generic => "binary",
            BinarySubtype::Function => "function",
            BinarySubtype::BinaryOld => "binary_deprecated",
            BinarySubtype::UuidOld => "uuid_deprecated",
            BinarySubtype::Uuid => "uuid",
            BinarySubtype::Md5 => "md5",
            BinarySubtype::Encrypted => "encrypted",
            BinarySubtype::Column => "column",
            BinarySubtype::Sensitive => "sensitive",
            BinarySubtype::Vector => "vector",
            BinarySubtype::UserDefined(_) => "user",
            BinarySubtype::Reserved(_) => "?",
        }
    }
}

impl From<u8> for BinarySubtype {
    #[inline]
    fn from(value: u8) -> Self {
        match value {
            0x00 => BinarySubtype::Generic,
            0x01 => BinarySubtype::Function,
            0x02 => BinarySubtype::BinaryOld,
            0x03 => BinarySubtype::UuidOld,
            0x04 => BinarySubtype::Uuid,
            0x05 => BinarySubtype::Md5,
            0x06 => BinarySubtype::Encrypted,
            0x07 => BinarySubtype::Column,
            0x08 => BinarySubtype::Sensitive,
            0x09 => BinarySubtype::Vector,
            0x80.. => BinarySubtype::UserDefined(value),
            _ => BinarySubtype::Reserved(value),
        }
    }
}

impl From<BinarySubtype> for u8 {
    #[inline]
    fn from(value: BinarySubtype) -> Self {
        match value {
            BinarySubtype::Generic => 0x00,
            BinarySubtype::Function => 0x01,
            BinarySubtype::BinaryOld => 0x02,
            BinarySubtype::UuidOld => 0x03,
            BinarySubtype::Uuid => 0x04,
            BinarySubtype::Md5 => 0x05,
            BinarySubtype::Encrypted => 0x06,
            BinarySubtype::Column => 0x07,
            BinarySubtype::Sensitive => 0x08,
            BinarySubtype::Vector => 0x09,
            BinarySubtype::UserDefined(value) | BinarySubtype::Reserved(value) => value,
        }
    }
}

impl fmt::Display for BinarySubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
