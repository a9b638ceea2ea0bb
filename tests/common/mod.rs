#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness; set `RUST_LOG=na_bson=trace`
/// to see it.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Prefixes `body` with its length and appends the terminator.
pub fn finish(mut body: Vec<u8>) -> Vec<u8> {
    body.push(0);
    let mut out = ((body.len() + 4) as i32).to_le_bytes().to_vec();
    out.extend_from_slice(&body);
    out
}

/// A length-prefixed, NUL-terminated string payload.
pub fn string(text: &str) -> Vec<u8> {
    let mut out = ((text.len() + 1) as i32).to_le_bytes().to_vec();
    out.extend_from_slice(text.as_bytes());
    out.push(0);
    out
}

/// Hand encoder for test fixtures.
#[derive(Default)]
pub struct DocBuilder {
    body: Vec<u8>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element with an arbitrary type byte and payload.
    pub fn raw(mut self, tag: u8, key: &str, payload: &[u8]) -> Self {
        self.body.push(tag);
        self.body.extend_from_slice(key.as_bytes());
        self.body.push(0);
        self.body.extend_from_slice(payload);
        self
    }

    pub fn double(self, key: &str, value: f64) -> Self {
        self.raw(0x01, key, &value.to_le_bytes())
    }

    pub fn utf8(self, key: &str, value: &str) -> Self {
        self.raw(0x02, key, &string(value))
    }

    pub fn document(self, key: &str, doc: &[u8]) -> Self {
        self.raw(0x03, key, doc)
    }

    pub fn array(self, key: &str, array: &[u8]) -> Self {
        self.raw(0x04, key, array)
    }

    pub fn binary(self, key: &str, subtype: u8, bytes: &[u8]) -> Self {
        let mut payload = (bytes.len() as i32).to_le_bytes().to_vec();
        payload.push(subtype);
        payload.extend_from_slice(bytes);
        self.raw(0x05, key, &payload)
    }

    pub fn undefined(self, key: &str) -> Self {
        self.raw(0x06, key, &[])
    }

    pub fn oid(self, key: &str, oid: [u8; 12]) -> Self {
        self.raw(0x07, key, &oid)
    }

    pub fn bool(self, key: &str, value: bool) -> Self {
        self.raw(0x08, key, &[value as u8])
    }

    pub fn date(self, key: &str, millis: i64) -> Self {
        self.raw(0x09, key, &millis.to_le_bytes())
    }

    pub fn null(self, key: &str) -> Self {
        self.raw(0x0A, key, &[])
    }

    pub fn regex(self, key: &str, pattern: &str, options: &str) -> Self {
        let mut payload = pattern.as_bytes().to_vec();
        payload.push(0);
        payload.extend_from_slice(options.as_bytes());
        payload.push(0);
        self.raw(0x0B, key, &payload)
    }

    pub fn dbpointer(self, key: &str, collection: &str, oid: [u8; 12]) -> Self {
        let mut payload = string(collection);
        payload.extend_from_slice(&oid);
        self.raw(0x0C, key, &payload)
    }

    pub fn code(self, key: &str, code: &str) -> Self {
        self.raw(0x0D, key, &string(code))
    }

    pub fn symbol(self, key: &str, symbol: &str) -> Self {
        self.raw(0x0E, key, &string(symbol))
    }

    pub fn codewscope(self, key: &str, code: &str, scope: &[u8]) -> Self {
        let code = string(code);
        let total = 4 + code.len() + scope.len();
        let mut payload = (total as i32).to_le_bytes().to_vec();
        payload.extend_from_slice(&code);
        payload.extend_from_slice(scope);
        self.raw(0x0F, key, &payload)
    }

    pub fn int32(self, key: &str, value: i32) -> Self {
        self.raw(0x10, key, &value.to_le_bytes())
    }

    pub fn timestamp(self, key: &str, timestamp: u32, increment: u32) -> Self {
        let mut payload = increment.to_le_bytes().to_vec();
        payload.extend_from_slice(&timestamp.to_le_bytes());
        self.raw(0x11, key, &payload)
    }

    pub fn int64(self, key: &str, value: i64) -> Self {
        self.raw(0x12, key, &value.to_le_bytes())
    }

    pub fn decimal128(self, key: &str, high: u64, low: u64) -> Self {
        let mut payload = low.to_le_bytes().to_vec();
        payload.extend_from_slice(&high.to_le_bytes());
        self.raw(0x13, key, &payload)
    }

    pub fn minkey(self, key: &str) -> Self {
        self.raw(0xFF, key, &[])
    }

    pub fn maxkey(self, key: &str) -> Self {
        self.raw(0x7F, key, &[])
    }

    pub fn build(self) -> Vec<u8> {
        finish(self.body)
    }
}

/// An array of int32 values keyed "0", "1", ...
pub fn int32_array(values: &[i32]) -> Vec<u8> {
    values
        .iter()
        .enumerate()
        .fold(DocBuilder::new(), |doc, (i, value)| {
            doc.int32(&i.to_string(), *value)
        })
        .build()
}

pub const OID: [u8; 12] = [
    0x50, 0x7f, 0x1f, 0x77, 0xbc, 0xf8, 0x6c, 0xd7, 0x99, 0x43, 0x90, 0x11,
];

/// One element of every kind, keyed by the kind's name.
pub fn every_kind() -> Vec<u8> {
    DocBuilder::new()
        .double("double", 1.5)
        .utf8("utf8", "hello")
        .document("document", &DocBuilder::new().int32("x", 1).build())
        .array("array", &int32_array(&[10, 20, 30]))
        .binary("binary", 0x00, &[1, 2, 3])
        .undefined("undefined")
        .oid("oid", OID)
        .bool("bool", true)
        .date("date", 1_700_000_000_000)
        .null("null")
        .regex("regex", "^a.*", "i")
        .dbpointer("dbpointer", "coll", OID)
        .code("code", "function() {}")
        .symbol("symbol", "sym")
        .codewscope("codewscope", "x + 1", &DocBuilder::new().int32("x", 1).build())
        .int32("int32", -7)
        .timestamp("timestamp", 1_700_000_000, 3)
        .int64("int64", 1 << 40)
        .decimal128("decimal128", 0x3040_0000_0000_0000, 15)
        .minkey("minkey")
        .maxkey("maxkey")
        .build()
}
