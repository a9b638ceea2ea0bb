use crate::{DocumentView, ObjectId};

/// A regular expression: pattern and option flags, both borrowed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Regex<'a> {
    pub pattern: &'a str,
    pub options: &'a str,
}

/// A deprecated reference to a document in another collection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DbPointer<'a> {
    pub collection: &'a str,
    pub oid: ObjectId,
}

/// JavaScript code together with the document its free variables resolve in.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CodeWithScope<'a> {
    pub code: &'a str,
    pub scope: DocumentView<'a>,
}
