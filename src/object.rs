//! The PDF object values the writer emits.
//!
//! Only the subset needed for a static document is modelled: no booleans,
//! no null, no object streams.

use std::collections::HashMap;

/// A direct PDF object.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Integer number
    Integer(i64),
    /// Real number, written with at most five decimals
    Real(f64),
    /// String bytes; printable ASCII is written literally, anything else as hex
    String(Vec<u8>),
    /// Name, without the leading `/`
    Name(String),
    /// Array
    Array(Vec<Object>),
    /// Dictionary; keys are written in sorted order
    Dictionary(HashMap<String, Object>),
    /// Stream; `Length` is added by the serializer
    Stream {
        /// Stream dictionary
        dict: HashMap<String, Object>,
        /// Encoded payload
        data: bytes::Bytes,
    },
    /// Indirect reference
    Reference(ObjectRef),
}

/// Number and generation of an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number, always 0 for freshly written files
    pub gen: u16,
}

impl ObjectRef {
    /// Reference object `id` at generation `gen`.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl From<ObjectRef> for Object {
    fn from(r: ObjectRef) -> Self {
        Object::Reference(r)
    }
}
