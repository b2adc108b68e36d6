//! Intermediate GraphML form: nodes and edges carrying ordered key/value
//! attribute data, before any schema interpretation.

/// One `data` element as found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNode {
    pub id: String,
    /// Attribute data in document order.
    pub data: Vec<RawAttribute>,
}

impl RawNode {
    /// First attribute with the given key, if any. Duplicate keys keep the
    /// first occurrence.
    pub fn attr(&self, key: &str) -> Option<&str> {
        first_attr(&self.data, key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Attribute data in document order.
    pub data: Vec<RawAttribute>,
}

impl RawEdge {
    /// First attribute with the given key, if any.
    pub fn attr(&self, key: &str) -> Option<&str> {
        first_attr(&self.data, key)
    }
}

/// Everything the decoder extracts from one document. Multiple `graph`
/// elements are flattened into these two lists in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDocument {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

fn first_attr<'a>(data: &'a [RawAttribute], key: &str) -> Option<&'a str> {
    data.iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
}
