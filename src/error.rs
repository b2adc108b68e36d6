//! Error types for the decode and validate phases.

use std::fmt;

/// Which kind of graph element an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Node,
    Edge,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Node => write!(f, "node"),
            Entity::Edge => write!(f, "edge"),
        }
    }
}

/// Which end of an edge a dangling reference was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// Failures while turning GraphML text into the raw intermediate form.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("utf8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("missing required attribute: {0}")]
    MissingAttr(&'static str),

    #[error("unexpected structure: {0}")]
    Structure(String),
}

/// Failures while checking the raw form against the fixed schema.
///
/// Exactly one of these is reported per validation call; the validator stops
/// at the first violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{entity} '{id}' is missing required field '{field}'")]
    MissingField {
        entity: Entity,
        id: String,
        field: &'static str,
    },

    #[error("{} '{}' has invalid {} '{}', allowed values: {}", .entity, .id, .field, .value, .allowed.join(", "))]
    InvalidEnum {
        entity: Entity,
        id: String,
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("edge '{edge_id}' references unknown {endpoint} node '{node_id}'")]
    DanglingReference {
        edge_id: String,
        endpoint: Endpoint,
        node_id: String,
    },

    #[error("{entity} '{id}' has non-numeric {field} '{value}'")]
    InvalidNumber {
        entity: Entity,
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Unified error for the combined decode-and-validate pipeline.
#[derive(Debug, thiserror::Error)]
pub enum GraphmlError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
