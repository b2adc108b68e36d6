//! Parse phase: GraphML text → raw intermediate form + validated graph.

pub mod graphml;
pub mod types;

pub use types::{RawAttribute, RawDocument, RawEdge, RawNode};

use crate::error::GraphmlError;
use crate::model::ValidatedGraph;

/// Decode a GraphML document into the raw intermediate form.
pub fn parse(xml: &str) -> Result<RawDocument, GraphmlError> {
    Ok(graphml::decode(xml)?)
}

/// Decode and validate in one step.
pub fn parse_and_validate(xml: &str) -> Result<ValidatedGraph, GraphmlError> {
    let doc = graphml::decode(xml)?;
    Ok(crate::validate::validate_and_build(&doc)?)
}
