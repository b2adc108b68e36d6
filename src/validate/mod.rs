//! Schema validation: raw GraphML form → typed architecture graph.
//!
//! Fail-fast: the first violation is returned and nothing after it is
//! inspected. Validation is pure; repeated calls on identical input yield
//! identical output.

pub mod lint;

use std::collections::HashSet;

use log::debug;

use crate::error::{Endpoint, Entity, ValidationError};
use crate::model::{Criticality, EdgeKind, NodeType, ValidatedEdge, ValidatedGraph, ValidatedNode};
use crate::parse::types::{RawDocument, RawEdge, RawNode};

/// Validate every node, then every edge, in document order, and assemble the
/// typed graph. Edge endpoints are checked against the set of node ids
/// accepted in the node pass.
pub fn validate_and_build(doc: &RawDocument) -> Result<ValidatedGraph, ValidationError> {
    let mut known = HashSet::with_capacity(doc.nodes.len());
    let mut nodes = Vec::with_capacity(doc.nodes.len());
    for raw in &doc.nodes {
        let node = build_node(raw)?;
        // A duplicate id is recorded again; edges validated against the
        // earlier entry stay valid.
        known.insert(node.id.clone());
        nodes.push(node);
    }

    let mut edges = Vec::with_capacity(doc.edges.len());
    for raw in &doc.edges {
        edges.push(build_edge(raw, &known)?);
    }

    debug!("validated graph: {} nodes, {} edges", nodes.len(), edges.len());
    Ok(ValidatedGraph { nodes, edges })
}

fn build_node(raw: &RawNode) -> Result<ValidatedNode, ValidationError> {
    let label = required_attr(raw.attr("n_label"), Entity::Node, &raw.id, "label")?;
    let type_value = required_attr(raw.attr("n_type"), Entity::Node, &raw.id, "type")?;
    let node_type =
        NodeType::parse(&type_value).ok_or_else(|| ValidationError::InvalidEnum {
            entity: Entity::Node,
            id: raw.id.clone(),
            field: "type",
            value: type_value.clone(),
            allowed: NodeType::ALL,
        })?;

    Ok(ValidatedNode {
        id: raw.id.clone(),
        label,
        node_type,
        x: numeric_attr(raw.attr("n_x"), Entity::Node, &raw.id, "x")?,
        y: numeric_attr(raw.attr("n_y"), Entity::Node, &raw.id, "y")?,
        env: optional_attr(raw.attr("n_env")),
        tags: split_tags(raw.attr("n_tags")),
    })
}

fn build_edge(raw: &RawEdge, known: &HashSet<String>) -> Result<ValidatedEdge, ValidationError> {
    if !known.contains(&raw.source) {
        return Err(ValidationError::DanglingReference {
            edge_id: raw.id.clone(),
            endpoint: Endpoint::Source,
            node_id: raw.source.clone(),
        });
    }
    if !known.contains(&raw.target) {
        return Err(ValidationError::DanglingReference {
            edge_id: raw.id.clone(),
            endpoint: Endpoint::Target,
            node_id: raw.target.clone(),
        });
    }

    let kind_value = required_attr(raw.attr("e_kind"), Entity::Edge, &raw.id, "kind")?;
    let crit_value = required_attr(raw.attr("e_crit"), Entity::Edge, &raw.id, "criticality")?;
    let kind = EdgeKind::parse(&kind_value).ok_or_else(|| ValidationError::InvalidEnum {
        entity: Entity::Edge,
        id: raw.id.clone(),
        field: "kind",
        value: kind_value.clone(),
        allowed: EdgeKind::ALL,
    })?;
    let criticality =
        Criticality::parse(&crit_value).ok_or_else(|| ValidationError::InvalidEnum {
            entity: Entity::Edge,
            id: raw.id.clone(),
            field: "criticality",
            value: crit_value.clone(),
            allowed: Criticality::ALL,
        })?;

    // The label is the only optional field in the schema proper; it falls
    // back to the edge id.
    let label = match raw.attr("e_label") {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => raw.id.clone(),
    };

    Ok(ValidatedEdge {
        id: raw.id.clone(),
        label,
        source: raw.source.clone(),
        target: raw.target.clone(),
        kind,
        criticality,
        weight: numeric_attr(raw.attr("e_weight"), Entity::Edge, &raw.id, "weight")?,
        env: optional_attr(raw.attr("e_env")),
        tags: split_tags(raw.attr("e_tags")),
        pair: format!("{} -> {}", raw.source, raw.target),
    })
}

fn required_attr(
    value: Option<&str>,
    entity: Entity,
    id: &str,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::MissingField {
            entity,
            id: id.to_string(),
            field,
        }),
    }
}

fn numeric_attr(
    value: Option<&str>,
    entity: Entity,
    id: &str,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    let Some(s) = value else { return Ok(None) };
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidNumber {
            entity,
            id: id.to_string(),
            field,
            value: s.to_string(),
        })
}

fn optional_attr(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn split_tags(value: Option<&str>) -> Vec<String> {
    value
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
