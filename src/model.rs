//! Validated graph model: closed-set domains and the typed output graph.
//!
//! The three domains are exhaustive enums, so a `ValidatedNode` or
//! `ValidatedEdge` with an out-of-domain value cannot be constructed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Service,
    Db,
    Cache,
    Queue,
    External,
}

impl NodeType {
    pub const ALL: &'static [&'static str] = &["service", "db", "cache", "queue", "external"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "service" => Some(NodeType::Service),
            "db" => Some(NodeType::Db),
            "cache" => Some(NodeType::Cache),
            "queue" => Some(NodeType::Queue),
            "external" => Some(NodeType::External),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Service => "service",
            NodeType::Db => "db",
            NodeType::Cache => "cache",
            NodeType::Queue => "queue",
            NodeType::External => "external",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Sync,
    Async,
    Stream,
}

impl EdgeKind {
    pub const ALL: &'static [&'static str] = &["sync", "async", "stream"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sync" => Some(EdgeKind::Sync),
            "async" => Some(EdgeKind::Async),
            "stream" => Some(EdgeKind::Stream),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Sync => "sync",
            EdgeKind::Async => "async",
            EdgeKind::Stream => "stream",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Low,
    Medium,
    High,
}

impl Criticality {
    pub const ALL: &'static [&'static str] = &["low", "medium", "high"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Criticality::Low),
            "medium" => Some(Criticality::Medium),
            "high" => Some(Criticality::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Low => "low",
            Criticality::Medium => "medium",
            Criticality::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedEdge {
    pub id: String,
    pub label: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub criticality: Criticality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// Display pair, `"<source> -> <target>"`.
    pub pair: String,
}

/// The validated output graph. Node and edge order matches the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedGraph {
    pub nodes: Vec<ValidatedNode>,
    pub edges: Vec<ValidatedEdge>,
}
