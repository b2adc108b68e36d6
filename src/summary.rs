//! Aggregate counts over a validated graph.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::ValidatedGraph;

/// Node/edge totals plus per-domain tallies. `BTreeMap` keys keep the
/// serialized order deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: BTreeMap<&'static str, usize>,
    pub edges_by_kind: BTreeMap<&'static str, usize>,
    pub edges_by_criticality: BTreeMap<&'static str, usize>,
}

impl GraphSummary {
    pub fn of(graph: &ValidatedGraph) -> Self {
        let mut nodes_by_type = BTreeMap::new();
        for node in &graph.nodes {
            *nodes_by_type.entry(node.node_type.as_str()).or_insert(0) += 1;
        }

        let mut edges_by_kind = BTreeMap::new();
        let mut edges_by_criticality = BTreeMap::new();
        for edge in &graph.edges {
            *edges_by_kind.entry(edge.kind.as_str()).or_insert(0) += 1;
            *edges_by_criticality
                .entry(edge.criticality.as_str())
                .or_insert(0) += 1;
        }

        GraphSummary {
            node_count: graph.nodes.len(),
            edge_count: graph.edges.len(),
            nodes_by_type,
            edges_by_kind,
            edges_by_criticality,
        }
    }
}
