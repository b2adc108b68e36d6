//! Non-fatal structural findings over a validated graph (W001–W003).
//!
//! Unlike schema validation these never fail a parse; all findings are
//! accumulated and returned.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::ArchGraph;
use crate::model::ValidatedGraph;

#[derive(Debug, Clone, Serialize)]
pub struct Lint {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Run all lint rules. Returns all findings.
pub fn lint(graph: &ValidatedGraph, arch: &ArchGraph) -> Vec<Lint> {
    let mut findings = Vec::new();

    w001_duplicate_edges(graph, &mut findings);
    w002_self_loops(graph, &mut findings);
    w003_isolated_nodes(graph, arch, &mut findings);

    findings
}

fn w001_duplicate_edges(graph: &ValidatedGraph, findings: &mut Vec<Lint>) {
    let mut seen = HashSet::new();
    for edge in &graph.edges {
        let key = (edge.source.as_str(), edge.target.as_str(), edge.kind);
        if !seen.insert(key) {
            findings.push(Lint {
                code: "W001",
                message: format!(
                    "duplicate {} edge from '{}' to '{}'",
                    edge.kind.as_str(),
                    edge.source,
                    edge.target
                ),
                subject: Some(edge.id.clone()),
            });
        }
    }
}

fn w002_self_loops(graph: &ValidatedGraph, findings: &mut Vec<Lint>) {
    for edge in &graph.edges {
        if edge.source == edge.target {
            findings.push(Lint {
                code: "W002",
                message: format!("self-loop on node '{}'", edge.source),
                subject: Some(edge.id.clone()),
            });
        }
    }
}

fn w003_isolated_nodes(graph: &ValidatedGraph, arch: &ArchGraph, findings: &mut Vec<Lint>) {
    for node in &graph.nodes {
        if arch.incoming_count(&node.id) == 0 && arch.outgoing_count(&node.id) == 0 {
            findings.push(Lint {
                code: "W003",
                message: format!("node '{}' has no edges", node.id),
                subject: Some(node.id.clone()),
            });
        }
    }
}
