//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::graph::ArchGraph;
use crate::model::ValidatedGraph;
use crate::summary::GraphSummary;
use crate::validate::lint::Lint;

/// Parse and validate a GraphML document.
/// Returns `{status: "success", graph}` or `{status: "error", error}`.
#[wasm_bindgen]
pub fn parse_graph(xml: &str) -> JsValue {
    let result = match crate::parse::parse_and_validate(xml) {
        Ok(graph) => ParseResult::Success { graph },
        Err(e) => ParseResult::Error {
            error: e.to_string(),
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Parse, validate and lint a GraphML document.
/// Returns `{status: "success", lints}` or `{status: "error", error}`.
#[wasm_bindgen]
pub fn lint_graph(xml: &str) -> JsValue {
    let result = match crate::parse::parse_and_validate(xml) {
        Ok(graph) => {
            let arch = ArchGraph::build(&graph);
            LintResult::Success {
                lints: crate::validate::lint::lint(&graph, &arch),
            }
        }
        Err(e) => LintResult::Error {
            error: e.to_string(),
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Parse and validate a GraphML document, then summarize it.
/// Returns `{status: "success", summary}` or `{status: "error", error}`.
#[wasm_bindgen]
pub fn summarize_graph(xml: &str) -> JsValue {
    let result = match crate::parse::parse_and_validate(xml) {
        Ok(graph) => SummaryResult::Success {
            summary: GraphSummary::of(&graph),
        },
        Err(e) => SummaryResult::Error {
            error: e.to_string(),
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ParseResult {
    Success { graph: ValidatedGraph },
    Error { error: String },
}

#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum LintResult {
    Success { lints: Vec<Lint> },
    Error { error: String },
}

#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum SummaryResult {
    Success { summary: GraphSummary },
    Error { error: String },
}
