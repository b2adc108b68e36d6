//! Integration tests for schema validation and graph building.

use archml::error::{Endpoint, Entity, GraphmlError, ValidationError};
use archml::model::{Criticality, EdgeKind, NodeType};
use archml::parse;
use serde_json::json;

fn validation_err(xml: &str) -> ValidationError {
    match parse::parse_and_validate(xml) {
        Err(GraphmlError::Validation(e)) => e,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn validate_example_architecture_passes() {
    let xml = include_str!("fixtures/example_architecture.graphml");
    let graph = parse::parse_and_validate(xml).expect("should validate");
    assert_eq!(graph.nodes.len(), 6);
    assert_eq!(graph.edges.len(), 5);

    let api = &graph.nodes[0];
    assert_eq!(api.label, "API Gateway");
    assert_eq!(api.node_type, NodeType::Service);
    assert_eq!(api.env.as_deref(), Some("prod"));
    assert_eq!(api.tags, ["edge", "public"]);

    let auth = &graph.nodes[1];
    assert_eq!(auth.x, Some(120.5));
    assert_eq!(auth.y, Some(80.0));

    let e1 = &graph.edges[0];
    assert_eq!(e1.label, "authenticates via");
    assert_eq!(e1.kind, EdgeKind::Sync);
    assert_eq!(e1.criticality, Criticality::High);
    assert_eq!(e1.pair, "api -> auth");

    // e3 has no e_label; it falls back to the edge id
    let e3 = &graph.edges[2];
    assert_eq!(e3.label, "e3");

    let e4 = &graph.edges[3];
    assert_eq!(e4.weight, Some(2.5));
}

#[test]
fn minimal_pair_graph() {
    let xml = r#"
        <graphml>
          <graph id="g">
            <node id="A">
              <data key="n_label">Service A</data>
              <data key="n_type">service</data>
            </node>
            <node id="B">
              <data key="n_label">Main DB</data>
              <data key="n_type">db</data>
            </node>
            <edge id="e1" source="A" target="B">
              <data key="e_kind">sync</data>
              <data key="e_crit">high</data>
            </edge>
          </graph>
        </graphml>"#;
    let graph = parse::parse_and_validate(xml).expect("should validate");
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].pair, "A -> B");
}

#[test]
fn validation_is_deterministic() {
    let xml = include_str!("fixtures/example_architecture.graphml");
    let first = parse::parse_and_validate(xml).expect("should validate");
    let second = parse::parse_and_validate(xml).expect("should validate");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn node_missing_label() {
    let xml = include_str!("fixtures/missing_label.graphml");
    let err = validation_err(xml);
    assert_eq!(
        err,
        ValidationError::MissingField {
            entity: Entity::Node,
            id: "gw".into(),
            field: "label",
        }
    );
    insta::assert_snapshot!(err.to_string(), @"node 'gw' is missing required field 'label'");
}

#[test]
fn node_missing_type() {
    let xml = r#"
        <graphml>
          <graph id="g">
            <node id="gw">
              <data key="n_label">Gateway</data>
            </node>
          </graph>
        </graphml>"#;
    let err = validation_err(xml);
    assert_eq!(
        err,
        ValidationError::MissingField {
            entity: Entity::Node,
            id: "gw".into(),
            field: "type",
        }
    );
}

#[test]
fn node_type_outside_domain() {
    let xml = include_str!("fixtures/bad_node_type.graphml");
    let err = validation_err(xml);
    assert_eq!(
        err,
        ValidationError::InvalidEnum {
            entity: Entity::Node,
            id: "gw".into(),
            field: "type",
            value: "database".into(),
            allowed: NodeType::ALL,
        }
    );
    insta::assert_snapshot!(err.to_string(), @"node 'gw' has invalid type 'database', allowed values: service, db, cache, queue, external");
}

#[test]
fn cache_node_type_is_accepted() {
    let xml = r#"
        <graphml>
          <graph id="g">
            <node id="redis">
              <data key="n_label">Redis</data>
              <data key="n_type">cache</data>
            </node>
          </graph>
        </graphml>"#;
    let graph = parse::parse_and_validate(xml).expect("should validate");
    assert_eq!(graph.nodes[0].node_type, NodeType::Cache);
}

#[test]
fn dangling_source_even_with_valid_target() {
    let xml = include_str!("fixtures/dangling_source.graphml");
    let err = validation_err(xml);
    assert_eq!(
        err,
        ValidationError::DanglingReference {
            edge_id: "e1".into(),
            endpoint: Endpoint::Source,
            node_id: "ghost".into(),
        }
    );
    insta::assert_snapshot!(err.to_string(), @"edge 'e1' references unknown source node 'ghost'");
}

#[test]
fn dangling_target() {
    let xml = r#"
        <graphml>
          <graph id="g">
            <node id="a">
              <data key="n_label">A</data>
              <data key="n_type">service</data>
            </node>
            <edge id="e1" source="a" target="nowhere">
              <data key="e_kind">sync</data>
              <data key="e_crit">low</data>
            </edge>
          </graph>
        </graphml>"#;
    let err = validation_err(xml);
    assert_eq!(
        err,
        ValidationError::DanglingReference {
            edge_id: "e1".into(),
            endpoint: Endpoint::Target,
            node_id: "nowhere".into(),
        }
    );
}

#[test]
fn edge_missing_kind_and_criticality() {
    let base = |data: &str| {
        format!(
            r#"
            <graphml>
              <graph id="g">
                <node id="a">
                  <data key="n_label">A</data>
                  <data key="n_type">service</data>
                </node>
                <node id="b">
                  <data key="n_label">B</data>
                  <data key="n_type">db</data>
                </node>
                <edge id="e1" source="a" target="b">{data}</edge>
              </graph>
            </graphml>"#
        )
    };

    let err = validation_err(&base(r#"<data key="e_crit">low</data>"#));
    assert_eq!(
        err,
        ValidationError::MissingField {
            entity: Entity::Edge,
            id: "e1".into(),
            field: "kind",
        }
    );

    let err = validation_err(&base(r#"<data key="e_kind">sync</data>"#));
    assert_eq!(
        err,
        ValidationError::MissingField {
            entity: Entity::Edge,
            id: "e1".into(),
            field: "criticality",
        }
    );

    let err = validation_err(&base(
        r#"<data key="e_kind">rpc</data><data key="e_crit">low</data>"#,
    ));
    assert_eq!(
        err,
        ValidationError::InvalidEnum {
            entity: Entity::Edge,
            id: "e1".into(),
            field: "kind",
            value: "rpc".into(),
            allowed: EdgeKind::ALL,
        }
    );

    let err = validation_err(&base(
        r#"<data key="e_kind">sync</data><data key="e_crit">urgent</data>"#,
    ));
    assert_eq!(
        err,
        ValidationError::InvalidEnum {
            entity: Entity::Edge,
            id: "e1".into(),
            field: "criticality",
            value: "urgent".into(),
            allowed: Criticality::ALL,
        }
    );
}

#[test]
fn empty_edge_label_falls_back_to_id() {
    let xml = r#"
        <graphml>
          <graph id="g">
            <node id="a">
              <data key="n_label">A</data>
              <data key="n_type">service</data>
            </node>
            <edge id="loop1" source="a" target="a">
              <data key="e_label"></data>
              <data key="e_kind">async</data>
              <data key="e_crit">low</data>
            </edge>
          </graph>
        </graphml>"#;
    let graph = parse::parse_and_validate(xml).expect("should validate");
    assert_eq!(graph.edges[0].label, "loop1");
}

#[test]
fn non_numeric_position_is_rejected() {
    let xml = r#"
        <graphml>
          <graph id="g">
            <node id="gw">
              <data key="n_label">Gateway</data>
              <data key="n_type">service</data>
              <data key="n_x">abc</data>
            </node>
          </graph>
        </graphml>"#;
    let err = validation_err(xml);
    assert_eq!(
        err,
        ValidationError::InvalidNumber {
            entity: Entity::Node,
            id: "gw".into(),
            field: "x",
            value: "abc".into(),
        }
    );
    insta::assert_snapshot!(err.to_string(), @"node 'gw' has non-numeric x 'abc'");
}

#[test]
fn cross_fragment_edge_validates() {
    // All graph fragments are flattened before validation, so an edge in the
    // first fragment may reference a node declared in the second.
    let xml = include_str!("fixtures/multi_graph.graphml");
    let graph = parse::parse_and_validate(xml).expect("should validate");
    assert_eq!(graph.edges[0].pair, "web -> accounts");
}

#[test]
fn duplicate_node_ids_are_not_rejected() {
    let xml = r#"
        <graphml>
          <graph id="g">
            <node id="a">
              <data key="n_label">First</data>
              <data key="n_type">service</data>
            </node>
            <node id="a">
              <data key="n_label">Second</data>
              <data key="n_type">db</data>
            </node>
          </graph>
        </graphml>"#;
    let graph = parse::parse_and_validate(xml).expect("should validate");
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[0].label, "First");
    assert_eq!(graph.nodes[1].label, "Second");
}

#[test]
fn serialized_shape_matches_contract() {
    let xml = r#"
        <graphml>
          <graph id="g">
            <node id="A">
              <data key="n_label">Service A</data>
              <data key="n_type">service</data>
            </node>
            <node id="B">
              <data key="n_label">Main DB</data>
              <data key="n_type">db</data>
            </node>
            <edge id="e1" source="A" target="B">
              <data key="e_label">calls</data>
              <data key="e_kind">sync</data>
              <data key="e_crit">high</data>
            </edge>
          </graph>
        </graphml>"#;
    let graph = parse::parse_and_validate(xml).expect("should validate");
    assert_eq!(
        serde_json::to_value(&graph).unwrap(),
        json!({
            "nodes": [
                {"id": "A", "label": "Service A", "type": "service"},
                {"id": "B", "label": "Main DB", "type": "db"}
            ],
            "edges": [
                {
                    "id": "e1",
                    "label": "calls",
                    "source": "A",
                    "target": "B",
                    "kind": "sync",
                    "criticality": "high",
                    "pair": "A -> B"
                }
            ]
        })
    );
}

#[test]
fn malformed_document_fails_before_validation() {
    let xml = include_str!("fixtures/malformed.graphml");
    assert!(matches!(
        parse::parse_and_validate(xml),
        Err(GraphmlError::Decode(_))
    ));
}
