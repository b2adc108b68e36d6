//! Event-driven GraphML decoder built on quick-xml.
//!
//! Only the elements this schema interprets are recognized: `graphml`,
//! `graph`, `node`, `edge` and `data`. Everything else (`key` declarations,
//! `desc`, extension elements) is skipped. Multiple `graph` elements are
//! flattened: their node and edge lists are concatenated in document order.
//! Whitespace-only text nodes are formatting and are ignored; character
//! content inside an open `data` element is preserved exactly.

use std::str;

use log::debug;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::error::DecodeError;
use crate::parse::types::{RawAttribute, RawDocument, RawEdge, RawNode};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Where the cursor currently sits. `Node`/`Edge` carry the index of the
/// element being filled so `data` content lands on the right owner even
/// through nested `graph` elements.
#[derive(Debug, Clone, Copy)]
enum Scope {
    Root,
    Graph,
    Node(usize),
    Edge(usize),
    Data,
    Skipped,
}

/// Decode a GraphML document into the raw intermediate form.
pub fn decode(xml: &str) -> DecodeResult<RawDocument> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut doc = RawDocument::default();
    let mut stack: Vec<Scope> = Vec::new();
    let mut saw_root = false;
    // (key, accumulated character content) of an open node/edge `data` element
    let mut current_data: Option<(String, String)> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = local_name_start(&e)?;
                let scope = match name.as_str() {
                    "graphml" => {
                        if !stack.is_empty() {
                            return Err(DecodeError::Structure(
                                "graphml element must be the document root".into(),
                            ));
                        }
                        saw_root = true;
                        Scope::Root
                    }
                    "graph" => {
                        match stack.last() {
                            Some(Scope::Root) | Some(Scope::Node(_)) => {}
                            _ => {
                                return Err(DecodeError::Structure(
                                    "graph outside graphml".into(),
                                ));
                            }
                        }
                        Scope::Graph
                    }
                    "node" => {
                        require_graph(&stack, "node")?;
                        doc.nodes.push(start_node(&e)?);
                        Scope::Node(doc.nodes.len() - 1)
                    }
                    "edge" => {
                        require_graph(&stack, "edge")?;
                        doc.edges.push(start_edge(&e)?);
                        Scope::Edge(doc.edges.len() - 1)
                    }
                    "data" => {
                        // Graph-level data carries attributes this schema
                        // does not use; only node/edge data is captured.
                        if matches!(stack.last(), Some(Scope::Node(_)) | Some(Scope::Edge(_))) {
                            let key = attr_required(&e, "key", "data@key")?;
                            current_data = Some((key, String::new()));
                        }
                        Scope::Data
                    }
                    _ => Scope::Skipped,
                };
                stack.push(scope);
            }

            Event::Empty(e) => {
                let name = local_name_start(&e)?;
                match name.as_str() {
                    "graphml" => {
                        if !stack.is_empty() {
                            return Err(DecodeError::Structure(
                                "graphml element must be the document root".into(),
                            ));
                        }
                        saw_root = true;
                    }
                    "graph" => match stack.last() {
                        Some(Scope::Root) | Some(Scope::Node(_)) => {}
                        _ => {
                            return Err(DecodeError::Structure("graph outside graphml".into()));
                        }
                    },
                    "node" => {
                        require_graph(&stack, "node")?;
                        doc.nodes.push(start_node(&e)?);
                    }
                    "edge" => {
                        require_graph(&stack, "edge")?;
                        doc.edges.push(start_edge(&e)?);
                    }
                    "data" => match stack.last() {
                        Some(&Scope::Node(idx)) => {
                            let key = attr_required(&e, "key", "data@key")?;
                            doc.nodes[idx].data.push(RawAttribute {
                                key,
                                value: String::new(),
                            });
                        }
                        Some(&Scope::Edge(idx)) => {
                            let key = attr_required(&e, "key", "data@key")?;
                            doc.edges[idx].data.push(RawAttribute {
                                key,
                                value: String::new(),
                            });
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }

            Event::Text(t) => {
                if let Some((_, value)) = current_data.as_mut() {
                    let txt = t.decode()?;
                    match unescape(txt.as_ref()) {
                        Ok(cow) => value.push_str(&cow),
                        Err(_) => value.push_str(&txt),
                    }
                }
                // Text outside data is either formatting or content this
                // schema does not interpret.
            }

            Event::CData(c) => {
                if let Some((_, value)) = current_data.as_mut() {
                    value.push_str(&c.decode()?);
                }
            }

            Event::GeneralRef(r) => {
                if let Some((_, value)) = current_data.as_mut() {
                    let name = str::from_utf8(r.as_ref())?.to_string();
                    match resolve_reference(&name) {
                        Some(ch) => value.push(ch),
                        None => {
                            return Err(DecodeError::Structure(format!(
                                "unknown entity reference '&{name};'"
                            )));
                        }
                    }
                }
            }

            Event::End(e) => {
                let name = local_name_end(&e)?;
                match stack.pop() {
                    Some(Scope::Data) => {
                        if let Some((key, value)) = current_data.take() {
                            match stack.last() {
                                Some(&Scope::Node(idx)) => {
                                    doc.nodes[idx].data.push(RawAttribute { key, value });
                                }
                                Some(&Scope::Edge(idx)) => {
                                    doc.edges[idx].data.push(RawAttribute { key, value });
                                }
                                _ => {}
                            }
                        }
                    }
                    Some(_) => {}
                    None => {
                        return Err(DecodeError::Structure(format!(
                            "closing {name} with no open element"
                        )));
                    }
                }
            }

            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    if !saw_root {
        return Err(DecodeError::Structure(
            "no <graphml> root element found".into(),
        ));
    }
    if !stack.is_empty() {
        return Err(DecodeError::Structure("unexpected end of document".into()));
    }

    debug!(
        "decoded graphml document: {} nodes, {} edges",
        doc.nodes.len(),
        doc.edges.len()
    );
    Ok(doc)
}

/// Resolve the five predefined XML entities and numeric character
/// references. `name` is the reference body without `&` and `;`.
fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn require_graph(stack: &[Scope], element: &'static str) -> DecodeResult<()> {
    match stack.last() {
        Some(Scope::Graph) => Ok(()),
        _ => Err(DecodeError::Structure(format!("{element} outside graph"))),
    }
}

fn start_node(e: &BytesStart<'_>) -> DecodeResult<RawNode> {
    Ok(RawNode {
        id: attr_required(e, "id", "node@id")?,
        data: Vec::new(),
    })
}

fn start_edge(e: &BytesStart<'_>) -> DecodeResult<RawEdge> {
    Ok(RawEdge {
        id: attr_required(e, "id", "edge@id")?,
        source: attr_required(e, "source", "edge@source")?,
        target: attr_required(e, "target", "edge@target")?,
        data: Vec::new(),
    })
}

fn attr_opt(e: &BytesStart<'_>, key: &str) -> DecodeResult<Option<String>> {
    for a in e.attributes() {
        let a = a?;
        if a.key.as_ref() == key.as_bytes() {
            return Ok(Some(a.unescape_value()?.to_string()));
        }
    }
    Ok(None)
}

fn attr_required(e: &BytesStart<'_>, key: &str, label: &'static str) -> DecodeResult<String> {
    attr_opt(e, key)?.ok_or(DecodeError::MissingAttr(label))
}

fn local_name_start(e: &BytesStart<'_>) -> DecodeResult<String> {
    Ok(str::from_utf8(e.local_name().as_ref())?.to_string())
}

fn local_name_end(e: &BytesEnd<'_>) -> DecodeResult<String> {
    Ok(str::from_utf8(e.local_name().as_ref())?.to_string())
}
