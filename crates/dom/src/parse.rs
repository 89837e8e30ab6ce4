// Import of roxmltree documents into the owned arena.

use crate::document::{Attribute, Document, NodeData, NodeKind};
use crate::error::DomError;
use crate::serialize::escape_attribute;
use docnav_types::NodeId;
use roxmltree::{Node, ParsingOptions};
use std::collections::HashSet;

const XML_NAMESPACE_PREFIX: &str = "xml";
const FRAGMENT_WRAPPER: &str = "docnav-fragment";

fn parsing_options<'a>() -> ParsingOptions<'a> {
    // Pages start with `<!DOCTYPE html>`, which roxmltree rejects by default.
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    options
}

impl Document {
    /// Parses a well-formed (X)HTML page.
    ///
    /// Everything before the first top-level node is kept verbatim as the prolog.
    pub fn parse(source: &str) -> Result<Self, DomError> {
        let xml = roxmltree::Document::parse_with_options(source, parsing_options())?;
        let root = xml.root();
        let prolog_end = root.first_child().map_or(0, |n| n.range().start);

        let mut doc = Document::empty(source[..prolog_end].to_string());
        let doc_root = doc.root();
        for child in root.children() {
            if let Some(id) = doc.import(child, None) {
                doc.attach(doc_root, id);
            }
        }
        log::trace!("parsed page into {} nodes", doc.len());
        Ok(doc)
    }

    /// Parses a markup fragment into detached nodes of this document.
    ///
    /// The fragment sees the namespace declarations in effect at `scope`, so
    /// prefixed elements copied out of the page parse again.
    pub(crate) fn parse_fragment(
        &mut self,
        markup: &str,
        scope: NodeId,
    ) -> Result<Vec<NodeId>, DomError> {
        let mut open = format!("<{FRAGMENT_WRAPPER}");
        for (name, uri) in self.namespace_declarations(scope) {
            open.push_str(&format!(" {name}=\"{}\"", escape_attribute(&uri)));
        }
        let wrapped = format!("{open}>{markup}</{FRAGMENT_WRAPPER}>");
        let xml = roxmltree::Document::parse_with_options(&wrapped, parsing_options()).map_err(
            |e| DomError::InvalidFragment {
                markup: markup.to_string(),
                message: e.to_string(),
            },
        )?;
        let wrapper = xml.root_element();
        Ok(wrapper
            .children()
            .filter_map(|child| self.import(child, Some(wrapper)))
            .collect())
    }

    /// `xmlns` attributes on `scope` and its ancestors, nearest declaration first.
    fn namespace_declarations(&self, scope: NodeId) -> Vec<(String, String)> {
        let mut seen = HashSet::new();
        let mut declarations = Vec::new();
        for node in std::iter::once(scope).chain(self.ancestors(scope)) {
            let NodeKind::Element { attributes, .. } = self.kind(node) else {
                continue;
            };
            for attr in attributes {
                let is_declaration = attr.name == "xmlns" || attr.name.starts_with("xmlns:");
                if is_declaration && seen.insert(attr.name.as_str()) {
                    declarations.push((attr.name.clone(), attr.value.clone()));
                }
            }
        }
        declarations
    }

    /// Copies `node` and its subtree into the arena, detached.
    ///
    /// `scope` is the element whose namespace declarations are already in effect
    /// where the copy will live; declarations it shares are not repeated.
    fn import(&mut self, node: Node<'_, '_>, scope: Option<Node<'_, '_>>) -> Option<NodeId> {
        let kind = if node.is_element() {
            NodeKind::Element {
                name: qualified_name(node, node.tag_name().namespace(), node.tag_name().name()),
                attributes: element_attributes(node, scope),
            }
        } else if node.is_text() {
            NodeKind::Text(node.text().unwrap_or_default().to_string())
        } else if node.is_comment() {
            NodeKind::Comment(node.text().unwrap_or_default().to_string())
        } else if let Some(pi) = node.pi() {
            NodeKind::ProcessingInstruction {
                target: pi.target.to_string(),
                value: pi.value.map(str::to_string),
            }
        } else {
            return None;
        };

        let id = self.push(kind);
        for child in node.children() {
            if let Some(child_id) = self.import(child, Some(node)) {
                self.attach(id, child_id);
            }
        }
        Some(id)
    }

    pub(crate) fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }
}

fn qualified_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

/// Namespace declarations introduced by `node`, followed by its attributes.
fn element_attributes(node: Node<'_, '_>, scope: Option<Node<'_, '_>>) -> Vec<Attribute> {
    let inherited: Vec<(Option<&str>, &str)> = scope
        .map(|s| s.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    let declarations = node
        .namespaces()
        .filter(|ns| ns.name() != Some(XML_NAMESPACE_PREFIX))
        .filter(|ns| !inherited.contains(&(ns.name(), ns.uri())))
        .map(|ns| Attribute {
            name: ns
                .name()
                .map_or_else(|| "xmlns".to_string(), |prefix| format!("xmlns:{prefix}")),
            value: ns.uri().to_string(),
        });

    let attributes = node.attributes().map(|attr| Attribute {
        name: qualified_name(node, attr.namespace(), attr.name()),
        value: attr.value().to_string(),
    });

    declarations.chain(attributes).collect()
}
