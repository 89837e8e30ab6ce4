//! The arena-backed document tree.
//!
//! Planners only ever see `&Document`; the tree is changed exclusively through
//! [`Document::apply`](crate::Document::apply), which keeps every existing
//! [`NodeId`] valid (nodes are never removed from the arena, only detached).

use docnav_types::NodeId;

/// An attribute as written in the page, prefix included (`xml:lang`, `xmlns`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document node. Its children are the top-level nodes of the page.
    Root,
    Element {
        name: String,
        attributes: Vec<Attribute>,
    },
    Text(String),
    Comment(String),
    ProcessingInstruction {
        target: String,
        value: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// An owned, mutable page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Source text before the first top-level node (XML declaration, DOCTYPE).
    pub(crate) prolog: String,
    pub(crate) nodes: Vec<NodeData>,
}

impl Document {
    pub(crate) fn empty(prolog: String) -> Self {
        Self {
            prolog,
            nodes: vec![NodeData {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Number of nodes in the arena, detached ones included.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn prolog(&self) -> &str {
        &self.prolog
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    /// The kind of `id`. Ids must come from this document.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.data(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.data(id).children
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Parent, grandparent, ... of `id` up to the document node.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// All nodes below `id` in document order, `id` itself excluded.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Element { .. })
    }

    /// Local element name, without namespace prefix.
    pub fn element_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { name, .. } => {
                Some(name.rsplit_once(':').map_or(name.as_str(), |(_, local)| local))
            }
            _ => None,
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }

    /// Whether the element's whitespace-separated `class` list contains `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attribute(id, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Elements below `scope` carrying `class`, in document order.
    pub fn elements_with_class<'a>(
        &'a self,
        scope: NodeId,
        class: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(scope).filter(move |&n| self.has_class(n, class))
    }

    /// Elements below `scope` with the given local name, in document order.
    pub fn elements_named<'a>(
        &'a self,
        scope: NodeId,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(scope)
            .filter(move |&n| self.element_name(n) == Some(name))
    }

    /// Content of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of all text nodes below `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.text(id) {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|n| self.text(n))
            .collect()
    }
}

/// Pre-order iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(next).iter().rev().copied());
        Some(next)
    }
}
