// Applies planned edits to the arena.

use crate::document::{Attribute, Document, NodeKind};
use crate::error::DomError;
use docnav_types::{Edit, Fragment, NodeId};

impl Document {
    /// Applies `edits` in order.
    ///
    /// Stops at the first edit that cannot be applied; the edits before it stay applied.
    pub fn apply(&mut self, edits: &[Edit]) -> Result<(), DomError> {
        for edit in edits {
            self.apply_one(edit)?;
        }
        log::trace!("applied {} edits", edits.len());
        Ok(())
    }

    pub fn apply_one(&mut self, edit: &Edit) -> Result<(), DomError> {
        let target = edit.target();
        if !self.contains(target) {
            return Err(DomError::UnknownNode(target));
        }

        match edit {
            Edit::InsertBefore { fragment, .. } => {
                let scope = self.parent(target).unwrap_or(target);
                let nodes = self.instantiate(fragment, scope)?;
                self.insert_siblings(target, nodes, 0)
            }
            Edit::InsertAfter { fragment, .. } => {
                let scope = self.parent(target).unwrap_or(target);
                let nodes = self.instantiate(fragment, scope)?;
                self.insert_siblings(target, nodes, 1)
            }
            Edit::SetAttribute { name, value, .. } => self.set_attribute(target, name, value),
            Edit::Append { fragment, .. } => {
                let nodes = self.instantiate(fragment, target)?;
                for node in nodes {
                    self.attach(target, node);
                }
                Ok(())
            }
            Edit::ReplaceChildren { fragment, .. } => {
                let nodes = self.instantiate(fragment, target)?;
                for old in std::mem::take(&mut self.nodes[target.index()].children) {
                    self.nodes[old.index()].parent = None;
                }
                for node in nodes {
                    self.attach(target, node);
                }
                Ok(())
            }
        }
    }

    /// Creates detached nodes for `fragment`, to be placed inside `scope`.
    fn instantiate(
        &mut self,
        fragment: &Fragment,
        scope: NodeId,
    ) -> Result<Vec<NodeId>, DomError> {
        match fragment {
            Fragment::Element {
                tag,
                attributes,
                children,
            } => {
                let id = self.push(NodeKind::Element {
                    name: tag.clone(),
                    attributes: attributes
                        .iter()
                        .map(|(name, value)| Attribute {
                            name: name.clone(),
                            value: value.clone(),
                        })
                        .collect(),
                });
                for child in children {
                    for node in self.instantiate(child, scope)? {
                        self.attach(id, node);
                    }
                }
                Ok(vec![id])
            }
            Fragment::Text { text } => Ok(vec![self.push(NodeKind::Text(text.clone()))]),
            Fragment::Markup { markup } => self.parse_fragment(markup, scope),
        }
    }

    /// Inserts `nodes` next to `target`; `offset` 0 places them before it, 1 after it.
    fn insert_siblings(
        &mut self,
        target: NodeId,
        nodes: Vec<NodeId>,
        offset: usize,
    ) -> Result<(), DomError> {
        let parent = self.parent(target).ok_or(DomError::Detached(target))?;
        let position = self
            .children(parent)
            .iter()
            .position(|&c| c == target)
            .ok_or(DomError::Detached(target))?
            + offset;

        for &node in &nodes {
            self.nodes[node.index()].parent = Some(parent);
        }
        self.nodes[parent.index()]
            .children
            .splice(position..position, nodes);
        Ok(())
    }

    fn set_attribute(&mut self, target: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let NodeKind::Element { attributes, .. } = &mut self.nodes[target.index()].kind else {
            return Err(DomError::NotAnElement(target));
        };
        match attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => attributes.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
        Ok(())
    }
}
