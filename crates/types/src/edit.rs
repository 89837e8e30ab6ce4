use crate::ids::NodeId;
use serde::Serialize;

/// A piece of markup to be inserted into a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fragment {
    /// An element with its attributes (in order) and children.
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<Fragment>,
    },
    /// Plain text. Escaped when the document is written.
    Text { text: String },
    /// Already-serialized markup, e.g. the inner markup of a title element.
    /// Parsed into nodes when the edit is applied, so it must be well-formed.
    Markup { markup: String },
}

impl Fragment {
    pub fn element(tag: impl Into<String>) -> Self {
        Fragment::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text { text: text.into() }
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Fragment::Markup {
            markup: markup.into(),
        }
    }

    /// `<br/>`
    pub fn line_break() -> Self {
        Fragment::element("br")
    }

    /// Adds an attribute. No-op on text and markup fragments.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Fragment::Element { attributes, .. } = &mut self {
            attributes.push((name.into(), value.into()));
        }
        self
    }

    /// Appends a child. No-op on text and markup fragments.
    pub fn with_child(mut self, child: Fragment) -> Self {
        if let Fragment::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Concatenated text of this fragment. Markup fragments contribute their raw source.
    pub fn text_content(&self) -> String {
        match self {
            Fragment::Element { children, .. } => {
                children.iter().map(Fragment::text_content).collect()
            }
            Fragment::Text { text } => text.clone(),
            Fragment::Markup { markup } => markup.clone(),
        }
    }

    /// Value of the named attribute, if this is an element that has it.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Fragment::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

/// One structural edit against a document snapshot.
///
/// Edits are applied in order. Inserting several fragments after the same
/// target places each one directly after the target, so later ones end up
/// first; planners emit at most one `InsertAfter` per target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Edit {
    InsertBefore { target: NodeId, fragment: Fragment },
    InsertAfter { target: NodeId, fragment: Fragment },
    SetAttribute {
        target: NodeId,
        name: String,
        value: String,
    },
    /// Appends the fragment as the last child of the target.
    Append { target: NodeId, fragment: Fragment },
    /// Removes all children of the target and inserts the fragment instead.
    ReplaceChildren { target: NodeId, fragment: Fragment },
}

impl Edit {
    pub fn target(&self) -> NodeId {
        match self {
            Edit::InsertBefore { target, .. }
            | Edit::InsertAfter { target, .. }
            | Edit::SetAttribute { target, .. }
            | Edit::Append { target, .. }
            | Edit::ReplaceChildren { target, .. } => *target,
        }
    }

    /// The inserted fragment, if this edit inserts one.
    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            Edit::InsertBefore { fragment, .. }
            | Edit::InsertAfter { fragment, .. }
            | Edit::Append { fragment, .. }
            | Edit::ReplaceChildren { fragment, .. } => Some(fragment),
            Edit::SetAttribute { .. } => None,
        }
    }
}
