// Writes the arena back out as markup.

use crate::document::{Document, NodeKind};
use crate::error::DomError;
use docnav_types::NodeId;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute as XmlAttribute;
use quick_xml::events::{BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;

/// Elements written self-closed when empty. Every other element gets an
/// explicit end tag, since HTML parsers do not honour `<div/>`.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text is script or stylesheet source, written unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Document {
    /// Serializes the whole page: the prolog followed by the top-level nodes.
    pub fn to_markup(&self) -> Result<String, DomError> {
        let mut writer = Writer::new(Vec::new());
        for (i, &child) in self.children(self.root()).iter().enumerate() {
            if i > 0 {
                write_event(&mut writer, Event::Text(BytesText::from_escaped("\n")))?;
            }
            self.write_node(&mut writer, child)?;
        }
        let body = String::from_utf8(writer.into_inner())?;
        Ok(format!("{}{}", self.prolog, body))
    }

    /// Serializes the children of `id`, like a browser's `innerHTML`.
    pub fn inner_markup(&self, id: NodeId) -> Result<String, DomError> {
        let mut writer = Writer::new(Vec::new());
        for &child in self.children(id) {
            self.write_node(&mut writer, child)?;
        }
        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_node(&self, writer: &mut Writer<Vec<u8>>, id: NodeId) -> Result<(), DomError> {
        match self.kind(id) {
            NodeKind::Root => {
                for &child in self.children(id) {
                    self.write_node(writer, child)?;
                }
            }
            NodeKind::Element { name, attributes } => {
                let mut start = BytesStart::new(name.as_str());
                for attr in attributes {
                    let value = escape_attribute(&attr.value);
                    start.push_attribute(XmlAttribute {
                        key: QName(attr.name.as_bytes()),
                        value: Cow::Borrowed(value.as_bytes()),
                    });
                }

                let children = self.children(id);
                let local = self.element_name(id).unwrap_or(name);
                if children.is_empty() && VOID_ELEMENTS.contains(&local) {
                    write_event(writer, Event::Empty(start))?;
                } else {
                    write_event(writer, Event::Start(start))?;
                    for &child in children {
                        self.write_node(writer, child)?;
                    }
                    write_event(writer, Event::End(BytesEnd::new(name.as_str())))?;
                }
            }
            NodeKind::Text(text) => {
                let raw = self
                    .parent(id)
                    .and_then(|p| self.element_name(p))
                    .is_some_and(|p| RAW_TEXT_ELEMENTS.contains(&p));
                let escaped = if raw {
                    Cow::Borrowed(text.as_str())
                } else {
                    partial_escape(text)
                };
                write_event(writer, Event::Text(BytesText::from_escaped(escaped)))?;
            }
            NodeKind::Comment(comment) => {
                write_event(writer, Event::Comment(BytesText::from_escaped(comment.as_str())))?;
            }
            NodeKind::ProcessingInstruction { target, value } => {
                let content = match value {
                    Some(value) => format!("{target} {value}"),
                    None => target.clone(),
                };
                write_event(writer, Event::PI(BytesPI::new(content)))?;
            }
        }
        Ok(())
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), DomError> {
    writer
        .write_event(event)
        .map_err(|e| DomError::Serialize(e.to_string()))
}

pub(crate) fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = partial_escape(value);
    if escaped.contains('"') {
        Cow::Owned(escaped.replace('"', "&quot;"))
    } else {
        escaped
    }
}
