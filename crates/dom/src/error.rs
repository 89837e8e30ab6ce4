use docnav_types::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("Invalid markup fragment '{markup}': {message}")]
    InvalidFragment { markup: String, message: String },

    #[error("Node {0} does not belong to this document")]
    UnknownNode(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Node {0} has no parent to insert next to")]
    Detached(NodeId),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
