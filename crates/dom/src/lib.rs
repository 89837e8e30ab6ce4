//! # docnav-dom
//!
//! The page tree the docnav passes plan against.
//!
//! A page is parsed once into an owned arena ([`Document`]). Planners read it
//! through `&Document` and return [`Edit`](docnav_types::Edit) lists; this crate
//! is the only place those edits touch the tree ([`Document::apply`]) and the
//! only place markup is written back out ([`Document::to_markup`]).
//!
//! Input must be well-formed XML. Only the predefined XML entities and numeric
//! character references are understood.

mod document;
mod edit;
pub mod error;
mod parse;
mod serialize;

pub use document::{Attribute, Descendants, Document, NodeKind};
pub use error::DomError;
