//! Shared data model for the docnav page passes.
//!
//! - [`ids`]: node and anchor identifiers
//! - [`edit`]: markup fragments and the structural edits that insert them
//! - [`toc`]: the chapter/section projection computed from a page

pub mod edit;
pub mod ids;
pub mod toc;

pub use edit::{Edit, Fragment};
pub use ids::{AnchorId, NodeId};
pub use toc::{Chapter, ContentsContainer, Section};
