use docnav_dom::DomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TocError {
    #[error("Chapter {chapter} has no title element")]
    MissingTitle { chapter: usize },

    #[error("Chapter {chapter} is already numbered; the page was processed before")]
    AlreadyNumbered { chapter: usize },

    #[error("Document error: {0}")]
    Dom(#[from] DomError),
}
