//! Project showcase messages.

use folio_model::{ProjectFilter, ProjectId};

/// Messages for the project grid and its detail overlay.
#[derive(Debug, Clone, Copy)]
pub enum ProjectsMessage {
    /// Filter tab pressed
    FilterSelected(ProjectFilter),

    /// Project card pressed
    Opened(ProjectId),

    /// Close button, backdrop, or Escape
    Closed,
}
