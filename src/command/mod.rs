mod commands;
pub mod history;

use thiserror::Error;

use crate::element::ElementId;

pub use commands::Command;
pub use history::{CommandHistory, HistoryEntry, MAX_HISTORY_SIZE};

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The operation needs a selected element
    #[error("No element is selected")]
    NoSelection,
    /// The referenced element is not in the document
    #[error("Element {0} not found")]
    ElementNotFound(ElementId),
    /// The element failed validation and cannot be committed
    #[error("Invalid {0} element")]
    InvalidElement(&'static str),
    /// The command would not change the document
    #[error("Nothing to change")]
    Unchanged,
}
