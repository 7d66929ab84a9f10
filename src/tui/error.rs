use crate::journal::JournalError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A journal error occurred while recording a submission.
    #[error("journal error: {0}")]
    Journal(#[from] JournalError),
}
