use thiserror::Error;

use crate::event::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sending messages failed")]
    ActionSendFailed(#[from] tokio::sync::mpsc::error::SendError<Envelope>),
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("File operation failed")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
