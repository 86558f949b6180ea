//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionError;

/// Errors emitted by the API gateway client.
///
/// Every non-success status collapses into `Status`; callers never branch on
/// individual codes, timeouts, or connection failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("the quiz service responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `PdfSelection` and `UploadService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UploadError {
    #[error("only PDF files can be uploaded")]
    NotPdf,
    #[error("file is {size} bytes, over the 10 MiB upload limit")]
    TooLarge { size: usize },
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `QuizFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
