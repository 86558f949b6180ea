#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod upload;
pub mod workflow;

pub use quiz_core::Clock;

pub use api::{AnswerEntry, HttpQuizApi, QuizApi, QuizApiConfig};
pub use error::{ApiError, QuizFlowError, UploadError};
pub use upload::{MAX_PDF_BYTES, PdfSelection, UploadService, progress_channel};
pub use workflow::QuizFlowService;
