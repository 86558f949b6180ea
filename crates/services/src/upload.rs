use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::watch;
use tokio::time;

use crate::api::QuizApi;
use crate::error::UploadError;

/// Largest accepted PDF, in bytes (10 MiB).
pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";

const PROGRESS_TICK: Duration = Duration::from_millis(300);
const PROGRESS_STEP: u8 = 10;
const PROGRESS_CAP: u8 = 90;

/// A locally validated file selection, ready to upload.
///
/// Constructing one is the only path to the upload endpoint, so a bad file
/// type or size is rejected before any network traffic happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSelection {
    file_name: String,
    bytes: Vec<u8>,
}

impl PdfSelection {
    /// Validate a picked file.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::NotPdf` for any MIME type other than
    /// `application/pdf` and `UploadError::TooLarge` past the 10 MiB cap;
    /// the selection is discarded in both cases.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadError> {
        if mime_type != PDF_MIME {
            return Err(UploadError::NotPdf);
        }
        if bytes.len() > MAX_PDF_BYTES {
            return Err(UploadError::TooLarge { size: bytes.len() });
        }
        Ok(Self {
            file_name: file_name.into(),
            bytes,
        })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Create the percent channel an upload reports through (0 to 100).
#[must_use]
pub fn progress_channel() -> (watch::Sender<u8>, watch::Receiver<u8>) {
    watch::channel(0)
}

fn next_tick(current: u8) -> u8 {
    current.saturating_add(PROGRESS_STEP).min(PROGRESS_CAP)
}

/// Sends an accepted PDF to the backend while feeding a cosmetic progress
/// indicator.
#[derive(Clone)]
pub struct UploadService {
    api: Arc<dyn QuizApi>,
}

impl UploadService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Upload the selection as a single multipart request.
    ///
    /// Progress advances by 10 every 300 ms while the request is in flight
    /// and holds at 90 until the response lands, then jumps to 100 on
    /// success. The ticker is stopped when the request finishes either way.
    /// Any failure resets progress to 0; retrying is the caller's call.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Api` for transport failures or non-success
    /// statuses.
    pub async fn upload(
        &self,
        selection: PdfSelection,
        progress: watch::Sender<u8>,
    ) -> Result<String, UploadError> {
        let PdfSelection { file_name, bytes } = selection;
        let _ = progress.send(0);

        let ticker = tokio::spawn({
            let progress = progress.clone();
            async move {
                let mut interval = time::interval(PROGRESS_TICK);
                // the first tick completes immediately
                interval.tick().await;
                loop {
                    interval.tick().await;
                    let current = *progress.borrow();
                    let next = next_tick(current);
                    if next != current && progress.send(next).is_err() {
                        break;
                    }
                }
            }
        });

        debug!("uploading {file_name} ({} bytes)", bytes.len());
        let result = self.api.upload_file(&file_name, bytes).await;
        ticker.abort();

        match result {
            Ok(()) => {
                let _ = progress.send(100);
                Ok(file_name)
            }
            Err(err) => {
                warn!("upload of {file_name} failed: {err}");
                let _ = progress.send(0);
                Err(err.into())
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
