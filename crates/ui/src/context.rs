use std::sync::Arc;

use services::{QuizFlowService, UploadService};

/// Services the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_flow(&self) -> Arc<QuizFlowService>;
    fn uploads(&self) -> Arc<UploadService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_flow: Arc<QuizFlowService>,
    uploads: Arc<UploadService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_flow: app.quiz_flow(),
            uploads: app.uploads(),
        }
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    #[must_use]
    pub fn uploads(&self) -> Arc<UploadService> {
        Arc::clone(&self.uploads)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
