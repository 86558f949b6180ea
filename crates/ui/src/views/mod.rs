mod generator;
mod questions;
mod results;
mod upload;

pub use generator::GeneratorPanel;
pub use questions::QuestionsPage;
pub use results::ResultsPage;
pub use upload::UploadPanel;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
