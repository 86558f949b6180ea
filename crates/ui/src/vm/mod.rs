mod quiz_vm;
mod results_vm;

pub use quiz_vm::{QuestionRowVm, map_question_rows};
pub use results_vm::{CategoryBarVm, QuestionReviewVm, ResultsVm, map_results};
