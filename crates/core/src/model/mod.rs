mod answer;
mod ids;
mod question;
mod score;
mod session;

pub use answer::{AnswerSheet, AnswerSheetError};
pub use ids::QuestionId;
pub use question::{Question, QuestionCount, QuestionCountError};
pub use score::{Evaluation, Score};
pub use session::{QuizSession, SessionError, SessionPhase};
