use quiz_core::model::{AnswerSheet, Question, QuestionId};

/// One answerable question row on the questions page.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRowVm {
    pub number: usize,
    pub id: QuestionId,
    pub text: String,
    pub answer: String,
}

#[must_use]
pub fn map_question_rows(questions: &[Question], answers: &AnswerSheet) -> Vec<QuestionRowVm> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionRowVm {
            number: index + 1,
            id: question.id,
            text: question.text.clone(),
            answer: answers.answer(question.id).unwrap_or("").to_string(),
        })
        .collect()
}
