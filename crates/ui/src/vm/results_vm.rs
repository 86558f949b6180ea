use quiz_core::aggregate::{
    POINTS_PER_QUESTION, category_breakdown, max_points, overall_percentage, total_points,
};
use quiz_core::model::{AnswerSheet, Evaluation, Question};

/// One bar in the per-category chart.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBarVm {
    pub name: String,
    pub percentage: f64,
    pub percent_label: String,
}

/// One graded question in the review list.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionReviewVm {
    pub number: usize,
    pub text: String,
    pub category: String,
    pub answer: String,
    pub score_label: String,
    pub percentage: f64,
}

/// Everything the results page renders, precomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub total_label: String,
    pub max_label: String,
    pub overall_percentage: f64,
    pub overall_label: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub categories: Vec<CategoryBarVm>,
    pub reviews: Vec<QuestionReviewVm>,
}

fn format_points(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Map a graded session into renderable rows. Pure; rendering twice with the
/// same payload yields the same numbers.
#[must_use]
pub fn map_results(
    questions: &[Question],
    answers: &AnswerSheet,
    evaluation: &Evaluation,
) -> ResultsVm {
    let overall = overall_percentage(questions, &evaluation.scores);

    let categories = category_breakdown(questions, &evaluation.scores)
        .into_iter()
        .map(|entry| CategoryBarVm {
            percent_label: format!("{:.0}%", entry.percentage),
            name: entry.category,
            percentage: entry.percentage,
        })
        .collect();

    let reviews = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let score = evaluation
                .scores
                .iter()
                .find(|score| score.id == question.id)
                .map_or(0.0, |score| score.score);
            let answer = answers.answer(question.id).unwrap_or("");
            QuestionReviewVm {
                number: index + 1,
                text: question.text.clone(),
                category: question.category.clone(),
                answer: if answer.is_empty() {
                    "No answer provided".to_string()
                } else {
                    answer.to_string()
                },
                score_label: format!("{}/5", format_points(score)),
                percentage: 100.0 * score / POINTS_PER_QUESTION,
            }
        })
        .collect();

    ResultsVm {
        total_label: format_points(total_points(&evaluation.scores)),
        max_label: format!("/ {}", format_points(max_points(questions))),
        overall_percentage: overall,
        overall_label: format!("{overall:.0}%"),
        strengths: evaluation.strengths.clone(),
        weaknesses: evaluation.weaknesses.clone(),
        categories,
        reviews,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
