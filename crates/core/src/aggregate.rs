//! Score aggregation for the results view.
//!
//! Pure functions over the question and score lists from a graded
//! submission; the rendering layer only ever sees the computed numbers.

use std::collections::HashMap;

use crate::model::{Question, QuestionId, Score};

/// Maximum points the grading service awards per question.
pub const POINTS_PER_QUESTION: f64 = 5.0;

/// Percentage earned in one question category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub category: String,
    pub percentage: f64,
}

fn score_for(scores: &[Score], id: QuestionId) -> f64 {
    scores
        .iter()
        .find(|score| score.id == id)
        .map_or(0.0, |score| score.score)
}

/// Per-category percentages, in first-encounter order over the questions.
///
/// Every question contributes 5 points to its category's maximum whether or
/// not the service graded it; an ungraded question counts as 0 earned and so
/// lowers the category average rather than being excluded. A category with
/// no questions never appears.
#[must_use]
pub fn category_breakdown(questions: &[Question], scores: &[Score]) -> Vec<CategoryScore> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, f64)> = HashMap::new();

    for question in questions {
        let entry = totals.entry(question.category.as_str()).or_insert_with(|| {
            order.push(question.category.as_str());
            (0.0, 0.0)
        });
        entry.0 += score_for(scores, question.id);
        entry.1 += POINTS_PER_QUESTION;
    }

    order
        .into_iter()
        .map(|category| {
            let (earned, max) = totals[category];
            CategoryScore {
                category: category.to_string(),
                percentage: 100.0 * earned / max,
            }
        })
        .collect()
}

/// Overall percentage across the whole quiz, same ungraded-counts-as-zero
/// policy as `category_breakdown`. An empty quiz scores 0.
#[must_use]
pub fn overall_percentage(questions: &[Question], scores: &[Score]) -> f64 {
    if questions.is_empty() {
        return 0.0;
    }
    100.0 * total_points(scores) / max_points(questions)
}

/// Sum of all awarded points.
#[must_use]
pub fn total_points(scores: &[Score]) -> f64 {
    scores.iter().map(|score| score.score).sum()
}

/// Maximum achievable points for the question set.
#[must_use]
pub fn max_points(questions: &[Question]) -> f64 {
    POINTS_PER_QUESTION * questions.len() as f64
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, category: &str) -> Question {
        Question::new(QuestionId::new(id), format!("Q{id}"), category)
    }

    fn score(id: u64, value: f64) -> Score {
        Score::new(QuestionId::new(id), value)
    }

    #[test]
    fn breakdown_counts_ungraded_questions_in_the_denominator() {
        let questions = vec![
            question(1, "Math"),
            question(2, "Math"),
            question(3, "History"),
        ];
        // question 3 was left ungraded
        let scores = vec![score(1, 5.0), score(2, 3.0)];

        let breakdown = category_breakdown(&questions, &scores);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Math");
        assert!((breakdown[0].percentage - 80.0).abs() < 1e-9);
        assert_eq!(breakdown[1].category, "History");
        assert!((breakdown[1].percentage - 0.0).abs() < 1e-9);

        let overall = overall_percentage(&questions, &scores);
        assert!((overall - 800.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_follows_first_encounter_order() {
        let questions = vec![
            question(1, "History"),
            question(2, "Math"),
            question(3, "History"),
        ];
        let scores = vec![score(1, 2.0), score(2, 4.0), score(3, 4.0)];

        let breakdown = category_breakdown(&questions, &scores);
        let categories: Vec<&str> = breakdown
            .iter()
            .map(|entry| entry.category.as_str())
            .collect();
        assert_eq!(categories, vec!["History", "Math"]);
    }

    #[test]
    fn aggregation_is_a_pure_function_of_its_inputs() {
        let questions = vec![question(1, "Math"), question(2, "History")];
        let scores = vec![score(1, 4.0), score(2, 1.5)];

        let first = category_breakdown(&questions, &scores);
        let second = category_breakdown(&questions, &scores);
        assert_eq!(first, second);
        assert_eq!(
            overall_percentage(&questions, &scores),
            overall_percentage(&questions, &scores)
        );
    }

    #[test]
    fn empty_quiz_scores_zero_overall() {
        assert_eq!(overall_percentage(&[], &[]), 0.0);
        assert!(category_breakdown(&[], &[]).is_empty());
    }

    #[test]
    fn end_to_end_example_totals() {
        // 5 questions graded 18/25 overall
        let questions: Vec<Question> = (1..=5).map(|id| question(id, "Math")).collect();
        let scores = vec![
            score(1, 5.0),
            score(2, 4.0),
            score(3, 3.0),
            score(4, 2.0),
            score(5, 4.0),
        ];

        assert_eq!(total_points(&scores), 18.0);
        assert_eq!(max_points(&questions), 25.0);
        assert!((overall_percentage(&questions, &scores) - 72.0).abs() < 1e-9);
    }
}
