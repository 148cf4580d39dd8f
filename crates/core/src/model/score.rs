use crate::model::answers::AnswerMap;
use crate::model::bank::QuestionBank;
use crate::model::question::{OptionKey, Question};

pub const POINTS_CORRECT: i64 = 10;
pub const PENALTY_INCORRECT: i64 = 5;

/// How a single question ended up once the quiz was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    Incorrect,
    Unattempted,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Correct, Outcome::Incorrect, Outcome::Unattempted];
}

#[must_use]
pub fn classify(question: &Question, answer: Option<OptionKey>) -> Outcome {
    match answer {
        Some(key) if question.is_correct(key) => Outcome::Correct,
        Some(_) => Outcome::Incorrect,
        None => Outcome::Unattempted,
    }
}

/// Correctness breakdown and points for a submitted quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    correct: u32,
    incorrect: u32,
    unattempted: u32,
    score: i64,
}

impl ScoreResult {
    /// Classify every question of `bank` in order against `answers`.
    ///
    /// Total over any answer map: entries for indices outside the bank are
    /// ignored and missing entries count as unattempted. The score is
    /// `correct * 10 - incorrect * 5` and may be negative.
    #[must_use]
    pub fn compute(bank: &QuestionBank, answers: &AnswerMap) -> Self {
        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        let mut unattempted = 0_u32;

        for (index, question) in bank.iter().enumerate() {
            match classify(question, answers.get(index)) {
                Outcome::Correct => correct = correct.saturating_add(1),
                Outcome::Incorrect => incorrect = incorrect.saturating_add(1),
                Outcome::Unattempted => unattempted = unattempted.saturating_add(1),
            }
        }

        let score =
            i64::from(correct) * POINTS_CORRECT - i64::from(incorrect) * PENALTY_INCORRECT;

        Self {
            correct,
            incorrect,
            unattempted,
            score,
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn unattempted(&self) -> u32 {
        self.unattempted
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect + self.unattempted
    }

    #[must_use]
    pub fn count(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Correct => self.correct,
            Outcome::Incorrect => self.incorrect,
            Outcome::Unattempted => self.unattempted,
        }
    }

    /// Share of the total for one category, in percent.
    ///
    /// Each category is computed on its own, so the three values are not
    /// guaranteed to add up to exactly 100 once rounded for display.
    #[must_use]
    pub fn percent(&self, outcome: Outcome) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.count(outcome)) / f64::from(total) * 100.0
    }
}
