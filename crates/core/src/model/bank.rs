use std::collections::HashSet;

use crate::model::question::{Localized, Question, QuestionDraft, QuestionError};

/// Fixed, ordered set of questions for a quiz.
///
/// Never empty and never mutated after construction; sessions share it
/// behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyBank` for an empty list and
    /// `QuestionError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptyBank);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions })
    }

    /// Validate every draft, then build the bank.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` encountered.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuestionError> {
        let questions = drafts
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// The five general-knowledge questions the quiz ships with.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data itself is malformed.
    pub fn builtin() -> Result<Self, QuestionError> {
        Self::from_drafts(builtin_drafts())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

fn draft(
    id: u32,
    question: (&str, &str),
    en: [&str; 4],
    hi: [&str; 4],
    answer: &str,
) -> QuestionDraft {
    QuestionDraft {
        id,
        question: Localized {
            en: question.0.to_string(),
            hi: question.1.to_string(),
        },
        options: Localized {
            en: en.iter().map(ToString::to_string).collect(),
            hi: hi.iter().map(ToString::to_string).collect(),
        },
        answer: answer.to_string(),
    }
}

fn builtin_drafts() -> Vec<QuestionDraft> {
    vec![
        draft(
            1,
            ("What is the capital of France?", "फ्रांस की राजधानी क्या है?"),
            ["Berlin", "Madrid", "Paris", "Rome"],
            ["बर्लिन", "मैड्रिड", "पेरिस", "रोम"],
            "Paris",
        ),
        draft(
            2,
            (
                "Which planet is known as the Red Planet?",
                "कौन सा ग्रह लाल ग्रह के रूप में जाना जाता है?",
            ),
            ["Earth", "Mars", "Jupiter", "Venus"],
            ["पृथ्वी", "मंगल", "बृहस्पति", "शुक्र"],
            "Mars",
        ),
        draft(
            3,
            ("What is the largest mammal?", "सबसे बड़ा स्तनपायी क्या है?"),
            ["Elephant", "Blue Whale", "Giraffe", "Hippopotamus"],
            ["हाथी", "नीली व्हेल", "जिराफ", "दरियाई घोड़ा"],
            "Blue Whale",
        ),
        draft(
            4,
            (
                "Which element has the chemical symbol 'O'?",
                "कौन सा तत्व 'O' रासायनिक प्रतीक है?",
            ),
            ["Osmium", "Oxygen", "Gold", "Silver"],
            ["ऑस्मियम", "ऑक्सीजन", "सोना", "चांदी"],
            "Oxygen",
        ),
        draft(
            5,
            ("Who wrote 'Hamlet'?", "'हैमलेट' किसने लिखा?"),
            ["Charles Dickens", "J.K. Rowling", "Mark Twain", "William Shakespeare"],
            ["चार्ल्स डिकेन्स", "जे.के. राउलिंग", "मार्क ट्वेन", "विलियम शेक्सपियर"],
            "William Shakespeare",
        ),
    ]
}
