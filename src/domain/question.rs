// src/domain/question.rs
use serde::{Deserialize, Serialize};

/// One entry of a question bank.
///
/// Every field is optional on disk. Field order here is the order in which
/// fields are written back to the bank file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub explanation: Option<String>,
    pub tags: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub status: Option<String>,
    pub version: Option<String>,
    pub language: Option<String>,
    pub question_audio_file_name: Option<String>,
    pub answer_audio_file_name: Option<String>,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn question_text(&self) -> &str {
        self.question.as_deref().unwrap_or("")
    }

    pub fn answer_text(&self) -> &str {
        self.answer.as_deref().unwrap_or("")
    }

    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Case-insensitive category match; a record without category never matches.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.trim().eq_ignore_ascii_case(category.trim()))
    }
}

/// Partial update applied by the editor. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionEdit {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub explanation: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
    pub language: Option<String>,
}

impl QuestionEdit {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply every present field to `record`, returning whether anything changed.
    pub fn apply_to(&self, record: &mut QuestionRecord) -> bool {
        let mut changed = false;
        let pairs = [
            (&self.question, &mut record.question),
            (&self.answer, &mut record.answer),
            (&self.category, &mut record.category),
            (&self.source, &mut record.source),
            (&self.explanation, &mut record.explanation),
            (&self.tags, &mut record.tags),
            (&self.status, &mut record.status),
            (&self.language, &mut record.language),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                if slot.as_deref() != Some(value.as_str()) {
                    *slot = Some(value.clone());
                    changed = true;
                }
            }
        }
        changed
    }
}
