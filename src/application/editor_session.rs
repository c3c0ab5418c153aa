// src/application/editor_session.rs
use crate::application::cursor::QuestionCursor;
use crate::application::{BankLoad, BankRepository, QuestionService};
use crate::constants::{NEW_ANSWER_TEXT, NEW_CATEGORY_TEXT, NEW_QUESTION_TEXT};
use crate::domain::{DomainError, QuestionEdit, QuestionRecord};
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Working copy of one bank while it is being edited.
///
/// Changes stay in memory until [`EditorSession::save`] writes the whole
/// buffer back through the service.
pub struct EditorSession {
    bank: String,
    questions: Vec<QuestionRecord>,
    cursor: QuestionCursor,
    dirty: bool,
    status: String,
    load_error: Option<DomainError>,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl EditorSession {
    pub fn open<R: BankRepository>(service: &QuestionService<R>, bank: &str) -> Self {
        let load = service.get_questions(bank);
        let status = load.status_message(bank);
        let (questions, load_error) = match load {
            BankLoad::Failed(e) => {
                warn!(bank, error = %e, "Editing a bank that could not be loaded");
                (Vec::new(), Some(e))
            }
            other => (other.into_questions(), None),
        };
        debug!(bank, count = questions.len(), "Loaded question bank for editing");
        Self {
            bank: bank.to_string(),
            cursor: QuestionCursor::new(questions.len()),
            questions,
            dirty: false,
            status,
            load_error,
        }
    }

    /// Why the bank could not be loaded; saving such a session would replace the file
    pub fn load_error(&self) -> Option<&DomainError> {
        self.load_error.as_ref()
    }

    pub fn bank(&self) -> &str {
        &self.bank
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Leaving the editor is only safe when nothing is pending
    pub fn can_leave(&self) -> bool {
        !self.dirty
    }

    pub fn current(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.cursor.index())
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn next(&mut self) -> bool {
        self.cursor.next()
    }

    pub fn previous(&mut self) -> bool {
        self.cursor.previous()
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.cursor.go_to(index)
    }

    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.has_previous()
    }

    pub fn position_label(&self) -> String {
        self.cursor.label()
    }

    fn push(&mut self, mut record: QuestionRecord) -> &mut QuestionRecord {
        record.id.get_or_insert_with(|| Uuid::new_v4().to_string());
        record.created_at.get_or_insert_with(timestamp);
        self.questions.push(record);
        self.cursor.resize(self.questions.len());
        self.cursor.go_to(self.questions.len() - 1);
        self.dirty = true;
        let last = self.questions.len() - 1;
        &mut self.questions[last]
    }

    /// Append a placeholder question and move to it
    pub fn add_question(&mut self) -> &QuestionRecord {
        self.add(QuestionRecord::new(
            NEW_QUESTION_TEXT,
            NEW_ANSWER_TEXT,
            NEW_CATEGORY_TEXT,
        ))
    }

    /// Append `record` (stamping id and creation time when absent) and move to it
    pub fn add(&mut self, record: QuestionRecord) -> &QuestionRecord {
        let count = self.questions.len() + 1;
        self.status = format!("Added new question. Total: {}", count);
        debug!(bank = %self.bank, count, "Added new question");
        self.push(record)
    }

    /// Apply `edit` to the current question; an empty bank gets a new question first
    pub fn update_current(&mut self, edit: &QuestionEdit) -> bool {
        if self.questions.is_empty() {
            let mut record = QuestionRecord::default();
            if !edit.apply_to(&mut record) {
                return false;
            }
            record.updated_at = Some(timestamp());
            self.push(record);
        } else {
            let record = &mut self.questions[self.cursor.index()];
            if !edit.apply_to(record) {
                return false;
            }
            record.updated_at = Some(timestamp());
            self.dirty = true;
        }

        self.status = format!("Updated {}", self.cursor.label());
        debug!(bank = %self.bank, index = self.cursor.index(), "Edited question");
        true
    }

    /// Remove the current question; the cursor stays on the same position or the new last one
    pub fn delete_current(&mut self) -> Option<QuestionRecord> {
        if self.questions.is_empty() {
            return None;
        }

        let removed = self.questions.remove(self.cursor.index());
        self.cursor.resize(self.questions.len());
        self.dirty = true;
        self.status = if self.questions.is_empty() {
            "No questions remaining".to_string()
        } else {
            format!("Question deleted. Total: {}", self.questions.len())
        };
        debug!(bank = %self.bank, remaining = self.questions.len(), "Deleted question");
        Some(removed)
    }

    /// Write the whole buffer back. The session stays dirty when the write fails.
    pub fn save<R: BankRepository>(
        &mut self,
        service: &mut QuestionService<R>,
    ) -> Result<(), DomainError> {
        match service.save_questions(&self.bank, &self.questions) {
            Ok(()) => {
                self.dirty = false;
                self.status = "Question bank saved successfully".to_string();
                info!(bank = %self.bank, count = self.questions.len(), "Saved question bank");
                Ok(())
            }
            Err(e) => {
                self.status = "Error saving question bank".to_string();
                Err(e)
            }
        }
    }
}
