// src/application/viewer_session.rs
use crate::application::cursor::QuestionCursor;
use crate::application::{BankLoad, BankRepository, QuestionService};
use crate::domain::QuestionRecord;
use tracing::info;

/// Read-only walk through one bank.
pub struct ViewerSession {
    bank: String,
    questions: Vec<QuestionRecord>,
    cursor: QuestionCursor,
    status: String,
}

impl ViewerSession {
    pub fn open<R: BankRepository>(service: &QuestionService<R>, bank: &str) -> Self {
        Self::from_load(bank, service.get_questions(bank))
    }

    pub fn from_load(bank: &str, load: BankLoad) -> Self {
        let status = load.status_message(bank);
        let questions = load.into_questions();
        info!(bank, count = questions.len(), "Loaded question bank for viewing");
        Self {
            bank: bank.to_string(),
            cursor: QuestionCursor::new(questions.len()),
            questions,
            status,
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockBankRepository;

    fn service() -> QuestionService<MockBankRepository> {
        QuestionService::new(
            MockBankRepository::builder()
                .with_bank(
                    "two.json",
                    vec![
                        QuestionRecord::new("First?", "1", "General"),
                        QuestionRecord::new("Second?", "2", "General"),
                    ],
                )
                .build(),
        )
    }

    #[test]
    fn given_bank_when_opening_then_starts_at_first_question() {
        let session = ViewerSession::open(&service(), "two.json");

        assert_eq!(session.current().unwrap().question_text(), "First?");
        assert_eq!(session.position_label(), "Question 1 of 2");
        assert_eq!(session.status(), "Loaded 2 questions from two.json");
        assert!(!session.has_previous());
        assert!(session.has_next());
    }

    #[test]
    fn given_open_session_when_navigating_then_walks_in_order() {
        let mut session = ViewerSession::open(&service(), "two.json");

        assert!(session.next());
        assert_eq!(session.current().unwrap().question_text(), "Second?");
        assert!(!session.next());
        assert!(session.previous());
        assert_eq!(session.current().unwrap().question_text(), "First?");
    }

    #[test]
    fn given_missing_bank_when_opening_then_shows_no_questions() {
        let session = ViewerSession::open(&service(), "missing.json");

        assert!(session.current().is_none());
        assert_eq!(session.position_label(), "No questions");
        assert!(session.status().starts_with("Error loading question bank"));
    }
}
