// src/application/question_service.rs
use crate::domain::{BankName, DomainError, QuestionRecord};
use tracing::{debug, error, info, warn};

/// Storage of question banks, addressed by file name.
pub trait BankRepository {
    /// File names of all banks; a missing store yields an empty list
    fn list_banks(&self) -> Result<Vec<String>, DomainError>;

    /// All records of one bank, in stored order
    fn read_bank(&self, name: &str) -> Result<Vec<QuestionRecord>, DomainError>;

    /// Replace the whole content of one bank
    fn write_bank(&mut self, name: &str, records: &[QuestionRecord]) -> Result<(), DomainError>;
}

/// Outcome of loading a bank for display.
///
/// Loading never fails the caller: errors are carried as `Failed` and the
/// bank then shows no questions.
#[derive(Debug)]
pub enum BankLoad {
    Loaded(Vec<QuestionRecord>),
    Empty,
    Failed(DomainError),
}

impl BankLoad {
    pub fn questions(&self) -> &[QuestionRecord] {
        match self {
            BankLoad::Loaded(records) => records,
            BankLoad::Empty | BankLoad::Failed(_) => &[],
        }
    }

    pub fn into_questions(self) -> Vec<QuestionRecord> {
        match self {
            BankLoad::Loaded(records) => records,
            BankLoad::Empty | BankLoad::Failed(_) => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&DomainError> {
        match self {
            BankLoad::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Short status line for the front end
    pub fn status_message(&self, bank: &str) -> String {
        match self {
            BankLoad::Loaded(records) => {
                format!("Loaded {} questions from {}", records.len(), bank)
            }
            BankLoad::Empty => "No questions found in this bank".to_string(),
            BankLoad::Failed(e) => format!("Error loading question bank: {}", e),
        }
    }
}

/// Entry point used by the front end: fail-soft reads, fail-loud writes.
pub struct QuestionService<R: BankRepository> {
    repository: R,
}

impl<R: BankRepository> QuestionService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn list_question_banks(&self) -> Vec<String> {
        debug!("Retrieving list of question banks");
        match self.repository.list_banks() {
            Ok(banks) => {
                debug!(count = banks.len(), ?banks, "Found question banks");
                banks
            }
            Err(e) => {
                warn!(error = %e, "Error retrieving question banks");
                Vec::new()
            }
        }
    }

    pub fn get_questions(&self, bank: &str) -> BankLoad {
        let name = match BankName::parse(bank) {
            Ok(name) => name,
            Err(e) => {
                warn!(bank, error = %e, "Invalid question bank name");
                return BankLoad::Failed(e);
            }
        };

        debug!(bank = %name, "Loading questions from question bank");
        match self.repository.read_bank(name.as_str()) {
            Ok(records) if records.is_empty() => BankLoad::Empty,
            Ok(records) => {
                debug!(bank = %name, count = records.len(), "Loaded questions");
                BankLoad::Loaded(records)
            }
            Err(e) => {
                warn!(bank = %name, error = %e, "Error loading questions from question bank");
                BankLoad::Failed(e)
            }
        }
    }

    pub fn save_questions(
        &mut self,
        bank: &str,
        records: &[QuestionRecord],
    ) -> Result<(), DomainError> {
        let name = BankName::parse(bank).map_err(|e| {
            error!(bank, error = %e, "Cannot save questions");
            e
        })?;

        debug!(bank = %name, count = records.len(), "Saving questions");
        match self.repository.write_bank(name.as_str(), records) {
            Ok(()) => {
                info!(bank = %name, count = records.len(), "Saved question bank");
                Ok(())
            }
            Err(e @ DomainError::InvalidArgument(_)) => Err(e),
            Err(e) => {
                error!(bank = %name, error = %e, "Error saving questions to question bank");
                Err(DomainError::SaveFailed {
                    bank: name.to_string(),
                    source: Box::new(e),
                })
            }
        }
    }

    /// Create an empty bank, appending the `.json` extension when missing.
    ///
    /// Refuses to replace an existing bank, including one whose name differs
    /// only in letter case.
    pub fn create_bank(&mut self, name: &str) -> Result<BankName, DomainError> {
        let name = BankName::for_new_bank(name)?;

        let exists = match self.repository.read_bank(name.as_str()) {
            Ok(_) | Err(DomainError::Decode(_)) => true,
            Err(DomainError::NotFound(_)) => self
                .repository
                .list_banks()?
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(name.as_str())),
            Err(e) => return Err(e),
        };
        if exists {
            warn!(bank = %name, "Question bank already exists");
            return Err(DomainError::InvalidArgument(format!(
                "Question bank {} already exists",
                name
            )));
        }

        self.save_questions(name.as_str(), &[])?;
        info!(bank = %name, "Created new question bank");
        Ok(name)
    }
}
