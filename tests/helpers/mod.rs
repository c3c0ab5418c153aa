use anyhow::{Context, Result};
use qbank::application::QuestionService;
use qbank::domain::QuestionRecord;
use qbank::infrastructure::JsonBankStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture: a temporary data directory for bank files
#[allow(dead_code)]
pub struct TestDataDir {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestDataDir {
    /// Fixture whose data directory does not exist yet
    pub fn missing() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_dir = temp_dir.path().join("data");
        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    /// Fixture with an existing, empty data directory
    pub fn new() -> Result<Self> {
        let fixture = Self::missing()?;
        std::fs::create_dir_all(&fixture.data_dir).context("Failed to create data directory")?;
        Ok(fixture)
    }

    /// Write raw file content into the data directory
    pub fn write_raw(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.data_dir.join(name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }

    pub fn read_raw(&self, name: &str) -> Result<String> {
        std::fs::read_to_string(self.data_dir.join(name)).context("Failed to read bank file")
    }

    pub fn store(&self) -> JsonBankStore {
        JsonBankStore::new(&self.data_dir)
    }

    pub fn service(&self) -> QuestionService<JsonBankStore> {
        QuestionService::new(self.store())
    }
}

/// The two records used by the end-to-end round trip
#[allow(dead_code)]
pub fn python_and_django() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new("What is Python?", "A programming language", "Programming"),
        QuestionRecord::new("What is Django?", "A web framework", "Framework"),
    ]
}
