// src/infrastructure/json_store.rs
use crate::application::BankRepository;
use crate::domain::bank_name::is_bank_file_name;
use crate::domain::{BankName, DomainError, QuestionRecord};
use crate::infrastructure::codec;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

/// Question banks stored as `<name>.json` files directly inside one data directory.
///
/// Holds no state besides the directory path; every call reads or writes
/// the whole file.
#[derive(Debug, Clone)]
pub struct JsonBankStore {
    data_dir: PathBuf,
}

impl JsonBankStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        debug!(?data_dir, "Creating new JsonBankStore");
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn bank_path(&self, name: &BankName) -> PathBuf {
        self.data_dir.join(name.as_str())
    }
}

impl BankRepository for JsonBankStore {
    #[instrument(level = "debug", skip(self), fields(data_dir = %self.data_dir.display()))]
    fn list_banks(&self) -> Result<Vec<String>, DomainError> {
        if !self.data_dir.exists() {
            debug!("Data directory does not exist, no banks to list");
            return Ok(Vec::new());
        }

        let entries =
            fs::read_dir(&self.data_dir).map_err(|e| DomainError::io(&self.data_dir, e))?;

        let mut banks = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DomainError::io(&self.data_dir, e))?;
            // `Path::is_file` follows symlinks, so a link to a bank file is listed too
            if !entry.path().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                debug!(path = ?entry.path(), "Skipping non UTF-8 file name");
                continue;
            };
            if is_bank_file_name(&name) {
                banks.push(name);
            }
        }

        debug!(count = banks.len(), "Listed question banks");
        Ok(banks)
    }

    #[instrument(level = "debug", skip(self))]
    fn read_bank(&self, name: &str) -> Result<Vec<QuestionRecord>, DomainError> {
        let name = BankName::parse(name)?;

        if !self.data_dir.exists() {
            return Err(DomainError::NotFound(format!(
                "Data directory {} does not exist",
                self.data_dir.display()
            )));
        }

        let path = self.bank_path(&name);
        if !path.exists() {
            return Err(DomainError::NotFound(format!(
                "File {} does not exist in {}",
                name,
                self.data_dir.display()
            )));
        }
        if !path.is_file() {
            return Err(DomainError::NotFound(format!(
                "Path {} is not a regular file",
                name
            )));
        }

        let content = fs::read_to_string(&path).map_err(|e| DomainError::io(&path, e))?;
        let records = codec::decode(&content)?;

        debug!(bank = %name, count = records.len(), "Read question bank");
        Ok(records)
    }

    #[instrument(level = "debug", skip(self, records), fields(count = records.len()))]
    fn write_bank(&mut self, name: &str, records: &[QuestionRecord]) -> Result<(), DomainError> {
        let name = BankName::parse(name)?;

        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(|e| DomainError::io(&self.data_dir, e))?;
            info!(data_dir = ?self.data_dir, "Created data directory");
        }

        let json = codec::encode(records)?;
        let path = self.bank_path(&name);

        // Write next to the target and rename over it; readers never see a partial file
        let mut temp =
            NamedTempFile::new_in(&self.data_dir).map_err(|e| DomainError::io(&self.data_dir, e))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| DomainError::io(temp.path(), e))?;
        temp.persist(&path)
            .map_err(|e| DomainError::io(&path, e.error))?;

        debug!(bank = %name, ?path, "Wrote question bank");
        Ok(())
    }
}
