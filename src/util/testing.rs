// src/util/testing.rs

use anyhow::Result;
use std::collections::BTreeMap;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::BankRepository;
use crate::domain::{BankName, DomainError, QuestionRecord};

/// In-memory repository for testing the service and the sessions
///
/// Banks are kept by name; listing or writing can be configured to fail.
///
/// # Examples
///
/// ```
/// use qbank::util::testing::MockBankRepository;
/// use qbank::domain::QuestionRecord;
///
/// let mock = MockBankRepository::builder()
///     .with_bank("rust.json", vec![QuestionRecord::new("Question", "Answer", "Rust")])
///     .with_write_failure()
///     .build();
/// ```
pub struct MockBankRepository {
    banks: BTreeMap<String, Vec<QuestionRecord>>,
    fail_list: bool,
    fail_write: bool,
    writes: usize,
}

impl MockBankRepository {
    pub fn builder() -> MockBankRepositoryBuilder {
        MockBankRepositoryBuilder::new()
    }

    /// Number of successful `write_bank` calls
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl BankRepository for MockBankRepository {
    fn list_banks(&self) -> Result<Vec<String>, DomainError> {
        if self.fail_list {
            return Err(DomainError::io(
                PathBuf::from("mock"),
                io::Error::new(io::ErrorKind::PermissionDenied, "listing disabled"),
            ));
        }
        Ok(self.banks.keys().cloned().collect())
    }

    fn read_bank(&self, name: &str) -> Result<Vec<QuestionRecord>, DomainError> {
        let name = BankName::parse(name)?;
        self.banks
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    fn write_bank(&mut self, name: &str, records: &[QuestionRecord]) -> Result<(), DomainError> {
        let name = BankName::parse(name)?;
        if self.fail_write {
            return Err(DomainError::io(
                PathBuf::from(name.as_str()),
                io::Error::new(io::ErrorKind::PermissionDenied, "writing disabled"),
            ));
        }
        self.banks.insert(name.to_string(), records.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// Builder for MockBankRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockBankRepositoryBuilder {
    banks: BTreeMap<String, Vec<QuestionRecord>>,
    fail_list: bool,
    fail_write: bool,
}

impl MockBankRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            banks: BTreeMap::new(),
            fail_list: false,
            fail_write: false,
        }
    }

    /// Add a bank that can be listed and read
    pub fn with_bank(mut self, name: &str, records: Vec<QuestionRecord>) -> Self {
        self.banks.insert(name.to_string(), records);
        self
    }

    /// Make list_banks fail with an I/O error
    pub fn with_list_failure(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make write_bank fail with an I/O error
    pub fn with_write_failure(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub fn build(self) -> MockBankRepository {
        MockBankRepository {
            banks: self.banks,
            fail_list: self.fail_list,
            fail_write: self.fail_write,
            writes: 0,
        }
    }
}

impl Default for MockBankRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
