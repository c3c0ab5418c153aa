// src/domain/mod.rs
pub mod bank_name;
pub mod error;
pub mod question;

pub use bank_name::BankName;
pub use error::DomainError;
pub use question::{QuestionEdit, QuestionRecord};
