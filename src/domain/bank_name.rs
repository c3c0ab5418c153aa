// src/domain/bank_name.rs
use crate::constants::BANK_FILE_EXTENSION;
use crate::domain::DomainError;
use std::fmt;

/// File name of a question bank, validated to live directly in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BankName(String);

impl BankName {
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Question bank name cannot be empty".to_string(),
            ));
        }
        if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
            return Err(DomainError::InvalidArgument(format!(
                "Question bank name must be a plain file name: {}",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse `name` and append the bank extension when it is missing.
    pub fn for_new_bank(name: &str) -> Result<Self, DomainError> {
        let parsed = Self::parse(name)?;
        if is_bank_file_name(&parsed.0) {
            Ok(parsed)
        } else {
            Ok(Self(format!("{}{}", parsed.0, BANK_FILE_EXTENSION)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True when `name` carries the bank extension, ignoring case.
pub fn is_bank_file_name(name: &str) -> bool {
    name.to_lowercase().ends_with(BANK_FILE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    #[case("..")]
    #[case("nested/bank.json")]
    #[case("..\\escape.json")]
    fn given_invalid_name_when_parsing_then_returns_invalid_argument(#[case] name: &str) {
        let result = BankName::parse(name);

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn given_padded_name_when_parsing_then_trims() {
        let name = BankName::parse("  physics.json ").unwrap();

        assert_eq!(name.as_str(), "physics.json");
    }

    #[rstest]
    #[case("physics", "physics.json")]
    #[case("physics.json", "physics.json")]
    #[case("Physics.JSON", "Physics.JSON")]
    #[case(" spaced ", "spaced.json")]
    fn given_new_bank_name_when_normalising_then_ensures_extension(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        let name = BankName::for_new_bank(input).unwrap();

        assert_eq!(name.as_str(), expected);
    }

    #[rstest]
    #[case("a.json", true)]
    #[case("a.JSON", true)]
    #[case("a.Json", true)]
    #[case("a.json.bak", false)]
    #[case("a.txt", false)]
    fn given_file_name_when_checking_extension_then_ignores_case(
        #[case] name: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_bank_file_name(name), expected);
    }
}
