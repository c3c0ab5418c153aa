// src/infrastructure/codec.rs
use crate::domain::{DomainError, QuestionRecord};

/// Decode the content of a bank file into its records, in array order.
pub fn decode(json: &str) -> Result<Vec<QuestionRecord>, DomainError> {
    serde_json::from_str(json).map_err(DomainError::Decode)
}

/// Encode records as a pretty-printed JSON array. An empty slice yields `[]`.
pub fn encode(records: &[QuestionRecord]) -> Result<String, DomainError> {
    serde_json::to_string_pretty(records).map_err(DomainError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> QuestionRecord {
        QuestionRecord {
            id: Some("3f2b8e1c-6a57-4d6c-9a39-0f4f3c1d2e11".to_string()),
            question: Some("What is ownership?".to_string()),
            answer: Some("A set of rules for memory management".to_string()),
            category: Some("Rust".to_string()),
            source: Some("The Book".to_string()),
            explanation: Some("Each value has a single owner".to_string()),
            tags: Some("memory, borrowing".to_string()),
            created_at: Some("2024-01-01T10:00:00Z".to_string()),
            updated_at: Some("2024-02-01T10:00:00Z".to_string()),
            created_by: Some("alice".to_string()),
            updated_by: Some("bob".to_string()),
            status: Some("ACTIVE".to_string()),
            version: Some("2".to_string()),
            language: Some("en".to_string()),
            question_audio_file_name: Some("q1.mp3".to_string()),
            answer_audio_file_name: Some("a1.mp3".to_string()),
        }
    }

    #[test]
    fn given_empty_slice_when_encoding_then_produces_empty_array() {
        let json = encode(&[]).unwrap();

        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn given_records_when_round_tripping_then_preserves_every_field_and_order() {
        // Arrange
        let records = vec![
            full_record(),
            QuestionRecord::default(),
            QuestionRecord::new("Second", "Answer", "Misc"),
        ];

        // Act
        let decoded = decode(&encode(&records).unwrap()).unwrap();

        // Assert
        assert_eq!(decoded, records);
    }

    #[test]
    fn given_record_when_encoding_then_uses_camel_case_field_names_in_fixed_order() {
        let json = encode(&[full_record()]).unwrap();

        let expected_order = [
            "\"id\"",
            "\"question\"",
            "\"answer\"",
            "\"category\"",
            "\"source\"",
            "\"explanation\"",
            "\"tags\"",
            "\"createdAt\"",
            "\"updatedAt\"",
            "\"createdBy\"",
            "\"updatedBy\"",
            "\"status\"",
            "\"version\"",
            "\"language\"",
            "\"questionAudioFileName\"",
            "\"answerAudioFileName\"",
        ];
        let positions: Vec<usize> = expected_order
            .iter()
            .map(|field| json.find(field).expect("field should be present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn given_record_when_encoding_then_output_is_indented() {
        let json = encode(&[QuestionRecord::new("Q", "A", "C")]).unwrap();

        assert!(json.contains("\n  {"));
        assert!(json.contains("\n    \"question\": \"Q\""));
    }

    #[test]
    fn given_sparse_objects_when_decoding_then_missing_fields_are_none() {
        let json = r#"[{"question": "Only a question"}, {}]"#;

        let records = decode(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question.as_deref(), Some("Only a question"));
        assert_eq!(records[0].answer, None);
        assert_eq!(records[1], QuestionRecord::default());
    }

    #[test]
    fn given_unknown_fields_when_decoding_then_ignores_them() {
        let json = r#"[{"question": "Q", "difficulty": 3}]"#;

        let records = decode(json).unwrap();

        assert_eq!(records[0].question.as_deref(), Some("Q"));
    }

    #[test]
    fn given_explicit_nulls_when_decoding_then_fields_are_none() {
        let json = r#"[{"question": null, "answer": "A"}]"#;

        let records = decode(json).unwrap();

        assert_eq!(records[0].question, None);
        assert_eq!(records[0].answer.as_deref(), Some("A"));
    }

    #[test]
    fn given_malformed_json_when_decoding_then_returns_decode_error() {
        let result = decode("[{\"question\": ");

        assert!(matches!(result, Err(DomainError::Decode(_))));
    }

    #[test]
    fn given_top_level_object_when_decoding_then_returns_decode_error() {
        let result = decode(r#"{"question": "Q"}"#);

        assert!(matches!(result, Err(DomainError::Decode(_))));
    }
}
