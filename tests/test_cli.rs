use clap::Parser;
use qbank::cli::args::{Args, Command};
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["qbank", "bank.json"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(vec!["qbank", "list"]).unwrap();

    assert!(matches!(parsed.command, Command::List));
    assert_eq!(parsed.data_dir, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_view_without_number_when_parsing_then_defaults_to_first_question() {
    // Arrange
    let args = vec!["qbank", "view", "bank.json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View {
            bank,
            number,
            json,
            html,
        } => {
            assert_eq!(bank, "bank.json");
            assert_eq!(number, 1);
            assert!(!json);
            assert!(!html);
        }
        _ => panic!("Expected View command"),
    }
}

#[test]
fn given_json_and_html_flags_when_parsing_view_then_fails() {
    let result = Args::try_parse_from(vec!["qbank", "view", "bank.json", "--json", "--html"]);

    assert!(result.is_err());
}

#[test]
fn given_global_data_dir_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec!["qbank", "questions", "-d", "/srv/banks", "bank.json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Questions { bank, category } => {
            assert_eq!(bank, "bank.json");
            assert_eq!(category, None);
        }
        _ => panic!("Expected Questions command"),
    }
    assert_eq!(parsed.data_dir, Some(PathBuf::from("/srv/banks")));
}

#[test]
fn given_edit_flags_when_parsing_then_collects_fields() {
    // Arrange
    let args = vec![
        "qbank",
        "edit",
        "bank.json",
        "2",
        "--answer",
        "A web framework",
        "--category",
        "Framework",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Edit {
            bank,
            number,
            fields,
        } => {
            assert_eq!(bank, "bank.json");
            assert_eq!(number, 2);
            assert_eq!(fields.answer.as_deref(), Some("A web framework"));
            assert_eq!(fields.category.as_deref(), Some("Framework"));
            assert_eq!(fields.question, None);
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_edit_without_number_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["qbank", "edit", "bank.json"]);

    assert!(result.is_err());
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    let parsed = Args::try_parse_from(vec!["qbank", "-vv", "list"]).unwrap();

    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_config_init_when_parsing_then_init_is_true() {
    let parsed = Args::try_parse_from(vec!["qbank", "config", "--init"]).unwrap();

    assert!(matches!(parsed.command, Command::Config { init: true }));
}
