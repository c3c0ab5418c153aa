// src/cli/args.rs
use crate::domain::QuestionEdit;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding the question bank files (overrides the config file)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Field values accepted by `edit`; every flag is optional
#[derive(ClapArgs, Debug, Clone, Default, PartialEq)]
pub struct EditFields {
    /// New question text
    #[arg(long)]
    pub question: Option<String>,

    /// New answer text
    #[arg(long)]
    pub answer: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New source reference
    #[arg(long)]
    pub source: Option<String>,

    /// New explanation
    #[arg(long)]
    pub explanation: Option<String>,

    /// New free-text tags
    #[arg(long)]
    pub tags: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,

    /// New language
    #[arg(long)]
    pub language: Option<String>,
}

impl From<EditFields> for QuestionEdit {
    fn from(fields: EditFields) -> Self {
        QuestionEdit {
            question: fields.question,
            answer: fields.answer,
            category: fields.category,
            source: fields.source,
            explanation: fields.explanation,
            tags: fields.tags,
            status: fields.status,
            language: fields.language,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the question banks in the data directory
    List,

    /// List the questions of a bank, one line each
    Questions {
        /// Bank file name
        #[arg(value_name = "BANK")]
        bank: String,

        /// Only show questions of this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one question of a bank
    View {
        /// Bank file name
        #[arg(value_name = "BANK")]
        bank: String,

        /// Question number, starting at 1
        #[arg(value_name = "NUMBER", default_value_t = 1)]
        number: usize,

        /// Output the question as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Render the whole bank as HTML and open it in the browser
        #[arg(long)]
        html: bool,
    },

    /// Create a new, empty question bank
    Create {
        /// Bank name; `.json` is appended when missing
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Append a question to a bank
    Add {
        /// Bank file name
        #[arg(value_name = "BANK")]
        bank: String,

        #[command(flatten)]
        fields: EditFields,
    },

    /// Change fields of one question
    Edit {
        /// Bank file name
        #[arg(value_name = "BANK")]
        bank: String,

        /// Question number, starting at 1
        #[arg(value_name = "NUMBER")]
        number: usize,

        #[command(flatten)]
        fields: EditFields,
    },

    /// Remove one question from a bank
    Delete {
        /// Bank file name
        #[arg(value_name = "BANK")]
        bank: String,

        /// Question number, starting at 1
        #[arg(value_name = "NUMBER")]
        number: usize,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the user config file
        #[arg(long)]
        init: bool,
    },
}
