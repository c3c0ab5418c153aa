// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{anyhow, bail, Context, Result};
use application::{BankRepository, EditorSession, QuestionService, ViewerSession};
use cli::args::{Args, Command};
use domain::{QuestionEdit, QuestionRecord};
use infrastructure::{Config, JsonBankStore, PageRenderer};
use ports::{HtmlPresenter, TextPresenter};
use std::path::Path;
use tracing::{debug, info};

use crate::constants::{NEW_ANSWER_TEXT, NEW_CATEGORY_TEXT, NEW_QUESTION_TEXT};

/// What a command produced for the terminal
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Text(String),
    /// A full HTML page to be opened in the browser
    Page { name: String, html: String },
}

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting qbank with arguments");

    if let Command::Config { init: true } = args.command {
        println!("{}", init_config(args.config.as_deref())?);
        return Ok(());
    }

    let config = Config::resolve(args.config.as_deref())?.with_data_dir(args.data_dir.clone());
    debug!(?config, "Resolved configuration");

    if let Command::Config { .. } = args.command {
        let toml = toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
        println!("{}", toml.trim_end());
        return Ok(());
    }

    // Initialize infrastructure
    let store = JsonBankStore::new(&config.storage.data_dir);
    info!(data_dir = ?store.data_dir(), "Using data directory");

    // Initialize application
    let mut service = QuestionService::new(store);
    let presenter = TextPresenter::with_preview_width(config.display.preview_width);

    match execute(args.command, &mut service, &presenter)? {
        Output::Text(text) => println!("{}", text),
        Output::Page { name, html } => {
            let mut renderer = PageRenderer::new();
            let path = renderer.create_temp_file(&name, &html)?;
            renderer.open_in_browser(&path)?;
            println!("Opened {}", path.display());
        }
    }

    Ok(())
}

/// Run one bank command against `service`.
///
/// Read commands always succeed and show degraded content for unreadable
/// banks; write commands fail when the change could not be persisted.
pub fn execute<R: BankRepository>(
    command: Command,
    service: &mut QuestionService<R>,
    presenter: &TextPresenter,
) -> Result<Output> {
    match command {
        Command::List => {
            let mut banks = service.list_question_banks();
            banks.sort();
            Ok(Output::Text(presenter.render_bank_list(&banks)))
        }

        Command::Questions { bank, category } => {
            let session = ViewerSession::open(service, &bank);
            if session.questions().is_empty() {
                return Ok(Output::Text(session.status().to_string()));
            }

            let entries: Vec<(usize, &QuestionRecord)> = session
                .questions()
                .iter()
                .enumerate()
                .filter(|(_, record)| match &category {
                    Some(category) => record.in_category(category),
                    None => true,
                })
                .collect();
            Ok(Output::Text(presenter.render_question_list(&bank, &entries)))
        }

        Command::View {
            bank,
            number,
            json,
            html,
        } => {
            let mut session = ViewerSession::open(service, &bank);

            if html {
                let page = HtmlPresenter::new().render(&bank, session.questions());
                let name = Path::new(&bank)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("bank")
                    .to_string();
                return Ok(Output::Page { name, html: page });
            }

            if session.questions().is_empty() {
                return Ok(Output::Text(session.status().to_string()));
            }

            let in_range = number
                .checked_sub(1)
                .is_some_and(|index| session.go_to(index));
            if !in_range {
                return Ok(Output::Text(format!(
                    "Question {} does not exist in {} ({} questions)",
                    number,
                    bank,
                    session.questions().len()
                )));
            }

            let record = session
                .current()
                .ok_or_else(|| anyhow!("No current question"))?;
            if json {
                let text = serde_json::to_string_pretty(record)
                    .context("Failed to serialize question to JSON")?;
                Ok(Output::Text(text))
            } else {
                Ok(Output::Text(
                    presenter.render_question(&session.position_label(), record),
                ))
            }
        }

        Command::Create { name } => {
            let created = service
                .create_bank(&name)
                .with_context(|| format!("Error creating question bank {}", name))?;
            Ok(Output::Text(format!("Created new question bank: {}", created)))
        }

        Command::Add { bank, fields } => {
            let mut session = open_for_editing(service, &bank)?;

            let mut record = QuestionRecord::new(NEW_QUESTION_TEXT, NEW_ANSWER_TEXT, NEW_CATEGORY_TEXT);
            QuestionEdit::from(fields).apply_to(&mut record);
            session.add(record);
            let added = session.status().to_string();

            save(&mut session, service)?;
            Ok(Output::Text(format!("{}\n{}", added, session.status())))
        }

        Command::Edit {
            bank,
            number,
            fields,
        } => {
            let edit = QuestionEdit::from(fields);
            if edit.is_empty() {
                bail!("Nothing to change: pass at least one field, e.g. --answer");
            }

            let mut session = open_for_editing(service, &bank)?;
            select(&mut session, &bank, number)?;

            if !session.update_current(&edit) {
                return Ok(Output::Text(format!(
                    "No changes to {}",
                    session.position_label()
                )));
            }
            save(&mut session, service)?;

            let record = session
                .current()
                .ok_or_else(|| anyhow!("No current question"))?;
            Ok(Output::Text(format!(
                "{}\n\n{}",
                presenter.render_question(&session.position_label(), record),
                session.status()
            )))
        }

        Command::Delete { bank, number } => {
            let mut session = open_for_editing(service, &bank)?;
            select(&mut session, &bank, number)?;

            session.delete_current();
            let deleted = session.status().to_string();

            save(&mut session, service)?;
            Ok(Output::Text(format!("{}\n{}", deleted, session.status())))
        }

        Command::Config { .. } => bail!("The config command does not operate on question banks"),
    }
}

/// Editing a bank that failed to load would overwrite it, so refuse early
fn open_for_editing<R: BankRepository>(
    service: &QuestionService<R>,
    bank: &str,
) -> Result<EditorSession> {
    let session = EditorSession::open(service, bank);
    if let Some(e) = session.load_error() {
        bail!("Cannot edit question bank {}: {}", bank, e);
    }
    Ok(session)
}

fn select(session: &mut EditorSession, bank: &str, number: usize) -> Result<()> {
    let in_range = number
        .checked_sub(1)
        .is_some_and(|index| session.go_to(index));
    if !in_range {
        bail!(
            "Question {} does not exist in {} ({} questions)",
            number,
            bank,
            session.questions().len()
        );
    }
    Ok(())
}

fn save<R: BankRepository>(
    session: &mut EditorSession,
    service: &mut QuestionService<R>,
) -> Result<()> {
    let bank = session.bank().to_string();
    session
        .save(service)
        .with_context(|| format!("Changes to {} were not saved", bank))
}

/// Write the default configuration, refusing to replace an existing file
fn init_config(explicit: Option<&Path>) -> Result<String> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::default_path().context("Could not find a config directory")?,
    };
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    Config::create_default(&path)?;
    info!(?path, "Wrote default configuration");
    Ok(format!("Wrote default configuration to {}", path.display()))
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
