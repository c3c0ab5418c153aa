// src/constants.rs
//
// Application-wide constants shared by the storage layer, the editor and the CLI.

/// Directory holding the bank files when neither the config file nor `--data-dir` set one.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Extension every listed bank file carries (compared case-insensitively).
pub const BANK_FILE_EXTENSION: &str = ".json";

/// Name of the config file below the platform config directory (`<config_dir>/qbank/`).
pub const CONFIG_DIR_NAME: &str = "qbank";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Placeholder content of a question created by the editor.
pub const NEW_QUESTION_TEXT: &str = "New Question";
pub const NEW_ANSWER_TEXT: &str = "New Answer";
pub const NEW_CATEGORY_TEXT: &str = "General";

/// Width of the one-line question previews in `qbank questions`.
pub const DEFAULT_PREVIEW_WIDTH: usize = 60;

/// Delay in milliseconds after writing the HTML page before the browser is launched.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
