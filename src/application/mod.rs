// src/application/mod.rs
pub mod cursor;
pub mod editor_session;
pub mod question_service;
pub mod viewer_session;

pub use cursor::QuestionCursor;
pub use editor_session::EditorSession;
pub use question_service::{BankLoad, BankRepository, QuestionService};
pub use viewer_session::ViewerSession;
