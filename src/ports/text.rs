// src/ports/text.rs
use crate::constants::DEFAULT_PREVIEW_WIDTH;
use crate::domain::QuestionRecord;
use crate::util::text::preview;

/// Plain-text screens of the terminal front end.
#[derive(Debug, Clone)]
pub struct TextPresenter {
    preview_width: usize,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::with_preview_width(DEFAULT_PREVIEW_WIDTH)
    }

    pub fn with_preview_width(preview_width: usize) -> Self {
        Self { preview_width }
    }

    pub fn render_bank_list(&self, banks: &[String]) -> String {
        let mut out = format!("Found {} question banks", banks.len());
        for bank in banks {
            out.push_str(&format!("\n  {}", bank));
        }
        out
    }

    /// Numbered one-line previews; `entries` carries each record's position in the bank
    pub fn render_question_list(&self, bank: &str, entries: &[(usize, &QuestionRecord)]) -> String {
        if entries.is_empty() {
            return format!("{}: no questions", bank);
        }

        let number_width = entries
            .iter()
            .map(|(idx, _)| (idx + 1).to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = format!("{} ({} questions)", bank, entries.len());
        for (idx, record) in entries {
            let category = match record.category.as_deref() {
                Some(c) if !c.trim().is_empty() => format!("[{}] ", c.trim()),
                _ => String::new(),
            };
            out.push_str(&format!(
                "\n{:>width$}. {}{}",
                idx + 1,
                category,
                preview(record.question_text(), self.preview_width),
                width = number_width,
            ));
        }
        out
    }

    /// Full view of one record under a "Question N of M" heading
    pub fn render_question(&self, label: &str, record: &QuestionRecord) -> String {
        let mut out = format!(
            "{}\n\nQuestion: {}\nAnswer:   {}",
            label,
            record.question_text(),
            record.answer_text()
        );

        let metadata = [
            ("Category", &record.category),
            ("Explanation", &record.explanation),
            ("Source", &record.source),
            ("Tags", &record.tags),
            ("Status", &record.status),
            ("Language", &record.language),
            ("Version", &record.version),
            ("Question audio", &record.question_audio_file_name),
            ("Answer audio", &record.answer_audio_file_name),
            ("Id", &record.id),
            ("Created", &record.created_at),
            ("Created by", &record.created_by),
            ("Updated", &record.updated_at),
            ("Updated by", &record.updated_by),
        ];

        let present: Vec<_> = metadata
            .iter()
            .filter_map(|(name, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (*name, v))
            })
            .collect();

        if !present.is_empty() {
            out.push('\n');
            for (name, value) in present {
                out.push_str(&format!("\n{:<15} {}", format!("{}:", name), value));
            }
        }
        out
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}
