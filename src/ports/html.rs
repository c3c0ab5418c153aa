// src/ports/html.rs
use crate::domain::QuestionRecord;
use html_escape::encode_text;
use tracing::instrument;

/// Renders a whole bank as one printable HTML page.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Escape text and keep its line breaks
    fn process_content(&self, content: &str) -> String {
        encode_text(content).replace('\n', "<br>\n")
    }

    fn render_card(&self, position: usize, total: usize, record: &QuestionRecord) -> String {
        let category = record
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(|c| format!(r#"<span class="tag">{}</span>"#, encode_text(c)))
            .unwrap_or_default();

        let explanation = record
            .explanation
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .map(|e| {
                format!(
                    r#"<div class="explanation"><h3>Explanation</h3>{}</div>"#,
                    self.process_content(e)
                )
            })
            .unwrap_or_default();

        let tags = record
            .tags
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| format!("<div>Tags: {}</div>", encode_text(t)))
            .unwrap_or_default();

        format!(
            r#"    <div class="card">
        <div class="card-header">Question {position} of {total} {category}</div>
        <div class="card-front">
            <h2>Question</h2>
            <div>{question}</div>
        </div>
        <div class="card-back">
            <h2>Answer</h2>
            <div>{answer}</div>
            {explanation}
        </div>
        <div class="card-meta">{tags}</div>
    </div>
"#,
            position = position,
            total = total,
            category = category,
            question = self.process_content(record.question_text()),
            answer = self.process_content(record.answer_text()),
            explanation = explanation,
            tags = tags,
        )
    }

    #[instrument(level = "debug", skip(self, records), fields(count = records.len()))]
    pub fn render(&self, bank: &str, records: &[QuestionRecord]) -> String {
        let body = if records.is_empty() {
            r#"    <div class="card">No questions</div>
"#
            .to_string()
        } else {
            records
                .iter()
                .enumerate()
                .map(|(idx, record)| self.render_card(idx + 1, records.len(), record))
                .collect::<String>()
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 2rem;
            margin-bottom: 1.5rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .card-header {{
            font-size: 0.9em;
            color: #666;
        }}
        .card-front {{
            margin-bottom: 2rem;
            padding-bottom: 1rem;
            border-bottom: 2px solid #eee;
        }}
        .card-meta {{
            font-size: 0.9em;
            color: #666;
        }}
        .tag {{
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            font-size: 0.8em;
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
{body}</body>
</html>"#,
            title = encode_text(bank),
            body = body,
        )
    }
}
