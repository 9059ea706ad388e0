//! Plain-text rendering of classified corpus documents.

use std::path::Path;

use crate::corpus::document::{
    load_document, value_text, Document, InterviewRecord, SurveyDocument,
};
use crate::corpus::LoadError;

/// Loads, classifies and renders one corpus file.
///
/// `Ok(None)` means the file is valid JSON of a shape the corpus does not use.
pub fn render_file(path: &Path) -> Result<Option<String>, LoadError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match load_document(path)?.classify()? {
        Document::Interview(records) => Ok(Some(render_interview(&file_name, &records))),
        Document::Survey(survey) => render_survey(&file_name, &survey)
            .map(Some)
            .map_err(|e| LoadError::Render {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        Document::Unrecognized => Ok(None),
    }
}

pub fn render_interview(file_name: &str, records: &[InterviewRecord]) -> String {
    let mut parts = Vec::with_capacity(records.len() + 1);
    parts.push(format!("=== Interview File: {file_name} ==="));
    for record in records {
        parts.push(format!(
            "\n{}:\nQ: {}\nA: {}",
            record.speaker, record.question, record.answer
        ));
    }
    parts.join("\n")
}

/// Summary sections are pretty-printed with two-space indentation.
pub fn render_survey(
    file_name: &str,
    survey: &SurveyDocument,
) -> Result<String, serde_json::Error> {
    let mut parts = vec![format!("=== Survey Analytics File: {file_name} ===")];

    if let Some(summary) = &survey.survey_summary {
        parts.push("\n--- SURVEY SUMMARY ---".to_string());
        for (section, values) in summary {
            parts.push(format!("\n[{}]", section.to_uppercase()));
            parts.push(serde_json::to_string_pretty(values)?);
        }
    }

    if let Some(insights) = &survey.free_text_insights {
        parts.push("\n--- FREE TEXT INSIGHTS ---".to_string());
        for (question, summary) in insights {
            parts.push(format!("\nQ: {question}\nSummary: {}", value_text(summary)));
        }
    }

    Ok(parts.join("\n"))
}
