use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::corpus::LoadError;

const SURVEY_SUMMARY_KEY: &str = "survey_summary";
const FREE_TEXT_INSIGHTS_KEY: &str = "free_text_insights";
const DEFAULT_SPEAKER: &str = "Unknown";

/// A corpus file read from disk and parsed, before classification.
#[derive(Debug)]
pub struct RawDocument {
    pub path: PathBuf,
    pub value: Value,
}

/// One question/answer turn of an interview transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewRecord {
    pub speaker: String,
    pub question: String,
    pub answer: String,
}

/// Survey analytics: per-section aggregates plus summarised free-text answers.
/// Section and question order follow the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyDocument {
    pub survey_summary: Option<Map<String, Value>>,
    pub free_text_insights: Option<Map<String, Value>>,
}

/// The shapes of corpus file the loader knows how to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// JSON array root. Transcript order is preserved.
    Interview(Vec<InterviewRecord>),
    /// JSON object root with `survey_summary` and/or `free_text_insights`.
    Survey(SurveyDocument),
    /// Valid JSON of any other shape. Contributes nothing.
    Unrecognized,
}

/// Reads and parses one corpus file.
pub fn load_document(path: &Path) -> Result<RawDocument, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RawDocument {
        path: path.to_path_buf(),
        value,
    })
}

impl RawDocument {
    /// Decides which renderer applies.
    ///
    /// Fails only for a recognized survey whose sections are not objects.
    pub fn classify(self) -> Result<Document, LoadError> {
        match self.value {
            Value::Array(entries) => Ok(Document::Interview(
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .map(InterviewRecord::from_entry)
                    .collect(),
            )),
            Value::Object(mut root)
                if root.contains_key(SURVEY_SUMMARY_KEY)
                    || root.contains_key(FREE_TEXT_INSIGHTS_KEY) =>
            {
                let survey_summary = take_section(&mut root, SURVEY_SUMMARY_KEY, &self.path)?;
                let free_text_insights =
                    take_section(&mut root, FREE_TEXT_INSIGHTS_KEY, &self.path)?;
                Ok(Document::Survey(SurveyDocument {
                    survey_summary,
                    free_text_insights,
                }))
            }
            _ => Ok(Document::Unrecognized),
        }
    }
}

impl InterviewRecord {
    fn from_entry(entry: &Map<String, Value>) -> Self {
        Self {
            speaker: field_text(entry, "speaker", DEFAULT_SPEAKER),
            question: field_text(entry, "question", ""),
            answer: field_text(entry, "answer", ""),
        }
    }
}

fn take_section(
    root: &mut Map<String, Value>,
    key: &str,
    path: &Path,
) -> Result<Option<Map<String, Value>>, LoadError> {
    match root.remove(key) {
        None => Ok(None),
        Some(Value::Object(section)) => Ok(Some(section)),
        Some(other) => Err(LoadError::Render {
            path: path.to_path_buf(),
            reason: format!("`{key}` must be an object, found {}", kind_name(&other)),
        }),
    }
}

/// Missing and `null` fields take the default; non-string values are shown as JSON.
fn field_text(entry: &Map<String, Value>, key: &str, default: &str) -> String {
    match entry.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(value) => value_text(value),
    }
}

/// Strings verbatim, everything else as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawDocument {
        RawDocument {
            path: PathBuf::from("/corpus/doc.json"),
            value,
        }
    }

    #[test]
    fn test_array_root_is_interview() {
        let doc = raw(json!([
            {"speaker": "Owner", "question": "Why coffee?", "answer": "Passion."}
        ]))
        .classify()
        .unwrap();

        assert_eq!(
            doc,
            Document::Interview(vec![InterviewRecord {
                speaker: "Owner".to_string(),
                question: "Why coffee?".to_string(),
                answer: "Passion.".to_string(),
            }])
        );
    }

    #[test]
    fn test_missing_interview_fields_take_defaults() {
        let doc = raw(json!([{}, {"speaker": null, "answer": "Yes"}]))
            .classify()
            .unwrap();

        let Document::Interview(records) = doc else {
            panic!("expected interview");
        };
        assert_eq!(records[0].speaker, "Unknown");
        assert_eq!(records[0].question, "");
        assert_eq!(records[0].answer, "");
        assert_eq!(records[1].speaker, "Unknown");
        assert_eq!(records[1].answer, "Yes");
    }

    #[test]
    fn test_non_object_interview_entries_are_dropped() {
        let doc = raw(json!(["stray", 42, {"speaker": "B"}, null]))
            .classify()
            .unwrap();

        let Document::Interview(records) = doc else {
            panic!("expected interview");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].speaker, "B");
    }

    #[test]
    fn test_non_string_fields_render_as_json() {
        let doc = raw(json!([{"speaker": 7, "answer": ["a", "b"]}]))
            .classify()
            .unwrap();

        let Document::Interview(records) = doc else {
            panic!("expected interview");
        };
        assert_eq!(records[0].speaker, "7");
        assert_eq!(records[0].answer, r#"["a","b"]"#);
    }

    #[test]
    fn test_object_with_survey_keys_is_survey() {
        let doc = raw(json!({"free_text_insights": {"Favourite drink?": "Flat white"}}))
            .classify()
            .unwrap();

        let Document::Survey(survey) = doc else {
            panic!("expected survey");
        };
        assert!(survey.survey_summary.is_none());
        assert_eq!(survey.free_text_insights.unwrap().len(), 1);
    }

    #[test]
    fn test_other_shapes_are_unrecognized() {
        assert_eq!(
            raw(json!({"name": "cafe"})).classify().unwrap(),
            Document::Unrecognized
        );
        assert_eq!(raw(json!("text")).classify().unwrap(), Document::Unrecognized);
        assert_eq!(raw(json!(3.5)).classify().unwrap(), Document::Unrecognized);
        assert_eq!(raw(Value::Null).classify().unwrap(), Document::Unrecognized);
    }

    #[test]
    fn test_non_object_survey_section_is_render_error() {
        let err = raw(json!({"survey_summary": [1, 2]})).classify().unwrap_err();
        match err {
            LoadError::Render { reason, .. } => assert!(reason.contains("an array"), "{reason}"),
            other => panic!("expected render error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_document_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_document_reports_read_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }), "got {err:?}");
    }
}
