//! Tool payload decoding helpers.

use pir_domain::{ContextUpdate, DialogueContext};
use serde::Deserialize;
use serde_json::Value;

/// Tools may answer with JSON or with JSON encoded in a string.
///
/// A string that does not parse as JSON is kept as a string.
pub(crate) fn decode(value: Value) -> Value {
    match value {
        Value::String(text) => {
            serde_json::from_str(text.trim()).unwrap_or(Value::String(text))
        }
        other => other,
    }
}

/// Context as a JSON object for tool arguments
pub(crate) fn context_value(context: &DialogueContext) -> Value {
    serde_json::to_value(context).unwrap_or_default()
}

pub(crate) fn perspective_names(context: &DialogueContext) -> Vec<&'static str> {
    context.perspectives().iter().map(|p| p.as_str()).collect()
}

/// Response of the `dialogue_question` tool
#[derive(Debug, Deserialize)]
pub(crate) struct QuestionToolResponse {
    pub question: String,
    #[serde(rename = "type", default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub has_sufficient_context: bool,
    #[serde(default)]
    pub context: Option<ContextUpdate>,
    #[serde(default)]
    pub suggested_answers: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_json_string() {
        assert_eq!(decode(json!("{\"a\": 1}")), json!({"a": 1}));
        assert_eq!(decode(json!(" true ")), json!(true));
    }

    #[test]
    fn test_decode_keeps_plain_text() {
        assert_eq!(decode(json!("PIR 1: ...")), json!("PIR 1: ..."));
    }

    #[test]
    fn test_question_response_tolerates_nulls() {
        let response: QuestionToolResponse = serde_json::from_value(json!({
            "question": "When?",
            "type": null,
            "context": null,
            "suggested_answers": null
        }))
        .unwrap();
        assert_eq!(response.question, "When?");
        assert!(response.question_type.is_none());
        assert!(!response.has_sufficient_context);
        assert!(response.context.is_none());
    }
}
