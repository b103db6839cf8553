//! Wire types for the Gemini `generateContent` REST call.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::analysis::error::AnalysisError;
use crate::analysis::types::AnalysisResult;
use crate::camera::CapturedFrame;

pub const INSTRUCTION: &str = "Analyze this image frame from an XR HUD.
1. Determine if the visual content looks like it contains AI-generated anomalies or deepfake artifacts.
2. Provide a short description of the person or scene.
3. List key visual details.

Return JSON.";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Part<'a> {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn for_frame(frame: &'a CapturedFrame) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Inline {
                        inline_data: InlineData {
                            mime_type: frame.mime_type(),
                            data: frame.payload(),
                        },
                    },
                    Part::Text { text: INSTRUCTION },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: verdict_schema(),
            },
        }
    }
}

/// Structured-output schema the model must answer with.
pub fn verdict_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isAIGenerated": {
                "type": "BOOLEAN",
                "description": "Whether the image appears AI generated or manipulated"
            },
            "confidence": {
                "type": "NUMBER",
                "description": "Confidence score 0-100"
            },
            "description": {
                "type": "STRING",
                "description": "Short visual description"
            },
            "details": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3 key visual attributes detected"
            }
        },
        "required": ["isAIGenerated", "confidence", "description", "details"]
    })
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined. `None` when empty.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

#[derive(Deserialize)]
struct VerdictReply {
    #[serde(rename = "isAIGenerated")]
    is_ai_generated: bool,
    confidence: f64,
    description: String,
    details: Vec<String>,
}

/// Parse a full `generateContent` response body.
pub fn parse_reply(body: &str, timestamp: i64) -> Result<AnalysisResult, AnalysisError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    if let Some(reason) = response.block_reason() {
        return Err(AnalysisError::Blocked(reason.to_string()));
    }
    let text = response.text().ok_or(AnalysisError::EmptyResponse)?;
    parse_verdict(&text, timestamp)
}

/// Parse the model's JSON answer and stamp it with `timestamp`.
pub fn parse_verdict(text: &str, timestamp: i64) -> Result<AnalysisResult, AnalysisError> {
    let reply: VerdictReply =
        serde_json::from_str(text.trim()).map_err(|e| AnalysisError::Schema(e.to_string()))?;

    if !reply.confidence.is_finite() || !(0.0..=100.0).contains(&reply.confidence) {
        return Err(AnalysisError::Schema(format!(
            "confidence {} outside 0-100",
            reply.confidence
        )));
    }
    if reply.details.len() != 3 {
        log::debug!("Model returned {} details, expected 3", reply.details.len());
    }

    Ok(AnalysisResult {
        is_ai_generated: reply.is_ai_generated,
        confidence: reply.confidence,
        description: reply.description,
        details: reply.details,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-2.5-flash"
        })
        .to_string()
    }

    #[test]
    fn request_carries_frame_instruction_and_schema() {
        let frame = CapturedFrame::new("data:image/jpeg;base64,/9j/abc", 2, 2);
        let body = serde_json::to_value(GenerateContentRequest::for_frame(&frame)).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], "/9j/abc");
        assert_eq!(parts[1]["text"], INSTRUCTION);

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(
            config["responseSchema"]["required"],
            json!(["isAIGenerated", "confidence", "description", "details"])
        );
    }

    #[test]
    fn well_formed_reply_is_parsed_and_stamped() {
        let verdict = r#"{"isAIGenerated":true,"confidence":91.5,"description":"A person at a desk","details":["smooth skin","warped ear","odd lighting"]}"#;
        let result = parse_reply(&envelope(verdict), 1234).unwrap();
        assert!(result.is_ai_generated);
        assert_eq!(result.confidence, 91.5);
        assert_eq!(result.description, "A person at a desk");
        assert_eq!(result.details.len(), 3);
        assert_eq!(result.timestamp, 1234);
    }

    #[test]
    fn split_text_parts_are_joined() {
        let body = json!({
            "candidates": [{ "content": { "parts": [
                { "text": "{\"isAIGenerated\":false,\"confidence\":12," },
                { "text": "\"description\":\"Empty room\",\"details\":[\"a\",\"b\",\"c\"]}" }
            ]}}]
        })
        .to_string();
        let result = parse_reply(&body, 1).unwrap();
        assert_eq!(result.description, "Empty room");
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        let err = parse_reply("{}", 1).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResponse));
        assert_eq!(err.to_string(), "no data returned from AI");
    }

    #[test]
    fn blocked_prompt_is_reported() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        match parse_reply(body, 1) {
            Err(AnalysisError::Blocked(reason)) => assert_eq!(reason, "SAFETY"),
            other => panic!("expected blocked, got {:?}", other),
        }
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            parse_reply("<html>502</html>", 1),
            Err(AnalysisError::Malformed(_))
        ));
    }

    #[test]
    fn missing_field_is_a_schema_violation() {
        let verdict = r#"{"isAIGenerated":true,"confidence":50,"details":[]}"#;
        assert!(matches!(
            parse_reply(&envelope(verdict), 1),
            Err(AnalysisError::Schema(_))
        ));
    }

    #[test]
    fn wrong_type_is_a_schema_violation() {
        let verdict = r#"{"isAIGenerated":"yes","confidence":50,"description":"x","details":[]}"#;
        assert!(matches!(
            parse_verdict(verdict, 1),
            Err(AnalysisError::Schema(_))
        ));
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let verdict = r#"{"isAIGenerated":false,"confidence":140,"description":"x","details":["a","b","c"]}"#;
        match parse_verdict(verdict, 1) {
            Err(AnalysisError::Schema(msg)) => assert!(msg.contains("140")),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn detail_count_is_not_enforced() {
        let verdict = r#"{"isAIGenerated":false,"confidence":60,"description":"x","details":["only one"]}"#;
        assert_eq!(parse_verdict(verdict, 1).unwrap().details, vec!["only one"]);
    }
}
