//! Course document parsing
//!
//! Turns raw model output into a [`CourseDocument`]. Models often wrap their
//! JSON in a markdown code fence, so a candidate substring is located first;
//! when the strict decode fails the request still succeeds with a degraded
//! document carrying the raw text.

use crate::models::CourseDocument;
use tracing::warn;

/// Interior of the first triple-backtick fence, with an optional `json` tag.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let mut interior = &text[start + 3..];
    if let Some(stripped) = interior.strip_prefix("json") {
        interior = stripped;
    }
    let end = interior.find("```")?;
    Some(interior[..end].trim())
}

/// Candidate string handed to the JSON decoder. Total: always returns a
/// substring of the input.
pub fn json_candidate(text: &str) -> &str {
    fenced_block(text).unwrap_or_else(|| text.trim())
}

/// Decode raw model output into a course document.
///
/// A decode failure is a recoverable condition, not an error: the caller gets
/// the degraded fallback with `raw_content` set, and the failure is logged.
pub fn parse_course_document(title: &str, raw: &str) -> CourseDocument {
    let candidate = json_candidate(raw);
    match serde_json::from_str::<CourseDocument>(candidate) {
        Ok(document) => document,
        Err(e) => {
            warn!("Failed to parse AI response as JSON: {}", e);
            CourseDocument::degraded(title, raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_candidate_from_fenced_json_block() {
        let text = "Here:\n```json\n{\"title\":\"A\"}\n```\nend";
        assert_eq!(json_candidate(text), "{\"title\":\"A\"}");
    }

    #[test]
    fn test_candidate_from_untagged_fence() {
        let text = "```\n{\"title\":\"B\"}\n```";
        assert_eq!(json_candidate(text), "{\"title\":\"B\"}");
    }

    #[test]
    fn test_candidate_without_fence_is_trimmed_whole_text() {
        assert_eq!(json_candidate("  {\"title\":\"C\"}  "), "{\"title\":\"C\"}");
    }

    #[test]
    fn test_unterminated_fence_falls_back_to_whole_text() {
        let text = "```json\n{\"title\":\"D\"}";
        assert_eq!(json_candidate(text), text.trim());
    }

    #[test]
    fn test_parse_fenced_response_succeeds() {
        let raw = "Here:\n```json\n{\"title\":\"A\"}\n```\nend";
        let doc = parse_course_document("Fallback Title", raw);
        assert_eq!(doc.title, "A");
        assert!(doc.raw_content.is_none());
    }

    #[test]
    fn test_parse_full_document() {
        let raw = r#"{
            "title": "Sourdough Basics",
            "description": "Learn to bake. Practice daily.",
            "price": 49.0,
            "modules": [
                {
                    "title": "Starters",
                    "objectives": ["Understand fermentation"],
                    "lessons": [
                        {
                            "title": "Your first starter",
                            "content": "Mix flour and water.",
                            "qa_pairs": [
                                {"question": "How often do I feed it?", "answer": "Daily."}
                            ]
                        }
                    ]
                }
            ],
            "chatbot_greeting": "Hi, baker!",
            "chatbot_personality": "Patient and precise"
        }"#;
        let doc = parse_course_document("ignored", raw);
        assert_eq!(doc.title, "Sourdough Basics");
        assert_eq!(doc.price, Some(49.0));
        assert_eq!(doc.modules.len(), 1);
        assert_eq!(doc.modules[0].lessons[0].qa_pairs[0].answer, "Daily.");
    }

    #[test]
    fn test_parse_failure_yields_degraded_document() {
        let doc = parse_course_document("My Course", "not json at all");
        assert_eq!(doc.title, "My Course");
        assert!(doc.modules.is_empty());
        assert_eq!(doc.description, "not json at all");
        assert_eq!(doc.raw_content.as_deref(), Some("not json at all"));
    }

    #[test]
    fn test_degraded_document_keeps_full_raw_text_beyond_truncation() {
        let raw = format!("prose {}", "y".repeat(600));
        let doc = parse_course_document("T", &raw);
        assert_eq!(doc.description.chars().count(), 500);
        assert_eq!(doc.raw_content.as_deref(), Some(raw.as_str()));
    }

    #[test]
    fn test_fenced_garbage_still_degrades() {
        let raw = "```json\nnot valid json\n```";
        let doc = parse_course_document("T", raw);
        assert!(doc.modules.is_empty());
        assert_eq!(doc.raw_content.as_deref(), Some(raw));
    }
}
