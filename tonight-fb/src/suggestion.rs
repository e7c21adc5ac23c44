//! Chat-completion response envelope from the suggestion backend.

use serde::Deserialize;
use tracing::debug;

use crate::error::{CardError, Result};
use crate::movie::Movie;

#[derive(Clone, Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl ChatCompletion {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CardError::json("chat completion", e))
    }

    /// Content of the first choice.
    pub fn content(&self) -> Result<&str> {
        let message = &self.choices.first().ok_or(CardError::EmptyCompletion)?.message;
        let content = message.content.trim();
        if content.is_empty() {
            return Err(CardError::EmptyCompletion);
        }
        debug!(role = %message.role, chars = content.len(), "completion content");
        Ok(content)
    }
}

/// Decode the movie object the assistant answered with. A surrounding
/// Markdown code fence (with or without a language tag) is ignored.
pub fn parse_suggested_movie(content: &str) -> Result<Movie> {
    Movie::from_json(strip_fence(content))
}

fn strip_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string on the opening line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "```json\n{\"title\": \"Paddington 2\", \"genres\": [\"Comedy\", \"Family\"]}\n```"}, "finish_reason": "stop"}
        ]
    }"#;

    #[test]
    fn extracts_first_choice() {
        let completion = ChatCompletion::from_json(RESPONSE).unwrap();
        assert_eq!(completion.choices[0].message.role, "assistant");
        let movie = parse_suggested_movie(completion.content().unwrap()).unwrap();
        assert_eq!(movie.title, "Paddington 2");
        assert_eq!(movie.genres, vec!["Comedy", "Family"]);
    }

    #[test]
    fn no_choices_is_empty_completion() {
        let completion = ChatCompletion::from_json(r#"{"choices": []}"#).unwrap();
        assert!(matches!(completion.content(), Err(CardError::EmptyCompletion)));
    }

    #[test]
    fn blank_content_is_empty_completion() {
        let completion =
            ChatCompletion::from_json(r#"{"choices": [{"message": {"role": "assistant", "content": "  "}}]}"#).unwrap();
        assert!(matches!(completion.content(), Err(CardError::EmptyCompletion)));
    }

    #[test]
    fn fence_stripping() {
        assert_eq!(strip_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_fence("```json\n{}\n```  "), "{}");
    }

    #[test]
    fn plain_text_answer_is_a_json_error() {
        assert!(matches!(
            parse_suggested_movie("Try Arrival (2016)."),
            Err(CardError::Json { .. })
        ));
    }
}
