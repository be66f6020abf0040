use serde_json::Value;

use crate::error::ExplainError;

type ShapeMatcher = fn(&Value) -> Option<&str>;

/// Known reply shapes, tried in order. The first match wins.
const REPLY_SHAPES: &[(&str, ShapeMatcher)] = &[
    ("bare string", bare_string),
    ("output.message.content", output_message),
    ("output list", output_list),
    ("generation", generation),
    ("messages", messages),
    ("content list", content_list),
    ("completion", completion),
    ("response", response),
];

fn bare_string(reply: &Value) -> Option<&str> {
    reply.as_str()
}

fn output_message(reply: &Value) -> Option<&str> {
    reply.pointer("/output/message/content/0/text")?.as_str()
}

fn output_list(reply: &Value) -> Option<&str> {
    reply.pointer("/output/0/text")?.as_str()
}

fn generation(reply: &Value) -> Option<&str> {
    reply.get("generation")?.as_str()
}

fn messages(reply: &Value) -> Option<&str> {
    let content = reply.pointer("/messages/0/content")?;
    content
        .as_str()
        .or_else(|| content.pointer("/0/text")?.as_str())
}

fn content_list(reply: &Value) -> Option<&str> {
    reply.pointer("/content/0/text")?.as_str()
}

fn completion(reply: &Value) -> Option<&str> {
    reply.get("completion")?.as_str()
}

fn response(reply: &Value) -> Option<&str> {
    reply.get("response")?.as_str()
}

/// Pull the generated text out of a model reply.
///
/// # Errors
///
/// Returns `ExplainError::UnrecognizedReplyFormat` when no known shape matches
/// and no `text` string exists anywhere under `output`.
pub fn extract_text(reply: &Value) -> Result<&str, ExplainError> {
    for (shape, matcher) in REPLY_SHAPES {
        if let Some(text) = matcher(reply).filter(|text| !text.is_empty()) {
            tracing::debug!(shape, "matched model reply shape");
            return Ok(text);
        }
    }

    reply
        .get("output")
        .and_then(find_text)
        .inspect(|_| tracing::debug!("matched model reply by text search"))
        .ok_or(ExplainError::UnrecognizedReplyFormat)
}

fn find_text(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => {
            if let Some(text) = map.get("text").and_then(Value::as_str) {
                if !text.is_empty() {
                    return Some(text);
                }
            }
            map.values().find_map(find_text)
        }
        Value::Array(items) => items.iter().find_map(find_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recognizes_each_known_shape() {
        let cases = [
            json!("plain"),
            json!({"output": {"message": {"content": [{"text": "plain"}]}}}),
            json!({"output": [{"text": "plain"}]}),
            json!({"generation": "plain"}),
            json!({"messages": [{"content": "plain"}]}),
            json!({"messages": [{"content": [{"text": "plain"}]}]}),
            json!({"content": [{"text": "plain"}]}),
            json!({"completion": "plain"}),
            json!({"response": "plain"}),
        ];
        for reply in &cases {
            assert_eq!(extract_text(reply).unwrap(), "plain", "{reply}");
        }
    }

    #[test]
    fn earlier_shapes_take_priority() {
        let reply = json!({"generation": "first", "completion": "second"});
        assert_eq!(extract_text(&reply).unwrap(), "first");
    }

    #[test]
    fn falls_back_to_nested_text_under_output() {
        let reply = json!({"output": {"choices": [{"delta": {"text": "deep"}}]}});
        assert_eq!(extract_text(&reply).unwrap(), "deep");
    }

    #[test]
    fn unknown_shape_is_an_error() {
        let reply = json!({"result": {"text": "not under output"}});
        assert!(matches!(
            extract_text(&reply),
            Err(ExplainError::UnrecognizedReplyFormat)
        ));
        assert!(extract_text(&json!(null)).is_err());
    }
}
