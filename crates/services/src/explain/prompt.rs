use serde::Serialize;

use super::config::{ExplainDomain, InferenceSettings};
use super::request::ExplainRequest;

/// Render the expert-explainer prompt for one question.
#[must_use]
pub fn build_prompt(request: &ExplainRequest, domain: &ExplainDomain) -> String {
    let ExplainDomain {
        expert,
        platform,
        role,
    } = domain;

    format!(
        "You are an {expert} expert. Provide a detailed explanation for the following {platform} exam question:

QUESTION:
{question}

OPTIONS:
{options}

CORRECT ANSWER:
{correct}

BASIC EXPLANATION:
{explanation}

Please provide:
1. Why this answer is correct (with technical details)
2. Why each of the other options is incorrect (be specific)
3. Key {platform} concepts to understand related to this question
4. Any relevant {platform} service limitations or best practices
5. Real-world application of this knowledge for a {role}

Format your response with clear headings and bullet points where appropriate. Include specific {platform} service details, limits, and best practices that would help a {role} understand the concepts deeply.",
        question = request.question(),
        options = request.options().join("\n"),
        correct = request.correct_options().join("\n"),
        explanation = request.explanation(),
    )
}

/// Body of a model invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeBody {
    pub messages: Vec<InvokeMessage>,
    pub inference_config: InferenceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvokeMessage {
    pub role: &'static str,
    pub content: Vec<InvokeContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvokeContent {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl InvokeBody {
    #[must_use]
    pub fn user_prompt(prompt: String, settings: InferenceSettings) -> Self {
        Self {
            messages: vec![InvokeMessage {
                role: "user",
                content: vec![InvokeContent { text: prompt }],
            }],
            inference_config: InferenceConfig {
                max_tokens: settings.max_tokens,
                temperature: settings.temperature,
                top_p: settings.top_p,
            },
        }
    }
}
