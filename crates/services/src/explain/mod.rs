//! Expert explanations for quiz questions via a hosted language model.

mod client;
mod config;
mod html;
mod prompt;
mod reply;
mod request;
mod service;

pub use client::{HttpModelClient, ModelClient};
pub use config::{ExplainConfig, ExplainDomain, InferenceSettings};
pub use html::{markdown_to_html, sanitize_html};
pub use prompt::{InferenceConfig, InvokeBody, InvokeContent, InvokeMessage, build_prompt};
pub use reply::extract_text;
pub use request::{ExplainPayload, ExplainRequest};
pub use service::{ExplainService, Explanation};
