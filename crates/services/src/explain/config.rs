use std::env;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

pub const DEFAULT_MODEL_ID: &str = "amazon.nova-pro-v1:0";
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Subject matter the explainer prompt is written for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainDomain {
    /// Expert persona, e.g. "AWS Certified Data Engineer".
    pub expert: String,
    /// Platform whose services and limits the answer should cover.
    pub platform: String,
    /// Practitioner the real-world section is aimed at.
    pub role: String,
}

impl Default for ExplainDomain {
    fn default() -> Self {
        Self {
            expert: "AWS Certified Data Engineer".into(),
            platform: "AWS".into(),
            role: "data engineer".into(),
        }
    }
}

/// Sampling parameters forwarded to the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InferenceSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplainConfig {
    pub endpoint: Url,
    pub api_key: Option<String>,
    pub model_id: String,
    pub inference: InferenceSettings,
    pub domain: ExplainDomain,
    pub request_timeout: Duration,
}

impl ExplainConfig {
    /// Config with default model and sampling settings for `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            api_key: None,
            model_id: DEFAULT_MODEL_ID.into(),
            inference: InferenceSettings::default(),
            domain: ExplainDomain::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Read `QUIZ_*` variables. `None` when no usable endpoint is configured.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Unparsable numeric values fall back to their defaults with a warning.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let raw_endpoint = get("QUIZ_MODEL_ENDPOINT")?;
        let endpoint = match Url::parse(raw_endpoint.trim()) {
            Ok(url) if !url.cannot_be_a_base() => url,
            Ok(_) | Err(_) => {
                tracing::warn!(endpoint = %raw_endpoint, "ignoring invalid QUIZ_MODEL_ENDPOINT");
                return None;
            }
        };

        let mut config = Self::new(endpoint);
        config.api_key = get("QUIZ_MODEL_API_KEY");
        if let Some(model_id) = get("QUIZ_MODEL_ID") {
            config.model_id = model_id.trim().to_owned();
        }
        config.inference = InferenceSettings {
            max_tokens: parse_or("QUIZ_MAX_TOKENS", get("QUIZ_MAX_TOKENS"), DEFAULT_MAX_TOKENS),
            temperature: parse_or(
                "QUIZ_TEMPERATURE",
                get("QUIZ_TEMPERATURE"),
                DEFAULT_TEMPERATURE,
            ),
            top_p: parse_or("QUIZ_TOP_P", get("QUIZ_TOP_P"), DEFAULT_TOP_P),
        };
        if let Some(expert) = get("QUIZ_EXPLAIN_DOMAIN") {
            config.domain.expert = expert;
        }
        if let Some(platform) = get("QUIZ_EXPLAIN_PLATFORM") {
            config.domain.platform = platform;
        }
        if let Some(role) = get("QUIZ_EXPLAIN_ROLE") {
            config.domain.role = role;
        }
        let timeout_secs = parse_or(
            "QUIZ_REQUEST_TIMEOUT_SECS",
            get("QUIZ_REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT.as_secs(),
        );
        config.request_timeout = Duration::from_secs(timeout_secs);

        Some(config)
    }
}

fn parse_or<T: FromStr + Copy>(name: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(variable = name, value = %raw, "invalid number, using default");
        default
    })
}
