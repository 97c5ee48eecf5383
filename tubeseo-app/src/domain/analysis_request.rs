use serde::{Deserialize, Deserializer, Serialize};

/// What the page (or any JSON client) submits for analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl AnalysisRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// The caller-supplied key, or `None` when it is missing or blank.
    pub fn supplied_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
