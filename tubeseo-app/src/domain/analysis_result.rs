use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// SEO package generated for one piece of news content.
///
/// `trend_analysis` and `explanation` are only serialized when present; a
/// present-but-empty string is kept as such. Keys the model adds beyond the
/// known ones are carried in `extra` and serialized alongside them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    /// Parses the JSON object the model wrote into its message content.
    /// A missing content is read as `{}`; text that is not a JSON object is
    /// an error.
    pub fn from_model_reply(content: Option<&str>) -> Result<Self, serde_json::Error> {
        let raw = match content.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(raw) => raw,
        };

        match serde_json::from_str::<Value>(raw)? {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Each known field is read on its own: a null or mistyped value falls
    /// back to that field's default without touching the others.
    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let title = match fields.remove("title") {
            Some(Value::String(title)) => title,
            _ => String::new(),
        };
        let tags = string_list(fields.remove("tags"));
        let hashtags = string_list(fields.remove("hashtags"));
        let trend_analysis = optional_string(fields.remove("trendAnalysis"));
        let explanation = optional_string(fields.remove("explanation"));

        Self {
            title,
            tags,
            hashtags,
            trend_analysis,
            explanation,
            extra: fields,
        }
    }

    pub fn normalize_hashtags(mut self) -> Self {
        self.hashtags = self.hashtags.iter().map(|tag| normalize_hashtag(tag)).collect();
        self
    }

    pub fn tags_text(&self) -> String {
        self.tags.join(", ")
    }

    pub fn hashtags_text(&self) -> String {
        self.hashtags.join(" ")
    }
}

/// Strings of an array, skipping entries of any other type.
fn string_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn optional_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn normalize_hashtag(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{tag}")
    }
}
