use serde::Deserialize;

/// A Google service-account credential document, as downloaded from the
/// cloud console and written by the setup script.
///
/// `private_key` and `api_key` are secrets; this type deliberately does not
/// implement `Debug` or `Serialize`, so the document can never leak into
/// logs or responses whole.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: Option<String>,
    pub project_id: String,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
    /// Optional API key for query-parameter auth. Not part of the standard
    /// service-account document; accepted when present.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ServiceAccountKey {
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
