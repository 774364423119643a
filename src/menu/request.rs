use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://apihub.p.appply.xyz:3300/chatgpt";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_PROMPT: &str = "Provide a list of food items for an online food delivery app.";

/// Where and how the food catalog is requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub endpoint: String,
    pub model: String,
    pub prompt: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            prompt: DEFAULT_PROMPT.to_owned(),
        }
    }
}

impl MenuConfig {
    pub fn request(&self) -> ChatRequest {
        ChatRequest::new(&self.model, &self.prompt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat-style request body understood by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
}

impl ChatRequest {
    /// Single user message asking `model` for `prompt`
    pub fn new(model: &str, prompt: &str) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: "user".to_owned(),
                content: prompt.to_owned(),
            }],
            model: model.to_owned(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_request_payload() {
        let request = MenuConfig::default().request();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "messages": [{"role": "user", "content": DEFAULT_PROMPT}],
                "model": "gpt-4o"
            })
        );
    }

    #[test]
    fn test_menu_config_partial_override() {
        let config: MenuConfig = serde_json::from_str(r#"{"model": "small-model"}"#).unwrap();
        assert_eq!(config.model, "small-model");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request().messages[0].content, DEFAULT_PROMPT);
    }
}
