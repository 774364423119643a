use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

const IMAGE_URL_PREFIX: &str = "https://picsum.photos/200/200?random=";

/// Item identifier as the endpoint sends it: any JSON number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(Number),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of the food catalog; extra fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: ItemId,
    pub name: String,
}

impl FoodItem {
    /// Placeholder picture keyed on the item id
    pub fn image_url(&self) -> String {
        format!("{IMAGE_URL_PREFIX}{}", self.id)
    }
}

/// Outer response body. `response` holds the item list as a JSON string.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Decode a raw response body into catalog items
pub fn parse_catalog(body: &str) -> Result<Vec<FoodItem>> {
    let envelope: ChatResponse =
        serde_json::from_str(body).context("Failed to parse response envelope")?;
    let items: Vec<FoodItem> =
        serde_json::from_str(&envelope.response).context("Failed to parse food list")?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let body = r#"{"response": "[{\"id\": 1, \"name\": \"Margherita\", \"price\": 9.5}, {\"id\": \"b-2\", \"name\": \"Ramen\"}]"}"#;

        let items = parse_catalog(body).unwrap();

        assert_eq!(
            items,
            vec![
                FoodItem {
                    id: ItemId::Number(Number::from(1u64)),
                    name: "Margherita".to_owned()
                },
                FoodItem {
                    id: ItemId::Text("b-2".to_owned()),
                    name: "Ramen".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_image_url_uses_id() {
        let item = FoodItem {
            id: ItemId::Number(Number::from(42u64)),
            name: "Pho".to_owned(),
        };
        assert_eq!(item.image_url(), "https://picsum.photos/200/200?random=42");
    }

    #[test]
    fn test_fractional_and_negative_ids_are_kept() {
        let body = r#"{"response": "[{\"id\": 1.5, \"name\": \"Half\"}, {\"id\": -3, \"name\": \"Minus\"}]"}"#;

        let items = parse_catalog(body).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.to_string(), "1.5");
        assert_eq!(items[0].image_url(), "https://picsum.photos/200/200?random=1.5");
        assert_eq!(items[1].id.to_string(), "-3");
    }

    #[test]
    fn test_parse_catalog_errors() {
        let err = parse_catalog("<html>").unwrap_err();
        assert!(err.to_string().contains("envelope"));

        let err = parse_catalog(r#"{"response": "Sorry, I can't help with that."}"#).unwrap_err();
        assert!(err.to_string().contains("food list"));

        let err = parse_catalog(r#"{"response": "[{\"name\": \"no id\"}]"}"#).unwrap_err();
        assert!(err.to_string().contains("food list"));
    }
}
