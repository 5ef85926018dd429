use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub title: String,
    pub rating: f64,
}

impl RatedItem {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Result of running an [`Operation`](crate::domain::ports::Operation).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Output {
    Text(String),
    Number(f64),
    Numbers(Vec<f64>),
    Values(Vec<serde_json::Value>),
    Items(Vec<RatedItem>),
    Product(Option<Product>),
}

impl Output {
    /// Plain rendering for terminal output.
    pub fn render(&self) -> String {
        match self {
            Output::Text(text) => text.clone(),
            Output::Number(n) => n.to_string(),
            Output::Numbers(ns) => ns
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            Output::Values(values) => serde_json::Value::Array(values.clone()).to_string(),
            Output::Items(items) => serde_json::to_string(items).unwrap_or_default(),
            Output::Product(Some(product)) => serde_json::to_string(product).unwrap_or_default(),
            Output::Product(None) => "null".to_string(),
        }
    }
}
