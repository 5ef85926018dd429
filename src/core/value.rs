use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Number(f64),
    Text(String),
}

impl From<&str> for TextOrNumber {
    fn from(text: &str) -> Self {
        TextOrNumber::Text(text.to_string())
    }
}

impl From<String> for TextOrNumber {
    fn from(text: String) -> Self {
        TextOrNumber::Text(text)
    }
}

impl From<f64> for TextOrNumber {
    fn from(n: f64) -> Self {
        TextOrNumber::Number(n)
    }
}

/// Character count for text, twice the value for numbers.
pub fn length_or_double(value: &TextOrNumber) -> f64 {
    match value {
        TextOrNumber::Text(text) => text.chars().count() as f64,
        TextOrNumber::Number(n) => n * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length() {
        assert_eq!(length_or_double(&"abc".into()), 3.0);
        assert_eq!(length_or_double(&"".into()), 0.0);
        assert_eq!(length_or_double(&"héllo".into()), 5.0);
    }

    #[test]
    fn test_number_doubled() {
        assert_eq!(length_or_double(&4.0.into()), 8.0);
        assert_eq!(length_or_double(&(-1.5).into()), -3.0);
    }

    #[test]
    fn test_untagged_json() {
        let values: Vec<TextOrNumber> = serde_json::from_str(r#"["abc", 4]"#).unwrap();
        assert_eq!(values, vec![TextOrNumber::from("abc"), TextOrNumber::from(4.0)]);
    }
}
