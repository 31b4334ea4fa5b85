use std::fmt;

use serde::Deserialize;

/// Sticker identifiers show up both as JSON strings and as integers.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum StickerId {
    Number(u64),
    Text(String),
}

impl fmt::Display for StickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StickerId::Number(n) => write!(f, "{}", n),
            StickerId::Text(s) => f.write_str(s),
        }
    }
}

/// One catalog entry, decoded from a `data-preview` attribute.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StickerRecord {
    pub id: StickerId,
    #[serde(default)]
    pub static_url: Option<String>,
    #[serde(default)]
    pub fallback_static_url: Option<String>,
    #[serde(default)]
    pub animation_url: Option<String>,
    #[serde(default)]
    pub popup_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Sticker,
    Emoji,
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKind::Sticker => f.write_str("sticker"),
            ProductKind::Emoji => f.write_str("emoji"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRequest {
    pub product_id: String,
    pub kind: ProductKind,
}

impl ProductRequest {
    pub fn new(product_id: impl Into<String>, kind: ProductKind) -> Self {
        Self {
            product_id: product_id.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_numeric_and_string_ids() {
        let numeric: StickerRecord =
            serde_json::from_str(r#"{"id": 1, "staticUrl": "https://x/1.png"}"#).unwrap();
        assert_eq!(numeric.id, StickerId::Number(1));
        assert_eq!(numeric.id.to_string(), "1");
        assert_eq!(numeric.static_url.as_deref(), Some("https://x/1.png"));
        assert!(numeric.popup_url.is_none());

        let text: StickerRecord = serde_json::from_str(
            r#"{"type": "animation", "id": "651763951", "popupUrl": "", "soundUrl": ""}"#,
        )
        .unwrap();
        assert_eq!(text.id.to_string(), "651763951");
        assert_eq!(text.popup_url.as_deref(), Some(""));
    }

    #[test]
    fn test_record_requires_id() {
        let result = serde_json::from_str::<StickerRecord>(r#"{"staticUrl": "https://x/1.png"}"#);
        assert!(result.is_err());
    }
}
