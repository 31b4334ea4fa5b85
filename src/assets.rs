//! Picking the one asset to download for a catalog entry.

use crate::models::StickerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Popup,
    Animation,
    Static,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtensionRule {
    /// `.png` if the URL mentions png, `.gif` otherwise.
    SniffPng,
    AlwaysPng,
}

impl ExtensionRule {
    fn extension(self, url: &str) -> &'static str {
        match self {
            ExtensionRule::SniffPng if !url.contains("png") => ".gif",
            _ => ".png",
        }
    }
}

/// Highest priority first.
const PRIORITY: [(AssetKind, &str, ExtensionRule); 4] = [
    (AssetKind::Popup, "_popup", ExtensionRule::SniffPng),
    (AssetKind::Animation, "_anim", ExtensionRule::SniffPng),
    (AssetKind::Static, "", ExtensionRule::AlwaysPng),
    (AssetKind::Fallback, "_fallback", ExtensionRule::AlwaysPng),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenAsset {
    pub kind: AssetKind,
    pub url: String,
    pub file_name: String,
}

impl StickerRecord {
    fn url_for(&self, kind: AssetKind) -> Option<&str> {
        let url = match kind {
            AssetKind::Popup => &self.popup_url,
            AssetKind::Animation => &self.animation_url,
            AssetKind::Static => &self.static_url,
            AssetKind::Fallback => &self.fallback_static_url,
        };
        url.as_deref().filter(|u| !u.is_empty())
    }
}

pub fn select_asset(record: &StickerRecord) -> Option<ChosenAsset> {
    PRIORITY.iter().find_map(|&(kind, suffix, rule)| {
        let url = record.url_for(kind)?;
        Some(ChosenAsset {
            kind,
            url: url.to_string(),
            file_name: format!("{}{}{}", record.id, suffix, rule.extension(url)),
        })
    })
}
