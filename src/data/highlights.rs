use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_ROTATE_MS: u64 = 2600;
const MIN_ROTATE_MS: u64 = 800;
const MAX_ROTATE_MS: u64 = 12_000;
const DEFAULT_JUMP_TARGET: &str = "#projects";

/// Optional overlay document (`highlights.json`) layered on top of the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightsConfig {
    #[serde(default)]
    pub hero_highlights: Vec<HeroHighlight>,
    #[serde(default)]
    pub section_highlights: Vec<SectionHighlight>,
    #[serde(default)]
    pub spotlight: Option<Spotlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroHighlight {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl HeroHighlight {
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or("✨")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHighlight {
    pub section_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
}

impl SectionHighlight {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Highlights")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spotlight {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rotate_every_ms: Option<u64>,
    #[serde(default)]
    pub items: Vec<SpotlightItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub section_id: Option<String>,
}

impl SpotlightItem {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Spotlight")
    }

    pub fn jump_target(&self) -> String {
        match self.section_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => format!("#{id}"),
            None => DEFAULT_JUMP_TARGET.to_string(),
        }
    }
}

impl Spotlight {
    pub fn is_active(&self) -> bool {
        self.enabled && !self.items.is_empty()
    }

    /// Rotation period, clamped to 800..=12000 ms.
    pub fn interval(&self) -> Duration {
        let millis = self
            .rotate_every_ms
            .unwrap_or(DEFAULT_ROTATE_MS)
            .clamp(MIN_ROTATE_MS, MAX_ROTATE_MS);
        Duration::from_millis(millis)
    }

    pub fn item_at(&self, tick: usize) -> Option<&SpotlightItem> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(tick % self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spotlight(rotate_every_ms: Option<u64>, titles: &[&str]) -> Spotlight {
        Spotlight {
            enabled: true,
            rotate_every_ms,
            items: titles
                .iter()
                .map(|title| SpotlightItem {
                    title: Some(title.to_string()),
                    ..SpotlightItem::default()
                })
                .collect(),
        }
    }

    #[test]
    fn clamps_rotation_interval() {
        assert_eq!(spotlight(None, &[]).interval(), Duration::from_millis(2600));
        assert_eq!(spotlight(Some(10), &[]).interval(), Duration::from_millis(800));
        assert_eq!(
            spotlight(Some(60_000), &[]).interval(),
            Duration::from_millis(12_000)
        );
    }

    #[test]
    fn rotates_through_items() {
        let spotlight = spotlight(None, &["a", "b", "c"]);
        let titles = (0..5)
            .filter_map(|tick| spotlight.item_at(tick))
            .map(SpotlightItem::title)
            .collect::<Vec<_>>();
        assert_eq!(titles, ["a", "b", "c", "a", "b"]);
    }

    #[test]
    fn jump_target_defaults_to_projects() {
        let item = SpotlightItem::default();
        assert_eq!(item.jump_target(), "#projects");

        let item = SpotlightItem {
            section_id: Some("skills".to_string()),
            ..SpotlightItem::default()
        };
        assert_eq!(item.jump_target(), "#skills");
    }

    #[test]
    fn parses_camel_case_overlay() {
        let raw = r#"{
            "heroHighlights": [{ "label": "Focus", "value": "ML" }],
            "sectionHighlights": [{ "sectionId": "projects", "points": ["a", "b"] }],
            "spotlight": { "enabled": true, "rotateEveryMs": 4000, "items": [{ "title": "Flood", "sectionId": "projects" }] }
        }"#;
        let config: HighlightsConfig = serde_json::from_str(raw).expect("overlay parses");

        assert_eq!(config.hero_highlights[0].icon(), "✨");
        assert_eq!(config.section_highlights[0].title(), "Highlights");
        let spotlight = config.spotlight.expect("spotlight present");
        assert!(spotlight.is_active());
        assert_eq!(spotlight.interval(), Duration::from_millis(4000));
    }
}
