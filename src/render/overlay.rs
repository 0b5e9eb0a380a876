use crate::data::HighlightsConfig;
use crate::data::highlights::{SectionHighlight, Spotlight};
use crate::dom::{Document, Element};
use crate::view::{PageBindings, Slot};

const HERO_ROW_ID: &str = "hlHeroRow";
const SPOTLIGHT_ID: &str = "hlSpotlight";
const PANEL_ATTR: &str = "data-hl-panel";

pub(super) fn render(document: &mut Document, bindings: &PageBindings, config: &HighlightsConfig) {
    if let Some(hero) = bindings.element_mut(document, Slot::Hero) {
        hero.remove_child_by_id(HERO_ROW_ID);
        if !config.hero_highlights.is_empty() {
            hero.append_child(hero_row(config));
        }

        hero.remove_child_by_id(SPOTLIGHT_ID);
        if let Some(spotlight) = config.spotlight.as_ref().filter(|spotlight| spotlight.is_active()) {
            hero.append_child(spotlight_box(spotlight, 0));
        }
    }

    for section in &config.section_highlights {
        insert_section_panel(document, section);
    }
}

fn hero_row(config: &HighlightsConfig) -> Element {
    let pills = config.hero_highlights.iter().map(|highlight| {
        Element::new("div")
            .with_class("hl-pill")
            .with_child(
                Element::new("span")
                    .with_attr("aria-hidden", "true")
                    .with_text(highlight.icon()),
            )
            .with_child(
                Element::new("div")
                    .with_child(
                        Element::new("b").with_text(highlight.label.as_deref().unwrap_or_default()),
                    )
                    .with_child(Element::new("br"))
                    .with_child(
                        Element::new("span")
                            .with_text(highlight.value.as_deref().unwrap_or_default()),
                    ),
            )
    });

    Element::new("div")
        .with_id(HERO_ROW_ID)
        .with_class("hl-hero-row scroll-reveal")
        .with_children(pills)
}

/// Spotlight box showing the item for rotation `tick`.
fn spotlight_box(spotlight: &Spotlight, tick: usize) -> Element {
    let item = spotlight.item_at(tick).cloned().unwrap_or_default();
    let interval = spotlight.interval().as_millis().to_string();

    Element::new("div")
        .with_id(SPOTLIGHT_ID)
        .with_class("hl-spotlight scroll-reveal")
        .with_attr("data-rotate-ms", &interval)
        .with_child(
            Element::new("div")
                .with_class("meta")
                .with_child(Element::new("b").with_id("hlSpotTitle").with_text(item.title()))
                .with_child(
                    Element::new("small")
                        .with_id("hlSpotNote")
                        .with_class("muted")
                        .with_text(item.note.as_deref().unwrap_or_default()),
                ),
        )
        .with_child(
            Element::new("a")
                .with_id("hlSpotJump")
                .with_attr("href", &item.jump_target())
                .with_text("Jump →"),
        )
}

fn insert_section_panel(document: &mut Document, highlight: &SectionHighlight) {
    let Some(section) = document.element_mut(&highlight.section_id) else {
        tracing::debug!(section = %highlight.section_id, "highlight section not on page");
        return;
    };

    if section.contains_attr(PANEL_ATTR, &highlight.section_id) {
        return;
    }

    let points = highlight
        .points
        .iter()
        .map(|point| Element::new("li").with_class("hl-point").with_text(point));
    let panel = Element::new("div")
        .with_class("hl-panel scroll-reveal")
        .with_attr(PANEL_ATTR, &highlight.section_id)
        .with_child(Element::new("div").with_class("hl-title").with_text(highlight.title()))
        .with_child(Element::new("ul").with_class("hl-points").with_children(points));

    let index = section
        .child_position_with_class("section-head")
        .map_or(0, |position| position + 1);
    section.insert_child(index, panel);
}
