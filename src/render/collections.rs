use crate::data::SkillGroup;
use crate::dom::{Document, Element};
use crate::view::{PageBindings, Slot};

pub(super) fn render_highlights(document: &mut Document, bindings: &PageBindings, highlights: &[String]) {
    let Some(list) = bindings.element_mut(document, Slot::HighlightsList) else {
        return;
    };

    list.clear_children();
    for highlight in highlights {
        list.append_child(Element::new("li").with_text(highlight));
    }
}

pub(super) fn render_skills(document: &mut Document, bindings: &PageBindings, skills: &[SkillGroup]) {
    let Some(grid) = bindings.element_mut(document, Slot::SkillsGrid) else {
        return;
    };

    grid.clear_children();
    for group in skills {
        let chips = group
            .items
            .iter()
            .map(|item| Element::new("span").with_class("tag").with_text(item));

        grid.append_child(
            Element::new("div")
                .with_class("card")
                .with_child(
                    Element::new("div")
                        .with_class("card-title")
                        .with_text(group.group.as_deref().unwrap_or_default()),
                )
                .with_child(Element::new("div").with_class("tags").with_children(chips)),
        );
    }
}
