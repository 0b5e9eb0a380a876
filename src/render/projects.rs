use crate::data::Project;
use crate::dom::{Document, Element};
use crate::filter::{self, Filter};
use crate::view::{CardStyle, PageBindings, Slot};

use super::links;

const MAX_CARD_HIGHLIGHTS: usize = 3;

pub(super) fn render_tag_options(
    document: &mut Document,
    bindings: &PageBindings,
    projects: &[Project],
    filter: &Filter,
) {
    let Some(select) = bindings.element_mut(document, Slot::TagFilter) else {
        return;
    };

    select.clear_children();
    for tag in filter::tag_options(projects) {
        select.append_child(
            Element::new("option")
                .with_attr("value", &tag)
                .with_text(&tag),
        );
    }
    select_tag(document, bindings, filter);
}

/// Marks the option matching the filter's tag as selected.
pub(super) fn select_tag(document: &mut Document, bindings: &PageBindings, filter: &Filter) {
    let Some(select) = bindings.element_mut(document, Slot::TagFilter) else {
        return;
    };

    let selected = filter.tag().as_str();
    for option in select.children_mut() {
        if option.attr("value") == Some(selected) {
            option.set_attr("selected", "selected");
        } else {
            option.remove_attr("selected");
        }
    }
}

pub(super) fn render_projects(document: &mut Document, bindings: &PageBindings, visible: &[&Project]) {
    let card_style = bindings.card_style();

    if let Some(grid) = bindings.element_mut(document, Slot::ProjectsGrid) {
        grid.clear_children();
        for project in visible {
            grid.append_child(match card_style {
                CardStyle::Compact => compact_card(project),
                CardStyle::Actions => action_card(project),
            });
        }
    }

    if let Some(empty) = bindings.element_mut(document, Slot::EmptyState) {
        let show = visible.is_empty();
        empty.set_hidden(!show);
        if show {
            empty.remove_class("hidden");
        } else {
            empty.add_class("hidden");
        }
    }
}

fn tag_chips(project: &Project) -> Element {
    Element::new("div").with_class("tags").with_children(
        project
            .tags
            .iter()
            .map(|tag| Element::new("span").with_class("tag").with_text(tag)),
    )
}

fn compact_card(project: &Project) -> Element {
    let highlights = project
        .highlights
        .iter()
        .take(MAX_CARD_HIGHLIGHTS)
        .map(|highlight| Element::new("li").with_text(highlight));

    let mut links_row = Element::new("div").with_class("links");
    for (label, href) in [
        ("Repo", project.links.source()),
        ("Live Demo", project.links.demo()),
    ] {
        let mut anchor = Element::new("a").with_class("link-btn").with_text(label);
        if links::bind(&mut anchor, href).is_enabled() {
            links_row.append_child(anchor);
        }
    }

    Element::new("div")
        .with_class("card project")
        .with_child(Element::new("h3").with_text(project.title()))
        .with_child(Element::new("p").with_class("one").with_text(project.summary()))
        .with_child(tag_chips(project))
        .with_child(Element::new("ul").with_class("list").with_children(highlights))
        .with_child(links_row)
}

fn action_card(project: &Project) -> Element {
    let title = Some(project.title())
        .filter(|title| !title.is_empty())
        .unwrap_or("Project");

    let mut actions = Element::new("div").with_class("project-actions");
    for (class, label, href) in [
        ("project-live", "Live", project.links.live()),
        ("project-github", "GitHub", project.links.github()),
        ("project-gitlab", "GitLab", project.links.gitlab.as_deref()),
        ("project-report", "Report", project.links.report.as_deref()),
    ] {
        let mut anchor = Element::new("a")
            .with_class("btn ghost")
            .with_class(class)
            .with_text(label);
        let target = links::bind(&mut anchor, href);
        anchor.set_hidden(!target.is_enabled());
        actions.append_child(anchor);
    }

    Element::new("div")
        .with_class("card")
        .with_child(Element::new("h3").with_text(title))
        .with_child(Element::new("p").with_text(project.summary()))
        .with_child(tag_chips(project))
        .with_child(actions)
}
