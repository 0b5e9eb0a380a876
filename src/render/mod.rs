//! One-way rendering of loaded state into a bound page.
//!
//! Every list region is fully cleared before it is repopulated, so rendering
//! the same state twice yields the same document.

mod collections;
mod header;
pub mod links;
mod overlay;
mod projects;

use serde::Serialize;

use crate::config::Theme;
use crate::dom::Document;
use crate::filter::Filter;
use crate::state::AppState;
use crate::view::{PageBindings, Slot};

pub use links::{DisabledReason, LinkTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub loaded: bool,
    pub total_projects: usize,
    pub visible_projects: usize,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    bindings: PageBindings,
}

impl Renderer {
    pub fn new(bindings: PageBindings) -> Self {
        Self { bindings }
    }

    pub fn render(
        &self,
        document: &mut Document,
        state: &AppState,
        filter: &Filter,
        year: i32,
    ) -> RenderSummary {
        apply_theme(document, &self.bindings, state.theme());
        if let Some(element) = self.bindings.element_mut(document, Slot::Year) {
            element.set_text(Some(year.to_string().as_str()));
        }

        if let Some(overlay) = state.highlights() {
            overlay::render(document, &self.bindings, overlay);
        }

        let Some(data) = state.document() else {
            tracing::debug!(variant = %self.bindings.variant(), "no portfolio document; page left unrendered");
            return RenderSummary {
                loaded: false,
                total_projects: 0,
                visible_projects: 0,
            };
        };

        header::render(document, &self.bindings, &data.profile);
        collections::render_highlights(document, &self.bindings, &data.highlights);
        collections::render_skills(document, &self.bindings, &data.skills);
        projects::render_tag_options(document, &self.bindings, &data.projects, filter);

        let visible_projects = self.apply_filter(document, state, filter);
        RenderSummary {
            loaded: true,
            total_projects: data.projects.len(),
            visible_projects,
        }
    }

    /// Rebuilds the project grid for `filter` without touching other regions.
    /// Returns the number of visible projects.
    pub fn apply_filter(&self, document: &mut Document, state: &AppState, filter: &Filter) -> usize {
        let visible = filter.apply(state.projects());
        if let Some(search) = self.bindings.element_mut(document, Slot::Search) {
            search.set_attr("value", filter.query());
        }
        projects::select_tag(document, &self.bindings, filter);
        projects::render_projects(document, &self.bindings, &visible);

        tracing::debug!(
            query = filter.query(),
            tag = %filter.tag(),
            visible = visible.len(),
            "project filter applied"
        );
        visible.len()
    }
}

fn apply_theme(document: &mut Document, bindings: &PageBindings, theme: Theme) {
    document.root_mut().set_attr("data-theme", theme.as_str());
    if let Some(button) = bindings.element_mut(document, Slot::ThemeButton) {
        button.set_text(Some(theme.button_label()));
    }
}

/// Sets text on a slot when this page variant declares it.
fn set_slot_text(document: &mut Document, bindings: &PageBindings, slot: Slot, text: Option<&str>) {
    if let Some(element) = bindings.element_mut(document, slot) {
        element.set_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PortfolioDocument, Project};
    use crate::layout;
    use crate::view::{PageDescriptor, bind};

    fn page(descriptor: &PageDescriptor) -> (Document, Renderer) {
        let document = layout::skeleton(descriptor);
        let bindings = bind(&document, descriptor).expect("skeleton binds");
        (document, Renderer::new(bindings))
    }

    fn sample_state() -> AppState {
        let document = PortfolioDocument {
            projects: vec![
                Project {
                    title: Some("A".to_string()),
                    tags: vec!["ml".to_string()],
                    ..Project::default()
                },
                Project {
                    title: Some("B".to_string()),
                    tags: vec!["web".to_string()],
                    ..Project::default()
                },
            ],
            ..PortfolioDocument::default()
        };
        AppState::new(Some(document), None, Theme::Light)
    }

    #[test]
    fn applies_theme_to_root_and_button() {
        let (mut document, renderer) = page(&PageDescriptor::portfolio());
        renderer.render(&mut document, &sample_state(), &Filter::default(), 2026);

        assert_eq!(document.root().attr("data-theme"), Some("light"));
        assert_eq!(
            document.element("themeBtn").and_then(|button| button.text()),
            Some("🌙")
        );
        assert_eq!(document.element("year").and_then(|year| year.text()), Some("2026"));
    }

    #[test]
    fn unloaded_state_renders_no_projects() {
        let (mut document, renderer) = page(&PageDescriptor::portfolio());
        let summary = renderer.render(&mut document, &AppState::default(), &Filter::default(), 2026);

        assert!(!summary.loaded);
        assert_eq!(summary.visible_projects, 0);
        let grid = document.element("projectsGrid").expect("grid exists");
        assert!(grid.children().is_empty());
        let empty = document.element("emptyState").expect("placeholder exists");
        assert!(empty.has_class("hidden"));
        assert!(!document.to_html().contains("undefined"));
    }

    #[test]
    fn refiltering_replaces_the_grid() {
        let (mut document, renderer) = page(&PageDescriptor::portfolio());
        let state = sample_state();
        renderer.render(&mut document, &state, &Filter::default(), 2026);
        assert_eq!(document.element("projectsGrid").map(|grid| grid.children().len()), Some(2));

        let visible = renderer.apply_filter(&mut document, &state, &Filter::new(Some("b"), None));
        assert_eq!(visible, 1);
        let grid = document.element("projectsGrid").expect("grid exists");
        assert_eq!(grid.children().len(), 1);
        assert!(grid.text_content().contains('B'));
        assert_eq!(document.element("search").and_then(|search| search.attr("value")), Some("b"));
    }
}
