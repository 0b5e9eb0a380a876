use crate::config::Theme;
use crate::data::{HighlightsConfig, PortfolioDocument, Project};

/// Everything loaded for one page view. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    document: Option<PortfolioDocument>,
    highlights: Option<HighlightsConfig>,
    theme: Theme,
}

impl AppState {
    pub fn new(
        document: Option<PortfolioDocument>,
        highlights: Option<HighlightsConfig>,
        theme: Theme,
    ) -> Self {
        Self {
            document,
            highlights,
            theme,
        }
    }

    pub fn document(&self) -> Option<&PortfolioDocument> {
        self.document.as_ref()
    }

    pub fn highlights(&self) -> Option<&HighlightsConfig> {
        self.highlights.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Loaded projects, or an empty slice when the document failed to load.
    pub fn projects(&self) -> &[Project] {
        self.document
            .as_ref()
            .map(|document| document.projects.as_slice())
            .unwrap_or_default()
    }
}
