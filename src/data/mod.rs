pub mod highlights;
pub mod loader;
pub mod models;

pub use highlights::{HighlightsConfig, Spotlight};
pub use loader::{DataSource, Loader};
pub use models::{PortfolioDocument, Profile, ProfileLinks, Project, ProjectLinks, SkillGroup};
