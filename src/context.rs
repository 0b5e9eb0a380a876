use crate::config::{self, AppPaths, FileThemeStore, Settings, ThemeStore};
use crate::data::{HighlightsConfig, Loader, PortfolioDocument};
use crate::error::AppResult;
use crate::output::Output;
use crate::state::AppState;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub paths: AppPaths,
    pub settings: Settings,
    pub theme_store: FileThemeStore,
    pub loader: Loader,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        let theme_store = FileThemeStore::new(paths.clone());
        let loader = Loader::new();
        let output = Output::new(json);

        tracing::debug!(profile = %profile, config_dir = %paths.config_dir().display(), "context ready");

        Ok(Self {
            profile,
            paths,
            settings,
            theme_store,
            loader,
            output,
        })
    }

    /// Loads the profile document once. A failed load is logged and yields `None`.
    pub async fn load_document(&self, requested: Option<&str>) -> AppResult<Option<PortfolioDocument>> {
        let source = self.settings.data_source(requested)?;
        Ok(self.loader.load(&source).await)
    }

    pub async fn load_highlights(&self, requested: Option<&str>) -> AppResult<Option<HighlightsConfig>> {
        let Some(source) = self.settings.highlights_source(requested)? else {
            return Ok(None);
        };
        Ok(self.loader.load(&source).await)
    }

    pub async fn load_state(
        &self,
        document_source: Option<&str>,
        highlights_source: Option<&str>,
    ) -> AppResult<AppState> {
        let document = self.load_document(document_source).await?;
        let highlights = self.load_highlights(highlights_source).await?;
        let theme = self.theme_store.resolve(&self.profile)?;
        Ok(AppState::new(document, highlights, theme))
    }
}
