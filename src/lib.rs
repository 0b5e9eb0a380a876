pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod data;
pub mod dom;
pub mod error;
pub mod filter;
pub mod layout;
pub mod logging;
pub mod output;
pub mod render;
pub mod state;
pub mod view;

use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
