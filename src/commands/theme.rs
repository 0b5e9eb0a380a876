use serde::Serialize;

use crate::cli::ThemeCommand;
use crate::config::{Theme, ThemeStore};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct ThemeView {
    theme: Theme,
    stored: bool,
}

pub fn run(ctx: &AppContext, command: ThemeCommand) -> AppResult<()> {
    let store = &ctx.theme_store;

    let view = match command {
        ThemeCommand::Get => match store.load(&ctx.profile)? {
            Some(theme) => ThemeView {
                theme,
                stored: true,
            },
            None => ThemeView {
                theme: Theme::system_preference(),
                stored: false,
            },
        },
        ThemeCommand::Set { theme } => {
            store.save(&ctx.profile, theme)?;
            ThemeView {
                theme,
                stored: true,
            }
        }
        ThemeCommand::Toggle => {
            let theme = store.resolve(&ctx.profile)?.toggled();
            store.save(&ctx.profile, theme)?;
            ThemeView {
                theme,
                stored: true,
            }
        }
    };

    let text = if view.stored {
        view.theme.to_string()
    } else {
        format!("{} (system preference)", view.theme)
    };
    ctx.output.emit(&text, &view)
}
