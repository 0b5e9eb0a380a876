use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(profile, json)?;

    match command {
        Command::Render(args) => commands::render::run(&ctx, args).await,
        Command::Projects(args) => commands::projects::run(&ctx, args).await,
        Command::Tags(args) => commands::tags::run(&ctx, args).await,
        Command::Links(args) => commands::links::run(&ctx, args).await,
        Command::Theme(args) => commands::theme::run(&ctx, args.command),
    }
}
