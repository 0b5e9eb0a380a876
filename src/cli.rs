use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::Theme;
use crate::filter::ALL_TAGS;
use crate::view::Variant;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Render a portfolio page from its JSON profile")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Site profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Render(RenderArgs),
    Projects(ProjectsArgs),
    Tags(SourceArgs),
    Links(SourceArgs),
    Theme(ThemeArgs),
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(long, help = "Profile document: http(s) URL or file path")]
    pub source: Option<String>,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(long, help = "Case-insensitive text query")]
    pub q: Option<String>,
    #[arg(long, default_value = ALL_TAGS, help = "Only projects carrying this tag")]
    pub tag: String,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[arg(long, help = "Highlights overlay: http(s) URL or file path")]
    pub highlights: Option<String>,
    #[arg(long, value_enum, help = "Page variant to render")]
    pub variant: Option<Variant>,
    #[command(flatten)]
    pub filter: FilterArgs,
    #[arg(long, help = "Write the page here instead of stdout")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    Get,
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
    Toggle,
}
