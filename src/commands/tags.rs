use crate::cli::SourceArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::filter;

pub async fn run(ctx: &AppContext, args: SourceArgs) -> AppResult<()> {
    let document = ctx.load_document(args.source.as_deref()).await?;
    let projects = document
        .as_ref()
        .map(|document| document.projects.as_slice())
        .unwrap_or_default();

    let options = filter::tag_options(projects);
    ctx.output.emit_lines(&options, &options)
}
