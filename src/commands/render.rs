use std::fs;
use std::path::PathBuf;

use chrono::Datelike;
use serde::Serialize;

use crate::cli::RenderArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::filter::Filter;
use crate::layout;
use crate::render::{RenderSummary, Renderer};
use crate::view::{self, PageDescriptor, Variant};

#[derive(Debug, Serialize)]
struct RenderReport {
    variant: Variant,
    output: Option<PathBuf>,
    filter: Filter,
    #[serde(flatten)]
    summary: RenderSummary,
}

pub async fn run(ctx: &AppContext, args: RenderArgs) -> AppResult<()> {
    let variant = ctx.settings.variant(args.variant);
    let state = ctx
        .load_state(args.source.source.as_deref(), args.highlights.as_deref())
        .await?;
    let filter = Filter::new(args.filter.q.as_deref(), Some(args.filter.tag.as_str()));

    let descriptor = PageDescriptor::for_variant(variant);
    let mut document = layout::skeleton(&descriptor);
    let renderer = Renderer::new(view::bind(&document, &descriptor)?);
    let year = chrono::Local::now().year();
    let summary = renderer.render(&mut document, &state, &filter, year);
    let html = document.to_html();

    let output = args.out.or_else(|| ctx.settings.output_path.clone());
    let Some(path) = output else {
        // HTML owns stdout here, so the JSON report goes to stderr.
        print!("{html}");
        let report = RenderReport {
            variant,
            output: None,
            filter,
            summary,
        };
        return ctx.output.emit_side_report(&report);
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html)?;
    tracing::info!(path = %path.display(), variant = %variant, "page written");

    let text = describe(&summary, variant, &path);
    let report = RenderReport {
        variant,
        output: Some(path),
        filter,
        summary,
    };
    ctx.output.emit(&text, &report)
}

fn describe(summary: &RenderSummary, variant: Variant, path: &std::path::Path) -> String {
    if !summary.loaded {
        return format!(
            "wrote {variant} page to {} (profile document unavailable; nothing rendered)",
            path.display()
        );
    }

    format!(
        "wrote {variant} page to {} ({} of {} projects shown)",
        path.display(),
        summary.visible_projects,
        summary.total_projects
    )
}
