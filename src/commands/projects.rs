use serde::Serialize;

use crate::cli::ProjectsArgs;
use crate::context::AppContext;
use crate::data::Project;
use crate::error::AppResult;
use crate::filter::Filter;
use crate::output::OutputMode;

const NO_RESULTS: &str = "No projects match your filters.";

#[derive(Debug, Serialize)]
struct ProjectView<'a> {
    title: &'a str,
    summary: &'a str,
    tags: &'a [String],
}

impl<'a> From<&'a Project> for ProjectView<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            title: project.title(),
            summary: project.summary(),
            tags: &project.tags,
        }
    }
}

pub async fn run(ctx: &AppContext, args: ProjectsArgs) -> AppResult<()> {
    let document = ctx.load_document(args.source.source.as_deref()).await?;
    let projects = document
        .as_ref()
        .map(|document| document.projects.as_slice())
        .unwrap_or_default();

    let filter = Filter::new(args.filter.q.as_deref(), Some(args.filter.tag.as_str()));
    let visible = filter.apply(projects);

    if ctx.output.mode() == OutputMode::Json {
        let views = visible.iter().copied().map(ProjectView::from).collect::<Vec<_>>();
        return ctx.output.emit("", &views);
    }

    ctx.output.emit_lines(&format_lines(&visible), &())
}

fn format_lines(visible: &[&Project]) -> Vec<String> {
    if visible.is_empty() {
        return vec![NO_RESULTS.to_string()];
    }

    visible
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let mut line = format!("{}. {}", index + 1, project.title());
            if !project.tags.is_empty() {
                line.push_str(&format!(" [{}]", project.tags.join(", ")));
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_prints_placeholder() {
        assert_eq!(format_lines(&[]), [NO_RESULTS]);
    }

    #[test]
    fn numbers_titles_with_tags() {
        let project = Project {
            title: Some("Flood".to_string()),
            tags: vec!["ml".to_string(), "api".to_string()],
            ..Project::default()
        };
        let bare = Project {
            title: Some("Dash".to_string()),
            ..Project::default()
        };
        assert_eq!(
            format_lines(&[&project, &bare]),
            ["1. Flood [ml, api]", "2. Dash"]
        );
    }
}
