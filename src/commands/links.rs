use serde::Serialize;

use crate::cli::SourceArgs;
use crate::context::AppContext;
use crate::data::PortfolioDocument;
use crate::error::AppResult;
use crate::render::links::{self, DisabledReason};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct LinkReport {
    owner: String,
    field: &'static str,
    value: Option<String>,
    href: Option<String>,
    disabled: Option<DisabledReason>,
}

pub async fn run(ctx: &AppContext, args: SourceArgs) -> AppResult<()> {
    let Some(document) = ctx.load_document(args.source.as_deref()).await? else {
        return ctx.output.emit("profile document unavailable", &Vec::<LinkReport>::new());
    };

    let reports = audit(&document);
    let lines = reports.iter().map(format_line).collect::<Vec<_>>();
    ctx.output.emit_lines(&lines, &reports)
}

/// Runs every authored link field through the safe-link policy.
fn audit(document: &PortfolioDocument) -> Vec<LinkReport> {
    let profile = &document.profile;
    let owner = profile.name.clone().unwrap_or_else(|| "profile".to_string());
    let mailto = profile.mailto();

    let mut reports = vec![
        report(&owner, "email", mailto.as_deref()),
        report(&owner, "resume", profile.links.resume.as_deref()),
        report(&owner, "github", profile.links.github.as_deref()),
        report(&owner, "gitlab", profile.links.gitlab.as_deref()),
        report(&owner, "linkedin", profile.links.linkedin.as_deref()),
    ];

    for (index, project) in document.projects.iter().enumerate() {
        let owner = match project.title() {
            "" => format!("project #{}", index + 1),
            title => title.to_string(),
        };
        let fields = &project.links;
        for (field, value) in [
            ("repo", fields.repo.as_deref()),
            ("github", fields.github.as_deref()),
            ("gitlab", fields.gitlab.as_deref()),
            ("live", fields.live.as_deref()),
            ("demo", fields.demo.as_deref()),
            ("report", fields.report.as_deref()),
        ] {
            if value.is_some() {
                reports.push(report(&owner, field, value));
            }
        }
    }

    reports
}

fn report(owner: &str, field: &'static str, value: Option<&str>) -> LinkReport {
    let target = links::classify(value);
    LinkReport {
        owner: owner.to_string(),
        field,
        value: value.map(ToOwned::to_owned),
        href: target.href().map(ToOwned::to_owned),
        disabled: target.disabled_reason(),
    }
}

fn format_line(report: &LinkReport) -> String {
    let status = match (&report.href, report.disabled) {
        (Some(href), _) => format!("ok -> {href}"),
        (None, Some(DisabledReason::Missing)) => "disabled (missing)".to_string(),
        (None, Some(DisabledReason::Malformed)) => "disabled (malformed url)".to_string(),
        (None, Some(DisabledReason::UnsafeScheme)) => "disabled (unsafe scheme)".to_string(),
        (None, None) => "disabled".to_string(),
    };
    format!("{} / {}: {status}", report.owner, report.field)
}
