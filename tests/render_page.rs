use folio::config::Theme;
use folio::data::{HighlightsConfig, PortfolioDocument};
use folio::dom::Document;
use folio::filter::{Filter, tag_options};
use folio::layout;
use folio::render::{RenderSummary, Renderer};
use folio::state::AppState;
use folio::view::{PageDescriptor, Variant, bind};

const DOCUMENT: &str = r##"{
    "name": "Rohit",
    "headline": "Data & ML",
    "role": "ML Engineer",
    "summary": "Builds <b>models</b> & dashboards",
    "email": "rohit@example.com",
    "links": {
        "github": "https://github.com/rohit",
        "linkedin": "#",
        "resume": "not a url"
    },
    "skills": [{ "group": "Languages", "items": ["Python", "Rust"] }],
    "highlights": ["Flood prediction API", "Sales dashboard"],
    "projects": [
        {
            "title": "Flood <Prediction>",
            "oneLiner": "Random Forest severity model",
            "tags": ["ml", "api"],
            "highlights": ["FastAPI backend"],
            "links": { "repo": "https://github.com/rohit/flood", "demo": "#", "live": "https://flood.example.com" }
        },
        {
            "title": "Automobile Sales Dashboard",
            "description": "Dash + Plotly KPIs",
            "tags": ["web"],
            "links": { "github": "https://github.com/rohit/dash", "gitlab": "", "report": "javascript:void(0)" }
        },
        { "title": "Untagged Notes" }
    ]
}"##;

fn state(theme: Theme) -> AppState {
    let document: PortfolioDocument = serde_json::from_str(DOCUMENT).expect("document parses");
    AppState::new(Some(document), None, theme)
}

fn render(variant: Variant, state: &AppState, filter: &Filter) -> (Document, Renderer, RenderSummary) {
    let descriptor = PageDescriptor::for_variant(variant);
    let mut document = layout::skeleton(&descriptor);
    let renderer = Renderer::new(bind(&document, &descriptor).expect("skeleton binds"));
    let summary = renderer.render(&mut document, state, filter, 2026);
    (document, renderer, summary)
}

fn grid_titles(document: &Document, grid_id: &str) -> Vec<String> {
    document
        .element(grid_id)
        .expect("grid exists")
        .children()
        .iter()
        .map(|card| {
            card.children()
                .first()
                .map(|title| title.text_content())
                .unwrap_or_default()
        })
        .collect()
}

#[test]
fn renders_profile_fields() {
    let (document, _, summary) = render(Variant::Portfolio, &state(Theme::Dark), &Filter::default());

    assert!(summary.loaded);
    assert_eq!(summary.total_projects, 3);
    assert_eq!(summary.visible_projects, 3);

    let text = |id: &str| document.element(id).map(|el| el.text_content()).unwrap_or_default();
    assert_eq!(text("name"), "Rohit");
    assert_eq!(text("heroRole"), "ML Engineer");
    assert_eq!(text("avatar"), "R");
    assert_eq!(text("location"), "");
    assert_eq!(text("emailLink"), "✉️ rohit@example.com");
    assert_eq!(text("year"), "2026");

    let email = document.element("contactEmail").expect("contact email");
    assert_eq!(email.attr("href"), Some("mailto:rohit@example.com"));
    assert_eq!(email.attr("target"), None);
}

#[test]
fn profile_links_follow_safe_link_policy() {
    let (document, _, _) = render(Variant::Portfolio, &state(Theme::Dark), &Filter::default());

    let github = document.element("githubLink").expect("github link");
    assert_eq!(github.attr("href"), Some("https://github.com/rohit"));
    assert_eq!(github.attr("target"), Some("_blank"));
    assert_eq!(github.attr("rel"), Some("noopener noreferrer"));

    for id in ["linkedinLink", "contactLinkedIn", "resumeLink", "contactResume"] {
        let anchor = document.element(id).expect("anchor exists");
        assert_eq!(anchor.attr("aria-disabled"), Some("true"), "{id}");
        assert_eq!(anchor.attr("href"), None, "{id}");
        assert_eq!(anchor.attr("target"), None, "{id}");
        assert_eq!(anchor.attr("rel"), None, "{id}");
    }
}

#[test]
fn missing_fields_never_render_placeholders_words() {
    let document: PortfolioDocument =
        serde_json::from_str(r#"{ "projects": [{ "tags": [] }] }"#).expect("document parses");
    let state = AppState::new(Some(document), None, Theme::Dark);
    let (page, _, _) = render(Variant::Portfolio, &state, &Filter::default());

    let html = page.to_html();
    assert!(!html.contains("undefined"));
    assert!(!html.contains("null"));
    assert_eq!(page.element("name").map(|el| el.text_content()), Some(String::new()));
}

#[test]
fn escapes_authored_text() {
    let (document, _, _) = render(Variant::Portfolio, &state(Theme::Dark), &Filter::default());
    let html = document.to_html();

    assert!(html.contains("Flood &lt;Prediction&gt;"));
    assert!(html.contains("Builds &lt;b&gt;models&lt;/b&gt; &amp; dashboards"));
    assert!(!html.contains("<Prediction>"));
    assert!(!html.contains("javascript:"));
}

#[test]
fn rendering_twice_is_idempotent() {
    let state = state(Theme::Light);
    let filter = Filter::new(Some("flood"), None);
    let (mut document, renderer, _) = render(Variant::Portfolio, &state, &filter);
    let first = document.clone();

    renderer.render(&mut document, &state, &filter, 2026);
    assert_eq!(document.text_content(), first.text_content());
    assert_eq!(document, first);
}

#[test]
fn tag_filter_scenario() {
    let (document, _, summary) = render(
        Variant::Portfolio,
        &state(Theme::Dark),
        &Filter::new(Some(""), Some("ml")),
    );

    assert_eq!(summary.visible_projects, 1);
    assert_eq!(grid_titles(&document, "projectsGrid"), ["Flood <Prediction>"]);
    assert!(document.element("emptyState").expect("empty state").is_hidden());

    let select = document.element("tagFilter").expect("tag filter");
    let selected = select
        .children()
        .iter()
        .filter(|option| option.attr("selected").is_some())
        .map(|option| option.text_content())
        .collect::<Vec<_>>();
    assert_eq!(selected, ["ml"]);
}

#[test]
fn query_scenario_matches_titles_case_insensitively() {
    let (document, _, _) = render(
        Variant::Portfolio,
        &state(Theme::Dark),
        &Filter::new(Some("DASHBOARD"), Some("All")),
    );
    assert_eq!(grid_titles(&document, "projectsGrid"), ["Automobile Sales Dashboard"]);
}

#[test]
fn unknown_tag_shows_no_results_placeholder() {
    let (document, _, summary) = render(
        Variant::Portfolio,
        &state(Theme::Dark),
        &Filter::new(None, Some("rust")),
    );

    assert_eq!(summary.visible_projects, 0);
    assert!(grid_titles(&document, "projectsGrid").is_empty());
    let empty = document.element("emptyState").expect("empty state");
    assert!(!empty.is_hidden());
    assert!(!empty.has_class("hidden"));
}

#[test]
fn tag_selector_lists_all_then_sorted_tags() {
    let state = state(Theme::Dark);
    let (document, _, _) = render(Variant::Portfolio, &state, &Filter::default());

    let options = document
        .element("tagFilter")
        .expect("tag filter")
        .children()
        .iter()
        .map(|option| option.text_content())
        .collect::<Vec<_>>();
    assert_eq!(options, ["All", "api", "ml", "web"]);
    assert_eq!(options, tag_options(state.projects()));
}

#[test]
fn every_tagged_project_is_found_by_its_tags_and_title() {
    let state = state(Theme::Dark);
    for project in state.projects() {
        for tag in &project.tags {
            let (document, _, _) = render(Variant::Portfolio, &state, &Filter::new(None, Some(tag.as_str())));
            assert!(grid_titles(&document, "projectsGrid").contains(&project.title().to_string()));
        }

        let needle = project.title().to_uppercase();
        let (document, _, _) = render(Variant::Portfolio, &state, &Filter::new(Some(needle.as_str()), None));
        assert!(grid_titles(&document, "projectsGrid").contains(&project.title().to_string()));
    }
}

#[test]
fn showcase_cards_hide_unusable_buttons() {
    let (document, _, _) = render(Variant::Showcase, &state(Theme::Dark), &Filter::default());
    let grid = document.element("projectGrid").expect("showcase grid");
    assert_eq!(grid.children().len(), 3);

    let dashboard = &grid.children()[1];
    let github = &dashboard.find_by_class("project-github")[0];
    assert_eq!(github.attr("href"), Some("https://github.com/rohit/dash"));
    assert!(!github.is_hidden());

    for class in ["project-live", "project-gitlab", "project-report"] {
        let button = &dashboard.find_by_class(class)[0];
        assert!(button.is_hidden(), "{class}");
        assert_eq!(button.attr("aria-disabled"), Some("true"), "{class}");
    }

    let flood = &grid.children()[0];
    let live = &flood.find_by_class("project-live")[0];
    assert_eq!(live.attr("href"), Some("https://flood.example.com/"));
}

#[test]
fn overlay_renders_even_without_profile_document() {
    let overlay: HighlightsConfig = serde_json::from_str(
        r#"{ "spotlight": { "enabled": true, "items": [{ "title": "Flood" }] } }"#,
    )
    .expect("overlay parses");
    let state = AppState::new(None, Some(overlay), Theme::Dark);
    let (document, _, summary) = render(Variant::Showcase, &state, &Filter::default());

    assert!(!summary.loaded);
    assert_eq!(
        document.element("hlSpotTitle").map(|el| el.text_content()),
        Some("Flood".to_string())
    );
    assert_eq!(document.root().attr("data-theme"), Some("dark"));
}
